//! Session module - the game engine state machine
//!
//! A [`GameSession`] owns the field, the falling piece, the next-piece buffer
//! and the score/level/speed bookkeeping. It advances only through
//! [`GameSession::apply_action`], one action per call.
//!
//! Spawning a piece and settling lines after a lock are transition functions
//! that run inside the call that triggered them, so a caller only ever
//! observes the [`Phase`] values `Start`, `Falling`, `Paused` and `GameOver`.

use log::{debug, info};

use crate::field::Field;
use crate::piece::Piece;
use crate::rng::ShapeGenerator;
use crate::scoring::{level_for_score, line_clear_points, speed_for_level};
use crate::shapes::BLANK;
use crate::snapshot::GameSnapshot;
use crate::store::HighScoreStore;
use crate::types::{Action, Matrix, PauseState, BASE_SPEED, FIELD_HEIGHT};

/// Externally observable state of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Waiting for a start action
    Start,
    Falling,
    Paused,
    /// Terminal until the host restarts the session
    GameOver,
}

impl Phase {
    pub fn pause_state(&self) -> PauseState {
        match self {
            Phase::Start | Phase::Falling => PauseState::Running,
            Phase::Paused => PauseState::Paused,
            Phase::GameOver => PauseState::GameOver,
        }
    }
}

/// Result of handling one action while a piece is falling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Fall {
    /// Still falling (the action may or may not have moved the piece)
    Falling,
    /// The piece can no longer descend; clearing follows
    Landed,
    Paused,
    Terminated,
}

/// Complete game session
#[derive(Debug, Clone)]
pub struct GameSession<S> {
    field: Field,
    /// Live piece, drawn on the field while falling
    current: Option<Piece>,
    next: Matrix,
    shapes: ShapeGenerator,
    score: u32,
    level: u32,
    speed: u32,
    high_score: u32,
    phase: Phase,
    store: S,
}

impl<S: HighScoreStore> GameSession<S> {
    /// Create a session, reading the stored high score once
    pub fn new(seed: u32, mut store: S) -> Self {
        let high_score = store.load().unwrap_or(0);
        let mut shapes = ShapeGenerator::new(seed);
        let next = shapes.next_template();

        Self {
            field: Field::new(),
            current: None,
            next,
            shapes,
            score: 0,
            level: 1,
            speed: BASE_SPEED,
            high_score,
            phase: Phase::Start,
            store,
        }
    }

    /// Reset to a fresh game in the `Start` phase, keeping the high score
    pub fn restart(&mut self) {
        self.field.reset();
        self.current = None;
        self.next = self.shapes.next_template();
        self.score = 0;
        self.level = 1;
        self.speed = BASE_SPEED;
        self.phase = Phase::Start;
        debug!("session restarted");
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn pause_state(&self) -> PauseState {
        self.phase.pause_state()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn speed(&self) -> u32 {
        self.speed
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn next(&self) -> &Matrix {
        &self.next
    }

    pub fn current(&self) -> Option<Piece> {
        self.current
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.field.write_grid(&mut out.field);
        out.next = self.next;
        out.score = self.score;
        out.level = self.level;
        out.speed = self.speed;
        out.high_score = self.high_score;
        out.pause = self.pause_state();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Apply one action and return the phase the session ends up in
    pub fn apply_action(&mut self, action: Action) -> Phase {
        match self.phase {
            Phase::Start => {
                if action == Action::Start {
                    self.spawn();
                }
            }
            Phase::Falling => match self.fall(action) {
                Fall::Falling => {}
                Fall::Landed => {
                    self.clear_lines();
                    self.spawn();
                }
                Fall::Paused => self.phase = Phase::Paused,
                Fall::Terminated => self.game_over(),
            },
            Phase::Paused => {
                if action == Action::Pause {
                    self.phase = Phase::Falling;
                }
            }
            Phase::GameOver => {}
        }
        self.phase
    }

    /// Install the queued piece at the top of the field.
    ///
    /// A spawn that collides immediately ends the game.
    fn spawn(&mut self) {
        let piece = Piece::new(self.next);
        self.next = self.shapes.next_template();

        if piece.collides(&self.field) {
            debug!("spawn blocked for color {}", piece.color);
            self.game_over();
            return;
        }

        self.field.draw_piece(&piece);
        self.current = Some(piece);
        self.phase = Phase::Falling;
        debug!("spawned color {} at ({}, {})", piece.color, piece.x, piece.y);
    }

    fn fall(&mut self, action: Action) -> Fall {
        let Some(piece) = self.current else {
            return Fall::Falling;
        };

        match action {
            Action::Left => {
                self.try_replace(piece, piece.shifted(-1, 0));
                Fall::Falling
            }
            Action::Right => {
                self.try_replace(piece, piece.shifted(1, 0));
                Fall::Falling
            }
            Action::Rotate => {
                self.try_replace(piece, piece.rotated());
                Fall::Falling
            }
            Action::Down => {
                self.hard_drop(piece);
                Fall::Landed
            }
            Action::GravityTick => {
                if self.try_replace(piece, piece.shifted(0, 1)) {
                    Fall::Falling
                } else {
                    Fall::Landed
                }
            }
            Action::Pause => Fall::Paused,
            Action::Terminate => Fall::Terminated,
            Action::Start => Fall::Falling,
        }
    }

    /// Lift the piece off the field, try the candidate, and redraw whichever
    /// of the two is legal. Returns true if the candidate was committed.
    fn try_replace(&mut self, piece: Piece, candidate: Piece) -> bool {
        self.field.erase_piece(&piece);
        let accepted = !candidate.collides(&self.field);
        let placed = if accepted { candidate } else { piece };
        self.field.draw_piece(&placed);
        self.current = Some(placed);
        accepted
    }

    /// Move the piece to the lowest free row and draw it there
    fn hard_drop(&mut self, piece: Piece) {
        self.field.erase_piece(&piece);

        let mut landed = piece;
        for _ in 0..FIELD_HEIGHT {
            let lower = landed.shifted(0, 1);
            if lower.collides(&self.field) {
                break;
            }
            landed = lower;
        }

        self.field.draw_piece(&landed);
        self.current = Some(landed);
        debug!("dropped to row {}", landed.y);
    }

    /// Settle full rows and recompute score, level and speed
    fn clear_lines(&mut self) {
        // The landed piece is part of the field from here on.
        self.current = None;

        let cleared = self.field.clear_full_rows();
        let points = line_clear_points(cleared.len());
        self.score = self.score.saturating_add(points);
        self.level = level_for_score(self.score);
        self.speed = speed_for_level(self.level);

        if !cleared.is_empty() {
            info!(
                "cleared {} line(s) for {} points, score {} level {}",
                cleared.len(),
                points,
                self.score,
                self.level
            );
        }

        self.record_high_score();
    }

    fn record_high_score(&mut self) {
        if self.score > self.high_score {
            self.high_score = self.score;
            self.store.save(self.score);
            info!("new high score {}", self.score);
        }
    }

    /// Enter the terminal phase: persist a beaten record, then blank the
    /// field and the next-piece buffer.
    fn game_over(&mut self) {
        self.record_high_score();
        self.field.reset();
        self.next = BLANK;
        self.current = None;
        self.phase = Phase::GameOver;
        info!("game over with score {} at level {}", self.score, self.level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{rotate, template};
    use crate::store::MemoryHighScore;
    use crate::types::{ShapeKind, FIELD_WIDTH};

    const ALL_ACTIONS: [Action; 8] = [
        Action::Start,
        Action::Left,
        Action::Right,
        Action::Down,
        Action::Rotate,
        Action::Pause,
        Action::Terminate,
        Action::GravityTick,
    ];

    fn session() -> GameSession<MemoryHighScore> {
        GameSession::new(12345, MemoryHighScore::new())
    }

    /// Session in the falling phase with `piece` drawn on the field
    fn falling_with(piece: Piece) -> GameSession<MemoryHighScore> {
        let mut s = session();
        s.field.draw_piece(&piece);
        s.current = Some(piece);
        s.phase = Phase::Falling;
        s
    }

    fn single_cell(x: i8, y: i8) -> Piece {
        let mut m = BLANK;
        m[0][0] = 1;
        Piece::at(m, x, y)
    }

    /// Fill rows `ys` except the listed columns
    fn fill_rows_except(field: &mut Field, ys: &[i8], holes: &[i8]) {
        for &y in ys {
            for x in 0..FIELD_WIDTH as i8 {
                if !holes.contains(&x) {
                    field.set(x, y, 4);
                }
            }
        }
    }

    #[test]
    fn test_new_session() {
        let s = session();
        assert_eq!(s.phase, Phase::Start);
        assert_eq!(s.score, 0);
        assert_eq!(s.level, 1);
        assert_eq!(s.speed, 1000);
        assert_eq!(s.high_score, 0);
        assert!(s.current.is_none());
        assert!(s.field.is_empty());
        assert_ne!(s.next, BLANK);
    }

    #[test]
    fn test_new_session_loads_high_score() {
        let s = GameSession::new(1, MemoryHighScore::with_value(4200));
        assert_eq!(s.high_score(), 4200);
    }

    #[test]
    fn test_start_spawns_queued_piece() {
        let mut s = session();
        let queued = s.next;

        assert_eq!(s.apply_action(Action::Start), Phase::Falling);

        let piece = s.current.unwrap();
        assert_eq!(piece.matrix, queued);
        assert_eq!((piece.x, piece.y), (3, 0));
        for (x, y) in piece.cells() {
            assert_eq!(s.field.get(x, y), Some(piece.color));
        }
        assert_ne!(s.next, BLANK);
    }

    #[test]
    fn test_start_phase_ignores_other_actions() {
        for action in ALL_ACTIONS.into_iter().filter(|&a| a != Action::Start) {
            let mut s = session();
            let field = s.field.clone();
            assert_eq!(s.apply_action(action), Phase::Start, "{:?}", action);
            assert_eq!(s.field, field);
        }
    }

    #[test]
    fn test_move_left_and_right() {
        let mut s = falling_with(Piece::new(template(ShapeKind::T)));

        s.apply_action(Action::Left);
        assert_eq!(s.current.unwrap().x, 2);
        s.apply_action(Action::Right);
        s.apply_action(Action::Right);
        assert_eq!(s.current.unwrap().x, 4);
        assert_eq!(s.phase, Phase::Falling);
    }

    #[test]
    fn test_move_into_wall_reverts() {
        let mut s = falling_with(single_cell(0, 5));
        let before = s.field.clone();

        s.apply_action(Action::Left);

        assert_eq!(s.current.unwrap().x, 0);
        assert_eq!(s.field, before);
    }

    #[test]
    fn test_move_into_locked_cell_reverts() {
        let mut s = falling_with(single_cell(4, 5));
        s.field.set(5, 5, 6);

        s.apply_action(Action::Right);

        assert_eq!(s.current.unwrap().x, 4);
        assert_eq!(s.field.get(4, 5), Some(1));
        assert_eq!(s.field.get(5, 5), Some(6));
    }

    #[test]
    fn test_rotate_commits_when_free() {
        let piece = Piece::at(template(ShapeKind::L), 3, 5);
        let mut s = falling_with(piece);

        s.apply_action(Action::Rotate);

        let rotated = s.current.unwrap();
        assert_eq!(rotated.matrix, rotate(&piece.matrix));
        for (x, y) in rotated.cells() {
            assert_eq!(s.field.get(x, y), Some(piece.color));
        }
        assert_eq!(s.field.cells().iter().filter(|&&c| c != 0).count(), 4);
    }

    #[test]
    fn test_rotate_against_wall_reverts() {
        // Vertical I hugging the left wall; the horizontal orientation would
        // stick out past column 0.
        let vertical = rotate(&template(ShapeKind::I));
        let piece = Piece::at(vertical, -3, 5);
        assert!(!piece.collides(&Field::new()));
        let mut s = falling_with(piece);
        let before = s.field.clone();

        s.apply_action(Action::Rotate);

        assert_eq!(s.current.unwrap().matrix, vertical);
        assert_eq!(s.field, before);
    }

    #[test]
    fn test_rotate_four_times_restores_matrix() {
        let piece = Piece::at(template(ShapeKind::J), 3, 5);
        let mut s = falling_with(piece);
        for _ in 0..4 {
            s.apply_action(Action::Rotate);
        }
        assert_eq!(s.current.unwrap().matrix, piece.matrix);
    }

    #[test]
    fn test_gravity_tick_then_floor_lands() {
        let mut s = falling_with(single_cell(0, 18));

        assert_eq!(s.fall(Action::GravityTick), Fall::Falling);
        assert_eq!(s.current.unwrap().y, 19);
        assert_eq!(s.field.get(0, 19), Some(1));
        assert_eq!(s.field.get(0, 18), Some(0));

        assert_eq!(s.fall(Action::GravityTick), Fall::Landed);
        assert_eq!(s.current.unwrap().y, 19);
        assert_eq!(s.field.get(0, 19), Some(1));
    }

    #[test]
    fn test_gravity_landing_locks_and_spawns() {
        let mut s = falling_with(single_cell(0, 19));

        assert_eq!(s.apply_action(Action::GravityTick), Phase::Falling);

        // The single cell stays locked and a fresh piece is live at the top.
        assert_eq!(s.field.get(0, 19), Some(1));
        assert_eq!(s.current.unwrap().y, 0);
    }

    #[test]
    fn test_hard_drop_lands_on_floor() {
        let mut s = falling_with(Piece::new(template(ShapeKind::I)));

        assert_eq!(s.fall(Action::Down), Fall::Landed);

        assert_eq!(s.current.unwrap().y, 19);
        for x in 3..7 {
            assert_eq!(s.field.get(x, 19), Some(1));
        }
        assert!(s.field.row(0).unwrap().iter().all(|&c| c == 0));
    }

    #[test]
    fn test_hard_drop_lands_on_stack() {
        let mut s = falling_with(Piece::new(template(ShapeKind::I)));
        s.field.set(4, 12, 2);

        s.fall(Action::Down);

        assert_eq!(s.current.unwrap().y, 11);
    }

    #[test]
    fn test_hard_drop_without_lines_spawns_next() {
        let mut s = falling_with(Piece::new(template(ShapeKind::I)));
        let queued = s.next;

        assert_eq!(s.apply_action(Action::Down), Phase::Falling);

        assert_eq!(s.score, 0);
        assert_eq!(s.current.unwrap().matrix, queued);
        for x in 3..7 {
            assert_eq!(s.field.get(x, 19), Some(1));
        }
    }

    #[test]
    fn test_single_line_scores_100() {
        let mut s = falling_with(Piece::new(template(ShapeKind::I)));
        fill_rows_except(&mut s.field, &[19], &[3, 4, 5, 6]);

        s.apply_action(Action::Down);

        assert_eq!(s.score, 100);
        assert!(s.field.row(19).unwrap().iter().all(|&c| c == 0));
    }

    #[test]
    fn test_double_scores_300() {
        // O occupies template columns 1-2, so field columns 4-5 at x = 3.
        let mut s = falling_with(Piece::new(template(ShapeKind::O)));
        fill_rows_except(&mut s.field, &[18, 19], &[4, 5]);

        s.apply_action(Action::Down);

        assert_eq!(s.score, 300);
    }

    #[test]
    fn test_triple_scores_700() {
        // Vertical I occupies template column 3: field column 6 at x = 3.
        let piece = Piece::new(rotate(&template(ShapeKind::I)));
        let mut s = falling_with(piece);
        fill_rows_except(&mut s.field, &[17, 18, 19], &[6]);

        s.apply_action(Action::Down);

        assert_eq!(s.score, 700);
        // The top cell of the I survives and shifts to the floor.
        assert_eq!(s.field.get(6, 19), Some(1));
    }

    #[test]
    fn test_tetris_scores_1500() {
        let piece = Piece::new(rotate(&template(ShapeKind::I)));
        let mut s = falling_with(piece);
        fill_rows_except(&mut s.field, &[16, 17, 18, 19], &[6]);

        s.apply_action(Action::Down);

        assert_eq!(s.score, 1500);
        assert_eq!(s.level, 3);
        assert_eq!(s.speed, 800);
    }

    #[test]
    fn test_clearing_without_full_rows_is_identity() {
        let mut s = session();
        s.field.set(2, 19, 3);
        s.field.set(7, 10, 5);
        let before = s.field.clone();

        s.clear_lines();

        assert_eq!(s.score, 0);
        assert_eq!(s.field, before);
    }

    #[test]
    fn test_level_and_speed_update_after_clear() {
        let mut s = falling_with(Piece::new(template(ShapeKind::I)));
        s.score = 500;
        fill_rows_except(&mut s.field, &[19], &[3, 4, 5, 6]);

        s.apply_action(Action::Down);

        assert_eq!(s.score, 600);
        assert_eq!(s.level, 2);
        assert_eq!(s.speed, 900);
    }

    #[test]
    fn test_level_wraps_after_ten() {
        let mut s = session();
        s.score = 5900;
        s.field.fill_row(19, 2);

        s.clear_lines();

        assert_eq!(s.score, 6000);
        assert_eq!(s.level, 1);
        assert_eq!(s.speed, 1000);
    }

    #[test]
    fn test_new_record_saved_on_clear() {
        let mut s = GameSession::new(3, MemoryHighScore::with_value(50));
        s.field.fill_row(19, 2);

        s.clear_lines();

        assert_eq!(s.high_score, 100);
        assert_eq!(s.store.value(), Some(100));
        assert_eq!(s.store.saves(), 1);
    }

    #[test]
    fn test_record_not_saved_when_not_beaten() {
        let mut s = GameSession::new(3, MemoryHighScore::with_value(5000));
        s.field.fill_row(19, 2);

        s.clear_lines();

        assert_eq!(s.high_score, 5000);
        assert_eq!(s.store.saves(), 0);
    }

    #[test]
    fn test_pause_toggles() {
        let mut s = falling_with(Piece::new(template(ShapeKind::T)));

        assert_eq!(s.apply_action(Action::Pause), Phase::Paused);
        assert_eq!(s.pause_state(), PauseState::Paused);
        assert_eq!(s.apply_action(Action::Pause), Phase::Falling);
        assert_eq!(s.pause_state(), PauseState::Running);
    }

    #[test]
    fn test_paused_ignores_other_actions() {
        let mut s = falling_with(Piece::new(template(ShapeKind::T)));
        s.apply_action(Action::Pause);
        let field = s.field.clone();
        let piece = s.current;

        for action in ALL_ACTIONS.into_iter().filter(|&a| a != Action::Pause) {
            assert_eq!(s.apply_action(action), Phase::Paused, "{:?}", action);
            assert_eq!(s.field, field);
            assert_eq!(s.current, piece);
        }
    }

    #[test]
    fn test_terminate_ends_game() {
        let mut s = falling_with(Piece::new(template(ShapeKind::T)));

        assert_eq!(s.apply_action(Action::Terminate), Phase::GameOver);

        assert_eq!(s.pause_state(), PauseState::GameOver);
        assert!(s.field.is_empty());
        assert_eq!(s.next, BLANK);
        assert!(s.current.is_none());
    }

    #[test]
    fn test_game_over_ignores_every_action() {
        let mut s = falling_with(Piece::new(template(ShapeKind::T)));
        s.apply_action(Action::Terminate);

        for action in ALL_ACTIONS {
            assert_eq!(s.apply_action(action), Phase::GameOver);
            assert!(s.field.is_empty());
            assert_eq!(s.next, BLANK);
        }
    }

    #[test]
    fn test_blocked_spawn_is_game_over() {
        let mut s = session();
        s.field.fill_row(0, 3);
        s.field.fill_row(1, 3);

        assert_eq!(s.apply_action(Action::Start), Phase::GameOver);

        assert_eq!(s.pause_state().as_u8(), 2);
        assert!(s.field.is_empty());
    }

    #[test]
    fn test_game_over_saves_beaten_record() {
        let mut s = falling_with(Piece::new(template(ShapeKind::T)));
        s.score = 555;

        s.apply_action(Action::Terminate);

        assert_eq!(s.store.value(), Some(555));
        assert_eq!(s.high_score, 555);
    }

    #[test]
    fn test_game_over_keeps_record_when_not_beaten() {
        let mut s = GameSession::new(1, MemoryHighScore::with_value(900));
        s.apply_action(Action::Start);
        s.score = 300;

        s.apply_action(Action::Terminate);

        assert_eq!(s.store.saves(), 0);
        assert_eq!(s.high_score, 900);
    }

    #[test]
    fn test_restart_after_game_over() {
        let mut s = falling_with(Piece::new(template(ShapeKind::T)));
        s.score = 1200;
        s.level = 3;
        s.speed = 800;
        s.apply_action(Action::Terminate);

        s.restart();

        assert_eq!(s.phase, Phase::Start);
        assert_eq!((s.score, s.level, s.speed), (0, 1, 1000));
        assert_eq!(s.high_score, 1200);
        assert_ne!(s.next, BLANK);
        assert_eq!(s.apply_action(Action::Start), Phase::Falling);
    }

    #[test]
    fn test_snapshot_is_independent() {
        let mut s = session();
        s.apply_action(Action::Start);

        let mut snap = s.snapshot();
        let original = snap;
        snap.field[19][0] = 7;
        snap.score = 999;
        snap.next = BLANK;

        assert_ne!(snap, original);
        assert_eq!(s.snapshot(), original);
        assert_eq!(s.field.get(0, 19), Some(0));
    }

    #[test]
    fn test_snapshot_mirrors_session() {
        let mut s = GameSession::new(8, MemoryHighScore::with_value(77));
        s.apply_action(Action::Start);
        s.apply_action(Action::Pause);

        let snap = s.snapshot();

        assert_eq!(snap.pause, PauseState::Paused);
        assert_eq!(snap.high_score, 77);
        assert_eq!(snap.next, s.next);
        assert_eq!((snap.score, snap.level, snap.speed), (0, 1, 1000));
        let piece = s.current.unwrap();
        for (x, y) in piece.cells() {
            assert_eq!(snap.field[y as usize][x as usize], piece.color);
        }
    }

    #[test]
    fn test_same_seed_same_game() {
        let mut a = session();
        let mut b = session();
        for _ in 0..30 {
            a.apply_action(Action::Start);
            b.apply_action(Action::Start);
            a.apply_action(Action::Down);
            b.apply_action(Action::Down);
        }
        assert_eq!(a.snapshot(), b.snapshot());
    }

    #[test]
    fn test_stack_to_top_ends_game() {
        let mut s = session();
        s.apply_action(Action::Start);
        for _ in 0..200 {
            if s.apply_action(Action::Down) == Phase::GameOver {
                break;
            }
        }
        assert_eq!(s.phase, Phase::GameOver);
        assert!(s.field.is_empty());
    }
}
