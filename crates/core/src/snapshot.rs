use crate::shapes::BLANK;
use crate::types::{Color, Matrix, PauseState, BASE_SPEED, FIELD_HEIGHT, FIELD_WIDTH};

pub type Grid = [[Color; FIELD_WIDTH as usize]; FIELD_HEIGHT as usize];

/// Read-only copy of the session for presentation.
///
/// Plain `Copy` data: editing a snapshot never reaches the session it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub field: Grid,
    pub next: Matrix,
    pub score: u32,
    pub level: u32,
    pub speed: u32,
    pub high_score: u32,
    pub pause: PauseState,
}

impl GameSnapshot {
    pub fn game_over(&self) -> bool {
        self.pause == PauseState::GameOver
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            field: [[0; FIELD_WIDTH as usize]; FIELD_HEIGHT as usize],
            next: BLANK,
            score: 0,
            level: 1,
            speed: BASE_SPEED,
            high_score: 0,
            pause: PauseState::Running,
        }
    }
}
