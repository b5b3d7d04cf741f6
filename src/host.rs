//! Host-side driver: pairs a session with its gravity clock.
//!
//! The terminal loop in `main` does I/O only and forwards keys and elapsed
//! frame time here.

use log::debug;

use crate::core::{GameSession, HighScoreStore, Phase};
use crate::input::GravityClock;
use crate::types::Action;

pub struct Host<S> {
    session: GameSession<S>,
    gravity: GravityClock,
}

impl<S: HighScoreStore> Host<S> {
    /// Wrap a session and start it, as the classic front-end does on launch
    pub fn new(mut session: GameSession<S>) -> Self {
        session.apply_action(Action::Start);
        Self {
            session,
            gravity: GravityClock::new(),
        }
    }

    pub fn session(&self) -> &GameSession<S> {
        &self.session
    }

    /// Forward a player action.
    ///
    /// Any phase change (pause, resume, start, game over) discards time
    /// accumulated towards the next gravity tick.
    pub fn apply(&mut self, action: Action) -> Phase {
        let before = self.session.phase();
        let after = self.session.apply_action(action);
        if after != before {
            debug!(
                "{} moved phase {:?} -> {:?} (pause code {})",
                action.as_str(),
                before,
                after,
                after.pause_state().as_u8()
            );
            self.gravity.reset();
        }
        after
    }

    /// Start a new game; only honored after game over
    pub fn restart(&mut self) -> bool {
        if self.session.phase() != Phase::GameOver {
            return false;
        }
        self.session.restart();
        self.gravity.reset();
        self.session.apply_action(Action::Start);
        true
    }

    /// Advance the gravity clock by one frame's worth of time.
    /// The clock only runs while a piece is falling.
    pub fn advance(&mut self, elapsed_ms: u32) -> Phase {
        if self.session.phase() == Phase::Falling {
            if let Some(tick) = self.gravity.advance(elapsed_ms, self.session.speed()) {
                return self.session.apply_action(tick);
            }
        }
        self.session.phase()
    }
}
