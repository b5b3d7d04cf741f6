//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::Action`] values and
//! provides the gravity clock the host uses to synthesize gravity ticks.

pub mod gravity;
pub mod map;

pub use brick_tetris_types as types;

pub use gravity::GravityClock;
pub use map::{handle_key_event, is_restart, should_quit};
