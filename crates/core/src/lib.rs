//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the game rules and the session state machine. It does
//! no I/O of its own: rendering, input, timing and the on-disk high score all
//! live outside and talk to the engine through [`GameSession::apply_action`],
//! [`GameSession::snapshot`] and the [`HighScoreStore`] port.
//!
//! # Module Structure
//!
//! - [`field`]: 10x20 color grid with bounds queries and line clearing
//! - [`shapes`]: the seven 4x4 templates and clockwise rotation
//! - [`piece`]: the falling piece and collision detection
//! - [`rng`]: seeded uniform next-piece generation
//! - [`scoring`]: points table, level and speed formulas
//! - [`snapshot`]: read-only copy of the session for presentation
//! - [`store`]: high-score persistence port
//! - [`session`]: the state machine tying everything together
//!
//! # Game Rules
//!
//! - **No wall kicks**: a rotation that would collide is silently undone
//! - **Down is a hard drop**: the piece falls to the lowest free row and locks
//! - **Gravity is an action**: the host sends [`Action::GravityTick`] whenever
//!   its clock reaches the session's `speed`
//! - **Scoring**: 100 / 300 / 700 / 1500 for 1-4 lines in one pass
//! - **Levels**: one per 600 points, wrapping after level 10
//!
//! # Example
//!
//! ```
//! use brick_tetris_core::{GameSession, MemoryHighScore, Phase};
//! use brick_tetris_types::Action;
//!
//! let mut game = GameSession::new(12345, MemoryHighScore::new());
//! assert_eq!(game.apply_action(Action::Start), Phase::Falling);
//!
//! game.apply_action(Action::Left);
//! game.apply_action(Action::Rotate);
//! game.apply_action(Action::Down);
//!
//! let snap = game.snapshot();
//! assert_eq!(snap.level, 1);
//! assert!(snap.field[19].iter().any(|&c| c != 0));
//! ```
//!
//! [`Action::GravityTick`]: brick_tetris_types::Action::GravityTick

pub mod field;
pub mod piece;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod shapes;
pub mod snapshot;
pub mod store;

pub use brick_tetris_types as types;

// Re-export commonly used types for convenience
pub use field::Field;
pub use piece::{collides, Piece};
pub use rng::{ShapeGenerator, SimpleRng};
pub use scoring::{level_for_score, line_clear_points, speed_for_level};
pub use session::{GameSession, Phase};
pub use shapes::{rotate, template};
pub use snapshot::GameSnapshot;
pub use store::{HighScoreStore, MemoryHighScore};
