//! Brick Tetris (workspace facade crate).
//!
//! Re-exports the workspace crates as `brick_tetris::{types, core, store, input, term}`
//! and hosts the runtime configuration and frame driver of the terminal binary.

pub mod config;
pub mod host;

pub use brick_tetris_core as core;
pub use brick_tetris_input as input;
pub use brick_tetris_store as store;
pub use brick_tetris_term as term;
pub use brick_tetris_types as types;
