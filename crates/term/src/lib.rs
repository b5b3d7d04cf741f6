//! Terminal presentation for the tetris engine.
//!
//! Snapshots are laid out into a simple framebuffer by [`GameView`] and then
//! flushed by [`TerminalRenderer`]. Nothing here mutates game state.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use brick_tetris_core as core;
pub use brick_tetris_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{cell_color, GameView, Viewport, PANEL_WIDTH};
pub use renderer::{encode_frame, TerminalRenderer};
