//! Core types module - shared vocabulary and constants
//!
//! Pure data types with no external dependencies, shared by the engine, the
//! input layer and the terminal front-end.
//!
//! # Field Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 at the top)
//! - **Spawn position**: (3, 0), the 4x4 template centered horizontally
//!
//! # Scoring and Speed
//!
//! | Lines in one pass | Points |
//! |-------------------|--------|
//! | 1 | 100 |
//! | 2 | 300 |
//! | 3 | 700 |
//! | 4 | 1500 |
//!
//! Level is `1 + (score / 600) % 10` and wraps after level 10. Speed (the
//! gravity tick threshold, in host milliseconds) is `1000 - (level - 1) * 100`.
//!
//! # Examples
//!
//! ```
//! use brick_tetris_types::{Action, PauseState, ShapeKind, FIELD_HEIGHT, FIELD_WIDTH};
//!
//! assert_eq!(ShapeKind::T.color(), 3);
//! assert_eq!(Action::from_str("rotate"), Some(Action::Rotate));
//! assert_eq!(PauseState::GameOver.as_u8(), 2);
//! assert_eq!((FIELD_WIDTH, FIELD_HEIGHT), (10, 20));
//! ```

/// Field dimensions
pub const FIELD_WIDTH: u8 = 10;
pub const FIELD_HEIGHT: u8 = 20;

/// Side length of a piece template
pub const FIGURE_SIZE: usize = 4;

/// Spawn offset of the template's top-left corner
pub const SPAWN_X: i8 = FIELD_WIDTH as i8 / 2 - 2;
pub const SPAWN_Y: i8 = 0;

/// Gravity threshold at level 1 (milliseconds of host time)
pub const BASE_SPEED: u32 = 1000;
/// Speed decrease per level
pub const SPEED_STEP: u32 = 100;
pub const POINTS_PER_LEVEL: u32 = 600;
pub const LEVEL_COUNT: u32 = 10;

/// Points per pass, indexed by lines cleared
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 700, 1500];

/// Host frame length in milliseconds
pub const DEFAULT_FRAME_MS: u32 = 50;

/// Cell color identifier; 0 is an empty cell
pub type Color = u8;

pub const EMPTY: Color = 0;

/// 4x4 occupancy/color template, row-major, row 0 at the top
pub type Matrix = [[Color; FIGURE_SIZE]; FIGURE_SIZE];

/// The seven tetromino shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    I,
    O,
    T,
    J,
    L,
    S,
    Z,
}

impl ShapeKind {
    /// All shapes in color order
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::I,
        ShapeKind::O,
        ShapeKind::T,
        ShapeKind::J,
        ShapeKind::L,
        ShapeKind::S,
        ShapeKind::Z,
    ];

    /// Color identifier applied to every occupied cell of the shape
    pub fn color(&self) -> Color {
        match self {
            ShapeKind::I => 1,
            ShapeKind::O => 2,
            ShapeKind::T => 3,
            ShapeKind::J => 4,
            ShapeKind::L => 5,
            ShapeKind::S => 6,
            ShapeKind::Z => 7,
        }
    }

    pub fn from_color(color: Color) -> Option<Self> {
        match color {
            1..=7 => Self::from_index(usize::from(color) - 1),
            _ => None,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

/// Engine input vocabulary, one per engine call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Start,
    Left,
    Right,
    /// Hard drop: fall to the lowest free row and lock
    Down,
    Rotate,
    Pause,
    Terminate,
    /// Synthetic gravity step emitted by the host clock
    GravityTick,
}

impl Action {
    /// Parse action from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "start" => Some(Action::Start),
            "left" => Some(Action::Left),
            "right" => Some(Action::Right),
            "down" => Some(Action::Down),
            "rotate" => Some(Action::Rotate),
            "pause" => Some(Action::Pause),
            "terminate" => Some(Action::Terminate),
            "gravitytick" | "tick" => Some(Action::GravityTick),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Start => "start",
            Action::Left => "left",
            Action::Right => "right",
            Action::Down => "down",
            Action::Rotate => "rotate",
            Action::Pause => "pause",
            Action::Terminate => "terminate",
            Action::GravityTick => "gravityTick",
        }
    }
}

/// Pause indicator exported to the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PauseState {
    #[default]
    Running,
    Paused,
    GameOver,
}

impl PauseState {
    /// Numeric form: 0 running, 1 paused, 2 game over
    pub fn as_u8(&self) -> u8 {
        match self {
            PauseState::Running => 0,
            PauseState::Paused => 1,
            PauseState::GameOver => 2,
        }
    }
}
