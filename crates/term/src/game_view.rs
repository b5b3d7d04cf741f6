//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! Pure (no I/O), so layout is unit-tested directly.
//!
//! Layout, left to right: the bordered field (each field cell two columns
//! wide), one column gap, then a bordered side panel with level, score, high
//! score, the next-piece preview and a key legend.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Color, PauseState, FIELD_HEIGHT, FIELD_WIDTH, FIGURE_SIZE};

/// Side panel width including its border
pub const PANEL_WIDTH: u16 = 20;

const BACKGROUND: Rgb = Rgb::new(102, 102, 102);
const TEXT: Rgb = Rgb::new(235, 235, 235);

const LEGEND: [&str; 7] = [
    "←→  move",
    "↓   drop",
    "z   rotate",
    "p   pause",
    "esc end game",
    "r   restart",
    "q   quit",
];

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Fill color of a field cell, None for empty.
///
/// The pastel palette of the classic curses front-end.
pub fn cell_color(color: Color) -> Option<Rgb> {
    let rgb = match color {
        1 => Rgb::from_permille(600, 800, 950), // baby blue
        2 => Rgb::from_permille(950, 700, 800), // pink
        3 => Rgb::from_permille(600, 950, 850), // mint
        4 => Rgb::from_permille(800, 750, 950), // lavender
        5 => Rgb::from_permille(950, 800, 700), // peach
        6 => Rgb::from_permille(750, 850, 950), // powder
        7 => Rgb::from_permille(900, 800, 750), // bisque
        _ => return None,
    };
    Some(rgb)
}

pub struct GameView {
    /// Field cell width in terminal columns.
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self { cell_w: 2 }
    }
}

impl GameView {
    /// Width of the bordered field
    pub fn frame_width(&self) -> u16 {
        FIELD_WIDTH as u16 * self.cell_w + 2
    }

    /// Height of the bordered field (and of the panel)
    pub fn frame_height(&self) -> u16 {
        FIELD_HEIGHT as u16 + 2
    }

    /// Total width of field, gap and panel
    pub fn total_width(&self) -> u16 {
        self.frame_width() + 1 + PANEL_WIDTH
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let origin_x = viewport.width.saturating_sub(self.total_width()) / 2;
        let origin_y = viewport.height.saturating_sub(self.frame_height()) / 2;

        self.draw_field(fb, snap, origin_x, origin_y);
        self.draw_panel(fb, snap, origin_x + self.frame_width() + 1, origin_y);

        let overlay = match snap.pause {
            PauseState::Running => None,
            PauseState::Paused => Some("PAUSED"),
            PauseState::GameOver => Some("GAME OVER"),
        };
        if let Some(text) = overlay {
            self.draw_overlay(fb, origin_x, origin_y, text);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_field(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, x0: u16, y0: u16) {
        let border = CellStyle::new(TEXT, BACKGROUND);
        let empty = CellStyle::new(Rgb::new(140, 140, 140), BACKGROUND).dim();

        fb.fill_rect(
            x0 + 1,
            y0 + 1,
            FIELD_WIDTH as u16 * self.cell_w,
            FIELD_HEIGHT as u16,
            '·',
            empty,
        );
        fb.draw_box(x0, y0, self.frame_width(), self.frame_height(), border);

        for (y, row) in snap.field.iter().enumerate() {
            for (x, &color) in row.iter().enumerate() {
                if let Some(rgb) = cell_color(color) {
                    let px = x0 + 1 + x as u16 * self.cell_w;
                    let py = y0 + 1 + y as u16;
                    fb.fill_rect(px, py, self.cell_w, 1, ' ', CellStyle::new(rgb, rgb));
                }
            }
        }
    }

    fn draw_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, x0: u16, y0: u16) {
        let frame = CellStyle::new(TEXT, BACKGROUND);
        let label = CellStyle::new(TEXT, BACKGROUND).bold();
        let hint = CellStyle::new(TEXT, BACKGROUND).dim();

        fb.fill_rect(x0, y0, PANEL_WIDTH, self.frame_height(), ' ', frame);
        fb.draw_box(x0, y0, PANEL_WIDTH, self.frame_height(), frame);

        let text_x = x0 + 2;
        let value_right = x0 + PANEL_WIDTH - 2;

        fb.put_str(text_x, y0 + 1, "level:", label);
        fb.put_u32_right(value_right, y0 + 1, snap.level, frame);
        fb.put_str(text_x, y0 + 3, "score:", label);
        fb.put_u32_right(value_right, y0 + 3, snap.score, frame);
        fb.put_str(text_x, y0 + 4, "high score:", label);
        fb.put_u32_right(value_right, y0 + 4, snap.high_score, frame);

        fb.put_str(text_x, y0 + 6, "next:", label);
        for (i, row) in snap.next.iter().enumerate() {
            for (j, &color) in row.iter().enumerate() {
                if let Some(rgb) = cell_color(color) {
                    let px = text_x + j as u16 * 2;
                    let py = y0 + 8 + i as u16;
                    fb.fill_rect(px, py, 2, 1, ' ', CellStyle::new(rgb, rgb));
                }
            }
        }

        let legend_y = y0 + 8 + FIGURE_SIZE as u16 + 1;
        for (i, line) in LEGEND.iter().enumerate() {
            let y = legend_y + i as u16;
            if y + 1 >= y0 + self.frame_height() {
                break;
            }
            fb.put_str(text_x, y, line, hint);
        }
    }

    fn draw_overlay(&self, fb: &mut FrameBuffer, x0: u16, y0: u16, text: &str) {
        let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
        let text_w = text.chars().count() as u16;
        let x = x0 + self.frame_width().saturating_sub(text_w) / 2;
        let y = y0 + FIELD_HEIGHT as u16 / 2 + 1;
        fb.put_str(x, y, text, style);
    }
}
