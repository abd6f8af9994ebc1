//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::snapshot::GameSnapshot;
use crate::term::fb::{FrameBuffer, Style};
use crate::types::SessionPhase;

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

/// A lightweight terminal view of the snake game.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self { cell_w: 2 }
    }
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self { cell_w: cell_w.max(1) }
    }

    /// Render into an existing framebuffer, reusing its allocation.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear();

        let board = snap.grid_size.max(0) as u16;
        let board_px_w = board * self.cell_w;
        let frame_w = board_px_w + 2;
        let frame_h = board + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        self.draw_border(fb, start_x, start_y, frame_w, frame_h);

        // Empty board texture.
        for y in 0..board {
            for x in 0..board {
                self.put_cell(fb, start_x, start_y, x, y, '·', ' ', Style::GridDot);
            }
        }

        // Food.
        if let Some(food) = snap.food {
            self.put_cell(
                fb,
                start_x,
                start_y,
                food.pos.x as u16,
                food.pos.y as u16,
                food.kind.glyph(),
                ' ',
                Style::Food,
            );
        }

        // Snake, head first.
        for (i, seg) in snap.snake.iter().enumerate() {
            let style = if i == 0 { Style::SnakeHead } else { Style::SnakeBody };
            self.put_cell(fb, start_x, start_y, seg.x as u16, seg.y as u16, '█', '█', style);
        }

        self.draw_hud(snap, fb, start_x, start_y, frame_w, frame_h);
        self.draw_overlay(snap, fb, start_x, start_y, frame_w, frame_h);
    }

    /// Convenience wrapper allocating a fresh framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn put_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        x: u16,
        y: u16,
        first: char,
        rest: char,
        style: Style,
    ) {
        let px = start_x + 1 + x * self.cell_w;
        let py = start_y + 1 + y;
        fb.put_char(px, py, first, style);
        for dx in 1..self.cell_w {
            fb.put_char(px + dx, py, rest, style);
        }
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        if w < 2 || h < 2 {
            return;
        }
        fb.put_char(x, y, '┌', Style::Border);
        fb.put_char(x + w - 1, y, '┐', Style::Border);
        fb.put_char(x, y + h - 1, '└', Style::Border);
        fb.put_char(x + w - 1, y + h - 1, '┘', Style::Border);
        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', Style::Border);
            fb.put_char(x + dx, y + h - 1, '─', Style::Border);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', Style::Border);
            fb.put_char(x + w - 1, y + dy, '│', Style::Border);
        }
    }

    fn draw_hud(
        &self,
        snap: &GameSnapshot,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        _frame_w: u16,
        frame_h: u16,
    ) {
        let hud = format!("score {:>5}   best {:>5}", snap.score, snap.high_score);
        fb.put_str(start_x, start_y + frame_h, &hud, Style::Hud);

        let help = "arrows/wasd move  p pause  r restart  +/- speed  q quit";
        fb.put_str(start_x, start_y.saturating_sub(1), help, Style::Hud);
    }

    fn draw_overlay(
        &self,
        snap: &GameSnapshot,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
    ) {
        let text = match snap.phase {
            SessionPhase::Running => return,
            SessionPhase::Paused => "PAUSED",
            SessionPhase::GameOver => "GAME OVER - press r",
        };
        let band_w = (text.len() as u16 + 4).min(frame_w);
        let bx = start_x + frame_w.saturating_sub(band_w) / 2;
        let ty = start_y + frame_h / 2;
        fb.fill_rect(bx, ty, band_w, 1, ' ', Style::Overlay);
        let tx = start_x + frame_w.saturating_sub(text.len() as u16) / 2;
        fb.put_str(tx, ty, text, Style::Overlay);
    }
}
