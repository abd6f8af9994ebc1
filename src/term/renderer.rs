//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! Full redraws only; frames are small (one game board plus a HUD line) so
//! diffing is not worth its complexity here. Commands are queued into an
//! internal buffer and written with a single flush per frame.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::term::fb::{FrameBuffer, Style};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    buf: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Draw one full frame.
    pub fn draw(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.buf.clear();
        encode_frame_into(fb, &mut self.buf)?;
        self.flush_buf()
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode a full-frame redraw into `out` without touching stdout.
pub fn encode_frame_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(cursor::MoveTo(0, 0))?;

    let mut current: Option<Style> = None;
    for y in 0..fb.height() {
        out.queue(cursor::MoveTo(0, y))?;
        for cell in fb.row(y) {
            if current != Some(cell.style) {
                apply_style_into(out, cell.style)?;
                current = Some(cell.style);
            }
            out.queue(Print(cell.ch))?;
        }
    }

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

fn apply_style_into(out: &mut Vec<u8>, style: Style) -> Result<()> {
    let (fg, bg) = colors_for(style);
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(SetForegroundColor(fg))?;
    out.queue(SetBackgroundColor(bg))?;
    match style {
        Style::SnakeHead | Style::Overlay => {
            out.queue(SetAttribute(Attribute::Bold))?;
        }
        Style::GridDot => {
            out.queue(SetAttribute(Attribute::Dim))?;
        }
        _ => {}
    }
    Ok(())
}

/// Semantic style → terminal color pair.
fn colors_for(style: Style) -> (Color, Color) {
    let board_bg = Color::Rgb { r: 24, g: 26, b: 34 };
    match style {
        Style::Default => (Color::Rgb { r: 200, g: 200, b: 200 }, Color::Black),
        Style::Border => (Color::Rgb { r: 190, g: 190, b: 190 }, Color::Black),
        Style::GridDot => (Color::Rgb { r: 70, g: 74, b: 86 }, board_bg),
        Style::SnakeHead => (Color::Rgb { r: 120, g: 230, b: 120 }, board_bg),
        Style::SnakeBody => (Color::Rgb { r: 70, g: 180, b: 90 }, board_bg),
        Style::Food => (Color::Rgb { r: 235, g: 110, b: 100 }, board_bg),
        Style::Hud => (Color::Rgb { r: 220, g: 220, b: 160 }, Color::Black),
        Style::Overlay => (Color::Rgb { r: 250, g: 250, b: 250 }, Color::Rgb { r: 90, g: 40, b: 40 }),
    }
}
