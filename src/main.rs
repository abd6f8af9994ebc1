//! Terminal snake runner (default binary).
//!
//! A synchronous scheduler loop: poll input with a timeout until the next
//! tick boundary, apply commands between ticks, advance the session once
//! per interval, and redraw after anything changes.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_snake::core::{GameConfig, GameSnapshot, Session};
use tui_snake::input::{handle_key_event, handle_speed_key, should_quit};
use tui_snake::store::FileScoreStore;
use tui_snake::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_snake::types::TICK_MS_STEP;

fn main() -> Result<()> {
    let store = FileScoreStore::new(FileScoreStore::default_path());
    // Wall-clock nanos are plenty of entropy for food placement.
    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(1);
    let mut session = Session::new(GameConfig::default(), seed, store)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut session);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, session: &mut Session<FileScoreStore>) -> Result<()> {
    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    let mut last_tick = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        session.snapshot_into(&mut snap);
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        // Input with timeout until next tick.
        let tick_duration = Duration::from_millis(session.tick_ms());
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(steps) = handle_speed_key(key) {
                        let delta = steps * TICK_MS_STEP as i64;
                        let next = session.tick_ms() as i64 + delta;
                        session.set_tick_ms(next.max(0) as u64);
                    }
                    if let Some(command) = handle_key_event(key) {
                        session.handle_command(command);
                    }
                }
            }
        }

        // Tick.
        if last_tick.elapsed() >= Duration::from_millis(session.tick_ms()) {
            last_tick = Instant::now();
            session.tick()?;
        }
    }
}
