//! Terminal Tetris runner (default binary).
//!
//! Polls crossterm for keys with a frame-length timeout, feeds the resulting
//! actions and elapsed time into a [`Host`], and redraws the session
//! snapshot through the framebuffer renderer.

use std::fs::File;
use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use log::info;

use brick_tetris::config::Config;
use brick_tetris::core::{GameSession, GameSnapshot};
use brick_tetris::host::Host;
use brick_tetris::input::{handle_key_event, is_restart, should_quit};
use brick_tetris::store::FileHighScore;
use brick_tetris::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use brick_tetris::types::Action;

fn main() -> Result<()> {
    let config = Config::from_env();
    if let Some(path) = &config.log_path {
        init_logging(path)?;
    }
    info!(
        "starting: seed={} record={}",
        config.seed,
        config.record_path.display()
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Route log records to a file; the terminal is owned by the renderer.
fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()?;
    Ok(())
}

fn run(term: &mut TerminalRenderer, config: &Config) -> Result<()> {
    let store = FileHighScore::new(&config.record_path);
    let mut host = Host::new(GameSession::new(config.seed, store));

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();

    let frame = Duration::from_millis(config.frame_ms as u64);
    let mut last_frame = Instant::now();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        host.session().snapshot_into(&mut snap);
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        let timeout = frame.saturating_sub(last_frame.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if is_restart(key) && host.restart() {
                        continue;
                    }
                    if let Some(action) = handle_key_event(key) {
                        host.apply(action);
                        if action == Action::Terminate {
                            return Ok(());
                        }
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        let elapsed = last_frame.elapsed();
        if elapsed >= frame {
            last_frame = Instant::now();
            host.advance(u32::try_from(elapsed.as_millis()).unwrap_or(u32::MAX));
        }
    }
}
