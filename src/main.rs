//! Terminal crossing runner (default binary).
//!
//! This is the primary gameplay entrypoint.
//! It uses crossterm for input and a custom framebuffer-based renderer
//! (no widget/layout library).

use std::fs::File;
use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};

use tui_crossing::config::AppConfig;
use tui_crossing::core::{persist_on_game_over, GameSession, GameSnapshot, ScoreStore};
use tui_crossing::input::{gated_action, should_quit};
use tui_crossing::storage::JsonScoreStore;
use tui_crossing::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    let config = AppConfig::parse();
    init_logging(config.log.as_deref())?;

    let store = JsonScoreStore::new(config.resolved_best_score_path()?);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config, store);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// The terminal belongs to the game, so logs only go to a file when asked.
fn init_logging(path: Option<&Path>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = File::create(path).with_context(|| format!("open log file {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, config: &AppConfig, mut store: JsonScoreStore) -> Result<()> {
    let seed = config.resolved_seed();
    let best = store.load_best_score();
    log::info!(
        "starting: seed {} best {} ({})",
        seed,
        best,
        store.path().display()
    );
    let mut session = GameSession::new(seed).with_best_score(best);

    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(u64::from(config.tick_ms));

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        session.snapshot_into(&mut snap);
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    // `snap` is the frame the player is looking at.
                    if let Some(action) = gated_action(key, snap.playable(), snap.game_over) {
                        session.apply_action(action);
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            session.tick(config.tick_ms);
        }

        if let Some(event) = session.take_last_event() {
            if let Err(err) = persist_on_game_over(&mut store, &event) {
                log::warn!("could not save best score: {err:#}");
            }
        }
    }
}
