//! Terminal Tetris runner (default binary).
//!
//! This is the primary gameplay entrypoint.
//! It uses crossterm for input and a custom framebuffer-based renderer
//! (no ratatui widgets/layout).
//!
//! Logging is off unless `RUST_LOG` is set, in which case records go to
//! `arcade-tetris.log` so they never draw over the game.

use std::fs::File;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use crossterm::event::{self, Event};

use arcade_tetris::core::{GameSnapshot, GameState};
use arcade_tetris::highscore::{HighScore, HIGH_SCORE_FILE};
use arcade_tetris::input::{handle_key_event, should_quit};
use arcade_tetris::term::{FrameBuffer, GameView, SoundBoard, TerminalRenderer, Viewport};
use arcade_tetris::types::{GameEvent, TICK_MS};

const LOG_FILE: &str = "arcade-tetris.log";

fn main() -> Result<()> {
    init_logging()?;

    let mut term = TerminalRenderer::new();
    let result = term.enter().and_then(|()| run(&mut term));

    // Always try to restore terminal state.
    if let Err(err) = term.exit() {
        log::warn!("failed to restore terminal: {err:#}");
    }
    result
}

fn init_logging() -> Result<()> {
    if std::env::var_os("RUST_LOG").is_none() {
        return Ok(());
    }
    let file = File::create(LOG_FILE).with_context(|| format!("failed to create {LOG_FILE}"))?;
    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let seed = clock_seed();
    log::info!("starting, seed {seed}");

    let mut game_state = GameState::new(seed);
    let mut high_score = HighScore::load(HIGH_SCORE_FILE);
    let mut sounds = SoundBoard::new();

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        game_state.snapshot_into(&mut snap);
        view.render_into_with_best(&snap, Some(high_score.best()), Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration.saturating_sub(last_tick.elapsed());

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if should_quit(key) {
                        log::info!("quit at score {}", game_state.score());
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        let phase = game_state.phase();
                        if game_state.apply_action(action) && game_state.phase() != phase {
                            log::debug!(
                                "{} -> {} on {}",
                                phase.as_str(),
                                game_state.phase().as_str(),
                                action.as_str()
                            );
                        }
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        let elapsed = last_tick.elapsed();
        if elapsed >= tick_duration {
            last_tick = Instant::now();
            let elapsed_ms = u32::try_from(elapsed.as_millis()).unwrap_or(u32::MAX);
            game_state.tick(elapsed_ms);
        }

        let events = game_state.take_events();
        sounds.play_events(&events);
        if events.contains(&GameEvent::GameOver) {
            match high_score.submit(game_state.score()) {
                Ok(true) => log::info!("saved high score to {}", high_score.path().display()),
                Ok(false) => {}
                Err(err) => log::warn!("could not save high score: {err:#}"),
            }
        }
    }
}
