//! Terminal fruit-catcher runner (default binary).
//!
//! Owns the frame loop: render, poll input until the next 16ms boundary,
//! then feed the real elapsed time into the session so gameplay speed does
//! not depend on the frame rate.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use log::{debug, info};

use tui_eureka::core::GameSession;
use tui_eureka::input::{handle_key_event, should_quit};
use tui_eureka::term::{CueSink, FrameBuffer, GameView, TerminalBell, TerminalRenderer, Viewport};
use tui_eureka::types::{GameAction, GameConfig, TICK_MS};

fn main() -> Result<()> {
    env_logger::init();

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let config = GameConfig::default();
    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(1);
    let mut session = GameSession::new(config, seed)?;
    info!("session ready (seed {seed})");

    let view = GameView::default();
    let mut bell = TerminalBell;
    let mut fb = FrameBuffer::new(80, 24);
    let mut show_diagnostics = false;

    let mut last_tick = Instant::now();
    let mut last_frame_ms = TICK_MS;
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let diag = show_diagnostics.then(|| session.diagnostics(last_frame_ms));
        view.render_into(&session, Viewport::new(w, h), diag.as_ref(), &mut fb);
        term.draw(&fb)?;

        // Input with timeout until the next tick boundary.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        match action {
                            GameAction::ToggleDiagnostics => {
                                show_diagnostics = !show_diagnostics;
                            }
                            _ => {
                                let before = session.phase();
                                session.apply_action(action);
                                if session.phase() != before {
                                    info!("phase {:?} -> {:?}", before, session.phase());
                                }
                            }
                        }
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Tick with the real time since the last one.
        if last_tick.elapsed() >= tick_duration {
            let elapsed_ms = last_tick.elapsed().as_millis().min(u128::from(u32::MAX)) as u32;
            last_tick = Instant::now();
            last_frame_ms = elapsed_ms;

            for ev in session.tick(elapsed_ms) {
                debug!("event {ev:?}");
                bell.play(ev.cue())?;
            }
        }
    }
}
