//! Terminal flatris (default binary).
//!
//! Renders with the framebuffer renderer in `flatris-term` and reads keys with
//! crossterm. Input is polled until the next frame is due, then the session
//! advances one frame.

use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event};
use tracing::{info, warn};

use flatris::core::GameState;
use flatris::engine::Session;
use flatris::input::{handle_key_event, is_press, should_quit};
use flatris::logging::{self, LogTarget};
use flatris::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use flatris::{Config, TuiArgs};

fn main() -> Result<()> {
    let TuiArgs { config } = TuiArgs::parse();
    // The terminal belongs to the renderer; log only when a file is given.
    logging::init(LogTarget::from_path(config.log_path.clone(), LogTarget::Off))?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let restored = term.exit();
    if let Err(err) = &restored {
        warn!(error = %err, "failed to restore terminal");
    }
    result?;
    restored
}

fn run(term: &mut TerminalRenderer, config: &Config) -> Result<()> {
    let seed = config.seed_or_clock();
    info!(seed, frame_ms = config.frame_ms, "starting");

    let start = Instant::now();
    let now_ms = || start.elapsed().as_millis() as u64;

    let mut session = Session::new(GameState::new(seed), now_ms());
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let frame = config.frame_duration();
    let mut next_frame = start + frame;

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&session.state().snapshot(), Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input until the next frame is due.
        loop {
            let timeout = next_frame.saturating_duration_since(Instant::now());
            if !event::poll(timeout)? {
                break;
            }
            match event::read()? {
                Event::Key(key) if is_press(key) => {
                    if should_quit(key) {
                        info!(
                            score = session.state().score(),
                            lines = session.state().lines(),
                            "quit"
                        );
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        session.handle(action, now_ms());
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        session.frame(now_ms());

        next_frame += frame;
        let now = Instant::now();
        if next_frame < now {
            // Fell behind (suspended, slow terminal): skip the missed frames.
            next_frame = now + frame;
        }
    }
}
