//! Terminal falling-block game runner.
//!
//! Single-threaded control loop: drain pending input, fire the gravity tick
//! when the drop interval elapses, render, and cap the iteration rate with
//! the input poll timeout.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use blockfall::config::GameConfig;
use blockfall::core::GameState;
use blockfall::input::{handle_key_event, should_quit};
use blockfall::term::{GameView, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    let config = GameConfig::default().validated()?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, config: &GameConfig) -> Result<()> {
    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(1);
    let mut state = GameState::new(config, seed);
    let view = GameView::default();

    let drop_interval = Duration::from_millis(config.drop_interval_ms);
    let frame_budget = Duration::from_millis(1000 / config.frame_rate as u64);
    let mut last_drop = Instant::now();

    loop {
        // Input: wait up to one frame for the first event, then drain the
        // rest so every queued command lands before the gravity tick.
        if event::poll(frame_budget)? {
            loop {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        if should_quit(key) {
                            return Ok(());
                        }
                        if let Some(action) = handle_key_event(key) {
                            state.apply_action(action);
                        }
                    }
                    Event::Resize(_, _) => term.invalidate(),
                    _ => {}
                }
                if !event::poll(Duration::ZERO)? {
                    break;
                }
            }
        }

        // Gravity.
        if last_drop.elapsed() >= drop_interval {
            state.tick();
            last_drop = Instant::now();
        }

        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let fb = view.render(&state, Viewport::new(w, h));
        term.draw(&fb)?;

        if state.game_over() {
            return Ok(());
        }
    }
}
