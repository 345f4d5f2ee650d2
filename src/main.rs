mod app;
mod config;
mod logging;
mod timer;
mod ui;

use crate::app::event::AppEvent;
use crate::app::handler;
use crate::app::state::AppState;
use crate::timer::{dispatch, Scheduler, TimerSet};
use anyhow::Result;
use crossterm::{
    event::EventStream,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::prelude::*;
use std::io;
use tokio::sync::mpsc;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Install panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    let cfg = config::load_config()?;
    if let Some(path) = logging::init(&cfg.logging)? {
        info!("Logging to {}", path.display());
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, cfg).await;

    // Restore terminal
    restore_terminal()?;

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    cfg: config::AppConfig,
) -> Result<()> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<AppEvent>();

    let frame_interval = cfg.animation.frame_interval();
    let mut state = AppState::new(cfg);
    let scheduler = Scheduler::new(event_tx.clone());
    let mut timers = TimerSet::new();

    // Spawn terminal input task
    let term_tx = event_tx.clone();
    tokio::spawn(async move {
        let mut reader = EventStream::new();
        loop {
            match reader.next().await {
                Some(Ok(event)) => {
                    if term_tx.send(AppEvent::Terminal(event)).is_err() {
                        break;
                    }
                }
                Some(Err(e)) => {
                    warn!("Terminal input failed: {}", e);
                    break;
                }
                None => break,
            }
        }
    });

    // Spawn frame task (20 FPS by default)
    let frame_tx = event_tx.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(frame_interval);
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
        loop {
            interval.tick().await;
            if frame_tx.send(AppEvent::Frame).is_err() {
                break;
            }
        }
    });

    info!(
        duration_secs = state.session.total_seconds,
        "Star countdown ready"
    );

    // Initial render
    terminal.draw(|f| ui::render(f, &state))?;
    state.dirty = false;

    // Main event loop
    loop {
        let event = event_rx.recv().await;
        let Some(event) = event else { break };

        let actions = handler::handle_event(&mut state, event);

        // Process actions
        if dispatch(actions, &scheduler, &mut timers) {
            state.should_quit = true;
        }

        if state.should_quit {
            timers.cancel_all();
            info!("Quitting");
            break;
        }

        // Conditional render (only if dirty)
        if state.dirty {
            terminal.draw(|f| ui::render(f, &state))?;
            state.dirty = false;
        }
    }

    Ok(())
}
