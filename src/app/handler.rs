use crate::app::action::Action;
use crate::app::event::{AppEvent, CycleId};
use crate::app::state::*;
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Instant;
use tracing::{debug, info};

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    state.advance_clock(Instant::now());
    match event {
        AppEvent::Terminal(cevent) => handle_terminal(state, cevent),
        AppEvent::LaunchElapsed { cycle } => {
            if is_current(state, cycle, SessionPhase::Launching, "launch") {
                state.set_session(state.session.launch());
                info!(cycle, "countdown launched");
                return vec![Action::StartCountdown {
                    cycle,
                    ticks: state.session.total_seconds,
                    period: state.config.countdown.tick_interval(),
                }];
            }
            vec![]
        }
        AppEvent::CountdownTick { cycle } => {
            if is_current(state, cycle, SessionPhase::Counting, "tick") {
                state.set_session(state.session.tick());
                debug!(cycle, remaining = state.session.remaining_seconds, "tick");
            }
            vec![]
        }
        AppEvent::CountdownFinished { cycle } => {
            if is_current(state, cycle, SessionPhase::Counting, "finish") {
                state.set_session(state.session.finish());
                info!(cycle, "countdown finished");
            }
            vec![]
        }
        AppEvent::Frame => {
            if state.is_animating() {
                state.dirty = true;
            }
            vec![]
        }
    }
}

/// Timer events from a superseded cycle, or arriving in the wrong phase, are
/// dropped.
fn is_current(state: &AppState, cycle: CycleId, phase: SessionPhase, what: &str) -> bool {
    let current = state.session.cycle == cycle && state.session.phase() == phase;
    if !current {
        debug!(
            cycle,
            current_cycle = state.session.cycle,
            phase = ?state.session.phase(),
            "ignoring stale {} event",
            what
        );
    }
    current
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) => handle_key(state, key),
        CEvent::Resize(_, _) => {
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    // Windows reports releases too
    if key.kind != KeyEventKind::Press {
        return vec![];
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::CancelTimers, Action::Quit];
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => vec![Action::CancelTimers, Action::Quit],
        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('t') => press_button(state),
        _ => vec![],
    }
}

fn press_button(state: &mut AppState) -> Vec<Action> {
    let Some(next) = state.session.start() else {
        debug!(phase = ?state.session.phase(), "start ignored, countdown already running");
        return vec![];
    };
    state.set_session(next);
    info!(cycle = next.cycle, "take off pressed");
    vec![Action::ScheduleLaunch {
        cycle: next.cycle,
        delay: state.config.countdown.launch_delay(),
    }]
}
