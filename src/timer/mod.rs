//! Scheduled tasks that turn elapsed time into [`AppEvent`]s.
//!
//! Each scheduled task runs on the tokio runtime and reports back over the
//! application's event channel; the event loop never sleeps itself. Every
//! task returns a [`TimerHandle`] so it can be cancelled when the screen goes
//! away.

use crate::app::action::Action;
use crate::app::event::{AppEvent, CycleId};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info};

/// Handle to a running scheduled task.
///
/// Dropping the handle leaves the task running; call [`TimerHandle::cancel`]
/// to stop it.
#[derive(Debug)]
pub struct TimerHandle {
    name: &'static str,
    cycle: CycleId,
    task: JoinHandle<()>,
}

impl TimerHandle {
    /// Stop the task. No further events are sent once this returns to the
    /// runtime. Cancelling a finished task is a no-op.
    pub fn cancel(&self) {
        if !self.task.is_finished() {
            debug!(timer = self.name, cycle = self.cycle, "cancelling timer");
        }
        self.task.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

/// Spawns launch delays and countdowns that report through `event_tx`.
#[derive(Clone)]
pub struct Scheduler {
    event_tx: mpsc::UnboundedSender<AppEvent>,
}

impl Scheduler {
    pub fn new(event_tx: mpsc::UnboundedSender<AppEvent>) -> Self {
        Self { event_tx }
    }

    /// Send [`AppEvent::LaunchElapsed`] once after `delay`.
    pub fn schedule_launch(&self, cycle: CycleId, delay: Duration) -> TimerHandle {
        let tx = self.event_tx.clone();
        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(AppEvent::LaunchElapsed { cycle });
        });
        TimerHandle {
            name: "launch",
            cycle,
            task,
        }
    }

    /// Send `ticks` [`AppEvent::CountdownTick`]s, the first immediately and
    /// then one per `period`, followed by [`AppEvent::CountdownFinished`] one
    /// period after the last tick.
    pub fn start_countdown(&self, cycle: CycleId, ticks: u32, period: Duration) -> TimerHandle {
        let tx = self.event_tx.clone();
        let task = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            for _ in 0..ticks {
                interval.tick().await;
                if tx.send(AppEvent::CountdownTick { cycle }).is_err() {
                    return;
                }
            }
            interval.tick().await;
            let _ = tx.send(AppEvent::CountdownFinished { cycle });
        });
        TimerHandle {
            name: "countdown",
            cycle,
            task,
        }
    }
}

/// The timers a screen currently owns.
#[derive(Debug, Default)]
pub struct TimerSet {
    handles: Vec<TimerHandle>,
}

impl TimerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn track(&mut self, handle: TimerHandle) {
        self.handles.retain(|h| !h.is_finished());
        self.handles.push(handle);
    }

    pub fn cancel_all(&mut self) {
        for handle in self.handles.drain(..) {
            handle.cancel();
        }
    }

    pub fn live(&self) -> usize {
        self.handles.iter().filter(|h| !h.is_finished()).count()
    }
}

/// Carry out the timer side of `actions`. Returns `true` if one of them asked
/// to quit.
pub fn dispatch(actions: Vec<Action>, scheduler: &Scheduler, timers: &mut TimerSet) -> bool {
    let mut quit = false;
    for action in actions {
        match action {
            Action::ScheduleLaunch { cycle, delay } => {
                timers.track(scheduler.schedule_launch(cycle, delay));
                debug!(cycle, live = timers.live(), "launch scheduled");
            }
            Action::StartCountdown {
                cycle,
                ticks,
                period,
            } => {
                timers.track(scheduler.start_countdown(cycle, ticks, period));
                debug!(cycle, live = timers.live(), "countdown started");
            }
            Action::CancelTimers => {
                info!(live = timers.live(), "cancelling timers");
                timers.cancel_all();
            }
            Action::Quit => quit = true,
        }
    }
    quit
}
