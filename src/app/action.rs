use crate::app::event::CycleId;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    ScheduleLaunch { cycle: CycleId, delay: Duration },
    StartCountdown { cycle: CycleId, ticks: u32, period: Duration },
    CancelTimers,
    Quit,
}
