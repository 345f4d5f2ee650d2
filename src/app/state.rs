use crate::app::animation;
use crate::app::event::CycleId;
use crate::config::AppConfig;
use std::time::{Duration, Instant};

/// Where a session is in its cycle, derived from its flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Button shown, waiting for a press.
    Idle,
    /// Button pressed, countdown not yet on screen.
    Launching,
    /// Countdown on screen and ticking.
    Counting,
}

/// One countdown cycle's worth of screen state.
///
/// Transitions never mutate in place; each returns the next session so the
/// caller decides when to commit it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerSession {
    pub total_seconds: u32,
    pub remaining_seconds: u32,
    pub button_visible: bool,
    pub countdown_visible: bool,
    pub animation_active: bool,
    pub stars_visible: bool,
    pub cycle: CycleId,
}

impl TimerSession {
    pub fn new(total_seconds: u32) -> Self {
        Self {
            total_seconds,
            remaining_seconds: total_seconds,
            button_visible: true,
            countdown_visible: false,
            animation_active: false,
            stars_visible: false,
            cycle: 0,
        }
    }

    pub fn phase(&self) -> SessionPhase {
        if self.button_visible {
            SessionPhase::Idle
        } else if self.countdown_visible {
            SessionPhase::Counting
        } else {
            SessionPhase::Launching
        }
    }

    /// Hide the button and open a new cycle. `None` while a cycle is already
    /// under way.
    pub fn start(&self) -> Option<Self> {
        if !self.button_visible {
            return None;
        }
        Some(Self {
            button_visible: false,
            cycle: self.cycle.wrapping_add(1),
            ..*self
        })
    }

    /// Bring the countdown, stars and animation on screen together.
    pub fn launch(&self) -> Self {
        Self {
            countdown_visible: true,
            stars_visible: true,
            animation_active: true,
            ..*self
        }
    }

    pub fn tick(&self) -> Self {
        Self {
            remaining_seconds: self.remaining_seconds.saturating_sub(1),
            ..*self
        }
    }

    /// Back to the initial screen, keeping the cycle counter.
    pub fn finish(&self) -> Self {
        Self {
            cycle: self.cycle,
            ..Self::new(self.total_seconds)
        }
    }
}

impl Default for TimerSession {
    fn default() -> Self {
        Self::new(10)
    }
}

pub struct AppState {
    pub config: AppConfig,
    pub session: TimerSession,
    /// Animation clock, advanced by the event loop.
    pub now: Instant,
    pub button_changed_at: Option<Instant>,
    pub countdown_changed_at: Option<Instant>,
    pub stars_changed_at: Option<Instant>,
    pub animation_started_at: Option<Instant>,
    pub should_quit: bool,
    pub dirty: bool,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let session = TimerSession::new(config.countdown.duration_secs);
        Self {
            config,
            session,
            now: Instant::now(),
            button_changed_at: None,
            countdown_changed_at: None,
            stars_changed_at: None,
            animation_started_at: None,
            should_quit: false,
            dirty: true,
        }
    }

    pub fn advance_clock(&mut self, now: Instant) {
        if now > self.now {
            self.now = now;
        }
    }

    /// Commit a new session, stamping any visibility flips with the current
    /// clock so the view can fade them.
    pub fn set_session(&mut self, next: TimerSession) {
        let prev = self.session;
        if prev.button_visible != next.button_visible {
            self.button_changed_at = Some(self.now);
        }
        if prev.countdown_visible != next.countdown_visible {
            self.countdown_changed_at = Some(self.now);
        }
        if prev.stars_visible != next.stars_visible {
            self.stars_changed_at = Some(self.now);
        }
        if prev.animation_active != next.animation_active {
            self.animation_started_at = next.animation_active.then_some(self.now);
        }
        if prev != next {
            self.dirty = true;
        }
        self.session = next;
    }

    pub fn since(&self, at: Option<Instant>) -> Option<Duration> {
        at.map(|t| self.now.saturating_duration_since(t))
    }

    /// Time since the pulse animations started, `None` when they are off.
    pub fn animation_elapsed(&self) -> Option<Duration> {
        if !self.session.animation_active {
            return None;
        }
        self.since(self.animation_started_at)
    }

    pub fn fade_in(&self) -> Duration {
        Duration::from_millis(self.config.animation.fade_in_ms)
    }

    pub fn fade_out(&self) -> Duration {
        Duration::from_millis(self.config.animation.fade_out_ms)
    }

    pub fn button_level(&self) -> f32 {
        animation::fade_level(
            self.session.button_visible,
            self.since(self.button_changed_at),
            self.fade_in(),
            self.fade_out(),
        )
    }

    pub fn countdown_level(&self) -> f32 {
        animation::fade_level(
            self.session.countdown_visible,
            self.since(self.countdown_changed_at),
            self.fade_in(),
            self.fade_out(),
        )
    }

    pub fn stars_level(&self) -> f32 {
        animation::fade_level(
            self.session.stars_visible,
            self.since(self.stars_changed_at),
            self.fade_in(),
            self.fade_out(),
        )
    }

    /// Whether the next frame would look different from the last one.
    pub fn is_animating(&self) -> bool {
        let longest = self.fade_in().max(self.fade_out());
        self.session.animation_active
            || animation::fade_running(self.since(self.button_changed_at), longest)
            || animation::fade_running(self.since(self.countdown_changed_at), longest)
            || animation::fade_running(self.since(self.stars_changed_at), longest)
    }

    pub fn status_line(&self) -> String {
        match self.session.phase() {
            SessionPhase::Idle => "Ready".to_string(),
            SessionPhase::Launching => "Launching...".to_string(),
            SessionPhase::Counting => format!(
                "T-{} of {}",
                self.session.remaining_seconds, self.session.total_seconds
            ),
        }
    }
}
