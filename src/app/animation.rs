//! Pulse and fade timing.
//!
//! Everything here is a pure function of elapsed time so the renderer can ask
//! "what does this look like right now" without owning any timers.

use std::time::Duration;

/// Intensity an element starts from when it fades in.
pub const FADE_IN_INITIAL: f32 = 0.4;

/// Whether a repeating pulse is in its "on" half.
///
/// The pulse restarts every `period`; it is on for the first half of each
/// period, boundary included.
pub fn pulse_on(elapsed: Duration, period: Duration) -> bool {
    let period_ms = period.as_millis();
    if period_ms == 0 {
        return false;
    }
    let phase = elapsed.as_millis() % period_ms;
    phase * 2 <= period_ms
}

/// Intensity in `0.0..=1.0` of an element that fades in and out.
///
/// `since_change` is the time since visibility last flipped, or `None` if it
/// never did (the element then sits at its resting level).
pub fn fade_level(
    visible: bool,
    since_change: Option<Duration>,
    fade_in: Duration,
    fade_out: Duration,
) -> f32 {
    let Some(since) = since_change else {
        return if visible { 1.0 } else { 0.0 };
    };
    if visible {
        FADE_IN_INITIAL + (1.0 - FADE_IN_INITIAL) * progress(since, fade_in)
    } else {
        1.0 - progress(since, fade_out)
    }
}

fn progress(since: Duration, total: Duration) -> f32 {
    if total.is_zero() || since >= total {
        return 1.0;
    }
    since.as_secs_f32() / total.as_secs_f32()
}

/// True while a fade started `since_change` ago is still running.
pub fn fade_running(since_change: Option<Duration>, duration: Duration) -> bool {
    since_change.is_some_and(|since| since < duration)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn test_pulse_first_half_is_on() {
        let period = ms(400);
        assert!(pulse_on(ms(0), period));
        assert!(pulse_on(ms(199), period));
        assert!(pulse_on(ms(200), period));
        assert!(!pulse_on(ms(201), period));
        assert!(!pulse_on(ms(399), period));
        assert!(pulse_on(ms(400), period));
        assert!(pulse_on(ms(1000), period));
        assert!(!pulse_on(ms(1100), period));
    }

    #[test]
    fn test_pulse_odd_period() {
        // 721ms: on through 360ms, off from 361ms
        assert!(pulse_on(ms(360), ms(721)));
        assert!(!pulse_on(ms(361), ms(721)));
        assert!(pulse_on(ms(721 + 10), ms(721)));
    }

    #[test]
    fn test_pulse_zero_period_is_off() {
        assert!(!pulse_on(ms(0), Duration::ZERO));
    }

    #[test]
    fn test_fade_resting_levels() {
        assert_eq!(fade_level(true, None, ms(300), ms(1000)), 1.0);
        assert_eq!(fade_level(false, None, ms(300), ms(1000)), 0.0);
    }

    #[test]
    fn test_fade_in_starts_dim() {
        let start = fade_level(true, Some(ms(0)), ms(300), ms(1000));
        assert!((start - FADE_IN_INITIAL).abs() < f32::EPSILON);
        let mid = fade_level(true, Some(ms(150)), ms(300), ms(1000));
        assert!((mid - 0.7).abs() < 1e-4);
        assert_eq!(fade_level(true, Some(ms(300)), ms(300), ms(1000)), 1.0);
    }

    #[test]
    fn test_fade_out_reaches_zero() {
        assert_eq!(fade_level(false, Some(ms(0)), ms(300), ms(1000)), 1.0);
        let mid = fade_level(false, Some(ms(500)), ms(300), ms(1000));
        assert!((mid - 0.5).abs() < 1e-4);
        assert_eq!(fade_level(false, Some(ms(1500)), ms(300), ms(1000)), 0.0);
        assert_eq!(fade_level(false, Some(ms(10)), ms(300), Duration::ZERO), 0.0);
    }

    #[test]
    fn test_fade_running() {
        assert!(!fade_running(None, ms(300)));
        assert!(fade_running(Some(ms(100)), ms(300)));
        assert!(!fade_running(Some(ms(300)), ms(300)));
    }
}
