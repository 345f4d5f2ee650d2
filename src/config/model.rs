//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a sensible default so the application works out of the box.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Root application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub countdown: CountdownConfig,
    #[serde(default)]
    pub animation: AnimationConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("countdown.duration_secs must be at least 1")]
    ZeroDuration,
    #[error("{0} must be greater than zero")]
    ZeroInterval(&'static str),
    #[error("animation.star_periods_ms[{0}] must be greater than zero")]
    ZeroStarPeriod(usize),
}

impl AppConfig {
    /// Reject values that would make the timers spin or never fire.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.countdown.duration_secs == 0 {
            return Err(ConfigError::ZeroDuration);
        }
        if self.countdown.tick_interval_ms == 0 {
            return Err(ConfigError::ZeroInterval("countdown.tick_interval_ms"));
        }
        if self.animation.planet_period_ms == 0 {
            return Err(ConfigError::ZeroInterval("animation.planet_period_ms"));
        }
        if self.animation.frame_interval_ms == 0 {
            return Err(ConfigError::ZeroInterval("animation.frame_interval_ms"));
        }
        if let Some(idx) = self.animation.star_periods_ms.iter().position(|p| *p == 0) {
            return Err(ConfigError::ZeroStarPeriod(idx));
        }
        Ok(())
    }
}

/// Countdown length and pacing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountdownConfig {
    #[serde(default = "default_duration_secs")]
    pub duration_secs: u32,
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,
    #[serde(default = "default_launch_delay_ms")]
    pub launch_delay_ms: u64,
}

impl CountdownConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub fn launch_delay(&self) -> Duration {
        Duration::from_millis(self.launch_delay_ms)
    }
}

impl Default for CountdownConfig {
    fn default() -> Self {
        Self {
            duration_secs: default_duration_secs(),
            tick_interval_ms: default_tick_interval_ms(),
            launch_delay_ms: default_launch_delay_ms(),
        }
    }
}

/// Pulse periods for the stars and planet, plus fade timings.
///
/// The four star periods are laid out top, left, right, bottom.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationConfig {
    #[serde(default = "default_star_periods_ms")]
    pub star_periods_ms: [u64; 4],
    #[serde(default = "default_planet_period_ms")]
    pub planet_period_ms: u64,
    #[serde(default = "default_frame_interval_ms")]
    pub frame_interval_ms: u64,
    #[serde(default = "default_fade_in_ms")]
    pub fade_in_ms: u64,
    #[serde(default = "default_fade_out_ms")]
    pub fade_out_ms: u64,
}

impl AnimationConfig {
    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            star_periods_ms: default_star_periods_ms(),
            planet_period_ms: default_planet_period_ms(),
            frame_interval_ms: default_frame_interval_ms(),
            fade_in_ms: default_fade_in_ms(),
            fade_out_ms: default_fade_out_ms(),
        }
    }
}

/// Screen labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_button_label")]
    pub button_label: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            button_label: default_button_label(),
        }
    }
}

/// Diagnostic log settings. The terminal belongs to the UI, so logs go to a
/// file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_dir: default_log_dir(),
            level: default_log_level(),
        }
    }
}

fn default_duration_secs() -> u32 {
    10
}
fn default_tick_interval_ms() -> u64 {
    1000
}
fn default_launch_delay_ms() -> u64 {
    1000
}
fn default_star_periods_ms() -> [u64; 4] {
    [721, 419, 621, 812]
}
fn default_planet_period_ms() -> u64 {
    400
}
fn default_frame_interval_ms() -> u64 {
    50 // 20 FPS
}
fn default_fade_in_ms() -> u64 {
    300
}
fn default_fade_out_ms() -> u64 {
    1000
}
fn default_title() -> String {
    "Star countdown timer".to_string()
}
fn default_button_label() -> String {
    "Take off".to_string()
}
fn default_log_dir() -> String {
    "~/.local/share/star-countdown/logs".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.countdown.duration_secs, 10);
        assert_eq!(cfg.countdown.tick_interval(), Duration::from_secs(1));
        assert_eq!(cfg.countdown.launch_delay(), Duration::from_secs(1));
        assert_eq!(cfg.animation.star_periods_ms, [721, 419, 621, 812]);
        assert_eq!(cfg.animation.planet_period_ms, 400);
        assert_eq!(cfg.ui.button_label, "Take off");
        assert!(!cfg.logging.enabled);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let cfg: AppConfig = toml::from_str(
            r#"
            [countdown]
            duration_secs = 5

            [ui]
            title = "Lift off"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.countdown.duration_secs, 5);
        assert_eq!(cfg.countdown.tick_interval_ms, 1000);
        assert_eq!(cfg.ui.title, "Lift off");
        assert_eq!(cfg.ui.button_label, "Take off");
        assert_eq!(cfg.animation, AnimationConfig::default());
    }

    #[test]
    fn test_star_periods_must_have_four_entries() {
        let parsed: Result<AppConfig, _> = toml::from_str(
            r#"
            [animation]
            star_periods_ms = [100, 200]
            "#,
        );
        assert!(parsed.is_err());
    }

    #[test]
    fn test_validate_rejects_zero_values() {
        let mut cfg = AppConfig::default();
        cfg.countdown.duration_secs = 0;
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroDuration));

        let mut cfg = AppConfig::default();
        cfg.countdown.tick_interval_ms = 0;
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::ZeroInterval("countdown.tick_interval_ms"))
        );

        let mut cfg = AppConfig::default();
        cfg.animation.star_periods_ms[2] = 0;
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroStarPeriod(2)));
    }
}
