pub mod model;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::warn;

pub use model::{AppConfig, LoggingConfig};

fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("star-countdown")
        .join("config.toml")
}

/// Load the user's config. On first run the defaults are written out so
/// there is a file to edit; failing to write it is not an error.
pub fn load_config() -> Result<AppConfig> {
    load_or_create(&config_path())
}

fn load_or_create(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        let config = AppConfig::default();
        if let Err(e) = save_config_to(&config, path) {
            warn!("Could not write default config: {:#}", e);
        }
        return Ok(config);
    }
    load_config_from(path)
}

pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;
    let config: AppConfig =
        toml::from_str(&contents).with_context(|| "Failed to parse config file")?;
    config
        .validate()
        .with_context(|| format!("Invalid config in {}", path.display()))?;
    Ok(config)
}

pub fn save_config_to(config: &AppConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory {}", parent.display()))?;
    }
    let contents = toml::to_string_pretty(config).with_context(|| "Failed to serialize config")?;
    std::fs::write(path, contents)
        .with_context(|| format!("Failed to write config to {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "star-countdown-{}-{}",
            name,
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = scratch_dir("missing");
        let cfg = load_config_from(&dir.join("config.toml")).unwrap();
        assert_eq!(cfg, AppConfig::default());
    }

    #[test]
    fn test_saved_config_loads_back() {
        let dir = scratch_dir("saved");
        let path = dir.join("nested").join("config.toml");
        let mut cfg = AppConfig::default();
        cfg.countdown.duration_secs = 3;
        cfg.logging.enabled = true;
        save_config_to(&cfg, &path).unwrap();
        assert_eq!(load_config_from(&path).unwrap(), cfg);
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_first_run_writes_defaults() {
        let dir = scratch_dir("first-run");
        let path = dir.join("config.toml");
        assert_eq!(load_or_create(&path).unwrap(), AppConfig::default());
        assert!(path.exists());
        assert_eq!(load_config_from(&path).unwrap(), AppConfig::default());
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_unwritable_location_still_yields_defaults() {
        let dir = scratch_dir("unwritable");
        std::fs::create_dir_all(&dir).unwrap();
        // A regular file where the config directory should be.
        let blocker = dir.join("blocker");
        std::fs::write(&blocker, "").unwrap();
        let path = blocker.join("config.toml");
        assert_eq!(load_or_create(&path).unwrap(), AppConfig::default());
        assert!(!path.exists());
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_invalid_values_are_reported() {
        let dir = scratch_dir("invalid");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        std::fs::write(&path, "[countdown]\nduration_secs = 0\n").unwrap();
        let err = load_config_from(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("duration_secs"));
        let _ = std::fs::remove_dir_all(&dir);
    }
}
