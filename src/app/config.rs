//! Configuration for the player

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::dispatch::BoundsPolicy;

/// Player configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Playback timing
    pub playback: PlaybackConfig,
    /// Output settings
    pub render: RenderConfig,
    /// What happens to writes outside the grid
    pub bounds: BoundsPolicy,
}

/// Playback configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Delay between renders in milliseconds (0 = no delay)
    pub delay_ms: u64,
    /// Wait for Enter after the End frame before exiting
    pub wait_on_end: bool,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            delay_ms: 500,
            wait_on_end: false,
        }
    }
}

/// Render configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Clear the terminal before every frame
    pub clear_screen: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self { clear_screen: true }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load configuration from default location or return default config
    pub fn load_or_default() -> Self {
        // Try to load from ~/.config/gridwire/config.json
        if let Some(config_dir) = dirs_config_path() {
            let config_path = config_dir.join("config.json");
            if config_path.exists() {
                match Self::load(&config_path) {
                    Ok(config) => return config,
                    Err(e) => tracing::warn!("ignoring {}: {}", config_path.display(), e),
                }
            }
        }
        Self::default()
    }
}

/// Get the configuration directory path
fn dirs_config_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|home| PathBuf::from(home).join(".config").join("gridwire"))
}

/// Configuration error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.playback.delay_ms, 500);
        assert!(!config.playback.wait_on_end);
        assert!(config.render.clear_screen);
        assert_eq!(config.bounds, BoundsPolicy::Drop);
    }

    #[test]
    fn test_config_partial_json() {
        let config: Config =
            serde_json::from_str(r#"{"playback": {"delay_ms": 0}, "bounds": "clamp"}"#).unwrap();
        assert_eq!(config.playback.delay_ms, 0);
        assert!(!config.playback.wait_on_end);
        assert!(config.render.clear_screen);
        assert_eq!(config.bounds, BoundsPolicy::Clamp);
    }

    #[test]
    fn test_config_save_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = Config::default();
        config.playback.delay_ms = 20;
        config.render.clear_screen = false;
        config.save(&path).unwrap();

        let restored = Config::load(&path).unwrap();
        assert_eq!(config, restored);
    }

    #[test]
    fn test_config_load_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.json");
        assert!(matches!(Config::load(&missing), Err(ConfigError::Io(_))));

        let broken = dir.path().join("broken.json");
        std::fs::write(&broken, "{ not json").unwrap();
        assert!(matches!(Config::load(&broken), Err(ConfigError::Json(_))));
    }
}
