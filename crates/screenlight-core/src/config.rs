use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::log::LogConfig;

/// Shortest timer period Windows honors, in milliseconds.
pub const MIN_TICK_MS: u32 = 10;

/// Longest accepted timer period, in milliseconds.
pub const MAX_TICK_MS: u32 = 1000;

/// Top-level configuration for Screen Light.
///
/// Loaded from `~/.config/screenlight/config.toml`. The file is optional
/// and missing sections fall back to defaults. Brightness is deliberately
/// absent: every launch starts at full white.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Cursor animation settings.
    pub animation: AnimationConfig,
    /// File logging settings.
    pub logging: LogConfig,
}

/// Cursor animation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Whether the cursor starts out moving.
    pub enabled: bool,
    /// Milliseconds between animation ticks.
    pub tick_ms: u32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            tick_ms: MIN_TICK_MS,
        }
    }
}

impl Config {
    /// Clamps values to ranges the host can honor.
    pub fn validate(&mut self) {
        self.animation.tick_ms = self.animation.tick_ms.clamp(MIN_TICK_MS, MAX_TICK_MS);
        self.logging.max_file_mb = self.logging.max_file_mb.min(1024);
    }

    /// Parses and validates a TOML document.
    pub fn from_toml(content: &str) -> Result<Self, String> {
        let mut config: Config = toml::from_str(content).map_err(|e| e.to_string())?;
        config.validate();
        Ok(config)
    }
}

/// Returns the config directory: `~/.config/screenlight/`.
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".config").join("screenlight"))
}

/// Returns the config file path: `~/.config/screenlight/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Loads the configuration from disk.
///
/// A missing file yields the defaults. A file that cannot be read or
/// parsed yields an error string describing what went wrong; callers
/// log it and fall back to [`Config::default`].
pub fn load() -> Result<Config, String> {
    let Some(path) = config_path() else {
        return Ok(Config::default());
    };
    if !path.exists() {
        return Ok(Config::default());
    }
    let content = std::fs::read_to_string(&path).map_err(|e| format!("{}: {e}", path.display()))?;
    Config::from_toml(&content).map_err(|e| format!("{}: {e}", path.display()))
}
