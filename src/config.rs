//! Configuration loading and saving
//!
//! The config file only holds defaults for the control surface. Nothing
//! from a playback session is ever written back.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer, Serialize};
use tracing::debug;

/// Environment variable that overrides the config file location.
pub const CONFIG_ENV: &str = "PLAYBAR_CONFIG";

/// Placeholder replaced by the media source in the failure message.
pub const SOURCE_PLACEHOLDER: &str = "{source}";

/// Errors from reading or writing the config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine the user config directory")]
    NoConfigDir,

    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write config {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub controls: ControlsConfig,
    pub player: PlayerConfig,
}

/// Control surface defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlsConfig {
    /// Skip button offsets, one button per entry
    pub skip: Vec<SkipSpec>,
    /// Banner text shown when the source fails to load
    pub error_message: String,
    #[serde(deserialize_with = "volume_slider")]
    pub volume: SliderConfig,
    #[serde(deserialize_with = "playback_rate_slider")]
    pub playback_rate: SliderConfig,
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            skip: vec![SkipSpec::Tag("-10".to_string()), SkipSpec::Tag("25".to_string())],
            error_message: format!(
                "Error: Unable to load video ({}). Please check the file path.",
                SOURCE_PLACEHOLDER
            ),
            volume: SliderConfig::volume(),
            playback_rate: SliderConfig::playback_rate(),
        }
    }
}

impl ControlsConfig {
    /// Failure banner text for the given source.
    pub fn failure_message(&self, source: &str) -> String {
        self.error_message.replace(SOURCE_PLACEHOLDER, source)
    }
}

/// Skip offset as written in the config: a number or a textual tag.
///
/// Tags that do not parse become a `0` second skip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SkipSpec {
    Seconds(f64),
    Tag(String),
}

/// Initial value and widget range of a slider.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliderConfig {
    pub value: f64,
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl SliderConfig {
    pub fn volume() -> Self {
        Self {
            value: 1.0,
            min: 0.0,
            max: 1.0,
            step: 0.05,
        }
    }

    pub fn playback_rate() -> Self {
        Self {
            value: 1.0,
            min: 0.5,
            max: 2.0,
            step: 0.1,
        }
    }
}

/// A slider table as written; absent keys fall back per slider kind.
#[derive(Debug, Default, Deserialize)]
struct SliderTable {
    value: Option<f64>,
    min: Option<f64>,
    max: Option<f64>,
    step: Option<f64>,
}

impl SliderTable {
    fn over(self, defaults: SliderConfig) -> SliderConfig {
        SliderConfig {
            value: self.value.unwrap_or(defaults.value),
            min: self.min.unwrap_or(defaults.min),
            max: self.max.unwrap_or(defaults.max),
            step: self.step.unwrap_or(defaults.step),
        }
    }
}

fn volume_slider<'de, D: Deserializer<'de>>(deserializer: D) -> Result<SliderConfig, D::Error> {
    Ok(SliderTable::deserialize(deserializer)?.over(SliderConfig::volume()))
}

fn playback_rate_slider<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<SliderConfig, D::Error> {
    Ok(SliderTable::deserialize(deserializer)?.over(SliderConfig::playback_rate()))
}

/// Terminal front end settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Input poll interval; also the cadence of time updates
    pub tick_ms: u64,
    /// Colour theme name (classic, ocean, mono)
    pub theme: String,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            tick_ms: 250,
            theme: "classic".to_string(),
        }
    }
}

impl Config {
    /// Path of the user config file, `$PLAYBAR_CONFIG` when set.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        if let Some(path) = std::env::var_os(CONFIG_ENV).filter(|p| !p.is_empty()) {
            return Ok(PathBuf::from(path));
        }
        let dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(dir.join("playbar").join("config.toml"))
    }

    /// Load the user config, falling back to defaults when the file is absent.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load from an explicit path, falling back to defaults when it is absent.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Save to the user config path.
    pub fn save(&self) -> Result<PathBuf, ConfigError> {
        let path = Self::config_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    /// Save to an explicit path, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let content = self.to_toml()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| ConfigError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(path, content).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}
