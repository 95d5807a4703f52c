//! Gauge configuration
//!
//! Configuration is stored as YAML in the user's config directory.
//! Default location: ~/.config/risk-gauge/config.yaml
//!
//! Every key is optional; absent keys take the defaults below. Validation
//! happens when the config is turned into a [`LevelScale`].

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::GaugeResult;
use crate::scale::LevelScale;

/// Application config folder name under the platform config dir
pub const CONFIG_DIR_NAME: &str = "risk-gauge";

/// Raw gauge configuration as read from disk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GaugeConfig {
    /// Lowest level (bottom pill)
    pub min_level: f32,
    /// Highest level (top pill)
    pub max_level: f32,
    /// Number of pills; defaults to `max_level` rounded
    pub pill_count: Option<u32>,
    /// Vertical distance between pills in pixels
    pub vertical_pill_gap: f32,
    /// Left margin of every pill in pixels
    pub horizontal_margin: f32,
    /// Pill body length as a multiple of its height
    pub width_to_height_ratio: f32,
    /// Font size of the numeric readout
    pub text_size: f32,
    /// Initial pointer level; defaults to the scale midpoint
    pub default_level: Option<f32>,
}

impl Default for GaugeConfig {
    fn default() -> Self {
        Self {
            min_level: 1.0,
            max_level: 10.0,
            pill_count: None,
            vertical_pill_gap: 0.0,
            horizontal_margin: 0.0,
            width_to_height_ratio: 1.0,
            text_size: 24.0,
            default_level: None,
        }
    }
}

impl GaugeConfig {
    /// Validate into an immutable scale
    pub fn to_scale(&self) -> GaugeResult<LevelScale> {
        LevelScale::try_from(self)
    }
}

/// Base config directory for the gauge
///
/// Returns: ~/.config/risk-gauge
pub fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
        .join(CONFIG_DIR_NAME)
}

/// Get the default config file path
///
/// Returns: ~/.config/risk-gauge/config.yaml
pub fn default_config_path() -> PathBuf {
    config_dir().join("config.yaml")
}

/// Load configuration from a YAML file
///
/// If the file doesn't exist, returns default config.
/// If the file exists but is invalid, logs a warning and returns default config.
pub fn load_gauge_config(path: &Path) -> GaugeConfig {
    log::info!("load_gauge_config: Loading from {:?}", path);

    if !path.exists() {
        log::info!("load_gauge_config: Config file doesn't exist, using defaults");
        return GaugeConfig::default();
    }

    match std::fs::read_to_string(path) {
        Ok(contents) => match serde_yaml::from_str::<GaugeConfig>(&contents) {
            Ok(config) => {
                log::info!(
                    "load_gauge_config: Loaded levels {}..{}, pills {:?}",
                    config.min_level,
                    config.max_level,
                    config.pill_count
                );
                config
            }
            Err(e) => {
                log::warn!("load_gauge_config: Failed to parse config: {}, using defaults", e);
                GaugeConfig::default()
            }
        },
        Err(e) => {
            log::warn!("load_gauge_config: Failed to read config file: {}, using defaults", e);
            GaugeConfig::default()
        }
    }
}

/// Save configuration to a YAML file
///
/// Creates parent directories if they don't exist.
pub fn save_gauge_config(config: &GaugeConfig, path: &Path) -> Result<()> {
    log::info!("save_gauge_config: Saving to {:?}", path);

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
    }

    let yaml = serde_yaml::to_string(config).context("Failed to serialize gauge config")?;
    std::fs::write(path, yaml).with_context(|| format!("Failed to write config file: {:?}", path))?;

    log::info!("save_gauge_config: Saved successfully");
    Ok(())
}
