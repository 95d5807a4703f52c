//! Pointer persistence across suspend/resume
//!
//! Only the pointer Y is stored. The scale is re-supplied from configuration
//! when the gauge is rebuilt.
//!
//! Default location: ~/.config/risk-gauge/state.yaml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::config::config_dir;

/// Saved pointer position
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SavedPointer {
    pub pointer_y: f32,
}

/// Get the default state file path
///
/// Returns: ~/.config/risk-gauge/state.yaml
pub fn default_state_path() -> PathBuf {
    config_dir().join("state.yaml")
}

/// Load a saved pointer
///
/// Missing or unreadable files are logged and yield `None`; the gauge then
/// starts at its default level.
pub fn load_pointer(path: &Path) -> Option<SavedPointer> {
    if !path.exists() {
        log::info!("load_pointer: No saved state at {:?}", path);
        return None;
    }

    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) => {
            log::warn!("load_pointer: Failed to read {:?}: {}", path, e);
            return None;
        }
    };

    match serde_yaml::from_str::<SavedPointer>(&contents) {
        Ok(saved) => {
            log::info!("load_pointer: Restoring pointer y={}", saved.pointer_y);
            Some(saved)
        }
        Err(e) => {
            log::warn!("load_pointer: Failed to parse {:?}: {}", path, e);
            None
        }
    }
}

/// Save a pointer, creating parent directories as needed
pub fn save_pointer(saved: &SavedPointer, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create state directory: {:?}", parent))?;
    }

    let yaml = serde_yaml::to_string(saved).context("Failed to serialize pointer state")?;
    std::fs::write(path, yaml).with_context(|| format!("Failed to write state file: {:?}", path))?;

    log::debug!("save_pointer: Saved pointer y={} to {:?}", saved.pointer_y, path);
    Ok(())
}
