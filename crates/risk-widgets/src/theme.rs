//! Level colours
//!
//! Each level has a colour, specified as a hex string in
//! ~/.config/risk-gauge/theme.yaml. The strings are parsed once into a
//! [`LevelColors`] table; levels without a valid entry are drawn in the
//! fallback colour.

use risk_core::{config_dir, LevelPalette, Rgba};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Default level colours, level 1 (safe, green) to level 10 (critical, red)
pub const RISK_COLORS: [&str; 10] = [
    "#2E7D32", // 1 - Dark green
    "#43A047", // 2 - Green
    "#7CB342", // 3 - Light green
    "#C0CA33", // 4 - Lime
    "#FDD835", // 5 - Yellow
    "#FFB300", // 6 - Amber
    "#FB8C00", // 7 - Orange
    "#F4511E", // 8 - Deep orange
    "#E53935", // 9 - Red
    "#B71C1C", // 10 - Dark red
];

/// Root theme configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Hex colour per level, keyed by level number
    pub levels: BTreeMap<i32, String>,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            levels: RISK_COLORS
                .iter()
                .enumerate()
                .map(|(i, hex)| (i as i32 + 1, hex.to_string()))
                .collect(),
        }
    }
}

/// Parse a hex colour string
///
/// Supports formats: "#RRGGBB" or "RRGGBB"
pub fn parse_hex_color(hex: &str) -> Option<Rgba> {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }

    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

    Some(Rgba::from_rgb8(r, g, b))
}

/// Parsed level colour table
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LevelColors {
    colors: BTreeMap<i32, Rgba>,
}

impl LevelColors {
    /// Parse every entry of a theme; invalid entries are dropped
    pub fn from_theme(theme: &ThemeConfig) -> Self {
        let colors = theme
            .levels
            .iter()
            .filter_map(|(&level, hex)| match parse_hex_color(hex) {
                Some(color) => Some((level, color)),
                None => {
                    log::warn!("LevelColors: Invalid hex colour '{}' for level {}", hex, level);
                    None
                }
            })
            .collect();
        Self { colors }
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

impl LevelPalette for LevelColors {
    fn level_color(&self, level: i32) -> Option<Rgba> {
        self.colors.get(&level).copied()
    }
}

/// Get the default theme file path
///
/// Returns: ~/.config/risk-gauge/theme.yaml
pub fn default_theme_path() -> PathBuf {
    config_dir().join("theme.yaml")
}

/// Load theme configuration from a YAML file
///
/// If the file doesn't exist, returns default config.
/// If the file exists but is invalid, logs a warning and returns default config.
pub fn load_theme(path: &Path) -> ThemeConfig {
    log::info!("load_theme: Loading from {:?}", path);

    if !path.exists() {
        log::info!("load_theme: Theme file doesn't exist, using defaults");
        return ThemeConfig::default();
    }

    match std::fs::read_to_string(path) {
        Ok(contents) => match serde_yaml::from_str::<ThemeConfig>(&contents) {
            Ok(config) => {
                log::info!("load_theme: Loaded {} level colours", config.levels.len());
                config
            }
            Err(e) => {
                log::warn!("load_theme: Failed to parse theme: {}, using defaults", e);
                ThemeConfig::default()
            }
        },
        Err(e) => {
            log::warn!("load_theme: Failed to read theme file: {}, using defaults", e);
            ThemeConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use risk_core::FALLBACK_COLOR;

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#FF0000"), Some(Rgba::from_rgb(1.0, 0.0, 0.0)));
        assert_eq!(parse_hex_color("00ff00"), Some(Rgba::from_rgb(0.0, 1.0, 0.0)));
        assert_eq!(parse_hex_color("#FFF"), None);
        assert_eq!(parse_hex_color("#GG0000"), None);
        assert_eq!(parse_hex_color("#ÄÄ00"), None);
    }

    #[test]
    fn test_default_theme_covers_ten_levels() {
        let colors = LevelColors::from_theme(&ThemeConfig::default());
        assert_eq!(colors.len(), 10);
        assert!(colors.level_color(1).is_some());
        assert!(colors.level_color(10).is_some());
        assert_eq!(colors.level_color(11), None);
    }

    #[test]
    fn test_invalid_entries_fall_back() {
        let mut theme = ThemeConfig::default();
        theme.levels.insert(3, "not a colour".to_string());
        let colors = LevelColors::from_theme(&theme);

        assert_eq!(colors.len(), 9);
        assert_eq!(colors.color_or_default(3.0), FALLBACK_COLOR);
        assert_ne!(colors.color_or_default(4.0), FALLBACK_COLOR);
    }

    #[test]
    fn test_load_theme_yaml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("theme.yaml");
        std::fs::write(&path, "levels:\n  1: \"#000000\"\n  2: \"#FFFFFF\"\n").unwrap();

        let theme = load_theme(&path);
        assert_eq!(theme.levels.len(), 2);
        let colors = LevelColors::from_theme(&theme);
        assert_eq!(colors.level_color(1), Some(Rgba::from_rgb(0.0, 0.0, 0.0)));
        assert_eq!(colors.level_color(5), None);

        assert_eq!(load_theme(&dir.path().join("missing.yaml")), ThemeConfig::default());
    }
}
