//! Level scale: the validated, immutable gauge configuration
//!
//! A `LevelScale` is produced once from a [`GaugeConfig`] and never changes
//! afterwards. Every degenerate setting (fewer than two pills, empty level
//! range, pills that miss part of the range, negative spacing) is rejected
//! here so the layout and mapping code never divides by zero and every level
//! in range lands on a pill.

use crate::config::GaugeConfig;
use crate::error::{GaugeError, GaugeResult};

/// Upper bound on the pill count
pub const MAX_PILL_COUNT: u32 = 1000;

/// Immutable gauge scale
#[derive(Debug, Clone, PartialEq)]
pub struct LevelScale {
    min_level: f32,
    max_level: f32,
    pill_count: u32,
    vertical_pill_gap: f32,
    horizontal_margin: f32,
    width_to_height_ratio: f32,
    text_size: f32,
    default_level: f32,
}

impl LevelScale {
    /// Lowest level on the scale (bottom pill)
    pub fn min_level(&self) -> f32 {
        self.min_level
    }

    /// Highest level on the scale (top pill)
    pub fn max_level(&self) -> f32 {
        self.max_level
    }

    /// Number of pills, always at least 2
    pub fn pill_count(&self) -> u32 {
        self.pill_count
    }

    pub fn vertical_pill_gap(&self) -> f32 {
        self.vertical_pill_gap
    }

    pub fn horizontal_margin(&self) -> f32 {
        self.horizontal_margin
    }

    pub fn width_to_height_ratio(&self) -> f32 {
        self.width_to_height_ratio
    }

    /// Font size of the numeric readout
    pub fn text_size(&self) -> f32 {
        self.text_size
    }

    /// Level the pointer starts at when nothing was restored
    pub fn default_level(&self) -> f32 {
        self.default_level
    }

    /// Level represented by the pill at `index` (0 = top)
    pub fn level_at(&self, index: u32) -> f32 {
        self.max_level - index as f32
    }

    /// Midpoint level used as the default pointer position
    ///
    /// Rounded down to a whole level: 5 for a 1..10 scale.
    pub fn midpoint_level(min_level: f32, max_level: f32) -> f32 {
        ((min_level + max_level) / 2.0).floor()
    }
}

impl TryFrom<&GaugeConfig> for LevelScale {
    type Error = GaugeError;

    fn try_from(config: &GaugeConfig) -> GaugeResult<Self> {
        let finite = [
            ("min_level", config.min_level),
            ("max_level", config.max_level),
            ("vertical_pill_gap", config.vertical_pill_gap),
            ("horizontal_margin", config.horizontal_margin),
            ("width_to_height_ratio", config.width_to_height_ratio),
            ("text_size", config.text_size),
        ];
        if let Some((name, _)) = finite.iter().find(|(_, v)| !v.is_finite()) {
            return Err(GaugeError::NonFinite(*name));
        }

        let (min_level, max_level) = (config.min_level, config.max_level);
        if min_level >= max_level {
            return Err(GaugeError::EmptyLevelRange {
                min: min_level,
                max: max_level,
            });
        }

        // u64 so a huge max_level saturates instead of wrapping
        let pill_count = config
            .pill_count
            .map(u64::from)
            .unwrap_or_else(|| max_level.round().max(0.0) as u64);
        if pill_count < 2 {
            return Err(GaugeError::TooFewPills(pill_count as u32));
        }
        if pill_count > u64::from(MAX_PILL_COUNT) {
            return Err(GaugeError::TooManyPills {
                count: pill_count,
                max: MAX_PILL_COUNT,
            });
        }
        let pill_count = pill_count as u32;

        for (name, value) in [
            ("vertical_pill_gap", config.vertical_pill_gap),
            ("horizontal_margin", config.horizontal_margin),
            ("text_size", config.text_size),
        ] {
            if value < 0.0 {
                return Err(GaugeError::Negative { name, value });
            }
        }

        if config.width_to_height_ratio <= 0.0 {
            return Err(GaugeError::InvalidRatio(config.width_to_height_ratio));
        }

        // Bands are contiguous from the top pill down, so the range is
        // covered iff min_level falls in the bottom pill's band
        let bottom_level = max_level - (pill_count - 1) as f32;
        if !(bottom_level - 0.5 <= min_level && min_level < bottom_level + 0.5) {
            return Err(GaugeError::PillsDoNotCoverRange {
                pill_count,
                min: min_level,
                max: max_level,
            });
        }

        let default_level = match config.default_level {
            Some(level) if level.is_finite() => {
                let clamped = level.clamp(min_level, max_level);
                if clamped != level {
                    log::warn!(
                        "LevelScale: default level {} outside {}..{}, using {}",
                        level,
                        min_level,
                        max_level,
                        clamped
                    );
                }
                clamped
            }
            Some(_) => return Err(GaugeError::NonFinite("default_level")),
            None => Self::midpoint_level(min_level, max_level),
        };

        Ok(Self {
            min_level,
            max_level,
            pill_count,
            vertical_pill_gap: config.vertical_pill_gap,
            horizontal_margin: config.horizontal_margin,
            width_to_height_ratio: config.width_to_height_ratio,
            text_size: config.text_size,
            default_level,
        })
    }
}
