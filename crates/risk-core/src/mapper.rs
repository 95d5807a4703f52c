//! Linear mapping between pointer Y and a continuous level
//!
//! Y grows downward while levels shrink downward (top pill = max level), so
//! both directions divide by `min_y - max_y` rather than `max_y - min_y`.

use crate::error::{GaugeError, GaugeResult};
use crate::layout::PillLayout;
use crate::scale::LevelScale;

/// Maps between `[min_y, max_y]` and `[min_level, max_level]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionMapper {
    min_y: f32,
    max_y: f32,
    min_level: f32,
    max_level: f32,
}

impl PositionMapper {
    /// Build a mapper, rejecting zero-length ranges
    pub fn new(min_y: f32, max_y: f32, min_level: f32, max_level: f32) -> GaugeResult<Self> {
        if min_y == max_y {
            return Err(GaugeError::ZeroSpan(min_y));
        }
        if min_level == max_level {
            return Err(GaugeError::EmptyLevelRange {
                min: min_level,
                max: max_level,
            });
        }
        Ok(Self {
            min_y,
            max_y,
            min_level,
            max_level,
        })
    }

    /// Mapper for the pointer range of a layout
    pub fn for_layout(layout: &PillLayout, scale: &LevelScale) -> GaugeResult<Self> {
        Self::new(layout.min_y(), layout.max_y(), scale.min_level(), scale.max_level())
    }

    pub fn min_y(&self) -> f32 {
        self.min_y
    }

    pub fn max_y(&self) -> f32 {
        self.max_y
    }

    /// Continuous level at `y`
    ///
    /// Does not clamp: callers pass an already clamped Y.
    pub fn to_level(&self, y: f32) -> f32 {
        (self.max_level - self.min_level) * (y - self.min_y) / (self.min_y - self.max_y)
            + self.max_level
    }

    /// Pointer Y for `level`
    pub fn to_y(&self, level: f32) -> f32 {
        (level - self.max_level) * (self.min_y - self.max_y) / (self.max_level - self.min_level)
            + self.min_y
    }
}
