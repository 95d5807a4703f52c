//! Gauge error types

use thiserror::Error;

/// Errors raised when a scale, drawable area or mapping range is degenerate
///
/// Everything else the engine encounters (pointer out of range, missing
/// colours, missing config keys) is recovered locally and never reported.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GaugeError {
    /// Fewer than two pills makes the spacing term divide by zero
    #[error("Gauge needs at least 2 pills, got {0}")]
    TooFewPills(u32),

    /// More pills than a gauge can lay out
    #[error("Gauge supports at most {max} pills, got {count}")]
    TooManyPills { count: u64, max: u32 },

    /// Pills are one level apart from `max_level` down; the bottom pill must hold `min_level`
    #[error("{pill_count} pills from level {max} down do not reach min level {min}")]
    PillsDoNotCoverRange { pill_count: u32, min: f32, max: f32 },

    /// Level range is empty or inverted
    #[error("Empty level range: min={min}, max={max}")]
    EmptyLevelRange { min: f32, max: f32 },

    /// A configuration value is NaN or infinite
    #[error("Non-finite value for {0}")]
    NonFinite(&'static str),

    /// A configuration value that must be non-negative is negative
    #[error("Negative value for {name}: {value}")]
    Negative { name: &'static str, value: f32 },

    /// Width to height ratio must be strictly positive
    #[error("Width to height ratio must be positive, got {0}")]
    InvalidRatio(f32),

    /// The drawable area leaves no room for pills
    #[error("Drawable area too small: height={area_height}, text height={text_height}, pill height={pill_height}")]
    DegenerateArea {
        area_height: f32,
        text_height: f32,
        pill_height: f32,
    },

    /// Position mapping over a zero-length Y range
    #[error("Zero-length pointer range at y={0}")]
    ZeroSpan(f32),
}

/// Result type for gauge operations
pub type GaugeResult<T> = Result<T, GaugeError>;
