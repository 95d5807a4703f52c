//! Risk gauge core
//!
//! Geometry and interaction engine for a vertical stack of level "pills"
//! with a draggable pointer. This crate has no UI dependency: hosts feed it
//! area sizes and pointer input, and render the resulting [`GaugeReading`]
//! through the [`DrawingSurface`] trait.
//!
//! ## Flow
//!
//! ```text
//! GaugeConfig ──to_scale()──▶ LevelScale
//!                                 │
//! area height ──▶ PillLayout ─────┤
//!                     │           ▼
//! pointer input ─▶ InteractionController ──▶ redraw pass
//!                                 │           (clamp, PositionMapper,
//! SavedPointer ───restore()───────┘            select_band)
//!                                                  │
//!                                                  ▼
//!                                  GaugeReading ──▶ paint_gauge
//! ```

pub mod band;
pub mod config;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod interaction;
pub mod layout;
pub mod mapper;
pub mod paint;
pub mod panel;
pub mod persistence;
pub mod scale;

pub use band::select_band;
pub use config::{
    config_dir, default_config_path, load_gauge_config, save_gauge_config, GaugeConfig,
};
pub use engine::{GaugeEngine, GaugeReading};
pub use error::{GaugeError, GaugeResult};
pub use geometry::{ArcSegment, Point, Rect};
pub use interaction::{
    DragState, InputOutcome, InputPhase, InteractionController, PointerInput, PointerState,
    Propagation,
};
pub use layout::{Pill, PillLayout, PillShape};
pub use mapper::PositionMapper;
pub use paint::{
    format_level, format_max_level, paint_gauge, DrawingSurface, LevelPalette, Rgba, TextBounds,
    TextMetrics, TextRun, FALLBACK_COLOR,
};
pub use panel::label_padding;
pub use persistence::{default_state_path, load_pointer, save_pointer, SavedPointer};
pub use scale::{LevelScale, MAX_PILL_COUNT};
