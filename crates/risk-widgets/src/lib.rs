//! iced widgets for the risk level gauge
//!
//! ## Architecture
//!
//! - **Engine**: `risk_core::GaugeEngine` owns the scale and pointer (pure data)
//! - **View functions**: take the engine + a callback, return `Element<Message>`
//! - **Canvas Program**: turns iced events into pointer input and paints the
//!   reading through an iced `Frame`
//!
//! ## View Functions
//!
//! - `risk_gauge`: the gauge alone
//! - `risk_level_panel`: a label column composed beside the gauge

pub mod gauge;
pub mod panel;
pub mod theme;

pub use gauge::{risk_gauge, ApproxTextMetrics, GaugeInput, GAUGE_WIDTH};
pub use panel::risk_level_panel;
pub use theme::{default_theme_path, load_theme, LevelColors, ThemeConfig, RISK_COLORS};
