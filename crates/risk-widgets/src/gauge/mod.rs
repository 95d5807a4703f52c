//! Risk level gauge widget
//!
//! A vertical stack of level pills with a draggable pointer and a numeric
//! readout, rendered on an iced canvas.
//!
//! ```text
//!  (=====)
//!  (=====)
//!  (=====)  ◁ 7.25/10
//!  (=====)
//!   ...
//! ```
//!
//! The geometry and pointer state live in [`risk_core::GaugeEngine`]; this
//! module only adapts iced events and the iced frame to it.

mod canvas;
mod surface;
mod view;

pub use canvas::{GaugeCanvas, GaugeInput};
pub use surface::{to_color, ApproxTextMetrics, FrameSurface};
pub use view::{risk_gauge, GAUGE_WIDTH};
