//! Gauge view functions
//!
//! Plain functions that take the engine and a callback closure and return an
//! `Element`, following the usual iced pattern.
//!
//! ```ignore
//! fn view(&self) -> Element<Message> {
//!     risk_gauge(&self.engine, &self.colors, Length::Fill, Message::Gauge)
//! }
//! ```

use iced::widget::Canvas;
use iced::{Element, Length};
use risk_core::GaugeEngine;

use super::canvas::{GaugeCanvas, GaugeInput};
use crate::theme::LevelColors;

/// Width reserved for the gauge: pills, marker and readout
pub const GAUGE_WIDTH: f32 = 240.0;

/// Create a risk gauge element
///
/// # Arguments
///
/// * `engine` - Gauge engine holding the scale and pointer
/// * `palette` - Level colour table
/// * `height` - Gauge height; the pills share it
/// * `on_input` - Called with every pointer event on the gauge
pub fn risk_gauge<'a, Message>(
    engine: &'a GaugeEngine,
    palette: &'a LevelColors,
    height: impl Into<Length>,
    on_input: impl Fn(GaugeInput) -> Message + 'a,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    Canvas::new(GaugeCanvas {
        engine,
        palette,
        on_input,
    })
    .width(Length::Fixed(GAUGE_WIDTH))
    .height(height)
    .into()
}
