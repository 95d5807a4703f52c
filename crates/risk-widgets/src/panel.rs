//! Label panel: a label column beside the gauge
//!
//! The label is padded so its top and bottom line up with the first and last
//! pills of a gauge of the same height.

use iced::widget::{container, row};
use iced::{Element, Length, Padding};
use risk_core::{label_padding, GaugeEngine};

use crate::gauge::{risk_gauge, GaugeInput};
use crate::theme::LevelColors;

/// Compose `label` and a gauge of fixed `height` side by side
pub fn risk_level_panel<'a, Message>(
    label: impl Into<Element<'a, Message>>,
    engine: &'a GaugeEngine,
    palette: &'a LevelColors,
    height: f32,
    on_input: impl Fn(GaugeInput) -> Message + 'a,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    let padding = label_padding(height, engine.text_height(), engine.scale());

    row![
        container(label)
            .padding(Padding::from([padding, 0.0]))
            .height(Length::Fixed(height)),
        risk_gauge(engine, palette, Length::Fixed(height), on_input),
    ]
    .spacing(8)
    .into()
}
