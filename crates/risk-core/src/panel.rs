//! Label panel geometry
//!
//! A host may show a label column to the left of the gauge. Padding the
//! label by this amount at top and bottom lines its ends up with the first
//! and last pills.

use crate::scale::LevelScale;

/// Vertical padding for a label placed beside a gauge of `gauge_height`
///
/// `value_padding - diameter / 2` with `value_padding = text_height / 2` and
/// `diameter = gauge_height / pill_count - gap`. Never negative.
pub fn label_padding(gauge_height: f32, text_height: f32, scale: &LevelScale) -> f32 {
    let diameter = gauge_height / scale.pill_count() as f32 - scale.vertical_pill_gap();
    let value_padding = text_height / 2.0;
    (value_padding - diameter / 2.0).max(0.0)
}
