//! Pill layout
//!
//! Positions and sizes the pills inside the drawable height. The layout is a
//! pure function of `(area_height, text_height, scale)`, so it can be
//! recomputed every frame or cached by height.
//!
//! ```text
//!  text_height / 2           ┐ start offset (clears the readout glyphs)
//!  (====== 10 ======)        ┤ pill 0, y = start
//!                            ┤ gap * n / (n - 1)
//!  (====== 9 =======)        ┤ pill 1
//!        ...
//!  (====== 1 =======)        ┘ pill n-1
//! ```

use crate::error::{GaugeError, GaugeResult};
use crate::geometry::{ArcSegment, Point, Rect};
use crate::scale::LevelScale;

/// One pill of the gauge
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pill {
    /// 0 is the top pill
    pub index: u32,
    /// Level this pill represents (`max_level - index`)
    pub level: f32,
    pub x: f32,
    pub y: f32,
    pub height: f32,
    pub length: f32,
}

impl Pill {
    /// Lowest value of this pill's band (inclusive)
    pub fn min_edge(&self) -> f32 {
        self.level - 0.5
    }

    /// Highest value of this pill's band (exclusive)
    pub fn max_edge(&self) -> f32 {
        self.level + 0.5
    }

    /// Whether `level` falls inside `[min_edge, max_edge)`
    pub fn contains(&self, level: f32) -> bool {
        self.min_edge() <= level && level < self.max_edge()
    }

    /// Vertical center line
    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    /// Drawable shape: two half-disc caps around a body rectangle
    pub fn shape(&self) -> PillShape {
        let radius = self.height / 2.0;
        let center_y = self.center_y();
        PillShape {
            start_cap: ArcSegment {
                center: Point::new(self.x + radius, center_y),
                radius,
                start_angle: 90.0,
                sweep_angle: 180.0,
            },
            end_cap: ArcSegment {
                center: Point::new(self.x + self.length + self.height, center_y),
                radius,
                start_angle: 90.0,
                sweep_angle: -180.0,
            },
            body: Rect::new(self.x + radius, self.y, self.length + radius, self.height),
        }
    }
}

/// Primitives making up one pill
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PillShape {
    pub start_cap: ArcSegment,
    pub end_cap: ArcSegment,
    pub body: Rect,
}

/// Geometry of every pill for one drawable height
#[derive(Debug, Clone, PartialEq)]
pub struct PillLayout {
    area_height: f32,
    pill_height: f32,
    pill_length: f32,
    pills: Vec<Pill>,
}

impl PillLayout {
    /// Lay out `scale.pill_count()` pills in `area_height`
    ///
    /// `text_height` is the measured glyph height of the readout; half of it
    /// is reserved above the first pill and the whole of it is taken from the
    /// height shared by the pills.
    pub fn compute(area_height: f32, text_height: f32, scale: &LevelScale) -> GaugeResult<Self> {
        let count = scale.pill_count();
        let gap = scale.vertical_pill_gap();

        let pill_height = (area_height - text_height) / count as f32 - gap;
        if !area_height.is_finite() || !text_height.is_finite() || !(pill_height > 0.0) {
            return Err(GaugeError::DegenerateArea {
                area_height,
                text_height,
                pill_height,
            });
        }

        let pill_length = pill_height * scale.width_to_height_ratio();
        let start_offset = text_height / 2.0;
        // pill_count >= 2 is guaranteed by LevelScale
        let step = pill_height + (gap * count as f32) / (count - 1) as f32;

        let pills = (0..count)
            .map(|index| Pill {
                index,
                level: scale.level_at(index),
                x: scale.horizontal_margin(),
                y: start_offset + index as f32 * step,
                height: pill_height,
                length: pill_length,
            })
            .collect();

        Ok(Self {
            area_height,
            pill_height,
            pill_length,
            pills,
        })
    }

    /// Height this layout was computed for
    pub fn area_height(&self) -> f32 {
        self.area_height
    }

    pub fn pill_height(&self) -> f32 {
        self.pill_height
    }

    pub fn pill_length(&self) -> f32 {
        self.pill_length
    }

    /// Pills from top (highest level) to bottom
    pub fn pills(&self) -> &[Pill] {
        &self.pills
    }

    fn first(&self) -> &Pill {
        &self.pills[0]
    }

    fn last(&self) -> &Pill {
        &self.pills[self.pills.len() - 1]
    }

    /// Topmost pointer position: center line of the first pill
    pub fn min_y(&self) -> f32 {
        self.first().center_y()
    }

    /// Lowest pointer position: center line of the last pill
    pub fn max_y(&self) -> f32 {
        self.last().center_y()
    }

    /// Clamp a pointer Y into `[min_y, max_y]`
    pub fn clamp_y(&self, y: f32) -> f32 {
        y.clamp(self.min_y(), self.max_y())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GaugeConfig;

    fn scale(config: GaugeConfig) -> LevelScale {
        config.to_scale().unwrap()
    }

    #[test]
    fn test_reference_layout() {
        // 550px area, 50px text: pill height 50, pointer range 50..500
        let layout = PillLayout::compute(550.0, 50.0, &scale(GaugeConfig::default())).unwrap();
        assert_eq!(layout.pills().len(), 10);
        assert_eq!(layout.pill_height(), 50.0);
        assert_eq!(layout.pill_length(), 50.0);
        assert_eq!(layout.min_y(), 50.0);
        assert_eq!(layout.max_y(), 500.0);
        assert_eq!(layout.pills()[0].level, 10.0);
        assert_eq!(layout.pills()[9].level, 1.0);
    }

    #[test]
    fn test_gap_spacing() {
        let scale = scale(GaugeConfig {
            max_level: 5.0,
            vertical_pill_gap: 4.0,
            horizontal_margin: 8.0,
            width_to_height_ratio: 3.0,
            ..GaugeConfig::default()
        });
        let layout = PillLayout::compute(220.0, 20.0, &scale).unwrap();

        // (220 - 20) / 5 - 4
        assert_eq!(layout.pill_height(), 36.0);
        assert_eq!(layout.pill_length(), 108.0);

        let pills = layout.pills();
        assert_eq!(pills[0].y, 10.0);
        for pair in pills.windows(2) {
            // 36 + 4 * 5 / 4
            assert!((pair[1].y - pair[0].y - 41.0).abs() < 1e-4);
        }
        assert!(pills.iter().all(|p| p.x == 8.0));

        // Last pill ends exactly where the area minus half the text ends
        let last = pills.last().unwrap();
        assert!((last.y + last.height - 210.0).abs() < 1e-3);
    }

    #[test]
    fn test_band_contiguity() {
        let layout = PillLayout::compute(550.0, 50.0, &scale(GaugeConfig::default())).unwrap();
        for pair in layout.pills().windows(2) {
            assert_eq!(pair[0].min_edge(), pair[1].max_edge());
        }
    }

    #[test]
    fn test_degenerate_area_rejected() {
        let scale = scale(GaugeConfig::default());
        assert!(matches!(
            PillLayout::compute(0.0, 0.0, &scale),
            Err(GaugeError::DegenerateArea { .. })
        ));
        assert!(matches!(
            PillLayout::compute(40.0, 50.0, &scale),
            Err(GaugeError::DegenerateArea { .. })
        ));
        assert!(PillLayout::compute(f32::NAN, 0.0, &scale).is_err());
    }

    #[test]
    fn test_gap_swallows_area() {
        let scale = scale(GaugeConfig {
            vertical_pill_gap: 10.0,
            ..GaugeConfig::default()
        });
        // 100 / 10 - 10 = 0
        assert!(PillLayout::compute(100.0, 0.0, &scale).is_err());
    }

    #[test]
    fn test_clamp_is_idempotent() {
        let layout = PillLayout::compute(550.0, 50.0, &scale(GaugeConfig::default())).unwrap();
        for y in [-50.0, 0.0, 50.0, 275.0, 500.0, 1000.0] {
            let once = layout.clamp_y(y);
            assert_eq!(layout.clamp_y(once), once);
            assert!(once >= layout.min_y() && once <= layout.max_y());
        }
    }

    #[test]
    fn test_pill_shape() {
        let pill = Pill {
            index: 0,
            level: 10.0,
            x: 4.0,
            y: 10.0,
            height: 20.0,
            length: 60.0,
        };
        let shape = pill.shape();
        assert_eq!(shape.start_cap.center, Point::new(14.0, 20.0));
        assert_eq!(shape.start_cap.radius, 10.0);
        assert_eq!(shape.end_cap.center, Point::new(84.0, 20.0));
        assert_eq!(shape.end_cap.end_angle(), -90.0);
        assert_eq!(shape.body.x, 14.0);
        assert_eq!(shape.body.right(), 84.0);
        assert_eq!(shape.body.bottom(), 30.0);
    }
}
