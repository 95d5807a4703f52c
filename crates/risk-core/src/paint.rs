//! Rendering collaborators and the gauge painter
//!
//! The engine does not draw. It hands geometry and colours to a
//! [`DrawingSurface`], measures text through [`TextMetrics`], and asks a
//! [`LevelPalette`] for per-level colours. A palette miss falls back to
//! [`FALLBACK_COLOR`].

use crate::engine::GaugeReading;
use crate::geometry::{ArcSegment, Point, Rect};
use crate::scale::LevelScale;

/// RGBA colour, components in 0.0..=1.0
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::from_rgb(1.0, 1.0, 1.0);

    pub const fn from_rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgb(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
    }
}

/// Colour used when a level has no palette entry
pub const FALLBACK_COLOR: Rgba = Rgba::WHITE;

/// Text drawn with its baseline starting at `position`
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub content: String,
    pub position: Point,
    pub size: f32,
    pub color: Rgba,
}

/// Measured glyph bounds
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TextBounds {
    pub width: f32,
    pub height: f32,
}

/// Rendering surface the painter draws on
pub trait DrawingSurface {
    /// Fill a circular segment closed by its chord
    fn fill_arc(&mut self, arc: ArcSegment, color: Rgba);

    fn fill_rect(&mut self, rect: Rect, color: Rgba);

    /// Fill a closed polygon
    fn fill_polygon(&mut self, points: &[Point], color: Rgba);

    fn fill_text(&mut self, text: TextRun);
}

/// Text measurement
pub trait TextMetrics {
    fn measure(&self, text: &str, size: f32) -> TextBounds;

    /// Height of a readout digit; all digits share it
    fn digit_height(&self, size: f32) -> f32 {
        self.measure("0", size).height
    }
}

/// Level to colour lookup, decided at configuration time
pub trait LevelPalette {
    /// Colour for a whole level, `None` when the palette has no entry
    fn level_color(&self, level: i32) -> Option<Rgba>;

    /// Colour for `level`, falling back to [`FALLBACK_COLOR`]
    fn color_or_default(&self, level: f32) -> Rgba {
        self.level_color(level.round() as i32).unwrap_or_else(|| {
            log::debug!("LevelPalette: no colour for level {}, using fallback", level);
            FALLBACK_COLOR
        })
    }
}

/// Gap between the readout and its `/max` suffix
pub const SUFFIX_GAP: f32 = 5.0;

/// Half-angle of the pointer marker
const MARKER_ANGLE: f32 = std::f32::consts::FRAC_PI_6;

/// Format a level for the readout: rounded up to two decimals
pub fn format_level(level: f32) -> String {
    // Snap away binary noise first so 5.5 doesn't ceil to 5.51
    let hundredths = ((level as f64 * 100.0) * 1e4).round() / 1e4;
    format!("{:.2}", hundredths.ceil() / 100.0)
}

/// Suffix after the readout, e.g. `/10`
pub fn format_max_level(max_level: f32) -> String {
    format!("/{}", max_level)
}

/// X of the marker tip: right of the first pill's end cap
pub fn marker_x(reading: &GaugeReading, scale: &LevelScale) -> f32 {
    let layout = &reading.layout;
    let first_x = layout.pills().first().map_or(scale.horizontal_margin(), |p| p.x);
    first_x + layout.pill_length() + scale.vertical_pill_gap() + layout.pill_height()
}

/// Triangle pointing left with its tip at `tip`
pub fn marker_triangle(tip: Point, side: f32) -> [Point; 3] {
    let x1 = tip.x + side * MARKER_ANGLE.cos();
    let y1 = tip.y - side * MARKER_ANGLE.sin();
    [tip, Point::new(x1, y1), Point::new(x1, y1 + side)]
}

/// Draw one full gauge frame
pub fn paint_gauge<S: DrawingSurface + ?Sized>(
    surface: &mut S,
    reading: &GaugeReading,
    scale: &LevelScale,
    text_height: f32,
    palette: &dyn LevelPalette,
    metrics: &dyn TextMetrics,
) {
    for pill in reading.layout.pills() {
        let color = palette.color_or_default(pill.level);
        let shape = pill.shape();
        surface.fill_arc(shape.start_cap, color);
        surface.fill_arc(shape.end_cap, color);
        surface.fill_rect(shape.body, color);
    }

    let side = reading.layout.pill_height();
    let tip = Point::new(marker_x(reading, scale), reading.pointer_y);
    let accent = match reading.selected {
        Some(pill) => {
            let color = palette.color_or_default(pill.level);
            surface.fill_polygon(&marker_triangle(tip, side), color);
            color
        }
        None => FALLBACK_COLOR,
    };

    let readout = format_level(reading.level);
    let baseline = reading.pointer_y + text_height / 2.0;
    let readout_x = tip.x + side * MARKER_ANGLE.cos() + scale.horizontal_margin();
    let readout_width = metrics.measure(&readout, scale.text_size()).width;

    surface.fill_text(TextRun {
        content: readout,
        position: Point::new(readout_x, baseline),
        size: scale.text_size(),
        color: accent,
    });
    surface.fill_text(TextRun {
        content: format_max_level(scale.max_level()),
        position: Point::new(readout_x + readout_width + SUFFIX_GAP, baseline),
        size: scale.text_size() / 2.0,
        color: accent,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GaugeConfig;
    use crate::engine::GaugeEngine;
    use crate::persistence::SavedPointer;

    #[derive(Default)]
    struct Recorder {
        arcs: Vec<(ArcSegment, Rgba)>,
        rects: Vec<(Rect, Rgba)>,
        polygons: Vec<(Vec<Point>, Rgba)>,
        texts: Vec<TextRun>,
    }

    impl DrawingSurface for Recorder {
        fn fill_arc(&mut self, arc: ArcSegment, color: Rgba) {
            self.arcs.push((arc, color));
        }

        fn fill_rect(&mut self, rect: Rect, color: Rgba) {
            self.rects.push((rect, color));
        }

        fn fill_polygon(&mut self, points: &[Point], color: Rgba) {
            self.polygons.push((points.to_vec(), color));
        }

        fn fill_text(&mut self, text: TextRun) {
            self.texts.push(text);
        }
    }

    /// Every glyph is 10 wide and 20 tall
    struct FixedMetrics;

    impl TextMetrics for FixedMetrics {
        fn measure(&self, text: &str, _size: f32) -> TextBounds {
            TextBounds {
                width: text.chars().count() as f32 * 10.0,
                height: 20.0,
            }
        }
    }

    const RED: Rgba = Rgba::from_rgb(1.0, 0.0, 0.0);

    /// Red from level 6 up, nothing below
    struct HighLevelsRed;

    impl LevelPalette for HighLevelsRed {
        fn level_color(&self, level: i32) -> Option<Rgba> {
            (level >= 6).then_some(RED)
        }
    }

    #[test]
    fn test_format_level() {
        assert_eq!(format_level(5.5), "5.50");
        assert_eq!(format_level(5.501), "5.51");
        assert_eq!(format_level(10.0), "10.00");
        assert_eq!(format_level(1.0), "1.00");
        assert_eq!(format_level(3.333_333), "3.34");
        assert_eq!(format_max_level(10.0), "/10");
    }

    #[test]
    fn test_marker_triangle() {
        let [tip, upper, lower] = marker_triangle(Point::new(100.0, 50.0), 20.0);
        assert_eq!(tip, Point::new(100.0, 50.0));
        assert!((upper.x - (100.0 + 20.0 * 3f32.sqrt() / 2.0)).abs() < 1e-4);
        assert!((upper.y - 40.0).abs() < 1e-4);
        assert_eq!(lower.x, upper.x);
        assert!((lower.y - 60.0).abs() < 1e-4);
    }

    #[test]
    fn test_palette_fallback() {
        assert_eq!(HighLevelsRed.color_or_default(7.0), RED);
        assert_eq!(HighLevelsRed.color_or_default(2.0), FALLBACK_COLOR);
    }

    #[test]
    fn test_paint_gauge() {
        let mut engine = GaugeEngine::new(GaugeConfig::default().to_scale().unwrap(), 50.0);
        engine.restore(SavedPointer { pointer_y: 275.0 });
        let reading = engine.redraw(550.0).unwrap();

        let mut recorder = Recorder::default();
        paint_gauge(
            &mut recorder,
            &reading,
            engine.scale(),
            engine.text_height(),
            &HighLevelsRed,
            &FixedMetrics,
        );

        // Two caps and a body per pill
        assert_eq!(recorder.arcs.len(), 20);
        assert_eq!(recorder.rects.len(), 10);
        assert_eq!(recorder.rects[0].1, RED);
        assert_eq!(recorder.rects[9].1, FALLBACK_COLOR);

        // Level 5.5 sits in the level 6 band
        assert_eq!(recorder.polygons.len(), 1);
        let (triangle, color) = &recorder.polygons[0];
        assert_eq!(*color, RED);
        // pill length 50 + gap 0 + pill height 50
        assert_eq!(triangle[0], Point::new(100.0, 275.0));

        assert_eq!(recorder.texts.len(), 2);
        assert_eq!(recorder.texts[0].content, "5.50");
        assert_eq!(recorder.texts[0].position.y, 300.0);
        assert_eq!(recorder.texts[1].content, "/10");
        assert_eq!(recorder.texts[1].size, 12.0);
        let gap = recorder.texts[1].position.x - recorder.texts[0].position.x;
        assert!((gap - (40.0 + SUFFIX_GAP)).abs() < 1e-4);
    }
}
