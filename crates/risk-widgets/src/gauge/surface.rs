//! iced canvas backing for the gauge painter

use iced::alignment::Vertical;
use iced::widget::canvas::{self, path, Frame, Path};
use iced::{Color, Point, Radians, Size};
use risk_core::{ArcSegment, DrawingSurface, Rect, Rgba, TextBounds, TextMetrics, TextRun};

/// Digit glyph height as a fraction of the font size
const DIGIT_HEIGHT_RATIO: f32 = 0.72;

/// Average glyph advance as a fraction of the font size
const GLYPH_ADVANCE_RATIO: f32 = 0.6;

/// Descent below the baseline as a fraction of the font size
const DESCENT_RATIO: f32 = 0.21;

/// Bottom edge of a bottom-aligned text box whose baseline sits at `baseline_y`
///
/// iced has no baseline alignment; the box bottom is placed one estimated
/// descent below the baseline instead.
fn text_bottom(baseline_y: f32, size: f32) -> f32 {
    baseline_y + size * DESCENT_RATIO
}

pub fn to_color(color: Rgba) -> Color {
    Color::from_rgba(color.r, color.g, color.b, color.a)
}

fn to_point(point: risk_core::Point) -> Point {
    Point::new(point.x, point.y)
}

/// Draws onto an iced canvas frame
pub struct FrameSurface<'f> {
    frame: &'f mut Frame,
}

impl<'f> FrameSurface<'f> {
    pub fn new(frame: &'f mut Frame) -> Self {
        Self { frame }
    }
}

impl DrawingSurface for FrameSurface<'_> {
    fn fill_arc(&mut self, arc: ArcSegment, color: Rgba) {
        let segment = Path::new(|builder| {
            builder.arc(path::Arc {
                center: to_point(arc.center),
                radius: arc.radius,
                start_angle: Radians(arc.start_angle.to_radians()),
                end_angle: Radians(arc.end_angle().to_radians()),
            });
            builder.close();
        });
        self.frame.fill(&segment, to_color(color));
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgba) {
        self.frame.fill_rectangle(
            Point::new(rect.x, rect.y),
            Size::new(rect.width, rect.height),
            to_color(color),
        );
    }

    fn fill_polygon(&mut self, points: &[risk_core::Point], color: Rgba) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        let polygon = Path::new(|builder| {
            builder.move_to(to_point(*first));
            for point in rest {
                builder.line_to(to_point(*point));
            }
            builder.close();
        });
        self.frame.fill(&polygon, to_color(color));
    }

    fn fill_text(&mut self, text: TextRun) {
        self.frame.fill_text(canvas::Text {
            content: text.content,
            position: Point::new(text.position.x, text_bottom(text.position.y, text.size)),
            size: text.size.into(),
            color: to_color(text.color),
            align_y: Vertical::Bottom.into(),
            ..canvas::Text::default()
        });
    }
}

/// Font-size based text measurement
///
/// The canvas has no glyph bounds query, so sizes are estimated from the
/// font size with fixed ratios for the default sans-serif font.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApproxTextMetrics;

impl TextMetrics for ApproxTextMetrics {
    fn measure(&self, text: &str, size: f32) -> TextBounds {
        TextBounds {
            width: text.chars().count() as f32 * size * GLYPH_ADVANCE_RATIO,
            height: size * DIGIT_HEIGHT_RATIO,
        }
    }
}
