//! Canvas Program for the risk gauge
//!
//! Translates mouse and touch events into [`PointerInput`] for the engine and
//! paints the current reading. Published messages never capture the event,
//! so widgets layered with the gauge still see the same input.

use iced::widget::canvas::{self, Event, Frame, Geometry, Program};
use iced::{mouse, touch, Point, Rectangle, Theme};
use risk_core::{paint_gauge, GaugeEngine, InputPhase, PointerInput};

use super::surface::{ApproxTextMetrics, FrameSurface};
use crate::theme::LevelColors;

/// Pointer input together with the gauge height it was measured against
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaugeInput {
    pub input: PointerInput,
    pub area_height: f32,
}

/// Canvas program for the risk gauge
///
/// Takes a callback closure `on_input` that wraps each pointer event in the
/// host's message type. The host forwards it to
/// [`GaugeEngine::handle_input`].
pub struct GaugeCanvas<'a, Message, F>
where
    F: Fn(GaugeInput) -> Message,
{
    pub engine: &'a GaugeEngine,
    pub palette: &'a LevelColors,
    pub on_input: F,
}

impl<Message, F> GaugeCanvas<'_, Message, F>
where
    F: Fn(GaugeInput) -> Message,
{
    /// Map one canvas event to a pointer input, if it is one the gauge uses
    ///
    /// Presses only count over the gauge. Moves and releases count only
    /// while a drag is in progress, wherever they happen.
    fn pointer_input(&self, event: &Event, bounds: Rectangle, cursor: mouse::Cursor) -> Option<PointerInput> {
        let dragging = self.engine.controller().is_dragging();
        // Y relative to the canvas, also while dragged outside it
        let local_y = |position: Point| position.y - bounds.y;

        let (y, phase) = match event {
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                (local_y(cursor.position_over(bounds)?), InputPhase::Down)
            }
            Event::Mouse(mouse::Event::CursorMoved { position }) if dragging => {
                (local_y(*position), InputPhase::Move)
            }
            Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) if dragging => {
                // Released outside the window: end the drag where the pointer was
                let y = match cursor.position() {
                    Some(position) => local_y(position),
                    None => self.engine.pointer_y().unwrap_or(f32::NAN),
                };
                (y, InputPhase::Up)
            }
            Event::Touch(touch::Event::FingerPressed { position, .. }) if bounds.contains(*position) => {
                (local_y(*position), InputPhase::Down)
            }
            Event::Touch(touch::Event::FingerMoved { position, .. }) if dragging => {
                (local_y(*position), InputPhase::Move)
            }
            Event::Touch(
                touch::Event::FingerLifted { position, .. } | touch::Event::FingerLost { position, .. },
            ) if dragging => (local_y(*position), InputPhase::Up),
            _ => return None,
        };

        Some(PointerInput::new(y, phase))
    }
}

impl<Message, F> Program<Message> for GaugeCanvas<'_, Message, F>
where
    Message: Clone,
    F: Fn(GaugeInput) -> Message,
{
    type State = ();

    fn update(
        &self,
        _state: &mut Self::State,
        event: &Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<canvas::Action<Message>> {
        let input = self.pointer_input(event, bounds, cursor)?;
        let message = (self.on_input)(GaugeInput {
            input,
            area_height: bounds.height,
        });
        // publish without capture: the event keeps propagating
        Some(canvas::Action::publish(message))
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if self.engine.controller().is_dragging() {
            mouse::Interaction::Grabbing
        } else if cursor.is_over(bounds) {
            mouse::Interaction::Grab
        } else {
            mouse::Interaction::default()
        }
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());

        match self.engine.reading(bounds.height) {
            Ok(reading) => {
                let mut surface = FrameSurface::new(&mut frame);
                paint_gauge(
                    &mut surface,
                    &reading,
                    self.engine.scale(),
                    self.engine.text_height(),
                    self.palette,
                    &ApproxTextMetrics,
                );
            }
            Err(e) => log::debug!("GaugeCanvas: nothing to draw: {}", e),
        }

        vec![frame.into_geometry()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::event::Status;
    use risk_core::GaugeConfig;

    // Canvas placed 100px down the window
    const BOUNDS: Rectangle = Rectangle {
        x: 20.0,
        y: 100.0,
        width: 240.0,
        height: 550.0,
    };

    fn engine() -> GaugeEngine {
        GaugeEngine::new(GaugeConfig::default().to_scale().unwrap(), 50.0)
    }

    fn canvas<'a>(engine: &'a GaugeEngine, palette: &'a LevelColors) -> GaugeCanvas<'a, GaugeInput, fn(GaugeInput) -> GaugeInput> {
        GaugeCanvas {
            engine,
            palette,
            on_input: |input| input,
        }
    }

    fn dragging_engine() -> GaugeEngine {
        let mut engine = engine();
        engine.handle_input(PointerInput::new(200.0, InputPhase::Down), BOUNDS.height);
        engine
    }

    fn at(x: f32, y: f32) -> mouse::Cursor {
        mouse::Cursor::Available(Point::new(x, y))
    }

    fn left_press() -> Event {
        Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left))
    }

    fn left_release() -> Event {
        Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left))
    }

    fn cursor_moved(x: f32, y: f32) -> Event {
        Event::Mouse(mouse::Event::CursorMoved {
            position: Point::new(x, y),
        })
    }

    #[test]
    fn test_press_over_gauge_is_local() {
        let (engine, palette) = (engine(), LevelColors::default());
        let canvas = canvas(&engine, &palette);

        let input = canvas.pointer_input(&left_press(), BOUNDS, at(50.0, 375.0));
        assert_eq!(input, Some(PointerInput::new(275.0, InputPhase::Down)));
    }

    #[test]
    fn test_press_outside_is_ignored() {
        let (engine, palette) = (engine(), LevelColors::default());
        let canvas = canvas(&engine, &palette);

        assert_eq!(canvas.pointer_input(&left_press(), BOUNDS, at(50.0, 20.0)), None);
        assert_eq!(canvas.pointer_input(&left_press(), BOUNDS, mouse::Cursor::Unavailable), None);
    }

    #[test]
    fn test_hover_ignored_while_idle() {
        let (engine, palette) = (engine(), LevelColors::default());
        let canvas = canvas(&engine, &palette);

        assert_eq!(
            canvas.pointer_input(&cursor_moved(50.0, 300.0), BOUNDS, at(50.0, 300.0)),
            None
        );
        assert_eq!(canvas.pointer_input(&left_release(), BOUNDS, at(50.0, 300.0)), None);
    }

    #[test]
    fn test_drag_follows_cursor_outside_bounds() {
        let (engine, palette) = (dragging_engine(), LevelColors::default());
        let canvas = canvas(&engine, &palette);

        let input = canvas.pointer_input(&cursor_moved(500.0, 50.0), BOUNDS, at(500.0, 50.0));
        assert_eq!(input, Some(PointerInput::new(-50.0, InputPhase::Move)));

        let input = canvas.pointer_input(&left_release(), BOUNDS, at(500.0, 900.0));
        assert_eq!(input, Some(PointerInput::new(800.0, InputPhase::Up)));
    }

    #[test]
    fn test_release_outside_window_ends_drag() {
        let (mut engine, palette) = (dragging_engine(), LevelColors::default());
        let last_y = engine.pointer_y();

        let input = canvas(&engine, &palette)
            .pointer_input(&left_release(), BOUNDS, mouse::Cursor::Unavailable)
            .unwrap();
        assert_eq!(input.phase, InputPhase::Up);
        assert_eq!(Some(input.y), last_y);

        engine.handle_input(input, BOUNDS.height);
        assert!(!engine.controller().is_dragging());
        assert_eq!(engine.pointer_y(), last_y);
    }

    #[test]
    fn test_touch_lifecycle() {
        let finger = touch::Finger(0);
        let (engine, palette) = (engine(), LevelColors::default());
        let pressed = Event::Touch(touch::Event::FingerPressed {
            id: finger,
            position: Point::new(50.0, 150.0),
        });
        assert_eq!(
            canvas(&engine, &palette).pointer_input(&pressed, BOUNDS, mouse::Cursor::Unavailable),
            Some(PointerInput::new(50.0, InputPhase::Down))
        );

        let engine = dragging_engine();
        let canvas = canvas(&engine, &palette);
        let lifted = Event::Touch(touch::Event::FingerLifted {
            id: finger,
            position: Point::new(50.0, 400.0),
        });
        let lost = Event::Touch(touch::Event::FingerLost {
            id: finger,
            position: Point::new(50.0, 410.0),
        });
        assert_eq!(
            canvas.pointer_input(&lifted, BOUNDS, mouse::Cursor::Unavailable),
            Some(PointerInput::new(300.0, InputPhase::Up))
        );
        assert_eq!(
            canvas.pointer_input(&lost, BOUNDS, mouse::Cursor::Unavailable),
            Some(PointerInput::new(310.0, InputPhase::Up))
        );
    }

    #[test]
    fn test_update_publishes_without_capture() {
        let (engine, palette) = (engine(), LevelColors::default());
        let canvas = canvas(&engine, &palette);

        let action = canvas
            .update(&mut (), &left_press(), BOUNDS, at(50.0, 375.0))
            .unwrap();
        let (message, _redraw, status) = action.into_inner();
        assert_eq!(status, Status::Ignored);
        assert_eq!(
            message,
            Some(GaugeInput {
                input: PointerInput::new(275.0, InputPhase::Down),
                area_height: 550.0,
            })
        );

        assert!(canvas
            .update(&mut (), &cursor_moved(50.0, 300.0), BOUNDS, at(50.0, 300.0))
            .is_none());
    }
}
