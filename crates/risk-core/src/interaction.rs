//! Pointer interaction state
//!
//! The controller owns the pointer Y. Input writes the raw coordinate; the
//! next redraw pass clamps it into the layout's pointer range.
//!
//! ```text
//!            Down
//!   Idle ───────────▶ Dragging ──┐ Move
//!    ▲                   │  ▲────┘
//!    └────── Up ─────────┘
//! ```
//!
//! The handler never claims the event: every call reports
//! [`Propagation::Continue`] so other observers of the same input still
//! receive it.

/// Phase of a positional input event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputPhase {
    Down,
    Move,
    Up,
}

/// Positional input in gauge-local coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerInput {
    pub y: f32,
    pub phase: InputPhase,
}

impl PointerInput {
    pub fn new(y: f32, phase: InputPhase) -> Self {
        Self { y, phase }
    }
}

/// Whether a handled event may reach other observers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Propagation {
    /// Event continues to other handlers
    Continue,
    /// Event is captured
    Stop,
}

/// Result of handling one input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputOutcome {
    pub redraw: bool,
    pub propagation: Propagation,
}

/// Drag state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging,
}

/// Current pointer position
///
/// `None` until the user touches the gauge or a saved position is restored;
/// the redraw pass then falls back to the scale's default level.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerState {
    pub y: Option<f32>,
}

/// Processes drag input and owns the pointer
#[derive(Debug, Clone, Default)]
pub struct InteractionController {
    drag: DragState,
    pointer: PointerState,
}

impl InteractionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    pub fn is_dragging(&self) -> bool {
        self.drag == DragState::Dragging
    }

    pub fn pointer(&self) -> PointerState {
        self.pointer
    }

    /// Handle one positional input
    ///
    /// Any phase overwrites the pointer with the raw coordinate and requests
    /// a redraw. `Down` starts a drag, `Up` ends it. Never captures the event.
    /// A NaN or infinite coordinate still drives the drag state but leaves
    /// the pointer where it was.
    pub fn handle(&mut self, input: PointerInput) -> InputOutcome {
        self.drag = match input.phase {
            InputPhase::Down => DragState::Dragging,
            InputPhase::Move => self.drag,
            InputPhase::Up => DragState::Idle,
        };
        if input.y.is_finite() {
            self.pointer.y = Some(input.y);
            log::debug!("InteractionController: {:?} at y={}", input.phase, input.y);
        } else {
            log::warn!("InteractionController: ignoring non-finite y={} ({:?})", input.y, input.phase);
        }

        InputOutcome {
            redraw: true,
            propagation: Propagation::Continue,
        }
    }

    /// Overwrite the pointer, e.g. from restored state or the clamp pass
    pub fn set_pointer_y(&mut self, y: f32) {
        self.pointer.y = Some(y);
    }
}
