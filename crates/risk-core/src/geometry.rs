//! Plain geometry primitives handed to the drawing surface
//!
//! Screen coordinates: x grows to the right, y grows downward. Angles are in
//! degrees, measured clockwise from the positive x axis (screen convention).

/// A point on the drawing surface
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

/// Filled circular segment (closed by its chord)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcSegment {
    pub center: Point,
    pub radius: f32,
    /// Start angle in degrees
    pub start_angle: f32,
    /// Sweep in degrees; negative sweeps run counter-clockwise
    pub sweep_angle: f32,
}

impl ArcSegment {
    /// End angle in degrees
    pub fn end_angle(&self) -> f32 {
        self.start_angle + self.sweep_angle
    }
}
