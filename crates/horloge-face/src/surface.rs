//! Minimal drawing-surface abstraction the face renderer paints through.

use ratatui::style::{Color, Style};

/// A point in logical drawing coordinates, y axis pointing up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Stroke end-cap style for hand segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineCap {
    /// Flat end exactly at the endpoint.
    Butt,
    /// Flat end extended past the endpoint by half the stroke width.
    Square,
    /// Semicircular end.
    Round,
}

/// Immediate-mode drawing surface.
///
/// All coordinates are logical units with the y axis pointing up and
/// rotations running clockwise. A rotation pushed with
/// [`Surface::push_rotation`] applies to every subsequent call until the
/// matching [`Surface::pop_transform`].
pub trait Surface {
    /// Fill a circle. Rotation transforms move the center only.
    fn fill_circle(&mut self, center: Point, radius: f64, color: Color);

    /// Fill a rectangle centered on `center`, axis-aligned in the current
    /// transform's frame.
    fn fill_rect(&mut self, center: Point, width: f64, height: f64, color: Color);

    /// Stroke a straight segment with the given width and cap style.
    fn stroke_line(&mut self, from: Point, to: Point, width: f64, cap: LineCap, color: Color);

    /// Draw `text` horizontally centered on `center`, unrotated.
    fn draw_text(&mut self, center: Point, text: &str, style: Style);

    /// Rotate subsequent draws clockwise by `angle` radians about `pivot`.
    fn push_rotation(&mut self, pivot: Point, angle: f64);

    /// Undo the most recently pushed rotation.
    fn pop_transform(&mut self);
}

/// A clockwise rotation about a pivot, precomputed for point mapping.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Rotation {
    pivot: Point,
    cos: f64,
    sin: f64,
}

impl Rotation {
    pub(crate) fn new(pivot: Point, angle: f64) -> Self {
        Self {
            pivot,
            cos: angle.cos(),
            sin: angle.sin(),
        }
    }

    /// Map a point through the rotation. Clockwise in y-up coordinates.
    pub(crate) fn apply(&self, p: Point) -> Point {
        let dx = p.x - self.pivot.x;
        let dy = p.y - self.pivot.y;
        Point::new(
            self.pivot.x + dx * self.cos + dy * self.sin,
            self.pivot.y - dx * self.sin + dy * self.cos,
        )
    }
}

/// Map a local point through a stack of rotations, innermost first.
pub(crate) fn apply_stack(transforms: &[Rotation], p: Point) -> Point {
    transforms.iter().rev().fold(p, |p, r| r.apply(p))
}
