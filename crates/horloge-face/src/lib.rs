//! Analog face rendering for the horloge clock.
//!
//! The geometry and paint logic here is backend-agnostic: the renderer
//! paints through the small [`Surface`] trait, and the [`ClockFace`]
//! widget plugs a ratatui braille-canvas backend into it. Each paint is a
//! full redraw computed from that frame's hand angles; nothing is cached
//! across frames except the square region picked from the layout.

mod geometry;
mod renderer;
mod surface;
mod terminal;

pub use geometry::{FaceGeometry, HourMark, hour_marks, minute_tick_angles};
pub use renderer::{FaceError, FaceStyle, render_face};
pub use surface::{LineCap, Point, Surface};
pub use terminal::ClockFace;
