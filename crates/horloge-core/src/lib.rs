//! Core types and math for the horloge analog clock.
//!
//! Everything in this crate is pure: the bounce easing curve, the clock
//! reading snapshot, and the time-to-angle mapping are side-effect-free
//! functions that recompute from fresh inputs every frame. The frame loop
//! and the drawing surface live in the other workspace crates.

mod angles;
mod bounce;
mod reading;
mod theme;

pub use angles::{HandAngles, hand_angles};
pub use bounce::bounce;
pub use reading::{ClockReading, CoreError, TimeFormat};
pub use theme::ColorTheme;
