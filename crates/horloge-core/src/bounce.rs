//! Overshoot-and-settle easing for the hand motion.

use std::f64::consts::TAU;

/// Oscillation period of the bounce.
const PERIOD: f64 = 0.4;

/// Elastic bounce curve for hand motion.
///
/// Maps the elapsed fraction of the current second `t` in `[0, 1]` to an
/// eased value that overshoots past 1, oscillates with period [`PERIOD`]
/// under an exponentially decaying `2^(-10t)` envelope, and settles at 1.
/// The sine is phase-shifted a quarter period back so the curve starts at
/// 0 rather than 1.
///
/// Inputs outside `[0, 1]` are a caller error; the formula is still
/// evaluated as-is, without clamping.
pub fn bounce(t: f64) -> f64 {
    1.0 + 2f64.powf(-10.0 * t) * (((t - PERIOD / 4.0) * TAU) / PERIOD).sin()
}
