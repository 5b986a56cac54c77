//! Fixed-fraction layout of the face.
//!
//! Every measurement is derived from the square region's side alone, so a
//! resize is just a recompute. Angles follow the hand convention: zero at
//! the screen's 3-o'clock position, increasing clockwise, with `-pi/2`
//! placing a mark at the top.

use std::f64::consts::{FRAC_PI_2, TAU};

use crate::surface::Point;

/// All face measurements, derived from the region side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceGeometry {
    pub side: f64,
    pub radius: f64,
    pub center: Point,
    pub minute_tick_length: f64,
    pub minute_tick_width: f64,
    pub hour_tick_length: f64,
    pub hour_tick_width: f64,
    /// Distance from the center to a numeral's center point.
    pub numeral_radius: f64,
    pub hour_hand_length: f64,
    pub hour_hand_width: f64,
    pub minute_hand_length: f64,
    pub minute_hand_width: f64,
    pub second_hand_length: f64,
    pub second_hand_width: f64,
}

impl FaceGeometry {
    /// Compute the layout for a square region of the given side.
    pub fn new(side: f64) -> Self {
        let radius = side / 2.0;
        Self {
            side,
            radius,
            center: Point::new(radius, radius),
            minute_tick_length: radius * 0.06,
            minute_tick_width: side * 0.014,
            hour_tick_length: radius * 0.10,
            hour_tick_width: side * 0.024,
            numeral_radius: radius * 0.78,
            hour_hand_length: radius * 0.5,
            hour_hand_width: side * 0.04,
            minute_hand_length: radius * 0.72,
            minute_hand_width: side * 0.025,
            second_hand_length: radius * 0.86,
            second_hand_width: side * 0.012,
        }
    }

    /// Point at `angle` and distance `r` from the face center.
    pub fn point_at(&self, angle: f64, r: f64) -> Point {
        Point::new(
            self.center.x + angle.cos() * r,
            self.center.y - angle.sin() * r,
        )
    }
}

/// An hour mark on the rim: numeral label plus its angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HourMark {
    pub label: u32,
    pub angle: f64,
}

/// Angles of the minute/second ticks.
///
/// All 60 rim positions step `2*pi/60`, minus those that coincide with an
/// hour division. The skip test mirrors the hour grid in floating point:
/// with 24 divisions the hour step is 2.5 minute positions, so only every
/// fifth position actually lands on the minute grid and gets skipped,
/// same as with 12 divisions.
pub fn minute_tick_angles(divisions: u32) -> Vec<f64> {
    let hour_step = 60.0 / f64::from(divisions);
    (0..60u32)
        .filter(|n| f64::from(*n) % hour_step != 0.0)
        .map(|n| -FRAC_PI_2 + TAU / 60.0 * f64::from(n))
        .collect()
}

/// Hour marks for the given division count.
///
/// Labels are `1..=divisions`, each at `-pi/2 + (2*pi/divisions)*label`,
/// so numerals increase clockwise and the full count lands at the top
/// (12 up top in 12-hour mode, 24 in 24-hour mode).
pub fn hour_marks(divisions: u32) -> Vec<HourMark> {
    (1..=divisions)
        .map(|label| HourMark {
            label,
            angle: -FRAC_PI_2 + TAU / f64::from(divisions) * f64::from(label),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn normalize(angle: f64) -> f64 {
        let mut a = angle % TAU;
        if a < 0.0 {
            a += TAU;
        }
        a
    }

    #[test]
    fn test_minute_ticks_skip_hour_positions_12() {
        let angles = minute_tick_angles(12);
        assert_eq!(angles.len(), 48);
        // No tick on any multiple of the 5-position hour step.
        for angle in &angles {
            let steps = normalize(angle + FRAC_PI_2) / (TAU / 60.0);
            assert!((steps.round() - steps).abs() < EPS);
            assert!(steps.round() as u32 % 5 != 0);
        }
    }

    #[test]
    fn test_minute_ticks_skip_count_matches_24() {
        // The 2.5-position hour step only meets the minute grid at
        // multiples of 5, so both modes keep 48 minute ticks.
        assert_eq!(minute_tick_angles(24).len(), 48);
    }

    #[test]
    fn test_adjacent_minute_ticks_one_step_apart() {
        let angles = minute_tick_angles(12);
        for pair in angles.windows(2) {
            let gap = pair[1] - pair[0];
            let steps = gap / (TAU / 60.0);
            assert!((steps.round() - steps).abs() < EPS);
            assert!(steps.round() >= 1.0);
        }
    }

    #[test]
    fn test_hour_marks_labels_and_top_position() {
        let marks = hour_marks(12);
        assert_eq!(marks.len(), 12);
        assert_eq!(marks[0].label, 1);
        assert_eq!(marks[11].label, 12);
        // Label 12 sits at the top of the face.
        assert!((normalize(marks[11].angle) - normalize(-FRAC_PI_2)).abs() < EPS);

        let marks = hour_marks(24);
        assert_eq!(marks.len(), 24);
        assert!((normalize(marks[23].angle) - normalize(-FRAC_PI_2)).abs() < EPS);
    }

    #[test]
    fn test_hour_marks_uniform_spacing() {
        let marks = hour_marks(12);
        for pair in marks.windows(2) {
            assert!((pair[1].angle - pair[0].angle - TAU / 12.0).abs() < EPS);
        }
    }

    #[test]
    fn test_geometry_scales_with_side() {
        let small = FaceGeometry::new(100.0);
        let large = FaceGeometry::new(200.0);
        assert!((small.radius - 50.0).abs() < EPS);
        assert!((large.radius - 100.0).abs() < EPS);
        assert!((large.hour_hand_length - 2.0 * small.hour_hand_length).abs() < EPS);
        assert!((large.minute_tick_width - 2.0 * small.minute_tick_width).abs() < EPS);
    }

    #[test]
    fn test_point_at_cardinal_directions() {
        let geo = FaceGeometry::new(100.0);
        let up = geo.point_at(-FRAC_PI_2, 10.0);
        assert!((up.x - 50.0).abs() < EPS);
        assert!((up.y - 60.0).abs() < EPS);
        let right = geo.point_at(0.0, 10.0);
        assert!((right.x - 60.0).abs() < EPS);
        assert!((right.y - 50.0).abs() < EPS);
    }

    #[test]
    fn test_hand_lengths_ordered() {
        let geo = FaceGeometry::new(100.0);
        assert!(geo.hour_hand_length < geo.minute_hand_length);
        assert!(geo.minute_hand_length < geo.second_hand_length);
        assert!(geo.second_hand_width < geo.minute_hand_width);
        assert!(geo.minute_hand_width < geo.hour_hand_width);
    }
}
