//! Time-to-angle mapping for the three hands.

use std::f64::consts::{FRAC_PI_2, TAU};

use crate::reading::{ClockReading, TimeFormat};

/// The rotation of each hand, in radians.
///
/// Zero points at the screen's 3-o'clock position and angles increase
/// clockwise. The `-pi/2` offset in the formulas moves angle zero of the
/// time scale to the top of the face.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandAngles {
    pub second: f64,
    pub minute: f64,
    pub hour: f64,
}

/// Compute the three hand angles for a reading.
///
/// `eased` is the bounce curve's output for the elapsed fraction of the
/// current second. At rest (`eased == 1.0`) the bounce terms vanish and
/// the hands sit on exact tick positions.
///
/// The second hand carries the bounce every second; the minute hand only
/// at the minute boundary (`second == 0`), so it visibly springs once per
/// minute; the hour hand sweeps continuously with no bounce at all.
pub fn hand_angles(reading: ClockReading, format: TimeFormat, eased: f64) -> HandAngles {
    let second = f64::from(reading.second());
    let minute = f64::from(reading.minute());
    let divisions = f64::from(format.divisions());
    let hour_value = match format {
        TimeFormat::TwentyFourHour => f64::from(reading.hour()),
        TimeFormat::TwelveHour => f64::from(reading.hour() % 12),
    };

    let step = TAU / 60.0;
    let spring = step * (eased - 1.0);

    let second_angle = -FRAC_PI_2 + step * second + spring;
    let minute_angle = -FRAC_PI_2
        + step * minute
        + if reading.second() == 0 { spring } else { 0.0 };
    let hour_step = TAU / divisions;
    let hour_angle =
        -FRAC_PI_2 + hour_step * hour_value + hour_step / 60.0 * minute + hour_step / 3600.0 * second;

    HandAngles {
        second: second_angle,
        minute: minute_angle,
        hour: hour_angle,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    fn reading(h: u8, m: u8, s: u8) -> ClockReading {
        ClockReading::new(h, m, s).unwrap()
    }

    #[test]
    fn test_second_hand_at_rest_points_up() {
        let angles = hand_angles(reading(10, 30, 0), TimeFormat::TwelveHour, 1.0);
        assert!((angles.second - (-FRAC_PI_2)).abs() < EPS);
    }

    #[test]
    fn test_three_oclock_scenario() {
        // 03:00:00 at rest in 12-hour mode: hour hand points right,
        // minute and second hands point up.
        let angles = hand_angles(reading(3, 0, 0), TimeFormat::TwelveHour, 1.0);
        assert!(angles.hour.abs() < EPS);
        assert!((angles.minute - (-FRAC_PI_2)).abs() < EPS);
        assert!((angles.second - (-FRAC_PI_2)).abs() < EPS);
    }

    #[test]
    fn test_midnight_same_in_both_modes() {
        let twelve = hand_angles(reading(0, 0, 0), TimeFormat::TwelveHour, 1.0);
        let twenty_four = hand_angles(reading(0, 0, 0), TimeFormat::TwentyFourHour, 1.0);
        assert!((twelve.hour - (-FRAC_PI_2)).abs() < EPS);
        assert!((twenty_four.hour - (-FRAC_PI_2)).abs() < EPS);
    }

    #[test]
    fn test_hour_angle_scales_with_divisions() {
        // For every hour, the 24-hour angle at h equals the 12-hour
        // angle at h % 12, each scaled by its own division count.
        for h in 0..24u8 {
            let twenty_four = hand_angles(reading(h, 17, 42), TimeFormat::TwentyFourHour, 1.0);
            let twelve = hand_angles(reading(h % 12, 17, 42), TimeFormat::TwelveHour, 1.0);
            let frac_24 = (twenty_four.hour + FRAC_PI_2) / (TAU / 24.0) - f64::from(h);
            let frac_12 = (twelve.hour + FRAC_PI_2) / (TAU / 12.0) - f64::from(h % 12);
            assert!((frac_24 - frac_12).abs() < 1e-9);
        }
    }

    #[test]
    fn test_minute_bounce_suppressed_off_boundary() {
        // Any eased value leaves the minute hand untouched unless the
        // second is exactly zero.
        for eased in [-0.1, 0.0, 0.5, 1.1] {
            let bounced = hand_angles(reading(9, 15, 30), TimeFormat::TwelveHour, eased);
            let rest = hand_angles(reading(9, 15, 30), TimeFormat::TwelveHour, 1.0);
            assert!((bounced.minute - rest.minute).abs() < EPS);
        }
    }

    #[test]
    fn test_minute_bounce_applied_at_boundary() {
        let bounced = hand_angles(reading(9, 15, 0), TimeFormat::TwelveHour, 0.5);
        let rest = hand_angles(reading(9, 15, 0), TimeFormat::TwelveHour, 1.0);
        let expected_offset = TAU / 60.0 * (0.5 - 1.0);
        assert!((bounced.minute - rest.minute - expected_offset).abs() < EPS);
    }

    #[test]
    fn test_second_bounce_offset() {
        let bounced = hand_angles(reading(9, 15, 30), TimeFormat::TwelveHour, 1.1);
        let rest = hand_angles(reading(9, 15, 30), TimeFormat::TwelveHour, 1.0);
        let expected_offset = TAU / 60.0 * (1.1 - 1.0);
        assert!((bounced.second - rest.second - expected_offset).abs() < EPS);
    }

    #[test]
    fn test_hour_zero_in_twelve_hour_mode_points_up() {
        // 0 % 12 == 0, which is the top position (12 o'clock).
        let angles = hand_angles(reading(0, 0, 0), TimeFormat::TwelveHour, 1.0);
        assert!((angles.hour - (-FRAC_PI_2)).abs() < EPS);
    }

    #[test]
    fn test_hour_hand_sweeps_with_minutes_and_seconds() {
        let on_the_hour = hand_angles(reading(6, 0, 0), TimeFormat::TwelveHour, 1.0);
        let half_past = hand_angles(reading(6, 30, 0), TimeFormat::TwelveHour, 1.0);
        let expected = TAU / 12.0 / 60.0 * 30.0;
        assert!((half_past.hour - on_the_hour.hour - expected).abs() < EPS);
    }
}
