//! The face paint routine.

use std::f64::consts::FRAC_PI_2;

use horloge_core::{HandAngles, TimeFormat};
use ratatui::style::{Color, Style};
use thiserror::Error;

use crate::geometry::{self, FaceGeometry};
use crate::surface::{LineCap, Point, Surface};

/// Errors from the face paint routine.
#[derive(Error, Debug, PartialEq)]
pub enum FaceError {
    /// The drawing region was not square.
    #[error("drawing region must be square, got {width}x{height}")]
    NonSquareRegion { width: f64, height: f64 },
}

/// Colors and numeral style for the face.
#[derive(Debug, Clone, Copy)]
pub struct FaceStyle {
    /// Fill of the background disc.
    pub disc: Color,
    /// Tick rectangles, both sizes.
    pub tick: Color,
    /// All three hands.
    pub hand: Color,
    /// Numeral labels.
    pub numeral: Style,
}

/// Paint one full frame of the face.
///
/// Draws, in order: the background disc, the minute/second ticks, the hour
/// ticks with their numerals, then the hands hour first and second hand
/// last so it ends up on top. The region must be square; a non-square
/// region is an integration bug and fails fast, while a zero-sized region
/// is a transient layout pass and paints nothing.
pub fn render_face<S: Surface>(
    surface: &mut S,
    width: f64,
    height: f64,
    angles: HandAngles,
    format: TimeFormat,
    style: &FaceStyle,
) -> Result<(), FaceError> {
    if width != height {
        return Err(FaceError::NonSquareRegion { width, height });
    }
    if width <= 0.0 {
        return Ok(());
    }

    let geo = FaceGeometry::new(width);
    let divisions = format.divisions();

    surface.fill_circle(geo.center, geo.radius, style.disc);

    // Ticks are drawn pointing up and rotated into place; rotating by
    // angle + pi/2 carries the top position onto the target angle.
    for angle in geometry::minute_tick_angles(divisions) {
        draw_tick(
            surface,
            &geo,
            angle,
            geo.minute_tick_width,
            geo.minute_tick_length,
            style.tick,
        );
    }

    for mark in geometry::hour_marks(divisions) {
        draw_tick(
            surface,
            &geo,
            mark.angle,
            geo.hour_tick_width,
            geo.hour_tick_length,
            style.tick,
        );
        surface.draw_text(
            geo.point_at(mark.angle, geo.numeral_radius),
            &mark.label.to_string(),
            style.numeral,
        );
    }

    draw_hand(
        surface,
        &geo,
        angles.hour,
        geo.hour_hand_length,
        geo.hour_hand_width,
        LineCap::Butt,
        style.hand,
    );
    draw_hand(
        surface,
        &geo,
        angles.minute,
        geo.minute_hand_length,
        geo.minute_hand_width,
        LineCap::Square,
        style.hand,
    );
    draw_hand(
        surface,
        &geo,
        angles.second,
        geo.second_hand_length,
        geo.second_hand_width,
        LineCap::Round,
        style.hand,
    );

    Ok(())
}

/// Draw one rim tick at the given angle, flush against the rim.
fn draw_tick<S: Surface>(
    surface: &mut S,
    geo: &FaceGeometry,
    angle: f64,
    width: f64,
    length: f64,
    color: Color,
) {
    surface.push_rotation(geo.center, angle + FRAC_PI_2);
    surface.fill_rect(
        Point::new(geo.center.x, geo.center.y + geo.radius - length / 2.0),
        width,
        length,
        color,
    );
    surface.pop_transform();
}

/// Draw one hand from the center outward along its angle.
fn draw_hand<S: Surface>(
    surface: &mut S,
    geo: &FaceGeometry,
    angle: f64,
    length: f64,
    width: f64,
    cap: LineCap,
    color: Color,
) {
    surface.stroke_line(geo.center, geo.point_at(angle, length), width, cap, color);
}
