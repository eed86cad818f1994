//! Geometric primitives over normalized points.

use std::f64::consts::PI;

use handmove_model::geometry::Point2D;

/// Straight-line distance between two points.
pub fn euclidean_distance(a: Point2D, b: Point2D) -> f64 {
    ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt()
}

/// Signed angle (radians) of `ab = b - a` relative to `cb = b - c`.
///
/// With `c` placed to the right of `b`, this is the bearing of the
/// `a -> b` direction measured counter-clockwise on screen (y down), so a
/// point directly above `b` gives +90°. Degenerate vectors give 0.
pub fn signed_angle(a: Point2D, b: Point2D, c: Point2D) -> f64 {
    let ab_x = b.x - a.x;
    let ab_y = b.y - a.y;
    let cb_x = b.x - c.x;
    let cb_y = b.y - c.y;

    let dot = ab_x * cb_x + ab_y * cb_y;
    let cross = ab_x * cb_y - ab_y * cb_x;

    let alpha = cross.atan2(dot);
    if alpha.is_finite() {
        alpha
    } else {
        0.0
    }
}

/// Convert radians to whole degrees, rounding halves up.
pub fn radians_to_degrees(radians: f64) -> i32 {
    let degrees = (radians * 180.0 / PI + 0.5).floor();
    if degrees.is_finite() {
        degrees as i32
    } else {
        0
    }
}

/// [`signed_angle`] in whole degrees, within `(-180, 180]`.
pub fn signed_angle_degrees(a: Point2D, b: Point2D, c: Point2D) -> i32 {
    match radians_to_degrees(signed_angle(a, b, c)) {
        -180 => 180,
        deg => deg,
    }
}

/// Bearing (whole degrees) of the direction `from -> to`, relative to the
/// positive x axis with up as +90°.
pub fn bearing_degrees(from: Point2D, to: Point2D) -> i32 {
    signed_angle_degrees(to, from, from.offset(0.1, 0.0))
}
