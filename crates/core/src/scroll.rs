//! Scroll detection from whole-hand translation.
//!
//! The rectangle center is compared with the previous frame's center. A
//! displacement larger than `scroll_distance_factor * height` counts as a
//! scroll; normalizing by the current height makes a near hand and a far
//! hand need comparable motion. The movement bearing is then bucketed into
//! four 90° sectors centered on the cardinal directions.

use handmove_model::gesture::ScrollDirection;
use handmove_model::geometry::Point2D;

use crate::geometry::{bearing_degrees, euclidean_distance};

/// Tracks the previous rectangle center.
#[derive(Debug, Clone, Default)]
pub struct ScrollDetector {
    previous_center: Option<Point2D>,
}

impl ScrollDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify this frame's center, then remember it.
    pub fn update(
        &mut self,
        center: Point2D,
        height: f64,
        distance_factor: f64,
    ) -> ScrollDirection {
        let direction = match self.previous_center {
            None => ScrollDirection::None,
            Some(previous) => {
                let distance = euclidean_distance(center, previous);
                let threshold = distance_factor * height;
                if distance > threshold {
                    let bearing = bearing_degrees(previous, center);
                    let direction = direction_for_bearing(bearing);
                    tracing::debug!(
                        distance,
                        threshold,
                        bearing,
                        direction = %direction,
                        "Scroll recognized"
                    );
                    direction
                } else {
                    ScrollDirection::None
                }
            }
        };

        self.previous_center = Some(center);
        direction
    }

    /// Center seen on the last frame, if any.
    pub fn previous_center(&self) -> Option<Point2D> {
        self.previous_center
    }
}

/// Bucket a bearing (whole degrees, up = +90) into a scroll direction.
///
/// Sectors are half-open: `[-45, 45)` right, `[45, 135)` up,
/// `[-135, -45)` down, everything else left.
pub fn direction_for_bearing(bearing: i32) -> ScrollDirection {
    match bearing {
        -45..=44 => ScrollDirection::Right,
        45..=134 => ScrollDirection::Up,
        -135..=-46 => ScrollDirection::Down,
        _ => ScrollDirection::Left,
    }
}
