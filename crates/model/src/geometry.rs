//! Normalized point and rectangle types.
//!
//! All coordinates are normalized to `[0.0, 1.0]` range. Values are not
//! clamped: out-of-range input propagates as out-of-range geometry.

use serde::{Deserialize, Serialize};

/// A 2D normalized point.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// This point shifted by `(dx, dy)`.
    pub fn offset(&self, dx: f64, dy: f64) -> Point2D {
        Point2D {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// The hand's bounding rectangle in frame coordinates.
///
/// `(0.0, 0.0)` is top-left, `(1.0, 1.0)` is bottom-right of the frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalizedRect {
    /// Horizontal center (normalized).
    pub x_center: f64,
    /// Vertical center (normalized).
    pub y_center: f64,
    /// Height (normalized).
    pub height: f64,
    /// Width (normalized). Carried for completeness; gestures ignore it.
    #[serde(default)]
    pub width: f64,
}

impl NormalizedRect {
    /// Create a rectangle from its center and height.
    pub fn new(x_center: f64, y_center: f64, height: f64) -> Self {
        Self {
            x_center,
            y_center,
            height,
            width: 0.0,
        }
    }

    /// The center point of this rectangle.
    pub fn center(&self) -> Point2D {
        Point2D::new(self.x_center, self.y_center)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_offset() {
        let p = Point2D::new(0.25, 0.5).offset(0.5, -0.25);
        assert_eq!(p, Point2D::new(0.75, 0.25));
    }

    #[test]
    fn test_rect_center() {
        let rect = NormalizedRect::new(0.3, 0.7, 0.2);
        assert_eq!(rect.center(), Point2D::new(0.3, 0.7));
    }

    #[test]
    fn test_rect_width_is_optional() {
        let rect: NormalizedRect =
            serde_json::from_str(r#"{"x_center":0.5,"y_center":0.4,"height":0.3}"#).unwrap();
        assert_eq!(rect, NormalizedRect::new(0.5, 0.4, 0.3));
    }

    #[test]
    fn test_rect_out_of_range_is_kept() {
        let rect = NormalizedRect::new(1.4, -0.2, 0.3);
        assert_eq!(rect.center(), Point2D::new(1.4, -0.2));
    }
}
