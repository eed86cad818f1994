//! Zoom detection from changes in hand-rectangle height.
//!
//! The hysteresis band is `zoom_height_factor * current_height` on either
//! side of the previous height. A shrinking rectangle means the hand moved
//! away from the camera (zoom out); a growing one means zoom in.

use handmove_model::gesture::ZoomDirection;

/// Tracks the previous rectangle height.
#[derive(Debug, Clone, Default)]
pub struct ZoomDetector {
    previous_height: Option<f64>,
}

impl ZoomDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify this frame's height, then remember it.
    pub fn update(&mut self, height: f64, height_factor: f64) -> ZoomDirection {
        let direction = match self.previous_height {
            None => ZoomDirection::None,
            Some(previous) => {
                // Band width follows the current height, not the previous one.
                let threshold = height * height_factor;
                if height < previous - threshold {
                    ZoomDirection::Out
                } else if height > previous + threshold {
                    ZoomDirection::In
                } else {
                    ZoomDirection::None
                }
            }
        };

        if !direction.is_none() {
            tracing::debug!(
                height,
                previous = ?self.previous_height,
                direction = %direction,
                "Zoom recognized"
            );
        }

        self.previous_height = Some(height);
        direction
    }

    /// Height seen on the last frame, if any.
    pub fn previous_height(&self) -> Option<f64> {
        self.previous_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(previous: f64, current: f64) -> ZoomDirection {
        let mut detector = ZoomDetector::new();
        detector.update(previous, 0.03);
        detector.update(current, 0.03)
    }

    #[test]
    fn test_first_frame_is_none() {
        let mut detector = ZoomDetector::new();
        assert_eq!(detector.update(0.3, 0.03), ZoomDirection::None);
        assert_eq!(detector.previous_height(), Some(0.3));
    }

    #[test]
    fn test_grow_and_shrink() {
        assert_eq!(step(0.3, 0.4), ZoomDirection::In);
        assert_eq!(step(0.4, 0.3), ZoomDirection::Out);
        assert_eq!(step(0.3, 0.305), ZoomDirection::None);
    }

    #[test]
    fn test_threshold_uses_current_height() {
        // With a band of 0.03 * previous (0.03) this would not be a zoom out.
        assert_eq!(step(1.0, 0.9705), ZoomDirection::Out);
        // With a band of 0.03 * previous (0.015) this would be a zoom in.
        assert_eq!(step(0.5, 0.5152), ZoomDirection::None);
    }

    #[test]
    fn test_zero_height_is_a_real_previous_value() {
        assert_eq!(step(0.0, 0.2), ZoomDirection::In);
    }

    #[test]
    fn test_height_always_updates() {
        let mut detector = ZoomDetector::new();
        detector.update(0.3, 0.03);
        detector.update(0.301, 0.03);
        assert_eq!(detector.previous_height(), Some(0.301));
    }
}
