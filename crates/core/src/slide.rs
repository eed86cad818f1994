//! Slide detection from the tilt of an upright hand.
//!
//! The tilt is the bearing of the wrist -> middle-finger knuckle axis. A
//! slide is only considered when the hand was held roughly upright on the
//! previous evaluated frame (tilt inside the gate band); a tilt change
//! beyond the threshold towards the left of the frame is a left slide,
//! towards the right a right slide.

use handmove_common::config::ThresholdConfig;
use handmove_model::gesture::SlideDirection;
use handmove_model::geometry::Point2D;

use crate::geometry::bearing_degrees;

/// Tracks the tilt seen on the last evaluated frame.
#[derive(Debug, Clone, Default)]
pub struct SlideDetector {
    previous_angle: Option<i32>,
}

impl SlideDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify this frame's hand tilt, then remember it.
    pub fn update(
        &mut self,
        wrist: Point2D,
        knuckle: Point2D,
        thresholds: &ThresholdConfig,
    ) -> SlideDirection {
        let angle = hand_tilt_degrees(wrist, knuckle);

        let direction = match self.previous_angle {
            Some(previous)
                if (thresholds.slide_gate_min_deg..=thresholds.slide_gate_max_deg)
                    .contains(&previous) =>
            {
                let threshold = thresholds.slide_angle_threshold_deg;
                if angle > previous.saturating_add(threshold) {
                    SlideDirection::Left
                } else if angle < previous.saturating_sub(threshold) {
                    SlideDirection::Right
                } else {
                    SlideDirection::None
                }
            }
            _ => SlideDirection::None,
        };

        if !direction.is_none() {
            tracing::debug!(
                angle,
                previous = ?self.previous_angle,
                direction = %direction,
                "Slide recognized"
            );
        }

        self.previous_angle = Some(angle);
        direction
    }

    /// Tilt (whole degrees) from the last evaluated frame, if any.
    pub fn previous_angle(&self) -> Option<i32> {
        self.previous_angle
    }
}

/// Tilt of the wrist -> knuckle axis in whole degrees; 90 is upright.
pub fn hand_tilt_degrees(wrist: Point2D, knuckle: Point2D) -> i32 {
    bearing_degrees(wrist, knuckle)
}

#[cfg(test)]
mod tests {
    use super::*;

    const WRIST: Point2D = Point2D { x: 0.5, y: 0.7 };

    /// Knuckle placed so the hand tilt is `degrees`.
    fn knuckle_at(degrees: f64) -> Point2D {
        let rad = degrees.to_radians();
        WRIST.offset(0.2 * rad.cos(), -0.2 * rad.sin())
    }

    fn step(previous: f64, current: f64) -> SlideDirection {
        let thresholds = ThresholdConfig::default();
        let mut detector = SlideDetector::new();
        detector.update(WRIST, knuckle_at(previous), &thresholds);
        detector.update(WRIST, knuckle_at(current), &thresholds)
    }

    #[test]
    fn test_tilt_of_upright_hand() {
        assert_eq!(hand_tilt_degrees(WRIST, WRIST.offset(0.0, -0.2)), 90);
        assert_eq!(hand_tilt_degrees(WRIST, knuckle_at(103.0)), 103);
        assert_eq!(hand_tilt_degrees(WRIST, knuckle_at(-30.0)), -30);
    }

    #[test]
    fn test_first_evaluation_is_none() {
        let mut detector = SlideDetector::new();
        let dir = detector.update(WRIST, knuckle_at(90.0), &ThresholdConfig::default());
        assert_eq!(dir, SlideDirection::None);
        assert_eq!(detector.previous_angle(), Some(90));
    }

    #[test]
    fn test_tilt_left_and_right() {
        assert_eq!(step(90.0, 103.0), SlideDirection::Left);
        assert_eq!(step(90.0, 77.0), SlideDirection::Right);
        assert_eq!(step(90.0, 102.0), SlideDirection::None);
        assert_eq!(step(90.0, 78.0), SlideDirection::None);
    }

    #[test]
    fn test_gate_requires_upright_previous() {
        assert_eq!(step(70.0, 160.0), SlideDirection::None);
        assert_eq!(step(101.0, 60.0), SlideDirection::None);
        assert_eq!(step(80.0, 93.0), SlideDirection::Left);
        assert_eq!(step(100.0, 87.0), SlideDirection::Right);
    }

    #[test]
    fn test_angle_updates_outside_gate() {
        let thresholds = ThresholdConfig::default();
        let mut detector = SlideDetector::new();
        detector.update(WRIST, knuckle_at(70.0), &thresholds);
        detector.update(WRIST, knuckle_at(160.0), &thresholds);
        assert_eq!(detector.previous_angle(), Some(160));
    }

    #[test]
    fn test_extreme_threshold_does_not_overflow() {
        let thresholds = ThresholdConfig {
            slide_angle_threshold_deg: i32::MAX,
            ..Default::default()
        };
        let mut detector = SlideDetector::new();
        detector.update(WRIST, knuckle_at(90.0), &thresholds);
        assert_eq!(
            detector.update(WRIST, knuckle_at(91.0), &thresholds),
            SlideDirection::None
        );
        assert_eq!(
            detector.update(WRIST, knuckle_at(-170.0), &thresholds),
            SlideDirection::None
        );
    }

    #[test]
    fn test_horizontal_previous_angle_is_tracked() {
        let thresholds = ThresholdConfig::default();
        let mut detector = SlideDetector::new();
        // A flat hand (0°) is a real measurement, not "unset".
        detector.update(WRIST, knuckle_at(0.0), &thresholds);
        assert_eq!(detector.previous_angle(), Some(0));
        assert_eq!(
            detector.update(WRIST, knuckle_at(90.0), &thresholds),
            SlideDirection::None
        );
    }
}
