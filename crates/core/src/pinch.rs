//! Thumb/index pinch detection.
//!
//! Stateless and independent of the three classifier decisions.

use handmove_model::landmark::{INDEX_TIP, THUMB_TIP};
use handmove_model::observation::HandObservation;

use crate::geometry::euclidean_distance;

/// Whether the thumb tip and index tip are closer than `max_distance`.
///
/// Returns `None` when the landmark list does not reach the index tip.
pub fn is_pinching(observation: &HandObservation, max_distance: f64) -> Option<bool> {
    let thumb = observation.landmark(THUMB_TIP)?.to_point();
    let index = observation.landmark(INDEX_TIP)?.to_point();
    Some(euclidean_distance(thumb, index) < max_distance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use handmove_model::landmark::{NormalizedLandmark, HAND_LANDMARK_COUNT};
    use handmove_model::geometry::NormalizedRect;

    fn hand(thumb: (f64, f64), index: (f64, f64)) -> HandObservation {
        let mut landmarks = vec![NormalizedLandmark::new(0.5, 0.7); HAND_LANDMARK_COUNT];
        landmarks[THUMB_TIP] = NormalizedLandmark::new(thumb.0, thumb.1);
        landmarks[INDEX_TIP] = NormalizedLandmark::new(index.0, index.1);
        HandObservation::new(0, NormalizedRect::new(0.5, 0.5, 0.3), landmarks)
    }

    #[test]
    fn test_tips_together() {
        let obs = hand((0.40, 0.40), (0.45, 0.42));
        assert_eq!(is_pinching(&obs, 0.1), Some(true));
    }

    #[test]
    fn test_tips_apart() {
        let obs = hand((0.30, 0.50), (0.50, 0.30));
        assert_eq!(is_pinching(&obs, 0.1), Some(false));
    }

    #[test]
    fn test_short_list() {
        let mut obs = hand((0.4, 0.4), (0.4, 0.4));
        obs.landmarks.truncate(INDEX_TIP);
        assert_eq!(is_pinching(&obs, 0.1), None);
    }
}
