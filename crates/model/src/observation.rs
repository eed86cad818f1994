//! Per-frame hand observations.

use serde::{Deserialize, Serialize};

use crate::landmark::NormalizedLandmark;
use crate::geometry::NormalizedRect;

/// Everything the classifier sees about one delivered frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HandObservation {
    /// Monotonic per-stream counter; decides slide sampling cadence.
    pub frame_index: u64,

    /// Hand bounding rectangle.
    pub rect: NormalizedRect,

    /// Hand landmarks in the 21-point convention.
    pub landmarks: Vec<NormalizedLandmark>,
}

impl HandObservation {
    pub fn new(frame_index: u64, rect: NormalizedRect, landmarks: Vec<NormalizedLandmark>) -> Self {
        Self {
            frame_index,
            rect,
            landmarks,
        }
    }

    /// Landmark at `index`, if the list is long enough.
    pub fn landmark(&self, index: usize) -> Option<&NormalizedLandmark> {
        self.landmarks.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::landmark::{MIDDLE_MCP, WRIST};

    #[test]
    fn test_landmark_lookup_is_bounds_checked() {
        let obs = HandObservation::new(
            0,
            NormalizedRect::new(0.5, 0.5, 0.3),
            vec![NormalizedLandmark::new(0.4, 0.6); 3],
        );
        assert!(obs.landmark(WRIST).is_some());
        assert!(obs.landmark(MIDDLE_MCP).is_none());
    }
}
