//! Hand landmark convention.
//!
//! A tracked hand is described by 21 keypoints in a fixed order: the wrist,
//! then four joints per finger from thumb to pinky, base to tip.

use serde::{Deserialize, Serialize};

use crate::geometry::Point2D;

pub const WRIST: usize = 0;
pub const THUMB_CMC: usize = 1;
pub const THUMB_MCP: usize = 2;
pub const THUMB_IP: usize = 3;
pub const THUMB_TIP: usize = 4;
pub const INDEX_MCP: usize = 5;
pub const INDEX_PIP: usize = 6;
pub const INDEX_DIP: usize = 7;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_MCP: usize = 9;
pub const MIDDLE_PIP: usize = 10;
pub const MIDDLE_DIP: usize = 11;
pub const MIDDLE_TIP: usize = 12;
pub const RING_MCP: usize = 13;
pub const RING_PIP: usize = 14;
pub const RING_DIP: usize = 15;
pub const RING_TIP: usize = 16;
pub const PINKY_MCP: usize = 17;
pub const PINKY_PIP: usize = 18;
pub const PINKY_DIP: usize = 19;
pub const PINKY_TIP: usize = 20;

/// Number of landmarks a complete hand carries.
pub const HAND_LANDMARK_COUNT: usize = 21;

/// Shortest landmark list the gesture classifier accepts (it reads
/// [`WRIST`] and [`MIDDLE_MCP`]).
pub const MIN_CLASSIFIER_LANDMARKS: usize = MIDDLE_MCP + 1;

/// One tracked hand keypoint.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct NormalizedLandmark {
    /// Normalized X coordinate [0.0, 1.0].
    pub x: f64,
    /// Normalized Y coordinate [0.0, 1.0].
    pub y: f64,
    /// Relative depth; unused by the 2D gestures.
    #[serde(default)]
    pub z: f64,
}

impl NormalizedLandmark {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y, z: 0.0 }
    }

    /// Projection onto the image plane.
    pub fn to_point(&self) -> Point2D {
        Point2D::new(self.x, self.y)
    }
}
