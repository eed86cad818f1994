//! Gesture label types.
//!
//! Each category is a closed enumeration with an explicit `None` variant,
//! so every frame produces exactly one label per category.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Human-readable label for "no gesture".
pub const NO_GESTURE_LABEL: &str = "___";

/// Direction of a whole-hand translation.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ScrollDirection {
    #[default]
    None,
    Right,
    Up,
    Left,
    Down,
}

/// Direction of a change in apparent hand size.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ZoomDirection {
    #[default]
    None,
    /// Hand grew: it moved towards the camera.
    In,
    /// Hand shrank: it moved away from the camera.
    Out,
}

/// Direction of a tilt of an upright hand.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum SlideDirection {
    #[default]
    None,
    Left,
    Right,
}

impl ScrollDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => NO_GESTURE_LABEL,
            Self::Right => "Scrolling right",
            Self::Up => "Scrolling up",
            Self::Left => "Scrolling left",
            Self::Down => "Scrolling down",
        }
    }

    pub fn is_none(&self) -> bool {
        *self == Self::None
    }
}

impl ZoomDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => NO_GESTURE_LABEL,
            Self::In => "Zoom in",
            Self::Out => "Zoom out",
        }
    }

    pub fn is_none(&self) -> bool {
        *self == Self::None
    }
}

impl SlideDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => NO_GESTURE_LABEL,
            Self::Left => "Slide left",
            Self::Right => "Slide right",
        }
    }

    pub fn is_none(&self) -> bool {
        *self == Self::None
    }
}

impl fmt::Display for ScrollDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ZoomDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for SlideDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The three independent decisions made for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub scroll: ScrollDirection,
    pub zoom: ZoomDirection,
    pub slide: SlideDirection,
}

impl ClassificationResult {
    pub fn new(scroll: ScrollDirection, zoom: ZoomDirection, slide: SlideDirection) -> Self {
        Self {
            scroll,
            zoom,
            slide,
        }
    }

    /// No category recognized anything this frame.
    pub fn is_quiet(&self) -> bool {
        self.scroll.is_none() && self.zoom.is_none() && self.slide.is_none()
    }
}

/// Label tallies over a classified stream.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GestureSummary {
    /// Frames that produced a result.
    pub frames: u64,
    /// Frames rejected as invalid input.
    pub rejected: u64,
    /// Frames with all three labels `None`.
    pub quiet: u64,
    /// Frames where the hand was pinching.
    pub pinched: u64,
    pub scroll: BTreeMap<ScrollDirection, u64>,
    pub zoom: BTreeMap<ZoomDirection, u64>,
    pub slide: BTreeMap<SlideDirection, u64>,
}

impl GestureSummary {
    /// Count one classified frame.
    pub fn record(&mut self, result: &ClassificationResult) {
        self.frames += 1;
        if result.is_quiet() {
            self.quiet += 1;
        }
        *self.scroll.entry(result.scroll).or_default() += 1;
        *self.zoom.entry(result.zoom).or_default() += 1;
        *self.slide.entry(result.slide).or_default() += 1;
    }

    /// Count one frame rejected before classification.
    pub fn record_rejected(&mut self) {
        self.rejected += 1;
    }

    pub fn record_pinch(&mut self) {
        self.pinched += 1;
    }

    /// Number of frames with at least one recognized gesture.
    pub fn active(&self) -> u64 {
        self.frames - self.quiet
    }
}
