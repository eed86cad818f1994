//! The per-stream gesture classifier.
//!
//! One [`GestureClassifier`] serves one ordered stream of frames. Every call
//! to [`GestureClassifier::classify`] compares the frame against the
//! snapshot of the previous frame, emits one label per category, and
//! overwrites the snapshot. Independent streams need independent
//! classifiers; instances share nothing.

use handmove_common::config::ThresholdConfig;
use handmove_common::error::{HandmoveError, HandmoveResult};
use handmove_model::gesture::{ClassificationResult, SlideDirection};
use handmove_model::landmark::{MIDDLE_MCP, MIN_CLASSIFIER_LANDMARKS, WRIST};
use handmove_model::observation::HandObservation;
use handmove_model::geometry::Point2D;

use crate::scroll::ScrollDetector;
use crate::slide::SlideDetector;
use crate::zoom::ZoomDetector;

/// Stateful scroll / zoom / slide classifier.
#[derive(Debug, Clone)]
pub struct GestureClassifier {
    thresholds: ThresholdConfig,
    scroll: ScrollDetector,
    zoom: ZoomDetector,
    slide: SlideDetector,
    frames_classified: u64,
}

/// What the classifier remembers about the previous frame.
///
/// Each field stays `None` until its detector has run once.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Snapshot {
    pub center: Option<Point2D>,
    pub rect_height: Option<f64>,
    /// Tilt from the last frame the slide detector evaluated.
    pub wrist_to_knuckle_angle_deg: Option<i32>,
}

impl GestureClassifier {
    /// Create a classifier with the default thresholds.
    pub fn new() -> Self {
        Self::from_valid_thresholds(ThresholdConfig::default())
    }

    /// Create a classifier with custom thresholds.
    pub fn with_thresholds(thresholds: ThresholdConfig) -> HandmoveResult<Self> {
        thresholds.validate()?;
        Ok(Self::from_valid_thresholds(thresholds))
    }

    fn from_valid_thresholds(thresholds: ThresholdConfig) -> Self {
        Self {
            thresholds,
            scroll: ScrollDetector::new(),
            zoom: ZoomDetector::new(),
            slide: SlideDetector::new(),
            frames_classified: 0,
        }
    }

    /// Classify one frame.
    ///
    /// Frames must arrive in order. A frame with fewer than
    /// [`MIN_CLASSIFIER_LANDMARKS`] landmarks is rejected with
    /// [`HandmoveError::InvalidInput`] and leaves the snapshot untouched.
    pub fn classify(
        &mut self,
        observation: &HandObservation,
    ) -> HandmoveResult<ClassificationResult> {
        let (wrist, knuckle) = match (
            observation.landmark(WRIST),
            observation.landmark(MIDDLE_MCP),
        ) {
            (Some(wrist), Some(knuckle)) => (wrist.to_point(), knuckle.to_point()),
            _ => {
                tracing::warn!(
                    frame = observation.frame_index,
                    landmarks = observation.landmarks.len(),
                    "Rejecting frame with too few landmarks"
                );
                return Err(HandmoveError::invalid_input(format!(
                    "frame {} has {} landmarks, need at least {}",
                    observation.frame_index,
                    observation.landmarks.len(),
                    MIN_CLASSIFIER_LANDMARKS
                )));
            }
        };

        let rect = &observation.rect;
        let scroll = self.scroll.update(
            rect.center(),
            rect.height,
            self.thresholds.scroll_distance_factor,
        );
        let zoom = self
            .zoom
            .update(rect.height, self.thresholds.zoom_height_factor);
        let slide = if self.samples_slide(observation.frame_index) {
            self.slide.update(wrist, knuckle, &self.thresholds)
        } else {
            SlideDirection::None
        };

        self.frames_classified += 1;
        let result = ClassificationResult::new(scroll, zoom, slide);
        tracing::trace!(
            frame = observation.frame_index,
            scroll = %result.scroll,
            zoom = %result.zoom,
            slide = %result.slide,
            "Frame classified"
        );
        Ok(result)
    }

    /// Whether the slide detector runs on this frame.
    pub fn samples_slide(&self, frame_index: u64) -> bool {
        frame_index % self.thresholds.slide_sample_interval == 0
    }

    /// Copy of the previous-frame state.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            center: self.scroll.previous_center(),
            rect_height: self.zoom.previous_height(),
            wrist_to_knuckle_angle_deg: self.slide.previous_angle(),
        }
    }

    /// Frames successfully classified so far.
    pub fn frames_classified(&self) -> u64 {
        self.frames_classified
    }
}

impl Default for GestureClassifier {
    fn default() -> Self {
        Self::new()
    }
}
