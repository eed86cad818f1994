//! JSONL stream formats.
//!
//! Recorded observations are read one JSON object per line, optionally
//! preceded by a `#`-prefixed header line. Blank lines and other `#` lines
//! are skipped. Classifier output is written the same way.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::geometry::NormalizedRect;
use crate::gesture::{ClassificationResult, ScrollDirection, SlideDirection, ZoomDirection};
use crate::landmark::NormalizedLandmark;
use crate::observation::HandObservation;

/// Schema version written into label stream headers.
pub const LABEL_SCHEMA_VERSION: &str = "1.0";

/// Monotonic timestamp in nanoseconds since stream start.
pub type TimestampNs = u64;

/// One line of a recorded observation stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObservationRecord {
    /// Capture timestamp, if the recorder provided one.
    #[serde(rename = "t", default, skip_serializing_if = "Option::is_none")]
    pub timestamp_ns: Option<TimestampNs>,

    /// Explicit frame index; defaults to one past the previous record's.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frame: Option<u64>,

    pub rect: NormalizedRect,

    pub landmarks: Vec<NormalizedLandmark>,
}

/// A parsed observation with its optional capture timestamp.
#[derive(Debug, Clone, PartialEq)]
pub struct TimedObservation {
    pub timestamp_ns: Option<TimestampNs>,
    pub observation: HandObservation,
}

/// Metadata carried on a leading `# {json}` line of an observation stream.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ObservationStreamHeader {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema_version: Option<String>,

    /// Recorder or camera that produced the stream.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    /// Nominal capture rate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fps: Option<f64>,
}

/// A parsed observation stream.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ObservationStream {
    pub header: Option<ObservationStreamHeader>,
    pub observations: Vec<TimedObservation>,
}

/// A line of an observation stream that could not be used.
#[derive(Debug, thiserror::Error)]
pub enum StreamParseError {
    #[error("line {line}: invalid header: {source}")]
    Header {
        line: usize,
        source: serde_json::Error,
    },

    #[error("line {line}: {source}")]
    Record {
        line: usize,
        source: serde_json::Error,
    },

    #[error("line {line}: frame {frame} does not follow frame {previous}")]
    FrameOrder {
        line: usize,
        frame: u64,
        previous: u64,
    },
}

impl StreamParseError {
    /// One-based line number in the input.
    pub fn line(&self) -> usize {
        match self {
            Self::Header { line, .. }
            | Self::Record { line, .. }
            | Self::FrameOrder { line, .. } => *line,
        }
    }
}

/// Parse an observation stream from JSONL content.
///
/// A `# {json}` line before the first record is read as the stream header;
/// other `#` lines and blank lines are skipped. Explicit `frame` values
/// must strictly increase; records without one continue from the previous
/// frame (the first defaults to 0).
pub fn parse_observation_stream(jsonl: &str) -> Result<ObservationStream, StreamParseError> {
    let mut stream = ObservationStream::default();
    let mut previous_frame: Option<u64> = None;

    for (i, line) in jsonl.lines().enumerate() {
        let line_no = i + 1;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(comment) = line.strip_prefix('#') {
            let comment = comment.trim();
            let leading = stream.header.is_none() && stream.observations.is_empty();
            if leading && comment.starts_with('{') {
                let header = serde_json::from_str(comment).map_err(|source| {
                    StreamParseError::Header {
                        line: line_no,
                        source,
                    }
                })?;
                stream.header = Some(header);
            }
            continue;
        }

        let record: ObservationRecord =
            serde_json::from_str(line).map_err(|source| StreamParseError::Record {
                line: line_no,
                source,
            })?;

        let frame_index = match (record.frame, previous_frame) {
            (Some(frame), Some(previous)) if frame <= previous => {
                return Err(StreamParseError::FrameOrder {
                    line: line_no,
                    frame,
                    previous,
                });
            }
            (Some(frame), _) => frame,
            (None, Some(previous)) => previous + 1,
            (None, None) => 0,
        };
        previous_frame = Some(frame_index);

        stream.observations.push(TimedObservation {
            timestamp_ns: record.timestamp_ns,
            observation: HandObservation::new(frame_index, record.rect, record.landmarks),
        });
    }

    Ok(stream)
}

/// Parse just the observations of a JSONL stream.
pub fn parse_observations(jsonl: &str) -> Result<Vec<TimedObservation>, StreamParseError> {
    parse_observation_stream(jsonl).map(|stream| stream.observations)
}

/// Header line of a label stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelStreamHeader {
    pub schema_version: String,

    /// Wall-clock time the labels were produced.
    pub generated_at: DateTime<Utc>,

    /// Where the observations came from (file path or "-").
    pub source: String,
}

impl LabelStreamHeader {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            schema_version: LABEL_SCHEMA_VERSION.to_string(),
            generated_at: Utc::now(),
            source: source.into(),
        }
    }
}

/// One line of a label stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedFrame {
    #[serde(rename = "t", default, skip_serializing_if = "Option::is_none")]
    pub timestamp_ns: Option<TimestampNs>,

    pub frame: u64,

    #[serde(flatten)]
    pub outcome: FrameOutcome,
}

/// What happened to one frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FrameOutcome {
    /// The classifier produced labels.
    Labels {
        scroll: ScrollDirection,
        zoom: ZoomDirection,
        slide: SlideDirection,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pinch: Option<bool>,
    },
    /// The frame was rejected; classifier state was left untouched.
    Rejected { error: String },
}

impl ClassifiedFrame {
    pub fn labels(
        timestamp_ns: Option<TimestampNs>,
        frame: u64,
        result: ClassificationResult,
        pinch: Option<bool>,
    ) -> Self {
        Self {
            timestamp_ns,
            frame,
            outcome: FrameOutcome::Labels {
                scroll: result.scroll,
                zoom: result.zoom,
                slide: result.slide,
                pinch,
            },
        }
    }

    pub fn rejected(
        timestamp_ns: Option<TimestampNs>,
        frame: u64,
        error: impl Into<String>,
    ) -> Self {
        Self {
            timestamp_ns,
            frame,
            outcome: FrameOutcome::Rejected {
                error: error.into(),
            },
        }
    }

    /// The labels, if the frame was classified.
    pub fn result(&self) -> Option<ClassificationResult> {
        match &self.outcome {
            FrameOutcome::Labels {
                scroll,
                zoom,
                slide,
                ..
            } => Some(ClassificationResult::new(*scroll, *zoom, *slide)),
            FrameOutcome::Rejected { .. } => None,
        }
    }
}
