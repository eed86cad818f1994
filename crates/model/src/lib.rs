//! Handmove Model
//!
//! Defines the data contracts shared by the classifier and its callers:
//! - **Geometry:** Normalized points and the hand bounding rectangle
//! - **Landmarks:** The 21-point hand landmark convention
//! - **Observations:** One per delivered frame
//! - **Gestures:** Closed label enums for scroll, zoom, and slide
//! - **Streams:** JSONL formats for recorded observations and emitted labels
//!
//! All coordinates are normalized to `[0.0, 1.0]` relative to the camera
//! frame, with `y` growing downwards.

pub mod geometry;
pub mod gesture;
pub mod landmark;
pub mod observation;
pub mod stream;

pub use geometry::*;
pub use gesture::*;
pub use landmark::*;
pub use observation::*;
pub use stream::*;
