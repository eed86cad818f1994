//! Handmove Core — the gesture classifier
//!
//! Turns a stream of per-frame hand observations into discrete gestures:
//! - **Scroll:** Whole-hand translation, bucketed into four directions
//! - **Zoom:** Hand rectangle growing or shrinking
//! - **Slide:** Tilt of an upright hand, sampled on alternate frames
//!
//! Each frame is compared only against a one-frame snapshot, so every call
//! is O(1). This crate is pure computation — no I/O, no platform
//! dependencies.

pub mod classifier;
pub mod geometry;
pub mod pinch;
pub mod scroll;
pub mod slide;
pub mod zoom;

pub use classifier::{GestureClassifier, Snapshot};
