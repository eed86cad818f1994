//! Handmove Common Utilities
//!
//! Shared infrastructure for all handmove crates:
//! - Error types and result aliases
//! - Tracing/logging initialization
//! - Configuration loading (classifier thresholds, logging)

pub mod config;
pub mod error;
pub mod logging;

pub use config::*;
pub use error::*;
