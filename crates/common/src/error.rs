//! Error types shared across handmove crates.

use std::path::PathBuf;

/// Top-level error type for handmove operations.
#[derive(Debug, thiserror::Error)]
pub enum HandmoveError {
    /// A frame violated the input contract (e.g. too few landmarks).
    ///
    /// Raised before any classifier state is touched, so the call can be
    /// retried with corrected data.
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Stream error at line {line}: {message}")]
    Stream { line: usize, message: String },

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Result type alias using HandmoveError.
pub type HandmoveResult<T> = Result<T, HandmoveError>;

impl HandmoveError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: msg.into(),
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    pub fn stream(line: usize, msg: impl Into<String>) -> Self {
        Self::Stream {
            line,
            message: msg.into(),
        }
    }

    /// Whether this error only rejects the current frame.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_message() {
        let err = HandmoveError::invalid_input("landmark list has 3 points, need at least 10");
        assert!(err.is_invalid_input());
        assert_eq!(
            err.to_string(),
            "Invalid input: landmark list has 3 points, need at least 10"
        );
    }

    #[test]
    fn test_stream_error_carries_line() {
        let err = HandmoveError::stream(7, "missing field `rect`");
        assert!(!err.is_invalid_input());
        assert_eq!(err.to_string(), "Stream error at line 7: missing field `rect`");
    }
}
