pub mod classify;
pub mod config;
pub mod summary;

use std::io::Read;
use std::path::Path;

use handmove_common::error::HandmoveError;
use handmove_model::stream::{parse_observation_stream, StreamParseError, TimedObservation};

/// Read and parse an observation stream from a file, or stdin for "-".
pub fn load_observations(input: &Path) -> anyhow::Result<Vec<TimedObservation>> {
    let content = if input == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        if !input.exists() {
            return Err(HandmoveError::FileNotFound {
                path: input.to_path_buf(),
            }
            .into());
        }
        std::fs::read_to_string(input)?
    };

    let stream = parse_observation_stream(&content).map_err(stream_error)?;
    let header = stream.header.unwrap_or_default();
    tracing::info!(
        frames = stream.observations.len(),
        path = %input.display(),
        recorded_by = header.source.as_deref().unwrap_or("unknown"),
        fps = ?header.fps,
        "Loaded observation stream"
    );
    Ok(stream.observations)
}

fn stream_error(err: StreamParseError) -> HandmoveError {
    match err {
        StreamParseError::Header { line, source } => {
            HandmoveError::stream(line, format!("invalid header: {source}"))
        }
        StreamParseError::Record { line, source } => {
            HandmoveError::stream(line, source.to_string())
        }
        StreamParseError::FrameOrder {
            line,
            frame,
            previous,
        } => HandmoveError::stream(
            line,
            format!("frame {frame} does not follow frame {previous}"),
        ),
    }
}
