//! Classify an observation stream into per-frame gesture labels.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use anyhow::Context;
use handmove_common::config::AppConfig;
use handmove_common::error::HandmoveResult;
use handmove_core::pinch::is_pinching;
use handmove_core::GestureClassifier;
use handmove_model::gesture::GestureSummary;
use handmove_model::stream::{ClassifiedFrame, LabelStreamHeader, TimedObservation};

pub fn run(
    config: &AppConfig,
    input: PathBuf,
    output: Option<PathBuf>,
    keep_going: bool,
) -> anyhow::Result<()> {
    let observations = super::load_observations(&input)?;
    let mut classifier = GestureClassifier::with_thresholds(config.thresholds.clone())?;

    let (frames, summary) = classify_stream(
        &mut classifier,
        &observations,
        config.thresholds.pinch_distance,
        keep_going,
    )
    .context("Classification stopped")?;

    let sink: Box<dyn Write> = match &output {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(std::io::stdout().lock()),
    };
    let mut writer = BufWriter::new(sink);

    let header = LabelStreamHeader::new(input.display().to_string());
    writeln!(writer, "# {}", serde_json::to_string(&header)?)?;
    for frame in &frames {
        writeln!(writer, "{}", serde_json::to_string(frame)?)?;
    }
    writer.flush()?;

    tracing::info!(
        frames = summary.frames,
        active = summary.active(),
        rejected = summary.rejected,
        "Classification complete"
    );
    if let Some(path) = output {
        eprintln!("Labels written to: {}", path.display());
    }

    Ok(())
}

/// Run one classifier over a stream, in order.
///
/// With `keep_going`, frames rejected as invalid input are recorded and
/// skipped; otherwise the first rejection is returned as the error.
pub fn classify_stream(
    classifier: &mut GestureClassifier,
    observations: &[TimedObservation],
    pinch_distance: f64,
    keep_going: bool,
) -> HandmoveResult<(Vec<ClassifiedFrame>, GestureSummary)> {
    let mut frames = Vec::with_capacity(observations.len());
    let mut summary = GestureSummary::default();

    for timed in observations {
        let obs = &timed.observation;
        match classifier.classify(obs) {
            Ok(result) => {
                summary.record(&result);
                let pinch = is_pinching(obs, pinch_distance);
                if pinch == Some(true) {
                    summary.record_pinch();
                }
                frames.push(ClassifiedFrame::labels(
                    timed.timestamp_ns,
                    obs.frame_index,
                    result,
                    pinch,
                ));
            }
            Err(e) if keep_going && e.is_invalid_input() => {
                summary.record_rejected();
                frames.push(ClassifiedFrame::rejected(
                    timed.timestamp_ns,
                    obs.frame_index,
                    e.to_string(),
                ));
            }
            Err(e) => return Err(e),
        }
    }

    Ok((frames, summary))
}

#[cfg(test)]
mod tests {
    use super::*;
    use handmove_model::gesture::{ScrollDirection, ZoomDirection};
    use handmove_model::stream::parse_observations;

    const STREAM: &str = r#"
{"rect":{"x_center":0.5,"y_center":0.5,"height":0.3},"landmarks":[{"x":0.4,"y":0.6},{"x":0.4,"y":0.6},{"x":0.4,"y":0.6},{"x":0.4,"y":0.6},{"x":0.4,"y":0.6},{"x":0.4,"y":0.6},{"x":0.4,"y":0.6},{"x":0.4,"y":0.6},{"x":0.4,"y":0.6},{"x":0.4,"y":0.4}]}
{"rect":{"x_center":0.5,"y_center":0.5,"height":0.3},"landmarks":[{"x":0.4,"y":0.6}]}
{"rect":{"x_center":0.7,"y_center":0.5,"height":0.4},"landmarks":[{"x":0.4,"y":0.6},{"x":0.4,"y":0.6},{"x":0.4,"y":0.6},{"x":0.4,"y":0.6},{"x":0.4,"y":0.6},{"x":0.4,"y":0.6},{"x":0.4,"y":0.6},{"x":0.4,"y":0.6},{"x":0.4,"y":0.6},{"x":0.4,"y":0.4}]}
"#;

    #[test]
    fn test_keep_going_records_rejections() {
        let observations = parse_observations(STREAM).unwrap();
        let mut classifier = GestureClassifier::new();
        let (frames, summary) =
            classify_stream(&mut classifier, &observations, 0.1, true).unwrap();

        assert_eq!(frames.len(), 3);
        assert_eq!(frames[1].result(), None);
        let last = frames[2].result().unwrap();
        assert_eq!(last.scroll, ScrollDirection::Right);
        assert_eq!(last.zoom, ZoomDirection::In);

        assert_eq!(summary.frames, 2);
        assert_eq!(summary.rejected, 1);
        assert_eq!(summary.pinched, 2);
    }

    #[test]
    fn test_stops_on_first_rejection() {
        let observations = parse_observations(STREAM).unwrap();
        let mut classifier = GestureClassifier::new();
        let err = classify_stream(&mut classifier, &observations, 0.1, false).unwrap_err();
        assert!(err.is_invalid_input());
        assert_eq!(classifier.frames_classified(), 1);
    }
}
