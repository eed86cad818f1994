//! Print gesture tallies for an observation stream.

use std::path::PathBuf;

use handmove_common::config::AppConfig;
use handmove_core::GestureClassifier;

use super::classify::classify_stream;

pub fn run(config: &AppConfig, input: PathBuf, json: bool) -> anyhow::Result<()> {
    let observations = super::load_observations(&input)?;
    let mut classifier = GestureClassifier::with_thresholds(config.thresholds.clone())?;
    let (_, summary) = classify_stream(
        &mut classifier,
        &observations,
        config.thresholds.pinch_distance,
        true,
    )?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("Gesture summary for: {}", input.display());
    println!("  Frames classified: {}", summary.frames);
    println!("  Frames rejected: {}", summary.rejected);
    println!("  Frames with a gesture: {}", summary.active());
    println!("  Frames with a pinch: {}", summary.pinched);

    println!("\nScroll:");
    for (direction, count) in summary.scroll.iter().filter(|(d, _)| !d.is_none()) {
        println!("  {direction}: {count}");
    }
    println!("\nZoom:");
    for (direction, count) in summary.zoom.iter().filter(|(d, _)| !d.is_none()) {
        println!("  {direction}: {count}");
    }
    println!("\nSlide:");
    for (direction, count) in summary.slide.iter().filter(|(d, _)| !d.is_none()) {
        println!("  {direction}: {count}");
    }

    Ok(())
}
