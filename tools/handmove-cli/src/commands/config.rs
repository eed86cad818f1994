//! Show or write the handmove configuration.

use anyhow::Context;
use handmove_common::config::AppConfig;

pub fn run(config: &AppConfig, write: bool) -> anyhow::Result<()> {
    if write {
        let path = AppConfig::default()
            .save()
            .context("Failed to write config")?;
        println!("Default configuration written to: {}", path.display());
        return Ok(());
    }

    println!("{}", serde_json::to_string_pretty(config)?);
    Ok(())
}
