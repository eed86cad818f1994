//! handmove CLI — classify recorded hand observations into gestures.
//!
//! Usage:
//!   handmove classify <INPUT>    Write scroll/zoom/slide labels per frame
//!   handmove summary <INPUT>     Print label tallies for a stream
//!   handmove config              Show or write the configuration

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use handmove_common::config::AppConfig;

mod commands;

#[derive(Parser)]
#[command(
    name = "handmove",
    about = "Recognize scroll, zoom, and slide gestures from hand landmarks",
    version,
    author
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file (defaults to the standard location)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify an observation stream (JSONL) into gesture labels
    Classify {
        /// Observation stream, or "-" for stdin
        input: PathBuf,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Record invalid frames and continue instead of stopping
        #[arg(long)]
        keep_going: bool,
    },

    /// Classify an observation stream and print label tallies
    Summary {
        /// Observation stream, or "-" for stdin
        input: PathBuf,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the effective configuration
    Config {
        /// Write the default configuration to the standard location
        #[arg(long)]
        write: bool,
    },
}

/// An explicit config path is strict; the standard location falls back to defaults.
fn load_config(path: Option<&Path>) -> anyhow::Result<AppConfig> {
    match path {
        Some(path) => AppConfig::load_from(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => Ok(AppConfig::load()),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = load_config(cli.config.as_deref())?;

    // Initialize logging
    if cli.verbose {
        config.logging.level = "debug".to_string();
    }
    handmove_common::logging::init_logging(&config.logging);

    match cli.command {
        Commands::Classify {
            input,
            output,
            keep_going,
        } => commands::classify::run(&config, input, output, keep_going),
        Commands::Summary { input, json } => commands::summary::run(&config, input, json),
        Commands::Config { write } => commands::config::run(&config, write),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use handmove_common::error::HandmoveError;

    #[test]
    fn test_missing_config_keeps_error_chain() {
        let path = std::env::temp_dir().join("handmove-cli-missing-config.json");
        let err = load_config(Some(&path)).unwrap_err();

        assert!(err.to_string().starts_with("Failed to load config"));
        assert!(matches!(
            err.downcast_ref::<HandmoveError>(),
            Some(HandmoveError::FileNotFound { .. })
        ));
    }
}
