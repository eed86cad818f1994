//! Application configuration.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{HandmoveError, HandmoveResult};

/// Global application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Gesture classifier thresholds.
    pub thresholds: ThresholdConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Hysteresis thresholds used by the gesture classifier.
///
/// These are fixed for the lifetime of a classifier; nothing adapts them
/// at runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThresholdConfig {
    /// Minimum center displacement for a scroll, as a fraction of the
    /// current hand-rectangle height.
    pub scroll_distance_factor: f64,

    /// Minimum height change for a zoom, as a fraction of the current
    /// hand-rectangle height.
    pub zoom_height_factor: f64,

    /// Minimum tilt change (degrees) between evaluated frames for a slide.
    pub slide_angle_threshold_deg: i32,

    /// Lower bound (inclusive) of the "hand upright" band for the
    /// previous tilt angle.
    pub slide_gate_min_deg: i32,

    /// Upper bound (inclusive) of the "hand upright" band.
    pub slide_gate_max_deg: i32,

    /// Slide runs on frames whose index is a multiple of this value.
    pub slide_sample_interval: u64,

    /// Maximum thumb-tip to index-tip distance (normalized) for a pinch.
    pub pinch_distance: f64,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "handmove_core=debug,warn").
    pub level: String,

    /// Whether to output structured JSON logs.
    pub json: bool,
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            scroll_distance_factor: 0.02,
            zoom_height_factor: 0.03,
            slide_angle_threshold_deg: 12,
            slide_gate_min_deg: 80,
            slide_gate_max_deg: 100,
            slide_sample_interval: 2,
            pinch_distance: 0.1,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

impl ThresholdConfig {
    /// Reject thresholds the classifier cannot work with.
    pub fn validate(&self) -> HandmoveResult<()> {
        let factors = [
            ("scroll_distance_factor", self.scroll_distance_factor),
            ("zoom_height_factor", self.zoom_height_factor),
            ("pinch_distance", self.pinch_distance),
        ];
        for (name, value) in factors {
            if !value.is_finite() || value < 0.0 {
                return Err(HandmoveError::config(format!(
                    "{name} must be a finite non-negative number, got {value}"
                )));
            }
        }

        if !(0..=360).contains(&self.slide_angle_threshold_deg) {
            return Err(HandmoveError::config(format!(
                "slide_angle_threshold_deg must be within [0, 360], got {}",
                self.slide_angle_threshold_deg
            )));
        }

        for (name, value) in [
            ("slide_gate_min_deg", self.slide_gate_min_deg),
            ("slide_gate_max_deg", self.slide_gate_max_deg),
        ] {
            if !(-180..=180).contains(&value) {
                return Err(HandmoveError::config(format!(
                    "{name} must be within [-180, 180], got {value}"
                )));
            }
        }

        if self.slide_gate_min_deg > self.slide_gate_max_deg {
            return Err(HandmoveError::config(format!(
                "slide gate is inverted: [{}, {}]",
                self.slide_gate_min_deg, self.slide_gate_max_deg
            )));
        }

        if self.slide_sample_interval == 0 {
            return Err(HandmoveError::config(
                "slide_sample_interval must be at least 1",
            ));
        }

        Ok(())
    }
}

impl AppConfig {
    /// Load config from the standard location, falling back to defaults.
    pub fn load() -> Self {
        let config_path = config_file_path();
        if !config_path.exists() {
            return Self::default();
        }
        match Self::load_from(&config_path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Failed to load config at {:?}: {}", config_path, e);
                Self::default()
            }
        }
    }

    /// Load and validate config from an explicit path.
    pub fn load_from(path: &Path) -> HandmoveResult<Self> {
        if !path.exists() {
            return Err(HandmoveError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.thresholds.validate()?;
        Ok(config)
    }

    /// Save config to the standard location.
    pub fn save(&self) -> HandmoveResult<PathBuf> {
        let config_path = config_file_path();
        self.save_to(&config_path)?;
        Ok(config_path)
    }

    /// Save config to an explicit path, creating parent directories.
    pub fn save_to(&self, path: &Path) -> HandmoveResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

/// Standard config file location.
pub fn config_file_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("handmove").join("config.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("handmove-config-{}-{name}", std::process::id()))
            .join("config.json")
    }

    #[test]
    fn test_default_thresholds_are_valid() {
        let thresholds = ThresholdConfig::default();
        assert!(thresholds.validate().is_ok());
        assert!((thresholds.scroll_distance_factor - 0.02).abs() < 1e-12);
        assert!((thresholds.zoom_height_factor - 0.03).abs() < 1e-12);
        assert_eq!(thresholds.slide_angle_threshold_deg, 12);
        assert_eq!(
            (thresholds.slide_gate_min_deg, thresholds.slide_gate_max_deg),
            (80, 100)
        );
        assert_eq!(thresholds.slide_sample_interval, 2);
    }

    #[test]
    fn test_validate_rejects_bad_thresholds() {
        let inverted = ThresholdConfig {
            slide_gate_min_deg: 100,
            slide_gate_max_deg: 80,
            ..Default::default()
        };
        assert!(matches!(
            inverted.validate(),
            Err(HandmoveError::Config { .. })
        ));

        let nan = ThresholdConfig {
            zoom_height_factor: f64::NAN,
            ..Default::default()
        };
        assert!(nan.validate().is_err());

        let huge_threshold = ThresholdConfig {
            slide_angle_threshold_deg: i32::MAX,
            ..Default::default()
        };
        assert!(matches!(
            huge_threshold.validate(),
            Err(HandmoveError::Config { .. })
        ));

        let wide_gate = ThresholdConfig {
            slide_gate_min_deg: i32::MIN,
            ..Default::default()
        };
        assert!(wide_gate.validate().is_err());

        let no_sampling = ThresholdConfig {
            slide_sample_interval: 0,
            ..Default::default()
        };
        assert!(no_sampling.validate().is_err());
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: AppConfig =
            serde_json::from_str(r#"{"thresholds": {"slide_angle_threshold_deg": 15}}"#).unwrap();
        assert_eq!(config.thresholds.slide_angle_threshold_deg, 15);
        assert_eq!(config.thresholds.slide_gate_min_deg, 80);
        assert_eq!(config.logging, LoggingConfig::default());
    }

    #[test]
    fn test_save_and_load_from() {
        let path = scratch_path("roundtrip");
        let mut config = AppConfig::default();
        config.logging.level = "debug".to_string();
        config.save_to(&path).unwrap();

        let loaded = AppConfig::load_from(&path).unwrap();
        assert_eq!(loaded, config);

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_load_from_missing_file() {
        let path = scratch_path("missing");
        assert!(matches!(
            AppConfig::load_from(&path),
            Err(HandmoveError::FileNotFound { .. })
        ));
    }
}
