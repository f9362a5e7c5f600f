//! Frontend configuration, loaded from an optional TOML file.
//!
//! Gameplay tuning is compiled in (see `defender_core::constants`); this only
//! covers how the frontend drives the simulation.

use std::path::Path;

use serde::{Deserialize, Serialize};

use defender_core::constants::FRAME_RATE;

/// Configuration errors.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// Value out of range
    #[error("Invalid value: {0}")]
    Invalid(String),
}

/// Which renderer receives frame snapshots.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RendererKind {
    /// Log a per-frame summary.
    #[default]
    Log,
    /// Write every snapshot as one JSON line to stdout.
    Json,
}

/// Automatic pilot settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutopilotConfig {
    /// Fly the ship automatically. When false the ship idles.
    pub enabled: bool,
    /// Tap shoot once every this many frames.
    pub fire_every_frames: u32,
}

impl Default for AutopilotConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            fire_every_frames: 12,
        }
    }
}

/// Top-level frontend configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// RNG seed for the simulation.
    pub seed: u64,
    /// Frames per second; the simulation advances 1/frame_rate seconds per frame.
    pub frame_rate: u32,
    /// Stop after this many frames. 0 runs until game over.
    pub max_frames: u64,
    /// Pace frames to wall-clock time instead of running flat out.
    pub realtime: bool,
    pub renderer: RendererKind,
    pub autopilot: AutopilotConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            frame_rate: FRAME_RATE,
            max_frames: 36_000,
            realtime: false,
            renderer: RendererKind::default(),
            autopilot: AutopilotConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load and validate a TOML config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parse and validate TOML text. Missing keys take their defaults.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=1000).contains(&self.frame_rate) {
            return Err(ConfigError::Invalid(format!(
                "frame_rate must be within 1..=1000, got {}",
                self.frame_rate
            )));
        }
        if self.autopilot.enabled && self.autopilot.fire_every_frames < 2 {
            return Err(ConfigError::Invalid(format!(
                "autopilot.fire_every_frames must be at least 2, got {}",
                self.autopilot.fire_every_frames
            )));
        }
        Ok(())
    }

    /// Seconds of simulation per frame.
    pub fn frame_dt(&self) -> f64 {
        1.0 / self.frame_rate as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = AppConfig::from_toml_str("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert!((config.frame_dt() - 1.0 / 60.0).abs() < 1e-12);
    }

    #[test]
    fn test_full_file() {
        let config = AppConfig::from_toml_str(
            r#"
            seed = 7
            frame_rate = 30
            max_frames = 0
            realtime = true
            renderer = "json"

            [autopilot]
            enabled = false
            fire_every_frames = 4
            "#,
        )
        .unwrap();
        assert_eq!(config.seed, 7);
        assert_eq!(config.frame_rate, 30);
        assert_eq!(config.max_frames, 0);
        assert!(config.realtime);
        assert_eq!(config.renderer, RendererKind::Json);
        assert!(!config.autopilot.enabled);
        assert_eq!(config.autopilot.fire_every_frames, 4);
    }

    #[test]
    fn test_partial_table_keeps_other_defaults() {
        let config = AppConfig::from_toml_str("[autopilot]\nfire_every_frames = 30\n").unwrap();
        assert!(config.autopilot.enabled);
        assert_eq!(config.autopilot.fire_every_frames, 30);
        assert_eq!(config.seed, 42);
    }

    #[test]
    fn test_rejects_zero_frame_rate() {
        let err = AppConfig::from_toml_str("frame_rate = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)), "got {err:?}");
    }

    #[test]
    fn test_rejects_autofire_cadence() {
        let err = AppConfig::from_toml_str("[autopilot]\nfire_every_frames = 1\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)), "got {err:?}");
    }

    #[test]
    fn test_rejects_unknown_renderer() {
        let err = AppConfig::from_toml_str(r#"renderer = "vulkan""#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)), "got {err:?}");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = AppConfig::load(Path::new("/nonexistent/defender.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)), "got {err:?}");
    }
}
