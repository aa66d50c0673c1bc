//! Configuration management
//!
//! Settings live in `<config_dir>/framescrub/config.toml`. Every section is
//! optional; missing sections and fields fall back to their defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScrubError};
use crate::scrub::FrameMapper;

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Frame math and seek sequencing
    pub scrub: ScrubConfig,
    /// Terminal player settings
    pub player: PlayerConfig,
}

/// Settings that shape the frame/time mapping and seek sequencing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrubConfig {
    /// Fixed frame rate for the session
    pub fps: f64,
    /// Seek targets are clamped to `duration - end_epsilon`
    pub end_epsilon: f64,
    /// Maximum difference between a seek target and the current time that
    /// still counts as "already there". `0.0` means exact comparison.
    pub seek_tolerance: f64,
}

impl Default for ScrubConfig {
    fn default() -> Self {
        Self {
            fps: 24.0,
            end_epsilon: 1e-6,
            seek_tolerance: 0.0,
        }
    }
}

/// Settings for the interactive terminal scrubber.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Repaint ticks per second
    pub repaint_hz: u32,
    /// Simulated time a seek takes to complete
    pub seek_latency_ms: u64,
    /// Track duration used when none is given on the command line
    pub default_duration: f64,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            repaint_hz: 60,
            seek_latency_ms: 40,
            default_duration: 10.0,
        }
    }
}

impl PlayerConfig {
    /// Seek latency expressed in whole repaint ticks (at least one).
    pub fn seek_latency_ticks(&self) -> u32 {
        let tick_ms = 1000.0 / self.repaint_hz.max(1) as f64;
        ((self.seek_latency_ms as f64 / tick_ms).ceil() as u32).max(1)
    }
}

impl Config {
    /// Path of the config file.
    pub fn config_path() -> Result<PathBuf> {
        let dir = dirs::config_dir().ok_or(ScrubError::NoConfigDir)?;
        Ok(dir.join("framescrub").join("config.toml"))
    }

    /// Load the config file, or defaults if it does not exist.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load from an explicit path, or defaults if the file does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|source| ScrubError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Write the config to its default location.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Write the config to an explicit path, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Reject values the frame math cannot work with.
    pub fn validate(&self) -> Result<()> {
        let scrub = &self.scrub;
        if !scrub.fps.is_finite() || scrub.fps <= 0.0 {
            return Err(ScrubError::InvalidConfig {
                field: "scrub.fps",
                reason: format!("must be a positive number, got {}", scrub.fps),
            });
        }
        if !scrub.end_epsilon.is_finite() || scrub.end_epsilon <= 0.0 {
            return Err(ScrubError::InvalidConfig {
                field: "scrub.end_epsilon",
                reason: format!("must be a small positive number, got {}", scrub.end_epsilon),
            });
        }
        if !scrub.seek_tolerance.is_finite() || scrub.seek_tolerance < 0.0 {
            return Err(ScrubError::InvalidConfig {
                field: "scrub.seek_tolerance",
                reason: format!("must be zero or positive, got {}", scrub.seek_tolerance),
            });
        }
        if self.player.repaint_hz == 0 {
            return Err(ScrubError::InvalidConfig {
                field: "player.repaint_hz",
                reason: "must be at least 1".to_string(),
            });
        }
        let duration = self.player.default_duration;
        if !duration.is_finite() || duration <= 0.0 {
            return Err(ScrubError::InvalidConfig {
                field: "player.default_duration",
                reason: format!("must be a positive number of seconds, got {}", duration),
            });
        }
        FrameMapper::with_end_epsilon(scrub.fps, duration, scrub.end_epsilon)?;
        Ok(())
    }
}
