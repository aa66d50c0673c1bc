//! Library error types.

use std::path::PathBuf;

/// Errors surfaced by configuration handling and session setup.
///
/// The scrubbing core itself clamps its inputs instead of failing; these
/// cover the edges around it.
#[derive(Debug, thiserror::Error)]
pub enum ScrubError {
    #[error("Invalid configuration: {field} {reason}")]
    InvalidConfig { field: &'static str, reason: String },

    #[error("Track duration {0} is not a finite, non-negative number of seconds")]
    InvalidDuration(f64),

    #[error("Track of {duration}s at {fps}fps has more frames than can be numbered")]
    TooManyFrames { duration: f64, fps: f64 },

    #[error("Could not determine the configuration directory")]
    NoConfigDir,

    #[error("Failed to read config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias for library results.
pub type Result<T> = std::result::Result<T, ScrubError>;
