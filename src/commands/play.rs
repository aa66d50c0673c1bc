//! Play subcommand handler

use std::path::Path;

use anyhow::Result;

use super::load_config;

/// Open the interactive scrubber, applying command-line overrides.
#[cfg(not(tarpaulin_include))]
pub fn handle(
    config_path: Option<&Path>,
    duration: Option<f64>,
    fps: Option<f64>,
    latency_ms: Option<u64>,
) -> Result<()> {
    let mut config = load_config(config_path)?;
    if let Some(fps) = fps {
        config.scrub.fps = fps;
    }
    if let Some(latency_ms) = latency_ms {
        config.player.seek_latency_ms = latency_ms;
    }
    if let Some(duration) = duration {
        config.player.default_duration = duration;
    }
    config.validate()?;

    let duration = config.player.default_duration;
    framescrub::player::run_scrubber(&config, duration)
}
