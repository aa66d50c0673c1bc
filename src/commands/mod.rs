//! Subcommand handlers

pub mod config;
pub mod inspect;
pub mod play;

use std::path::Path;

use anyhow::Result;
use framescrub::Config;

/// Load config from an explicit path, or from the default location.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let config = match path {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    Ok(config)
}
