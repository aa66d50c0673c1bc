//! Config subcommands handler

use std::path::{Path, PathBuf};

use anyhow::{bail, Result};

use framescrub::Config;

use super::load_config;

fn resolve_path(path: Option<&Path>) -> Result<PathBuf> {
    match path {
        Some(path) => Ok(path.to_path_buf()),
        None => Ok(Config::config_path()?),
    }
}

/// Show current configuration as TOML.
pub fn handle_show(path: Option<&Path>) -> Result<()> {
    let config = load_config(path)?;
    let toml_str = toml::to_string_pretty(&config)?;
    print!("{}", toml_str);
    Ok(())
}

/// Print the config file location.
pub fn handle_path(path: Option<&Path>) -> Result<()> {
    println!("{}", resolve_path(path)?.display());
    Ok(())
}

/// Write a config file with default settings.
///
/// Refuses to overwrite an existing file unless `force` is set.
pub fn handle_init(path: Option<&Path>, force: bool) -> Result<()> {
    let config_path = resolve_path(path)?;
    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {} (use --force to overwrite)",
            config_path.display()
        );
    }
    let config = Config::default();
    match path {
        Some(path) => config.save_to(path)?,
        None => config.save()?,
    }
    println!("Wrote {}", config_path.display());
    Ok(())
}
