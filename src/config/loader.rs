// src/config/loader.rs

use std::fs;
use std::path::Path;

use crate::config::model::ConfigFile;
use crate::errors::Result;

/// Load a configuration file from a given path.
///
/// This only performs TOML deserialization; merging with the CLI and
/// validation happen in [`crate::config::resolve_plan`].
pub fn load_from_path(path: impl AsRef<Path>) -> Result<ConfigFile> {
    let contents = fs::read_to_string(path.as_ref())?;
    parse_str(&contents)
}

pub fn parse_str(contents: &str) -> Result<ConfigFile> {
    let config: ConfigFile = toml::from_str(contents)?;
    Ok(config)
}
