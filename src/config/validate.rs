// src/config/validate.rs

use std::path::PathBuf;

use crate::config::model::ConfigFile;
use crate::errors::{Result, SpawnbenchError};
use crate::types::LaunchPlan;

/// Merge CLI values over the optional config file and check the result.
///
/// The binary path is not checked for existence; a bad path surfaces at
/// spawn time.
pub fn resolve_plan(
    cli_binary: Option<PathBuf>,
    cli_count: Option<usize>,
    config: Option<&ConfigFile>,
) -> Result<LaunchPlan> {
    let launch = config.map(|c| &c.launch);

    let binary = cli_binary
        .or_else(|| launch.and_then(|l| l.binary.clone()))
        .ok_or_else(|| {
            SpawnbenchError::ConfigError(
                "missing binary: pass it as the first argument or set launch.binary".to_string(),
            )
        })?;

    if binary.as_os_str().is_empty() {
        return Err(SpawnbenchError::ConfigError(
            "binary path must not be empty".to_string(),
        ));
    }

    let count = cli_count
        .or_else(|| launch.and_then(|l| l.count))
        .ok_or_else(|| {
            SpawnbenchError::ConfigError(
                "missing count: pass it as the second argument or set launch.count".to_string(),
            )
        })?;

    Ok(LaunchPlan { binary, count })
}
