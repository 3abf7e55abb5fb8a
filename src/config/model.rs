// src/config/model.rs

use std::path::PathBuf;

use serde::Deserialize;

/// Top-level config file.
///
/// ```toml
/// [launch]
/// binary = "./target/release/worker"
/// count = 16
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    pub launch: LaunchSection,
}

/// `[launch]` defaults. Each key is overridden by its CLI positional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LaunchSection {
    #[serde(default)]
    pub binary: Option<PathBuf>,

    #[serde(default)]
    pub count: Option<usize>,
}
