#![allow(dead_code)]

use std::path::PathBuf;

use spawnbench::config::{ConfigFile, LaunchSection};

/// Builder for `ConfigFile` to simplify test setup.
pub struct ConfigFileBuilder {
    config: ConfigFile,
}

impl ConfigFileBuilder {
    pub fn new() -> Self {
        Self {
            config: ConfigFile {
                launch: LaunchSection::default(),
            },
        }
    }

    pub fn binary(mut self, path: &str) -> Self {
        self.config.launch.binary = Some(PathBuf::from(path));
        self
    }

    pub fn count(mut self, count: usize) -> Self {
        self.config.launch.count = Some(count);
        self
    }

    pub fn build(self) -> ConfigFile {
        self.config
    }
}

impl Default for ConfigFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}
