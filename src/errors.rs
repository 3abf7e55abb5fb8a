// src/errors.rs

//! Crate-wide error type and `Result` alias.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpawnbenchError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("failed to spawn {binary} (iteration {index}): {source}")]
    Spawn {
        binary: String,
        index: usize,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to wait for process {index}: {source}")]
    Wait {
        index: usize,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, SpawnbenchError>;
