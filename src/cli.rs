// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Command-line arguments for `spawnbench`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "spawnbench",
    version,
    about = "Launch N copies of a binary, each with a random token passed twice, and wait for all of them.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the binary to launch. Used as-is, no existence check.
    ///
    /// May be omitted when `--config` provides `launch.binary`.
    #[arg(value_name = "BINARY")]
    pub binary: Option<PathBuf>,

    /// Number of processes to launch.
    ///
    /// May be omitted when `--config` provides `launch.count`.
    #[arg(value_name = "COUNT")]
    pub count: Option<usize>,

    /// Optional TOML file with `[launch]` defaults.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `SPAWNBENCH_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Resolve the launch plan and print it, but don't spawn anything.
    #[arg(long)]
    pub dry_run: bool,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
