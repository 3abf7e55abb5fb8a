// src/lib.rs

pub mod cli;
pub mod config;
pub mod errors;
pub mod exec;
pub mod logging;
pub mod token;
pub mod types;

use anyhow::{Context, Result};
use tracing::debug;

use crate::cli::CliArgs;
use crate::config::{load_from_path, resolve_plan};
use crate::exec::{Launcher, TokioProcessBackend};
use crate::token::Token;
use crate::types::{LaunchPlan, LaunchReport};

/// High-level entry point used by `main.rs`.
///
/// Loads the optional config, resolves the launch plan, then either prints
/// it (`--dry-run`) or launches and waits on every process.
pub async fn run(args: CliArgs) -> Result<()> {
    let config = match args.config.as_ref() {
        Some(path) => Some(
            load_from_path(path)
                .with_context(|| format!("loading config {}", path.display()))?,
        ),
        None => None,
    };

    let plan = resolve_plan(args.binary, args.count, config.as_ref())?;

    if args.dry_run {
        print_dry_run(&plan);
        return Ok(());
    }

    let mut launcher = Launcher::new(TokioProcessBackend::new());
    let report: LaunchReport = launcher.launch(&plan).await?;
    debug!(?report, "launch complete");

    Ok(())
}

/// Print the resolved plan and one sample token.
fn print_dry_run(plan: &LaunchPlan) {
    let sample = Token::generate(&mut rand::thread_rng());

    println!("spawnbench dry-run");
    println!("  binary: {}", plan.binary.display());
    println!("  count:  {}", plan.count);
    println!("  argv:   {} {sample} {sample}", plan.binary.display());

    debug!("dry-run complete (no processes spawned)");
}
