use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use spawnbench::cli::{CliArgs, LogLevel};
use spawnbench::logging::resolve_level;
use spawnbench::run;
use tempfile::NamedTempFile;

#[test]
fn parses_binary_and_count_positionals() {
    let args = CliArgs::try_parse_from(["spawnbench", "./worker", "12"]).unwrap();
    assert_eq!(args.binary, Some(PathBuf::from("./worker")));
    assert_eq!(args.count, Some(12));
    assert!(args.config.is_none());
    assert!(!args.dry_run);
}

#[test]
fn non_numeric_count_is_rejected() {
    assert!(CliArgs::try_parse_from(["spawnbench", "./worker", "many"]).is_err());
}

#[test]
fn negative_count_is_rejected() {
    assert!(CliArgs::try_parse_from(["spawnbench", "./worker", "-3"]).is_err());
}

#[test]
fn parses_flags() {
    let args = CliArgs::try_parse_from([
        "spawnbench",
        "--config",
        "bench.toml",
        "--log-level",
        "debug",
        "--dry-run",
    ])
    .unwrap();

    assert_eq!(args.config, Some(PathBuf::from("bench.toml")));
    assert_eq!(args.log_level, Some(LogLevel::Debug));
    assert!(args.dry_run);
    assert!(args.binary.is_none());
}

#[test]
fn log_level_priority() {
    assert_eq!(
        resolve_level(Some(LogLevel::Warn), Some("trace")),
        tracing::Level::WARN
    );
    assert_eq!(resolve_level(None, Some(" DEBUG ")), tracing::Level::DEBUG);
    assert_eq!(resolve_level(None, Some("warning")), tracing::Level::WARN);
    assert_eq!(resolve_level(None, Some("loud")), tracing::Level::INFO);
    assert_eq!(resolve_level(None, None), tracing::Level::INFO);
}

#[tokio::test]
async fn dry_run_with_config_spawns_nothing() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "[launch]\nbinary = \"/no/such/binary\"\ncount = 5\n").unwrap();

    let args = CliArgs::try_parse_from([
        "spawnbench",
        "--dry-run",
        "--config",
        file.path().to_str().unwrap(),
    ])
    .unwrap();

    run(args).await.unwrap();
}

#[tokio::test]
async fn run_reports_missing_count() {
    let args = CliArgs::try_parse_from(["spawnbench", "./worker"]).unwrap();
    let err = run(args).await.unwrap_err();
    assert!(format!("{err}").contains("missing count"));
}

#[tokio::test]
async fn run_reports_unreadable_config() {
    let args = CliArgs::try_parse_from([
        "spawnbench",
        "--config",
        "/nonexistent/spawnbench.toml",
        "./worker",
        "1",
    ])
    .unwrap();

    let err = run(args).await.unwrap_err();
    assert!(format!("{err:#}").contains("loading config"));
}
