#![allow(dead_code)]

pub use spawnbench_test_utils::{init_tracing, with_timeout};

use std::path::PathBuf;

use spawnbench::types::LaunchPlan;

pub fn plan(binary: &str, count: usize) -> LaunchPlan {
    LaunchPlan {
        binary: PathBuf::from(binary),
        count,
    }
}
