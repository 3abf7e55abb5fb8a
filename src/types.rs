// src/types.rs

use std::path::PathBuf;

use crate::exec::RunningProcess;
use crate::token::Token;

/// Fully resolved launcher input (CLI merged with config).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchPlan {
    pub binary: PathBuf,
    pub count: usize,
}

/// One spawned process, owned by the launcher until it is waited on.
#[derive(Debug)]
pub struct ProcessHandle {
    /// Zero-based spawn index.
    pub index: usize,
    pub token: Token,
    pub process: Box<dyn RunningProcess>,
}

/// Result of a completed launch. Counts only; exit codes are not kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LaunchReport {
    pub spawned: usize,
    pub waited: usize,
}
