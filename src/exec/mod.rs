// src/exec/mod.rs

//! Process execution layer.
//!
//! - [`backend`] provides the `ProcessBackend` / `RunningProcess` traits and
//!   the production `TokioProcessBackend`, built on `tokio::process::Command`.
//!   Tests swap in a fake backend that records spawns and waits.
//! - [`launcher`] owns the spawn-all-then-wait-all loop.

pub mod backend;
pub mod launcher;

pub use backend::{ProcessBackend, RunningProcess, TokioProcessBackend};
pub use launcher::Launcher;
