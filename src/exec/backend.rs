// src/exec/backend.rs

//! Pluggable process backend abstraction.
//!
//! The launcher talks to a `ProcessBackend` instead of `tokio::process`
//! directly, so tests can observe every spawn and wait without touching the
//! OS process table.

use std::fmt::Debug;
use std::future::Future;
use std::io;
use std::path::Path;
use std::pin::Pin;
use std::process::Stdio;

use tokio::process::{Child, Command};
use tracing::trace;

/// Trait abstracting how processes are started.
pub trait ProcessBackend: Send {
    /// Start `binary` with `args` and return a handle to the running process.
    ///
    /// Must not block until the process exits.
    fn spawn(&mut self, binary: &Path, args: &[&str]) -> io::Result<Box<dyn RunningProcess>>;
}

/// A process started by a [`ProcessBackend`].
pub trait RunningProcess: Send + Debug {
    /// OS process id, if known.
    fn id(&self) -> Option<u32>;

    /// Block until the process exits. Yields the exit code, or `None` if the
    /// process was terminated by a signal.
    fn wait(&mut self) -> Pin<Box<dyn Future<Output = io::Result<Option<i32>>> + Send + '_>>;
}

/// Production backend: one `tokio::process::Child` per spawn.
///
/// Children inherit stdio and are **not** killed when their handle is
/// dropped, so a failed launch leaves already-started processes running.
#[derive(Debug, Clone, Default)]
pub struct TokioProcessBackend;

impl TokioProcessBackend {
    pub fn new() -> Self {
        Self
    }
}

impl ProcessBackend for TokioProcessBackend {
    fn spawn(&mut self, binary: &Path, args: &[&str]) -> io::Result<Box<dyn RunningProcess>> {
        trace!(binary = %binary.display(), ?args, "spawning child");

        let child = Command::new(binary)
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .kill_on_drop(false)
            .spawn()?;

        Ok(Box::new(TokioChild(child)))
    }
}

#[derive(Debug)]
struct TokioChild(Child);

impl RunningProcess for TokioChild {
    fn id(&self) -> Option<u32> {
        self.0.id()
    }

    fn wait(&mut self) -> Pin<Box<dyn Future<Output = io::Result<Option<i32>>> + Send + '_>> {
        Box::pin(async move {
            let status = self.0.wait().await?;
            Ok(status.code())
        })
    }
}
