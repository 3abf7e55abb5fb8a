use std::future::Future;
use std::io;
use std::path::{Path, PathBuf};
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use spawnbench::exec::{ProcessBackend, RunningProcess};
use tracing::debug;

/// What the fake backend saw, shared with the test body.
#[derive(Debug, Default)]
pub struct Record {
    /// `(binary, args)` per successful spawn, in spawn order.
    pub spawns: Vec<(PathBuf, Vec<String>)>,
    /// Spawn indices in the order their waits completed.
    pub waits: Vec<usize>,
}

/// A fake backend that:
/// - records every spawn and every completed wait
/// - never touches the OS process table
/// - can be told to fail the Nth spawn, fail the wait of the Nth process,
///   or report a fixed exit code.
pub struct FakeBackend {
    record: Arc<Mutex<Record>>,
    fail_spawn_at: Option<usize>,
    fail_wait_at: Option<usize>,
    exit_code: Option<i32>,
    attempts: usize,
}

impl FakeBackend {
    pub fn new(record: Arc<Mutex<Record>>) -> Self {
        Self {
            record,
            fail_spawn_at: None,
            fail_wait_at: None,
            exit_code: Some(0),
            attempts: 0,
        }
    }

    /// Make the spawn with this zero-based index fail with `NotFound`.
    pub fn fail_spawn_at(mut self, index: usize) -> Self {
        self.fail_spawn_at = Some(index);
        self
    }

    /// Make waiting on the process with this spawn index fail.
    pub fn fail_wait_at(mut self, index: usize) -> Self {
        self.fail_wait_at = Some(index);
        self
    }

    /// Exit code every fake process reports.
    pub fn exit_code(mut self, code: Option<i32>) -> Self {
        self.exit_code = code;
        self
    }
}

impl ProcessBackend for FakeBackend {
    fn spawn(&mut self, binary: &Path, args: &[&str]) -> io::Result<Box<dyn RunningProcess>> {
        let index = self.attempts;
        self.attempts += 1;

        if self.fail_spawn_at == Some(index) {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("fake spawn failure for {}", binary.display()),
            ));
        }

        let mut guard = self.record.lock().unwrap();
        guard.spawns.push((
            binary.to_path_buf(),
            args.iter().map(|a| a.to_string()).collect(),
        ));
        debug!(index, "fake spawn");

        Ok(Box::new(FakeProcess {
            index,
            fail_wait: self.fail_wait_at == Some(index),
            exit_code: self.exit_code,
            record: Arc::clone(&self.record),
        }))
    }
}

#[derive(Debug)]
struct FakeProcess {
    index: usize,
    fail_wait: bool,
    exit_code: Option<i32>,
    record: Arc<Mutex<Record>>,
}

impl RunningProcess for FakeProcess {
    fn id(&self) -> Option<u32> {
        Some(10_000 + self.index as u32)
    }

    fn wait(&mut self) -> Pin<Box<dyn Future<Output = io::Result<Option<i32>>> + Send + '_>> {
        let record = Arc::clone(&self.record);
        let index = self.index;
        let code = self.exit_code;
        let fail = self.fail_wait;

        Box::pin(async move {
            tokio::task::yield_now().await;
            if fail {
                return Err(io::Error::other(format!("fake wait failure for {index}")));
            }
            record.lock().unwrap().waits.push(index);
            Ok(code)
        })
    }
}
