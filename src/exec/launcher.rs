// src/exec/launcher.rs

//! The launch loop: spawn every process first, then wait on each in spawn
//! order.

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};

use crate::errors::{Result, SpawnbenchError};
use crate::exec::ProcessBackend;
use crate::token::Token;
use crate::types::{LaunchPlan, LaunchReport, ProcessHandle};

/// Upper bound on the handle capacity reserved before spawning.
const MAX_RESERVED_HANDLES: usize = 1024;

pub struct Launcher<B> {
    backend: B,
    rng: StdRng,
}

impl<B: ProcessBackend> Launcher<B> {
    /// Launcher whose tokens are seeded from OS entropy.
    pub fn new(backend: B) -> Self {
        Self::with_rng(backend, StdRng::from_entropy())
    }

    pub fn with_rng(backend: B, rng: StdRng) -> Self {
        Self { backend, rng }
    }

    /// Spawn `plan.count` copies of `plan.binary`, each receiving one fresh
    /// token twice, then wait for all of them.
    ///
    /// A spawn or wait failure aborts immediately. Handles not yet waited on
    /// are dropped as-is. Exit codes are logged and otherwise ignored.
    pub async fn launch(&mut self, plan: &LaunchPlan) -> Result<LaunchReport> {
        info!(
            binary = %plan.binary.display(),
            count = plan.count,
            "launching processes"
        );

        let handles = self.spawn_all(plan)?;
        let spawned = handles.len();

        let mut waited = 0;
        for mut handle in handles {
            let exit_code = handle
                .process
                .wait()
                .await
                .map_err(|source| SpawnbenchError::Wait {
                    index: handle.index,
                    source,
                })?;

            debug!(
                index = handle.index,
                token = %handle.token,
                exit_code = ?exit_code,
                "process exited"
            );
            waited += 1;
        }

        info!(spawned, waited, "all processes finished");
        Ok(LaunchReport { spawned, waited })
    }

    fn spawn_all(&mut self, plan: &LaunchPlan) -> Result<Vec<ProcessHandle>> {
        // `count` is user input; don't reserve more than a modest batch up front.
        let mut handles = Vec::with_capacity(plan.count.min(MAX_RESERVED_HANDLES));

        for index in 0..plan.count {
            let token = Token::generate(&mut self.rng);
            let process = self
                .backend
                .spawn(&plan.binary, &[token.as_str(), token.as_str()])
                .map_err(|source| SpawnbenchError::Spawn {
                    binary: plan.binary.display().to_string(),
                    index,
                    source,
                })?;

            debug!(index, pid = ?process.id(), token = %token, "spawned process");
            handles.push(ProcessHandle {
                index,
                token,
                process,
            });
        }

        Ok(handles)
    }
}
