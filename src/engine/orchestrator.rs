// src/engine/orchestrator.rs

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use tracing::{debug, error, info, warn};

use crate::config::LauncherConfig;
use crate::dialog::{DialogOutcome, InstallDialog};
use crate::errors::{LauncherError, Result};
use crate::fs::{FileSystem, RealFileSystem};
use crate::launch::{LaunchTarget, ProcessSpawner};
use crate::types::LaunchPolicy;

use super::HandoffPhase;

/// What a successful handoff did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandoffReport {
    /// How the installation dialog closed.
    pub dialog: DialogOutcome,
    pub program: PathBuf,
    pub working_dir: PathBuf,
    /// OS process id of the started application, if reported.
    pub pid: Option<u32>,
}

/// Connects "installation dialog closed" to "application process started".
///
/// An orchestrator performs at most one handoff: once it has left
/// [`HandoffPhase::Start`], further calls to [`Orchestrator::run_and_hand_off`]
/// fail without touching the dialog or the spawner.
pub struct Orchestrator<D: InstallDialog, S: ProcessSpawner> {
    config: LauncherConfig,
    dialog: D,
    spawner: S,
    fs: Arc<dyn FileSystem>,
    phase: HandoffPhase,
}

impl<D: InstallDialog, S: ProcessSpawner> fmt::Debug for Orchestrator<D, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Orchestrator")
            .field("config", &self.config)
            .field("phase", &self.phase)
            .finish_non_exhaustive()
    }
}

impl<D: InstallDialog, S: ProcessSpawner> Orchestrator<D, S> {
    pub fn new(config: LauncherConfig, dialog: D, spawner: S) -> Self {
        Self {
            config,
            dialog,
            spawner,
            fs: Arc::new(RealFileSystem),
            phase: HandoffPhase::Start,
        }
    }

    /// Resolve the working directory through `fs` instead of the real one.
    pub fn with_file_system(mut self, fs: Arc<dyn FileSystem>) -> Self {
        self.fs = fs;
        self
    }

    pub fn phase(&self) -> HandoffPhase {
        self.phase
    }

    /// Show the installation dialog, then start the installed application.
    ///
    /// Steps, strictly in order:
    /// 1. initialise the UI subsystem from the configured `UiOptions`
    /// 2. run the dialog until it closes
    /// 3. apply the launch policy to the dialog outcome
    /// 4. capture the working directory and resolve the target under it
    /// 5. issue exactly one detached spawn request
    ///
    /// Errors are returned, never panicked; the orchestrator always ends in
    /// [`HandoffPhase::Terminated`] once it has started.
    pub async fn run_and_hand_off(&mut self) -> Result<HandoffReport> {
        self.phase.advance(HandoffPhase::ShowingDialog)?;

        let outcome = {
            let ui = crate::ui::init(self.config.ui());
            info!("showing installation dialog");
            self.dialog.run_modal(&ui)
        };
        debug!(?outcome, "installation dialog closed");

        if let Some(failure) = outcome.failure() {
            match self.config.policy() {
                LaunchPolicy::Always => {
                    warn!(%failure, "installation did not complete; launching anyway");
                }
                LaunchPolicy::RequireCompletedInstall => {
                    warn!(%failure, "installation did not complete; not launching");
                    self.phase.advance(HandoffPhase::Terminated)?;
                    return Err(LauncherError::Dialog(failure));
                }
            }
        }

        let target = match LaunchTarget::capture(self.fs.as_ref(), self.config.layout()) {
            Ok(target) => target,
            Err(e) => {
                self.phase.advance(HandoffPhase::Terminated)?;
                return Err(e);
            }
        };
        self.phase.advance(HandoffPhase::Resolved)?;

        let descriptor = target.into_descriptor();
        let program = descriptor.program.clone();
        let working_dir = descriptor.working_dir.clone();
        info!(
            program = %program.display(),
            cwd = %working_dir.display(),
            "launch target resolved"
        );

        self.phase.advance(HandoffPhase::Spawning)?;
        let spawned = self.spawner.start_detached(descriptor).await;
        self.phase.advance(HandoffPhase::Terminated)?;

        match spawned {
            Ok(receipt) => {
                info!(pid = ?receipt.pid, "handoff complete");
                Ok(HandoffReport {
                    dialog: outcome,
                    program,
                    working_dir,
                    pid: receipt.pid,
                })
            }
            Err(failure) => {
                error!(%failure, "handoff failed");
                Err(LauncherError::Launch(failure))
            }
        }
    }
}
