// src/launch/spawner.rs

//! Detached process start.
//!
//! The orchestrator talks to a `ProcessSpawner` instead of building commands
//! itself, so tests can record spawn requests without starting processes.
//! A spawner reports whether the *request* succeeded; it never waits for or
//! monitors the child.

use std::future::Future;
use std::pin::Pin;

use tokio::process::Command;
use tracing::{debug, info};

use crate::errors::LaunchFailure;
use crate::fs::{FileSystem, RealFileSystem};

use super::target::ChildProcessDescriptor;

/// Result of an accepted spawn request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpawnReceipt {
    /// OS process id, when the platform reports one.
    pub pid: Option<u32>,
}

/// Narrow "start a detached process" capability.
pub trait ProcessSpawner: Send {
    /// Issue one spawn request for `descriptor` and return without waiting
    /// for the child.
    fn start_detached(
        &mut self,
        descriptor: ChildProcessDescriptor,
    ) -> Pin<Box<dyn Future<Output = Result<SpawnReceipt, LaunchFailure>> + Send + '_>>;
}

/// Checks shared by every spawner before a process is started.
pub fn preflight(fs: &dyn FileSystem, descriptor: &ChildProcessDescriptor) -> Result<(), LaunchFailure> {
    if !fs.is_dir(&descriptor.working_dir) {
        return Err(LaunchFailure::WorkingDirMissing(descriptor.working_dir.clone()));
    }
    if !fs.is_file(&descriptor.program) {
        return Err(LaunchFailure::NotFound(descriptor.program.clone()));
    }
    Ok(())
}

/// Spawner used in production, backed by `tokio::process::Command`.
#[derive(Debug, Clone, Default)]
pub struct RealSpawner {
    fs: RealFileSystem,
}

impl RealSpawner {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProcessSpawner for RealSpawner {
    fn start_detached(
        &mut self,
        descriptor: ChildProcessDescriptor,
    ) -> Pin<Box<dyn Future<Output = Result<SpawnReceipt, LaunchFailure>> + Send + '_>> {
        let fs = self.fs.clone();

        Box::pin(async move {
            preflight(&fs, &descriptor)?;

            let mut cmd = Command::new(&descriptor.program);
            cmd.current_dir(&descriptor.working_dir);
            detach(&mut cmd);

            debug!(
                program = %descriptor.program.display(),
                cwd = %descriptor.working_dir.display(),
                "issuing spawn request"
            );

            let child = cmd
                .spawn()
                .map_err(|e| LaunchFailure::from_io(descriptor.program.clone(), e))?;
            let pid = child.id();

            // Dropping the handle leaves the child running.
            drop(child);

            info!(
                program = %descriptor.program.display(),
                pid = ?pid,
                "application process started"
            );

            Ok(SpawnReceipt { pid })
        })
    }
}

#[cfg(unix)]
fn detach(cmd: &mut Command) {
    cmd.process_group(0);
}

#[cfg(windows)]
fn detach(cmd: &mut Command) {
    const DETACHED_PROCESS: u32 = 0x0000_0008;
    const CREATE_NEW_PROCESS_GROUP: u32 = 0x0000_0200;
    cmd.creation_flags(DETACHED_PROCESS | CREATE_NEW_PROCESS_GROUP);
}

#[cfg(not(any(unix, windows)))]
fn detach(_cmd: &mut Command) {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::mock::MockFileSystem;
    use std::path::PathBuf;

    fn descriptor() -> ChildProcessDescriptor {
        ChildProcessDescriptor {
            program: PathBuf::from("/opt/app/Utopia/ErewhonClient.exe"),
            working_dir: PathBuf::from("/opt/app/Utopia"),
        }
    }

    #[test]
    fn preflight_accepts_present_executable() {
        let fs = MockFileSystem::new();
        fs.add_file("/opt/app/Utopia/ErewhonClient.exe");
        assert!(preflight(&fs, &descriptor()).is_ok());
    }

    #[test]
    fn preflight_reports_missing_executable() {
        let fs = MockFileSystem::new();
        fs.add_dir("/opt/app/Utopia");
        let err = preflight(&fs, &descriptor()).unwrap_err();
        assert!(matches!(err, LaunchFailure::NotFound(p) if p == descriptor().program));
    }

    #[test]
    fn preflight_reports_missing_working_dir() {
        let fs = MockFileSystem::new();
        let err = preflight(&fs, &descriptor()).unwrap_err();
        assert!(matches!(err, LaunchFailure::WorkingDirMissing(_)));
    }

    #[tokio::test]
    async fn real_spawner_reports_missing_executable() {
        let tmp = tempfile::tempdir().unwrap();
        let wd = tmp.path().join("Utopia");
        std::fs::create_dir_all(&wd).unwrap();

        let mut spawner = RealSpawner::new();
        let err = spawner
            .start_detached(ChildProcessDescriptor {
                program: wd.join("ErewhonClient.exe"),
                working_dir: wd,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, LaunchFailure::NotFound(_)));
    }
}
