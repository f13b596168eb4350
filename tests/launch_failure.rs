// tests/launch_failure.rs

mod common;
use crate::common::{init_tracing, FakeSpawner, ScriptedDialog};

use std::path::PathBuf;
use std::sync::Arc;

use erewhon_installer::config::LauncherConfig;
use erewhon_installer::engine::{HandoffPhase, Orchestrator};
use erewhon_installer::errors::{LaunchFailure, LauncherError};
use erewhon_installer::fs::mock::MockFileSystem;

#[tokio::test]
async fn missing_executable_surfaces_launch_failure() {
    init_tracing();

    let fs = MockFileSystem::with_current_dir("/opt/app");
    fs.add_dir("/opt/app/Utopia");
    let spawner = FakeSpawner::new(fs.clone());

    let mut orchestrator =
        Orchestrator::new(LauncherConfig::default(), ScriptedDialog::completed(), spawner.clone())
            .with_file_system(Arc::new(fs));

    let err = orchestrator.run_and_hand_off().await.unwrap_err();
    match err {
        LauncherError::Launch(LaunchFailure::NotFound(path)) => {
            assert_eq!(path, PathBuf::from("/opt/app/Utopia/ErewhonClient.exe"));
        }
        other => panic!("expected LaunchFailure::NotFound, got {other:?}"),
    }

    assert_eq!(spawner.requests().len(), 1, "the spawn was attempted once");
    assert!(spawner.started().is_empty(), "no process started");
    assert_eq!(orchestrator.phase(), HandoffPhase::Terminated);
}

#[tokio::test]
async fn missing_install_directory_surfaces_launch_failure() {
    init_tracing();

    let fs = MockFileSystem::with_current_dir("/opt/app");
    let spawner = FakeSpawner::new(fs.clone());

    let mut orchestrator =
        Orchestrator::new(LauncherConfig::default(), ScriptedDialog::completed(), spawner.clone())
            .with_file_system(Arc::new(fs));

    let err = orchestrator.run_and_hand_off().await.unwrap_err();
    assert!(matches!(
        err,
        LauncherError::Launch(LaunchFailure::WorkingDirMissing(ref p)) if p == &PathBuf::from("/opt/app/Utopia")
    ));
    assert!(spawner.started().is_empty());
}

#[tokio::test]
async fn unreadable_working_directory_stops_before_spawning() {
    init_tracing();

    // No current directory configured: capturing the base fails.
    let fs = MockFileSystem::new();
    let spawner = FakeSpawner::new(fs.clone());

    let mut orchestrator =
        Orchestrator::new(LauncherConfig::default(), ScriptedDialog::completed(), spawner.clone())
            .with_file_system(Arc::new(fs));

    let err = orchestrator.run_and_hand_off().await.unwrap_err();
    assert!(matches!(err, LauncherError::WorkingDir(_)));
    assert!(spawner.requests().is_empty());
    assert_eq!(orchestrator.phase(), HandoffPhase::Terminated);
}

#[tokio::test]
async fn launch_failure_message_is_user_readable() {
    init_tracing();

    let fs = MockFileSystem::with_current_dir("/opt/app");
    fs.add_dir("/opt/app/Utopia");
    let spawner = FakeSpawner::new(fs.clone());

    let mut orchestrator =
        Orchestrator::new(LauncherConfig::default(), ScriptedDialog::completed(), spawner)
            .with_file_system(Arc::new(fs));

    let err = orchestrator.run_and_hand_off().await.unwrap_err();
    let msg = err.to_string();
    assert!(msg.starts_with("Launch failed"));
    assert!(msg.contains("ErewhonClient.exe"));
}
