// src/errors.rs

//! Crate-wide error types.
//!
//! Nothing in the handoff path recovers locally: every failure travels up to
//! `main`, which turns it into a diagnostic and a non-zero exit code.

use std::path::PathBuf;

use thiserror::Error;

use crate::engine::HandoffPhase;

#[derive(Error, Debug)]
pub enum LauncherError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Installation did not complete: {0}")]
    Dialog(#[from] DialogFailure),

    #[error("Launch failed: {0}")]
    Launch(#[from] LaunchFailure),

    #[error("Cannot determine working directory: {0:#}")]
    WorkingDir(anyhow::Error),

    #[error("Invalid handoff transition: {from:?} -> {to:?}")]
    Phase { from: HandoffPhase, to: HandoffPhase },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl LauncherError {
    /// One-line, user-facing message printed before the launcher exits.
    ///
    /// Uses plain `Display`: every variant's message already embeds its cause.
    pub fn diagnostic(&self) -> String {
        format!("erewhon-installer error: {self}")
    }
}

/// Why the installation dialog is considered unsuccessful.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DialogFailure {
    #[error("installation was cancelled")]
    Cancelled,

    #[error("installation dialog failed: {0}")]
    Failed(String),
}

/// A spawn request that could not be honoured.
///
/// This is request-level only; the child's own exit status is never observed.
#[derive(Error, Debug)]
pub enum LaunchFailure {
    #[error("executable not found at {}", .0.display())]
    NotFound(PathBuf),

    #[error("working directory {} does not exist", .0.display())]
    WorkingDirMissing(PathBuf),

    #[error("permission denied starting {}", .0.display())]
    PermissionDenied(PathBuf),

    #[error("starting {} failed: {source}", .path.display())]
    Os {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LaunchFailure {
    /// Classify an OS error returned while starting `path`.
    pub fn from_io(path: PathBuf, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => LaunchFailure::NotFound(path),
            std::io::ErrorKind::PermissionDenied => LaunchFailure::PermissionDenied(path),
            _ => LaunchFailure::Os { path, source: err },
        }
    }
}

pub type Result<T> = std::result::Result<T, LauncherError>;
