// src/dialog/mod.rs

//! Installation dialog contract.
//!
//! The launcher only needs to know that the dialog has closed and, if the
//! launch policy asks for it, whether the install completed. Everything the
//! dialog does internally stays behind [`InstallDialog`].

pub mod console;

pub use console::ConsoleDialog;

use crate::errors::DialogFailure;
use crate::ui::UiContext;

/// How the installation dialog closed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogOutcome {
    Completed,
    Cancelled,
    Failed(String),
}

impl DialogOutcome {
    /// The failure this outcome represents, if any.
    pub fn failure(&self) -> Option<DialogFailure> {
        match self {
            DialogOutcome::Completed => None,
            DialogOutcome::Cancelled => Some(DialogFailure::Cancelled),
            DialogOutcome::Failed(msg) => Some(DialogFailure::Failed(msg.clone())),
        }
    }
}

/// A blocking, modal installation step.
///
/// `run_modal` must not return until the dialog has closed.
pub trait InstallDialog {
    fn run_modal(&mut self, ui: &UiContext) -> DialogOutcome;
}

/// Dialog that closes immediately with a completed install.
///
/// Used for `--unattended` runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopDialog;

impl InstallDialog for NoopDialog {
    fn run_modal(&mut self, _ui: &UiContext) -> DialogOutcome {
        DialogOutcome::Completed
    }
}

impl<D: InstallDialog + ?Sized> InstallDialog for Box<D> {
    fn run_modal(&mut self, ui: &UiContext) -> DialogOutcome {
        (**self).run_modal(ui)
    }
}
