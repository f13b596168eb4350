use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use erewhon_installer::dialog::{DialogOutcome, InstallDialog};
use erewhon_installer::ui::UiContext;

/// Dialog that closes immediately with a fixed outcome and counts how often
/// it was shown.
#[derive(Debug, Clone)]
pub struct ScriptedDialog {
    outcome: DialogOutcome,
    shown: Arc<AtomicUsize>,
}

impl ScriptedDialog {
    pub fn new(outcome: DialogOutcome) -> Self {
        Self {
            outcome,
            shown: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn completed() -> Self {
        Self::new(DialogOutcome::Completed)
    }

    pub fn cancelled() -> Self {
        Self::new(DialogOutcome::Cancelled)
    }

    pub fn failed(msg: &str) -> Self {
        Self::new(DialogOutcome::Failed(msg.to_string()))
    }

    pub fn times_shown(&self) -> usize {
        self.shown.load(Ordering::SeqCst)
    }
}

impl InstallDialog for ScriptedDialog {
    fn run_modal(&mut self, _ui: &UiContext) -> DialogOutcome {
        self.shown.fetch_add(1, Ordering::SeqCst);
        self.outcome.clone()
    }
}
