// src/engine/phase.rs

use crate::errors::{LauncherError, Result};

/// Orchestrator lifecycle.
///
/// `Start -> ShowingDialog -> Resolved -> Spawning -> Terminated`. Phases
/// only ever move forward by exactly one step, except that any phase may
/// jump straight to `Terminated` when the handoff stops early.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum HandoffPhase {
    Start,
    ShowingDialog,
    Resolved,
    Spawning,
    Terminated,
}

impl HandoffPhase {
    /// The phase that normally follows this one.
    pub fn next(self) -> Option<HandoffPhase> {
        match self {
            HandoffPhase::Start => Some(HandoffPhase::ShowingDialog),
            HandoffPhase::ShowingDialog => Some(HandoffPhase::Resolved),
            HandoffPhase::Resolved => Some(HandoffPhase::Spawning),
            HandoffPhase::Spawning => Some(HandoffPhase::Terminated),
            HandoffPhase::Terminated => None,
        }
    }

    /// Move to `to`, rejecting anything that is not a legal transition.
    pub fn advance(&mut self, to: HandoffPhase) -> Result<()> {
        let legal = self.next() == Some(to)
            || (to == HandoffPhase::Terminated && *self != HandoffPhase::Terminated);
        if !legal {
            return Err(LauncherError::Phase { from: *self, to });
        }
        *self = to;
        Ok(())
    }
}
