// src/engine/mod.rs

//! Install-to-launch orchestration.
//!
//! The forward-only phase machine lives in [`phase`]; the orchestrator that
//! drives the dialog, resolves the target and issues the spawn request lives
//! in [`orchestrator`].

pub mod orchestrator;
pub mod phase;

pub use orchestrator::{HandoffReport, Orchestrator};
pub use phase::HandoffPhase;
