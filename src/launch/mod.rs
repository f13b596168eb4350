// src/launch/mod.rs

//! Launch-target resolution and the detached spawn capability.
//!
//! - [`target`] captures the base directory and derives the executable path
//!   and child working directory from it.
//! - [`spawner`] provides the `ProcessSpawner` trait and the production
//!   `RealSpawner`; tests substitute a recording fake.

pub mod spawner;
pub mod target;

pub use spawner::{preflight, ProcessSpawner, RealSpawner, SpawnReceipt};
pub use target::{ChildProcessDescriptor, LaunchTarget};
