// src/config/mod.rs

//! Launcher configuration.
//!
//! Responsibilities:
//! - Define the typed configuration model (`model.rs`).
//! - Validate the launch layout before it is ever joined onto a path
//!   (`validate.rs`).
//!
//! Nothing here is read from disk or the environment: the production layout
//! is fixed and comes from `LauncherConfig::default()`.

pub mod model;
pub mod validate;

pub use model::{
    LaunchLayout, LauncherConfig, RawLauncherConfig, UiOptions, DEFAULT_EXECUTABLE,
    DEFAULT_SUBDIR,
};
pub use validate::validate_component;
