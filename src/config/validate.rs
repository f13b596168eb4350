// src/config/validate.rs

use std::path::{Component, Path};

use crate::config::model::{LaunchLayout, LauncherConfig, RawLauncherConfig};
use crate::errors::{LauncherError, Result};

impl TryFrom<RawLauncherConfig> for LauncherConfig {
    type Error = LauncherError;

    fn try_from(raw: RawLauncherConfig) -> std::result::Result<Self, Self::Error> {
        validate_layout(&raw.layout)?;
        Ok(LauncherConfig::new_unchecked(raw.ui, raw.layout, raw.policy))
    }
}

fn validate_layout(layout: &LaunchLayout) -> Result<()> {
    validate_component("subdir", &layout.subdir)?;
    validate_component("executable", &layout.executable)?;
    Ok(())
}

/// Check that `value` is exactly one normal path component.
///
/// Anything else (separators, `..`, absolute paths, drive prefixes) would let
/// the executable escape the working directory it is launched from.
pub fn validate_component(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(LauncherError::Config(format!(
            "layout.{field} must not be empty"
        )));
    }

    if value.contains('/') || value.contains('\\') {
        return Err(LauncherError::Config(format!(
            "layout.{field} must be a single path component (got '{value}')"
        )));
    }

    let mut components = Path::new(value).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(()),
        _ => Err(LauncherError::Config(format!(
            "layout.{field} must be a plain file or directory name (got '{value}')"
        ))),
    }
}
