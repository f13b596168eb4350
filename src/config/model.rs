// src/config/model.rs

use crate::types::LaunchPolicy;

/// Subdirectory (relative to the launcher's working directory) that holds the
/// installed application.
pub const DEFAULT_SUBDIR: &str = "Utopia";

/// File name of the installed application's main executable.
pub const DEFAULT_EXECUTABLE: &str = "ErewhonClient.exe";

/// Options handed to the UI subsystem before the installation dialog shows.
///
/// Purely cosmetic: none of these affect the handoff.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiOptions {
    /// Use the styled (coloured) prompt theme.
    pub enable_visual_styles: bool,

    /// Fall back to legacy, plain text rendering.
    pub compatible_text_rendering: bool,
}

impl Default for UiOptions {
    fn default() -> Self {
        Self {
            enable_visual_styles: true,
            compatible_text_rendering: false,
        }
    }
}

/// Where the installed application lives relative to the base directory.
///
/// The executable is always `base/<subdir>/<executable>` and the child's
/// working directory is always `base/<subdir>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchLayout {
    pub subdir: String,
    pub executable: String,
}

impl Default for LaunchLayout {
    fn default() -> Self {
        Self {
            subdir: DEFAULT_SUBDIR.to_string(),
            executable: DEFAULT_EXECUTABLE.to_string(),
        }
    }
}

/// Unvalidated configuration, as assembled by callers (CLI shell, tests).
#[derive(Debug, Clone, Default)]
pub struct RawLauncherConfig {
    pub ui: UiOptions,
    pub layout: LaunchLayout,
    pub policy: LaunchPolicy,
}

/// Validated launcher configuration.
///
/// Construct it via `TryFrom<RawLauncherConfig>` (see `validate.rs`) or use
/// `Default`, which is the fixed production layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LauncherConfig {
    ui: UiOptions,
    layout: LaunchLayout,
    policy: LaunchPolicy,
}

impl LauncherConfig {
    /// Internal constructor used after validation.
    pub(crate) fn new_unchecked(ui: UiOptions, layout: LaunchLayout, policy: LaunchPolicy) -> Self {
        Self { ui, layout, policy }
    }

    pub fn ui(&self) -> UiOptions {
        self.ui
    }

    pub fn layout(&self) -> &LaunchLayout {
        &self.layout
    }

    pub fn policy(&self) -> LaunchPolicy {
        self.policy
    }
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self::new_unchecked(
            UiOptions::default(),
            LaunchLayout::default(),
            LaunchPolicy::default(),
        )
    }
}
