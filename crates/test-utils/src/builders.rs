#![allow(dead_code)]

use erewhon_installer::config::{LaunchLayout, LauncherConfig, RawLauncherConfig, UiOptions};
use erewhon_installer::types::LaunchPolicy;

/// Builder for `LauncherConfig` to simplify test setup.
pub struct LauncherConfigBuilder {
    config: RawLauncherConfig,
}

impl LauncherConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: RawLauncherConfig::default(),
        }
    }

    pub fn subdir(mut self, subdir: &str) -> Self {
        self.config.layout.subdir = subdir.to_string();
        self
    }

    pub fn executable(mut self, executable: &str) -> Self {
        self.config.layout.executable = executable.to_string();
        self
    }

    pub fn layout(mut self, layout: LaunchLayout) -> Self {
        self.config.layout = layout;
        self
    }

    pub fn policy(mut self, policy: LaunchPolicy) -> Self {
        self.config.policy = policy;
        self
    }

    pub fn plain_ui(mut self) -> Self {
        self.config.ui = UiOptions {
            enable_visual_styles: false,
            compatible_text_rendering: true,
        };
        self
    }

    pub fn build(self) -> LauncherConfig {
        LauncherConfig::try_from(self.config).expect("Failed to build valid config from builder")
    }
}

impl Default for LauncherConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
