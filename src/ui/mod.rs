// src/ui/mod.rs

//! UI subsystem initialization.
//!
//! The installation dialog renders through a [`UiContext`], built once from
//! [`UiOptions`] before the dialog shows. There is no process-wide UI state
//! and nothing to tear down.

use std::fmt;
use std::io::IsTerminal;

use dialoguer::theme::{ColorfulTheme, SimpleTheme, Theme};
use tracing::debug;

use crate::config::UiOptions;

/// Rendering style picked from [`UiOptions`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeKind {
    Styled,
    Plain,
}

impl ThemeKind {
    pub fn from_options(options: UiOptions) -> Self {
        if options.enable_visual_styles && !options.compatible_text_rendering {
            ThemeKind::Styled
        } else {
            ThemeKind::Plain
        }
    }
}

/// Initialized UI state handed to the installation dialog.
pub struct UiContext {
    options: UiOptions,
    kind: ThemeKind,
    theme: Box<dyn Theme>,
    interactive: bool,
}

impl fmt::Debug for UiContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UiContext")
            .field("options", &self.options)
            .field("kind", &self.kind)
            .field("interactive", &self.interactive)
            .finish_non_exhaustive()
    }
}

impl UiContext {
    pub fn options(&self) -> UiOptions {
        self.options
    }

    pub fn theme_kind(&self) -> ThemeKind {
        self.kind
    }

    pub fn theme(&self) -> &dyn Theme {
        self.theme.as_ref()
    }

    /// Whether stdin and stderr are attached to a terminal.
    pub fn is_interactive(&self) -> bool {
        self.interactive
    }
}

/// Initialise the UI subsystem.
pub fn init(options: UiOptions) -> UiContext {
    let kind = ThemeKind::from_options(options);
    let theme: Box<dyn Theme> = match kind {
        ThemeKind::Styled => Box::new(ColorfulTheme::default()),
        ThemeKind::Plain => Box::new(SimpleTheme),
    };
    let interactive = std::io::stdin().is_terminal() && std::io::stderr().is_terminal();

    debug!(?options, ?kind, interactive, "UI subsystem initialised");

    UiContext {
        options,
        kind,
        theme,
        interactive,
    }
}
