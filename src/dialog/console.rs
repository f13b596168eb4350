// src/dialog/console.rs

//! Terminal installation dialog backed by `dialoguer`.

use dialoguer::Confirm;
use tracing::{info, warn};

use super::{DialogOutcome, InstallDialog};
use crate::ui::UiContext;

/// Confirmation-style installation dialog.
#[derive(Debug, Clone)]
pub struct ConsoleDialog {
    product: String,
}

impl ConsoleDialog {
    pub fn new(product: impl Into<String>) -> Self {
        Self {
            product: product.into(),
        }
    }

    fn prompt(&self) -> String {
        format!("Install {}?", self.product)
    }
}

impl Default for ConsoleDialog {
    fn default() -> Self {
        Self::new("Erewhon")
    }
}

impl InstallDialog for ConsoleDialog {
    fn run_modal(&mut self, ui: &UiContext) -> DialogOutcome {
        if !ui.is_interactive() {
            warn!("no interactive terminal; installation dialog cannot be shown");
            return DialogOutcome::Failed("no interactive terminal available".to_string());
        }

        let answer = Confirm::with_theme(ui.theme())
            .with_prompt(self.prompt())
            .default(true)
            .interact_opt();

        match answer {
            Ok(Some(true)) => {
                info!(product = %self.product, "installation confirmed");
                DialogOutcome::Completed
            }
            Ok(Some(false)) | Ok(None) => {
                info!(product = %self.product, "installation declined");
                DialogOutcome::Cancelled
            }
            Err(e) => {
                warn!(error = %e, "installation dialog failed");
                DialogOutcome::Failed(e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_asks_only_about_the_install() {
        let dialog = ConsoleDialog::new("Erewhon");
        assert_eq!(dialog.prompt(), "Install Erewhon?");
        assert!(!dialog.prompt().to_lowercase().contains("start"));
    }
}
