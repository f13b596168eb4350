// src/lib.rs

pub mod cli;
pub mod config;
pub mod dialog;
pub mod engine;
pub mod errors;
pub mod fs;
pub mod launch;
pub mod logging;
pub mod types;
pub mod ui;

use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::config::{LauncherConfig, RawLauncherConfig};
use crate::dialog::{ConsoleDialog, InstallDialog, NoopDialog};
use crate::engine::Orchestrator;
use crate::errors::Result;
use crate::fs::{FileSystem, RealFileSystem};
use crate::launch::{LaunchTarget, RealSpawner};
use crate::types::LaunchPolicy;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - the fixed launcher configuration (plus the policy chosen on the CLI)
/// - the installation dialog (console or unattended)
/// - the real process spawner
/// - the orchestrator that performs the handoff
pub async fn run(args: CliArgs) -> Result<()> {
    let config = config_from_args(&args)?;

    if args.dry_run {
        print_dry_run(&config)?;
        return Ok(());
    }

    let dialog: Box<dyn InstallDialog> = if args.unattended {
        info!("unattended mode: skipping installation dialog");
        Box::new(NoopDialog)
    } else {
        Box::new(ConsoleDialog::default())
    };

    let mut orchestrator = Orchestrator::new(config, dialog, RealSpawner::new());
    let report = orchestrator.run_and_hand_off().await?;

    debug!(?report, "launcher exiting after handoff");
    Ok(())
}

fn config_from_args(args: &CliArgs) -> Result<LauncherConfig> {
    let policy = if args.require_install {
        LaunchPolicy::RequireCompletedInstall
    } else {
        LaunchPolicy::Always
    };

    LauncherConfig::try_from(RawLauncherConfig {
        policy,
        ..RawLauncherConfig::default()
    })
}

/// Simple dry-run output: where the handoff would go.
fn print_dry_run(config: &LauncherConfig) -> Result<()> {
    let fs = RealFileSystem;
    let target = LaunchTarget::capture(&fs, config.layout())?;
    let program = target.executable_path();
    let present = fs.is_file(&program);
    let desc = target.into_descriptor();

    println!("erewhon-installer dry-run");
    println!("  policy = {:?}", config.policy());
    println!("  program = {}", desc.program.display());
    println!("  working_dir = {}", desc.working_dir.display());
    println!("  program present = {present}");

    debug!("dry-run complete (no dialog, no spawn)");
    Ok(())
}
