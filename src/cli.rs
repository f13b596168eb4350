// src/cli.rs

//! CLI argument parsing using `clap`.
//!
//! None of these flags change where the application is launched from; they
//! only control diagnostics and how the installation step is presented.

use clap::{Parser, ValueEnum};

/// Command-line arguments for `erewhon-installer`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "erewhon-installer",
    version,
    about = "Run the Erewhon installation dialog, then start the installed client.",
    long_about = None
)]
pub struct CliArgs {
    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `EREWHON_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Resolve and print the launch target, but don't show the dialog or
    /// start anything.
    #[arg(long)]
    pub dry_run: bool,

    /// Skip the interactive dialog and treat the install as completed.
    #[arg(long)]
    pub unattended: bool,

    /// Only start the client if the installation dialog completed.
    #[arg(long)]
    pub require_install: bool,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
