//! cli
//!
//! Command-line interface layer.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Delegate to command handlers
//! - Does NOT touch the repository directly; all filesystem work happens in
//!   [`crate::core`]

pub mod args;
pub mod commands;

pub use args::Cli;

use anyhow::Result;
use clap::CommandFactory;

use crate::context::Context;

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run(ctx: &Context) -> Result<()> {
    let cli = Cli::parse_args();

    match cli.command {
        Some(command) => commands::dispatch(command, ctx),
        // Invoked with no arguments at all: show the help and exit cleanly.
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    }
}
