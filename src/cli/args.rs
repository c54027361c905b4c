//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! - `--help` / `-h`: Show help
//! - `--version` / `-v`: Show the version string
//!
//! clap's default `-V` short flag is disabled; this tool documents `-v` for
//! the version, so the flag is registered by hand.

use clap::{ArgAction, Parser, Subcommand};

/// ugit - A tiny Git-like version control system for learning
#[derive(Parser, Debug)]
#[command(name = "ugit")]
#[command(version, about = "A tiny Git-like version control system for learning.")]
#[command(disable_version_flag = true)]
pub struct Cli {
    /// Display the ugit version
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    version: (),

    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Initialize an empty ugit repository under the project root
    #[command(
        name = "init",
        long_about = "Initialize an empty ugit repository.\n\n\
            Searches upward from the current directory for a 'Cargo.toml' to \
            locate the project root, then creates the '.ugit' directory \
            layout under it."
    )]
    Init,
}
