//! cli::commands
//!
//! Command dispatch and handlers.

mod init;

pub use init::init;

use anyhow::Result;

use crate::cli::args::Command;
use crate::context::Context;

/// Dispatch a command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<()> {
    match command {
        Command::Init => init(ctx),
    }
}
