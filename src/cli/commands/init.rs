//! init command - Create an empty ugit repository

use anyhow::Result;

use crate::context::Context;
use crate::core::repo;

/// Initialize a ugit repository under the nearest project root.
///
/// Locator and initializer failures propagate unchanged; `main` formats
/// them and picks the exit code.
pub fn init(ctx: &Context) -> Result<()> {
    let repo_dir = repo::init_repo(ctx.cwd.as_deref())?;

    println!("Initialized empty ugit repository in {}", repo_dir.display());
    Ok(())
}
