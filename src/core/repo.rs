//! core::repo
//!
//! Repository initialization.
//!
//! Creates the empty `.ugit` layout under the project root located by
//! [`crate::core::paths::find_project_root`]. The existence check happens
//! before anything is created; an existing repository is never overwritten.
//! There is no locking, so two processes racing to initialize the same
//! project root are not protected against each other: the first writer wins
//! and the second observes [`Error::RepoExists`].

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::core::errors::{Error, Result};
use crate::core::paths::{self, RepoPaths};

/// Initialize a new `.ugit` repository under the project root.
///
/// Searches upward from `start_dir` (or the current working directory when
/// `None`) for the project marker, then creates the repository layout:
/// `objects/`, `refs/heads/`, `refs/tags/`, and a `HEAD` file pointing at
/// the default branch.
///
/// Returns the absolute path to the created repository directory.
///
/// # Errors
///
/// - [`Error::RootNotFound`] when no project root exists above `start_dir`
///   (propagated unchanged from the locator)
/// - [`Error::RepoExists`] when the repository path is already present,
///   whether as a file or a directory
/// - [`Error::Io`] for any underlying filesystem failure
pub fn init_repo(start_dir: Option<&Path>) -> Result<PathBuf> {
    let root = paths::find_project_root(start_dir)?;
    let repo = RepoPaths::new(root);
    let repo_dir = repo.repo_dir();

    if repo_dir.try_exists()? {
        return Err(Error::RepoExists { path: repo_dir });
    }

    fs::create_dir_all(repo.objects_dir())?;
    fs::create_dir_all(repo.heads_dir())?;
    fs::create_dir_all(repo.tags_dir())?;
    fs::write(repo.head_file(), paths::HEAD_CONTENT)?;

    debug!(repo = %repo_dir.display(), "created empty repository layout");
    Ok(repo_dir)
}
