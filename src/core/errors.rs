//! core::errors
//!
//! Structured error taxonomy for repository discovery and initialization.
//!
//! # Design
//!
//! Failure kinds carry their offending path as a named field so callers can
//! pattern-match on the kind without parsing messages. Uncategorized
//! filesystem failures propagate transparently as [`Error::Io`] and are
//! fatal for the current operation.

use std::path::PathBuf;

use thiserror::Error;

use crate::core::paths::PROJECT_MARKER;

/// Errors from repository discovery and initialization.
#[derive(Debug, Error)]
pub enum Error {
    /// No project marker file was found walking upward from the start
    /// directory to the filesystem root.
    #[error(
        "could not find '{marker}' in '{dir}' or any of its parent directories",
        marker = PROJECT_MARKER,
        dir = .start_dir.display()
    )]
    RootNotFound {
        /// Resolved absolute directory the upward search started from.
        start_dir: PathBuf,
    },

    /// The target repository path already exists (as a file or a directory).
    #[error("repository already exists at: {}", .path.display())]
    RepoExists {
        /// The offending repository path.
        path: PathBuf,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// A specialized `Result` type for repository operations.
pub type Result<T> = std::result::Result<T, Error>;
