//! core::paths
//!
//! Project-root discovery and centralized routing for repository storage
//! locations.
//!
//! # Discovery
//!
//! The project root is the nearest ancestor directory (starting from a given
//! directory and walking strictly upward) that directly contains the
//! [`PROJECT_MARKER`] manifest file. Discovery is recomputed on every call;
//! nothing is cached across processes.
//!
//! # Storage Layout
//!
//! All repository data lives under `<project root>/.ugit/`:
//!
//! ```text
//! .ugit/
//! ├─ objects/
//! ├─ refs/
//! │  ├─ heads/
//! │  └─ tags/
//! └─ HEAD          (contents: "ref: refs/heads/main\n")
//! ```
//!
//! **Hard rule:** no code outside this module joins layout segments by hand.
//! All repository-internal paths are computed through [`RepoPaths`].

use std::env;
use std::path::{Path, PathBuf};

use crate::core::errors::{Error, Result};

/// Marker file whose presence identifies the project root.
pub const PROJECT_MARKER: &str = "Cargo.toml";

/// Name of the repository directory created under the project root.
pub const UGIT_DIR: &str = ".ugit";

/// Object storage directory, relative to the repository directory.
pub const OBJECTS_DIR: &str = "objects";

/// References directory, relative to the repository directory.
pub const REFS_DIR: &str = "refs";

/// Branch references directory, relative to the refs directory.
pub const HEADS_DIR: &str = "heads";

/// Tag references directory, relative to the refs directory.
pub const TAGS_DIR: &str = "tags";

/// Name of the symbolic reference file at the repository top level.
pub const HEAD_FILE: &str = "HEAD";

/// Exact content of `HEAD` in a freshly initialized repository.
pub const HEAD_CONTENT: &str = "ref: refs/heads/main\n";

/// Directory under the project root that receives log files.
pub const LOGS_DIR: &str = "logs";

/// Return the absolute path of the project root directory.
///
/// Searches upward from `start_dir` (or the process current working
/// directory when `None`) until a directory directly containing
/// [`PROJECT_MARKER`] is found. The nearest such ancestor wins.
///
/// # Errors
///
/// Returns [`Error::RootNotFound`] carrying the resolved start directory
/// when no candidate in the ancestor chain contains the marker.
pub fn find_project_root(start_dir: Option<&Path>) -> Result<PathBuf> {
    let start = match start_dir {
        Some(dir) => dir.to_path_buf(),
        None => env::current_dir()?,
    };

    // Canonicalization only works for paths that exist; a nonexistent start
    // still gets an absolute form so the ancestor walk and any error message
    // are deterministic.
    let start_abs = match start.canonicalize() {
        Ok(resolved) => resolved,
        Err(_) if start.is_absolute() => start,
        Err(_) => env::current_dir()?.join(start),
    };

    for candidate in start_abs.ancestors() {
        if candidate.join(PROJECT_MARKER).is_file() {
            return Ok(candidate.to_path_buf());
        }
    }

    Err(Error::RootNotFound {
        start_dir: start_abs,
    })
}

/// Centralized path routing for repository storage.
///
/// Computed from a project root; every repository-internal location is a
/// method here so the layout is defined in exactly one place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoPaths {
    root: PathBuf,
}

impl RepoPaths {
    /// Create routing for the repository under the given project root.
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self {
            root: project_root.into(),
        }
    }

    /// The project root directory this repository lives under.
    pub fn project_root(&self) -> &Path {
        &self.root
    }

    /// `<project root>/.ugit`
    pub fn repo_dir(&self) -> PathBuf {
        self.root.join(UGIT_DIR)
    }

    /// `<project root>/.ugit/objects`
    pub fn objects_dir(&self) -> PathBuf {
        self.repo_dir().join(OBJECTS_DIR)
    }

    /// `<project root>/.ugit/refs/heads`
    pub fn heads_dir(&self) -> PathBuf {
        self.repo_dir().join(REFS_DIR).join(HEADS_DIR)
    }

    /// `<project root>/.ugit/refs/tags`
    pub fn tags_dir(&self) -> PathBuf {
        self.repo_dir().join(REFS_DIR).join(TAGS_DIR)
    }

    /// `<project root>/.ugit/HEAD`
    pub fn head_file(&self) -> PathBuf {
        self.repo_dir().join(HEAD_FILE)
    }
}
