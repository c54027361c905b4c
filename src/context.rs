//! context
//!
//! Process-wide execution context, owned by the entry point and passed by
//! reference to everything that needs it.
//!
//! # Design
//!
//! The logs directory is derived state (project root + `logs/`), computed
//! lazily on first use and cached for the life of the context value. The
//! cache lives here, not in module-global state, so tests can hold their own
//! context and clear it explicitly via [`Context::reset_logs_dir`].

use std::cell::OnceCell;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::paths;

/// Execution context for the running process.
#[derive(Debug, Default)]
pub struct Context {
    /// Working directory override. `None` means the process current
    /// working directory.
    pub cwd: Option<PathBuf>,

    logs_dir: OnceCell<Option<PathBuf>>,
}

impl Context {
    /// Create a context, optionally overriding the working directory.
    pub fn new(cwd: Option<PathBuf>) -> Self {
        Self {
            cwd,
            logs_dir: OnceCell::new(),
        }
    }

    /// The directory receiving log files, `<project root>/logs`, created on
    /// first access.
    ///
    /// Resolution happens at most once per context value. Returns `None`
    /// when no project root can be located (or the directory cannot be
    /// created), in which case logging stays on stderr only.
    pub fn logs_dir(&self) -> Option<&Path> {
        self.logs_dir
            .get_or_init(|| {
                let root = paths::find_project_root(self.cwd.as_deref()).ok()?;
                let dir = root.join(paths::LOGS_DIR);
                fs::create_dir_all(&dir).ok()?;
                Some(dir)
            })
            .as_deref()
    }

    /// Forget the cached logs directory so the next access recomputes it.
    /// Exposed for tests.
    pub fn reset_logs_dir(&mut self) {
        self.logs_dir = OnceCell::new();
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::core::paths::PROJECT_MARKER;

    fn project_fixture() -> TempDir {
        let project = TempDir::new().unwrap();
        fs::write(
            project.path().join(PROJECT_MARKER),
            "[package]\nname = \"fixture\"\n",
        )
        .unwrap();
        project
    }

    #[test]
    fn logs_dir_is_created_under_the_project_root() {
        let project = project_fixture();
        let ctx = Context::new(Some(project.path().to_path_buf()));

        let logs = ctx.logs_dir().expect("logs dir should resolve");
        assert!(logs.is_dir());
        assert_eq!(
            logs,
            project
                .path()
                .canonicalize()
                .unwrap()
                .join(paths::LOGS_DIR)
        );
    }

    #[test]
    fn logs_dir_resolves_to_none_outside_a_project() {
        let orphan = TempDir::new().unwrap();
        let ctx = Context::new(Some(orphan.path().to_path_buf()));

        assert!(ctx.logs_dir().is_none());
    }

    #[test]
    fn cached_value_survives_until_reset() {
        let project = project_fixture();
        let mut ctx = Context::new(Some(project.path().to_path_buf()));

        let first = ctx.logs_dir().unwrap().to_path_buf();
        fs::remove_dir(&first).unwrap();

        // Still the cached answer, even though the directory is gone.
        assert_eq!(ctx.logs_dir().unwrap(), first);

        ctx.reset_logs_dir();

        // Recomputed after reset, which recreates the directory.
        let second = ctx.logs_dir().unwrap();
        assert_eq!(second, first);
        assert!(second.is_dir());
    }
}
