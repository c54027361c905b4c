//! Integration tests for the ugit CLI surface.
//!
//! These tests drive the compiled binary end-to-end and verify:
//! - Help/version flags and the bare invocation all exit 0
//! - `init` creates the exact repository layout and exits 0
//! - Failure modes (repository exists, no project root) exit 1 with the
//!   offending path on stderr

use assert_cmd::Command;
use assert_fs::fixture::{FileWriteStr, PathChild};
use assert_fs::prelude::PathCreateDir;
use assert_fs::TempDir;
use predicates::prelude::predicate;

// =============================================================================
// Test Fixtures
// =============================================================================

/// A temporary project tree with a manifest marker at its root.
struct TestProject {
    dir: TempDir,
}

impl TestProject {
    fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        dir.child("Cargo.toml")
            .write_str("[package]\nname = \"fixture\"\nversion = \"0.0.0\"\n")
            .expect("failed to write marker");
        Self { dir }
    }

    /// Run `ugit` with the given args, with the given cwd inside the project.
    fn ugit_in(&self, rel: &str, args: &[&str]) -> Command {
        let cwd = if rel.is_empty() {
            self.dir.path().to_path_buf()
        } else {
            let child = self.dir.child(rel);
            child.create_dir_all().expect("failed to create subdir");
            child.path().to_path_buf()
        };
        let mut cmd = Command::cargo_bin("ugit").expect("binary should build");
        cmd.current_dir(cwd);
        cmd.args(args);
        cmd
    }
}

fn ugit_in_dir(dir: &std::path::Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("ugit").expect("binary should build");
    cmd.current_dir(dir);
    cmd.args(args);
    cmd
}

// =============================================================================
// Tests: Global Flags
// =============================================================================

#[test]
fn help_flag_prints_usage_and_exits_zero() {
    let project = TestProject::new();
    project
        .ugit_in("", &["--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn short_help_flag_behaves_like_long_one() {
    let project = TestProject::new();
    project
        .ugit_in("", &["-h"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn version_flag_prints_version_and_exits_zero() {
    let project = TestProject::new();
    project
        .ugit_in("", &["--version"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("ugit "));
}

#[test]
fn short_version_flag_behaves_like_long_one() {
    let project = TestProject::new();
    project
        .ugit_in("", &["-v"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("ugit "));
}

#[test]
fn bare_invocation_prints_help_and_exits_zero() {
    let project = TestProject::new();
    project
        .ugit_in("", &[])
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}

// =============================================================================
// Tests: init
// =============================================================================

#[test]
fn init_creates_the_repository_layout() {
    let project = TestProject::new();

    project
        .ugit_in("", &["init"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Initialized empty ugit repository in",
        ));

    let repo = project.dir.child(".ugit");
    assert!(repo.child("objects").path().is_dir());
    assert!(repo.child("refs/heads").path().is_dir());
    assert!(repo.child("refs/tags").path().is_dir());

    let head = std::fs::read_to_string(repo.child("HEAD").path()).unwrap();
    assert_eq!(head, "ref: refs/heads/main\n");
}

#[test]
fn init_from_a_nested_directory_targets_the_project_root() {
    let project = TestProject::new();

    project.ugit_in("src/pkg", &["init"]).assert().success();

    assert!(project.dir.child(".ugit/HEAD").path().is_file());
}

#[test]
fn second_init_fails_with_the_offending_path() {
    let project = TestProject::new();

    project.ugit_in("", &["init"]).assert().success();
    project
        .ugit_in("", &["init"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("repository already exists at:"))
        .stderr(predicate::str::contains(".ugit"));
}

#[test]
fn init_outside_any_project_fails_with_the_start_path() {
    let orphan = TempDir::new().expect("failed to create temp dir");
    let resolved = orphan.path().canonicalize().unwrap();

    ugit_in_dir(orphan.path(), &["init"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Cargo.toml"))
        .stderr(predicate::str::contains(resolved.display().to_string()));
}
