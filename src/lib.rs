//! ugit - A tiny Git-like version control system for learning.
//!
//! This is the initial scaffold: repository discovery, repository
//! initialization, CLI argument parsing, and logging configuration. There is
//! no object store, commit graph, or index yet; every future subcommand will
//! bootstrap itself through the discovery and initialization contracts defined
//! here.
//!
//! # Architecture
//!
//! The codebase follows a layered architecture:
//!
//! - [`cli`] - Command-line interface layer (parses args, delegates to handlers)
//! - [`core`] - Domain logic: root discovery, path routing, repository layout
//! - [`context`] - Process-wide execution context owned by the entry point
//! - [`logging`] - Process-wide tracing subscriber installation
//!
//! # Correctness Invariants
//!
//! 1. The project root is recomputed on every invocation, never cached
//!    across processes
//! 2. Repository initialization checks for an existing repository before
//!    creating anything, and never overwrites one
//! 3. `HEAD` always contains exactly one line: `ref: refs/heads/main`

pub mod cli;
pub mod context;
pub mod core;
pub mod logging;
