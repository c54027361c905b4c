//! logging
//!
//! Process-wide tracing subscriber installation.
//!
//! Events always go to stderr. When a project root can be resolved, a second
//! layer appends to `<project root>/logs/ugit.log`; when it cannot, the
//! subscriber stays stderr-only and a warning is emitted once installation
//! has succeeded, so the message lands on an actual sink.
//!
//! # Environment Variables
//!
//! `UGIT_LOG_LEVEL`: optional severity threshold. Accepts the conventional
//! names `DEBUG`, `INFO`, `WARNING`, `ERROR`, `CRITICAL` (case-insensitive).
//! `WARNING` maps to `warn` and `CRITICAL` to `error`; anything
//! unrecognized falls back to the `INFO` default.

use std::env;
use std::fs::OpenOptions;
use std::sync::Arc;

use tracing::level_filters::LevelFilter;
use tracing::warn;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::context::Context;

/// Environment variable selecting the log severity threshold.
pub const ENV_LOG_LEVEL: &str = "UGIT_LOG_LEVEL";

/// File name of the log sink inside the logs directory.
const LOG_FILE_NAME: &str = "ugit.log";

/// Map an `UGIT_LOG_LEVEL` value to a level filter.
fn level_from_env(value: Option<&str>) -> LevelFilter {
    match value.map(|v| v.trim().to_ascii_uppercase()).as_deref() {
        Some("DEBUG") => LevelFilter::DEBUG,
        Some("INFO") => LevelFilter::INFO,
        Some("WARNING") => LevelFilter::WARN,
        Some("ERROR") | Some("CRITICAL") => LevelFilter::ERROR,
        _ => LevelFilter::INFO,
    }
}

/// Install the global subscriber. Calling this a second time is a no-op.
pub fn init(ctx: &Context) {
    let level = level_from_env(env::var(ENV_LOG_LEVEL).ok().as_deref());
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .parse_lossy("");

    let file_layer = ctx
        .logs_dir()
        .and_then(|dir| {
            OpenOptions::new()
                .create(true)
                .append(true)
                .open(dir.join(LOG_FILE_NAME))
                .ok()
        })
        .map(|file| fmt::layer().with_ansi(false).with_writer(Arc::new(file)));
    let file_sink_active = file_layer.is_some();

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(file_layer)
        .try_init()
        .is_ok();

    if installed && !file_sink_active {
        warn!("no project root found; logging to stderr only");
    }
}
