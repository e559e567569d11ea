//! Diagnostics log for a run.
//!
//! Progress and summaries are printed to stdout by the CLI; the log only
//! carries diagnostics so the two never interleave on the terminal. The log
//! lives at `$XDG_STATE_HOME/rcd/rcd.log`; stderr is the fallback.

use anyhow::{anyhow, Context, Result};
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,rcd=debug,rcd_core=debug";

/// `$XDG_STATE_HOME/rcd/rcd.log`, creating the directory if needed.
pub fn log_file_path() -> Result<PathBuf> {
    let dirs = xdg::BaseDirectories::with_prefix("rcd")?;
    dirs.place_state_file("rcd.log")
        .context("creating rcd state directory")
}

/// Appends to the log file. Errors (unwritable state dir, subscriber
/// already set) leave the caller free to fall back to [`init_logging_stderr`].
pub fn init_logging() -> Result<PathBuf> {
    let path = log_file_path()?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("opening log file {}", path.display()))?;
    install(Mutex::new(file))?;
    tracing::info!(path = %path.display(), "rcd logging initialized");
    Ok(path)
}

/// Logs to stderr. Never fails; a subscriber that is already set is kept.
pub fn init_logging_stderr() {
    let _ = install(std::io::stderr);
}

fn install<W>(writer: W) -> Result<()>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!("installing log subscriber: {e}"))
}

fn env_filter() -> EnvFilter {
    filter_or_default(std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref())
}

/// `RUST_LOG`-style directives; unset or unparsable falls back to the default.
fn filter_or_default(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}
