//! CLI for the RCD content downloader.
//!
//! There are no flags beyond `--help`/`--version`: all input is collected by
//! interactive prompts. The session runs on a blocking task so the main task
//! can watch for Ctrl-C and abort it.

mod prompt;
mod session;

use anyhow::{anyhow, Result};
use clap::Parser;
use rcd_core::config;
use rcd_core::control::AbortToken;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// How long an interrupted session gets to clean up its `.part` file.
const ABORT_GRACE: Duration = Duration::from_secs(2);

/// Wait after Ctrl-C. Prompts block on stdin and never return, so only a
/// started batch is waited for.
fn abort_grace(batch_started: bool) -> Duration {
    if batch_started {
        ABORT_GRACE
    } else {
        Duration::ZERO
    }
}

/// Top-level CLI for the RCD content downloader.
#[derive(Debug, Parser)]
#[command(name = "rcd", version)]
#[command(
    about = "RCD: download top pictures, gifs and videos from a subreddit",
    long_about = "Prompts for a subreddit, the content types to fetch and a post count, \
                  then saves matching top posts of the day into the current directory."
)]
pub struct Cli {}

/// How the process should exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    Finished,
    Interrupted,
}

/// Resolves only on an actual Ctrl-C; if the handler cannot be installed it never resolves.
async fn wait_for_interrupt() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("cannot listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
}

pub async fn run_from_args() -> Result<Exit> {
    let _cli = Cli::parse();
    let cfg = config::load_or_init()?;
    tracing::debug!("loaded config: {:?}", cfg);
    let download_dir = std::env::current_dir()?;

    let abort = AbortToken::new();
    let session_abort = abort.clone();
    let batch_started = Arc::new(AtomicBool::new(false));
    let session_started = Arc::clone(&batch_started);
    let mut session = tokio::task::spawn_blocking(move || {
        session::run_session(&cfg, &download_dir, session_abort, &session_started)
    });

    let finished = tokio::select! {
        joined = &mut session => Some(joined),
        _ = wait_for_interrupt() => None,
    };

    match finished {
        Some(Ok(result)) => result.map(|()| Exit::Finished),
        Some(Err(e)) => {
            println!("\nError downloading content");
            Err(anyhow!("download session failed unexpectedly: {}", e))
        }
        None => {
            abort.request_abort();
            println!("\nInterrupted, exiting.");
            let grace = abort_grace(batch_started.load(Ordering::Acquire));
            tracing::info!(?grace, "run interrupted by user");
            if !grace.is_zero() {
                let _ = tokio::time::timeout(grace, session).await;
            }
            Ok(Exit::Interrupted)
        }
    }
}

#[cfg(test)]
mod tests;
