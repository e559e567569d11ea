//! One interactive run: prompts, wiring of the core components, batch, outcome.

use anyhow::Result;
use rcd_core::batch::{BatchError, BatchReport, BatchRunner};
use rcd_core::config::RcdConfig;
use rcd_core::control::AbortToken;
use rcd_core::extract::YtDlpExtractor;
use rcd_core::fetch::ItemFetcher;
use rcd_core::http::HttpClient;
use rcd_core::listing::RedditListing;
use std::io::{self, Write};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};

use super::prompt;

/// Blocking; runs on a `spawn_blocking` thread. `batch_started` is set once
/// the prompts are answered.
pub fn run_session(
    cfg: &RcdConfig,
    download_dir: &Path,
    abort: AbortToken,
    batch_started: &AtomicBool,
) -> Result<()> {
    let mut input = io::stdin().lock();
    // Unlocked handle: the interrupt handler prints from another thread.
    let mut out = io::stdout();

    let request = prompt::read_request(&mut input, &mut out, cfg.time_window)?;
    batch_started.store(true, Ordering::Release);
    tracing::info!(
        collection = %request.collection,
        count = request.count.get(),
        selection = ?request.selection,
        "starting batch"
    );

    let http = HttpClient::from_config(cfg);
    let listing = RedditListing::new(&http, cfg.listing_base_url.clone());
    let extractor = YtDlpExtractor::new(&cfg.extractor());
    let fetcher = ItemFetcher::new(&http, &extractor, download_dir).with_abort(abort.clone());
    let runner = BatchRunner::new(&listing, &fetcher)
        .configure(cfg)
        .with_abort(abort);

    let result = runner.run(&request, &mut out);
    report_outcome(result, &mut out)
}

/// Prints the terminal message for run-ending failures. The summary of a
/// completed run was already printed by the batch runner.
pub(crate) fn report_outcome<W: Write>(
    result: Result<BatchReport, BatchError>,
    out: &mut W,
) -> Result<()> {
    match result {
        Ok(report) => {
            tracing::info!(
                downloaded = report.downloaded,
                requested = report.requested,
                "run complete"
            );
        }
        Err(BatchError::InvalidCollection { collection, source }) => {
            tracing::warn!(%collection, error = %source, "invalid collection");
            writeln!(out, "\nInvalid subreddit(s), please try again.")?;
        }
        Err(BatchError::Aborted(_)) => {
            tracing::info!("batch aborted");
        }
        Err(e) => {
            tracing::error!(error = %e, "batch failed");
            writeln!(out, "\nError downloading content: {e}")?;
        }
    }
    out.flush()?;
    Ok(())
}
