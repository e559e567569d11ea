//! Batch runner: pulls candidates, classifies them, fetches the enabled ones
//! until the requested count is reached, and reports progress and a summary.
//!
//! Execution is sequential. Per-item failures are logged and skipped; only a
//! listing failure, an output write failure or a user abort end the run early.

mod progress;
mod state;
mod summary;

pub use progress::{elide, progress_line, PROGRESS_NAME_WIDTH};
pub use state::{BatchPhase, BatchState};
pub use summary::Summary;

use crate::classify::{classify, ContentCategory};
use crate::config::RcdConfig;
use crate::control::{AbortToken, RunAborted};
use crate::fetch::{DownloadTarget, FetchError, ItemFetcher};
use crate::listing::{ListingError, ListingSource, TimeWindow};
use crate::naming::FileNamer;
use std::io::{self, Write};
use std::num::NonZeroUsize;
use thiserror::Error;

/// Default listing over-fetch: candidates requested per wanted download.
pub const DEFAULT_OVERFETCH_FACTOR: usize = 3;

/// Which categories the user asked for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategorySelection {
    pub pictures: bool,
    pub gifs: bool,
    pub videos: bool,
}

impl CategorySelection {
    pub fn all() -> Self {
        Self {
            pictures: true,
            gifs: true,
            videos: true,
        }
    }

    pub fn allows(&self, category: ContentCategory) -> bool {
        match category {
            ContentCategory::Picture => self.pictures,
            ContentCategory::ShortLoopVideo => self.gifs,
            ContentCategory::HostedVideo => self.videos,
            ContentCategory::Unknown => false,
        }
    }

    /// Enabled categories in prompt order.
    pub fn enabled(&self) -> Vec<ContentCategory> {
        ContentCategory::DOWNLOADABLE
            .into_iter()
            .filter(|c| self.allows(*c))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.enabled().is_empty()
    }
}

/// Validated user input for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchRequest {
    pub collection: String,
    pub selection: CategorySelection,
    pub count: NonZeroUsize,
}

/// Outcome of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchReport {
    pub requested: usize,
    pub downloaded: usize,
    pub failed: usize,
    pub considered: usize,
    pub summary: Summary,
}

/// Failures that end a run. Per-item problems never surface here.
#[derive(Debug, Error)]
pub enum BatchError {
    #[error("invalid subreddit(s) {collection:?}")]
    InvalidCollection {
        collection: String,
        #[source]
        source: ListingError,
    },
    #[error("could not fetch listing: {0}")]
    Listing(#[source] ListingError),
    #[error("could not write progress: {0}")]
    Output(#[from] io::Error),
    #[error(transparent)]
    Aborted(#[from] RunAborted),
}

pub struct BatchRunner<'a> {
    listing: &'a dyn ListingSource,
    fetcher: &'a ItemFetcher<'a>,
    namer: FileNamer,
    window: TimeWindow,
    overfetch_factor: usize,
    abort: AbortToken,
}

impl<'a> BatchRunner<'a> {
    pub fn new(listing: &'a dyn ListingSource, fetcher: &'a ItemFetcher<'a>) -> Self {
        Self {
            listing,
            fetcher,
            namer: FileNamer::default(),
            window: TimeWindow::Day,
            overfetch_factor: DEFAULT_OVERFETCH_FACTOR,
            abort: AbortToken::new(),
        }
    }

    /// Applies name length, ranking window and over-fetch factor from config.
    pub fn configure(mut self, cfg: &RcdConfig) -> Self {
        self.namer = FileNamer::new(cfg.max_filename_len);
        self.window = cfg.time_window;
        self.overfetch_factor = cfg.overfetch_factor;
        self
    }

    pub fn with_namer(mut self, namer: FileNamer) -> Self {
        self.namer = namer;
        self
    }

    pub fn with_abort(mut self, abort: AbortToken) -> Self {
        self.abort = abort;
        self
    }

    /// Candidates requested from the listing for `count` wanted downloads.
    pub fn candidate_limit(&self, count: NonZeroUsize) -> usize {
        count.get().saturating_mul(self.overfetch_factor.max(1))
    }

    /// Runs one batch, writing progress lines and the summary to `out`.
    pub fn run<W: Write>(&self, request: &BatchRequest, out: &mut W) -> Result<BatchReport, BatchError> {
        let mut state = BatchState::new(request);
        let limit = self.candidate_limit(request.count);

        writeln!(out, "\nDownloading content...")?;
        let candidates = self
            .listing
            .top(&request.collection, self.window, limit)
            .map_err(|e| match e {
                ListingError::InvalidCollection { .. } => BatchError::InvalidCollection {
                    collection: request.collection.clone(),
                    source: e,
                },
                other => BatchError::Listing(other),
            })?;
        tracing::info!(
            collection = %request.collection,
            requested = request.count.get(),
            candidates = candidates.len(),
            "batch started"
        );

        state.begin_fetching();
        for candidate in &candidates {
            if state.is_complete() {
                break;
            }
            self.abort.check()?;
            state.record_considered();

            let classification = classify(candidate);
            if !request.selection.allows(classification.category) {
                tracing::debug!(
                    url = %candidate.url,
                    category = ?classification.category,
                    "skipping candidate"
                );
                continue;
            }
            let Some(target) = DownloadTarget::new(candidate, classification, &self.namer) else {
                continue;
            };

            match self.fetcher.fetch(&target) {
                Ok(fetched) => {
                    state.record_success();
                    tracing::info!(
                        file = %target.file_name,
                        bytes = ?fetched.bytes_written,
                        "downloaded"
                    );
                    writeln!(out, "{}", progress_line(state.fraction(), &target.file_name))?;
                }
                Err(FetchError::Aborted(e)) => return Err(BatchError::Aborted(e)),
                Err(e) => {
                    state.record_failure();
                    tracing::warn!(
                        permalink = %target.permalink,
                        url = %target.url,
                        error = %e,
                        "skipping post"
                    );
                    writeln!(out, "  Skipped {}: {}", target.permalink, e)?;
                }
            }
        }

        let summary = state.summarize(&request.collection);
        writeln!(out, "\n{summary}")?;
        state.finish();
        tracing::info!(
            downloaded = state.downloaded(),
            failed = state.failed(),
            considered = state.considered(),
            "batch finished"
        );

        Ok(BatchReport {
            requested: state.requested(),
            downloaded: state.downloaded(),
            failed: state.failed(),
            considered: state.considered(),
            summary,
        })
    }
}
