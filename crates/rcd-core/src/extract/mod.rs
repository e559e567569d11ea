//! Video extraction interface for hosted-video posts.
//!
//! Hosted videos are resolved and downloaded by an external tool under its own
//! naming; from the fetcher's point of view each call is a plain success or
//! failure.

mod yt_dlp;

pub use yt_dlp::YtDlpExtractor;

use std::io;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("video extractor {program:?} is not installed")]
    NotInstalled { program: String },
    #[error("could not run video extractor {program:?}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
    #[error("video extractor failed ({status}): {message}")]
    Failed { status: String, message: String },
}

/// Resolves a video page URL and downloads the best stream into `dir`.
pub trait VideoExtractor {
    fn extract(&self, url: &str, dir: &Path) -> Result<(), ExtractError>;
}
