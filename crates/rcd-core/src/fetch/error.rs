//! Per-item fetch failures. Every variant except `Aborted` is recoverable:
//! the batch logs it and moves on to the next candidate.

use crate::control::RunAborted;
use crate::extract::ExtractError;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    /// Server answered with a non-2xx status; nothing was written.
    #[error("HTTP {status} from {url}")]
    Http { url: String, status: u32 },
    /// DNS, connect, timeout or other transfer failure.
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: curl::Error,
    },
    /// The file could not be created under the derived name.
    #[error("cannot create {file_name:?} for {permalink}: {source}")]
    InvalidFileName {
        file_name: String,
        permalink: String,
        #[source]
        source: io::Error,
    },
    /// Writing or committing the body failed (disk full, permissions).
    #[error("writing {file_name:?} failed: {source}")]
    Storage {
        file_name: String,
        #[source]
        source: io::Error,
    },
    #[error("video extraction for {url} failed: {source}")]
    Extract {
        url: String,
        #[source]
        source: ExtractError,
    },
    #[error("{url} is not downloadable")]
    NotDownloadable { url: String },
    #[error(transparent)]
    Aborted(#[from] RunAborted),
}

impl FetchError {
    /// True for failures that should skip the item and continue the batch.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, FetchError::Aborted(_))
    }
}
