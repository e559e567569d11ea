//! Single-stream HTTP GET into a `.part` file, renamed on success.

use super::{DownloadTarget, FetchError};
use crate::control::AbortToken;
use crate::http::HttpClient;
use crate::storage::PartFile;
use std::io;
use std::path::Path;

/// Downloads `target.url` to `final_path`. On any failure the `.part` file is
/// removed and no file exists under `final_path` from this call.
/// Returns the number of bytes written.
pub(super) fn download_direct(
    http: &HttpClient,
    target: &DownloadTarget,
    final_path: &Path,
    abort: &AbortToken,
) -> Result<u64, FetchError> {
    let mut part = PartFile::create(final_path).map_err(|source| FetchError::InvalidFileName {
        file_name: target.file_name.clone(),
        permalink: target.permalink.clone(),
        source,
    })?;

    let mut write_error: Option<io::Error> = None;
    let result = http.get_streaming(&target.url, abort, |data| {
        if abort.is_aborted() {
            return false;
        }
        match part.write_chunk(data) {
            Ok(()) => true,
            Err(e) => {
                write_error = Some(e);
                false
            }
        }
    });

    abort.check()?;
    if let Some(source) = write_error {
        return Err(FetchError::Storage {
            file_name: target.file_name.clone(),
            source,
        });
    }
    let status = result.map_err(|source| FetchError::Transport {
        url: target.url.clone(),
        source,
    })?;
    if !(200..300).contains(&status) {
        return Err(FetchError::Http {
            url: target.url.clone(),
            status,
        });
    }

    part.finalize(final_path)
        .map_err(|source| FetchError::Storage {
            file_name: target.file_name.clone(),
            source,
        })
}
