//! Item retrieval: direct HTTP pulls for pictures and short loops, delegated
//! extraction for hosted videos.

mod direct;
mod error;

pub use error::FetchError;

use crate::candidate::Candidate;
use crate::classify::{Classification, ContentCategory};
use crate::control::AbortToken;
use crate::extract::VideoExtractor;
use crate::http::HttpClient;
use crate::naming::{extension_from_url, FileNamer};
use std::path::{Path, PathBuf};

/// What to fetch and where to put it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadTarget {
    pub category: ContentCategory,
    /// Effective URL (after host rewrite).
    pub url: String,
    pub file_name: String,
    /// Identifies the post in failure reports.
    pub permalink: String,
    /// Preferred extractor input for hosted videos.
    pub embed_url: Option<String>,
}

impl DownloadTarget {
    /// `None` for `Unknown` classifications.
    pub fn new(candidate: &Candidate, classification: Classification, namer: &FileNamer) -> Option<Self> {
        let tag = classification.category.tag()?;
        let extension = extension_from_url(&classification.url);
        let file_name = namer.name(&candidate.title, &candidate.collection, tag, &extension);
        let embed_url = match classification.category {
            ContentCategory::HostedVideo => candidate
                .media
                .as_ref()
                .and_then(|media| media.embed_url.clone()),
            _ => None,
        };
        Some(Self {
            category: classification.category,
            url: classification.url,
            file_name,
            permalink: candidate.source().to_string(),
            embed_url,
        })
    }
}

/// Successful fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fetched {
    /// Body size for direct downloads; `None` when the extractor wrote the file.
    pub bytes_written: Option<u64>,
}

/// Fetches one target at a time into `download_dir`.
pub struct ItemFetcher<'a> {
    http: &'a HttpClient,
    extractor: &'a dyn VideoExtractor,
    download_dir: PathBuf,
    abort: AbortToken,
}

impl<'a> ItemFetcher<'a> {
    pub fn new(
        http: &'a HttpClient,
        extractor: &'a dyn VideoExtractor,
        download_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            http,
            extractor,
            download_dir: download_dir.into(),
            abort: AbortToken::new(),
        }
    }

    /// Stop in-flight transfers when `abort` is set.
    pub fn with_abort(mut self, abort: AbortToken) -> Self {
        self.abort = abort;
        self
    }

    pub fn download_dir(&self) -> &Path {
        &self.download_dir
    }

    pub fn fetch(&self, target: &DownloadTarget) -> Result<Fetched, FetchError> {
        self.abort.check()?;
        match target.category {
            ContentCategory::Picture | ContentCategory::ShortLoopVideo => {
                let final_path = self.download_dir.join(&target.file_name);
                let bytes = direct::download_direct(self.http, target, &final_path, &self.abort)?;
                tracing::debug!(
                    url = %target.url,
                    file = %final_path.display(),
                    bytes,
                    "direct download complete"
                );
                Ok(Fetched {
                    bytes_written: Some(bytes),
                })
            }
            ContentCategory::HostedVideo => {
                let url = target.embed_url.as_deref().unwrap_or(&target.url);
                self.extractor
                    .extract(url, &self.download_dir)
                    .map_err(|source| FetchError::Extract {
                        url: url.to_string(),
                        source,
                    })?;
                tracing::debug!(url, "video extraction complete");
                Ok(Fetched {
                    bytes_written: None,
                })
            }
            ContentCategory::Unknown => Err(FetchError::NotDownloadable {
                url: target.url.clone(),
            }),
        }
    }
}
