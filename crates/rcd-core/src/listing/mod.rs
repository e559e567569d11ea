//! Listing source interface for turning a collection identifier into candidates.
//!
//! The batch runner only depends on this trait and does not know about the
//! Reddit JSON API or any other concrete listing format.

mod parse;
mod reddit;

pub use parse::{parse_listing_page, ListingPage};
pub use reddit::{validate_collection, RedditListing, MAX_PAGE_SIZE};

use crate::candidate::Candidate;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Ranking window for the top listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeWindow {
    Hour,
    #[default]
    Day,
    Week,
    Month,
    Year,
    All,
}

impl TimeWindow {
    pub fn as_str(self) -> &'static str {
        match self {
            TimeWindow::Hour => "hour",
            TimeWindow::Day => "day",
            TimeWindow::Week => "week",
            TimeWindow::Month => "month",
            TimeWindow::Year => "year",
            TimeWindow::All => "all",
        }
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
pub enum ListingError {
    /// The collection does not exist, is private, or the identifier is malformed.
    #[error("invalid collection {collection:?}: {reason}")]
    InvalidCollection { collection: String, reason: String },
    #[error("listing request returned HTTP {0}")]
    Http(u32),
    #[error("listing request failed: {0}")]
    Transport(#[from] curl::Error),
    #[error("malformed listing response: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Source of ranked candidates (e.g. the top posts of a subreddit).
pub trait ListingSource {
    /// Up to `limit` candidates of `collection`, best first.
    fn top(
        &self,
        collection: &str,
        window: TimeWindow,
        limit: usize,
    ) -> Result<Vec<Candidate>, ListingError>;
}
