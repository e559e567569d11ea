//! Top listing from Reddit's public JSON endpoints.

use super::parse::parse_listing_page;
use super::{ListingError, ListingSource, TimeWindow};
use crate::candidate::Candidate;
use crate::http::HttpClient;

/// Reddit caps `limit` at 100 per page; larger requests are paginated.
pub const MAX_PAGE_SIZE: usize = 100;

/// Collection identifiers are subreddit names, optionally joined with `+`
/// (`gifs+funny`). Anything else is rejected before a request is made.
pub fn validate_collection(collection: &str) -> Result<(), ListingError> {
    let valid = collection.split('+').all(|part| {
        !part.is_empty() && part.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
    });
    if valid {
        Ok(())
    } else {
        Err(ListingError::InvalidCollection {
            collection: collection.to_string(),
            reason: "not a subreddit name".to_string(),
        })
    }
}

/// Listing source backed by `<base>/r/<collection>/top.json`.
pub struct RedditListing<'a> {
    http: &'a HttpClient,
    base_url: String,
}

impl<'a> RedditListing<'a> {
    pub fn new(http: &'a HttpClient, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    fn page_url(
        &self,
        collection: &str,
        window: TimeWindow,
        limit: usize,
        after: Option<&str>,
    ) -> String {
        let mut url = format!(
            "{}/r/{}/top.json?t={}&limit={}&raw_json=1",
            self.base_url, collection, window, limit
        );
        if let Some(after) = after {
            url.push_str("&after=");
            url.push_str(after);
        }
        url
    }
}

impl ListingSource for RedditListing<'_> {
    fn top(
        &self,
        collection: &str,
        window: TimeWindow,
        limit: usize,
    ) -> Result<Vec<Candidate>, ListingError> {
        validate_collection(collection)?;

        let mut candidates: Vec<Candidate> = Vec::with_capacity(limit);
        let mut after: Option<String> = None;

        while candidates.len() < limit {
            let page_size = (limit - candidates.len()).min(MAX_PAGE_SIZE);
            let url = self.page_url(collection, window, page_size, after.as_deref());
            tracing::debug!(%url, "requesting listing page");

            let response = self.http.get(&url, false)?;
            match response.status {
                200..=299 => {}
                // Unknown subreddits redirect to search; banned/private ones are 403/404.
                status @ (300..=399 | 400 | 403 | 404) => {
                    return Err(ListingError::InvalidCollection {
                        collection: collection.to_string(),
                        reason: format!("HTTP {status}"),
                    });
                }
                status => return Err(ListingError::Http(status)),
            }

            let page = parse_listing_page(&response.body)?;
            let received = page.candidates.len();
            candidates.extend(page.candidates);
            after = page.after;
            if received == 0 || after.is_none() {
                break;
            }
        }

        candidates.truncate(limit);
        tracing::info!(
            collection,
            window = %window,
            requested = limit,
            received = candidates.len(),
            "listing fetched"
        );
        Ok(candidates)
    }
}
