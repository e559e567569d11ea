//! Parse Reddit listing JSON into candidates.

use serde::Deserialize;
use serde_json::Value;

use crate::candidate::{Candidate, MediaDescriptor};

/// One page of a listing: candidates plus the cursor for the next page.
#[derive(Debug, Clone, Default)]
pub struct ListingPage {
    pub candidates: Vec<Candidate>,
    pub after: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Listing {
    data: ListingData,
}

#[derive(Debug, Deserialize)]
struct ListingData {
    #[serde(default)]
    children: Vec<Child>,
    #[serde(default)]
    after: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Child {
    #[serde(default)]
    kind: String,
    data: Value,
}

#[derive(Debug, Deserialize)]
struct Post {
    #[serde(default)]
    url: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    subreddit: String,
    #[serde(default)]
    is_self: bool,
    #[serde(default)]
    permalink: String,
    #[serde(default)]
    media: Option<Value>,
}

/// Reads `type` and `oembed.url` from a post's `media` object. Anything that
/// is not an object yields `None`; a field of the wrong type is left empty.
fn media_descriptor(media: &Value) -> Option<MediaDescriptor> {
    let obj = media.as_object()?;
    let kind = obj.get("type").and_then(Value::as_str).map(str::to_string);
    let embed_url = obj
        .get("oembed")
        .and_then(|o| o.get("url"))
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string);
    Some(MediaDescriptor { kind, embed_url })
}

fn absolute_permalink(permalink: &str) -> String {
    if permalink.starts_with('/') {
        format!("https://www.reddit.com{permalink}")
    } else {
        permalink.to_string()
    }
}

/// Parse one listing page. Children that are not posts (`t3`) or whose data
/// does not look like a post are skipped with a debug log.
pub fn parse_listing_page(body: &[u8]) -> Result<ListingPage, serde_json::Error> {
    let listing: Listing = serde_json::from_slice(body)?;
    let mut candidates = Vec::with_capacity(listing.data.children.len());

    for child in listing.data.children {
        if child.kind != "t3" {
            tracing::debug!(kind = %child.kind, "skipping non-post listing entry");
            continue;
        }
        let post: Post = match serde_json::from_value(child.data) {
            Ok(p) => p,
            Err(e) => {
                tracing::debug!("skipping malformed post entry: {}", e);
                continue;
            }
        };
        candidates.push(Candidate {
            media: post.media.as_ref().and_then(media_descriptor),
            url: post.url,
            title: post.title,
            collection: post.subreddit,
            is_self: post.is_self,
            permalink: absolute_permalink(&post.permalink),
        });
    }

    Ok(ListingPage {
        candidates,
        after: listing.data.after.filter(|a| !a.is_empty()),
    })
}
