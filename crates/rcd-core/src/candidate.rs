//! Posts supplied by the listing source.

/// Optional media metadata attached to a post. Each field is independently
/// optional; a descriptor with no `kind` never classifies as hosted video.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MediaDescriptor {
    /// Provider tag, e.g. `youtube.com`.
    pub kind: Option<String>,
    /// Embed/attribution URL to hand to the video extractor instead of the post URL.
    pub embed_url: Option<String>,
}

/// One listed post considered for download. Read-only once produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub url: String,
    pub title: String,
    /// Display name of the subreddit the post belongs to.
    pub collection: String,
    /// Self-text posts are never downloadable.
    pub is_self: bool,
    /// Link to the post itself, used to identify it in failure reports.
    pub permalink: String,
    pub media: Option<MediaDescriptor>,
}

impl Candidate {
    /// Link post without media metadata.
    pub fn link(url: impl Into<String>, title: impl Into<String>, collection: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: title.into(),
            collection: collection.into(),
            is_self: false,
            permalink: String::new(),
            media: None,
        }
    }

    pub fn with_permalink(mut self, permalink: impl Into<String>) -> Self {
        self.permalink = permalink.into();
        self
    }

    pub fn with_media(mut self, media: MediaDescriptor) -> Self {
        self.media = Some(media);
        self
    }

    pub fn self_post(mut self) -> Self {
        self.is_self = true;
        self
    }

    /// Permalink when known, otherwise the post URL.
    pub fn source(&self) -> &str {
        if self.permalink.is_empty() {
            &self.url
        } else {
            &self.permalink
        }
    }
}
