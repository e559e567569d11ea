//! Content classification of listed posts.
//!
//! A post is a picture or a short loop when its (possibly rewritten) URL path
//! ends in a known extension, and a hosted video when its media descriptor
//! names a supported platform. Precedence is fixed:
//! picture > short loop > hosted video > unknown.
//!
//! Extensions match case-insensitively (`.JPG` is a picture); the platform
//! marker does not.

mod rewrite;

pub use rewrite::rewrite_short_video_url;

use crate::candidate::Candidate;
use crate::naming::extension_from_url;

pub const PICTURE_EXTENSIONS: &[&str] = &[".png", ".jpg", ".jpeg", ".tiff", ".bmp", ".bpg"];
pub const SHORT_LOOP_EXTENSIONS: &[&str] = &[".gif", ".gifv"];

/// Case-sensitive marker looked for in the media descriptor's type tag.
pub const VIDEO_PLATFORM_MARKER: &str = "youtube";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ContentCategory {
    Picture,
    ShortLoopVideo,
    HostedVideo,
    Unknown,
}

impl ContentCategory {
    /// Categories a user can enable, in prompt order.
    pub const DOWNLOADABLE: [ContentCategory; 3] = [
        ContentCategory::Picture,
        ContentCategory::ShortLoopVideo,
        ContentCategory::HostedVideo,
    ];

    /// Short tag used inside file names; `None` for `Unknown`.
    pub fn tag(self) -> Option<&'static str> {
        match self {
            ContentCategory::Picture => Some("pic"),
            ContentCategory::ShortLoopVideo => Some("gif"),
            ContentCategory::HostedVideo => Some("vid"),
            ContentCategory::Unknown => None,
        }
    }

    /// Plural noun for user messages.
    pub fn plural(self) -> &'static str {
        match self {
            ContentCategory::Picture => "pictures",
            ContentCategory::ShortLoopVideo => "gifs",
            ContentCategory::HostedVideo => "videos",
            ContentCategory::Unknown => "unknown posts",
        }
    }
}

/// Category plus the URL that should actually be fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub category: ContentCategory,
    pub url: String,
}

impl Classification {
    fn new(category: ContentCategory, url: String) -> Self {
        Self { category, url }
    }
}

/// Classifies a candidate. Never fails: missing or partial media metadata
/// degrades to `Unknown`.
pub fn classify(candidate: &Candidate) -> Classification {
    if candidate.is_self {
        return Classification::new(ContentCategory::Unknown, candidate.url.clone());
    }

    let url = rewrite_short_video_url(&candidate.url).unwrap_or_else(|| candidate.url.clone());
    let extension = extension_from_url(&url).to_ascii_lowercase();

    if PICTURE_EXTENSIONS.contains(&extension.as_str()) {
        return Classification::new(ContentCategory::Picture, url);
    }
    if SHORT_LOOP_EXTENSIONS.contains(&extension.as_str()) {
        return Classification::new(ContentCategory::ShortLoopVideo, url);
    }

    let hosted = candidate
        .media
        .as_ref()
        .and_then(|media| media.kind.as_deref())
        .is_some_and(|kind| kind.contains(VIDEO_PLATFORM_MARKER));
    if hosted {
        return Classification::new(ContentCategory::HostedVideo, url);
    }

    Classification::new(ContentCategory::Unknown, url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::candidate::MediaDescriptor;

    fn youtube_media() -> MediaDescriptor {
        MediaDescriptor {
            kind: Some("youtube.com".to_string()),
            embed_url: None,
        }
    }

    #[test]
    fn picture_extensions() {
        for url in [
            "https://i.redd.it/a.png",
            "https://i.imgur.com/b.jpg",
            "https://i.imgur.com/c.JPEG",
            "https://example.com/d.tiff?x=1",
            "https://example.com/e.bmp",
            "https://example.com/f.bpg",
        ] {
            let c = classify(&Candidate::link(url, "t", "s"));
            assert_eq!(c.category, ContentCategory::Picture, "{url}");
            assert_eq!(c.url, url);
        }
    }

    #[test]
    fn short_loop_extensions() {
        for url in ["https://i.imgur.com/a.gif", "https://i.imgur.com/b.gifv"] {
            let c = classify(&Candidate::link(url, "t", "s"));
            assert_eq!(c.category, ContentCategory::ShortLoopVideo, "{url}");
        }
    }

    #[test]
    fn extension_match_ignores_case() {
        let pic = classify(&Candidate::link("https://i.imgur.com/a.JPG", "t", "s"));
        assert_eq!(pic.category, ContentCategory::Picture);
        let gif = classify(&Candidate::link("https://i.imgur.com/b.GifV", "t", "s"));
        assert_eq!(gif.category, ContentCategory::ShortLoopVideo);
    }

    #[test]
    fn gif_wins_over_video_media() {
        let candidate =
            Candidate::link("https://i.imgur.com/a.gif", "t", "s").with_media(youtube_media());
        assert_eq!(classify(&candidate).category, ContentCategory::ShortLoopVideo);
    }

    #[test]
    fn picture_wins_over_video_media() {
        let candidate =
            Candidate::link("https://i.imgur.com/a.jpg", "t", "s").with_media(youtube_media());
        assert_eq!(classify(&candidate).category, ContentCategory::Picture);
    }

    #[test]
    fn self_post_is_unknown() {
        let candidate = Candidate::link("https://i.imgur.com/a.jpg", "t", "s")
            .with_media(youtube_media())
            .self_post();
        assert_eq!(classify(&candidate).category, ContentCategory::Unknown);
    }

    #[test]
    fn gfycat_link_is_rewritten_to_gif() {
        let c = classify(&Candidate::link("http://gfycat.com/abc", "t", "s"));
        assert_eq!(c.category, ContentCategory::ShortLoopVideo);
        assert_eq!(c.url, "http://giant.gfycat.com/abc.gif");
    }

    #[test]
    fn hosted_video_from_media_type() {
        let c = classify(
            &Candidate::link("https://www.youtube.com/watch?v=abc", "t", "s")
                .with_media(youtube_media()),
        );
        assert_eq!(c.category, ContentCategory::HostedVideo);
        assert_eq!(c.url, "https://www.youtube.com/watch?v=abc");
    }

    #[test]
    fn video_marker_is_case_sensitive() {
        let media = MediaDescriptor {
            kind: Some("YouTube".to_string()),
            embed_url: None,
        };
        let c = classify(&Candidate::link("https://youtu.be/abc", "t", "s").with_media(media));
        assert_eq!(c.category, ContentCategory::Unknown);
    }

    #[test]
    fn missing_or_partial_media_is_unknown() {
        let bare = Candidate::link("https://v.redd.it/xyz", "t", "s");
        assert_eq!(classify(&bare).category, ContentCategory::Unknown);

        let no_kind = bare.clone().with_media(MediaDescriptor {
            kind: None,
            embed_url: Some("https://www.youtube.com/watch?v=1".to_string()),
        });
        assert_eq!(classify(&no_kind).category, ContentCategory::Unknown);
    }

    #[test]
    fn tags_and_plurals() {
        assert_eq!(ContentCategory::Picture.tag(), Some("pic"));
        assert_eq!(ContentCategory::ShortLoopVideo.tag(), Some("gif"));
        assert_eq!(ContentCategory::HostedVideo.tag(), Some("vid"));
        assert_eq!(ContentCategory::Unknown.tag(), None);
        assert_eq!(ContentCategory::HostedVideo.plural(), "videos");
    }
}
