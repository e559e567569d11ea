//! Host rewrite for short-video links that serve a player page at the bare URL.

use crate::naming::has_extension;

const SHORT_VIDEO_DOMAIN: &str = "gfycat.com";
const DIRECT_MEDIA_HOST: &str = "giant.gfycat.com";

/// Rewrites `gfycat.com/<id>` (any subdomain except the direct-media one) to
/// `giant.gfycat.com/<id>.gif`. Returns `None` when the URL is not such a
/// link, already has an extension, or has no id segment.
pub fn rewrite_short_video_url(url: &str) -> Option<String> {
    let mut parsed = url::Url::parse(url).ok()?;
    let host = parsed.host_str()?;
    let on_short_video_host =
        host == SHORT_VIDEO_DOMAIN || host.ends_with(&format!(".{SHORT_VIDEO_DOMAIN}"));
    if !on_short_video_host || host == DIRECT_MEDIA_HOST || has_extension(url) {
        return None;
    }

    let id_path = parsed.path().trim_end_matches('/').to_string();
    if id_path.is_empty() {
        return None;
    }

    parsed.set_host(Some(DIRECT_MEDIA_HOST)).ok()?;
    parsed.set_path(&format!("{id_path}.gif"));
    Some(parsed.to_string())
}
