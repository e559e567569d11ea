//! Extension extraction from URL path.

use std::path::Path;

/// Last non-empty path segment of `url`. Falls back to plain string
/// splitting when the URL does not parse.
fn last_segment(url: &str) -> Option<String> {
    match url::Url::parse(url) {
        Ok(parsed) => parsed
            .path_segments()
            .and_then(|segments| segments.filter(|s| !s.is_empty()).last())
            .map(str::to_string),
        Err(_) => url
            .split(['?', '#'])
            .next()
            .and_then(|path| path.rsplit('/').find(|s| !s.is_empty()))
            .map(str::to_string),
    }
}

/// Extension of the URL's last path segment, with leading dot (`".jpg"`),
/// or an empty string. Query and fragment are ignored.
pub fn extension_from_url(url: &str) -> String {
    last_segment(url)
        .and_then(|segment| {
            Path::new(&segment)
                .extension()
                .map(|ext| format!(".{}", ext.to_string_lossy()))
        })
        .unwrap_or_default()
}

/// True if the URL's last path segment carries an extension.
pub fn has_extension(url: &str) -> bool {
    !extension_from_url(url).is_empty()
}
