//! File name derivation for downloaded items.
//!
//! Names are built from untrusted post titles: `[<collection> <tag>] <title>`,
//! filtered to a small ASCII set and bounded in length. Filtering drops
//! characters instead of replacing them, so titles written entirely in
//! non-ASCII scripts collapse to little more than the bracketed prefix. Two
//! posts with the same title, collection and tag map to the same name and the
//! later download replaces the earlier one.

mod extension;
mod sanitize;

pub use extension::{extension_from_url, has_extension};
pub use sanitize::{filter_filename_chars, ALLOWED_SYMBOLS};

/// Default maximum name length in bytes, extension included.
pub const DEFAULT_MAX_FILENAME_LEN: usize = 180;

/// Smallest accepted maximum; leaves room for the ellipsis and a short label.
pub const MIN_FILENAME_LEN: usize = 8;

/// Marker placed between a truncated label and the extension.
pub const ELLIPSIS: &str = "...";

/// Derives safe, length-bounded file names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileNamer {
    max_len: usize,
}

impl Default for FileNamer {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_FILENAME_LEN)
    }
}

impl FileNamer {
    /// `max_len` below [`MIN_FILENAME_LEN`] is raised to it.
    pub fn new(max_len: usize) -> Self {
        Self {
            max_len: max_len.max(MIN_FILENAME_LEN),
        }
    }

    pub fn max_len(&self) -> usize {
        self.max_len
    }

    /// Builds `[<collection> <tag>] <title><extension>`, filtered and bounded.
    ///
    /// If the filtered label plus extension is longer than the maximum, the
    /// label is cut to `max - 3 - extension.len()` bytes and `...` is inserted
    /// before the extension.
    ///
    /// # Examples
    ///
    /// - `name("Cute cat!", "aww", "pic", ".jpg")` → `"[aww pic] Cute cat.jpg"`
    pub fn name(&self, title: &str, collection: &str, tag: &str, extension: &str) -> String {
        let label = filter_filename_chars(&format!("[{collection} {tag}] {title}"));
        let extension = self.bounded_extension(extension);

        if label.len() + extension.len() <= self.max_len {
            return label + &extension;
        }

        // Filtered text is ASCII, so any byte index is a char boundary.
        let keep = self.max_len.saturating_sub(ELLIPSIS.len() + extension.len());
        format!("{}{}{}", &label[..keep], ELLIPSIS, extension)
    }

    /// Filtered like the label and capped at `max - 3` bytes.
    fn bounded_extension(&self, extension: &str) -> String {
        let mut ext = filter_filename_chars(extension);
        ext.truncate(self.max_len - ELLIPSIS.len());
        ext
    }
}
