//! Character filter for file names built from post titles.

/// Symbols kept besides ASCII letters and digits.
pub const ALLOWED_SYMBOLS: &str = "-_.() []{}";

/// Keeps ASCII letters, ASCII digits and [`ALLOWED_SYMBOLS`]; every other
/// character (control, path separators, all non-ASCII) is dropped.
pub fn filter_filename_chars(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_alphanumeric() || ALLOWED_SYMBOLS.contains(*c))
        .collect()
}
