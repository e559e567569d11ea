//! Progress line formatting.

/// Names longer than this are cut in progress output.
pub const PROGRESS_NAME_WIDTH: usize = 80;

/// Cuts `name` to `width` characters and appends `...` when it is longer.
pub fn elide(name: &str, width: usize) -> String {
    if name.chars().count() > width {
        let mut cut: String = name.chars().take(width).collect();
        cut.push_str("...");
        cut
    } else {
        name.to_string()
    }
}

/// `"<percent>% | Downloaded <name>"` with one decimal place.
pub fn progress_line(fraction: f64, name: &str) -> String {
    format!(
        "{:.1}% | Downloaded {}",
        fraction * 100.0,
        elide(name, PROGRESS_NAME_WIDTH)
    )
}
