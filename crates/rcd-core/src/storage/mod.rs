//! Disk I/O for downloaded items.
//!
//! Bodies are streamed into `<name>.part` and renamed to `<name>` only once the
//! transfer succeeded, so a failed or interrupted item never leaves a file
//! under its final name.

mod writer;

pub use writer::PartFile;

/// Temporary file suffix used before atomic rename.
pub const TEMP_SUFFIX: &str = ".part";

/// Path for the temp file: appends `.part` to the final path (e.g. `a.jpg` → `a.jpg.part`).
pub fn temp_path(final_path: &std::path::Path) -> std::path::PathBuf {
    let mut o = final_path.as_os_str().to_owned();
    o.push(TEMP_SUFFIX);
    std::path::PathBuf::from(o)
}
