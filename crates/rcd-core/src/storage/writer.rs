//! Sequential writer for a `.part` file with commit-or-remove semantics.

use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Temp file for one item. Removed on drop unless `finalize` succeeded.
pub struct PartFile {
    file: File,
    temp_path: PathBuf,
    written: u64,
    committed: bool,
}

impl PartFile {
    /// Create (truncate) the temp file next to `final_path`.
    pub fn create(final_path: &Path) -> io::Result<Self> {
        let temp_path = super::temp_path(final_path);
        let file = File::create(&temp_path)?;
        Ok(Self {
            file,
            temp_path,
            written: 0,
            committed: false,
        })
    }

    pub fn write_chunk(&mut self, data: &[u8]) -> io::Result<()> {
        self.file.write_all(data)?;
        self.written += data.len() as u64;
        Ok(())
    }

    pub fn bytes_written(&self) -> u64 {
        self.written
    }

    pub fn temp_path(&self) -> &Path {
        &self.temp_path
    }

    /// Flush, sync and rename the temp file to `final_path`. Returns bytes written.
    /// An existing file at `final_path` is replaced.
    pub fn finalize(mut self, final_path: &Path) -> io::Result<u64> {
        self.file.flush()?;
        self.file.sync_all()?;
        std::fs::rename(&self.temp_path, final_path)?;
        self.committed = true;
        Ok(self.written)
    }

    /// Drop the temp file without committing it.
    pub fn discard(self) {}
}

impl Drop for PartFile {
    fn drop(&mut self) {
        if self.committed {
            return;
        }
        match std::fs::remove_file(&self.temp_path) {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => tracing::warn!(
                "could not remove temp file {}: {}",
                self.temp_path.display(),
                e
            ),
        }
    }
}
