//! Local File System helpers
//!
//! Atomic writes for result artifacts.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::TddmonResult;

/// Local file system operations.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }

    /// Write `content` to `path` atomically (tempfile in the same directory,
    /// then rename). Parent directories are created as needed.
    pub fn write_atomic(&self, path: &Path, content: &str) -> TddmonResult<()> {
        let parent = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => std::env::current_dir()?,
        };
        std::fs::create_dir_all(&parent)?;

        let mut tmp = NamedTempFile::new_in(&parent)?;
        tmp.write_all(content.as_bytes())?;
        tmp.flush()?;
        tmp.persist(path).map_err(|e| e.error)?;
        Ok(())
    }
}
