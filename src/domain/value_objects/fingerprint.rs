//! File Fingerprint Value Object
//!
//! A cheap, comparable stand-in for "the content of this file", built from
//! `stat` metadata only. File bytes are never read.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::UNIX_EPOCH;

/// Metadata fingerprint of a single file.
///
/// Two fingerprints are equal iff path, size and modification time (whole
/// seconds) all match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Fingerprint {
    path: PathBuf,
    size: u64,
    modified_secs: i64,
}

impl Fingerprint {
    /// Build a fingerprint from already known parts.
    pub fn new(path: impl Into<PathBuf>, size: u64, modified_secs: i64) -> Self {
        Self {
            path: path.into(),
            size,
            modified_secs,
        }
    }

    /// Stat `path` and fingerprint it.
    ///
    /// Fails with the underlying IO error when the file cannot be stat'd;
    /// callers skip such files instead of aborting a scan.
    pub fn of(path: &Path) -> io::Result<Self> {
        let metadata = fs::metadata(path)?;
        let modified_secs = match metadata.modified() {
            Ok(time) => match time.duration_since(UNIX_EPOCH) {
                Ok(after) => after.as_secs() as i64,
                Err(before) => -(before.duration().as_secs() as i64),
            },
            // Platforms without mtime fall back to size + path only
            Err(_) => 0,
        };
        Ok(Self::new(path, metadata.len(), modified_secs))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn modified_secs(&self) -> i64 {
        self.modified_secs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, SystemTime};
    use tempfile::tempdir;

    #[test]
    fn fingerprint_equal_for_unchanged_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("a.py");
        fs::write(&path, "x = 1\n").unwrap();

        assert_eq!(Fingerprint::of(&path).unwrap(), Fingerprint::of(&path).unwrap());
    }

    #[test]
    fn fingerprint_changes_with_size() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("a.py");
        fs::write(&path, "x = 1\n").unwrap();
        let before = Fingerprint::of(&path).unwrap();

        fs::write(&path, "x = 12345\n").unwrap();
        let after = Fingerprint::of(&path).unwrap();

        assert_ne!(before, after);
        assert_eq!(after.size(), 10);
    }

    #[test]
    fn fingerprint_changes_with_mtime() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("a.py");
        fs::write(&path, "x = 1\n").unwrap();
        let before = Fingerprint::of(&path).unwrap();

        let file = fs::OpenOptions::new().write(true).open(&path).unwrap();
        file.set_modified(SystemTime::now() + Duration::from_secs(5))
            .unwrap();
        let after = Fingerprint::of(&path).unwrap();

        assert_ne!(before, after);
        assert_eq!(before.size(), after.size());
    }

    #[test]
    fn fingerprint_distinguishes_paths() {
        let a = Fingerprint::new("/p/a.py", 3, 100);
        let b = Fingerprint::new("/p/b.py", 3, 100);
        assert_ne!(a, b);
    }

    #[test]
    fn fingerprint_missing_file_is_not_found() {
        let dir = tempdir().unwrap();
        let err = Fingerprint::of(&dir.path().join("gone.py")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
