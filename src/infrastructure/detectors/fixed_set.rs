//! Fixed-set change detector
//!
//! Watches an explicit list of files. Fingerprints are compared by position,
//! so membership is stable and only content changes are reported.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::ports::ChangeDetector;
use crate::domain::value_objects::Fingerprint;
use crate::infrastructure::fs::absolutize;

/// Detects changes in a fixed set of files.
#[derive(Debug, Clone)]
pub struct FixedSetDetector {
    files: Vec<PathBuf>,
    last_seen: Vec<Option<Fingerprint>>,
}

impl FixedSetDetector {
    /// Watch `paths` (made absolute, duplicates collapsed).
    pub fn new<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut detector = Self {
            files: Vec::new(),
            last_seen: Vec::new(),
        };
        detector.change_file_set(paths);
        detector
    }

    /// Replace the watched set. The baseline is cleared, so every readable
    /// file is reported on the next call.
    pub fn change_file_set<I, P>(&mut self, paths: I)
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let unique: BTreeSet<PathBuf> = paths
            .into_iter()
            .map(|p| absolutize(p.as_ref()))
            .collect();
        self.files = unique.into_iter().collect();
        self.last_seen = vec![None; self.files.len()];
    }

    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }
}

impl ChangeDetector for FixedSetDetector {
    fn which_files_changed(&mut self) -> Vec<PathBuf> {
        let mut changed = Vec::new();

        for (path, last) in self.files.iter().zip(self.last_seen.iter_mut()) {
            let current = match Fingerprint::of(path) {
                Ok(fp) => Some(fp),
                Err(err) => {
                    debug!(path = %path.display(), error = %err, "cannot stat watched file");
                    None
                }
            };
            if current.is_some() && current != *last {
                changed.push(path.clone());
            }
            *last = current;
        }

        changed
    }

    fn describe(&self) -> String {
        format!("fixed set of {} file(s)", self.files.len())
    }
}
