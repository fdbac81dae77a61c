//! Recursive change detector
//!
//! Re-walks the tree on every call and compares (path, fingerprint) pairs
//! as sets. Anything in exactly one of {this call, previous call} is
//! reported, so additions, removals and edits all count as changes.

use std::collections::{BTreeSet, HashSet};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::ports::ChangeDetector;
use crate::domain::value_objects::{FilePattern, Fingerprint};
use crate::error::TddmonResult;
use crate::infrastructure::fs::{absolutize, walk_files, WalkOptions};

/// Detects changes among files under `root` whose name matches a pattern.
#[derive(Debug, Clone)]
pub struct RecursiveDetector {
    root: PathBuf,
    pattern: FilePattern,
    walk: WalkOptions,
    baseline: HashSet<Fingerprint>,
}

impl RecursiveDetector {
    /// Match file names against an anchored regular expression.
    pub fn regex(root: impl AsRef<Path>, pattern: &str) -> TddmonResult<Self> {
        Ok(Self::with_pattern(root, FilePattern::regex(pattern)?))
    }

    /// Match file names against a shell glob such as `*.py`.
    pub fn glob(root: impl AsRef<Path>, pattern: &str) -> TddmonResult<Self> {
        Ok(Self::with_pattern(root, FilePattern::glob(pattern)?))
    }

    pub fn with_pattern(root: impl AsRef<Path>, pattern: FilePattern) -> Self {
        Self {
            root: absolutize(root.as_ref()),
            pattern,
            walk: WalkOptions::default(),
            baseline: HashSet::new(),
        }
    }

    pub fn with_walk_options(mut self, walk: WalkOptions) -> Self {
        self.walk = walk;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn snapshot(&self) -> HashSet<Fingerprint> {
        let pattern = &self.pattern;
        walk_files(&self.root, self.walk, |_| true, |name| pattern.is_match(name))
            .into_iter()
            .filter_map(|path| match Fingerprint::of(&path) {
                Ok(fp) => Some(fp),
                Err(err) => {
                    // Deleted between walk and stat
                    debug!(path = %path.display(), error = %err, "cannot stat file");
                    None
                }
            })
            .collect()
    }
}

impl ChangeDetector for RecursiveDetector {
    fn which_files_changed(&mut self) -> Vec<PathBuf> {
        let current = self.snapshot();

        let changed: BTreeSet<PathBuf> = current
            .symmetric_difference(&self.baseline)
            .map(|fp| fp.path().to_path_buf())
            .collect();

        self.baseline = current;
        changed.into_iter().collect()
    }

    fn describe(&self) -> String {
        format!("{} under {}", self.pattern, self.root.display())
    }
}
