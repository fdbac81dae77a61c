//! Recursive test discovery
//!
//! Walks the project from its root, descending only into package
//! directories (those holding the package marker file), and runs every file
//! whose name fully matches the test pattern.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::debug;

use super::run_batch;
use crate::domain::ports::{TestAdapter, TestStrategy};
use crate::domain::value_objects::{FilePattern, TestReport};
use crate::error::TddmonResult;
use crate::infrastructure::fs::{absolutize, walk_files, WalkOptions};
use crate::infrastructure::pool::WorkerPool;

pub const DEFAULT_TEST_PATTERN: &str = r"test_.*\.py";
pub const DEFAULT_PACKAGE_MARKER: &str = "__init__.py";

pub struct DiscoveryStrategy {
    root: PathBuf,
    pattern: FilePattern,
    package_marker: String,
    walk: WalkOptions,
    adapter: Arc<dyn TestAdapter>,
    pool: WorkerPool,
}

impl DiscoveryStrategy {
    /// Discovery with the default `test_*.py` pattern.
    pub fn new(root: &Path, adapter: Arc<dyn TestAdapter>) -> TddmonResult<Self> {
        Self::with_pattern(root, DEFAULT_TEST_PATTERN, adapter)
    }

    pub fn with_pattern(root: &Path, pattern: &str, adapter: Arc<dyn TestAdapter>) -> TddmonResult<Self> {
        Ok(Self {
            root: absolutize(root),
            pattern: FilePattern::regex(pattern)?,
            package_marker: DEFAULT_PACKAGE_MARKER.to_string(),
            walk: WalkOptions::default(),
            adapter,
            pool: WorkerPool::default(),
        })
    }

    pub fn with_package_marker(mut self, marker: impl Into<String>) -> Self {
        self.package_marker = marker.into();
        self
    }

    pub fn with_walk_options(mut self, walk: WalkOptions) -> Self {
        self.walk = walk;
        self
    }

    pub fn with_pool(mut self, pool: WorkerPool) -> Self {
        self.pool = pool;
        self
    }

    /// Test files currently present, sorted.
    pub fn find_tests(&self) -> Vec<PathBuf> {
        let marker = self.package_marker.clone();
        walk_files(
            &self.root,
            self.walk,
            move |dir| dir.join(&marker).is_file(),
            |name| self.pattern.is_match(name),
        )
    }
}

impl TestStrategy for DiscoveryStrategy {
    fn run_tests(&self, _changed: &[PathBuf]) -> TestReport {
        let files = self.find_tests();
        debug!(
            adapter = self.adapter.name(),
            root = %self.root.display(),
            files = files.len(),
            "running discovered tests"
        );
        run_batch(&self.pool, self.adapter.as_ref(), &self.root, files)
    }

    fn describe(&self) -> String {
        format!("{} for {} under {}", self.adapter.name(), self.pattern, self.root.display())
    }
}
