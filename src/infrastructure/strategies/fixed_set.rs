//! Run a fixed list of files through one adapter.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::debug;

use super::run_batch;
use crate::domain::ports::{TestAdapter, TestStrategy};
use crate::domain::value_objects::TestReport;
use crate::infrastructure::fs::absolutize;
use crate::infrastructure::pool::WorkerPool;

/// Runs every configured file on each invocation.
pub struct FixedSetStrategy {
    root: PathBuf,
    files: Vec<PathBuf>,
    adapter: Arc<dyn TestAdapter>,
    pool: WorkerPool,
}

impl FixedSetStrategy {
    pub fn new<I, P>(root: &Path, files: I, adapter: Arc<dyn TestAdapter>) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        Self {
            root: absolutize(root),
            files: files.into_iter().map(|p| absolutize(p.as_ref())).collect(),
            adapter,
            pool: WorkerPool::default(),
        }
    }

    pub fn with_pool(mut self, pool: WorkerPool) -> Self {
        self.pool = pool;
        self
    }

    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }
}

impl TestStrategy for FixedSetStrategy {
    fn run_tests(&self, _changed: &[PathBuf]) -> TestReport {
        debug!(
            adapter = self.adapter.name(),
            files = self.files.len(),
            workers = self.pool.workers(),
            "running fixed test set"
        );
        run_batch(&self.pool, self.adapter.as_ref(), &self.root, self.files.clone())
    }

    fn describe(&self) -> String {
        format!("{} over {} file(s)", self.adapter.name(), self.files.len())
    }
}
