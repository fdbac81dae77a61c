//! Test Strategies
//!
//! Implementations of the `TestStrategy` port. Both strategies hand their
//! file list to [`run_batch`], which fans it out over the worker pool and
//! folds the per-file reports into one.

mod discovery;
mod fixed_set;

pub use discovery::{DiscoveryStrategy, DEFAULT_PACKAGE_MARKER, DEFAULT_TEST_PATTERN};
pub use fixed_set::FixedSetStrategy;

use std::path::{Path, PathBuf};

use crate::domain::ports::TestAdapter;
use crate::domain::value_objects::{TestCounts, TestReport};
use crate::infrastructure::pool::WorkerPool;

/// Run `files` through `adapter` on `pool` and aggregate.
///
/// Per-file logs are labeled `file:<path>` in submission order and joined
/// with newlines. A task that panics counts as one execution
/// error for its file; the rest of the batch is unaffected.
pub fn run_batch(
    pool: &WorkerPool,
    adapter: &dyn TestAdapter,
    root: &Path,
    files: Vec<PathBuf>,
) -> TestReport {
    let mut counts = TestCounts::default();
    let mut logs = Vec::with_capacity(files.len());

    for (file, outcome) in pool.map(files, |file| adapter.run(root, file)) {
        let report = outcome.unwrap_or_else(|failure| TestReport::error(failure.to_string()));
        counts += report.counts;
        logs.push(format!("file:{}\n{}", file.display(), report.log));
    }

    TestReport {
        counts,
        log: logs.join("\n"),
    }
}

#[cfg(test)]
pub(crate) mod fakes {
    //! In-process adapters for strategy and monitor tests.

    use std::path::Path;

    use crate::domain::ports::TestAdapter;
    use crate::domain::value_objects::TestReport;

    /// Decides the outcome from the file name:
    /// `*_pass*` -> 2/2, `*_fail*` -> 1/2, `*_error*` -> execution error,
    /// `*_panic*` -> panics, anything else -> 0/0.
    #[derive(Debug, Default)]
    pub struct ByNameAdapter;

    impl TestAdapter for ByNameAdapter {
        fn name(&self) -> &str {
            "by-name"
        }

        fn run(&self, _root: &Path, file: &Path) -> TestReport {
            let name = file
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            if name.contains("_pass") {
                TestReport::new(2, 2, "ok")
            } else if name.contains("_fail") {
                TestReport::new(1, 2, "one failure")
            } else if name.contains("_error") {
                TestReport::error("ImportError: boom")
            } else if name.contains("_panic") {
                panic!("adapter blew up on {}", name);
            } else {
                TestReport::new(0, 0, "nothing")
            }
        }
    }
}
