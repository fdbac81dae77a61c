//! Batch Use Case (`--log-and-exit`)
//!
//! Runs one unconditional cycle and records the aggregate counts in a small
//! key=value artifact that scripts and CI can read back.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::application::watch::MonitorEvent;
use crate::application::Monitor;
use crate::domain::policies::Signal;
use crate::domain::value_objects::TestCounts;
use crate::error::TddmonResult;
use crate::infrastructure::fs::LocalFs;

/// Artifact body: `green=<passed>\ntotal=<run>\n`.
pub fn render_artifact(counts: &TestCounts) -> String {
    format!("green={}\ntotal={}\n", counts.passed, counts.run)
}

/// Result of a batch run
#[derive(Debug, Clone)]
pub struct BatchOutcome {
    pub counts: TestCounts,
    pub artifact: PathBuf,
    pub report: String,
}

impl BatchOutcome {
    pub fn signal(&self) -> Signal {
        Signal::classify(&self.counts)
    }
}

pub struct BatchUseCase {
    monitor: Monitor,
    artifact: PathBuf,
    fs: LocalFs,
}

impl BatchUseCase {
    pub fn new(monitor: Monitor, artifact: impl AsRef<Path>) -> Self {
        Self {
            monitor,
            artifact: artifact.as_ref().to_path_buf(),
            fs: LocalFs::new(),
        }
    }

    /// Run every strategy once and write the artifact.
    ///
    /// Tests run even if no detector reports a change, so an empty project
    /// still produces `green=0\ntotal=0\n`.
    pub fn run<F>(mut self, on_event: F) -> TddmonResult<BatchOutcome>
    where
        F: Fn(MonitorEvent),
    {
        let changed = self.monitor.which_files_changed();
        if !changed.is_empty() {
            on_event(MonitorEvent::files_changed(&changed));
        }
        on_event(MonitorEvent::TestRunStarted);
        self.monitor.run_tests(&changed);

        let counts = self.monitor.counts();
        on_event(MonitorEvent::TestRunComplete {
            passed: counts.passed,
            run: counts.run,
            errors: counts.errors,
            duration_ms: self
                .monitor
                .last_testrun_time()
                .map(|d| d.as_millis() as u64)
                .unwrap_or(0),
            signal: Signal::classify(&counts),
            log: None,
        });

        self.fs.write_atomic(&self.artifact, &render_artifact(&counts))?;
        info!(artifact = %self.artifact.display(), "wrote results");

        Ok(BatchOutcome {
            counts,
            artifact: self.artifact,
            report: self.monitor.report(),
        })
    }
}
