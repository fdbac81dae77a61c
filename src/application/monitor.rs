//! Monitor
//!
//! The orchestrator: owns a list of change detectors and a list of test
//! strategies. Each tick unions the detectors' answers and, when anything
//! changed, re-runs every strategy over the whole project and replaces the
//! aggregate counts, logs and duration.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::config::Config;
use crate::domain::ports::{ChangeDetector, TestAdapter, TestStrategy};
use crate::domain::value_objects::TestCounts;
use crate::error::{TddmonError, TddmonResult};
use crate::infrastructure::adapters::{get_adapter, ADAPTER_NAMES};
use crate::infrastructure::detectors::{FixedSetDetector, RecursiveDetector};
use crate::infrastructure::fs::{absolutize, WalkOptions};
use crate::infrastructure::strategies::{DiscoveryStrategy, FixedSetStrategy};

/// Joins per-strategy logs in [`Monitor::log_text`].
pub const LOG_DELIMITER: &str = "===Log delimiter===\n";

pub struct Monitor {
    project_name: String,
    detectors: Vec<Box<dyn ChangeDetector>>,
    strategies: Vec<Box<dyn TestStrategy>>,
    counts: TestCounts,
    last_duration: Option<Duration>,
    logs: Vec<String>,
}

impl Monitor {
    pub fn new(
        project_name: impl Into<String>,
        detectors: Vec<Box<dyn ChangeDetector>>,
        strategies: Vec<Box<dyn TestStrategy>>,
    ) -> Self {
        Self {
            project_name: project_name.into(),
            detectors,
            strategies,
            counts: TestCounts::default(),
            last_duration: None,
            logs: Vec::new(),
        }
    }

    /// Standard assembly for a project directory.
    ///
    /// With `files`, one fixed-set detector plus one fixed-set strategy per
    /// configured adapter. Without, a recursive glob detector and one
    /// discovery strategy per adapter. Relative `files` resolve against
    /// `root`.
    pub fn for_project(root: &Path, files: &[PathBuf], config: &Config) -> TddmonResult<Self> {
        if !root.is_dir() {
            return Err(TddmonError::DirectoryNotFound {
                path: root.to_path_buf(),
            });
        }
        let root = absolutize(root);
        let adapters = resolve_adapters(config)?;
        let pool = config.worker_pool();
        let walk = WalkOptions::default().with_ignore_files(config.watch.honor_ignore_files);

        let mut detectors: Vec<Box<dyn ChangeDetector>> = Vec::new();
        let mut strategies: Vec<Box<dyn TestStrategy>> = Vec::new();

        if files.is_empty() {
            detectors.push(Box::new(
                RecursiveDetector::glob(&root, &config.watch.pattern)?.with_walk_options(walk),
            ));
            for adapter in adapters {
                strategies.push(Box::new(
                    DiscoveryStrategy::with_pattern(&root, &config.tests.pattern, adapter)?
                        .with_package_marker(config.tests.package_marker.as_str())
                        .with_walk_options(walk)
                        .with_pool(pool),
                ));
            }
        } else {
            let files: Vec<PathBuf> = files.iter().map(|f| root.join(f)).collect();
            detectors.push(Box::new(FixedSetDetector::new(&files)));
            for adapter in adapters {
                strategies.push(Box::new(
                    FixedSetStrategy::new(&root, &files, adapter).with_pool(pool),
                ));
            }
        }

        Ok(Self::new(project_name_of(&root), detectors, strategies))
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    /// Union of every detector's changes, deduplicated and sorted.
    pub fn which_files_changed(&mut self) -> Vec<PathBuf> {
        let changed: BTreeSet<PathBuf> = self
            .detectors
            .iter_mut()
            .flat_map(|detector| detector.which_files_changed())
            .collect();
        changed.into_iter().collect()
    }

    /// Run every strategy in registration order, replacing the aggregate
    /// state with this run's results.
    pub fn run_tests(&mut self, changed: &[PathBuf]) {
        let started = Instant::now();
        self.counts = TestCounts::default();
        self.logs.clear();

        for strategy in &self.strategies {
            debug!(strategy = %strategy.describe(), "running test strategy");
            let report = strategy.run_tests(changed);
            self.counts += report.counts;
            self.logs.push(report.log);
        }

        let elapsed = started.elapsed();
        self.last_duration = Some(elapsed);
        info!(
            passed = self.counts.passed,
            run = self.counts.run,
            errors = self.counts.errors,
            elapsed_ms = elapsed.as_millis() as u64,
            "test run complete"
        );
    }

    /// One polling cycle. Returns the changed paths when tests were run;
    /// `None` leaves the previous results in place.
    pub fn tick(&mut self) -> Option<Vec<PathBuf>> {
        let changed = self.which_files_changed();
        if changed.is_empty() {
            return None;
        }
        self.run_tests(&changed);
        Some(changed)
    }

    pub fn counts(&self) -> TestCounts {
        self.counts
    }

    pub fn total_tests_run(&self) -> usize {
        self.counts.run
    }

    pub fn total_tests_passed(&self) -> usize {
        self.counts.passed
    }

    /// Wall-clock duration of the last run; `None` before the first one.
    pub fn last_testrun_time(&self) -> Option<Duration> {
        self.last_duration
    }

    /// Strategy logs joined by [`LOG_DELIMITER`].
    pub fn log_text(&self) -> String {
        self.logs.join(LOG_DELIMITER)
    }

    /// Human-readable log view: project, duration, then the logs.
    pub fn report(&self) -> String {
        let time = self
            .last_duration
            .map(|d| format!("{:.3}s", d.as_secs_f64()))
            .unwrap_or_else(|| "never".to_string());
        format!(
            "monitoring: {}\ntime: {}\n{}",
            self.project_name,
            time,
            self.log_text()
        )
    }

    pub fn describe_detectors(&self) -> Vec<String> {
        self.detectors.iter().map(|d| d.describe()).collect()
    }

    pub fn describe_strategies(&self) -> Vec<String> {
        self.strategies.iter().map(|s| s.describe()).collect()
    }
}

fn resolve_adapters(config: &Config) -> TddmonResult<Vec<Arc<dyn TestAdapter>>> {
    let python = config.python_command();
    config
        .tests
        .adapters
        .iter()
        .map(|name| {
            get_adapter(name, &python).ok_or_else(|| TddmonError::UnknownAdapter {
                name: name.clone(),
                expected: ADAPTER_NAMES.join(", "),
            })
        })
        .collect()
}

fn project_name_of(root: &Path) -> String {
    root.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| root.display().to_string())
}
