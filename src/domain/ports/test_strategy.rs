//! Test Strategy Port
//!
//! A strategy locates a set of test-bearing files and executes them through
//! one adapter, aggregating the per-file reports.

use std::path::PathBuf;

use crate::domain::value_objects::TestReport;

/// Locates and runs a batch of test files.
pub trait TestStrategy: Send {
    /// Run the whole batch.
    ///
    /// `changed` is accepted for interface uniformity; implementations
    /// re-run their entire set because test interdependencies make partial
    /// reruns unsound.
    fn run_tests(&self, changed: &[PathBuf]) -> TestReport;

    /// Short label used in events and logs.
    fn describe(&self) -> String;
}
