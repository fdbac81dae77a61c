//! Test Adapter Port
//!
//! An adapter runs the tests of exactly one file under one discovery
//! convention (unit tests, doctests, ...) and reports counts plus a text log.

use std::path::Path;

use crate::domain::value_objects::TestReport;

/// Runs one file's tests.
///
/// Contract: `run` never fails and never panics on behalf of the code under
/// test. Import errors, syntax errors and crashes come back as
/// [`TestReport::error`] with the captured diagnostic as log.
pub trait TestAdapter: Send + Sync {
    /// Stable identifier (`"unittest"`, `"doctest"`).
    fn name(&self) -> &str;

    /// Run the tests declared in `file`, resolving imports against `root`.
    fn run(&self, root: &Path, file: &Path) -> TestReport;
}
