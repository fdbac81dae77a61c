//! Test counts and single-run results
//!
//! `TestCounts` carries the error-result marker explicitly: an execution
//! failure is recorded as one run, zero passed, one error. Real outcomes
//! always have `errors == 0`.

use std::fmt;
use std::ops::{Add, AddAssign};

use serde::Serialize;

/// Aggregated pass/run counts.
///
/// Invariant: `passed + errors <= run`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct TestCounts {
    /// Tests that passed
    pub passed: usize,
    /// Tests that ran, including one unit per execution failure
    pub run: usize,
    /// Execution failures (import error, crash, timeout, ...)
    pub errors: usize,
}

impl TestCounts {
    /// Real outcome of a test run.
    pub fn new(passed: usize, run: usize) -> Self {
        Self {
            passed: passed.min(run),
            run,
            errors: 0,
        }
    }

    /// Marker counts for a file whose execution failed outright.
    pub fn execution_error() -> Self {
        Self {
            passed: 0,
            run: 1,
            errors: 1,
        }
    }

    /// True when at least one unit is an execution failure rather than a
    /// real test outcome.
    pub fn is_error(&self) -> bool {
        self.errors > 0
    }

    /// Failed units, execution failures included.
    pub fn failed(&self) -> usize {
        self.run - self.passed
    }

    pub fn all_passed(&self) -> bool {
        self.passed == self.run
    }
}

impl Add for TestCounts {
    type Output = TestCounts;

    fn add(self, rhs: TestCounts) -> TestCounts {
        TestCounts {
            passed: self.passed + rhs.passed,
            run: self.run + rhs.run,
            errors: self.errors + rhs.errors,
        }
    }
}

impl AddAssign for TestCounts {
    fn add_assign(&mut self, rhs: TestCounts) {
        *self = *self + rhs;
    }
}

impl std::iter::Sum for TestCounts {
    fn sum<I: Iterator<Item = TestCounts>>(iter: I) -> TestCounts {
        iter.fold(TestCounts::default(), |acc, c| acc + c)
    }
}

impl fmt::Display for TestCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.errors > 0 {
            write!(f, "{}/{} ({}!)", self.passed, self.run, self.errors)
        } else {
            write!(f, "{}/{}", self.passed, self.run)
        }
    }
}

/// Result of running one file (or one strategy): counts plus text log.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TestReport {
    pub counts: TestCounts,
    pub log: String,
}

impl TestReport {
    pub fn new(passed: usize, run: usize, log: impl Into<String>) -> Self {
        Self {
            counts: TestCounts::new(passed, run),
            log: log.into(),
        }
    }

    /// Execution failed; `log` holds the captured diagnostic.
    pub fn error(log: impl Into<String>) -> Self {
        Self {
            counts: TestCounts::execution_error(),
            log: log.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.counts.is_error()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn execution_error_counts_as_one_failing_unit() {
        let c = TestCounts::execution_error();
        assert_eq!(c.passed, 0);
        assert_eq!(c.run, 1);
        assert!(c.is_error());
        assert_eq!(c.failed(), 1);
    }

    #[test]
    fn sum_keeps_error_marker() {
        let total: TestCounts = vec![
            TestCounts::new(3, 3),
            TestCounts::execution_error(),
            TestCounts::new(2, 4),
        ]
        .into_iter()
        .sum();
        assert_eq!(total.passed, 5);
        assert_eq!(total.run, 8);
        assert_eq!(total.errors, 1);
    }

    #[test]
    fn new_clamps_passed_to_run() {
        assert_eq!(TestCounts::new(7, 5).passed, 5);
    }

    #[test]
    fn display_marks_errors() {
        assert_eq!(TestCounts::new(4, 5).to_string(), "4/5");
        assert_eq!(TestCounts::execution_error().to_string(), "0/1 (1!)");
    }

    #[test]
    fn empty_counts_all_passed() {
        assert!(TestCounts::default().all_passed());
    }
}
