//! `doctest` adapter
//!
//! Collects the documentation examples embedded in a file's module. A
//! module without any examples is a successful zero-test run.

use std::path::Path;

use super::python::PythonCommand;
use super::summary::parse_unittest_summary;
use crate::domain::ports::TestAdapter;
use crate::domain::value_objects::TestReport;

const NO_DOCTESTS: &str = "No doctests found in:";

const DRIVER: &str = r#"
import sys, unittest, doctest
name = sys.argv[1]
try:
    suite = doctest.DocTestSuite(name, optionflags=doctest.ELLIPSIS)
except ValueError:
    suite = None
if suite is None or suite.countTestCases() == 0:
    print("No doctests found in:%r" % name)
    sys.exit(0)
unittest.TextTestRunner(stream=sys.stderr, verbosity=1).run(suite)
"#;

/// Runs the doctests embedded in a file.
#[derive(Debug, Clone, Default)]
pub struct DoctestAdapter {
    python: PythonCommand,
}

impl DoctestAdapter {
    pub fn new(python: PythonCommand) -> Self {
        Self { python }
    }
}

impl TestAdapter for DoctestAdapter {
    fn name(&self) -> &str {
        "doctest"
    }

    fn run(&self, root: &Path, file: &Path) -> TestReport {
        let captured = match self.python.run_driver(DRIVER, root, file) {
            Ok(ran) => ran,
            Err(report) => return report,
        };

        if captured.success() && captured.stdout.contains(NO_DOCTESTS) {
            return TestReport::new(0, 0, captured.combined());
        }

        match parse_unittest_summary(&captured.stderr) {
            Some(counts) => TestReport {
                counts,
                log: captured.combined(),
            },
            None => TestReport::error(captured.combined()),
        }
    }
}
