//! `unittest` adapter
//!
//! Imports the file's module and runs every `TestCase` it declares. The
//! import happens before the runner starts, so an import or syntax error
//! surfaces as a traceback without a summary, i.e. an execution error.

use std::path::Path;

use super::python::PythonCommand;
use super::summary::parse_unittest_summary;
use crate::domain::ports::TestAdapter;
use crate::domain::value_objects::TestReport;

const DRIVER: &str = r#"
import sys, unittest
name = sys.argv[1]
__import__(name)
suite = unittest.TestLoader().loadTestsFromName(name)
unittest.TextTestRunner(stream=sys.stderr, verbosity=1).run(suite)
"#;

/// Runs native unit tests declared in a file.
#[derive(Debug, Clone, Default)]
pub struct UnittestAdapter {
    python: PythonCommand,
}

impl UnittestAdapter {
    pub fn new(python: PythonCommand) -> Self {
        Self { python }
    }
}

impl TestAdapter for UnittestAdapter {
    fn name(&self) -> &str {
        "unittest"
    }

    fn run(&self, root: &Path, file: &Path) -> TestReport {
        let captured = match self.python.run_driver(DRIVER, root, file) {
            Ok(ran) => ran,
            Err(report) => return report,
        };

        match parse_unittest_summary(&captured.stderr) {
            Some(counts) => TestReport {
                counts,
                log: captured.combined(),
            },
            None => TestReport::error(captured.combined()),
        }
    }
}
