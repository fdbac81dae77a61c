//! Python interpreter invocation shared by the adapters
//!
//! Every run gets the project root as working directory and at the front of
//! `PYTHONPATH`; nothing relies on the monitor's own working directory.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Duration;

use tracing::debug;

use super::process::{run_captured, CapturedOutput};
use crate::domain::value_objects::{file_name_to_module, TestReport};

/// How to launch the interpreter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PythonCommand {
    pub interpreter: PathBuf,
    /// Kill a test file's process after this long. `None` waits forever.
    pub timeout: Option<Duration>,
}

impl Default for PythonCommand {
    fn default() -> Self {
        Self {
            interpreter: PathBuf::from("python"),
            timeout: None,
        }
    }
}

impl PythonCommand {
    pub fn new(interpreter: impl Into<PathBuf>) -> Self {
        Self {
            interpreter: interpreter.into(),
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Run `driver` (a `-c` script) with the module name of `file` as its
    /// only argument.
    ///
    /// Spawn failures and timeouts come back as ready-made error reports.
    pub(crate) fn run_driver(
        &self,
        driver: &str,
        root: &Path,
        file: &Path,
    ) -> Result<CapturedOutput, TestReport> {
        let module = module_for(root, file);
        let mut command = Command::new(&self.interpreter);
        command
            .arg("-c")
            .arg(driver)
            .arg(&module)
            .current_dir(root)
            .env("PYTHONPATH", python_path(root))
            .env("PYTHONDONTWRITEBYTECODE", "1")
            .env("PYTHONIOENCODING", "utf-8");

        debug!(module = %module, file = %file.display(), "running python driver");

        let captured = run_captured(&mut command, self.timeout).map_err(|err| {
            TestReport::error(format!(
                "failed to start {}: {}\n",
                self.interpreter.display(),
                err
            ))
        })?;

        if captured.timed_out {
            let secs = self.timeout.map(|t| t.as_secs_f64()).unwrap_or_default();
            return Err(TestReport::error(format!(
                "timed out after {:.1}s running {}\n{}",
                secs,
                module,
                captured.combined()
            )));
        }

        Ok(captured)
    }
}

fn module_for(root: &Path, file: &Path) -> String {
    file_name_to_module(&root.to_string_lossy(), &file.to_string_lossy())
}

fn python_path(root: &Path) -> OsString {
    let mut paths = vec![root.to_path_buf()];
    if let Some(existing) = std::env::var_os("PYTHONPATH") {
        paths.extend(std::env::split_paths(&existing));
    }
    std::env::join_paths(paths).unwrap_or_else(|_| root.as_os_str().to_os_string())
}
