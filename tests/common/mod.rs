//! Common test utilities for tddmon integration tests.
//!
//! - `TestProject`: isolated project directory with helpers to write files
//! - `tddmon()`: binary invocation with config and env isolation
//! - `find_python()`: interpreter probe for tests that need Python

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

pub struct TestProject {
    dir: TempDir,
    config_home: TempDir,
}

impl TestProject {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
            config_home: tempfile::tempdir().unwrap(),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn path(&self, rel: &str) -> PathBuf {
        self.dir.path().join(rel)
    }

    pub fn write(&self, rel: &str, content: &str) -> PathBuf {
        let path = self.path(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    pub fn read(&self, rel: &str) -> String {
        fs::read_to_string(self.path(rel)).unwrap()
    }

    /// The binary, rooted at this project, with user config and `TDDMON_*`
    /// variables isolated from the host.
    pub fn tddmon(&self) -> Command {
        self.tddmon_at(self.root())
    }

    /// Same isolation as [`TestProject::tddmon`], rooted elsewhere.
    pub fn tddmon_at(&self, root: &Path) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_tddmon"));
        cmd.arg("--root")
            .arg(root)
            .env("TDDMON_CONFIG_HOME", self.config_home.path())
            .env_remove("TDDMON_PYTHON")
            .env_remove("TDDMON_WORKERS")
            .env_remove("TDDMON_INTERVAL_MS")
            .env_remove("TDDMON_TIMEOUT_SECS")
            .env_remove("TDDMON_COLOR")
            .env_remove("RUST_LOG")
            .env("NO_COLOR", "1");
        cmd
    }
}

/// First interpreter on PATH, or `None` to skip interpreter-backed tests.
pub fn find_python() -> Option<String> {
    ["python3", "python"]
        .iter()
        .find(|candidate| {
            Command::new(candidate)
                .arg("--version")
                .output()
                .map(|o| o.status.success())
                .unwrap_or(false)
        })
        .map(|s| s.to_string())
}

/// A module with one passing and one failing unit test plus one doctest.
pub const CALC_TESTS: &str = r#"import unittest


def add(a, b):
    """
    >>> add(1, 2)
    3
    """
    return a + b


class CalcTest(unittest.TestCase):
    def test_add(self):
        self.assertEqual(add(2, 2), 4)

    def test_broken(self):
        self.assertEqual(add(2, 2), 5)
"#;
