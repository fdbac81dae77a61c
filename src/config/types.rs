//! Configuration type definitions

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::TddmonResult;
use crate::infrastructure::adapters::PythonCommand;
use crate::infrastructure::pool::WorkerPool;

use super::loader::{self, ConfigWarning};

/// Change-detection configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchConfig {
    /// Polling period in milliseconds
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,

    /// Glob for the recursive change detector
    #[serde(default = "default_watch_pattern")]
    pub pattern: String,

    /// Respect `.gitignore`/`.ignore` and skip hidden entries when walking
    #[serde(default)]
    pub honor_ignore_files: bool,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            interval_ms: default_interval_ms(),
            pattern: default_watch_pattern(),
            honor_ignore_files: false,
        }
    }
}

fn default_interval_ms() -> u64 {
    750
}

fn default_watch_pattern() -> String {
    "*.py".to_string()
}

/// Test execution configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestsConfig {
    /// Regex (anchored) selecting test files during discovery
    #[serde(default = "default_test_pattern")]
    pub pattern: String,

    /// File whose presence makes a directory a package
    #[serde(default = "default_package_marker")]
    pub package_marker: String,

    /// Interpreter used by the adapters
    #[serde(default = "default_python")]
    pub python: String,

    /// Adapters to run, in order
    #[serde(default = "default_adapters")]
    pub adapters: Vec<String>,

    /// Worker count; 0 means one per CPU
    #[serde(default)]
    pub workers: usize,

    #[serde(default = "default_true")]
    pub parallel: bool,

    /// Per-file time limit; unset means unbounded
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for TestsConfig {
    fn default() -> Self {
        Self {
            pattern: default_test_pattern(),
            package_marker: default_package_marker(),
            python: default_python(),
            adapters: default_adapters(),
            workers: 0,
            parallel: true,
            timeout_secs: None,
        }
    }
}

fn default_test_pattern() -> String {
    crate::infrastructure::strategies::DEFAULT_TEST_PATTERN.to_string()
}

fn default_package_marker() -> String {
    crate::infrastructure::strategies::DEFAULT_PACKAGE_MARKER.to_string()
}

fn default_python() -> String {
    "python".to_string()
}

fn default_adapters() -> Vec<String> {
    crate::infrastructure::adapters::ADAPTER_NAMES
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_true() -> bool {
    true
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,

    /// Artifact written by `--log-and-exit`, relative to the project root
    #[serde(default = "default_log_file")]
    pub log_file: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::default(),
            unicode: true,
            log_file: default_log_file(),
        }
    }
}

fn default_log_file() -> String {
    "pytddmon.log".to_string()
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Accepted spellings, in declaration order.
    pub const NAMES: &'static [&'static str] = &["auto", "always", "never"];

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "auto" => Some(Self::Auto),
            "always" => Some(Self::Always),
            "never" => Some(Self::Never),
            _ => None,
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub watch: WatchConfig,

    #[serde(default)]
    pub tests: TestsConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> TddmonResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> TddmonResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Project config, then user config, then defaults; env overrides on top.
    pub fn discover(project_root: &Path) -> TddmonResult<(Self, Vec<ConfigWarning>)> {
        loader::discover(project_root)
    }



    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.watch.interval_ms.max(1))
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.tests.timeout_secs.map(Duration::from_secs)
    }

    pub fn python_command(&self) -> PythonCommand {
        PythonCommand::new(&self.tests.python).with_timeout(self.timeout())
    }

    pub fn worker_pool(&self) -> WorkerPool {
        match (self.tests.parallel, self.tests.workers) {
            (false, _) => WorkerPool::sequential(),
            (true, 0) => WorkerPool::per_cpu(),
            (true, n) => WorkerPool::new(n),
        }
    }
}
