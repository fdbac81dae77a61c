//! Monitor event types and watch options

use std::path::PathBuf;
use std::time::Duration;

use crate::domain::policies::{Appearance, Signal};
use crate::domain::value_objects::TestCounts;

/// Default polling period
pub const DEFAULT_INTERVAL_MS: u64 = 750;

/// Watch options
#[derive(Debug, Clone)]
pub struct WatchOptions {
    /// Time between polling cycles
    pub interval: Duration,
    /// Attach the full log view to `test_run_complete`
    pub show_log: bool,
}

impl Default for WatchOptions {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(DEFAULT_INTERVAL_MS),
            show_log: false,
        }
    }
}

impl WatchOptions {
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn with_show_log(mut self, show_log: bool) -> Self {
        self.show_log = show_log;
        self
    }
}

/// Monitor event types for NDJSON output
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum MonitorEvent {
    /// Monitoring started
    WatchStarted {
        project: String,
        detectors: Vec<String>,
        strategies: Vec<String>,
        interval_ms: u64,
    },
    /// Detectors reported changes
    FilesChanged { paths: Vec<String> },
    /// Test strategies are about to run
    TestRunStarted,
    /// Test strategies finished
    TestRunComplete {
        passed: usize,
        run: usize,
        errors: usize,
        duration_ms: u64,
        signal: Signal,
        #[serde(skip_serializing_if = "Option::is_none")]
        log: Option<String>,
    },
    /// Badge state for this cycle (emitted every cycle)
    Status {
        passed: usize,
        run: usize,
        signal: Signal,
        lit: bool,
        rgb: String,
    },
    /// Error occurred
    Error { message: String },
    /// Monitoring stopped
    Shutdown,
}

impl MonitorEvent {
    pub fn files_changed(paths: &[PathBuf]) -> Self {
        MonitorEvent::FilesChanged {
            paths: paths.iter().map(|p| p.display().to_string()).collect(),
        }
    }

    pub fn status(counts: &TestCounts, appearance: Appearance) -> Self {
        MonitorEvent::Status {
            passed: counts.passed,
            run: counts.run,
            signal: appearance.signal,
            lit: appearance.lit,
            rgb: appearance.rgb().to_string(),
        }
    }

    /// Convert to JSON string with a `"command"` field included
    pub fn to_json(&self, command: &str) -> String {
        let mut value =
            serde_json::to_value(self).unwrap_or_else(|_| serde_json::json!({"event": "error"}));
        if let Some(obj) = value.as_object_mut() {
            obj.insert("command".to_string(), serde_json::json!(command));
        }
        serde_json::to_string(&value).unwrap_or_else(|_| "{}".to_string())
    }
}
