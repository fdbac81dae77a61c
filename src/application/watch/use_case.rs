//! Watch Use Case implementation

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::debug;

use crate::application::Monitor;
use crate::domain::policies::{Feedback, Signal};

use super::event::{MonitorEvent, WatchOptions};

/// Sleep granularity while waiting for the next cycle, so Ctrl+C is
/// noticed promptly even with long intervals.
const STOP_POLL: Duration = Duration::from_millis(50);

/// Watch Use Case
///
/// Owns the monitor and the feedback state machine for the lifetime of a
/// watch session. This is the entry point for the default `tddmon` command.
pub struct WatchUseCase {
    monitor: Monitor,
    feedback: Feedback,
    options: WatchOptions,
}

impl WatchUseCase {
    pub fn new(monitor: Monitor, options: WatchOptions) -> Self {
        Self {
            monitor,
            feedback: Feedback::new(),
            options,
        }
    }

    pub fn monitor(&self) -> &Monitor {
        &self.monitor
    }

    /// Start watching (blocking)
    ///
    /// This method blocks until the running flag is set to false.
    /// Use the callback to receive events.
    pub fn start<F>(&mut self, running: Arc<AtomicBool>, on_event: F)
    where
        F: Fn(MonitorEvent),
    {
        on_event(MonitorEvent::WatchStarted {
            project: self.monitor.project_name().to_string(),
            detectors: self.monitor.describe_detectors(),
            strategies: self.monitor.describe_strategies(),
            interval_ms: self.options.interval.as_millis() as u64,
        });

        while running.load(Ordering::SeqCst) {
            let cycle_start = Instant::now();
            self.cycle(&on_event);
            wait_until(cycle_start + self.options.interval, &running);
        }

        on_event(MonitorEvent::Shutdown);
    }

    /// One polling cycle: detect, maybe run, then advance the badge.
    pub fn cycle<F>(&mut self, on_event: &F)
    where
        F: Fn(MonitorEvent),
    {
        let changed = self.monitor.which_files_changed();
        if !changed.is_empty() {
            debug!(count = changed.len(), "changes detected");
            on_event(MonitorEvent::files_changed(&changed));
            on_event(MonitorEvent::TestRunStarted);
            self.monitor.run_tests(&changed);
            self.emit_run_complete(on_event);
        }

        let counts = self.monitor.counts();
        let appearance = self.feedback.update(&counts);
        on_event(MonitorEvent::status(&counts, appearance));
    }

    fn emit_run_complete<F>(&self, on_event: &F)
    where
        F: Fn(MonitorEvent),
    {
        let counts = self.monitor.counts();
        let duration_ms = self
            .monitor
            .last_testrun_time()
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);

        on_event(MonitorEvent::TestRunComplete {
            passed: counts.passed,
            run: counts.run,
            errors: counts.errors,
            duration_ms,
            signal: Signal::classify(&counts),
            log: self.options.show_log.then(|| self.monitor.report()),
        });

        if counts.is_error() {
            on_event(MonitorEvent::Error {
                message: format!(
                    "{} test file(s) could not be executed; see the log for details",
                    counts.errors
                ),
            });
        }
    }
}

fn wait_until(deadline: Instant, running: &AtomicBool) {
    while running.load(Ordering::SeqCst) {
        let now = Instant::now();
        if now >= deadline {
            return;
        }
        std::thread::sleep((deadline - now).min(STOP_POLL));
    }
}
