//! tddmon - continuous test monitor for Python projects
//!
//! tddmon polls a project for file changes, re-runs its unit tests and
//! doctests whenever something changes, and condenses the outcome into a
//! single glanceable color signal.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{BatchUseCase, Monitor, MonitorEvent, WatchOptions, WatchUseCase};
pub use config::{ColorMode, Config, ConfigWarning};
pub use domain::policies::{Appearance, Feedback, Signal};
pub use domain::ports::{ChangeDetector, TestAdapter, TestStrategy};
pub use domain::value_objects::{file_name_to_module, FilePattern, Fingerprint, TestCounts, TestReport};
pub use error::{TddmonError, TddmonResult};
pub use infrastructure::{all_adapters, get_adapter, PythonCommand, WorkerPool};
