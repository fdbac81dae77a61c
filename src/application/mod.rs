//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (value objects, policies, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `Monitor` - Detect changes, run test strategies, aggregate results
//! - `WatchUseCase` - Poll the monitor until stopped, drive the badge
//! - `BatchUseCase` - One cycle, write the results artifact, exit

pub mod batch;
pub mod monitor;
pub mod watch;

pub use batch::{render_artifact, BatchOutcome, BatchUseCase};
pub use monitor::{Monitor, LOG_DELIMITER};
pub use watch::{MonitorEvent, WatchOptions, WatchUseCase, DEFAULT_INTERVAL_MS};
