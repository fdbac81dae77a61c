//! Watch Use Case
//!
//! Polls the monitor on a fixed interval until the running flag is cleared,
//! feeding every cycle through the feedback state machine and reporting
//! progress as [`MonitorEvent`]s.
//!
//! ## Usage
//!
//! ```ignore
//! let mut use_case = WatchUseCase::new(monitor, WatchOptions::default());
//! use_case.start(running, |event| { ... });
//! ```

mod event;
mod use_case;


pub use event::{MonitorEvent, WatchOptions, DEFAULT_INTERVAL_MS};
pub use use_case::WatchUseCase;
