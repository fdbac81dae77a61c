//! Configuration module for tddmon
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (TDDMON_*)
//! 3. Project config (`tddmon.toml` in the project root)
//! 4. User config (`<config dir>/tddmon/config.toml`)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod suggest;
mod types;

pub use loader::{config_candidates, ConfigWarning, PROJECT_CONFIG_FILE};
pub use types::{ColorMode, Config, OutputConfig, TestsConfig, WatchConfig};
