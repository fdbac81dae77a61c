//! Test Adapters
//!
//! Implementations of the `TestAdapter` port for the Python ecosystem.
//! Each test file runs in its own interpreter process, so a crashing test
//! module cannot take the monitor down with it.

mod doctest;
mod process;
mod python;
mod summary;
mod unittest;

pub use doctest::DoctestAdapter;
pub use process::{run_captured, CapturedOutput};
pub use python::PythonCommand;
pub use summary::parse_unittest_summary;
pub use unittest::UnittestAdapter;

use std::sync::Arc;

use crate::domain::ports::TestAdapter;

/// Names accepted by [`get_adapter`].
pub const ADAPTER_NAMES: &[&str] = &["unittest", "doctest"];

/// Get all available adapters
pub fn all_adapters(python: &PythonCommand) -> Vec<Arc<dyn TestAdapter>> {
    ADAPTER_NAMES
        .iter()
        .filter_map(|name| get_adapter(name, python))
        .collect()
}

/// Get adapter by name
pub fn get_adapter(name: &str, python: &PythonCommand) -> Option<Arc<dyn TestAdapter>> {
    match name.trim().to_ascii_lowercase().as_str() {
        "unittest" | "unit" => Some(Arc::new(UnittestAdapter::new(python.clone()))),
        "doctest" | "doc" => Some(Arc::new(DoctestAdapter::new(python.clone()))),
        _ => None,
    }
}
