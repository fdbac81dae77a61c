//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod file_pattern;
mod fingerprint;
mod module_name;
mod test_counts;

pub use file_pattern::{glob_to_regex, FilePattern};
pub use fingerprint::Fingerprint;
pub use module_name::file_name_to_module;
pub use test_counts::{TestCounts, TestReport};
