//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod change_detector;
pub mod test_adapter;
pub mod test_strategy;

pub use change_detector::ChangeDetector;
pub use test_adapter::TestAdapter;
pub use test_strategy::TestStrategy;
