//! Change Detectors
//!
//! Implementations of the `ChangeDetector` port.

mod fixed_set;
mod recursive;

pub use fixed_set::FixedSetDetector;
pub use recursive::RecursiveDetector;
