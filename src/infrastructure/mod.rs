//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Directory walking, atomic writes, config home
//! - `detectors/` - Change detectors (fixed set, recursive scan)
//! - `adapters/` - Python test adapters (unittest, doctest)
//! - `strategies/` - Test strategies (fixed set, discovery)
//! - `pool` - Worker pool used by the strategies

pub mod adapters;
pub mod detectors;
pub mod fs;
pub mod pool;
pub mod strategies;

// Re-export for convenience
pub use adapters::{all_adapters, get_adapter, DoctestAdapter, PythonCommand, UnittestAdapter};
pub use detectors::{FixedSetDetector, RecursiveDetector};
pub use fs::LocalFs;
pub use pool::{TaskFailure, WorkerPool};
pub use strategies::{DiscoveryStrategy, FixedSetStrategy};
