//! Domain Layer
//!
//! The core of tddmon - pure logic for change detection and feedback.
//!
//! ## Structure
//!
//! - `value_objects/` - Immutable value types (Fingerprint, TestCounts, FilePattern)
//! - `policies/` - Business rules (Feedback color/pulse state machine)
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **Stat only** - Fingerprints come from metadata, never file contents
//! 2. **Pure Functions** - Policies are deterministic and testable
//! 3. **Ports & Adapters** - Detection and execution go through trait-defined ports

pub mod policies;
pub mod ports;
pub mod value_objects;
