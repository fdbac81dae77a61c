//! Domain Policies
//!
//! Business rules and policies that govern behavior.
//! These are pure functions and state machines over domain values.

mod feedback;

pub use feedback::{Appearance, Feedback, Signal};
