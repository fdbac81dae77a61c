//! Change Detector Port
//!
//! A policy answering "which of my watched files changed since I last
//! looked". The monitor holds a list of these and unions their answers.

use std::path::PathBuf;

/// Detects changed files between successive calls.
///
/// Implementations:
/// - `FixedSetDetector` - positional comparison over a fixed file list
/// - `RecursiveDetector` - symmetric difference over a pattern-filtered tree
pub trait ChangeDetector: Send {
    /// Paths believed changed since the previous call.
    ///
    /// The call updates the detector's baseline, so a second call with no
    /// filesystem activity in between returns nothing.
    fn which_files_changed(&mut self) -> Vec<PathBuf>;

    /// Short label used in events and logs.
    fn describe(&self) -> String;
}
