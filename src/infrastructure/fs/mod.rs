//! File System Implementations
//!
//! Walking, atomic writes and config-directory lookup.

mod home;
mod local;
mod walk;

pub use home::{user_config_dir, TDDMON_CONFIG_HOME_VAR};
pub use local::LocalFs;
pub use walk::{absolutize, walk_files, WalkOptions};
