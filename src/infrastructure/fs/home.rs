//! User configuration directory resolution with test isolation support.
//!
//! `dirs::config_dir()` ignores environment variables on some platforms, so
//! tests point `TDDMON_CONFIG_HOME` at a temp directory instead.

use std::path::PathBuf;

/// Environment variable overriding the user configuration directory.
pub const TDDMON_CONFIG_HOME_VAR: &str = "TDDMON_CONFIG_HOME";

/// Directory holding the user-level `config.toml`.
///
/// - `$TDDMON_CONFIG_HOME` when set
/// - `<platform config dir>/tddmon` otherwise
/// - `None` when neither can be resolved
pub fn user_config_dir() -> Option<PathBuf> {
    std::env::var(TDDMON_CONFIG_HOME_VAR)
        .ok()
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(|| dirs::config_dir().map(|d| d.join("tddmon")))
}
