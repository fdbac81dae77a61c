//! Configuration loading

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{TddmonError, TddmonResult};
use crate::infrastructure::fs::user_config_dir;

use super::suggest::closest;
use super::types::{ColorMode, Config};

/// Project-level config file name, looked up in the project root.
pub const PROJECT_CONFIG_FILE: &str = "tddmon.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> TddmonResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| TddmonError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Candidate config files in priority order.
pub fn config_candidates(project_root: &Path) -> Vec<PathBuf> {
    let mut candidates = vec![project_root.join(PROJECT_CONFIG_FILE)];
    if let Some(dir) = user_config_dir() {
        candidates.push(dir.join("config.toml"));
    }
    candidates
}

/// First existing config file wins; env overrides are applied on top.
pub fn discover(project_root: &Path) -> TddmonResult<(Config, Vec<ConfigWarning>)> {
    for candidate in config_candidates(project_root) {
        if candidate.is_file() {
            debug!(path = %candidate.display(), "loading config");
            let (config, warnings) = load_with_warnings(&candidate)?;
            return Ok((with_env_overrides(config), warnings));
        }
    }
    Ok((with_env_overrides(Config::default()), Vec::new()))
}

/// Apply `TDDMON_*` environment overrides from the process environment.
fn with_env_overrides(config: Config) -> Config {
    apply_overrides(config, |key| std::env::var(key).ok(), &mut std::io::stderr())
}

/// Apply `TDDMON_*` overrides read through `env`.
///
/// A value that does not parse is reported on `writer` and the previous
/// setting is kept.
pub(crate) fn apply_overrides<E, W>(mut config: Config, env: E, writer: &mut W) -> Config
where
    E: Fn(&str) -> Option<String>,
    W: Write,
{
    let mut reject = |var: &str, raw: &str, expected: &[&str]| {
        let hint = closest(&raw.trim().to_ascii_lowercase(), expected)
            .map(|s| format!("; did you mean '{}'?", s))
            .unwrap_or_default();
        let _ = writeln!(
            writer,
            "warning: ignoring {}='{}' (expected {}){}",
            var,
            raw,
            expected.join(" | "),
            hint
        );
    };

    if let Some(python) = env("TDDMON_PYTHON").filter(|v| !v.trim().is_empty()) {
        config.tests.python = python;
    }

    if let Some(raw) = env("TDDMON_WORKERS") {
        match raw.trim().parse() {
            Ok(workers) => config.tests.workers = workers,
            Err(_) => reject("TDDMON_WORKERS", &raw, &["<count>"]),
        }
    }

    if let Some(raw) = env("TDDMON_INTERVAL_MS") {
        match raw.trim().parse::<u64>() {
            Ok(ms) if ms > 0 => config.watch.interval_ms = ms,
            _ => reject("TDDMON_INTERVAL_MS", &raw, &["<milliseconds>"]),
        }
    }

    // Empty or "none" clears the limit
    if let Some(raw) = env("TDDMON_TIMEOUT_SECS") {
        match raw.trim() {
            "" | "none" => config.tests.timeout_secs = None,
            secs => match secs.parse() {
                Ok(secs) => config.tests.timeout_secs = Some(secs),
                Err(_) => reject("TDDMON_TIMEOUT_SECS", &raw, &["none", "<seconds>"]),
            },
        }
    }

    if let Some(raw) = env("TDDMON_COLOR") {
        match ColorMode::parse(&raw) {
            Some(color) => config.output.color = color,
            None => reject("TDDMON_COLOR", &raw, ColorMode::NAMES),
        }
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const KEYS: &[&str] = &[
        "watch",
        "interval_ms",
        "pattern",
        "honor_ignore_files",
        "tests",
        "package_marker",
        "python",
        "adapters",
        "workers",
        "parallel",
        "timeout_secs",
        "output",
        "color",
        "unicode",
        "log_file",
    ];

    closest(unknown, KEYS).map(str::to_string)
}
