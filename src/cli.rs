use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// tddmon - continuous test monitor for Python projects
#[derive(Parser, Debug)]
#[command(name = "tddmon")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Without FILES, every *.py under the root is watched and \
test_*.py files inside packages are run. Press Ctrl+C to stop.")]
pub struct Cli {
    /// Fixed set of files to watch and test (disables discovery)
    pub files: Vec<PathBuf>,

    /// Project root
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Run all tests once, write the results file and exit
    #[arg(long)]
    pub log_and_exit: bool,

    /// Output events as NDJSON
    #[arg(long)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Polling interval in milliseconds
    #[arg(long, value_name = "MS")]
    pub interval: Option<u64>,

    /// Worker count for parallel test runs (0 = one per CPU)
    #[arg(long, value_name = "N")]
    pub workers: Option<usize>,

    /// Run test files one after another
    #[arg(long)]
    pub no_parallel: bool,

    /// Kill a test file's interpreter after this many seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Python interpreter used to run tests
    #[arg(long, value_name = "PATH")]
    pub python: Option<String>,

    /// Color output
    #[arg(long, value_enum)]
    pub color: Option<ColorWhen>,

    /// Print the full test log after each run
    #[arg(long)]
    pub show_log: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

impl Cli {
    /// Apply flag overrides on top of the loaded configuration.
    pub fn apply_to(&self, config: &mut tddmon::Config) {
        if let Some(ms) = self.interval {
            config.watch.interval_ms = ms;
        }
        if let Some(workers) = self.workers {
            config.tests.workers = workers;
        }
        if self.no_parallel {
            config.tests.parallel = false;
        }
        if let Some(secs) = self.timeout {
            config.tests.timeout_secs = Some(secs);
        }
        if let Some(python) = &self.python {
            config.tests.python = python.clone();
        }
    }

    /// `RUST_LOG`-style default directive derived from `-v`.
    pub fn log_directive(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
