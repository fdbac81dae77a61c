//! tddmon CLI - continuous test monitor
//!
//! Usage: tddmon [OPTIONS] [FILES]...
//!
//! Without `--log-and-exit` the monitor polls until Ctrl+C, re-running the
//! project's tests whenever a watched file changes.

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod ui;

use cli::Cli;
use ui::context::UiContext;
use ui::primitives::icon::Icon;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli);

    let (mut config, warnings) = tddmon::Config::discover(&cli.root)
        .with_context(|| format!("failed to load configuration for {}", cli.root.display()))?;
    cli.apply_to(&mut config);

    let ui = UiContext::new(cli.json, cli.verbose, cli.color, &config);
    if !ui.json {
        for warning in &warnings {
            eprintln!("{} {}", Icon::Warning.colored(ui.color, ui.unicode), warning);
        }
    }

    if cli.log_and_exit {
        commands::batch::cmd_batch(&cli, &config, &ui)
    } else {
        commands::watch::cmd_watch(&cli, &config, &ui)
    }
}

/// Diagnostics go to stderr; `RUST_LOG` wins over `-v`.
fn init_tracing(cli: &Cli) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("tddmon={}", cli.log_directive())));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
