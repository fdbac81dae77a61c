use anyhow::{Context, Result};
use tddmon::{BatchUseCase, Config, Monitor};

use crate::cli::Cli;
use crate::ui::context::UiContext;
use crate::ui::views::events;

/// `--log-and-exit`: run everything once, write the results file, exit 0.
pub fn cmd_batch(cli: &Cli, config: &Config, ui: &UiContext) -> Result<()> {
    let monitor = Monitor::for_project(&cli.root, &cli.files, config)
        .with_context(|| format!("cannot monitor {}", cli.root.display()))?;
    let artifact = cli.root.join(&config.output.log_file);

    let outcome = BatchUseCase::new(monitor, &artifact)
        .run(|event| {
            if ui.json {
                println!("{}", event.to_json("batch"));
            } else if ui.verbose > 0 {
                print!(
                    "{}",
                    events::render_event(&super::timestamp(), &event, ui.color, ui.unicode)
                );
            }
        })
        .with_context(|| format!("failed to write {}", artifact.display()))?;

    if !ui.json {
        if cli.show_log {
            println!("{}", outcome.report);
        }
        println!(
            "{}/{} ({}) -> {}",
            outcome.counts.passed,
            outcome.counts.run,
            outcome.signal(),
            outcome.artifact.display()
        );
    }

    Ok(())
}
