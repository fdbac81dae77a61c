use std::cell::{Cell, RefCell};
use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{Context, Result};
use tddmon::{Config, Monitor, MonitorEvent, Signal, WatchOptions, WatchUseCase};

use crate::cli::Cli;
use crate::ui::context::UiContext;
use crate::ui::live_region::LiveRegion;
use crate::ui::views::{events, status};

pub fn cmd_watch(cli: &Cli, config: &Config, ui: &UiContext) -> Result<()> {
    let monitor = Monitor::for_project(&cli.root, &cli.files, config)
        .with_context(|| format!("cannot monitor {}", cli.root.display()))?;
    let project = monitor.project_name().to_string();

    // Set up Ctrl+C handler
    let running = Arc::new(AtomicBool::new(true));
    let running_clone = running.clone();
    ctrlc::set_handler(move || {
        running_clone.store(false, Ordering::SeqCst);
    })
    .context("failed to install Ctrl+C handler")?;

    if !ui.json {
        let root = tddmon::infrastructure::fs::absolutize(&cli.root);
        print!(
            "{}",
            events::render_header(&project, &root.display().to_string(), ui.color, ui.unicode)
        );
    }

    let options = WatchOptions::default()
        .with_interval(config.interval())
        .with_show_log(cli.show_log || cli.verbose > 0);
    let mut use_case = WatchUseCase::new(monitor, options);

    let region = RefCell::new(LiveRegion::new());
    let last_badge: Cell<Option<(usize, usize, Signal)>> = Cell::new(None);

    use_case.start(running, |event| {
        if ui.json {
            // The badge pulse is a terminal concern
            if !matches!(event, MonitorEvent::Status { .. }) {
                println!("{}", event.to_json("watch"));
            }
            return;
        }

        let mut out = io::stdout().lock();
        match &event {
            MonitorEvent::Status {
                passed,
                run,
                signal,
                lit,
                ..
            } => {
                let counts = tddmon::TestCounts::new(*passed, *run);
                let appearance = tddmon::Appearance {
                    signal: *signal,
                    lit: *lit,
                };
                if ui.live {
                    let badge = status::render_badge(
                        &project,
                        &counts,
                        appearance,
                        ui.color,
                        ui.caps.supports_true_color,
                    );
                    let _ = region.borrow_mut().update(&mut out, &badge);
                } else if last_badge.get() != Some((*passed, *run, *signal)) {
                    // Without redraw support, print only when the badge changes
                    last_badge.set(Some((*passed, *run, *signal)));
                    let badge = status::render_badge(&project, &counts, appearance, ui.color, false);
                    let _ = write!(out, "{}", badge);
                }
            }
            _ => {
                if ui.live {
                    let _ = region.borrow_mut().update(&mut out, "");
                }
                let rendered =
                    events::render_event(&super::timestamp(), &event, ui.color, ui.unicode);
                if matches!(event, MonitorEvent::Error { .. }) {
                    eprint!("{rendered}");
                } else {
                    let _ = write!(out, "{}", rendered);
                    let _ = out.flush();
                }
            }
        }
    });

    Ok(())
}
