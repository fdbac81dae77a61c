use tddmon::MonitorEvent;

use crate::ui::primitives::icon::Icon;

pub fn render_header(project: &str, root: &str, supports_color: bool, supports_unicode: bool) -> String {
    format!(
        "{} tddmon: {}\n  Root: {}\n  Hint: Press Ctrl+C to stop\n\n",
        Icon::Watch.colored(supports_color, supports_unicode),
        project,
        root
    )
}

/// One timestamped line per event. `Status` is drawn by the badge instead
/// and renders as an empty string.
pub fn render_event(
    timestamp: &str,
    event: &MonitorEvent,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let prefix = format!("[{}]", timestamp);

    match event {
        MonitorEvent::WatchStarted {
            detectors,
            strategies,
            interval_ms,
            ..
        } => format!(
            "{} {} Watching {} every {}ms; running {}\n",
            prefix,
            Icon::Watch.colored(supports_color, supports_unicode),
            detectors.join(", "),
            interval_ms,
            strategies.join(", ")
        ),
        MonitorEvent::FilesChanged { paths } => {
            let shown = match paths.as_slice() {
                [only] => only.clone(),
                [first, rest @ ..] => format!("{} (+{} more)", first, rest.len()),
                [] => "nothing".to_string(),
            };
            format!(
                "{} {} Changed: {}\n",
                prefix,
                Icon::Arrow.colored(supports_color, supports_unicode),
                shown
            )
        }
        MonitorEvent::TestRunStarted => format!(
            "{} {} Running tests...\n",
            prefix,
            Icon::Progress.colored(supports_color, supports_unicode)
        ),
        MonitorEvent::TestRunComplete {
            passed,
            run,
            errors,
            duration_ms,
            signal,
            log,
        } => {
            let icon = Icon::for_signal(*signal).colored(supports_color, supports_unicode);
            let mut line = format!(
                "{} {} {}/{} passed in {}ms",
                prefix, icon, passed, run, duration_ms
            );
            if *errors > 0 {
                line.push_str(&format!(", {} could not run", errors));
            }
            line.push('\n');
            if let Some(log) = log {
                line.push_str(log);
                if !log.ends_with('\n') {
                    line.push('\n');
                }
            }
            line
        }
        MonitorEvent::Status { .. } => String::new(),
        MonitorEvent::Error { message } => format!(
            "{} {} Error: {}\n",
            prefix,
            Icon::Error.colored(supports_color, supports_unicode),
            message
        ),
        MonitorEvent::Shutdown => format!(
            "\n{} {} Monitor stopped.\n",
            prefix,
            Icon::Watch.colored(supports_color, supports_unicode)
        ),
    }
}
