//! Status badge
//!
//! Two lines: the project name, and `passed/total` centered beneath it on
//! the signal's background color.

use crossterm::style::{Color, Stylize};
use tddmon::{Appearance, TestCounts};
use unicode_width::UnicodeWidthStr;

use crate::ui::theme::signal_color;

/// Horizontal padding on each side of the widest line.
const BADGE_PAD: usize = 3;

pub fn render_badge(
    project: &str,
    counts: &TestCounts,
    appearance: Appearance,
    supports_color: bool,
    true_color: bool,
) -> String {
    let text = format!("{}/{}", counts.passed, counts.run);
    let name_width = UnicodeWidthStr::width(project);
    let text_width = UnicodeWidthStr::width(text.as_str());
    let width = name_width.max(text_width) + 2 * BADGE_PAD;

    let name_left = (width - name_width) / 2;
    let text_left = (width - text_width) / 2;
    let text_right = width - text_width - text_left;

    let title = format!("{}{}", " ".repeat(name_left), project);
    let badge = if supports_color {
        let segment = format!("{}{}{}", " ".repeat(text_left), text, " ".repeat(text_right));
        let bg = signal_color(appearance.signal, appearance.lit, true_color);
        format!("{}", segment.with(Color::Black).on(bg).bold())
    } else {
        format!("{}{}  ({})", " ".repeat(text_left), text, appearance.signal)
    };

    format!("{}\n{}\n", title, badge)
}
