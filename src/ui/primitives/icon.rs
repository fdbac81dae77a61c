use crossterm::style::{Color, Stylize};

use tddmon::Signal;

use crate::ui::theme;

/// Glyph shown in front of an event line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Progress,
    Arrow,
    Watch,
}

impl Icon {
    /// Icon for a finished test run.
    pub fn for_signal(signal: Signal) -> Self {
        match signal {
            Signal::Green => Icon::Success,
            Signal::Orange => Icon::Warning,
            Signal::Red | Signal::Gray => Icon::Error,
        }
    }

    /// `(unicode, ascii)` spellings.
    fn glyphs(self) -> (&'static str, &'static str) {
        use theme::{icons as u, icons_ascii as a};
        match self {
            Icon::Success => (u::SUCCESS, a::SUCCESS),
            Icon::Error => (u::ERROR, a::ERROR),
            Icon::Warning => (u::WARNING, a::WARNING),
            Icon::Progress => (u::PROGRESS, a::PROGRESS),
            Icon::Arrow => (u::ARROW, a::ARROW),
            Icon::Watch => (u::WATCH, a::WATCH),
        }
    }

    fn color(self) -> Color {
        match self {
            Icon::Success => theme::colors::SUCCESS,
            Icon::Error => theme::colors::ERROR,
            // a run in flight shares the badge's orange
            Icon::Warning | Icon::Progress => theme::colors::WARNING,
            Icon::Arrow => theme::colors::DIM,
            Icon::Watch => theme::colors::INFO,
        }
    }

    pub fn render(&self, supports_unicode: bool) -> &'static str {
        let (unicode, ascii) = self.glyphs();
        if supports_unicode {
            unicode
        } else {
            ascii
        }
    }

    pub fn colored(&self, supports_color: bool, supports_unicode: bool) -> String {
        let glyph = self.render(supports_unicode);
        if supports_color {
            glyph.with(self.color()).to_string()
        } else {
            glyph.to_string()
        }
    }
}
