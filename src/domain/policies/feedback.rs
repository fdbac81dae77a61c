//! Feedback Policy
//!
//! Turns aggregate test counts into a color and a pulse phase for the
//! glanceable status badge.
//!
//! | counts                         | color  |
//! |--------------------------------|--------|
//! | any execution error            | orange |
//! | exactly one failure            | red    |
//! | two or more failures           | gray   |
//! | everything passed (or nothing) | green  |
//!
//! The pulse resets to lit when the color changes and flips on every other
//! update, so a steady non-green state keeps blinking.

use std::fmt;

use serde::Serialize;

use crate::domain::value_objects::TestCounts;

/// Color category of the badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Signal {
    Green,
    Red,
    Orange,
    Gray,
}

impl Signal {
    /// Classify aggregate counts.
    pub fn classify(counts: &TestCounts) -> Self {
        if counts.is_error() {
            Signal::Orange
        } else if counts.passed + 1 == counts.run {
            Signal::Red
        } else if counts.passed + 1 < counts.run {
            Signal::Gray
        } else {
            Signal::Green
        }
    }

    /// RGB hex for the lit / unlit variant.
    pub fn rgb(&self, lit: bool) -> &'static str {
        match (lit, self) {
            (true, Signal::Green) => "#0f0",
            (false, Signal::Green) => "#0c0",
            (true, Signal::Red) => "#f00",
            (false, Signal::Red) => "#c00",
            (true, Signal::Orange) => "#fc0",
            (false, Signal::Orange) => "#ca0",
            (true, Signal::Gray) => "#999",
            (false, Signal::Gray) => "#555",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Signal::Green => "green",
            Signal::Red => "red",
            Signal::Orange => "orange",
            Signal::Gray => "gray",
        }
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the badge should show after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Appearance {
    pub signal: Signal,
    pub lit: bool,
}

impl Appearance {
    pub fn rgb(&self) -> &'static str {
        self.signal.rgb(self.lit)
    }
}

/// Color + pulse state machine. Starts green and lit.
#[derive(Debug, Clone)]
pub struct Feedback {
    signal: Signal,
    lit: bool,
}

impl Default for Feedback {
    fn default() -> Self {
        Self::new()
    }
}

impl Feedback {
    pub fn new() -> Self {
        Self {
            signal: Signal::Green,
            lit: true,
        }
    }

    /// Current state without advancing the pulse.
    pub fn current(&self) -> Appearance {
        Appearance {
            signal: self.signal,
            lit: self.lit,
        }
    }

    /// Feed new aggregate counts and get the appearance to display.
    ///
    /// A color change resets the pulse to lit; otherwise the pulse flips.
    pub fn update(&mut self, counts: &TestCounts) -> Appearance {
        self.set_result(counts);
        let shown = self.current();
        self.pulse();
        shown
    }

    fn set_result(&mut self, counts: &TestCounts) {
        let signal = Signal::classify(counts);
        if signal != self.signal {
            self.signal = signal;
            self.lit = true;
        }
    }

    fn pulse(&mut self) {
        self.lit = !self.lit;
    }
}
