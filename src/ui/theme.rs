use crossterm::style::Color;
use tddmon::Signal;

/// Design tokens for the tddmon terminal UI.
///
/// All colors and icons used by views come from this module.
pub mod colors {
    use super::Color;

    pub const SUCCESS: Color = Color::Green;
    pub const ERROR: Color = Color::Red;
    pub const WARNING: Color = Color::Yellow;
    pub const INFO: Color = Color::Cyan;
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const ERROR: &str = "✗";
    pub const WARNING: &str = "⚠";
    pub const PROGRESS: &str = "●";
    pub const ARROW: &str = "↳";
    pub const WATCH: &str = "⟳";
}

pub mod icons_ascii {
    pub const SUCCESS: &str = "[OK]";
    pub const ERROR: &str = "[FAIL]";
    pub const WARNING: &str = "[WARN]";
    pub const PROGRESS: &str = "[..]";
    pub const ARROW: &str = "[>]";
    pub const WATCH: &str = "[~]";
}

/// Badge background for a signal.
///
/// True-color terminals get the exact RGB table value; others fall back to
/// the nearest named color, dark variant when unlit.
pub fn signal_color(signal: Signal, lit: bool, true_color: bool) -> Color {
    if true_color {
        if let Some(color) = parse_hex(signal.rgb(lit)) {
            return color;
        }
    }
    match (signal, lit) {
        (Signal::Green, true) => Color::Green,
        (Signal::Green, false) => Color::DarkGreen,
        (Signal::Red, true) => Color::Red,
        (Signal::Red, false) => Color::DarkRed,
        (Signal::Orange, true) => Color::Yellow,
        (Signal::Orange, false) => Color::DarkYellow,
        (Signal::Gray, true) => Color::Grey,
        (Signal::Gray, false) => Color::DarkGrey,
    }
}

/// Parse `#rgb` shorthand into a crossterm color.
fn parse_hex(hex: &str) -> Option<Color> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 3 {
        return None;
    }
    let mut channels = digits.chars().map(|c| c.to_digit(16).map(|d| (d * 17) as u8));
    Some(Color::Rgb {
        r: channels.next()??,
        g: channels.next()??,
        b: channels.next()??,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn true_color_uses_rgb_table() {
        assert_eq!(
            signal_color(Signal::Orange, true, true),
            Color::Rgb { r: 0xff, g: 0xcc, b: 0x00 }
        );
        assert_eq!(
            signal_color(Signal::Gray, false, true),
            Color::Rgb { r: 0x55, g: 0x55, b: 0x55 }
        );
    }

    #[test]
    fn named_fallback_darkens_unlit() {
        assert_eq!(signal_color(Signal::Red, true, false), Color::Red);
        assert_eq!(signal_color(Signal::Red, false, false), Color::DarkRed);
    }

    #[test]
    fn parse_hex_rejects_long_form() {
        assert_eq!(parse_hex("#00ff00"), None);
    }
}
