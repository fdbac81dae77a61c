use tddmon::config::{ColorMode, Config};

use crate::cli::ColorWhen;
use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};

/// Resolved presentation settings for one invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub json: bool,
    pub verbose: u8,
    pub caps: TerminalCapabilities,
    pub color: bool,
    pub unicode: bool,
    /// Redraw the status badge in place instead of appending lines
    pub live: bool,
}

impl UiContext {
    pub fn new(json: bool, verbose: u8, cli_color: Option<ColorWhen>, config: &Config) -> Self {
        Self::from_caps(json, verbose, cli_color, config, detect_capabilities())
    }

    pub(crate) fn from_caps(
        json: bool,
        verbose: u8,
        cli_color: Option<ColorWhen>,
        config: &Config,
        caps: TerminalCapabilities,
    ) -> Self {
        let unicode = config.output.unicode && caps.supports_unicode;

        let color = match cli_color {
            Some(ColorWhen::Never) => false,
            Some(ColorWhen::Always) => true,
            Some(ColorWhen::Auto) | None => match config.output.color {
                ColorMode::Never => false,
                ColorMode::Always => true,
                ColorMode::Auto => caps.supports_color && !caps.is_ci,
            },
        };

        Self {
            json,
            verbose,
            caps,
            color,
            unicode,
            live: !json && caps.supports_live_redraw(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tty_caps(is_ci: bool) -> TerminalCapabilities {
        TerminalCapabilities {
            is_tty: true,
            supports_color: true,
            supports_true_color: false,
            supports_unicode: true,
            is_ci,
        }
    }

    #[test]
    fn ci_defaults_to_no_color_when_auto() {
        let ui = UiContext::from_caps(false, 0, None, &Config::default(), tty_caps(true));
        assert!(!ui.color);
        assert!(!ui.live);
    }

    #[test]
    fn ci_allows_explicit_color_always_flag() {
        let ui = UiContext::from_caps(
            false,
            0,
            Some(ColorWhen::Always),
            &Config::default(),
            tty_caps(true),
        );
        assert!(ui.color);
    }

    #[test]
    fn config_never_wins_over_capable_terminal() {
        let mut config = Config::default();
        config.output.color = ColorMode::Never;
        let ui = UiContext::from_caps(false, 0, None, &config, tty_caps(false));
        assert!(!ui.color);
        assert!(ui.live);
    }

    #[test]
    fn json_never_redraws() {
        let ui = UiContext::from_caps(true, 0, None, &Config::default(), tty_caps(false));
        assert!(!ui.live);
    }
}
