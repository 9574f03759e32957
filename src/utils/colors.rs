//! ANSI color helpers for terminal output.

use crate::config::Theme;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";

pub const BRIGHT_WHITE: &str = "\x1b[97m";
pub const BRIGHT_GREEN: &str = "\x1b[92m";
pub const BRIGHT_RED: &str = "\x1b[91m";
pub const BRIGHT_CYAN: &str = "\x1b[96m";

/// Palette picked from the configured theme.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub heading: &'static str,
    pub accent: &'static str,
    pub positive: &'static str,
    pub negative: &'static str,
    pub muted: &'static str,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                heading: BLUE,
                accent: CYAN,
                positive: GREEN,
                negative: RED,
                muted: GREY,
            },
            Theme::Dark => Self {
                heading: BRIGHT_WHITE,
                accent: BRIGHT_CYAN,
                positive: BRIGHT_GREEN,
                negative: BRIGHT_RED,
                muted: GREY,
            },
        }
    }

    /// Green above zero, red below, plain at zero.
    pub fn for_balance(&self, value: f64) -> &'static str {
        if value > 0.0 {
            self.positive
        } else if value < 0.0 {
            self.negative
        } else {
            RESET
        }
    }
}
