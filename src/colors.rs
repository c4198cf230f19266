use std::io::{self, IsTerminal};

const RESET: &str = "\x1b[0m";

/// ANSI color codes, all empty when colors are off.
#[derive(Debug, Clone, Copy)]
pub struct Colors {
    pub error: &'static str,
    pub warning: &'static str,
    pub success: &'static str,
    pub info: &'static str,
    enabled: bool,
}

impl Colors {
    pub fn new(enabled: bool) -> Self {
        if enabled {
            Self {
                error: "\x1b[31m",   // Red
                warning: "\x1b[33m", // Yellow
                success: "\x1b[32m", // Green
                info: "\x1b[36m",    // Cyan
                enabled: true,
            }
        } else {
            Self {
                error: "",
                warning: "",
                success: "",
                info: "",
                enabled: false,
            }
        }
    }

    pub fn reset(&self) -> &'static str {
        if self.enabled {
            RESET
        } else {
            ""
        }
    }

    /// Wrap `label` in `color` and a reset.
    pub fn paint(&self, color: &str, label: &str) -> String {
        format!("{color}{label}{}", self.reset())
    }
}

/// Whether output should be colored.
///
/// Priority: `--no-color` > `NO_COLOR` env > stdout TTY detection
pub fn should_use_colors(no_color: bool) -> bool {
    colors_wanted(
        no_color,
        std::env::var_os("NO_COLOR").is_some(),
        io::stdout().is_terminal(),
    )
}

fn colors_wanted(no_color_flag: bool, no_color_env: bool, stdout_is_tty: bool) -> bool {
    !no_color_flag && !no_color_env && stdout_is_tty
}
