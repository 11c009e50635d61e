//! Colours for the player and for CLI messages
//!
//! One `Theme` feeds both the ratatui styles of the player and the ANSI
//! escapes used by `config init` and the post-session error line.

use ratatui::style::{Color, Modifier, Style};

/// Color theme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub text_primary: Color,
    /// Borders, separators and the unplayed track
    pub text_secondary: Color,
    /// Accent color for key hints and the focused control
    pub accent: Color,
    /// Played portion of the progress track
    pub played: Color,
    /// Error banner color
    pub error: Color,
    /// Disabled controls
    pub disabled: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::classic()
    }
}

impl Theme {
    /// White text on a yellow progress fill.
    pub fn classic() -> Self {
        Self {
            text_primary: Color::White,
            text_secondary: Color::DarkGray,
            accent: Color::Yellow,
            played: Color::LightYellow,
            error: Color::Red,
            disabled: Color::DarkGray,
        }
    }

    pub fn ocean() -> Self {
        Self {
            text_primary: Color::Cyan,
            text_secondary: Color::DarkGray,
            accent: Color::LightCyan,
            played: Color::Blue,
            error: Color::Red,
            disabled: Color::DarkGray,
        }
    }

    /// No colors beyond the terminal defaults.
    pub fn mono() -> Self {
        Self {
            text_primary: Color::Reset,
            text_secondary: Color::Reset,
            accent: Color::Reset,
            played: Color::Reset,
            error: Color::Reset,
            disabled: Color::Reset,
        }
    }

    /// Look up a theme by its config name.
    pub fn by_name(name: &str) -> Option<Self> {
        match name {
            "classic" => Some(Self::classic()),
            "ocean" => Some(Self::ocean()),
            "mono" => Some(Self::mono()),
            _ => None,
        }
    }

    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    pub fn text_secondary_style(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    /// Key hints and the help border.
    pub fn accent_bold_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for an enabled or disabled control.
    pub fn control_style(&self, disabled: bool) -> Style {
        if disabled {
            Style::default()
                .fg(self.disabled)
                .add_modifier(Modifier::DIM)
        } else {
            self.text_style()
        }
    }

    pub fn played_style(&self) -> Style {
        Style::default().fg(self.played)
    }

    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error).add_modifier(Modifier::BOLD)
    }

    /// CLI message in the primary colour. Plain when `NO_COLOR` is set.
    pub fn primary_text(&self, text: &str) -> String {
        paint(text, self.text_primary, ansi_enabled())
    }

    /// CLI error in the error colour. Plain when `NO_COLOR` is set.
    pub fn error_text(&self, text: &str) -> String {
        paint(text, self.error, ansi_enabled())
    }
}

const ANSI_RESET: &str = "\x1b[0m";

/// Honours the `NO_COLOR` convention (any non-empty value disables colour).
fn ansi_enabled() -> bool {
    std::env::var_os("NO_COLOR").map_or(true, |v| v.is_empty())
}

fn paint(text: &str, color: Color, enabled: bool) -> String {
    match ansi_code(color) {
        Some(code) if enabled => format!("\x1b[{}m{}{}", code, text, ANSI_RESET),
        _ => text.to_string(),
    }
}

/// SGR foreground code for the 16 named colours.
fn ansi_code(color: Color) -> Option<u8> {
    let code = match color {
        Color::Black => 30,
        Color::Red => 31,
        Color::Green => 32,
        Color::Yellow => 33,
        Color::Blue => 34,
        Color::Magenta => 35,
        Color::Cyan => 36,
        Color::Gray => 37,
        Color::DarkGray => 90,
        Color::LightRed => 91,
        Color::LightGreen => 92,
        Color::LightYellow => 93,
        Color::LightBlue => 94,
        Color::LightMagenta => 95,
        Color::LightCyan => 96,
        Color::White => 97,
        _ => return None,
    };
    Some(code)
}
