//! Theme System
//!
//! A centralized theme providing an Amber/Teal color palette with dark
//! slate background for the tip calculator TUI.

use ratatui::style::{Color, Modifier, Style};

/// The main theme struct containing all colors and pre-computed styles.
#[derive(Debug, Clone)]
pub struct Theme {
    // Primary brand colors
    /// Warm amber - primary accent color
    pub amber: Color,
    /// Teal - success and derived values
    pub teal: Color,
    /// Dark slate - main background
    pub slate: Color,
    /// Light slate - panel/card backgrounds
    pub slate_light: Color,

    // Semantic colors
    /// Primary text color (near-white)
    pub text_primary: Color,
    /// Muted/secondary text color
    pub text_muted: Color,
    /// Error color (red)
    pub error: Color,
    /// Warning color (amber)
    pub warning: Color,
    /// Success color (teal)
    pub success: Color,
    /// Accent color (cyan)
    pub accent: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            amber: Color::Rgb(245, 158, 11),
            teal: Color::Rgb(20, 184, 166),
            slate: Color::Rgb(15, 23, 42),
            slate_light: Color::Rgb(30, 41, 59),
            text_primary: Color::Rgb(248, 250, 252),
            text_muted: Color::Rgb(148, 163, 184),
            error: Color::Rgb(239, 68, 68),
            warning: Color::Rgb(245, 158, 11),
            success: Color::Rgb(20, 184, 166),
            accent: Color::Cyan,
        }
    }
}

#[allow(dead_code)]
impl Theme {
    /// Creates a new theme with default colors.
    pub fn new() -> Self {
        Self::default()
    }

    /// Title style - bold amber text
    pub fn title(&self) -> Style {
        Style::default().fg(self.amber).add_modifier(Modifier::BOLD)
    }

    /// Subtitle/label style - muted text
    pub fn subtitle(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    /// Primary text style
    pub fn text(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    /// Highlighted/selected item style
    pub fn highlight(&self) -> Style {
        Style::default()
            .fg(self.slate)
            .bg(self.amber)
            .add_modifier(Modifier::BOLD)
    }

    /// Active border style
    pub fn border_active(&self) -> Style {
        Style::default().fg(self.amber)
    }

    /// Inactive border style
    pub fn border_inactive(&self) -> Style {
        Style::default().fg(self.slate_light)
    }

    /// Success style - teal text
    pub fn success_style(&self) -> Style {
        Style::default().fg(self.success).add_modifier(Modifier::BOLD)
    }

    /// Error style - red text
    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error).add_modifier(Modifier::BOLD)
    }

    /// Warning style - amber text
    pub fn warning_style(&self) -> Style {
        Style::default().fg(self.warning)
    }

    /// Accent style - cyan text
    pub fn accent_style(&self) -> Style {
        Style::default().fg(self.accent)
    }

    /// Background style for main area
    pub fn bg(&self) -> Style {
        Style::default().bg(self.slate)
    }

    /// Background style for panels/cards
    pub fn bg_panel(&self) -> Style {
        Style::default().bg(self.slate_light)
    }

    /// Value display style - bold primary text
    pub fn value(&self) -> Style {
        Style::default()
            .fg(self.text_primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Positive value style - bold teal
    pub fn value_positive(&self) -> Style {
        Style::default().fg(self.teal).add_modifier(Modifier::BOLD)
    }
}

/// Global theme instance for convenience.
pub static THEME: std::sync::LazyLock<Theme> = std::sync::LazyLock::new(Theme::default);

/// Convenience function to get the default theme.
pub fn theme() -> &'static Theme {
    &THEME
}

/// Icons used throughout the TUI
#[allow(dead_code)]
pub mod icons {
    pub const RECEIPT: &str = "🧾";
    pub const CASH: &str = "💵";
    pub const PERCENT: &str = "％";
    pub const COIN: &str = "🪙";
    pub const HELP: &str = "❓";
    pub const CHECK: &str = "✓";
    pub const CROSS: &str = "✗";
    pub const BULLET: &str = "•";
    pub const ARROW_RIGHT: &str = "➜";
    pub const SEPARATOR: &str = "│";
    pub const TOGGLE_ON: &str = "[x]";
    pub const TOGGLE_OFF: &str = "[ ]";
}
