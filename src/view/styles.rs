//! Colour palettes.
//!
//! Every renderer takes a [`Palette`] argument instead of reading global styles, so the
//! theme is whatever [`AppState::theme`](crate::state::AppState) says at draw time.

use crate::state::Theme;
use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// `--no-color` wins, then any `NO_COLOR` value; otherwise colors are on.
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var_os("NO_COLOR").is_none();
        Self { enabled }
    }

    /// Colors on.
    pub fn enabled() -> Self {
        Self { enabled: true }
    }

    /// Colors off.
    pub fn disabled() -> Self {
        Self { enabled: false }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== Palette =====

/// Resolved styles for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Body text.
    pub text: Style,
    /// Secondary text.
    pub muted: Style,
    /// Section headings.
    pub heading: Style,
    /// Links, deadlines, highlights.
    pub accent: Style,
    /// Degree and country tags.
    pub chip: Style,
    /// Selected card title.
    pub selected: Style,
    /// Error messages.
    pub error: Style,
    /// Block borders.
    pub border: Style,
    /// Header and status bars.
    pub header_bar: Style,
    /// Key names in hints.
    pub key_hint: Style,
    /// Loading placeholders.
    pub skeleton: Style,
}

impl Palette {
    /// Styles for `theme`, or monochrome when colors are off.
    pub fn new(theme: Theme, colors: ColorConfig) -> Self {
        if !colors.colors_enabled() {
            return Self::monochrome();
        }
        match theme {
            Theme::Dark => Self {
                text: Style::default().fg(Color::White),
                muted: Style::default().fg(Color::Gray),
                heading: Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
                accent: Style::default().fg(Color::Yellow),
                chip: Style::default().fg(Color::Black).bg(Color::Cyan),
                selected: Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
                error: Style::default().fg(Color::Red),
                border: Style::default().fg(Color::DarkGray),
                header_bar: Style::default().fg(Color::Black).bg(Color::Cyan),
                key_hint: Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
                skeleton: Style::default().fg(Color::DarkGray),
            },
            Theme::Light => Self {
                text: Style::default().fg(Color::Black),
                muted: Style::default().fg(Color::DarkGray),
                heading: Style::default()
                    .fg(Color::Blue)
                    .add_modifier(Modifier::BOLD),
                accent: Style::default().fg(Color::Magenta),
                chip: Style::default().fg(Color::White).bg(Color::Blue),
                selected: Style::default()
                    .bg(Color::Gray)
                    .add_modifier(Modifier::BOLD),
                error: Style::default().fg(Color::Red),
                border: Style::default().fg(Color::Gray),
                header_bar: Style::default().fg(Color::White).bg(Color::Blue),
                key_hint: Style::default()
                    .fg(Color::Blue)
                    .add_modifier(Modifier::BOLD),
                skeleton: Style::default().fg(Color::Gray),
            },
        }
    }

    /// Modifiers only, no colours.
    fn monochrome() -> Self {
        let plain = Style::default();
        let bold = plain.add_modifier(Modifier::BOLD);
        Self {
            text: plain,
            muted: plain.add_modifier(Modifier::DIM),
            heading: bold,
            accent: plain,
            chip: plain.add_modifier(Modifier::REVERSED),
            selected: plain.add_modifier(Modifier::REVERSED),
            error: bold,
            border: plain,
            header_bar: plain.add_modifier(Modifier::REVERSED),
            key_hint: bold,
            skeleton: plain.add_modifier(Modifier::DIM),
        }
    }
}

// ===== Tests =====
