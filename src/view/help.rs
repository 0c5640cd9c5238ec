//! Help overlay widget displaying keyboard shortcuts.
//!
//! Built from the active [`KeyBindings`], so it always matches what the keys do.
//! Triggered by '?', dismissed by 'Esc' or '?'.

use super::constants::{HELP_POPUP_HEIGHT_PERCENT, HELP_POPUP_WIDTH_PERCENT};
use super::helpers::empty_line;
use super::styles::Palette;
use crate::config::KeyBindings;
use crate::model::KeyAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

const CATEGORIES: [(&str, &[KeyAction]); 4] = [
    (
        "Screens",
        &[
            KeyAction::GoHome,
            KeyAction::GoScholarships,
            KeyAction::GoNews,
            KeyAction::GoAbout,
            KeyAction::GoPrivacy,
            KeyAction::GoTerms,
            KeyAction::GoCookies,
            KeyAction::Back,
        ],
    ),
    (
        "Selection",
        &[KeyAction::MoveUp, KeyAction::MoveDown, KeyAction::OpenSelected],
    ),
    (
        "Catalog",
        &[
            KeyAction::StartSearch,
            KeyAction::CycleDegree,
            KeyAction::CycleCountry,
            KeyAction::CycleBenefit,
            KeyAction::ClearFilters,
            KeyAction::LoadMore,
            KeyAction::Refresh,
        ],
    ),
    (
        "Application",
        &[KeyAction::ToggleTheme, KeyAction::Help, KeyAction::Quit],
    ),
];

/// Render the help overlay centered on the screen.
pub fn render_help_overlay(frame: &mut Frame, bindings: &KeyBindings, palette: Palette) {
    let popup_area = centered_rect(
        HELP_POPUP_WIDTH_PERCENT,
        HELP_POPUP_HEIGHT_PERCENT,
        frame.area(),
    );

    frame.render_widget(Clear, popup_area);

    let help_paragraph = Paragraph::new(build_help_content(bindings, palette))
        .block(
            Block::default()
                .title(" Keyboard Shortcuts ")
                .borders(Borders::ALL)
                .border_style(palette.heading),
        )
        .wrap(Wrap { trim: false })
        .alignment(Alignment::Left);

    frame.render_widget(help_paragraph, popup_area);

    let hint_area = Rect {
        x: popup_area.x,
        y: popup_area.y + popup_area.height.saturating_sub(1),
        width: popup_area.width,
        height: 1,
    };
    let hint = Paragraph::new(Line::from(Span::styled(
        " Press Esc or ? to close ",
        palette.muted.add_modifier(Modifier::DIM),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(hint, hint_area);
}

/// Returns a Rect centered in `area` covering the given percentages.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_width = area.width * percent_x / 100;
    let popup_height = area.height * percent_y / 100;
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;

    Rect {
        x: area.x + popup_x,
        y: area.y + popup_y,
        width: popup_width,
        height: popup_height,
    }
}

fn build_help_content(bindings: &KeyBindings, palette: Palette) -> Vec<Line<'static>> {
    let entries = bindings.entries();
    let mut lines = Vec::new();

    for (category, actions) in CATEGORIES {
        lines.push(Line::styled(category, palette.heading));
        for action in actions {
            let keys: Vec<String> = entries
                .iter()
                .filter(|(_, bound)| bound == action)
                .map(|(key, _)| key_label(*key))
                .collect();
            if keys.is_empty() {
                continue;
            }
            lines.push(Line::from(vec![
                Span::styled(format!("  {:<12}", keys.join(", ")), palette.key_hint),
                Span::styled(describe(*action), palette.text),
            ]));
        }
        lines.push(empty_line());
    }
    lines
}

/// Human-readable key name, e.g. `Ctrl+c`, `↓`, `Enter`.
pub fn key_label(key: KeyEvent) -> String {
    let base = match key.code {
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Up => "↑".to_string(),
        KeyCode::Down => "↓".to_string(),
        KeyCode::Left => "←".to_string(),
        KeyCode::Right => "→".to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        other => format!("{:?}", other),
    };
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        format!("Ctrl+{}", base)
    } else {
        base
    }
}

fn describe(action: KeyAction) -> &'static str {
    match action {
        KeyAction::GoHome => "Home",
        KeyAction::GoScholarships => "Scholarships",
        KeyAction::GoNews => "News",
        KeyAction::GoAbout => "About",
        KeyAction::GoPrivacy => "Privacy policy",
        KeyAction::GoTerms => "Terms of service",
        KeyAction::GoCookies => "Cookie policy",
        KeyAction::Back => "Back / cancel",
        KeyAction::MoveUp => "Select previous / scroll up",
        KeyAction::MoveDown => "Select next / scroll down",
        KeyAction::OpenSelected => "Open selected scholarship",
        KeyAction::StartSearch => "Edit search text",
        KeyAction::CycleDegree => "Cycle degree level",
        KeyAction::CycleCountry => "Cycle host country",
        KeyAction::CycleBenefit => "Cycle financial benefit",
        KeyAction::ClearFilters => "Clear filters",
        KeyAction::LoadMore => "Load more results",
        KeyAction::Refresh => "Retry / refresh",
        KeyAction::ToggleTheme => "Toggle light / dark theme",
        KeyAction::Help => "Toggle this help",
        KeyAction::Quit => "Quit",
    }
}
