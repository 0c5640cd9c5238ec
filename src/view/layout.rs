//! Frame layout: header bar, screen body, status bar, help overlay.

use super::constants::{HEADER_HEIGHT, STATUS_BAR_HEIGHT};
use super::styles::Palette;
use super::{catalog, detail, help, home, news, pages};
use crate::config::KeyBindings;
use crate::state::{AppState, Screen};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Name shown in the header bar.
pub const APP_NAME: &str = "Global Scholarships";

/// Render a whole frame for `state`.
pub fn render_layout(frame: &mut Frame, state: &AppState, bindings: &KeyBindings, palette: Palette) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .split(frame.area());

    render_header(frame, chunks[0], state, palette);
    render_body(frame, chunks[1], state, palette);
    render_status_bar(frame, chunks[2], state, palette);

    if state.help_visible {
        help::render_help_overlay(frame, bindings, palette);
    }
}

fn render_body(frame: &mut Frame, area: Rect, state: &AppState, palette: Palette) {
    match state.screen {
        Screen::Home => home::render(frame, area, state, palette),
        Screen::Scholarships => catalog::render(frame, area, state, palette),
        Screen::Detail(_) => detail::render(frame, area, &state.detail, state.scroll, palette),
        Screen::News => news::render(
            frame,
            area,
            &state.news,
            state.news_enabled(),
            state.scroll,
            palette,
        ),
        Screen::About | Screen::Privacy | Screen::Terms | Screen::Cookies => {
            pages::render(frame, area, state.screen, state.scroll, palette)
        }
    }
}

fn render_header(frame: &mut Frame, area: Rect, state: &AppState, palette: Palette) {
    let line = Line::from(vec![
        Span::styled(format!(" {} ", APP_NAME), palette.header_bar),
        Span::styled(format!(" {} ", state.screen.title()), palette.heading),
        Span::styled(state.location(), palette.muted),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Whether anything the current screen shows is still loading.
fn screen_loading(state: &AppState) -> bool {
    match state.screen {
        Screen::Home => state.featured.is_loading(),
        Screen::Scholarships => state.catalog.loading().is_some() || state.countries.is_loading(),
        Screen::Detail(_) => state.detail.is_loading(),
        Screen::News => state.news.is_loading(),
        _ => false,
    }
}

/// Whether the current screen has a failure worth flagging.
fn screen_failed(state: &AppState) -> bool {
    match state.screen {
        Screen::Home => state.featured.error().is_some(),
        Screen::Scholarships => state.catalog.error().is_some() || state.countries.error().is_some(),
        Screen::Detail(_) => state.detail.error().is_some(),
        Screen::News => state.news.error().is_some(),
        _ => false,
    }
}

fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState, palette: Palette) {
    let mut spans = Vec::new();
    if screen_loading(state) {
        spans.push(Span::styled(" ⟳ loading ", palette.accent));
    }
    if screen_failed(state) {
        spans.push(Span::styled(" ✗ error (r to retry) ", palette.error));
    }

    let hints: &[(&str, &str)] = if state.search_input.is_editing() {
        &[("Enter", "search"), ("Esc", "cancel")]
    } else {
        match state.screen {
            Screen::Scholarships => &[
                ("/", "search"),
                ("d/c/b", "filters"),
                ("m", "more"),
                ("Enter", "open"),
                ("?", "help"),
                ("q", "quit"),
            ],
            Screen::Detail(_) => &[("Esc", "back"), ("j/k", "scroll"), ("?", "help"), ("q", "quit")],
            _ => &[("1-7", "screens"), ("t", "theme"), ("?", "help"), ("q", "quit")],
        }
    };
    for (key, label) in hints {
        spans.push(Span::styled(format!(" {}", key), palette.key_hint));
        spans.push(Span::styled(format!(" {}", label), palette.muted));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
