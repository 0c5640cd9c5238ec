//! Home screen: featured scholarship hero, more featured, site stats.

use super::catalog::card_lines;
use super::helpers::{empty_line, truncate_to_width};
use super::styles::Palette;
use crate::model::Scholarship;
use crate::state::{AppState, Section};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw the home screen.
pub fn render(frame: &mut Frame, area: Rect, state: &AppState, palette: Palette) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(8), Constraint::Min(0), Constraint::Length(3)])
        .split(area);

    match &state.featured {
        Section::Loaded(items) => match items.split_first() {
            Some((hero, rest)) => {
                render_hero(frame, chunks[0], hero, state.featured_selected == 0, palette);
                render_more(frame, chunks[1], rest, state.featured_selected, palette);
            }
            None => message(frame, chunks[0], "No featured scholarships yet.", palette.muted),
        },
        Section::Failed(error) => message(
            frame,
            chunks[0],
            &format!("Failed to load featured scholarships: {} (r to retry)", error),
            palette.error,
        ),
        Section::Idle | Section::Loading => {
            message(frame, chunks[0], "Loading featured scholarships...", palette.muted)
        }
    }

    render_stats(frame, chunks[2], state, palette);
}

fn message(frame: &mut Frame, area: Rect, text: &str, style: ratatui::style::Style) {
    frame.render_widget(
        Paragraph::new(Line::styled(text.to_string(), style))
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title(" Featured ")),
        area,
    );
}

fn render_hero(frame: &mut Frame, area: Rect, hero: &Scholarship, selected: bool, palette: Palette) {
    let width = usize::from(area.width).saturating_sub(4);
    let title_style = if selected { palette.selected } else { palette.heading };
    let lines = vec![
        Line::styled(truncate_to_width(&hero.title, width), title_style),
        Line::styled(
            format!("{} · {}", hero.host_country, hero.degree_label()),
            palette.muted,
        ),
        empty_line(),
        Line::styled(truncate_to_width(hero.description.trim(), width * 2), palette.text),
        Line::styled(hero.headline_benefit().to_string(), palette.accent),
        Line::styled(hero.deadline_label(), palette.muted),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(palette.border)
                    .title(" Featured Scholarship "),
            ),
        area,
    );
}

/// The remaining featured items. `selected` counts the hero as 0.
fn render_more(frame: &mut Frame, area: Rect, rest: &[Scholarship], selected: usize, palette: Palette) {
    let mut lines = vec![Line::styled("More featured", palette.heading), empty_line()];
    for (offset, scholarship) in rest.iter().enumerate() {
        lines.extend(card_lines(scholarship, selected == offset + 1, area.width, palette));
    }
    let visible_from = selected.saturating_sub(1) * 4;
    let scroll = u16::try_from(visible_from).unwrap_or(u16::MAX);
    frame.render_widget(Paragraph::new(lines).scroll((scroll, 0)), area);
}

fn render_stats(frame: &mut Frame, area: Rect, state: &AppState, palette: Palette) {
    let countries = state
        .countries
        .loaded()
        .map(|c| format!("Scholarships in {} countries", c.len()))
        .unwrap_or_else(|| "Scholarships from around the world".to_string());
    let lines = vec![
        Line::styled(countries, palette.text),
        Line::styled("Press 2 to browse every scholarship, / to search", palette.muted),
    ];
    frame.render_widget(
        Paragraph::new(lines).block(Block::default().borders(Borders::TOP).border_style(palette.border)),
        area,
    );
}
