//! Scholarship detail screen.

use super::helpers::{bullet_section, empty_line, key_value_line};
use super::styles::Palette;
use crate::model::{FetchError, Scholarship};
use crate::state::Section;
use ratatui::{
    layout::Rect,
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Shown when the detail request fails for any reason but 404.
pub const LOAD_FAILED: &str = "Failed to load scholarship details. Please try again later.";

/// Draw the detail screen.
pub fn render(frame: &mut Frame, area: Rect, detail: &Section<Scholarship>, scroll: u16, palette: Palette) {
    let lines = match detail {
        Section::Loaded(scholarship) => detail_lines(scholarship, palette),
        Section::Failed(FetchError::NotFound { id }) => vec![
            Line::styled(format!("Scholarship {} not found", id), palette.error),
            Line::styled("It may have been removed. Press Esc to go back.", palette.muted),
        ],
        Section::Failed(_) => vec![
            Line::styled(LOAD_FAILED, palette.error),
            Line::styled("Press r to retry or Esc to go back.", palette.muted),
        ],
        Section::Idle | Section::Loading => {
            vec![Line::styled("Loading scholarship...", palette.muted)]
        }
    };

    frame.render_widget(
        Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).border_style(palette.border))
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0)),
        area,
    );
}

/// Every populated field of `s`, as lines.
pub fn detail_lines(s: &Scholarship, palette: Palette) -> Vec<Line<'static>> {
    let mut lines = vec![Line::styled(s.title.clone(), palette.heading)];

    let meta: Vec<&str> = [s.host_country.as_str(), s.degree_label(), s.source_website.as_str()]
        .into_iter()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect();
    if !meta.is_empty() {
        lines.push(Line::styled(meta.join(" · "), palette.muted));
    }
    lines.push(Line::styled(s.deadline_label(), palette.accent));
    if let Some(count) = s.number_of_scholarships {
        lines.push(key_value_line("Awards", &count.to_string(), palette.muted, palette.text));
    }
    if let Some(results) = s.results_date.as_deref().filter(|d| !d.trim().is_empty()) {
        lines.push(key_value_line("Results", results, palette.muted, palette.text));
    }
    lines.push(empty_line());

    if !s.description.trim().is_empty() {
        lines.push(Line::styled(s.description.trim().to_string(), palette.text));
        lines.push(empty_line());
    }

    if let Some(financial) = s.financial_benefits.as_deref().filter(|f| !f.trim().is_empty()) {
        lines.push(Line::styled("Financial Benefits", palette.heading));
        lines.push(Line::styled(format!("  {}", financial.trim()), palette.accent));
        lines.push(empty_line());
    }

    lines.extend(bullet_section("Benefits", &s.benefits, palette.heading, palette.text));
    lines.extend(bullet_section("Eligibility", &s.eligibility, palette.heading, palette.text));
    lines.extend(bullet_section(
        "Required Documents",
        &s.required_documents,
        palette.heading,
        palette.text,
    ));

    if !s.application_process.is_empty() {
        lines.push(Line::styled("Application Process", palette.heading));
        for (step, text) in s.application_process.iter().enumerate() {
            lines.push(Line::styled(format!("  {}. {}", step + 1, text), palette.text));
        }
        lines.push(empty_line());
    }

    lines.extend(bullet_section(
        "Study Programs",
        &s.study_programs,
        palette.heading,
        palette.text,
    ));

    if !s.duration.is_empty() {
        lines.push(key_value_line("Duration", &s.duration.to_string(), palette.muted, palette.text));
    }
    if !s.website_url.trim().is_empty() {
        lines.push(key_value_line("Website", s.website_url.trim(), palette.muted, palette.accent));
    }
    lines
}
