//! Scholarship catalog screen: search box, filter row, result cards and footer.

use super::constants::{CARD_HEIGHT, FILTER_ROW_HEIGHT, SEARCH_INPUT_HEIGHT, SKELETON_CARDS};
use super::helpers::truncate_to_width;
use super::search_input::SearchBox;
use super::styles::Palette;
use crate::model::{Filters, Scholarship};
use crate::state::{AppState, FetchMode};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Heading when a search matches nothing.
pub const EMPTY_TITLE: &str = "No scholarships found";
/// Second line of the empty state.
pub const EMPTY_HINT: &str = "Try adjusting your search criteria or filters";

/// Draw the catalog screen.
pub fn render(frame: &mut Frame, area: Rect, state: &AppState, palette: Palette) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(SEARCH_INPUT_HEIGHT),
            Constraint::Length(FILTER_ROW_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    let query_text = &state.catalog.state().query_text;
    frame.render_widget(
        SearchBox::new(&state.search_input, query_text, palette),
        chunks[0],
    );
    frame.render_widget(
        Paragraph::new(filter_line(&state.catalog.state().filters, palette)),
        chunks[1],
    );
    render_results(frame, chunks[2], state, palette);
    frame.render_widget(Paragraph::new(footer_line(state, palette)), chunks[3]);
}

fn filter_line(filters: &Filters, palette: Palette) -> Line<'static> {
    let value = |v: Option<&str>| v.unwrap_or("Any").to_string();
    Line::from(vec![
        Span::styled(" Degree ", palette.muted),
        Span::styled(value(filters.degree_level.map(|d| d.label())), palette.accent),
        Span::styled("  Country ", palette.muted),
        Span::styled(
            value(filters.host_country.as_ref().map(|c| c.as_str())),
            palette.accent,
        ),
        Span::styled("  Benefit ", palette.muted),
        Span::styled(
            value(filters.financial_benefit.map(|b| b.label())),
            palette.accent,
        ),
        Span::styled("   d/c/b cycle · x clear", palette.muted),
    ])
}

fn render_results(frame: &mut Frame, area: Rect, state: &AppState, palette: Palette) {
    let results = state.catalog.results();

    if results.is_empty() {
        let lines = if state.catalog.loading() == Some(FetchMode::Replace) {
            skeleton_lines(area.width, palette)
        } else if let Some(error) = state.catalog.error() {
            vec![
                Line::from(""),
                Line::styled("Failed to load scholarships", palette.error),
                Line::styled(error.to_string(), palette.muted),
                Line::styled("Press r to retry", palette.muted),
            ]
        } else {
            vec![
                Line::from(""),
                Line::styled(EMPTY_TITLE, palette.heading),
                Line::styled(EMPTY_HINT, palette.muted),
            ]
        };
        let alignment = if state.catalog.loading().is_some() {
            Alignment::Left
        } else {
            Alignment::Center
        };
        frame.render_widget(Paragraph::new(lines).alignment(alignment), area);
        return;
    }

    let visible = usize::from((area.height / CARD_HEIGHT).max(1));
    let first = state.selected.saturating_sub(visible - 1);
    let mut lines = Vec::new();
    for (index, scholarship) in results.items().iter().enumerate().skip(first).take(visible) {
        lines.extend(card_lines(
            scholarship,
            index == state.selected,
            area.width,
            palette,
        ));
    }
    frame.render_widget(Paragraph::new(lines), area);
}

/// Four lines: title, description, chips with benefit and deadline, spacer.
pub fn card_lines(
    scholarship: &Scholarship,
    selected: bool,
    width: u16,
    palette: Palette,
) -> Vec<Line<'static>> {
    let width = usize::from(width).saturating_sub(2);
    let marker = if selected { "▶ " } else { "  " };
    let title_style = if selected { palette.selected } else { palette.heading };

    let mut chips = Vec::new();
    for chip in [scholarship.degree_label(), scholarship.host_country.as_str()] {
        if !chip.trim().is_empty() {
            chips.push(Span::styled(format!(" {} ", chip.trim()), palette.chip));
            chips.push(Span::raw(" "));
        }
    }
    let benefit = scholarship.headline_benefit();
    if !benefit.is_empty() {
        chips.push(Span::styled(truncate_to_width(benefit, width / 2), palette.accent));
        chips.push(Span::raw("  "));
    }
    chips.push(Span::styled(scholarship.deadline_label(), palette.muted));

    let mut chip_line = vec![Span::raw("  ")];
    chip_line.extend(chips);

    vec![
        Line::from(vec![
            Span::styled(marker, title_style),
            Span::styled(truncate_to_width(&scholarship.title, width), title_style),
        ]),
        Line::styled(
            format!("  {}", truncate_to_width(scholarship.description.trim(), width)),
            palette.text,
        ),
        Line::from(chip_line),
        Line::from(""),
    ]
}

fn skeleton_lines(width: u16, palette: Palette) -> Vec<Line<'static>> {
    let bar = |fraction: usize| "░".repeat(usize::from(width) * fraction / 10);
    let mut lines = Vec::new();
    for _ in 0..SKELETON_CARDS {
        lines.push(Line::styled(format!("  {}", bar(5)), palette.skeleton));
        lines.push(Line::styled(format!("  {}", bar(8)), palette.skeleton));
        lines.push(Line::styled(format!("  {}", bar(3)), palette.skeleton));
        lines.push(Line::from(""));
    }
    lines
}

fn footer_line(state: &AppState, palette: Palette) -> Line<'static> {
    let catalog = &state.catalog;
    let shown = catalog.results().len();
    let total = catalog
        .results()
        .total_count()
        .map(|count| format!("Showing {} of {}", shown, count))
        .unwrap_or_default();

    match catalog.loading() {
        Some(FetchMode::Append) => return Line::styled(" Loading...", palette.accent),
        Some(FetchMode::Replace) if shown > 0 => return Line::styled(" Refreshing...", palette.accent),
        Some(FetchMode::Replace) => return Line::from(""),
        None => {}
    }

    if shown > 0 {
        if let Some(error) = catalog.error() {
            return Line::from(vec![
                Span::styled(format!(" Failed to load more: {}", error), palette.error),
                Span::styled("  (r to retry)", palette.muted),
            ]);
        }
    }

    if catalog.can_load_more() {
        Line::from(vec![
            Span::styled(" [ Load more ] ", palette.key_hint),
            Span::styled("press m  ", palette.muted),
            Span::styled(total, palette.muted),
        ])
    } else {
        Line::styled(format!(" {}", total), palette.muted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ResultPage;
    use crate::state::Theme;
    use crate::view::styles::ColorConfig;

    fn palette() -> Palette {
        Palette::new(Theme::Dark, ColorConfig::disabled())
    }

    fn text(lines: &[Line<'_>]) -> String {
        lines
            .iter()
            .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn card_shows_title_chips_and_deadline() {
        let mut s = Scholarship::new(1, "Erasmus Mundus");
        s.degree_level = "masters".to_string();
        s.host_country = "Germany".to_string();
        s.financial_benefits = Some("Full tuition".to_string());
        s.deadline = "2025-01-15".to_string();

        let rendered = text(&card_lines(&s, true, 80, palette()));
        assert!(rendered.contains("▶ Erasmus Mundus"));
        assert!(rendered.contains(" Masters "));
        assert!(rendered.contains(" Germany "));
        assert!(rendered.contains("Full tuition"));
        assert!(rendered.contains(&s.deadline_label()));
    }

    #[test]
    fn card_skips_blank_chips() {
        let s = Scholarship::new(2, "Open Grant");
        let lines = card_lines(&s, false, 80, palette());
        assert_eq!(lines.len(), usize::from(CARD_HEIGHT));
        assert!(!text(&lines).contains("▶"));
    }

    #[test]
    fn footer_offers_load_more_when_pages_remain() {
        let (mut state, jobs) = AppState::new(Some("/scholarships"), Theme::Dark, false);
        let ticket = jobs
            .iter()
            .find_map(|job| match job {
                crate::client::FetchJob::Scholarships(command) => Some(command.ticket),
                _ => None,
            })
            .unwrap();
        state.apply_outcome(crate::client::FetchOutcome::Scholarships {
            ticket,
            result: Ok(ResultPage {
                items: (1..=10).map(|i| Scholarship::new(i, format!("S{}", i))).collect(),
                total_count: 25,
                next: Some("next".to_string()),
                previous: None,
            }),
        });

        let footer = text(&[footer_line(&state, palette())]);
        assert!(footer.contains("Load more"));
        assert!(footer.contains("Showing 10 of 25"));
    }
}
