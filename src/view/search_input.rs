//! Search box widget for the catalog screen.

use crate::state::SearchInput;
use crate::view::styles::Palette;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Renders the search box: an editable field while typing, otherwise the submitted query.
pub struct SearchBox<'a> {
    input: &'a SearchInput,
    submitted: &'a str,
    palette: Palette,
}

impl<'a> SearchBox<'a> {
    /// Widget for `input`; `submitted` is shown while idle.
    pub fn new(input: &'a SearchInput, submitted: &'a str, palette: Palette) -> Self {
        Self {
            input,
            submitted,
            palette,
        }
    }
}

impl Widget for SearchBox<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (line, title) = match self.input {
            SearchInput::Editing { text, cursor } => {
                let before: String = text.chars().take(*cursor).collect();
                let mut after = text.chars().skip(*cursor);
                let cursor_char = after.next().map(String::from).unwrap_or_else(|| " ".to_string());
                let rest: String = after.collect();

                let line = Line::from(vec![
                    Span::styled(before, self.palette.text),
                    Span::styled(cursor_char, self.palette.selected.add_modifier(Modifier::REVERSED)),
                    Span::styled(rest, self.palette.text),
                ]);
                (line, " Search (Enter to submit, Esc to cancel) ")
            }
            SearchInput::Idle if self.submitted.is_empty() => (
                Line::styled("Search scholarships...  (press /)", self.palette.muted),
                " Search ",
            ),
            SearchInput::Idle => (Line::styled(self.submitted.to_string(), self.palette.text), " Search "),
        };

        Paragraph::new(line)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(self.palette.border)
                    .title(title),
            )
            .render(area, buf);
    }
}
