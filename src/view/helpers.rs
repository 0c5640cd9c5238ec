//! Small line-building helpers shared by the screen renderers.

use ratatui::style::Style;
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthChar;

/// Blank spacer line.
pub fn empty_line() -> Line<'static> {
    Line::from("")
}

/// `label: value` with the label styled separately.
pub fn key_value_line(label: &str, value: &str, label_style: Style, value_style: Style) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{}: ", label), label_style),
        Span::styled(value.to_string(), value_style),
    ])
}

/// Section heading followed by a bullet per item. Empty lists render nothing.
pub fn bullet_section(title: &str, items: &[String], heading: Style, text: Style) -> Vec<Line<'static>> {
    if items.is_empty() {
        return Vec::new();
    }
    let mut lines = vec![Line::styled(title.to_string(), heading)];
    lines.extend(
        items
            .iter()
            .map(|item| Line::styled(format!("  • {}", item), text)),
    );
    lines.push(empty_line());
    lines
}

/// Cut `text` to at most `max_width` terminal columns, ending with `…` when cut.
///
/// Uses display width, so wide characters count double.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    let mut width = 0;
    let mut out = String::new();
    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        let w = ch.width().unwrap_or(0);
        let needs_ellipsis = chars.peek().is_some();
        let budget = if needs_ellipsis { max_width.saturating_sub(1) } else { max_width };
        if width + w > budget {
            out.push('…');
            return out;
        }
        width += w;
        out.push(ch);
    }
    out
}
