//! News screen: "Top Headlines".

use super::helpers::empty_line;
use super::styles::Palette;
use crate::model::NewsArticle;
use crate::state::Section;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Title of the headline list.
pub const HEADING: &str = "Top Headlines";

/// Draw the news screen.
pub fn render(
    frame: &mut Frame,
    area: Rect,
    news: &Section<Vec<NewsArticle>>,
    enabled: bool,
    scroll: u16,
    palette: Palette,
) {
    let mut lines = vec![Line::styled(HEADING, palette.heading), empty_line()];

    if !enabled {
        lines.push(Line::styled("No news source is configured.", palette.muted));
        lines.push(Line::styled(
            "Set news_url in the config file or SCHOLAR_NEWS_URL.",
            palette.muted,
        ));
    } else {
        match news {
            Section::Loaded(articles) if articles.is_empty() => {
                lines.push(Line::styled("No headlines right now.", palette.muted));
            }
            Section::Loaded(articles) => {
                for article in articles {
                    lines.extend(article_lines(article, palette));
                }
            }
            Section::Failed(error) => {
                lines.push(Line::styled(format!("Failed to load news: {}", error), palette.error));
                lines.push(Line::styled("Press r to retry.", palette.muted));
            }
            Section::Idle | Section::Loading => {
                lines.push(Line::styled("Loading headlines...", palette.muted));
            }
        }
    }

    frame.render_widget(
        Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).border_style(palette.border))
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0)),
        area,
    );
}

/// Lines for one headline card.
pub fn article_lines(article: &NewsArticle, palette: Palette) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    if let Some(kicker) = article.kicker.as_deref().filter(|k| !k.trim().is_empty()) {
        lines.push(Line::styled(kicker.to_uppercase(), palette.accent));
    }
    lines.push(Line::styled(article.title.clone(), palette.heading));

    let preview = article.description_preview();
    if !preview.is_empty() {
        lines.push(Line::styled(preview, palette.text));
    }

    let facets: Vec<&str> = article
        .geo_facet
        .iter()
        .chain(&article.per_facet)
        .map(String::as_str)
        .collect();
    if !facets.is_empty() {
        let mut spans = Vec::new();
        for facet in facets {
            spans.push(Span::styled(format!(" {} ", facet), palette.chip));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
    }

    let byline: Vec<&str> = [article.source.as_deref(), article.published_at.as_deref()]
        .into_iter()
        .flatten()
        .filter(|part| !part.trim().is_empty())
        .collect();
    if !byline.is_empty() {
        lines.push(Line::styled(byline.join(" · "), palette.muted));
    }
    if let Some(caption) = article.lead_caption() {
        lines.push(Line::styled(format!("[image] {}", caption), palette.muted));
    }
    lines.push(empty_line());
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FetchError;
    use crate::state::Theme;
    use crate::view::styles::ColorConfig;
    use crate::view::test_support::buffer_to_string;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn article() -> NewsArticle {
        NewsArticle {
            title: "Visa rules eased for students".to_string(),
            url: "https://news.example/visa".to_string(),
            description: Some("x".repeat(200)),
            source: Some("The Times".to_string()),
            published_at: Some("2024-05-02".to_string()),
            kicker: Some("Education".to_string()),
            geo_facet: vec!["Canada".to_string()],
            per_facet: Vec::new(),
            multimedia: Vec::new(),
            slug: None,
            updated_at: None,
        }
    }

    fn rendered(news: &Section<Vec<NewsArticle>>, enabled: bool) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        let palette = Palette::new(Theme::Dark, ColorConfig::disabled());
        terminal
            .draw(|frame| render(frame, frame.area(), news, enabled, 0, palette))
            .unwrap();
        buffer_to_string(terminal.backend().buffer())
    }

    #[test]
    fn article_lines_truncate_description() {
        let lines = article_lines(&article(), Palette::new(Theme::Dark, ColorConfig::disabled()));
        let description: String = lines[2].spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(description.chars().count(), 153);
        assert!(description.ends_with("..."));
    }

    #[test]
    fn loaded_headlines_show_kicker_title_and_byline() {
        let text = rendered(&Section::Loaded(vec![article()]), true);
        assert!(text.contains(HEADING));
        assert!(text.contains("EDUCATION"));
        assert!(text.contains("Visa rules eased for students"));
        assert!(text.contains("Canada"));
        assert!(text.contains("The Times · 2024-05-02"));
    }

    #[test]
    fn lead_image_caption_is_rendered_as_text() {
        let mut with_media = article();
        with_media.multimedia = vec![crate::model::NewsMedia {
            url: "https://img.example/campus.jpg".to_string(),
            caption: Some("Students on campus".to_string()),
            copyright: None,
        }];
        let text = rendered(&Section::Loaded(vec![with_media]), true);
        assert!(text.contains("[image] Students on campus"));
    }

    #[test]
    fn disabled_news_explains_configuration() {
        let text = rendered(&Section::Idle, false);
        assert!(text.contains("No news source is configured."));
    }

    #[test]
    fn failed_news_shows_error() {
        let text = rendered(&Section::Failed(FetchError::Decode("bad".to_string())), true);
        assert!(text.contains("Failed to load news"));
    }
}
