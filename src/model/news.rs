//! News headlines shown in the news section.

use crate::model::scholarship::null_as_default;
use serde::Deserialize;

/// Media attached to an article. Only the caption is rendered in a terminal.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewsMedia {
    /// Image URL. Not rendered.
    pub url: String,
    /// Caption shown in place of the image.
    #[serde(default)]
    pub caption: Option<String>,
    /// Credit line.
    #[serde(default)]
    pub copyright: Option<String>,
}

/// A news article as served by the news endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewsArticle {
    /// Headline.
    pub title: String,
    /// Link to the full article.
    pub url: String,
    /// Abstract; shown truncated.
    #[serde(default)]
    pub description: Option<String>,
    /// Publisher name.
    #[serde(default)]
    pub source: Option<String>,
    /// Publication date as served.
    #[serde(default)]
    pub published_at: Option<String>,
    /// Section label shown above the title.
    #[serde(default)]
    pub kicker: Option<String>,
    /// Places the article is about.
    #[serde(default, deserialize_with = "null_as_default")]
    pub geo_facet: Vec<String>,
    /// People the article is about.
    #[serde(default, deserialize_with = "null_as_default")]
    pub per_facet: Vec<String>,
    /// Attached media, lead item first.
    #[serde(default, deserialize_with = "null_as_default")]
    pub multimedia: Vec<NewsMedia>,
    /// Site path segment; articles without one get no sitemap entry.
    #[serde(default)]
    pub slug: Option<String>,
    /// Last modification, used as sitemap `lastmod`.
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Maximum description length on a headline card.
pub const DESCRIPTION_PREVIEW_CHARS: usize = 150;

impl NewsArticle {
    /// Description cut to [`DESCRIPTION_PREVIEW_CHARS`] characters, with "..." appended
    /// when anything was cut. Empty when there is no description.
    pub fn description_preview(&self) -> String {
        let Some(text) = self.description.as_deref() else {
            return String::new();
        };
        let mut chars = text.chars();
        let preview: String = chars.by_ref().take(DESCRIPTION_PREVIEW_CHARS).collect();
        if chars.next().is_some() {
            format!("{}...", preview)
        } else {
            preview
        }
    }

    /// Caption of the first attached media item, if any.
    pub fn lead_caption(&self) -> Option<&str> {
        self.multimedia.first().and_then(|m| m.caption.as_deref())
    }
}
