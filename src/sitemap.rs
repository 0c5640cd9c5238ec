//! Sitemap XML generation for the public site.
//!
//! Rendering is pure: [`entries`] turns records into [`SitemapEntry`] values and
//! [`render`] writes them out. [`collect`] is the impure half that pulls the records
//! from the backend.

use crate::client::{NewsClient, ScholarshipClient};
use crate::model::{FetchError, NewsArticle, Scholarship};
use chrono::SecondsFormat;
use std::fmt::{self, Write as _};
use tracing::{info, warn};

/// How often a page is expected to change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeFreq {
    /// `daily`
    Daily,
    /// `weekly`
    Weekly,
    /// `monthly`
    Monthly,
}

impl fmt::Display for ChangeFreq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ChangeFreq::Daily => "daily",
            ChangeFreq::Weekly => "weekly",
            ChangeFreq::Monthly => "monthly",
        })
    }
}

/// One `<url>` element.
#[derive(Debug, Clone, PartialEq)]
pub struct SitemapEntry {
    /// Absolute page URL.
    pub loc: String,
    /// Last modification; omitted from the XML when unknown.
    pub lastmod: Option<String>,
    /// Expected change frequency.
    pub changefreq: ChangeFreq,
    /// Rendered with one decimal place.
    pub priority: f32,
}

/// Fixed pages: path, change frequency, priority.
const STATIC_PAGES: [(&str, ChangeFreq, f32); 6] = [
    ("", ChangeFreq::Daily, 1.0),
    ("/about", ChangeFreq::Monthly, 0.8),
    ("/contact", ChangeFreq::Monthly, 0.8),
    ("/privacy-policy", ChangeFreq::Monthly, 0.5),
    ("/terms", ChangeFreq::Monthly, 0.5),
    ("/cookies", ChangeFreq::Monthly, 0.5),
];

/// Build entries for static pages, every scholarship and every article with a slug.
pub fn entries(
    site_url: &str,
    scholarships: &[Scholarship],
    articles: &[NewsArticle],
) -> Vec<SitemapEntry> {
    let site = site_url.trim_end_matches('/');

    let static_pages = STATIC_PAGES
        .iter()
        .map(|(path, changefreq, priority)| SitemapEntry {
            loc: format!("{}{}", site, path),
            lastmod: None,
            changefreq: *changefreq,
            priority: *priority,
        });

    let scholarship_pages = scholarships.iter().map(|s| SitemapEntry {
        loc: format!("{}/scholarships/{}", site, s.id),
        lastmod: s
            .updated_at
            .map(|t| t.to_rfc3339_opts(SecondsFormat::Secs, true)),
        changefreq: ChangeFreq::Weekly,
        priority: 0.9,
    });

    let news_pages = articles.iter().filter_map(|a| {
        let slug = a.slug.as_deref().map(str::trim).filter(|s| !s.is_empty())?;
        Some(SitemapEntry {
            loc: format!("{}/news/{}", site, slug),
            lastmod: a.updated_at.clone(),
            changefreq: ChangeFreq::Weekly,
            priority: 0.7,
        })
    });

    static_pages
        .chain(scholarship_pages)
        .chain(news_pages)
        .collect()
}

/// Escape the five XML special characters.
pub fn xml_escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            other => out.push(other),
        }
    }
    out
}

/// Serialize entries as a sitemap document.
pub fn render(entries: &[SitemapEntry]) -> String {
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );
    for entry in entries {
        // Writing to a String cannot fail.
        let _ = writeln!(xml, "  <url>");
        let _ = writeln!(xml, "    <loc>{}</loc>", xml_escape(&entry.loc));
        if let Some(lastmod) = &entry.lastmod {
            let _ = writeln!(xml, "    <lastmod>{}</lastmod>", xml_escape(lastmod));
        }
        let _ = writeln!(xml, "    <changefreq>{}</changefreq>", entry.changefreq);
        let _ = writeln!(xml, "    <priority>{:.1}</priority>", entry.priority);
        let _ = writeln!(xml, "  </url>");
    }
    xml.push_str("</urlset>\n");
    xml
}

/// Convenience wrapper: [`entries`] then [`render`].
pub fn render_sitemap(
    site_url: &str,
    scholarships: &[Scholarship],
    articles: &[NewsArticle],
) -> String {
    render(&entries(site_url, scholarships, articles))
}

/// Fetch everything the sitemap lists.
///
/// The scholarship list is required. News is optional: a failed headlines request is
/// logged and the sitemap is produced without news pages.
pub async fn collect(
    client: &ScholarshipClient,
    news: Option<&NewsClient>,
) -> Result<(Vec<Scholarship>, Vec<NewsArticle>), FetchError> {
    let scholarships = client.fetch_all_scholarships().await?;
    let articles = match news {
        Some(news) => match news.fetch_headlines().await {
            Ok(articles) => articles,
            Err(e) => {
                warn!(error = %e, endpoint = news.endpoint(), "Skipping news pages in sitemap");
                Vec::new()
            }
        },
        None => Vec::new(),
    };
    info!(
        scholarships = scholarships.len(),
        articles = articles.len(),
        "Collected sitemap records"
    );
    Ok((scholarships, articles))
}
