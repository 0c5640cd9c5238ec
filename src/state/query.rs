//! Canonical catalog query and its two derivations: the navigable location and the
//! backend fetch request.
//!
//! [`SearchState`] is the single source of truth. A location string is only ever an
//! input that gets parsed back into a `SearchState`; it is never consulted afterwards.

use crate::model::{BenefitBracket, DegreeLevel, Filters, HostCountry};
use reqwest::Url;
use std::num::NonZeroU32;

/// Results per backend page.
pub const PAGE_SIZE: u32 = 10;

/// Path of the catalog in rendered locations.
pub const CATALOG_PATH: &str = "/scholarships";

/// Origin used to resolve relative locations. Never rendered.
const LOCATION_ORIGIN: &str = "http://scholar.local/scholarships";

// ===== SearchState =====

/// The query the user has expressed: free text, filters and the page number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchState {
    /// Trimmed free text. Empty means "no text search".
    pub query_text: String,
    /// Structured filters.
    pub filters: Filters,
    /// Current page, starting at 1.
    pub page: NonZeroU32,
}

impl Default for SearchState {
    fn default() -> Self {
        Self {
            query_text: String::new(),
            filters: Filters::default(),
            page: NonZeroU32::MIN,
        }
    }
}

impl SearchState {
    /// Page-1 state for the given text and filters.
    pub fn new(query_text: &str, filters: Filters) -> Self {
        Self {
            query_text: query_text.trim().to_string(),
            filters,
            page: NonZeroU32::MIN,
        }
    }

    /// Parse a navigable location.
    ///
    /// Accepts a bare query (`?search=x` or `search=x`), a path with a query
    /// (`/scholarships?search=x`) or an absolute URL. Only `search`, `country` and
    /// `page` are read; anything malformed is treated as absent.
    ///
    /// ```
    /// use scholar::state::SearchState;
    ///
    /// let state = SearchState::from_location("?search=engineering&country=usa&page=2");
    /// assert_eq!(state.query_text, "engineering");
    /// assert_eq!(state.page.get(), 2);
    /// ```
    pub fn from_location(location: &str) -> Self {
        let Some(url) = resolve_location(location) else {
            return Self::default();
        };

        let mut search = None;
        let mut country = None;
        let mut page = None;
        // First occurrence of a key wins.
        for (key, value) in url.query_pairs() {
            match key.as_ref() {
                "search" if search.is_none() => search = Some(value.into_owned()),
                "country" if country.is_none() => country = Some(value.into_owned()),
                "page" if page.is_none() => page = Some(value.into_owned()),
                _ => {}
            }
        }

        Self {
            query_text: search.map(|s| s.trim().to_string()).unwrap_or_default(),
            filters: Filters::default().with_host_country(country.and_then(HostCountry::new)),
            page: page.as_deref().and_then(parse_page).unwrap_or(NonZeroU32::MIN),
        }
    }

    /// Render the navigable location: `/scholarships` plus `search`, `country` and
    /// `page`, each omitted when empty (page omitted when 1).
    pub fn location(&self) -> String {
        let mut pairs: Vec<(&str, String)> = Vec::new();
        if !self.query_text.is_empty() {
            pairs.push(("search", self.query_text.clone()));
        }
        if let Some(country) = &self.filters.host_country {
            pairs.push(("country", country.as_str().to_string()));
        }
        if self.page.get() > 1 {
            pairs.push(("page", self.page.to_string()));
        }
        if pairs.is_empty() {
            return CATALOG_PATH.to_string();
        }

        let Ok(mut url) = Url::parse(LOCATION_ORIGIN) else {
            return CATALOG_PATH.to_string();
        };
        url.query_pairs_mut().extend_pairs(pairs);
        match url.query() {
            Some(query) => format!("{}?{}", CATALOG_PATH, query),
            None => CATALOG_PATH.to_string(),
        }
    }

    /// Backend request for the current page.
    pub fn to_fetch_request(&self) -> FetchRequest {
        FetchRequest {
            page: self.page.get(),
            page_size: PAGE_SIZE,
            query: (!self.query_text.is_empty()).then(|| self.query_text.clone()),
            degree_level: self.filters.degree_level,
            country: self.filters.host_country.clone(),
            financial_benefits: self.filters.financial_benefit,
        }
    }
}

/// Resolve any accepted location form against the catalog origin.
pub(crate) fn resolve_location(location: &str) -> Option<Url> {
    let trimmed = location.trim();
    let base = Url::parse(LOCATION_ORIGIN).ok()?;
    let looks_like_query = !trimmed.contains('?')
        && !trimmed.starts_with('/')
        && !trimmed.contains("://")
        && trimmed.contains('=');
    if looks_like_query {
        base.join(&format!("?{}", trimmed)).ok()
    } else {
        base.join(trimmed).ok()
    }
}

fn parse_page(raw: &str) -> Option<NonZeroU32> {
    raw.trim().parse::<u32>().ok().and_then(NonZeroU32::new)
}

// ===== FetchRequest =====

/// Parameters of one list-endpoint call. Only non-empty filters are carried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    /// 1-based page number.
    pub page: u32,
    /// Always [`PAGE_SIZE`].
    pub page_size: u32,
    /// `search` parameter.
    pub query: Option<String>,
    /// `degree_level` parameter.
    pub degree_level: Option<DegreeLevel>,
    /// `country` parameter.
    pub country: Option<HostCountry>,
    /// `financial_benefits` parameter.
    pub financial_benefits: Option<BenefitBracket>,
}

impl FetchRequest {
    /// Query parameters in the order the backend documents them.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("page", self.page.to_string()),
            ("page_size", self.page_size.to_string()),
        ];
        if let Some(query) = &self.query {
            pairs.push(("search", query.clone()));
        }
        if let Some(degree) = self.degree_level {
            pairs.push(("degree_level", degree.as_param().to_string()));
        }
        if let Some(country) = &self.country {
            pairs.push(("country", country.as_str().to_string()));
        }
        if let Some(bracket) = self.financial_benefits {
            pairs.push(("financial_benefits", bracket.as_param().to_string()));
        }
        pairs
    }
}

#[cfg(test)]
#[path = "query_tests.rs"]
mod tests;
