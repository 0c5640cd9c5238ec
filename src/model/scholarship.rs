//! Scholarship records as served by the backend.
//!
//! Owned and mutated only by the backend; once fetched these are immutable values.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use crate::model::DegreeLevel;
use serde::{Deserialize, Deserializer};
use std::fmt;

/// Backend primary key of a scholarship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(transparent)]
pub struct ScholarshipId(u64);

impl ScholarshipId {
    /// Wrap a raw id.
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw id.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ScholarshipId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Length of a study programme. Every part is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct StudyDuration {
    /// Whole years.
    #[serde(default)]
    pub years: Option<u32>,
    /// Additional months.
    #[serde(default)]
    pub months: Option<u32>,
    /// Additional weeks.
    #[serde(default)]
    pub weeks: Option<u32>,
    /// Additional days.
    #[serde(default)]
    pub days: Option<u32>,
}

impl StudyDuration {
    /// True when no part is set.
    pub fn is_empty(&self) -> bool {
        self.years.is_none() && self.months.is_none() && self.weeks.is_none() && self.days.is_none()
    }
}

impl fmt::Display for StudyDuration {
    /// Renders "2 years 6 months"; empty when no part is set.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts = [
            (self.years, "year"),
            (self.months, "month"),
            (self.weeks, "week"),
            (self.days, "day"),
        ];
        let rendered: Vec<String> = parts
            .iter()
            .filter_map(|(value, unit)| {
                value.map(|n| {
                    if n == 1 {
                        format!("{} {}", n, unit)
                    } else {
                        format!("{} {}s", n, unit)
                    }
                })
            })
            .collect();
        f.write_str(&rendered.join(" "))
    }
}

/// A scholarship record.
///
/// Only `id` and `title` are required on the wire; everything else defaults so a
/// partially populated record still decodes.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Scholarship {
    /// Backend primary key.
    pub id: ScholarshipId,
    /// Display name.
    pub title: String,
    /// Official application page.
    #[serde(default, deserialize_with = "null_as_default")]
    pub website_url: String,
    /// Site the listing was collected from.
    #[serde(default, deserialize_with = "null_as_default")]
    pub source_website: String,
    /// Summary paragraph.
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    /// Date the listing was published, as served.
    #[serde(default, deserialize_with = "null_as_default")]
    pub published_date: String,
    /// Country hosting the study.
    #[serde(default, deserialize_with = "null_as_default")]
    pub host_country: String,
    /// Degree level label as served.
    #[serde(default, deserialize_with = "null_as_default")]
    pub degree_level: String,
    /// Number of awards, when stated.
    #[serde(default)]
    pub number_of_scholarships: Option<u32>,
    /// Free-text summary of the money involved.
    #[serde(default)]
    pub financial_benefits: Option<String>,
    /// Application deadline as served; empty when unknown.
    #[serde(default, deserialize_with = "null_as_default")]
    pub deadline: String,
    /// When results are announced.
    #[serde(default)]
    pub results_date: Option<String>,
    /// What the award covers.
    #[serde(default, deserialize_with = "null_as_default")]
    pub benefits: Vec<String>,
    /// Length of the funded programme.
    #[serde(default, deserialize_with = "null_as_default")]
    pub duration: StudyDuration,
    /// Fields of study covered.
    #[serde(default, deserialize_with = "null_as_default")]
    pub study_programs: Vec<String>,
    /// Eligibility criteria.
    #[serde(default, deserialize_with = "null_as_default")]
    pub eligibility: Vec<String>,
    /// Documents the application needs.
    #[serde(default, deserialize_with = "null_as_default")]
    pub required_documents: Vec<String>,
    /// Application steps, in order.
    #[serde(default, deserialize_with = "null_as_default")]
    pub application_process: Vec<String>,
    /// Creation time; `None` when absent or unparseable.
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
    /// Last modification; `None` when absent or unparseable.
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub updated_at: Option<DateTime<Utc>>,
    /// Whether the listing is still open.
    #[serde(default = "default_active", deserialize_with = "null_as_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

/// Decode `null` as the type's default. `#[serde(default)]` alone only covers a
/// missing key.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn null_as_active<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or_else(default_active))
}

fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(parse_timestamp))
}

/// Parse a backend timestamp.
///
/// RFC 3339 first; a date-time or bare date without an offset is taken as UTC.
/// Anything else yields `None` rather than failing the whole record.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

impl Scholarship {
    /// Minimal record, used by tests and fixtures.
    pub fn new(id: u64, title: impl Into<String>) -> Self {
        Self {
            id: ScholarshipId::new(id),
            title: title.into(),
            website_url: String::new(),
            source_website: String::new(),
            description: String::new(),
            published_date: String::new(),
            host_country: String::new(),
            degree_level: String::new(),
            number_of_scholarships: None,
            financial_benefits: None,
            deadline: String::new(),
            results_date: None,
            benefits: Vec::new(),
            duration: StudyDuration::default(),
            study_programs: Vec::new(),
            eligibility: Vec::new(),
            required_documents: Vec::new(),
            application_process: Vec::new(),
            created_at: None,
            updated_at: None,
            is_active: true,
        }
    }

    /// Benefit shown on a card: the financial benefit text, else the first listed
    /// benefit, else a fallback.
    pub fn headline_benefit(&self) -> &str {
        match self.financial_benefits.as_deref() {
            Some(text) if !text.trim().is_empty() => text,
            _ => self
                .benefits
                .first()
                .map(String::as_str)
                .unwrap_or("Contact for details"),
        }
    }

    /// Human label for `degree_level`: the known facet's label, else the raw text.
    pub fn degree_label(&self) -> &str {
        let raw = self.degree_level.trim();
        DegreeLevel::parse(raw).map_or(raw, |d| d.label())
    }

    /// "Deadline: ..." when a deadline is known, else the publication date.
    pub fn deadline_label(&self) -> String {
        if self.deadline.trim().is_empty() {
            format!("Published: {}", self.published_date)
        } else {
            format!("Deadline: {}", self.deadline)
        }
    }
}

/// One page of the list endpoint: `{results, count, next, previous}`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ResultPage {
    /// Records on this page, in server order.
    #[serde(rename = "results")]
    pub items: Vec<Scholarship>,
    /// Matching records across all pages.
    #[serde(rename = "count")]
    pub total_count: u64,
    /// URL of the following page, if any.
    #[serde(default)]
    pub next: Option<String>,
    /// URL of the preceding page, if any.
    #[serde(default)]
    pub previous: Option<String>,
}

impl ResultPage {
    /// Number of pages for `total_count` at the given page size (ceiling division).
    pub fn total_pages(&self, page_size: u32) -> u32 {
        if page_size == 0 {
            return 0;
        }
        let pages = self.total_count.div_ceil(u64::from(page_size));
        u32::try_from(pages).unwrap_or(u32::MAX)
    }

    /// Whether the backend advertises a following page.
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }
}
