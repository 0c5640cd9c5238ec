//! Structured catalog filters.
//!
//! The filter set is closed: exactly three optional dimensions. Wire values are parsed
//! strictly, so an unknown spelling is rejected instead of being stored.

use std::fmt;

// ===== DegreeLevel =====

/// Degree level facet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DegreeLevel {
    /// Undergraduate study.
    Undergraduate,
    /// Graduate study, unspecified.
    Graduate,
    /// Doctoral study.
    Phd,
    /// Master's degree.
    Masters,
    /// Bachelor's degree.
    Bachelors,
}

impl DegreeLevel {
    /// All variants in display order.
    pub const ALL: [DegreeLevel; 5] = [
        DegreeLevel::Undergraduate,
        DegreeLevel::Graduate,
        DegreeLevel::Phd,
        DegreeLevel::Masters,
        DegreeLevel::Bachelors,
    ];

    /// Value sent as the `degree_level` query parameter.
    pub fn as_param(self) -> &'static str {
        match self {
            DegreeLevel::Undergraduate => "undergraduate",
            DegreeLevel::Graduate => "graduate",
            DegreeLevel::Phd => "phd",
            DegreeLevel::Masters => "masters",
            DegreeLevel::Bachelors => "bachelors",
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            DegreeLevel::Undergraduate => "Undergraduate",
            DegreeLevel::Graduate => "Graduate",
            DegreeLevel::Phd => "PhD",
            DegreeLevel::Masters => "Masters",
            DegreeLevel::Bachelors => "Bachelors",
        }
    }

    /// Parse a wire value. Returns None for anything not in the domain.
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.as_param() == raw)
    }
}

impl fmt::Display for DegreeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ===== BenefitBracket =====

/// Financial benefit bracket facet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BenefitBracket {
    /// Less than $5,000.
    Under5000,
    /// $5,000 to $10,000.
    From5000To10000,
    /// $10,000 to $25,000.
    From10000To25000,
    /// More than $25,000.
    Over25000,
    /// Tuition fully covered.
    FullTuition,
}

impl BenefitBracket {
    /// All variants in display order.
    pub const ALL: [BenefitBracket; 5] = [
        BenefitBracket::Under5000,
        BenefitBracket::From5000To10000,
        BenefitBracket::From10000To25000,
        BenefitBracket::Over25000,
        BenefitBracket::FullTuition,
    ];

    /// Value sent as the `financial_benefits` query parameter.
    pub fn as_param(self) -> &'static str {
        match self {
            BenefitBracket::Under5000 => "under5000",
            BenefitBracket::From5000To10000 => "5000-10000",
            BenefitBracket::From10000To25000 => "10000-25000",
            BenefitBracket::Over25000 => "over25000",
            BenefitBracket::FullTuition => "fullTuition",
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            BenefitBracket::Under5000 => "Under $5,000",
            BenefitBracket::From5000To10000 => "$5,000 - $10,000",
            BenefitBracket::From10000To25000 => "$10,000 - $25,000",
            BenefitBracket::Over25000 => "Over $25,000",
            BenefitBracket::FullTuition => "Full Tuition",
        }
    }
}

impl fmt::Display for BenefitBracket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ===== HostCountry =====

/// Host country facet value. Never empty.
///
/// The valid set comes from the server's countries endpoint, so this is a free string
/// with a non-empty invariant rather than an enum.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HostCountry(String);

impl HostCountry {
    /// Smart constructor: trims and rejects empty input.
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    /// The country name as sent to the backend.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HostCountry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ===== Filters =====

/// The structured part of a catalog query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filters {
    /// Degree level, if restricted.
    pub degree_level: Option<DegreeLevel>,
    /// Host country, if restricted.
    pub host_country: Option<HostCountry>,
    /// Benefit bracket, if restricted.
    pub financial_benefit: Option<BenefitBracket>,
}

impl Filters {
    /// True when no dimension is set.
    pub fn is_empty(&self) -> bool {
        self.degree_level.is_none()
            && self.host_country.is_none()
            && self.financial_benefit.is_none()
    }

    /// Set or clear the degree level.
    pub fn with_degree_level(mut self, degree: Option<DegreeLevel>) -> Self {
        self.degree_level = degree;
        self
    }

    /// Set or clear the host country.
    pub fn with_host_country(mut self, country: Option<HostCountry>) -> Self {
        self.host_country = country;
        self
    }

    /// Set or clear the benefit bracket.
    pub fn with_financial_benefit(mut self, bracket: Option<BenefitBracket>) -> Self {
        self.financial_benefit = bracket;
        self
    }
}

/// Step through `None -> values[0] -> ... -> values[n-1] -> None`.
///
/// Used by the filter row to cycle a facet with a single key. A current value that is
/// not in `values` restarts the cycle at the first value.
pub fn cycle_option<T: Clone + PartialEq>(current: Option<&T>, values: &[T]) -> Option<T> {
    match current {
        None => values.first().cloned(),
        Some(value) => match values.iter().position(|v| v == value) {
            Some(idx) => values.get(idx + 1).cloned(),
            None => values.first().cloned(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degree_level_parses_every_wire_value() {
        for degree in DegreeLevel::ALL {
            assert_eq!(DegreeLevel::parse(degree.as_param()), Some(degree));
        }
    }

    #[test]
    fn degree_level_rejects_unknown_spelling() {
        assert_eq!(DegreeLevel::parse("PhD"), None);
        assert_eq!(DegreeLevel::parse("doctorate"), None);
        assert_eq!(DegreeLevel::parse(""), None);
    }

    #[test]
    fn benefit_bracket_wire_values_match_backend_contract() {
        let params: Vec<&str> = BenefitBracket::ALL.iter().map(|b| b.as_param()).collect();
        assert_eq!(
            params,
            vec!["under5000", "5000-10000", "10000-25000", "over25000", "fullTuition"]
        );
    }

    #[test]
    fn benefit_bracket_labels_are_distinct() {
        let mut labels: Vec<&str> = BenefitBracket::ALL.iter().map(|b| b.label()).collect();
        labels.dedup();
        assert_eq!(labels.len(), BenefitBracket::ALL.len());
    }

    #[test]
    fn host_country_rejects_blank() {
        assert!(HostCountry::new("").is_none());
        assert!(HostCountry::new("   ").is_none());
    }

    #[test]
    fn host_country_trims() {
        let country = HostCountry::new("  Germany ").unwrap();
        assert_eq!(country.as_str(), "Germany");
    }

    #[test]
    fn filters_default_is_empty() {
        assert!(Filters::default().is_empty());
        let filters = Filters::default().with_degree_level(Some(DegreeLevel::Phd));
        assert!(!filters.is_empty());
    }

    #[test]
    fn cycle_option_walks_values_then_returns_to_none() {
        let values = [1, 2, 3];
        assert_eq!(cycle_option(None, &values), Some(1));
        assert_eq!(cycle_option(Some(&1), &values), Some(2));
        assert_eq!(cycle_option(Some(&3), &values), None);
    }

    #[test]
    fn cycle_option_restarts_on_unknown_current() {
        let values = ["usa".to_string(), "uk".to_string()];
        let current = "canada".to_string();
        assert_eq!(cycle_option(Some(&current), &values), Some("usa".to_string()));
    }

    #[test]
    fn cycle_option_over_empty_values_is_none() {
        let values: [u8; 0] = [];
        assert_eq!(cycle_option(None, &values), None);
    }
}
