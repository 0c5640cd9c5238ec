//! Tests for location parsing/rendering and fetch request derivation.

use super::*;

fn country(name: &str) -> Option<HostCountry> {
    HostCountry::new(name)
}

// ===== from_location =====

#[test]
fn empty_location_gives_defaults() {
    assert_eq!(SearchState::from_location(""), SearchState::default());
    assert_eq!(SearchState::from_location("/scholarships"), SearchState::default());
}

#[test]
fn reads_search_country_and_page() {
    let state = SearchState::from_location("?search=engineering&country=usa&page=2");
    assert_eq!(state.query_text, "engineering");
    assert_eq!(state.filters.host_country, country("usa"));
    assert_eq!(state.page.get(), 2);
}

#[test]
fn accepts_path_absolute_and_bare_forms() {
    let expected = SearchState::from_location("?search=law");
    assert_eq!(SearchState::from_location("/scholarships?search=law"), expected);
    assert_eq!(
        SearchState::from_location("https://globalscholarships.com/scholarships?search=law"),
        expected
    );
    assert_eq!(SearchState::from_location("search=law"), expected);
}

#[test]
fn malformed_page_falls_back_to_one() {
    for raw in ["?page=0", "?page=-3", "?page=abc", "?page=2.5", "?page="] {
        assert_eq!(SearchState::from_location(raw).page.get(), 1, "input {raw}");
    }
}

#[test]
fn blank_values_are_absent() {
    let state = SearchState::from_location("?search=%20%20&country=");
    assert_eq!(state.query_text, "");
    assert!(state.filters.host_country.is_none());
}

#[test]
fn unrecognized_parameters_are_ignored() {
    let state = SearchState::from_location("?degree_level=phd&sort=asc&search=art");
    assert_eq!(state.query_text, "art");
    assert!(state.filters.degree_level.is_none());
}

#[test]
fn first_occurrence_wins() {
    let state = SearchState::from_location("?search=first&search=second");
    assert_eq!(state.query_text, "first");
}

#[test]
fn decodes_percent_and_plus() {
    let state = SearchState::from_location("?search=computer+science&country=United%20Kingdom");
    assert_eq!(state.query_text, "computer science");
    assert_eq!(state.filters.host_country, country("United Kingdom"));
}

// ===== location =====

#[test]
fn default_location_is_bare_path() {
    assert_eq!(SearchState::default().location(), "/scholarships");
}

#[test]
fn location_omits_page_one() {
    let state = SearchState::new(
        "engineering",
        Filters::default().with_host_country(country("usa")),
    );
    assert_eq!(state.location(), "/scholarships?search=engineering&country=usa");
}

#[test]
fn location_includes_later_pages() {
    let mut state = SearchState::new("", Filters::default());
    state.page = NonZeroU32::new(3).unwrap();
    assert_eq!(state.location(), "/scholarships?page=3");
}

#[test]
fn location_round_trips() {
    let mut state = SearchState::new(
        "data & ai",
        Filters::default().with_host_country(country("Côte d'Ivoire")),
    );
    state.page = NonZeroU32::new(4).unwrap();
    assert_eq!(SearchState::from_location(&state.location()), state);
}

#[test]
fn new_trims_query_text() {
    assert_eq!(SearchState::new("  law  ", Filters::default()).query_text, "law");
}

// ===== to_fetch_request =====

#[test]
fn default_request_carries_only_paging() {
    let request = SearchState::default().to_fetch_request();
    assert_eq!(
        request.query_pairs(),
        vec![("page", "1".to_string()), ("page_size", "10".to_string())]
    );
}

#[test]
fn request_includes_every_set_filter() {
    let filters = Filters::default()
        .with_degree_level(Some(DegreeLevel::Masters))
        .with_host_country(country("Germany"))
        .with_financial_benefit(Some(BenefitBracket::FullTuition));
    let request = SearchState::new("medicine", filters).to_fetch_request();
    assert_eq!(
        request.query_pairs(),
        vec![
            ("page", "1".to_string()),
            ("page_size", "10".to_string()),
            ("search", "medicine".to_string()),
            ("degree_level", "masters".to_string()),
            ("country", "Germany".to_string()),
            ("financial_benefits", "fullTuition".to_string()),
        ]
    );
}
