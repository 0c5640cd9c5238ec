//! Tests for AppState routing, dispatch and outcome handling.

use super::*;
use crate::model::{FetchError, ResultPage};
use crate::state::FetchMode;

fn scholarship(id: u64) -> Scholarship {
    Scholarship::new(id, format!("Scholarship {id}"))
}

fn result_page(ids: std::ops::Range<u64>, count: u64) -> ResultPage {
    ResultPage {
        items: ids.map(scholarship).collect(),
        total_count: count,
        next: None,
        previous: None,
    }
}

fn catalog_command(jobs: &[FetchJob]) -> crate::state::FetchCommand {
    jobs.iter()
        .find_map(|job| match job {
            FetchJob::Scholarships(command) => Some(command.clone()),
            _ => None,
        })
        .expect("a catalog fetch")
}

/// State on the catalog screen with page 1 of `count` results loaded.
fn catalog_loaded(count: u64) -> AppState {
    let (mut state, jobs) = AppState::new(Some("/scholarships"), Theme::Dark, false);
    let command = catalog_command(&jobs);
    state.apply_outcome(FetchOutcome::Scholarships {
        ticket: command.ticket,
        result: Ok(result_page(0..count.min(10), count)),
    });
    state
}

// ===== Theme =====

#[test]
fn theme_parses_case_insensitively() {
    assert_eq!("Light".parse::<Theme>(), Ok(Theme::Light));
    assert_eq!(" dark ".parse::<Theme>(), Ok(Theme::Dark));
    assert!("solarized".parse::<Theme>().is_err());
}

#[test]
fn toggle_theme_flips() {
    let (mut state, _) = AppState::new(None, Theme::Dark, false);
    state.handle_action(KeyAction::ToggleTheme);
    assert_eq!(state.theme, Theme::Light);
    state.handle_action(KeyAction::ToggleTheme);
    assert_eq!(state.theme, Theme::Dark);
}

// ===== Routing =====

#[test]
fn screen_from_location_routes_paths() {
    assert_eq!(Screen::from_location("/"), Screen::Home);
    assert_eq!(Screen::from_location("/scholarships?search=x"), Screen::Scholarships);
    assert_eq!(Screen::from_location("?search=x"), Screen::Scholarships);
    assert_eq!(
        Screen::from_location("/scholarships/42"),
        Screen::Detail(ScholarshipId::new(42))
    );
    assert_eq!(Screen::from_location("/scholarships/abc"), Screen::Scholarships);
    assert_eq!(Screen::from_location("/news/some-slug"), Screen::News);
    assert_eq!(Screen::from_location("/privacy-policy"), Screen::Privacy);
    assert_eq!(Screen::from_location("/nowhere"), Screen::Home);
}

#[test]
fn startup_without_location_shows_home_and_fetches_everything() {
    let (state, jobs) = AppState::new(None, Theme::Dark, false);
    assert_eq!(state.screen, Screen::Home);
    assert_eq!(state.location(), "/");
    assert!(jobs.contains(&FetchJob::TopScholarships));
    assert!(jobs.contains(&FetchJob::Countries));
    assert_eq!(catalog_command(&jobs).request.page, 1);
}

#[test]
fn startup_with_catalog_location_seeds_query() {
    let (state, jobs) = AppState::new(Some("?search=engineering&page=2"), Theme::Dark, false);
    assert_eq!(state.screen, Screen::Scholarships);
    assert_eq!(state.catalog.state().query_text, "engineering");
    assert_eq!(catalog_command(&jobs).request.page, 2);
    assert_eq!(state.location(), "/scholarships?search=engineering&page=2");
}

#[test]
fn startup_with_detail_location_requests_record() {
    let (state, jobs) = AppState::new(Some("/scholarships/7"), Theme::Dark, false);
    assert_eq!(state.screen, Screen::Detail(ScholarshipId::new(7)));
    assert!(jobs.contains(&FetchJob::Detail(ScholarshipId::new(7))));
    assert!(state.detail.is_loading());
}

#[test]
fn news_screen_fetches_once_when_enabled() {
    let (mut state, _) = AppState::new(None, Theme::Dark, true);
    assert_eq!(state.handle_action(KeyAction::GoNews), vec![FetchJob::News]);
    state.apply_outcome(FetchOutcome::News(Ok(vec![])));
    state.handle_action(KeyAction::GoHome);
    assert!(state.handle_action(KeyAction::GoNews).is_empty());
}

#[test]
fn news_screen_without_endpoint_fetches_nothing() {
    let (mut state, _) = AppState::new(None, Theme::Dark, false);
    assert!(state.handle_action(KeyAction::GoNews).is_empty());
    assert_eq!(state.screen, Screen::News);
}

// ===== Catalog interaction =====

#[test]
fn start_search_prefills_and_switches_screen() {
    let (mut state, _) = AppState::new(Some("?search=law"), Theme::Dark, false);
    state.handle_action(KeyAction::GoHome);
    state.handle_action(KeyAction::StartSearch);
    assert_eq!(state.screen, Screen::Scholarships);
    assert_eq!(
        state.search_input,
        SearchInput::Editing {
            text: "law".to_string(),
            cursor: 3
        }
    );
}

#[test]
fn submit_search_text_keeps_filters() {
    let mut state = catalog_loaded(25);
    let jobs = state.handle_action(KeyAction::CycleDegree);
    assert_eq!(
        catalog_command(&jobs).request.degree_level,
        Some(DegreeLevel::Undergraduate)
    );
    let jobs = state.submit_search_text("medicine");
    let request = catalog_command(&jobs).request;
    assert_eq!(request.query.as_deref(), Some("medicine"));
    assert_eq!(request.degree_level, Some(DegreeLevel::Undergraduate));
    assert_eq!(request.page, 1);
}

#[test]
fn cycle_country_requires_loaded_countries() {
    let mut state = catalog_loaded(25);
    assert!(state.handle_action(KeyAction::CycleCountry).is_empty());

    state.apply_outcome(FetchOutcome::Countries(Ok(vec![
        "Canada".to_string(),
        "Japan".to_string(),
    ])));
    let jobs = state.handle_action(KeyAction::CycleCountry);
    assert_eq!(
        catalog_command(&jobs).request.country,
        HostCountry::new("Canada")
    );
    assert_eq!(state.location(), "/scholarships?country=Canada");
}

#[test]
fn filter_keys_ignored_off_catalog() {
    let (mut state, _) = AppState::new(None, Theme::Dark, false);
    assert!(state.handle_action(KeyAction::CycleBenefit).is_empty());
}

#[test]
fn clear_filters_only_submits_when_something_is_set() {
    let mut state = catalog_loaded(25);
    assert!(state.handle_action(KeyAction::ClearFilters).is_empty());
    state.handle_action(KeyAction::CycleBenefit);
    let jobs = state.handle_action(KeyAction::ClearFilters);
    assert!(catalog_command(&jobs).request.financial_benefits.is_none());
}

#[test]
fn load_more_then_open_selected() {
    let mut state = catalog_loaded(25);
    let jobs = state.handle_action(KeyAction::LoadMore);
    let command = catalog_command(&jobs);
    assert_eq!(command.ticket.mode, FetchMode::Append);
    state.apply_outcome(FetchOutcome::Scholarships {
        ticket: command.ticket,
        result: Ok(result_page(10..20, 25)),
    });

    for _ in 0..12 {
        state.handle_action(KeyAction::MoveDown);
    }
    assert_eq!(state.selected, 12);
    let jobs = state.handle_action(KeyAction::OpenSelected);
    assert_eq!(jobs, vec![FetchJob::Detail(ScholarshipId::new(12))]);

    state.handle_action(KeyAction::Back);
    assert_eq!(state.screen, Screen::Scholarships);
}

#[test]
fn selection_clamps_to_results() {
    let mut state = catalog_loaded(3);
    for _ in 0..10 {
        state.handle_action(KeyAction::MoveDown);
    }
    assert_eq!(state.selected, 2);
    state.handle_action(KeyAction::MoveUp);
    assert_eq!(state.selected, 1);
}

#[test]
fn refresh_retries_failed_load_more_in_place() {
    let mut state = catalog_loaded(25);
    let command = catalog_command(&state.handle_action(KeyAction::LoadMore));
    state.apply_outcome(FetchOutcome::Scholarships {
        ticket: command.ticket,
        result: Err(FetchError::Network("offline".to_string())),
    });
    let retry = catalog_command(&state.handle_action(KeyAction::Refresh));
    assert_eq!(retry.request.page, 2);
    assert_eq!(retry.ticket.mode, FetchMode::Append);
}

#[test]
fn refresh_restarts_failed_initial_load() {
    let (mut state, jobs) = AppState::new(Some("/scholarships"), Theme::Dark, false);
    let command = catalog_command(&jobs);
    state.apply_outcome(FetchOutcome::Scholarships {
        ticket: command.ticket,
        result: Err(FetchError::Status {
            status: 500,
            url: "http://api/scholarships/".to_string(),
        }),
    });
    let retry = catalog_command(&state.handle_action(KeyAction::Refresh));
    assert_eq!(retry.ticket.mode, FetchMode::Replace);
    assert!(retry.ticket.version > command.ticket.version);
}

// ===== Outcomes =====

#[test]
fn stale_catalog_outcome_reported() {
    let (mut state, jobs) = AppState::new(Some("/scholarships"), Theme::Dark, false);
    let first = catalog_command(&jobs);
    let _second = state.submit_search_text("newer");
    let resolution = state.apply_outcome(FetchOutcome::Scholarships {
        ticket: first.ticket,
        result: Ok(result_page(0..10, 25)),
    });
    assert_eq!(resolution, Resolution::Stale);
    assert!(state.catalog.results().is_empty());
}

#[test]
fn detail_outcome_for_other_id_is_stale() {
    let (mut state, _) = AppState::new(None, Theme::Dark, false);
    state.open_detail(ScholarshipId::new(1));
    state.open_detail(ScholarshipId::new(2));
    let resolution = state.apply_outcome(FetchOutcome::Detail {
        id: ScholarshipId::new(1),
        result: Ok(scholarship(1)),
    });
    assert_eq!(resolution, Resolution::Stale);
    assert!(state.detail.is_loading());
}

#[test]
fn detail_back_returns_to_origin_screen() {
    let (mut state, _) = AppState::new(None, Theme::Dark, false);
    state.apply_outcome(FetchOutcome::TopScholarships(Ok(vec![
        scholarship(5),
        scholarship(6),
    ])));
    state.handle_action(KeyAction::MoveDown);
    let jobs = state.handle_action(KeyAction::OpenSelected);
    assert_eq!(jobs, vec![FetchJob::Detail(ScholarshipId::new(6))]);
    state.handle_action(KeyAction::Back);
    assert_eq!(state.screen, Screen::Home);
}

#[test]
fn failed_section_does_not_touch_others() {
    let (mut state, _) = AppState::new(None, Theme::Dark, false);
    let resolution = state.apply_outcome(FetchOutcome::TopScholarships(Err(
        FetchError::Network("down".to_string()),
    )));
    assert_eq!(resolution, Resolution::Failed);
    assert!(state.featured.error().is_some());
    assert!(state.countries.is_loading());
}

#[test]
fn help_toggles_and_back_closes_it() {
    let (mut state, _) = AppState::new(None, Theme::Dark, false);
    state.handle_action(KeyAction::Help);
    assert!(state.help_visible);
    state.handle_action(KeyAction::Back);
    assert!(!state.help_visible);
}
