//! Headless tests for key routing and outcome handling in TuiApp.

use super::*;
use crate::client::{FetchOutcome, RecordingDispatcher};
use crate::model::{FetchError, ResultPage, Scholarship, ScholarshipId};
use crate::state::{FetchMode, Screen, Theme};
use crate::view::test_support::buffer_to_string;
use ratatui::backend::TestBackend;

type TestApp = TuiApp<TestBackend, RecordingDispatcher>;

fn new_app(location: Option<&str>) -> TestApp {
    let terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
    let (state, jobs) = AppState::new(location, Theme::Dark, true);
    TuiApp::new(
        terminal,
        state,
        jobs,
        RecordingDispatcher::new(),
        KeyBindings::default(),
        ColorConfig::disabled(),
    )
}

fn key(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
}

fn code(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn page(ids: std::ops::RangeInclusive<u64>, total: u64) -> ResultPage {
    ResultPage {
        items: ids.map(|i| Scholarship::new(i, format!("Scholarship {}", i))).collect(),
        total_count: total,
        next: None,
        previous: None,
    }
}

/// Ticket of the most recently dispatched catalog fetch.
fn last_catalog_ticket(app: &mut TestApp) -> crate::state::FetchTicket {
    app.dispatcher_mut()
        .jobs
        .iter()
        .rev()
        .find_map(|job| match job {
            FetchJob::Scholarships(command) => Some(command.ticket),
            _ => None,
        })
        .expect("a catalog fetch was dispatched")
}

#[test]
fn startup_dispatches_featured_countries_and_catalog() {
    let mut app = new_app(None);
    let jobs = &app.dispatcher_mut().jobs;
    assert!(jobs.contains(&FetchJob::TopScholarships));
    assert!(jobs.contains(&FetchJob::Countries));
    assert!(jobs.iter().any(|j| matches!(j, FetchJob::Scholarships(_))));
}

#[test]
fn q_quits_and_ctrl_c_quits_while_typing() {
    let mut app = new_app(None);
    assert!(app.handle_key(key('q')));

    let mut app2 = new_app(None);
    assert!(!app2.handle_key(key('/')));
    assert!(app2.app_state().search_input.is_editing());
    assert!(app2.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
}

#[test]
fn typing_q_in_search_box_does_not_quit() {
    let mut app = new_app(Some("/scholarships"));
    app.handle_key(key('/'));
    assert!(!app.handle_key(key('q')));
    assert_eq!(
        app.app_state().search_input,
        crate::state::SearchInput::Editing {
            text: "q".to_string(),
            cursor: 1
        }
    );
}

#[test]
fn enter_submits_search_and_dispatches_replace_fetch() {
    let mut app = new_app(Some("/scholarships"));
    app.handle_key(key('/'));
    for c in "law".chars() {
        app.handle_key(key(c));
    }
    app.handle_key(code(KeyCode::Enter));

    assert!(!app.app_state().search_input.is_editing());
    assert_eq!(app.app_state().catalog.state().query_text, "law");
    assert_eq!(app.app_state().location(), "/scholarships?search=law");
    let ticket = last_catalog_ticket(&mut app);
    assert_eq!(ticket.mode, FetchMode::Replace);
}

#[test]
fn esc_cancels_search_without_fetching() {
    let mut app = new_app(Some("/scholarships?search=math"));
    let before = app.dispatcher_mut().jobs.len();
    app.handle_key(key('/'));
    app.handle_key(key('x'));
    app.handle_key(code(KeyCode::Esc));

    assert!(!app.app_state().search_input.is_editing());
    assert_eq!(app.app_state().catalog.state().query_text, "math");
    assert_eq!(app.dispatcher_mut().jobs.len(), before);
}

#[test]
fn help_overlay_blocks_navigation_until_closed() {
    let mut app = new_app(None);
    app.handle_key(key('?'));
    assert!(app.app_state().help_visible);

    app.handle_key(key('2'));
    assert_eq!(app.app_state().screen, Screen::Home);

    app.handle_key(code(KeyCode::Esc));
    assert!(!app.app_state().help_visible);
    app.handle_key(key('2'));
    assert_eq!(app.app_state().screen, Screen::Scholarships);
}

#[test]
fn outcomes_are_applied_and_drawn() {
    let mut app = new_app(Some("/scholarships"));
    let ticket = last_catalog_ticket(&mut app);
    app.dispatcher_mut().complete(FetchOutcome::Scholarships {
        ticket,
        result: Ok(page(1..=10, 25)),
    });

    assert!(app.poll_outcomes());
    assert_eq!(app.app_state().catalog.results().len(), 10);

    app.draw().unwrap();
    let text = buffer_to_string(app.terminal().backend().buffer());
    assert!(text.contains("Scholarship 1"));
    assert!(text.contains("Load more"));
}

#[test]
fn load_more_appends_next_page() {
    let mut app = new_app(Some("/scholarships"));
    let ticket = last_catalog_ticket(&mut app);
    app.dispatcher_mut().complete(FetchOutcome::Scholarships {
        ticket,
        result: Ok(page(1..=10, 25)),
    });
    app.poll_outcomes();

    app.handle_key(key('m'));
    let next = last_catalog_ticket(&mut app);
    assert_eq!(next.mode, FetchMode::Append);
    assert_eq!(next.page.get(), 2);

    app.dispatcher_mut().complete(FetchOutcome::Scholarships {
        ticket: next,
        result: Ok(page(11..=20, 25)),
    });
    app.poll_outcomes();
    assert_eq!(app.app_state().catalog.results().len(), 20);
    assert_eq!(app.app_state().location(), "/scholarships?page=2");
}

#[test]
fn stale_page_from_superseded_search_is_ignored() {
    let mut app = new_app(Some("/scholarships"));
    let old = last_catalog_ticket(&mut app);

    app.handle_key(key('/'));
    app.handle_key(key('a'));
    app.handle_key(code(KeyCode::Enter));

    app.dispatcher_mut().complete(FetchOutcome::Scholarships {
        ticket: old,
        result: Ok(page(1..=10, 10)),
    });
    app.poll_outcomes();
    assert!(app.app_state().catalog.results().is_empty());
}

#[test]
fn enter_on_card_opens_detail_and_shows_error_text_on_failure() {
    let mut app = new_app(Some("/scholarships"));
    let ticket = last_catalog_ticket(&mut app);
    app.dispatcher_mut().complete(FetchOutcome::Scholarships {
        ticket,
        result: Ok(page(1..=3, 3)),
    });
    app.poll_outcomes();

    app.handle_key(key('j'));
    app.handle_key(code(KeyCode::Enter));
    let id = ScholarshipId::new(2);
    assert_eq!(app.app_state().screen, Screen::Detail(id));
    assert_eq!(app.dispatcher_mut().jobs.last(), Some(&FetchJob::Detail(id)));

    app.dispatcher_mut().complete(FetchOutcome::Detail {
        id,
        result: Err(FetchError::Network("down".to_string())),
    });
    app.poll_outcomes();
    app.draw().unwrap();
    let text = buffer_to_string(app.terminal().backend().buffer());
    assert!(text.contains("Failed to load scholarship details. Please try again later."));

    app.handle_key(code(KeyCode::Esc));
    assert_eq!(app.app_state().screen, Screen::Scholarships);
}

#[test]
fn theme_toggle_changes_state() {
    let mut app = new_app(None);
    app.handle_key(key('t'));
    assert_eq!(app.app_state().theme, Theme::Light);
    app.draw().unwrap();
}
