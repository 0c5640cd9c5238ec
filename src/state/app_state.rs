//! Application state and transitions.
//!
//! AppState is the root state type containing all UI state. Transitions never do I/O:
//! anything that needs data returns [`FetchJob`]s for the shell to dispatch, and the
//! shell feeds completed [`FetchOutcome`]s back through [`AppState::apply_outcome`].

use crate::client::{FetchJob, FetchOutcome};
use crate::model::{
    cycle_option, BenefitBracket, DegreeLevel, Filters, HostCountry, KeyAction, NewsArticle,
    Scholarship, ScholarshipId,
};
use crate::state::catalog::{CatalogController, Resolution};
use crate::state::query::resolve_location;
use crate::state::search_input_handler::{activate_search_input, SearchInput};
use crate::state::section::Section;
use std::fmt;
use std::str::FromStr;

// ===== Theme =====

/// Colour theme. A single value owned by [`AppState`] and handed to every renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    /// Light text on a dark background.
    #[default]
    Dark,
    /// Dark text on a light background.
    Light,
}

impl Theme {
    /// The other theme.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Config spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            other => Err(format!("unknown theme '{}' (expected dark or light)", other)),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ===== Screen =====

/// Which page is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Landing page with featured scholarships.
    Home,
    /// Searchable catalog.
    Scholarships,
    /// One scholarship.
    Detail(ScholarshipId),
    /// Headlines.
    News,
    /// About page.
    About,
    /// Privacy policy.
    Privacy,
    /// Terms of service.
    Terms,
    /// Cookie policy.
    Cookies,
}

impl Screen {
    /// Header label.
    pub fn title(self) -> &'static str {
        match self {
            Screen::Home => "Home",
            Screen::Scholarships => "Scholarships",
            Screen::Detail(_) => "Scholarship",
            Screen::News => "News",
            Screen::About => "About",
            Screen::Privacy => "Privacy Policy",
            Screen::Terms => "Terms of Service",
            Screen::Cookies => "Cookie Policy",
        }
    }

    /// Route a location path to a screen. Unknown paths land on Home.
    pub fn from_location(location: &str) -> Self {
        let Some(url) = resolve_location(location) else {
            return Screen::Home;
        };
        let segments: Vec<&str> = url
            .path()
            .split('/')
            .filter(|segment| !segment.is_empty())
            .collect();
        match segments.as_slice() {
            ["scholarships"] => Screen::Scholarships,
            ["scholarships", id] => id
                .parse::<u64>()
                .map(|id| Screen::Detail(ScholarshipId::new(id)))
                .unwrap_or(Screen::Scholarships),
            ["news", ..] => Screen::News,
            ["about"] => Screen::About,
            ["privacy-policy"] | ["privacy"] => Screen::Privacy,
            ["terms"] => Screen::Terms,
            ["cookies"] => Screen::Cookies,
            _ => Screen::Home,
        }
    }

    fn from_action(action: KeyAction) -> Option<Self> {
        match action {
            KeyAction::GoHome => Some(Screen::Home),
            KeyAction::GoScholarships => Some(Screen::Scholarships),
            KeyAction::GoNews => Some(Screen::News),
            KeyAction::GoAbout => Some(Screen::About),
            KeyAction::GoPrivacy => Some(Screen::Privacy),
            KeyAction::GoTerms => Some(Screen::Terms),
            KeyAction::GoCookies => Some(Screen::Cookies),
            _ => None,
        }
    }
}

// ===== AppState =====

/// Application state. Pure data, no side effects.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Screen on display.
    pub screen: Screen,
    /// Where `Back` returns to from the detail screen.
    back_to: Screen,
    /// Catalog query and results.
    pub catalog: CatalogController,
    /// Search box editing state.
    pub search_input: SearchInput,
    /// Options for the country filter.
    pub countries: Section<Vec<String>>,
    /// Home screen hero and featured list.
    pub featured: Section<Vec<Scholarship>>,
    /// Record on the detail screen.
    pub detail: Section<Scholarship>,
    /// Headlines on the news screen.
    pub news: Section<Vec<NewsArticle>>,
    news_enabled: bool,
    /// Selected card in the catalog.
    pub selected: usize,
    /// Selected entry on the home screen (0 = hero).
    pub featured_selected: usize,
    /// Vertical scroll of text screens.
    pub scroll: u16,
    /// Help overlay shown.
    pub help_visible: bool,
    /// Current colour theme.
    pub theme: Theme,
}

impl AppState {
    /// Build the initial state and the jobs needed to populate it.
    ///
    /// `location` picks the first screen. A catalog location also seeds the query.
    pub fn new(location: Option<&str>, theme: Theme, news_enabled: bool) -> (Self, Vec<FetchJob>) {
        let screen = location.map(Screen::from_location).unwrap_or(Screen::Home);
        let catalog_location = match (screen, location) {
            (Screen::Scholarships, Some(location)) => location,
            _ => "",
        };
        let (catalog, command) = CatalogController::initialize_from_location(catalog_location);

        let mut state = Self {
            screen: Screen::Home,
            back_to: Screen::Home,
            catalog,
            search_input: SearchInput::Idle,
            countries: Section::Loading,
            featured: Section::Loading,
            detail: Section::Idle,
            news: Section::Idle,
            news_enabled,
            selected: 0,
            featured_selected: 0,
            scroll: 0,
            help_visible: false,
            theme,
        };

        let mut jobs = vec![
            FetchJob::TopScholarships,
            FetchJob::Countries,
            FetchJob::Scholarships(command),
        ];
        jobs.extend(state.go_to(screen));
        (state, jobs)
    }

    /// Whether a news endpoint is configured.
    pub fn news_enabled(&self) -> bool {
        self.news_enabled
    }

    /// Navigable location of what is on screen.
    pub fn location(&self) -> String {
        match self.screen {
            Screen::Home => "/".to_string(),
            Screen::Scholarships => self.catalog.location(),
            Screen::Detail(id) => format!("/scholarships/{}", id),
            Screen::News => "/news".to_string(),
            Screen::About => "/about".to_string(),
            Screen::Privacy => "/privacy-policy".to_string(),
            Screen::Terms => "/terms".to_string(),
            Screen::Cookies => "/cookies".to_string(),
        }
    }

    /// Switch screens, requesting whatever the target screen still lacks.
    pub fn go_to(&mut self, screen: Screen) -> Vec<FetchJob> {
        self.scroll = 0;
        match screen {
            Screen::Detail(id) => return self.open_detail(id),
            Screen::News if self.news_enabled && (self.news.is_idle() || self.news.error().is_some()) => {
                self.screen = screen;
                self.news = Section::Loading;
                return vec![FetchJob::News];
            }
            _ => {}
        }
        self.screen = screen;
        Vec::new()
    }

    /// Show the detail screen for `id` and request the record.
    pub fn open_detail(&mut self, id: ScholarshipId) -> Vec<FetchJob> {
        if !matches!(self.screen, Screen::Detail(_)) {
            self.back_to = self.screen;
        }
        self.screen = Screen::Detail(id);
        self.scroll = 0;
        self.detail = Section::Loading;
        vec![FetchJob::Detail(id)]
    }

    /// Submit the search box text with the current filters.
    pub fn submit_search_text(&mut self, text: &str) -> Vec<FetchJob> {
        let filters = self.catalog.state().filters.clone();
        self.submit(text, filters)
    }

    fn submit_filters(&mut self, filters: Filters) -> Vec<FetchJob> {
        let text = self.catalog.state().query_text.clone();
        self.submit(&text, filters)
    }

    fn submit(&mut self, text: &str, filters: Filters) -> Vec<FetchJob> {
        self.selected = 0;
        vec![FetchJob::Scholarships(self.catalog.submit_search(text, filters))]
    }

    /// Apply a key action. `Quit` is handled by the shell and ignored here.
    pub fn handle_action(&mut self, action: KeyAction) -> Vec<FetchJob> {
        if let Some(screen) = Screen::from_action(action) {
            return self.go_to(screen);
        }

        match action {
            KeyAction::Help => {
                self.help_visible = !self.help_visible;
                Vec::new()
            }
            KeyAction::ToggleTheme => {
                self.theme = self.theme.toggled();
                Vec::new()
            }
            KeyAction::Back => {
                if self.help_visible {
                    self.help_visible = false;
                } else if matches!(self.screen, Screen::Detail(_)) {
                    self.screen = self.back_to;
                    self.scroll = 0;
                }
                Vec::new()
            }
            KeyAction::MoveUp => {
                self.move_selection(-1);
                Vec::new()
            }
            KeyAction::MoveDown => {
                self.move_selection(1);
                Vec::new()
            }
            KeyAction::OpenSelected => match self.selected_scholarship().map(|s| s.id) {
                Some(id) => self.open_detail(id),
                None => Vec::new(),
            },
            KeyAction::StartSearch => {
                self.screen = Screen::Scholarships;
                let current = self.catalog.state().query_text.clone();
                self.search_input =
                    activate_search_input(std::mem::take(&mut self.search_input), &current);
                Vec::new()
            }
            KeyAction::CycleDegree
            | KeyAction::CycleCountry
            | KeyAction::CycleBenefit
            | KeyAction::ClearFilters => self.change_filters(action),
            KeyAction::LoadMore if self.screen == Screen::Scholarships => {
                match self.catalog.request_next_page() {
                    Some(command) => vec![FetchJob::Scholarships(command)],
                    None => Vec::new(),
                }
            }
            KeyAction::Refresh => self.refresh(),
            _ => Vec::new(),
        }
    }

    fn change_filters(&mut self, action: KeyAction) -> Vec<FetchJob> {
        if self.screen != Screen::Scholarships {
            return Vec::new();
        }
        let current = self.catalog.state().filters.clone();
        let filters = match action {
            KeyAction::CycleDegree => {
                let next = cycle_option(current.degree_level.as_ref(), &DegreeLevel::ALL);
                current.with_degree_level(next)
            }
            KeyAction::CycleBenefit => {
                let next = cycle_option(current.financial_benefit.as_ref(), &BenefitBracket::ALL);
                current.with_financial_benefit(next)
            }
            KeyAction::CycleCountry => {
                let Some(names) = self.countries.loaded() else {
                    return Vec::new();
                };
                let options: Vec<HostCountry> =
                    names.iter().filter_map(|n| HostCountry::new(n.as_str())).collect();
                if options.is_empty() {
                    return Vec::new();
                }
                let next = cycle_option(current.host_country.as_ref(), &options);
                current.with_host_country(next)
            }
            KeyAction::ClearFilters if !current.is_empty() => Filters::default(),
            _ => return Vec::new(),
        };
        self.submit_filters(filters)
    }

    fn refresh(&mut self) -> Vec<FetchJob> {
        match self.screen {
            Screen::Home => {
                self.featured = Section::Loading;
                vec![FetchJob::TopScholarships]
            }
            Screen::Scholarships => {
                let mut jobs = Vec::new();
                if self.countries.error().is_some() {
                    self.countries = Section::Loading;
                    jobs.push(FetchJob::Countries);
                }
                // A failed "load more" is retried in place; anything else starts over.
                let command = if self.catalog.error().is_some() && !self.catalog.results().is_empty() {
                    self.catalog.request_next_page()
                } else if self.catalog.loading().is_none() {
                    self.selected = 0;
                    Some(self.catalog.refresh())
                } else {
                    None
                };
                jobs.extend(command.map(FetchJob::Scholarships));
                jobs
            }
            Screen::Detail(id) => self.open_detail(id),
            Screen::News if self.news_enabled => {
                self.news = Section::Loading;
                vec![FetchJob::News]
            }
            _ => Vec::new(),
        }
    }

    fn move_selection(&mut self, delta: i32) {
        let (cursor, len) = match self.screen {
            Screen::Scholarships => (&mut self.selected, self.catalog.results().len()),
            Screen::Home => (
                &mut self.featured_selected,
                self.featured.loaded().map_or(0, Vec::len),
            ),
            _ => {
                self.scroll = if delta < 0 {
                    self.scroll.saturating_sub(1)
                } else {
                    self.scroll.saturating_add(1)
                };
                return;
            }
        };
        if len == 0 {
            *cursor = 0;
        } else if delta < 0 {
            *cursor = cursor.saturating_sub(1);
        } else {
            *cursor = (*cursor + 1).min(len - 1);
        }
    }

    /// Scholarship under the cursor on the catalog or home screen.
    pub fn selected_scholarship(&self) -> Option<&Scholarship> {
        match self.screen {
            Screen::Scholarships => self.catalog.results().get(self.selected),
            Screen::Home => self
                .featured
                .loaded()
                .and_then(|items| items.get(self.featured_selected)),
            _ => None,
        }
    }

    /// Merge a completed fetch. Returns whether it was applied, failed or ignored.
    pub fn apply_outcome(&mut self, outcome: FetchOutcome) -> Resolution {
        match outcome {
            FetchOutcome::Scholarships { ticket, result } => {
                let resolution = self.catalog.on_fetch_resolved(ticket, result);
                let len = self.catalog.results().len();
                self.selected = self.selected.min(len.saturating_sub(1));
                resolution
            }
            FetchOutcome::Countries(result) => resolve_section(&mut self.countries, result),
            FetchOutcome::TopScholarships(result) => {
                let resolution = resolve_section(&mut self.featured, result);
                let len = self.featured.loaded().map_or(0, Vec::len);
                self.featured_selected = self.featured_selected.min(len.saturating_sub(1));
                resolution
            }
            FetchOutcome::Detail { id, result } => {
                if self.screen != Screen::Detail(id) || !self.detail.is_loading() {
                    return Resolution::Stale;
                }
                resolve_section(&mut self.detail, result)
            }
            FetchOutcome::News(result) => resolve_section(&mut self.news, result),
        }
    }
}

fn resolve_section<T>(
    section: &mut Section<T>,
    result: Result<T, crate::model::FetchError>,
) -> Resolution {
    let resolution = if result.is_ok() {
        Resolution::Applied
    } else {
        Resolution::Failed
    };
    section.resolve(result);
    resolution
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
