//! Query-state controller for the scholarship catalog.
//!
//! Owns the [`SearchState`] and the [`AccumulatedResults`] built under it, and decides
//! which fetches to issue. It never performs I/O: every operation that needs data
//! returns a [`FetchCommand`] for the shell to execute, and the shell reports back
//! through [`CatalogController::on_fetch_resolved`].
//!
//! # Stale responses
//!
//! Network calls are never cancelled, so results can arrive out of order. Every
//! command carries a [`FetchTicket`] with a strictly increasing version, and only the
//! ticket of the most recently issued command is applied. Anything else resolves as
//! [`Resolution::Stale`] and leaves state untouched.

use crate::model::{FetchError, Filters, ResultPage};
use crate::state::query::{FetchRequest, SearchState, PAGE_SIZE};
use crate::state::results::{AccumulatedResults, FetchMode};
use std::num::NonZeroU32;

/// Identity of one issued fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FetchTicket {
    /// Issue order; only the newest version is applied.
    pub version: u64,
    /// Page requested.
    pub page: NonZeroU32,
    /// How the page will be merged.
    pub mode: FetchMode,
}

/// A fetch the shell must execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchCommand {
    /// Identity to report back with.
    pub ticket: FetchTicket,
    /// What to send to the backend.
    pub request: FetchRequest,
}

/// Outcome of reporting a fetch result to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Results merged.
    Applied,
    /// The fetch failed; results unchanged, error recorded.
    Failed,
    /// Superseded by a newer fetch; ignored.
    Stale,
}

/// Query-state controller: owns the query, the results, and the fetch in flight.
#[derive(Debug, Clone)]
pub struct CatalogController {
    state: SearchState,
    results: AccumulatedResults,
    version: u64,
    in_flight: Option<FetchTicket>,
    /// Highest page merged under the current state.
    loaded_page: Option<NonZeroU32>,
    error: Option<FetchError>,
}

impl CatalogController {
    /// Build the controller from a navigable location and issue the initial fetch.
    ///
    /// A location naming page N fetches page N alone, replacing the (empty) results.
    pub fn initialize_from_location(location: &str) -> (Self, FetchCommand) {
        let mut controller = Self {
            state: SearchState::from_location(location),
            results: AccumulatedResults::new(),
            version: 0,
            in_flight: None,
            loaded_page: None,
            error: None,
        };
        let command = controller.issue(FetchMode::Replace);
        (controller, command)
    }

    /// Replace text and filters, reset to page 1 and discard accumulated results.
    pub fn submit_search(&mut self, text: &str, filters: Filters) -> FetchCommand {
        self.state = SearchState::new(text, filters);
        self.results = AccumulatedResults::new();
        self.issue(FetchMode::Replace)
    }

    /// Fetch the following page, or re-request the current page when its fetch failed.
    ///
    /// Returns `None` without touching state while a fetch is in flight, before the
    /// page count is known, or when the last page has already been merged.
    pub fn request_next_page(&mut self) -> Option<FetchCommand> {
        if !self.can_load_more() {
            return None;
        }
        if self.current_page_loaded() {
            self.state.page = self.state.page.checked_add(1)?;
            Some(self.issue(FetchMode::Append))
        } else {
            let mode = if self.loaded_page.is_some() {
                FetchMode::Append
            } else {
                FetchMode::Replace
            };
            Some(self.issue(mode))
        }
    }

    /// Re-issue page 1 of the current query, replacing results on success.
    pub fn refresh(&mut self) -> FetchCommand {
        self.state.page = NonZeroU32::MIN;
        self.issue(FetchMode::Replace)
    }

    /// Report the result of a previously issued fetch.
    pub fn on_fetch_resolved(
        &mut self,
        ticket: FetchTicket,
        result: Result<ResultPage, FetchError>,
    ) -> Resolution {
        if self.in_flight != Some(ticket) {
            return Resolution::Stale;
        }
        self.in_flight = None;
        match result {
            Ok(page) => {
                self.results.apply(page, ticket.mode, PAGE_SIZE);
                self.loaded_page = Some(ticket.page);
                self.error = None;
                Resolution::Applied
            }
            Err(err) => {
                self.error = Some(err);
                Resolution::Failed
            }
        }
    }

    /// Whether [`request_next_page`](Self::request_next_page) would issue a fetch.
    pub fn can_load_more(&self) -> bool {
        if self.in_flight.is_some() {
            return false;
        }
        let Some(total_pages) = self.results.total_pages() else {
            return false;
        };
        !self.current_page_loaded() || self.state.page.get() < total_pages
    }

    /// Current query.
    pub fn state(&self) -> &SearchState {
        &self.state
    }

    /// Results accumulated under the current query.
    pub fn results(&self) -> &AccumulatedResults {
        &self.results
    }

    /// Error of the last failed fetch, cleared when another fetch is issued.
    pub fn error(&self) -> Option<&FetchError> {
        self.error.as_ref()
    }

    /// Mode of the fetch currently in flight.
    pub fn loading(&self) -> Option<FetchMode> {
        self.in_flight.map(|t| t.mode)
    }

    /// Navigable location of the current query.
    pub fn location(&self) -> String {
        self.state.location()
    }

    fn current_page_loaded(&self) -> bool {
        self.loaded_page == Some(self.state.page)
    }

    /// Every new fetch starts without the previous fetch's error.
    fn issue(&mut self, mode: FetchMode) -> FetchCommand {
        self.version += 1;
        self.error = None;
        if mode == FetchMode::Replace {
            self.loaded_page = None;
        }
        let ticket = FetchTicket {
            version: self.version,
            page: self.state.page,
            mode,
        };
        self.in_flight = Some(ticket);
        FetchCommand {
            ticket,
            request: self.state.to_fetch_request(),
        }
    }
}

#[cfg(test)]
#[path = "catalog_tests.rs"]
mod tests;
