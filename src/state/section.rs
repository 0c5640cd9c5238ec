//! Load state of an independently fetched screen section.

use crate::model::FetchError;

/// One fetched section of a screen (hero, countries, detail, news).
///
/// Sections fail independently: a failed section shows its own error state and the
/// rest of the screen keeps working.
#[derive(Debug, Clone, PartialEq)]
pub enum Section<T> {
    /// Never requested.
    Idle,
    /// Request in flight.
    Loading,
    /// Request succeeded.
    Loaded(T),
    /// Request failed.
    Failed(FetchError),
}

impl<T> Default for Section<T> {
    fn default() -> Self {
        Section::Idle
    }
}

impl<T> Section<T> {
    /// True while the request is in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self, Section::Loading)
    }

    /// True before the first request.
    pub fn is_idle(&self) -> bool {
        matches!(self, Section::Idle)
    }

    /// Data, when loaded.
    pub fn loaded(&self) -> Option<&T> {
        match self {
            Section::Loaded(value) => Some(value),
            _ => None,
        }
    }

    /// Error, when failed.
    pub fn error(&self) -> Option<&FetchError> {
        match self {
            Section::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// Store a fetch outcome.
    pub fn resolve(&mut self, result: Result<T, FetchError>) {
        *self = match result {
            Ok(value) => Section::Loaded(value),
            Err(err) => Section::Failed(err),
        };
    }
}
