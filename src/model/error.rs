//! Error types for the scholar application.
//!
//! This module defines the error taxonomy using `thiserror` for structured error
//! handling. Errors compose via `?` and `From` conversions.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level application error wrapping all domain-specific failures
//!   - [`FetchError`] - Backend API failures (non-2xx status, transport, decoding)
//!   - [`ConfigError`](crate::config::ConfigError) - Config file read/parse failures
//!   - [`LoggingError`](crate::logging::LoggingError) - Log file setup failures
//!   - `std::io::Error` - Terminal/TUI rendering failures
//!
//! # Error Recovery Strategy
//!
//! Fetch errors are **non-fatal**: the failing section of the UI shows an error state
//! and the rest of the screen keeps working. Nothing is retried automatically; the user
//! retries explicitly. Config, logging and terminal errors are fatal at start-up.

use thiserror::Error;

/// Top-level application error encompassing all failure modes.
///
/// Returned from start-up and from the one-shot `sitemap` command. The TUI itself never
/// surfaces a `FetchError` through this type; it turns them into per-section error flags.
#[derive(Debug, Error)]
pub enum AppError {
    /// A backend request failed.
    #[error("Request failed: {0}")]
    Fetch(#[from] FetchError),

    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Log file could not be set up.
    #[error("Logging error: {0}")]
    Logging(#[from] crate::logging::LoggingError),

    /// Terminal or file I/O error.
    ///
    /// Failures in the crossterm/ratatui layer (broken pipes, resize failures) or while
    /// writing the sitemap output file. Fatal: attempt terminal cleanup, then exit.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),

    /// The async runtime backing the fetch worker could not be started.
    #[error("Runtime error: {0}")]
    Runtime(String),
}

/// Errors returned by the scholarship and news data clients.
///
/// This is the only error kind of the catalog core. It is `Clone` and `PartialEq` so it
/// can live inside UI state (a failed section keeps the error it failed with) and be
/// compared in tests.
///
/// # Recovery
///
/// - Catalog list failures leave the accumulated results untouched and set an error flag.
/// - Detail failures show an error panel; `NotFound` shows a dedicated message.
/// - Hero / countries / news failures degrade to an empty or error section.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The server answered with a non-success HTTP status.
    ///
    /// # Examples
    ///
    /// ```
    /// use scholar::model::FetchError;
    ///
    /// let err = FetchError::Status {
    ///     status: 503,
    ///     url: "http://localhost:3000/api/scholarships/".to_string(),
    /// };
    /// assert!(err.to_string().contains("503"));
    /// ```
    #[error("HTTP {status} from {url}")]
    Status {
        /// Numeric HTTP status code.
        status: u16,
        /// Requested URL, without credentials.
        url: String,
    },

    /// The detail endpoint answered 404 for this scholarship id.
    #[error("Scholarship {id} not found")]
    NotFound {
        /// The id that was requested.
        id: u64,
    },

    /// The request never produced a response (DNS, connection refused, TLS, ...).
    #[error("Network error: {0}")]
    Network(String),

    /// The response body was not the JSON shape we expected.
    ///
    /// The decoder message is kept as a `String` rather than the `reqwest` error so the
    /// error stays `Clone`.
    #[error("Invalid response body: {0}")]
    Decode(String),
}

impl FetchError {
    /// True for the detail endpoint's 404 case.
    pub fn is_not_found(&self) -> bool {
        matches!(self, FetchError::NotFound { .. })
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            FetchError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            FetchError::Status {
                status: status.as_u16(),
                url: err.url().map(|u| u.to_string()).unwrap_or_default(),
            }
        } else {
            FetchError::Network(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn fetch_error_status_display() {
        let err = FetchError::Status {
            status: 500,
            url: "http://api.test/scholarships/".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("HTTP 500"));
        assert!(msg.contains("http://api.test/scholarships/"));
    }

    #[test]
    fn fetch_error_not_found_display() {
        let err = FetchError::NotFound { id: 42 };
        assert_eq!(err.to_string(), "Scholarship 42 not found");
        assert!(err.is_not_found());
    }

    #[test]
    fn fetch_error_network_is_not_not_found() {
        let err = FetchError::Network("connection refused".to_string());
        assert!(!err.is_not_found());
        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn fetch_error_is_cloneable_and_comparable() {
        let err = FetchError::Decode("missing field `count`".to_string());
        assert_eq!(err.clone(), err);
    }

    #[test]
    fn app_error_from_fetch_error() {
        let app_err: AppError = FetchError::NotFound { id: 7 }.into();
        let msg = app_err.to_string();
        assert!(msg.contains("Request failed"));
        assert!(msg.contains("Scholarship 7 not found"));
    }

    #[test]
    fn app_error_from_io_error() {
        let io_err = io::Error::new(io::ErrorKind::BrokenPipe, "pipe broken");
        let app_err: AppError = io_err.into();
        let msg = app_err.to_string();
        assert!(msg.contains("Terminal error"));
        assert!(msg.contains("pipe broken"));
    }
}
