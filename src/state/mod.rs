//! UI state machine (pure).
//!
//! All state transitions are pure functions testable without a terminal or a network.

pub mod app_state;
pub mod catalog;
pub mod query;
pub mod results;
pub mod search_input_handler;
pub mod section;

// Re-export for convenience
pub use app_state::{AppState, Screen, Theme};
pub use catalog::{CatalogController, FetchCommand, FetchTicket, Resolution};
pub use query::{FetchRequest, SearchState, CATALOG_PATH, PAGE_SIZE};
pub use results::{AccumulatedResults, FetchMode};
pub use search_input_handler::SearchInput;
pub use section::Section;
