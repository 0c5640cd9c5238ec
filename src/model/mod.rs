//! Domain model types (pure).
//!
//! Everything here is plain data decoded from the backend or built by smart
//! constructors. No I/O.

pub mod error;
pub mod filters;
pub mod key_action;
pub mod news;
pub mod scholarship;

pub use error::{AppError, FetchError};
pub use filters::{cycle_option, BenefitBracket, DegreeLevel, Filters, HostCountry};
pub use key_action::KeyAction;
pub use news::{NewsArticle, NewsMedia};
pub use scholarship::{ResultPage, Scholarship, ScholarshipId, StudyDuration};
