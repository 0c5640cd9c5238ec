//! Global Scholarships terminal client.
//!
//! Browses a scholarship catalog served by a REST backend: search with filters,
//! incremental "load more" paging, detail pages, news headlines, and a sitemap
//! generator for the public site.
//!
//! Pure core (`model`, `state`) and impure shell (`client`, `view`, `sitemap::collect`).

pub mod client;
pub mod config;
pub mod logging;
pub mod model;
pub mod sitemap;
pub mod state;
pub mod view;
