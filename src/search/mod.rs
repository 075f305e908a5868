//! Debounced search input.

mod controller;
mod debounce;

pub use controller::{normalize_query, SearchController};
pub use debounce::Debouncer;
