//! # Product Catalog
//!
//! An in-memory product catalog core: everything a catalog screen needs
//! between raw user input and the rows it renders.
//!
//! ## Core Concepts
//!
//! - **Store**: Ordered product list, mutated only by create and update
//! - **Query**: Pure search → category → pagination pipeline
//! - **Form**: Raw-text product form with per-field validation
//! - **Search**: Debounced search input driven by a caller-supplied clock
//! - **Stats**: Aggregates over the whole store
//!
//! ## Example
//!
//! ```ignore
//! use product_catalog::{Catalog, CatalogConfig, FormField};
//! use std::time::Instant;
//!
//! let mut catalog = Catalog::new(CatalogConfig::default())?;
//!
//! // Type into the search box, then let the debounce settle
//! let now = Instant::now();
//! catalog.on_search_text_change("mouse", now);
//! catalog.tick(now + catalog.config().search_debounce);
//! assert_eq!(catalog.page().total_count, 1);
//!
//! // Add a product through the form
//! catalog.on_start_add();
//! catalog.on_form_field_change(FormField::Name, "Pen");
//! catalog.on_form_field_change(FormField::Price, "10");
//! catalog.on_form_field_change(FormField::Category, "Stationery");
//! catalog.on_form_submit()?;
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod form;
pub mod query;
pub mod search;
pub mod seed;
pub mod stats;
pub mod store;
pub mod types;

// Re-exports
pub use catalog::{Catalog, CatalogView, ProductRow, SubmitOutcome};
pub use config::CatalogConfig;
pub use error::{CatalogError, Result};
pub use form::{validate, FieldErrors, FormMode, ProductForm};
pub use query::{run_query, QueryPage, QueryParams, QueryState};
pub use search::{Debouncer, SearchController};
pub use stats::{format_inr, CatalogStats, StockLevel};
pub use store::ProductStore;
pub use types::*;
