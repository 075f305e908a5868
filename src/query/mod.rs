//! Query pipeline over the product store.
//!
//! The pipeline is a pure function of the products and the query state, so
//! callers simply re-run it after anything it depends on changes.

mod pipeline;
mod state;

pub use pipeline::{run_query, total_pages, QueryPage, QueryParams};
pub use state::QueryState;
