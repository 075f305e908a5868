//! Transient query state: settled search, category and page.

use super::pipeline::{run_query, QueryPage, QueryParams};
use crate::types::{CategoryFilter, Product};
use serde::Serialize;

/// What the user is currently looking at.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct QueryState {
    /// Trimmed, lowercased search text.
    pub search: String,
    pub category: CategoryFilter,
    /// 1-based page number.
    pub page: u64,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: CategoryFilter::All,
            page: 1,
        }
    }
}

impl QueryState {
    /// Apply a settled search query. Always returns to the first page.
    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search = query.into();
        self.page = 1;
    }

    /// Change the category filter. Always returns to the first page.
    pub fn set_category(&mut self, category: CategoryFilter) {
        self.category = category;
        self.page = 1;
    }

    pub fn set_page(&mut self, page: u64) {
        self.page = page.max(1);
    }

    /// Clamp the page into `1..=total_pages`.
    pub fn clamp_page(&mut self, total_pages: u64) {
        self.page = self.page.clamp(1, total_pages.max(1));
    }

    pub fn params(&self, page_size: usize) -> QueryParams<'_> {
        QueryParams {
            search: &self.search,
            category: &self.category,
            page: self.page,
            page_size,
        }
    }

    /// Run the pipeline for this state.
    pub fn run(&self, products: &[Product], page_size: usize) -> QueryPage {
        run_query(products, &self.params(page_size))
    }
}
