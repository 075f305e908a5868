//! Search, filter and paginate products.

use crate::types::{CategoryFilter, Product};
use serde::Serialize;
use std::ops::RangeInclusive;
use tracing::debug;

/// Inputs to a single query run.
#[derive(Clone, Copy, Debug)]
pub struct QueryParams<'a> {
    /// Settled search text; empty matches everything.
    pub search: &'a str,
    pub category: &'a CategoryFilter,
    /// Requested 1-based page. Out-of-range values are clamped.
    pub page: u64,
    pub page_size: usize,
}

/// One page of results plus the totals needed to render pagination.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct QueryPage {
    pub items: Vec<Product>,
    /// Matches across all pages.
    pub total_count: usize,
    /// Always at least 1.
    pub total_pages: u64,
    /// The requested page clamped into `1..=total_pages`.
    pub safe_page: u64,
    pub page_size: usize,
}

impl QueryPage {
    /// "Showing N of M products" line above the listing.
    pub fn results_info(&self) -> String {
        if self.total_count == 0 {
            "No products yet".to_string()
        } else {
            format!(
                "Showing {} of {} products",
                self.items.len(),
                self.total_count
            )
        }
    }

    pub fn page_numbers(&self) -> RangeInclusive<u64> {
        1..=self.total_pages
    }

    pub fn has_previous(&self) -> bool {
        self.safe_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.safe_page < self.total_pages
    }

    /// Pagination controls are hidden for a single page.
    pub fn show_pagination(&self) -> bool {
        self.total_pages > 1
    }

    /// Whether `page` is a page the user may navigate to from here.
    pub fn accepts_page(&self, page: u64) -> bool {
        page >= 1 && page <= self.total_pages && page != self.safe_page
    }
}

/// Run the query pipeline over products in store order.
///
/// Name search (case-insensitive substring) runs first, then the exact
/// category match, then pagination.
pub fn run_query(products: &[Product], params: &QueryParams<'_>) -> QueryPage {
    let search = params.search.to_lowercase();
    let page_size = params.page_size.max(1);

    let filtered: Vec<&Product> = products
        .iter()
        .filter(|p| search.is_empty() || p.name.to_lowercase().contains(&search))
        .filter(|p| params.category.matches(&p.category))
        .collect();

    let total_count = filtered.len();
    let total_pages = total_pages(total_count, page_size);
    let safe_page = params.page.clamp(1, total_pages);

    let start = (safe_page - 1) as usize * page_size;
    let items: Vec<Product> = filtered
        .into_iter()
        .skip(start)
        .take(page_size)
        .cloned()
        .collect();

    debug!(
        search = %search,
        category = %params.category,
        requested_page = params.page,
        safe_page,
        total_count,
        "ran product query"
    );

    QueryPage {
        items,
        total_count,
        total_pages,
        safe_page,
        page_size,
    }
}

/// Number of pages needed for `count` items; never less than one.
pub fn total_pages(count: usize, page_size: usize) -> u64 {
    let page_size = page_size.max(1);
    (count.div_ceil(page_size) as u64).max(1)
}
