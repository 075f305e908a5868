//! Aggregate figures over the whole store.
//!
//! Stats ignore the current search, category and page.

use crate::types::{format_number, Product};
use serde::Serialize;
use std::fmt;

/// Summary figures shown above the listing.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct CatalogStats {
    pub total_products: usize,
    pub total_stock_units: f64,
    /// Products with `0 < stock <= threshold`.
    pub low_stock_count: usize,
    /// Sum of `price * stock`.
    pub inventory_value: f64,
}

impl CatalogStats {
    pub fn compute(products: &[Product], low_stock_threshold: u64) -> Self {
        Self {
            total_products: products.len(),
            total_stock_units: products.iter().map(|p| p.stock).sum(),
            low_stock_count: products
                .iter()
                .filter(|p| matches!(StockLevel::of(p.stock, low_stock_threshold), StockLevel::Low(_)))
                .count(),
            inventory_value: products.iter().map(|p| p.price * p.stock).sum(),
        }
    }

    pub fn formatted_inventory_value(&self) -> String {
        format_inr(self.inventory_value)
    }
}

/// Stock classification used for badges and the low-stock count.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(tag = "level", content = "units", rename_all = "snake_case")]
pub enum StockLevel {
    OutOfStock,
    Low(f64),
    InStock(f64),
}

impl StockLevel {
    pub fn of(stock: f64, low_stock_threshold: u64) -> Self {
        if stock <= 0.0 {
            StockLevel::OutOfStock
        } else if stock <= low_stock_threshold as f64 {
            StockLevel::Low(stock)
        } else {
            StockLevel::InStock(stock)
        }
    }
}

impl fmt::Display for StockLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StockLevel::OutOfStock => f.write_str("Out of stock"),
            StockLevel::Low(units) => write!(f, "Low stock · {}", format_number(*units)),
            StockLevel::InStock(units) => write!(f, "In stock · {}", format_number(*units)),
        }
    }
}

/// Format an amount in rupees with Indian digit grouping (`₹12,34,567.5`).
///
/// At most three fraction digits are kept, trailing zeros dropped.
pub fn format_inr(amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let millis = (amount.abs() * 1000.0).round() as u128;
    let whole = millis / 1000;
    let fraction = millis % 1000;

    let mut out = format!("{}₹{}", sign, group_indian(&whole.to_string()));
    if fraction > 0 {
        let digits = format!("{:03}", fraction);
        out.push('.');
        out.push_str(digits.trim_end_matches('0'));
    }
    out
}

fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, last_three) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), last_three)
}
