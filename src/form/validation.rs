//! Form validation.
//!
//! Every rule runs independently so the form can show all problems at once.

use super::state::ProductForm;
use crate::types::FormField;
use serde::Serialize;
use std::collections::BTreeMap;

pub const NAME_REQUIRED: &str = "Name is required";
pub const PRICE_REQUIRED: &str = "Price is required";
pub const PRICE_INVALID: &str = "Price must be a non-negative number";
pub const CATEGORY_REQUIRED: &str = "Category is required";
pub const STOCK_INVALID: &str = "Stock must be a non-negative number";

/// Per-field error messages. Empty means the form is valid.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<FormField, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: FormField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: FormField) -> bool {
        self.0.contains_key(&field)
    }

    pub fn iter(&self) -> impl Iterator<Item = (FormField, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }

    fn insert(&mut self, field: FormField, message: &str) {
        self.0.insert(field, message.to_string());
    }
}

/// Validate raw form input.
pub fn validate(form: &ProductForm) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if form.name.trim().is_empty() {
        errors.insert(FormField::Name, NAME_REQUIRED);
    }

    if form.price.is_empty() {
        errors.insert(FormField::Price, PRICE_REQUIRED);
    } else if parse_price(&form.price).is_none() {
        errors.insert(FormField::Price, PRICE_INVALID);
    }

    if form.category.trim().is_empty() {
        errors.insert(FormField::Category, CATEGORY_REQUIRED);
    }

    if !form.stock.is_empty() && parse_stock(&form.stock).is_none() {
        errors.insert(FormField::Stock, STOCK_INVALID);
    }

    errors
}

/// Coerce form text to a number.
///
/// Surrounding whitespace is ignored and blank text reads as zero. Anything
/// that is not a finite decimal number yields `None`.
pub fn parse_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }
    trimmed.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// A non-negative price.
pub fn parse_price(raw: &str) -> Option<f64> {
    parse_number(raw).filter(|value| *value >= 0.0)
}

/// A non-negative stock count.
pub fn parse_stock(raw: &str) -> Option<f64> {
    parse_number(raw).filter(|value| *value >= 0.0)
}
