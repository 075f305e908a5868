//! Core types for the catalog.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a product.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u64);

impl ProductId {
    /// The following id, or `None` once the id space is used up.
    pub fn checked_next(self) -> Option<Self> {
        self.0.checked_add(1).map(ProductId)
    }
}

impl fmt::Debug for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ProductId({})", self.0)
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single product in the store.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier (assigned by the store, never reused).
    pub id: ProductId,

    pub name: String,

    /// Unit price, never negative.
    pub price: f64,

    /// Exact category label, compared case-sensitively.
    pub category: String,

    /// Units on hand, never negative.
    pub stock: f64,

    /// Free text; empty when the product has none.
    #[serde(default)]
    pub description: String,
}

impl Product {
    /// Overwrite every mutable field from an input, keeping the id.
    pub(crate) fn apply(&mut self, input: ProductInput) {
        self.name = input.name;
        self.price = input.price;
        self.category = input.category;
        self.stock = input.stock;
        self.description = input.description;
    }
}

/// Input for creating or updating a product (before an id is assigned).
///
/// Built from a validated form: text fields trimmed, numbers parsed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProductInput {
    pub name: String,
    pub price: f64,
    pub category: String,
    pub stock: f64,
    #[serde(default)]
    pub description: String,
}

impl ProductInput {
    pub fn new(name: impl Into<String>, price: f64, category: impl Into<String>, stock: f64) -> Self {
        Self {
            name: name.into(),
            price,
            category: category.into(),
            stock,
            description: String::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub(crate) fn into_product(self, id: ProductId) -> Product {
        Product {
            id,
            name: self.name,
            price: self.price,
            category: self.category,
            stock: self.stock,
            description: self.description,
        }
    }
}

/// Render a number without a trailing `.0` for whole values.
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

/// Editable fields of the product form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    Name,
    Price,
    Category,
    Stock,
    Description,
}

impl FormField {
    pub const ALL: [FormField; 5] = [
        FormField::Name,
        FormField::Price,
        FormField::Category,
        FormField::Stock,
        FormField::Description,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Price => "price",
            FormField::Category => "category",
            FormField::Stock => "stock",
            FormField::Description => "description",
        }
    }

    /// Look up a field by its input name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.as_str() == name)
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category selection: everything, or one exact category.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryFilter {
    #[default]
    All,
    Exact(String),
}

impl CategoryFilter {
    /// Value used by the category selector for "no filtering".
    pub const ALL_SENTINEL: &'static str = "all";

    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Exact(wanted) => wanted == category,
        }
    }
}

impl From<&str> for CategoryFilter {
    fn from(value: &str) -> Self {
        if value == Self::ALL_SENTINEL {
            CategoryFilter::All
        } else {
            CategoryFilter::Exact(value.to_string())
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str(Self::ALL_SENTINEL),
            CategoryFilter::Exact(category) => f.write_str(category),
        }
    }
}

/// How the current page is laid out. Presentation only.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    #[default]
    List,
    Card,
}

/// Colour scheme. Presentation only.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}
