//! Error types for the catalog.

use crate::types::ProductId;
use thiserror::Error;

/// Main error type for catalog operations.
///
/// Form validation problems are not errors; they are returned as
/// [`FieldErrors`](crate::form::FieldErrors) data.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    #[error("No product ids left after {0}")]
    IdsExhausted(ProductId),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        CatalogError::Serialization(e.to_string())
    }
}

/// Result type for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;
