//! Ordered in-memory product store.

use crate::error::{CatalogError, Result};
use crate::types::{Product, ProductId, ProductInput};
use std::collections::BTreeSet;
use tracing::{error, info};

/// The product store.
///
/// Products keep their insertion order; that order is the default order of
/// every listing. Mutation happens only through [`create`](Self::create) and
/// [`update`](Self::update).
#[derive(Clone, Debug, Default)]
pub struct ProductStore {
    products: Vec<Product>,
}

impl ProductStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the given products in order.
    pub fn with_products(products: Vec<Product>) -> Self {
        Self { products }
    }

    // --- Mutations ---

    /// Append a new product, assigning the next id.
    pub fn create(&mut self, input: ProductInput) -> Result<Product> {
        let id = self.next_id()?;
        let product = input.into_product(id);
        info!(id = %id, name = %product.name, "created product");
        self.products.push(product.clone());
        Ok(product)
    }

    /// Replace the mutable fields of an existing product in place.
    ///
    /// The id and position are preserved. An unknown id is an invariant
    /// violation: callers only edit products obtained from this store.
    pub fn update(&mut self, id: ProductId, input: ProductInput) -> Result<Product> {
        let Some(product) = self.products.iter_mut().find(|p| p.id == id) else {
            error!(id = %id, "update targeted a product that is not in the store");
            return Err(CatalogError::ProductNotFound(id));
        };

        product.apply(input);
        info!(id = %id, name = %product.name, "updated product");
        Ok(product.clone())
    }

    // --- Reads ---

    /// Get a product by id.
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// All products in insertion order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Largest id in the store, if any.
    pub fn max_id(&self) -> Option<ProductId> {
        self.products.iter().map(|p| p.id).max()
    }

    /// The id the next created product will receive.
    pub fn next_id(&self) -> Result<ProductId> {
        match self.max_id() {
            None => Ok(ProductId(1)),
            Some(max) => max.checked_next().ok_or(CatalogError::IdsExhausted(max)),
        }
    }

    /// Distinct non-empty categories, sorted.
    pub fn categories(&self) -> Vec<String> {
        self.products
            .iter()
            .filter(|p| !p.category.is_empty())
            .map(|p| p.category.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::initial_products;

    #[test]
    fn test_create_on_empty_store_starts_at_one() {
        let mut store = ProductStore::new();
        let product = store.create(ProductInput::new("Pen", 10.0, "Stationery", 5.0)).unwrap();
        assert_eq!(product.id, ProductId(1));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_create_uses_max_plus_one() {
        let mut store = ProductStore::with_products(initial_products());
        let product = store.create(ProductInput::new("Pen", 10.0, "Stationery", 5.0)).unwrap();
        assert_eq!(product.id, ProductId(13));
        assert_eq!(store.len(), 13);
        assert_eq!(store.products().last(), Some(&product));
    }

    #[test]
    fn test_create_ignores_gaps() {
        let mut seed = initial_products();
        seed.retain(|p| p.id == ProductId(2) || p.id == ProductId(9));
        let mut store = ProductStore::with_products(seed);
        let product = store.create(ProductInput::new("Pen", 1.0, "Stationery", 0.0)).unwrap();
        assert_eq!(product.id, ProductId(10));
    }

    #[test]
    fn test_update_preserves_identity_and_position() {
        let mut store = ProductStore::with_products(initial_products());
        let before: Vec<Product> = store.products().to_vec();

        let updated = store
            .update(
                ProductId(3),
                ProductInput::new("Gaming Chair", 7999.0, "Furniture", 4.0),
            )
            .unwrap();

        assert_eq!(updated.id, ProductId(3));
        assert_eq!(updated.description, "");
        assert_eq!(store.products()[2], updated);
        for (i, product) in store.products().iter().enumerate() {
            if i != 2 {
                assert_eq!(product, &before[i]);
            }
        }
    }

    #[test]
    fn test_update_unknown_id_fails() {
        let mut store = ProductStore::with_products(initial_products());
        let result = store.update(ProductId(99), ProductInput::new("x", 1.0, "y", 1.0));
        assert!(matches!(result, Err(CatalogError::ProductNotFound(ProductId(99)))));
        assert_eq!(store.len(), 12);
    }

    #[test]
    fn test_create_after_last_id_fails() {
        let mut seed = initial_products();
        seed[0].id = ProductId(u64::MAX);
        let mut store = ProductStore::with_products(seed);

        let result = store.create(ProductInput::new("Pen", 1.0, "Stationery", 0.0));

        assert!(matches!(result, Err(CatalogError::IdsExhausted(ProductId(u64::MAX)))));
        assert_eq!(store.len(), 12);
    }

    #[test]
    fn test_categories_sorted_and_distinct() {
        let store = ProductStore::with_products(initial_products());
        assert_eq!(
            store.categories(),
            vec![
                "Accessories",
                "Electronics",
                "Footwear",
                "Furniture",
                "Kitchen",
                "Stationery"
            ]
        );
    }
}
