//! Error handling and edge case tests.

use product_catalog::{
    Catalog, CatalogConfig, CatalogError, FormField, ProductId, ProductInput, ProductStore,
    SubmitOutcome,
};

// --- Store Errors ---

#[test]
fn test_update_unknown_id() {
    let mut store = ProductStore::with_products(product_catalog::seed::initial_products());

    let result = store.update(ProductId(404), ProductInput::new("Ghost", 1.0, "None", 0.0));

    assert!(matches!(result, Err(CatalogError::ProductNotFound(ProductId(404)))));
    assert_eq!(store.len(), 12);
    assert!(store.get(ProductId(404)).is_none());
}

#[test]
fn test_error_messages() {
    let err = CatalogError::ProductNotFound(ProductId(7));
    assert_eq!(err.to_string(), "Product not found: 7");
    let err = CatalogError::IdsExhausted(ProductId(u64::MAX));
    assert_eq!(err.to_string(), format!("No product ids left after {}", u64::MAX));
}

#[test]
fn test_submit_after_last_id_fails_without_panicking() {
    let json = format!(
        r#"{{"seed": [{{"id": {}, "name": "A", "price": 1, "category": "X", "stock": 1}}]}}"#,
        u64::MAX - 1
    );
    let mut catalog = Catalog::new(CatalogConfig::from_json(&json).unwrap()).unwrap();

    catalog.on_form_field_change(FormField::Name, "B");
    catalog.on_form_field_change(FormField::Price, "1");
    catalog.on_form_field_change(FormField::Category, "X");
    let SubmitOutcome::Created(product) = catalog.on_form_submit().unwrap() else {
        panic!("expected Created");
    };
    assert_eq!(product.id, ProductId(u64::MAX));

    catalog.on_form_field_change(FormField::Name, "C");
    catalog.on_form_field_change(FormField::Price, "1");
    catalog.on_form_field_change(FormField::Category, "X");
    let result = catalog.on_form_submit();
    assert!(matches!(result, Err(CatalogError::IdsExhausted(_))));
    assert_eq!(catalog.products().len(), 2);
    assert_eq!(catalog.form().name, "C");
}

// --- Catalog Errors ---

#[test]
fn test_start_edit_unknown_id() {
    let mut catalog = Catalog::default();
    catalog.on_form_field_change(FormField::Name, "draft");

    let result = catalog.on_start_edit(ProductId(99));

    assert!(matches!(result, Err(CatalogError::ProductNotFound(_))));
    // Form untouched
    assert!(catalog.edit_target().is_none());
    assert_eq!(catalog.form().name, "draft");
}

#[test]
fn test_invalid_config_json() {
    let result = CatalogConfig::from_json(r#"{"page_size": "six"}"#);
    assert!(matches!(result, Err(CatalogError::Serialization(_))));
}

#[test]
fn test_negative_seed_price_rejected() {
    let json = r#"{"seed": [{"id": 1, "name": "A", "price": -5, "category": "X", "stock": 1}]}"#;
    let result = CatalogConfig::from_json(json);
    assert!(matches!(result, Err(CatalogError::InvalidConfig(_))));
}

// --- Validation Edge Cases ---

#[test]
fn test_zero_price_is_valid_but_empty_is_not() {
    let mut catalog = Catalog::default();
    catalog.on_form_field_change(FormField::Name, "Freebie");
    catalog.on_form_field_change(FormField::Category, "Promo");

    let outcome = catalog.on_form_submit().unwrap();
    let SubmitOutcome::Rejected(errors) = outcome else {
        panic!("expected Rejected");
    };
    assert_eq!(errors.get(FormField::Price), Some("Price is required"));
    assert_eq!(errors.len(), 1);

    catalog.on_form_field_change(FormField::Price, "0");
    assert!(catalog.on_form_submit().unwrap().is_accepted());
}

#[test]
fn test_whitespace_price_reads_as_zero() {
    let mut catalog = Catalog::default();
    catalog.on_form_field_change(FormField::Name, "Sample");
    catalog.on_form_field_change(FormField::Category, "Promo");
    catalog.on_form_field_change(FormField::Price, "  ");

    let SubmitOutcome::Created(product) = catalog.on_form_submit().unwrap() else {
        panic!("expected Created");
    };
    assert_eq!(product.price, 0.0);
}

#[test]
fn test_negative_stock_blocks_submit() {
    let mut catalog = Catalog::default();
    catalog.on_form_field_change(FormField::Name, "Pen");
    catalog.on_form_field_change(FormField::Price, "10");
    catalog.on_form_field_change(FormField::Category, "Stationery");
    catalog.on_form_field_change(FormField::Stock, "-3");

    let outcome = catalog.on_form_submit().unwrap();
    assert!(!outcome.is_accepted());
    assert_eq!(
        catalog.form_errors().get(FormField::Stock),
        Some("Stock must be a non-negative number")
    );
    assert_eq!(catalog.products().len(), 12);
}

// --- Query Edge Cases ---

#[test]
fn test_unknown_category_is_empty_not_error() {
    let mut catalog = Catalog::default();
    catalog.on_category_change("Toys");

    let page = catalog.page();
    assert_eq!(page.total_count, 0);
    assert_eq!(page.total_pages, 1);
    assert_eq!(page.safe_page, 1);
    assert!(!catalog.on_page_change(2));
}
