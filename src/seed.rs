//! Initial catalog contents.

use crate::types::{Product, ProductId};

const INITIAL_PRODUCTS: [(u64, &str, f64, &str, u64, &str); 12] = [
    (1, "Wireless Mouse", 899.0, "Electronics", 25, "Ergonomic wireless mouse with adjustable DPI."),
    (2, "Mechanical Keyboard", 2499.0, "Electronics", 10, "RGB backlit mechanical keyboard with blue switches."),
    (3, "Office Chair", 5499.0, "Furniture", 8, "Comfortable office chair with lumbar support."),
    (4, "Notebook", 99.0, "Stationery", 120, "A5 size ruled notebook, 200 pages."),
    (5, "Water Bottle", 399.0, "Accessories", 60, "Insulated stainless steel bottle, 1L."),
    (6, "Running Shoes", 3299.0, "Footwear", 15, "Lightweight running shoes for daily training."),
    (7, "Bluetooth Speaker", 1599.0, "Electronics", 30, "Portable Bluetooth speaker with deep bass."),
    (8, "Desk Lamp", 699.0, "Furniture", 20, "LED desk lamp with adjustable brightness."),
    (9, "Backpack", 1299.0, "Accessories", 18, "Water-resistant laptop backpack with multiple compartments."),
    (10, "Smartwatch", 4999.0, "Electronics", 12, "Fitness tracking smartwatch with heart-rate monitor."),
    (11, "Gaming Headset", 1899.0, "Electronics", 17, "Surround sound headset with noise-cancelling mic."),
    (12, "Coffee Mug", 249.0, "Kitchen", 50, "Ceramic coffee mug, 350ml."),
];

/// The products a fresh catalog starts with, in display order.
pub fn initial_products() -> Vec<Product> {
    INITIAL_PRODUCTS
        .iter()
        .map(|&(id, name, price, category, stock, description)| Product {
            id: ProductId(id),
            name: name.to_string(),
            price,
            category: category.to_string(),
            stock: stock as f64,
            description: description.to_string(),
        })
        .collect()
}
