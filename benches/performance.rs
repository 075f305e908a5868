//! Performance benchmarks for the catalog pipeline.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use product_catalog::{
    run_query, validate, CatalogStats, CategoryFilter, Product, ProductForm, ProductId,
    QueryParams,
};

const CATEGORIES: [&str; 6] = [
    "Accessories",
    "Electronics",
    "Footwear",
    "Furniture",
    "Kitchen",
    "Stationery",
];

fn synthetic_products(count: usize) -> Vec<Product> {
    (0..count)
        .map(|i| Product {
            id: ProductId(i as u64 + 1),
            name: format!("Product {} Model {}", i, i % 97),
            price: (i % 5000) as f64 + 0.5,
            category: CATEGORIES[i % CATEGORIES.len()].to_string(),
            stock: (i % 40) as f64,
            description: String::new(),
        })
        .collect()
}

/// Benchmark the query pipeline with varying store sizes
fn bench_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("query");
    let category = CategoryFilter::from("Electronics");

    for count in [12, 1_000, 10_000] {
        let products = synthetic_products(count);
        group.bench_with_input(BenchmarkId::new("search_and_filter", count), &products, |b, products| {
            b.iter(|| {
                black_box(run_query(
                    products,
                    &QueryParams {
                        search: "model 4",
                        category: &category,
                        page: 2,
                        page_size: 6,
                    },
                ))
            });
        });
    }

    group.finish();
}

/// Benchmark stats aggregation over the whole store
fn bench_stats(c: &mut Criterion) {
    let products = synthetic_products(10_000);
    c.bench_function("stats_10k", |b| {
        b.iter(|| black_box(CatalogStats::compute(&products, 5)));
    });
}

/// Benchmark form validation
fn bench_validate(c: &mut Criterion) {
    let form = ProductForm {
        name: "Wireless Mouse".to_string(),
        price: "899".to_string(),
        category: "Electronics".to_string(),
        stock: "25".to_string(),
        description: String::new(),
    };
    c.bench_function("validate_form", |b| {
        b.iter(|| black_box(validate(&form)));
    });
}

criterion_group!(benches, bench_query, bench_stats, bench_validate);
criterion_main!(benches);
