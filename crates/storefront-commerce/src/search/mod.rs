//! Listing filters.
//!
//! Filtering is a pure function of the loaded products and the two
//! selectors; it never reorders products.

mod filter;

pub use filter::{CategoryFilter, Filter, PriceRange};

use crate::catalog::Product;

/// The visible subset of `products` under both selectors, in source order.
pub fn filter_products<'a>(
    products: &'a [Product],
    category: &CategoryFilter,
    price: PriceRange,
) -> Vec<&'a Product> {
    products
        .iter()
        .filter(|p| category.matches(p) && price.matches(p))
        .collect()
}
