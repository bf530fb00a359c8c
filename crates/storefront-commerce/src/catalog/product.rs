//! Product records as served by the catalog API.

use crate::catalog::Category;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A product in the catalog.
///
/// Mirrors the API record (`id`, `title`, `price`, `image`, `category`);
/// any other fields in the payload are ignored. Immutable once loaded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Display title.
    pub title: String,
    /// Unit price. Decimal in the API payload, never negative.
    #[serde(with = "crate::money::decimal")]
    pub price: Money,
    /// Image URL.
    pub image: String,
    /// Raw category label (e.g. "electronics").
    pub category: String,
}

impl Product {
    /// Create a new product.
    pub fn new(
        id: impl Into<ProductId>,
        title: impl Into<String>,
        price: Money,
        image: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            price,
            image: image.into(),
            category: category.into(),
        }
    }

    /// The fixed category bucket this product belongs to, if any.
    pub fn category_bucket(&self) -> Option<Category> {
        Category::from_label(&self.category)
    }

    /// Format the price for listings (e.g. "$109.95").
    pub fn price_display(&self) -> String {
        self.price.display()
    }
}
