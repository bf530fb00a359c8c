//! Category buckets for grouped display.

use crate::catalog::Product;
use serde::{Deserialize, Serialize};

/// One of the fixed product classification labels used by the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "men's clothing")]
    MensClothing,
    #[serde(rename = "women's clothing")]
    WomensClothing,
    #[serde(rename = "electronics")]
    Electronics,
    #[serde(rename = "jewelery")]
    Jewelery,
}

impl Category {
    /// All buckets, in display order.
    pub const ALL: [Category; 4] = [
        Category::MensClothing,
        Category::WomensClothing,
        Category::Electronics,
        Category::Jewelery,
    ];

    /// Label used by the API and the category selector.
    pub fn label(&self) -> &'static str {
        match self {
            Category::MensClothing => "men's clothing",
            Category::WomensClothing => "women's clothing",
            Category::Electronics => "electronics",
            Category::Jewelery => "jewelery",
        }
    }

    /// Section title.
    pub fn title(&self) -> &'static str {
        match self {
            Category::MensClothing => "Men's Clothing",
            Category::WomensClothing => "Women's Clothing",
            Category::Electronics => "Electronics",
            Category::Jewelery => "Jewelery",
        }
    }

    /// Look up a bucket by its exact label.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }
}

/// Products of one bucket.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySection {
    pub category: Category,
    pub products: Vec<Product>,
}

/// Products grouped into the fixed category buckets.
///
/// Every bucket is present, in [`Category::ALL`] order, even when empty.
/// Products with a label outside the fixed set land in no bucket.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryIndex {
    sections: Vec<CategorySection>,
}

impl CategoryIndex {
    /// Group `products` by bucket, keeping source order within each bucket.
    pub fn build(products: &[Product]) -> Self {
        let sections = Category::ALL
            .into_iter()
            .map(|category| CategorySection {
                category,
                products: products
                    .iter()
                    .filter(|p| p.category == category.label())
                    .cloned()
                    .collect(),
            })
            .collect();
        Self { sections }
    }

    /// Products in a bucket.
    pub fn get(&self, category: Category) -> &[Product] {
        self.sections
            .iter()
            .find(|s| s.category == category)
            .map(|s| s.products.as_slice())
            .unwrap_or(&[])
    }

    /// Iterate over all sections in display order.
    pub fn sections(&self) -> impl Iterator<Item = &CategorySection> {
        self.sections.iter()
    }

    /// Total number of indexed products.
    pub fn product_count(&self) -> usize {
        self.sections.iter().map(|s| s.products.len()).sum()
    }
}
