//! Category and price filters for the product listing.

use crate::catalog::{Category, Product};
use crate::money::Money;
use crate::CommerceError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Category selector.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CategoryFilter {
    /// Pass every product.
    #[default]
    All,
    /// Exact match on the product's category label.
    Only(String),
}

impl CategoryFilter {
    /// Select a fixed bucket.
    pub fn category(category: Category) -> Self {
        CategoryFilter::Only(category.label().to_string())
    }

    /// Selector value (`all` or the category label).
    pub fn value(&self) -> &str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(label) => label,
        }
    }

    /// Option label shown in the selector.
    pub fn label(&self) -> &str {
        match self {
            CategoryFilter::All => "All Products",
            CategoryFilter::Only(label) => Category::from_label(label)
                .map(|c| c.title())
                .unwrap_or(label.as_str()),
        }
    }

    /// The selector's options, in display order.
    pub fn options() -> Vec<CategoryFilter> {
        std::iter::once(CategoryFilter::All)
            .chain(Category::ALL.into_iter().map(CategoryFilter::category))
            .collect()
    }

    /// Check whether a product passes this filter.
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(label) => product.category == *label,
        }
    }
}

impl From<&str> for CategoryFilter {
    fn from(value: &str) -> Self {
        match value {
            "all" => CategoryFilter::All,
            label => CategoryFilter::Only(label.to_string()),
        }
    }
}

impl From<String> for CategoryFilter {
    fn from(value: String) -> Self {
        CategoryFilter::from(value.as_str())
    }
}

impl From<CategoryFilter> for String {
    fn from(filter: CategoryFilter) -> Self {
        filter.value().to_string()
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Price range selector.
///
/// Bounds are in major units of the product's currency: `Low` is below 50,
/// `Medium` is 50 up to but excluding 100, `High` is 100 and above.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceRange {
    #[default]
    All,
    Low,
    Medium,
    High,
}

const MEDIUM_FLOOR: i64 = 50;
const HIGH_FLOOR: i64 = 100;

impl PriceRange {
    /// The selector's options, in display order.
    pub const ALL: [PriceRange; 4] = [
        PriceRange::All,
        PriceRange::Low,
        PriceRange::Medium,
        PriceRange::High,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PriceRange::All => "all",
            PriceRange::Low => "low",
            PriceRange::Medium => "medium",
            PriceRange::High => "high",
        }
    }

    /// Option label shown in the selector.
    pub fn label(&self) -> &'static str {
        match self {
            PriceRange::All => "All Prices",
            PriceRange::Low => "Below $50",
            PriceRange::Medium => "$50 - $100",
            PriceRange::High => "Above $100",
        }
    }

    /// The bucket a price falls into. Never returns `All`.
    pub fn bucket_for(price: Money) -> PriceRange {
        let medium = Money::from_major(MEDIUM_FLOOR, price.currency).amount_cents;
        let high = Money::from_major(HIGH_FLOOR, price.currency).amount_cents;
        match price.amount_cents {
            cents if cents < medium => PriceRange::Low,
            cents if cents < high => PriceRange::Medium,
            _ => PriceRange::High,
        }
    }

    /// Check whether a price passes this filter.
    pub fn contains(&self, price: Money) -> bool {
        match self {
            PriceRange::All => true,
            range => Self::bucket_for(price) == *range,
        }
    }

    /// Check whether a product passes this filter.
    pub fn matches(&self, product: &Product) -> bool {
        self.contains(product.price)
    }
}

impl FromStr for PriceRange {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| CommerceError::InvalidSelector {
                kind: "price range",
                value: s.to_string(),
            })
    }
}

impl fmt::Display for PriceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The pair of selectors applied to the listing.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Filter {
    pub category: CategoryFilter,
    pub price: PriceRange,
}

impl Filter {
    /// Create a filter from both selectors.
    pub fn new(category: CategoryFilter, price: PriceRange) -> Self {
        Self { category, price }
    }

    /// Check whether a product passes both selectors.
    pub fn matches(&self, product: &Product) -> bool {
        self.category.matches(product) && self.price.matches(product)
    }

    /// The visible subset of `products`, in source order.
    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        products.iter().filter(|p| self.matches(p)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    fn usd(cents: i64) -> Money {
        Money::new(cents, Currency::USD)
    }

    #[test]
    fn test_price_bucket_boundaries() {
        assert_eq!(PriceRange::bucket_for(usd(0)), PriceRange::Low);
        assert_eq!(PriceRange::bucket_for(usd(4999)), PriceRange::Low);
        assert_eq!(PriceRange::bucket_for(usd(5000)), PriceRange::Medium);
        assert_eq!(PriceRange::bucket_for(usd(9999)), PriceRange::Medium);
        assert_eq!(PriceRange::bucket_for(usd(10000)), PriceRange::High);
        assert_eq!(PriceRange::bucket_for(usd(99_999_999)), PriceRange::High);
    }

    #[test]
    fn test_buckets_are_exclusive_and_exhaustive() {
        let ranges = [PriceRange::Low, PriceRange::Medium, PriceRange::High];
        for cents in (0..20_000).step_by(7) {
            let hits = ranges.iter().filter(|r| r.contains(usd(cents))).count();
            assert_eq!(hits, 1, "price {cents} matched {hits} buckets");
            assert!(PriceRange::All.contains(usd(cents)));
        }
    }

    #[test]
    fn test_decoded_prices_just_below_bounds() {
        let products: Vec<Product> = serde_json::from_str(
            r#"[
                {"id": 1, "title": "a", "price": 49.996, "image": "", "category": "electronics"},
                {"id": 2, "title": "b", "price": 99.999, "image": "", "category": "electronics"},
                {"id": 3, "title": "c", "price": 50, "image": "", "category": "electronics"}
            ]"#,
        )
        .unwrap();
        let ids = |range: PriceRange| -> Vec<u64> {
            Filter::new(CategoryFilter::All, range)
                .apply(&products)
                .iter()
                .map(|p| p.id.get())
                .collect()
        };

        assert_eq!(ids(PriceRange::Low), vec![1]);
        assert_eq!(ids(PriceRange::Medium), vec![2, 3]);
        assert!(ids(PriceRange::High).is_empty());
    }

    #[test]
    fn test_price_range_parse() {
        assert_eq!("medium".parse::<PriceRange>().unwrap(), PriceRange::Medium);
        assert!("cheap".parse::<PriceRange>().is_err());
    }

    #[test]
    fn test_category_filter_parse() {
        assert_eq!(CategoryFilter::from("all"), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::from("electronics"),
            CategoryFilter::category(Category::Electronics)
        );
    }

    #[test]
    fn test_selector_options() {
        let categories = CategoryFilter::options();
        assert_eq!(categories.len(), 5);
        assert_eq!(categories[0].label(), "All Products");
        assert_eq!(categories[1].value(), "men's clothing");
        assert_eq!(categories[1].label(), "Men's Clothing");

        let prices: Vec<&str> = PriceRange::ALL.iter().map(|r| r.label()).collect();
        assert_eq!(prices, vec!["All Prices", "Below $50", "$50 - $100", "Above $100"]);
    }

    #[test]
    fn test_category_match_is_exact() {
        let product = Product::new(1, "TV", usd(30000), "", "electronics");
        assert!(CategoryFilter::from("electronics").matches(&product));
        assert!(!CategoryFilter::from("Electronics").matches(&product));
        assert!(!CategoryFilter::from("electronic").matches(&product));
    }

    #[test]
    fn test_filter_serde_uses_selector_values() {
        let filter = Filter::new(CategoryFilter::from("jewelery"), PriceRange::High);
        let json = serde_json::to_string(&filter).unwrap();
        assert_eq!(json, r#"{"category":"jewelery","price":"high"}"#);
        assert_eq!(serde_json::from_str::<Filter>(&json).unwrap(), filter);
    }
}
