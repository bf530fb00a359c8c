//! Storefront application state.
//!
//! [`Storefront`] owns everything the shopping screen works with: the
//! catalog load, the selectors, the cart, the checkout dialogs and the
//! delivery form draft. Front-ends hold one value and drive it through
//! these methods; nothing here is global.

use crate::cart::{Cart, CartLine};
use crate::catalog::{CategoryIndex, LoadState, LoadStatus, Product};
use crate::checkout::{CheckoutFlow, CheckoutStep, DeliveryDetails, Notice};
use crate::ids::ProductId;
use crate::money::Money;
use crate::search::{CategoryFilter, Filter, PriceRange};
use crate::CommerceError;
use serde::Serialize;

/// Snapshot of the cart for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartSummary {
    pub lines: Vec<CartLine>,
    /// Number of distinct lines, shown on the cart badge.
    pub badge_count: usize,
    pub total: Money,
}

impl CartSummary {
    /// Total formatted to two decimals (e.g. "Total: $40.00").
    pub fn total_line(&self) -> String {
        format!("Total: {}", self.total.display())
    }
}

/// The storefront screen state.
#[derive(Debug, Clone, Default)]
pub struct Storefront {
    catalog: LoadState,
    filter: Filter,
    cart: Cart,
    checkout: CheckoutFlow,
    delivery: DeliveryDetails,
}

impl Storefront {
    /// Create a storefront with an idle catalog and an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// The catalog load state.
    pub fn catalog(&self) -> &LoadState {
        &self.catalog
    }

    /// Mutable catalog load state, for the loader to drive.
    pub fn catalog_mut(&mut self) -> &mut LoadState {
        &mut self.catalog
    }

    /// Current load status.
    pub fn load_status(&self) -> LoadStatus {
        self.catalog.status()
    }

    /// Current selectors.
    pub fn filter(&self) -> &Filter {
        &self.filter
    }

    pub fn set_category_filter(&mut self, category: CategoryFilter) {
        self.filter.category = category;
    }

    pub fn set_price_range(&mut self, price: PriceRange) {
        self.filter.price = price;
    }

    /// Products passing both selectors, in catalog order.
    ///
    /// Empty until the catalog has loaded.
    pub fn visible_products(&self) -> Vec<&Product> {
        self.catalog
            .products()
            .map(|products| self.filter.apply(products))
            .unwrap_or_default()
    }

    /// Loaded products grouped by category bucket.
    pub fn categories(&self) -> Result<CategoryIndex, CommerceError> {
        self.catalog.require_products().map(CategoryIndex::build)
    }

    /// Add one unit of a loaded product to the cart.
    pub fn add_to_cart(&mut self, product_id: ProductId) -> Result<u32, CommerceError> {
        let product = self
            .catalog
            .require_products()?
            .iter()
            .find(|p| p.id == product_id)
            .ok_or(CommerceError::ProductNotFound(product_id))?;
        Ok(self.cart.add_item(product))
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Cart lines, badge count and total.
    pub fn cart_summary(&self) -> CartSummary {
        CartSummary {
            lines: self.cart.lines().to_vec(),
            badge_count: self.cart.line_count(),
            total: self.cart.total(),
        }
    }

    /// Current checkout step.
    pub fn checkout_step(&self) -> CheckoutStep {
        self.checkout.step()
    }

    /// Open the delivery details dialog.
    pub fn buy_now(&mut self) -> Result<(), CommerceError> {
        self.checkout.buy_now()
    }

    /// The delivery form draft.
    pub fn delivery(&self) -> &DeliveryDetails {
        &self.delivery
    }

    /// Edit the delivery form draft.
    pub fn delivery_mut(&mut self) -> &mut DeliveryDetails {
        &mut self.delivery
    }

    /// Submit the delivery form; clears the cart on success.
    pub fn submit_delivery(&mut self) -> Result<Notice, CommerceError> {
        self.checkout
            .submit_delivery(&mut self.delivery, &mut self.cart)
    }

    /// Open the order confirmation dialog.
    pub fn checkout(&mut self) -> Result<(), CommerceError> {
        self.checkout.checkout()
    }

    /// Body text of the confirmation dialog.
    pub fn confirmation_text(&self) -> String {
        format!("Your total is {}.", self.cart.total().display())
    }

    /// Confirm the order; the cart is kept.
    pub fn confirm_checkout(&mut self) -> Result<Notice, CommerceError> {
        self.checkout.confirm()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    fn loaded() -> Storefront {
        let mut store = Storefront::new();
        let catalog = store.catalog_mut();
        catalog.begin().unwrap();
        catalog
            .succeed(vec![
                Product::new(1, "Backpack", Money::new(10995, Currency::USD), "", "men's clothing"),
                Product::new(2, "Ring", Money::new(1099, Currency::USD), "", "jewelery"),
                Product::new(3, "SSD", Money::new(6900, Currency::USD), "", "electronics"),
            ])
            .unwrap();
        store
    }

    #[test]
    fn test_nothing_visible_before_load() {
        let store = Storefront::new();
        assert!(store.visible_products().is_empty());
        assert!(store.categories().is_err());
    }

    #[test]
    fn test_visible_products_follow_selectors() {
        let mut store = loaded();
        assert_eq!(store.visible_products().len(), 3);

        store.set_price_range(PriceRange::Medium);
        let ids: Vec<u64> = store.visible_products().iter().map(|p| p.id.get()).collect();
        assert_eq!(ids, vec![3]);

        store.set_category_filter(CategoryFilter::from("jewelery"));
        assert!(store.visible_products().is_empty());
    }

    #[test]
    fn test_add_to_cart_looks_up_catalog() {
        let mut store = loaded();
        assert_eq!(store.add_to_cart(ProductId::new(2)), Ok(1));
        assert_eq!(store.add_to_cart(ProductId::new(2)), Ok(2));
        assert_eq!(
            store.add_to_cart(ProductId::new(99)),
            Err(CommerceError::ProductNotFound(ProductId::new(99)))
        );

        let summary = store.cart_summary();
        assert_eq!(summary.badge_count, 1);
        assert_eq!(summary.total_line(), "Total: $21.98");
    }

    #[test]
    fn test_confirmation_text() {
        let mut store = loaded();
        store.add_to_cart(ProductId::new(1)).unwrap();
        store.checkout().unwrap();
        assert_eq!(store.confirmation_text(), "Your total is $109.95.");
    }
}
