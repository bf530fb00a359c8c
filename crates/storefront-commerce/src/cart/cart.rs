//! Cart and line item types.

use crate::catalog::Product;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A shopping cart.
///
/// Lines are kept in the order products were first added. The total is
/// recomputed from the lines on every call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Cart {
    /// Items in the cart.
    lines: Vec<CartLine>,
    /// Cart currency.
    pub currency: Currency,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of a product.
    ///
    /// Repeat adds of the same product id increment the existing line.
    /// Returns the line's new quantity.
    pub fn add_item(&mut self, product: &Product) -> u32 {
        if let Some(existing) = self.lines.iter_mut().find(|l| l.product.id == product.id) {
            existing.quantity = existing.quantity.saturating_add(1);
            debug!(product_id = %product.id, quantity = existing.quantity, "cart line incremented");
            return existing.quantity;
        }

        self.lines.push(CartLine::new(product.clone()));
        debug!(product_id = %product.id, "cart line added");
        1
    }

    /// Clear all items from the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Sum of price x quantity across every line.
    pub fn total(&self) -> Money {
        let line_totals: Vec<Money> = self.lines.iter().map(CartLine::line_total).collect();
        Money::sum(line_totals.iter(), self.currency)
    }

    /// Lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Get the line for a product.
    pub fn get(&self, product_id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.product.id == product_id)
    }

    /// Number of distinct lines (the cart badge count).
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Get total item count (sum of quantities).
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// A cart entry pairing a product snapshot with a quantity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    /// Product as it was when first added.
    pub product: Product,
    /// Quantity, at least 1.
    pub quantity: u32,
}

impl CartLine {
    fn new(product: Product) -> Self {
        Self {
            product,
            quantity: 1,
        }
    }

    /// Price x quantity.
    pub fn line_total(&self) -> Money {
        self.product.price.multiply(i64::from(self.quantity))
    }

    /// Listing text, e.g. "Backpack (x2) - $219.90".
    pub fn summary(&self) -> String {
        format!(
            "{} (x{}) - {}",
            self.product.title,
            self.quantity,
            self.line_total().display()
        )
    }
}
