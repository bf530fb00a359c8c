//! Storefront domain types and logic.
//!
//! This crate holds everything the storefront does without touching the
//! network:
//!
//! - **Catalog**: product records, category buckets, load lifecycle
//! - **Search**: category and price range selectors
//! - **Cart**: lines keyed by product id, totals
//! - **Checkout**: Buy Now and Checkout dialogs, delivery details
//! - **State**: the [`Storefront`] value that ties them together
//!
//! # Example
//!
//! ```rust
//! use storefront_commerce::prelude::*;
//!
//! let mut store = Storefront::new();
//! store.catalog_mut().begin()?;
//! store.catalog_mut().succeed(vec![Product::new(
//!     1,
//!     "Mens Casual Slim Fit",
//!     Money::new(1599, Currency::USD),
//!     "https://example.com/slim-fit.jpg",
//!     "men's clothing",
//! )])?;
//!
//! store.set_price_range(PriceRange::Low);
//! assert_eq!(store.visible_products().len(), 1);
//!
//! store.add_to_cart(ProductId::new(1))?;
//! store.add_to_cart(ProductId::new(1))?;
//! assert_eq!(store.cart_summary().total_line(), "Total: $31.98");
//! # Ok::<(), CommerceError>(())
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod search;
pub mod state;

pub use error::CommerceError;
pub use ids::ProductId;
pub use money::{Currency, Money};
pub use state::{CartSummary, Storefront};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::ProductId;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{
        Category, CategoryIndex, CategorySection, LoadState, LoadStatus, Product,
    };

    // Cart
    pub use crate::cart::{Cart, CartLine};

    // Checkout
    pub use crate::checkout::{CheckoutFlow, CheckoutStep, DeliveryDetails, Notice};

    // Search
    pub use crate::search::{filter_products, CategoryFilter, Filter, PriceRange};

    // State
    pub use crate::state::{CartSummary, Storefront};
}
