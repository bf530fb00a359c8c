//! Catalog loading for the storefront.
//!
//! Fetches the product list from the remote catalog API and records the
//! outcome in a [`LoadState`](storefront_commerce::catalog::LoadState).
//!
//! # Example
//!
//! ```rust,ignore
//! use storefront_commerce::Storefront;
//! use storefront_data::{CatalogLoader, HttpProductSource, DEFAULT_PRODUCTS_URL};
//!
//! let loader = CatalogLoader::new(HttpProductSource::new(DEFAULT_PRODUCTS_URL)?);
//! let mut store = Storefront::new();
//!
//! loader.load(store.catalog_mut()).await?;
//! if let Some(text) = store.catalog().placeholder() {
//!     println!("{text}");
//! }
//! ```

mod error;
mod loader;
mod response;
mod source;

pub use error::FetchError;
pub use loader::CatalogLoader;
pub use response::CatalogResponse;
pub use source::{HttpProductSource, ProductSource, DEFAULT_PRODUCTS_URL};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        CatalogLoader, CatalogResponse, FetchError, HttpProductSource, ProductSource,
        DEFAULT_PRODUCTS_URL,
    };
}
