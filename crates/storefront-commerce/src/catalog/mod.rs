//! Product catalog module.
//!
//! Contains product records, the fixed category buckets and the load
//! lifecycle of the remote catalog.

mod category;
mod load;
mod product;

pub use category::{Category, CategoryIndex, CategorySection};
pub use load::{LoadState, LoadStatus};
pub use product::Product;
