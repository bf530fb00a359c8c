//! Commerce error types.

use crate::ids::ProductId;
use thiserror::Error;

/// Errors that can occur in storefront operations.
///
/// Cart arithmetic and filtering never fail; these cover lookups against
/// the loaded catalog and out-of-order state machine transitions.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CommerceError {
    /// Product not found in the loaded catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// The catalog has not finished loading.
    #[error("Catalog is not loaded (status: {0})")]
    CatalogNotLoaded(&'static str),

    /// Invalid catalog load state transition.
    #[error("Invalid load transition from {from} to {to}")]
    InvalidLoadTransition {
        from: &'static str,
        to: &'static str,
    },

    /// Invalid checkout state transition.
    #[error("Cannot {action} while {from}")]
    InvalidCheckoutTransition {
        from: &'static str,
        action: &'static str,
    },

    /// Delivery details missing required fields.
    #[error("Delivery details incomplete: missing {0}")]
    IncompleteDelivery(String),

    /// Unrecognised filter selector value.
    #[error("Invalid {kind} selector: {value}")]
    InvalidSelector { kind: &'static str, value: String },
}
