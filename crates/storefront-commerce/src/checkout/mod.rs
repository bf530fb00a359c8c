//! Checkout module.
//!
//! Contains the checkout dialog state machine and delivery details.

mod delivery;
mod flow;

pub use delivery::DeliveryDetails;
pub use flow::{CheckoutFlow, CheckoutStep, Notice};
