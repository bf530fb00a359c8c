//! Checkout flow state machine.
//!
//! Two independent paths leave `Browsing`:
//!
//! - Buy Now opens the delivery dialog; submitting it clears the cart.
//! - Checkout opens the confirmation dialog; confirming it leaves the cart
//!   as it was.
//!
//! Neither dialog can be dismissed other than by completing it.

use crate::cart::Cart;
use crate::checkout::DeliveryDetails;
use crate::CommerceError;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Where the shopper is in the checkout flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CheckoutStep {
    /// Product listing, no dialog open.
    #[default]
    Browsing,
    /// Delivery details dialog (Buy Now).
    DeliveryModalOpen,
    /// Order confirmation dialog (Checkout).
    ConfirmModalOpen,
}

impl CheckoutStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckoutStep::Browsing => "browsing",
            CheckoutStep::DeliveryModalOpen => "delivery dialog open",
            CheckoutStep::ConfirmModalOpen => "confirmation dialog open",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CheckoutStep::Browsing => "Browsing",
            CheckoutStep::DeliveryModalOpen => "Enter Delivery Details",
            CheckoutStep::ConfirmModalOpen => "Checkout Confirmation",
        }
    }
}

/// User-visible message emitted when a dialog completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Notice {
    PurchaseCompleted,
    ProceedingToCheckout,
}

impl Notice {
    pub fn message(&self) -> &'static str {
        match self {
            Notice::PurchaseCompleted => "Purchase completed! Thank you for your order.",
            Notice::ProceedingToCheckout => "Proceeding to checkout!",
        }
    }
}

/// Checkout flow state.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CheckoutFlow {
    step: CheckoutStep,
}

impl CheckoutFlow {
    /// Create a flow in the browsing state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current step.
    pub fn step(&self) -> CheckoutStep {
        self.step
    }

    /// Check if any dialog is open.
    pub fn is_modal_open(&self) -> bool {
        self.step != CheckoutStep::Browsing
    }

    /// Open the delivery details dialog.
    pub fn buy_now(&mut self) -> Result<(), CommerceError> {
        self.advance(CheckoutStep::Browsing, CheckoutStep::DeliveryModalOpen, "buy now")
    }

    /// Open the order confirmation dialog.
    pub fn checkout(&mut self) -> Result<(), CommerceError> {
        self.advance(CheckoutStep::Browsing, CheckoutStep::ConfirmModalOpen, "check out")
    }

    /// Submit the delivery dialog.
    ///
    /// On success the cart is emptied, the details are blanked and the
    /// dialog closes. Incomplete details leave everything untouched and the
    /// dialog open.
    pub fn submit_delivery(
        &mut self,
        details: &mut DeliveryDetails,
        cart: &mut Cart,
    ) -> Result<Notice, CommerceError> {
        self.require(CheckoutStep::DeliveryModalOpen, "submit delivery details")?;
        details.validate()?;

        info!(
            lines = cart.line_count(),
            total = %cart.total(),
            "purchase completed"
        );
        cart.clear();
        details.reset();
        self.step = CheckoutStep::Browsing;
        Ok(Notice::PurchaseCompleted)
    }

    /// Confirm the order in the confirmation dialog.
    ///
    /// The cart is left as it was.
    pub fn confirm(&mut self) -> Result<Notice, CommerceError> {
        self.advance(
            CheckoutStep::ConfirmModalOpen,
            CheckoutStep::Browsing,
            "confirm checkout",
        )?;
        Ok(Notice::ProceedingToCheckout)
    }

    fn advance(
        &mut self,
        from: CheckoutStep,
        to: CheckoutStep,
        action: &'static str,
    ) -> Result<(), CommerceError> {
        self.require(from, action)?;
        debug!(from = from.as_str(), to = to.as_str(), "checkout transition");
        self.step = to;
        Ok(())
    }

    fn require(&self, step: CheckoutStep, action: &'static str) -> Result<(), CommerceError> {
        if self.step == step {
            Ok(())
        } else {
            Err(CommerceError::InvalidCheckoutTransition {
                from: self.step.as_str(),
                action,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Product;
    use crate::money::{Currency, Money};

    fn cart_with_item() -> Cart {
        let mut cart = Cart::new();
        cart.add_item(&Product::new(
            1,
            "Backpack",
            Money::new(10995, Currency::USD),
            "",
            "men's clothing",
        ));
        cart
    }

    #[test]
    fn test_checkout_creation() {
        let flow = CheckoutFlow::new();
        assert_eq!(flow.step(), CheckoutStep::Browsing);
        assert!(!flow.is_modal_open());
    }

    #[test]
    fn test_buy_now_path_clears_cart() {
        let mut flow = CheckoutFlow::new();
        let mut cart = cart_with_item();
        let mut details = DeliveryDetails::new("Ada", "1 Main St", "555-0100");

        flow.buy_now().unwrap();
        assert_eq!(flow.step(), CheckoutStep::DeliveryModalOpen);

        let notice = flow.submit_delivery(&mut details, &mut cart).unwrap();
        assert_eq!(notice, Notice::PurchaseCompleted);
        assert_eq!(flow.step(), CheckoutStep::Browsing);
        assert!(cart.is_empty());
        assert!(details.is_blank());
    }

    #[test]
    fn test_incomplete_delivery_keeps_dialog_open() {
        let mut flow = CheckoutFlow::new();
        let mut cart = cart_with_item();
        let mut details = DeliveryDetails::new("Ada", "", "555-0100");

        flow.buy_now().unwrap();
        let result = flow.submit_delivery(&mut details, &mut cart);

        assert_eq!(
            result,
            Err(CommerceError::IncompleteDelivery("address".to_string()))
        );
        assert_eq!(flow.step(), CheckoutStep::DeliveryModalOpen);
        assert_eq!(cart.line_count(), 1);
        assert_eq!(details.name, "Ada");
    }

    #[test]
    fn test_checkout_path_keeps_cart() {
        let mut flow = CheckoutFlow::new();
        let cart = cart_with_item();
        let before = cart.clone();

        flow.checkout().unwrap();
        assert_eq!(flow.step(), CheckoutStep::ConfirmModalOpen);
        assert_eq!(flow.confirm().unwrap(), Notice::ProceedingToCheckout);
        assert_eq!(flow.step(), CheckoutStep::Browsing);
        assert_eq!(cart, before);
    }

    #[test]
    fn test_dialogs_cannot_be_stacked() {
        let mut flow = CheckoutFlow::new();
        flow.checkout().unwrap();

        assert_eq!(
            flow.buy_now(),
            Err(CommerceError::InvalidCheckoutTransition {
                from: "confirmation dialog open",
                action: "buy now",
            })
        );
        assert_eq!(flow.step(), CheckoutStep::ConfirmModalOpen);
    }

    #[test]
    fn test_completion_requires_matching_dialog() {
        let mut flow = CheckoutFlow::new();
        assert!(flow.confirm().is_err());

        let mut cart = cart_with_item();
        let mut details = DeliveryDetails::new("Ada", "1 Main St", "555-0100");
        assert!(flow.submit_delivery(&mut details, &mut cart).is_err());
        assert_eq!(cart.line_count(), 1);
    }
}
