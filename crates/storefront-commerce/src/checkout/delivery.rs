//! Delivery details collected by the Buy Now dialog.

use crate::CommerceError;
use serde::{Deserialize, Serialize};

/// Contact and shipping details for a purchase.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct DeliveryDetails {
    pub name: String,
    pub address: String,
    pub phone: String,
}

impl DeliveryDetails {
    /// Create delivery details.
    pub fn new(
        name: impl Into<String>,
        address: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            phone: phone.into(),
        }
    }

    /// Required fields that are empty or whitespace.
    ///
    /// Stricter than a plain non-empty check: a field holding only spaces
    /// counts as missing.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("name", &self.name),
            ("address", &self.address),
            ("phone", &self.phone),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect()
    }

    /// Check if every required field is filled in.
    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Check if every field is blank.
    pub fn is_blank(&self) -> bool {
        self.name.is_empty() && self.address.is_empty() && self.phone.is_empty()
    }

    /// Fail with the list of missing fields.
    pub fn validate(&self) -> Result<(), CommerceError> {
        let missing = self.missing_fields();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(CommerceError::IncompleteDelivery(missing.join(", ")))
        }
    }

    /// Clear every field.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_details() {
        let details = DeliveryDetails::new("Ada", "1 Main St", "555-0100");
        assert!(details.is_complete());
        assert!(details.validate().is_ok());
    }

    #[test]
    fn test_missing_fields_are_named() {
        let details = DeliveryDetails::new("Ada", "   ", "");
        assert_eq!(details.missing_fields(), vec!["address", "phone"]);
        assert_eq!(
            details.validate(),
            Err(CommerceError::IncompleteDelivery("address, phone".to_string()))
        );
    }

    #[test]
    fn test_whitespace_only_fields_are_missing() {
        let details = DeliveryDetails::new(" \t", "\n", "  ");
        assert!(!details.is_blank());
        assert!(!details.is_complete());
        assert_eq!(details.missing_fields(), vec!["name", "address", "phone"]);
    }

    #[test]
    fn test_reset() {
        let mut details = DeliveryDetails::new("Ada", "1 Main St", "555-0100");
        details.reset();
        assert!(details.is_blank());
    }
}
