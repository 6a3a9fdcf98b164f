use serde::{Deserialize, Serialize};

use marketplace_core::{DomainError, DomainResult, ValueObject};

/// Immutable record of one completed purchase.
///
/// Holds plain copies of the product name, the price actually paid and the
/// selling store's name, so it stays valid whatever happens to the product or
/// store later.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReceiptItem {
    product_name: String,
    price_paid: f64,
    store_name: String,
}

impl ReceiptItem {
    pub fn new(
        product_name: impl Into<String>,
        price_paid: f64,
        store_name: impl Into<String>,
    ) -> DomainResult<Self> {
        let product_name = product_name.into();
        let store_name = store_name.into();
        if product_name.trim().is_empty() || store_name.trim().is_empty() {
            return Err(DomainError::invalid_argument(
                "receipt needs a product name and a store name",
            ));
        }
        if !price_paid.is_finite() || price_paid < 0.0 {
            return Err(DomainError::invalid_argument(format!(
                "price paid cannot be negative (got {price_paid})"
            )));
        }
        Ok(Self {
            product_name,
            price_paid,
            store_name,
        })
    }

    pub fn product_name(&self) -> &str {
        &self.product_name
    }

    pub fn price_paid(&self) -> f64 {
        self.price_paid
    }

    pub fn store_name(&self) -> &str {
        &self.store_name
    }
}

impl ValueObject for ReceiptItem {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn receipts_compare_by_value() {
        let a = ReceiptItem::new("Shirt", 10.0, "Target").unwrap();
        let b = ReceiptItem::new("Shirt", 10.0, "Target").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn free_items_are_allowed() {
        let receipt = ReceiptItem::new("Sticker", 0.0, "Target").unwrap();
        assert_eq!(receipt.price_paid(), 0.0);
    }

    #[test]
    fn rejects_negative_price_and_missing_names() {
        assert!(ReceiptItem::new("Shirt", -0.5, "Target").is_err());
        assert!(ReceiptItem::new("", 1.0, "Target").is_err());
        assert!(ReceiptItem::new("Shirt", 1.0, "").is_err());
    }

    #[test]
    fn serializes_field_names() {
        let receipt = ReceiptItem::new("Shirt", 10.0, "Target").unwrap();
        let json = serde_json::to_value(&receipt).unwrap();
        assert_eq!(json["product_name"], "Shirt");
        assert_eq!(json["price_paid"], 10.0);
        assert_eq!(json["store_name"], "Target");
    }
}
