//! Domain error model.

use thiserror::Error;

use crate::id::ProductId;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant is synchronous and final: the failing call has not mutated
/// any store or customer state, and nothing is retried.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// An argument was empty, negative or out of range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The product was never created by the store being asked.
    #[error("product not found: {0}")]
    ProductNotFound(ProductId),

    /// A purchase was attempted with zero units in stock.
    #[error("out of stock: {0}")]
    OutOfStock(String),

    /// The customer's budget is below the item's current sale price.
    #[error("insufficient funds: price {required}, budget {available}")]
    InsufficientFunds { required: f64, available: f64 },

    /// A domain invariant was violated.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn product_not_found(id: ProductId) -> Self {
        Self::ProductNotFound(id)
    }

    pub fn out_of_stock(product_name: impl Into<String>) -> Self {
        Self::OutOfStock(product_name.into())
    }

    pub fn insufficient_funds(required: f64, available: f64) -> Self {
        Self::InsufficientFunds {
            required,
            available,
        }
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}
