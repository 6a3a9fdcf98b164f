//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity**; they are defined entirely by their
//! attribute values. A receipt line is the canonical example here: once
//! written it is a detached snapshot and two receipts with the same product
//! name, price and store name are interchangeable.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq)]
/// struct Receipt {
///     product_name: String,
///     price_paid: f64,
/// }
///
/// impl ValueObject for Receipt {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
