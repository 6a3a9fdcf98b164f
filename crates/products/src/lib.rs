//! Catalog value types.
//!
//! [`Product`] is the immutable sellable item a store creates; [`ReceiptItem`]
//! is the detached record of one completed purchase. Both validate on
//! construction and never change afterwards.

pub mod product;
pub mod receipt;

pub use product::Product;
pub use receipt::ReceiptItem;
