//! Store aggregate: catalog, stock counts, discounts and event emission.
//!
//! A [`Store`] mints products, tracks how many of each it holds and what
//! discount applies, and tells its registered observers about every
//! purchase, stock transition and sale as it happens.

pub mod event;
pub mod shared;
pub mod store;
pub mod storefront;

pub use event::{
    BackInStockEvent, OutOfStockEvent, PurchaseEvent, SaleEndEvent, SaleStartEvent, StoreEvent,
    StoreRef,
};
pub use shared::SharedStore;
pub use store::{Store, StoreObserver};
pub use storefront::Storefront;
