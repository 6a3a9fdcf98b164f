use marketplace_core::DomainResult;
use marketplace_products::{Product, ReceiptItem};

use crate::event::StoreRef;
use crate::shared::SharedStore;
use crate::store::Store;

/// What a buyer needs from a store: a price quote and a checkout.
///
/// Implemented by the plain [`Store`] and by the lock-guarded [`SharedStore`],
/// so buying code does not care which one it holds.
pub trait Storefront {
    fn store_ref(&self) -> StoreRef;

    fn sale_price(&self, product: &Product) -> DomainResult<f64>;

    fn purchase_product(&mut self, product: &Product) -> DomainResult<ReceiptItem>;
}

impl Storefront for Store {
    fn store_ref(&self) -> StoreRef {
        Store::store_ref(self).clone()
    }

    fn sale_price(&self, product: &Product) -> DomainResult<f64> {
        Store::sale_price(self, product)
    }

    fn purchase_product(&mut self, product: &Product) -> DomainResult<ReceiptItem> {
        Store::purchase_product(self, product)
    }
}

impl Storefront for SharedStore {
    fn store_ref(&self) -> StoreRef {
        SharedStore::store_ref(self).clone()
    }

    fn sale_price(&self, product: &Product) -> DomainResult<f64> {
        SharedStore::sale_price(self, product)
    }

    fn purchase_product(&mut self, product: &Product) -> DomainResult<ReceiptItem> {
        SharedStore::purchase_product(self, product)
    }
}
