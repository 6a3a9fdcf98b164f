//! Thread-safe store handle.
//!
//! One `Mutex` guards the whole store, so each validate -> notify -> mutate
//! sequence runs atomically with respect to other callers. Observers are
//! called while the lock is held: an observer must never call back into the
//! same `SharedStore`, or it deadlocks.

use std::sync::{Arc, Mutex, MutexGuard};

use marketplace_core::{DomainError, DomainResult};
use marketplace_products::{Product, ReceiptItem};

use crate::event::StoreRef;
use crate::store::{Store, StoreObserver};

/// Cloneable, lock-guarded handle to a [`Store`].
#[derive(Debug, Clone)]
pub struct SharedStore {
    store_ref: StoreRef,
    inner: Arc<Mutex<Store>>,
}

impl SharedStore {
    pub fn new(store: Store) -> Self {
        Self {
            store_ref: store.store_ref().clone(),
            inner: Arc::new(Mutex::new(store)),
        }
    }

    pub fn store_ref(&self) -> &StoreRef {
        &self.store_ref
    }

    pub fn name(&self) -> &str {
        self.store_ref.name()
    }

    /// Run `f` with exclusive access to the store.
    pub fn with<R>(&self, f: impl FnOnce(&mut Store) -> DomainResult<R>) -> DomainResult<R> {
        let mut store = self.lock()?;
        f(&mut store)
    }

    pub fn create_product(
        &self,
        name: impl Into<String>,
        base_price: f64,
        initial_inventory: i64,
    ) -> DomainResult<Product> {
        self.lock()?.create_product(name, base_price, initial_inventory)
    }

    pub fn products(&self) -> DomainResult<Vec<Product>> {
        Ok(self.lock()?.products())
    }

    pub fn product_inventory(&self, product: &Product) -> DomainResult<i64> {
        self.lock()?.product_inventory(product)
    }

    pub fn is_in_stock(&self, product: &Product) -> DomainResult<bool> {
        self.lock()?.is_in_stock(product)
    }

    pub fn sale_price(&self, product: &Product) -> DomainResult<f64> {
        self.lock()?.sale_price(product)
    }

    pub fn is_on_sale(&self, product: &Product) -> DomainResult<bool> {
        self.lock()?.is_on_sale(product)
    }

    pub fn start_sale(&self, product: &Product, percent_off: f64) -> DomainResult<()> {
        self.lock()?.start_sale(product, percent_off)
    }

    pub fn end_sale(&self, product: &Product) -> DomainResult<()> {
        self.lock()?.end_sale(product)
    }

    pub fn restock_product(&self, product: &Product, num_items: i64) -> DomainResult<()> {
        self.lock()?.restock_product(product, num_items)
    }

    pub fn purchase_product(&self, product: &Product) -> DomainResult<ReceiptItem> {
        self.lock()?.purchase_product(product)
    }

    pub fn add_observer(&self, observer: Arc<StoreObserver>) -> DomainResult<()> {
        self.lock()?.add_observer(observer);
        Ok(())
    }

    pub fn remove_observer(&self, observer: &Arc<StoreObserver>) -> DomainResult<()> {
        self.lock()?.remove_observer(observer);
        Ok(())
    }

    fn lock(&self) -> DomainResult<MutexGuard<'_, Store>> {
        self.inner
            .lock()
            .map_err(|_| DomainError::invariant(format!("store '{}' lock poisoned", self.name())))
    }
}
