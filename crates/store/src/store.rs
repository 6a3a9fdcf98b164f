use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::{debug, info};

use marketplace_core::{DomainError, DomainResult, Entity, ProductId, StoreId};
use marketplace_events::{Observer, ObserverRegistry};
use marketplace_products::{Product, ReceiptItem};

use crate::event::{StoreEvent, StoreRef};

/// Shared handle type for anything registered on a store.
pub type StoreObserver = dyn Observer<StoreEvent>;

/// Per-product state held by a store.
#[derive(Debug, Clone)]
struct Listing {
    product: Product,
    stock: i64,
    /// Fraction off the base price, in `[0, 1]`.
    discount: f64,
}

impl Listing {
    fn sale_price(&self) -> f64 {
        self.product.base_price() * (1.0 - self.discount)
    }
}

/// Aggregate root: Store.
///
/// Owns the stock count and discount of every product it created, plus an
/// ordered list of observers. Every operation validates before it mutates;
/// a failing call leaves the store exactly as it was.
///
/// Event ordering relative to state changes is part of the contract:
///
/// - `start_sale` / `end_sale`: mutate, then emit.
/// - `restock_product`: emit `BackInStock` (only when stock is 0), then add.
/// - `purchase_product`: emit `Purchase`, then decrement, then emit
///   `OutOfStock` if that was the last unit.
#[derive(Debug)]
pub struct Store {
    store_ref: StoreRef,
    listings: BTreeMap<ProductId, Listing>,
    observers: ObserverRegistry<StoreEvent>,
}

impl Store {
    pub fn new(name: impl Into<String>) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::invalid_argument("store name cannot be empty"));
        }
        Ok(Self {
            store_ref: StoreRef::new(StoreId::new(), name),
            listings: BTreeMap::new(),
            observers: ObserverRegistry::new(),
        })
    }

    pub fn id_typed(&self) -> StoreId {
        *self.store_ref.id()
    }

    pub fn name(&self) -> &str {
        self.store_ref.name()
    }

    pub fn store_ref(&self) -> &StoreRef {
        &self.store_ref
    }

    /// Create a product and list it with `initial_inventory` units and no discount.
    pub fn create_product(
        &mut self,
        name: impl Into<String>,
        base_price: f64,
        initial_inventory: i64,
    ) -> DomainResult<Product> {
        if initial_inventory < 0 {
            return Err(DomainError::invalid_argument(format!(
                "initial inventory cannot be negative (got {initial_inventory})"
            )));
        }
        let product = Product::new(ProductId::new(), name, base_price)?;

        debug!(
            store = %self.name(),
            product = %product.name(),
            base_price,
            stock = initial_inventory,
            "product created"
        );
        self.listings.insert(
            product.id_typed(),
            Listing {
                product: product.clone(),
                stock: initial_inventory,
                discount: 0.0,
            },
        );
        Ok(product)
    }

    /// Snapshot of every product this store knows about.
    pub fn products(&self) -> Vec<Product> {
        self.listings.values().map(|l| l.product.clone()).collect()
    }

    pub fn product_inventory(&self, product: &Product) -> DomainResult<i64> {
        Ok(self.listing(product)?.stock)
    }

    pub fn is_in_stock(&self, product: &Product) -> DomainResult<bool> {
        Ok(self.listing(product)?.stock > 0)
    }

    /// Base price reduced by the current discount.
    pub fn sale_price(&self, product: &Product) -> DomainResult<f64> {
        Ok(self.listing(product)?.sale_price())
    }

    pub fn is_on_sale(&self, product: &Product) -> DomainResult<bool> {
        let listing = self.listing(product)?;
        Ok(listing.sale_price() < listing.product.base_price())
    }

    /// Put a product on sale at `percent_off` (a fraction in `[0, 1]`).
    ///
    /// An unknown product is reported before an out-of-range `percent_off`.
    pub fn start_sale(&mut self, product: &Product, percent_off: f64) -> DomainResult<()> {
        let listing = self.listing_mut(product)?;
        if !(0.0..=1.0).contains(&percent_off) {
            return Err(DomainError::invalid_argument(format!(
                "percent off must be within [0, 1] (got {percent_off})"
            )));
        }
        listing.discount = percent_off;
        let product = listing.product.clone();

        self.emit(StoreEvent::sale_start(product, self.store_ref.clone()));
        Ok(())
    }

    pub fn end_sale(&mut self, product: &Product) -> DomainResult<()> {
        let listing = self.listing_mut(product)?;
        listing.discount = 0.0;
        let product = listing.product.clone();

        self.emit(StoreEvent::sale_end(product, self.store_ref.clone()));
        Ok(())
    }

    /// Add `num_items` units of stock.
    ///
    /// Observers hear `BackInStock` while the count still reads 0.
    pub fn restock_product(&mut self, product: &Product, num_items: i64) -> DomainResult<()> {
        if num_items < 0 {
            return Err(DomainError::invalid_argument(format!(
                "restock amount cannot be negative (got {num_items})"
            )));
        }
        let listing = self.listing(product)?;
        let stock = listing.stock;
        let new_stock = stock
            .checked_add(num_items)
            .ok_or_else(|| DomainError::invalid_argument("restock amount overflows stock"))?;
        let product = listing.product.clone();

        if stock == 0 {
            self.emit(StoreEvent::back_in_stock(product.clone(), self.store_ref.clone()));
        }
        self.listing_mut(&product)?.stock = new_stock;

        info!(store = %self.name(), product = %product.name(), stock = new_stock, "restocked");
        Ok(())
    }

    /// Sell one unit.
    ///
    /// The receipt is priced at the sale price in effect when `Purchase` is
    /// emitted. Observers hear `Purchase` while the count still includes the
    /// unit being sold, and `OutOfStock` after the count has reached 0.
    pub fn purchase_product(&mut self, product: &Product) -> DomainResult<ReceiptItem> {
        let listing = self.listing(product)?;
        if listing.stock == 0 {
            return Err(DomainError::out_of_stock(listing.product.name()));
        }
        let product = listing.product.clone();
        let price = listing.sale_price();
        let receipt = ReceiptItem::new(product.name(), price, self.name())?;

        self.emit(StoreEvent::purchase(product.clone(), self.store_ref.clone()));

        let listing = self.listing_mut(&product)?;
        listing.stock -= 1;
        let remaining = listing.stock;

        info!(store = %self.name(), product = %product.name(), price, stock = remaining, "sold");

        if remaining == 0 {
            self.emit(StoreEvent::out_of_stock(product, self.store_ref.clone()));
        }
        Ok(receipt)
    }

    /// Register an observer. Registering the same handle twice means it is
    /// notified twice per event.
    pub fn add_observer(&mut self, observer: Arc<StoreObserver>) {
        self.observers.add(observer);
    }

    /// Drop one registration of `observer`; a no-op if it is not registered.
    pub fn remove_observer(&mut self, observer: &Arc<StoreObserver>) {
        if !self.observers.remove(observer) {
            debug!(store = %self.name(), "remove_observer: observer was not registered");
        }
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    fn emit(&self, event: StoreEvent) {
        use marketplace_events::Event;

        debug!(
            store = %self.name(),
            event_type = event.event_type(),
            product = %event.product().name(),
            observers = self.observers.len(),
            "notifying observers"
        );
        self.observers.notify(&event);
    }

    fn listing(&self, product: &Product) -> DomainResult<&Listing> {
        self.listings
            .get(&product.id_typed())
            .ok_or_else(|| DomainError::product_not_found(product.id_typed()))
    }

    fn listing_mut(&mut self, product: &Product) -> DomainResult<&mut Listing> {
        self.listings
            .get_mut(&product.id_typed())
            .ok_or_else(|| DomainError::product_not_found(product.id_typed()))
    }
}

impl Entity for Store {
    type Id = StoreId;

    fn id(&self) -> &Self::Id {
        self.store_ref.id()
    }
}
