use std::sync::Arc;

use tracing::{info, warn};

use marketplace_core::{CustomerId, DomainError, DomainResult, Entity};
use marketplace_events::{NotificationSink, Observer, TracingSink};
use marketplace_products::{Product, ReceiptItem};
use marketplace_store::{StoreEvent, StoreObserver, Storefront};

use crate::alerts::CustomerAlerts;

/// A buyer with a budget and an append-only purchase history.
#[derive(Debug)]
pub struct Customer {
    id: CustomerId,
    name: String,
    budget: f64,
    purchase_history: Vec<ReceiptItem>,
    alerts: Arc<CustomerAlerts>,
}

impl Customer {
    /// Create a customer whose notifications go to the `tracing` log.
    pub fn new(name: impl Into<String>, budget: f64) -> DomainResult<Self> {
        Self::with_sink(name, budget, Arc::new(TracingSink))
    }

    /// Create a customer whose notifications go to `sink`.
    ///
    /// The name must not be blank and the budget must be a finite number
    /// greater than zero.
    pub fn with_sink(
        name: impl Into<String>,
        budget: f64,
        sink: Arc<dyn NotificationSink>,
    ) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::invalid_argument("customer name cannot be empty"));
        }
        if !budget.is_finite() || budget <= 0.0 {
            return Err(DomainError::invalid_argument(format!(
                "budget must be greater than zero (got {budget})"
            )));
        }
        Ok(Self {
            id: CustomerId::new(),
            alerts: Arc::new(CustomerAlerts::new(name.clone(), sink)),
            name,
            budget,
            purchase_history: Vec::new(),
        })
    }

    pub fn id_typed(&self) -> CustomerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn budget(&self) -> f64 {
        self.budget
    }

    /// Handle to register with stores. Every call returns the same handle,
    /// so it can also be passed to `remove_observer`.
    pub fn observer(&self) -> Arc<StoreObserver> {
        self.alerts.clone()
    }

    /// Buy one unit of `product` from `store`.
    ///
    /// The sale price is read once; that single figure is what gets charged
    /// and what the receipt records. If the store refuses the sale, neither
    /// the budget nor the history changes.
    pub fn purchase_product<S>(&mut self, product: &Product, store: &mut S) -> DomainResult<ReceiptItem>
    where
        S: Storefront + ?Sized,
    {
        let price = store.sale_price(product)?;
        if price > self.budget {
            warn!(
                customer = %self.name,
                product = %product.name(),
                price,
                budget = self.budget,
                "purchase rejected: insufficient funds"
            );
            return Err(DomainError::insufficient_funds(price, self.budget));
        }
        let store_ref = store.store_ref();
        let receipt = ReceiptItem::new(product.name(), price, store_ref.name())?;

        // The store's own receipt is priced from the same discount state; ours
        // is the one kept.
        store.purchase_product(product)?;

        self.budget -= price;
        self.purchase_history.push(receipt.clone());

        info!(
            customer = %self.name,
            product = %product.name(),
            store = %store_ref.name(),
            price,
            budget = self.budget,
            "purchase completed"
        );
        Ok(receipt)
    }

    /// Snapshot of every completed purchase, oldest first.
    pub fn purchase_history(&self) -> Vec<ReceiptItem> {
        self.purchase_history.clone()
    }
}

impl Entity for Customer {
    type Id = CustomerId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl Observer<StoreEvent> for Customer {
    fn update(&self, event: &StoreEvent) {
        self.alerts.update(event);
    }
}
