use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use marketplace_core::StoreId;
use marketplace_events::Event;
use marketplace_products::Product;

/// Identity + display name of the store an event came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreRef {
    id: StoreId,
    name: String,
}

impl StoreRef {
    pub fn new(id: StoreId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    pub fn id(&self) -> &StoreId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Event: PurchaseEvent (emitted before the stock decrement).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseEvent {
    pub product: Product,
    pub store: StoreRef,
    pub occurred_at: DateTime<Utc>,
}

/// Event: OutOfStockEvent (emitted after the last unit was sold).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutOfStockEvent {
    pub product: Product,
    pub store: StoreRef,
    pub occurred_at: DateTime<Utc>,
}

/// Event: BackInStockEvent (emitted before a restock from zero is applied).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackInStockEvent {
    pub product: Product,
    pub store: StoreRef,
    pub occurred_at: DateTime<Utc>,
}

/// Event: SaleStartEvent (emitted after the discount is set).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleStartEvent {
    pub product: Product,
    pub store: StoreRef,
    pub occurred_at: DateTime<Utc>,
}

/// Event: SaleEndEvent (emitted after the discount is reset).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleEndEvent {
    pub product: Product,
    pub store: StoreRef,
    pub occurred_at: DateTime<Utc>,
}

/// Every notification a store can send. Closed: observers match exhaustively.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StoreEvent {
    Purchase(PurchaseEvent),
    OutOfStock(OutOfStockEvent),
    BackInStock(BackInStockEvent),
    SaleStart(SaleStartEvent),
    SaleEnd(SaleEndEvent),
}

impl StoreEvent {
    pub fn purchase(product: Product, store: StoreRef) -> Self {
        StoreEvent::Purchase(PurchaseEvent {
            product,
            store,
            occurred_at: Utc::now(),
        })
    }

    pub fn out_of_stock(product: Product, store: StoreRef) -> Self {
        StoreEvent::OutOfStock(OutOfStockEvent {
            product,
            store,
            occurred_at: Utc::now(),
        })
    }

    pub fn back_in_stock(product: Product, store: StoreRef) -> Self {
        StoreEvent::BackInStock(BackInStockEvent {
            product,
            store,
            occurred_at: Utc::now(),
        })
    }

    pub fn sale_start(product: Product, store: StoreRef) -> Self {
        StoreEvent::SaleStart(SaleStartEvent {
            product,
            store,
            occurred_at: Utc::now(),
        })
    }

    pub fn sale_end(product: Product, store: StoreRef) -> Self {
        StoreEvent::SaleEnd(SaleEndEvent {
            product,
            store,
            occurred_at: Utc::now(),
        })
    }

    pub fn product(&self) -> &Product {
        match self {
            StoreEvent::Purchase(e) => &e.product,
            StoreEvent::OutOfStock(e) => &e.product,
            StoreEvent::BackInStock(e) => &e.product,
            StoreEvent::SaleStart(e) => &e.product,
            StoreEvent::SaleEnd(e) => &e.product,
        }
    }

    pub fn store(&self) -> &StoreRef {
        match self {
            StoreEvent::Purchase(e) => &e.store,
            StoreEvent::OutOfStock(e) => &e.store,
            StoreEvent::BackInStock(e) => &e.store,
            StoreEvent::SaleStart(e) => &e.store,
            StoreEvent::SaleEnd(e) => &e.store,
        }
    }
}

impl Event for StoreEvent {
    fn event_type(&self) -> &'static str {
        match self {
            StoreEvent::Purchase(_) => "store.product.purchased",
            StoreEvent::OutOfStock(_) => "store.product.out_of_stock",
            StoreEvent::BackInStock(_) => "store.product.back_in_stock",
            StoreEvent::SaleStart(_) => "store.sale.started",
            StoreEvent::SaleEnd(_) => "store.sale.ended",
        }
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            StoreEvent::Purchase(e) => e.occurred_at,
            StoreEvent::OutOfStock(e) => e.occurred_at,
            StoreEvent::BackInStock(e) => e.occurred_at,
            StoreEvent::SaleStart(e) => e.occurred_at,
            StoreEvent::SaleEnd(e) => e.occurred_at,
        }
    }
}
