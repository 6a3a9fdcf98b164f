use std::sync::Arc;

use tracing::{info, warn};

use marketplace_core::{DomainError, DomainResult};
use marketplace_customers::Customer;
use marketplace_events::{BusObserver, EventBus, InMemoryEventBus, NotificationSink};
use marketplace_products::ReceiptItem;
use marketplace_store::{Store, StoreEvent};

/// Final state of one customer after the run.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerSummary {
    pub name: String,
    pub budget: f64,
    pub purchases: Vec<ReceiptItem>,
}

impl From<&Customer> for CustomerSummary {
    fn from(customer: &Customer) -> Self {
        Self {
            name: customer.name().to_string(),
            budget: customer.budget(),
            purchases: customer.purchase_history(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ScenarioReport {
    /// Every store event, in emission order, as delivered by the bus.
    pub events: Vec<StoreEvent>,
    pub customers: Vec<CustomerSummary>,
    /// Purchases the stores or budgets turned down.
    pub rejected: Vec<DomainError>,
}

/// Run the reference scenario. Customer notifications go to `sink`.
pub fn run(sink: Arc<dyn NotificationSink>) -> DomainResult<ScenarioReport> {
    let bus: Arc<InMemoryEventBus<StoreEvent>> = Arc::new(InMemoryEventBus::new());
    let subscription = bus.subscribe();
    let forwarder = Arc::new(BusObserver::new(bus.clone()));

    let mut target = Store::new("Target")?;
    let mut walmart = Store::new("Walmart")?;
    target.add_observer(forwarder.clone());
    walmart.add_observer(forwarder);

    let shirt = target.create_product("Shirt", 20.0, 1)?;
    let mug = walmart.create_product("Mug", 8.0, 3)?;

    let mut alice = Customer::with_sink("Alice", 15.0, sink.clone())?;
    let mut bob = Customer::with_sink("Bob", 50.0, sink)?;
    target.add_observer(alice.observer());
    walmart.add_observer(bob.observer());

    let mut rejected = Vec::new();

    target.start_sale(&shirt, 0.5)?;
    alice.purchase_product(&shirt, &mut target)?;

    if let Err(err) = bob.purchase_product(&shirt, &mut target) {
        warn!(customer = bob.name(), error = %err, "purchase turned down");
        rejected.push(err);
    }

    target.restock_product(&shirt, 2)?;
    target.end_sale(&shirt)?;
    bob.purchase_product(&shirt, &mut target)?;

    walmart.start_sale(&mug, 0.25)?;
    bob.purchase_product(&mug, &mut walmart)?;
    if let Err(err) = alice.purchase_product(&mug, &mut walmart) {
        warn!(customer = alice.name(), error = %err, "purchase turned down");
        rejected.push(err);
    }
    walmart.end_sale(&mug)?;

    let events = subscription.drain();
    info!(events = events.len(), rejected = rejected.len(), "scenario finished");

    Ok(ScenarioReport {
        events,
        customers: vec![CustomerSummary::from(&alice), CustomerSummary::from(&bob)],
        rejected,
    })
}
