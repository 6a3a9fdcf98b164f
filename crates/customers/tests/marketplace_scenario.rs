//! End-to-end flows across stores, customers and observers.

use std::sync::{Arc, Mutex};
use std::thread;

use marketplace_core::DomainError;
use marketplace_customers::Customer;
use marketplace_events::{BusObserver, Event, EventBus, InMemoryEventBus, MemorySink};
use marketplace_products::ReceiptItem;
use marketplace_store::{SharedStore, Store, StoreEvent};

#[derive(Default)]
struct Recorder {
    seen: Mutex<Vec<StoreEvent>>,
}

impl Recorder {
    fn kinds(&self) -> Vec<&'static str> {
        self.seen
            .lock()
            .unwrap()
            .iter()
            .map(|e| e.event_type())
            .collect()
    }
}

impl marketplace_events::Observer<StoreEvent> for Recorder {
    fn update(&self, event: &StoreEvent) {
        self.seen.lock().unwrap().push(event.clone());
    }
}

#[test]
fn discounted_last_unit_purchase() {
    let mut target = Store::new("Target").unwrap();
    let shirt = target.create_product("Shirt", 20.0, 1).unwrap();
    target.start_sale(&shirt, 0.5).unwrap();

    let recorder = Arc::new(Recorder::default());
    target.add_observer(recorder.clone());

    let mut alice = Customer::new("Alice", 15.0).unwrap();
    let receipt = alice.purchase_product(&shirt, &mut target).unwrap();

    assert_eq!(receipt, ReceiptItem::new("Shirt", 10.0, "Target").unwrap());
    assert_eq!(alice.budget(), 5.0);
    assert_eq!(target.product_inventory(&shirt).unwrap(), 0);
    assert!(!target.is_in_stock(&shirt).unwrap());
    assert_eq!(alice.purchase_history(), vec![receipt]);
    assert_eq!(
        recorder.kinds(),
        vec!["store.product.purchased", "store.product.out_of_stock"]
    );
}

#[test]
fn insufficient_budget_leaves_store_and_customer_untouched() {
    let mut target = Store::new("Target").unwrap();
    let shirt = target.create_product("Shirt", 20.0, 3).unwrap();
    let recorder = Arc::new(Recorder::default());
    target.add_observer(recorder.clone());
    let mut bob = Customer::new("Bob", 19.99).unwrap();

    let err = bob.purchase_product(&shirt, &mut target).unwrap_err();

    assert!(matches!(err, DomainError::InsufficientFunds { .. }));
    assert_eq!(target.product_inventory(&shirt).unwrap(), 3);
    assert_eq!(bob.budget(), 19.99);
    assert!(bob.purchase_history().is_empty());
    assert!(recorder.kinds().is_empty());
}

#[test]
fn subscribed_customers_hear_about_stock_and_sales() {
    let sink = Arc::new(MemorySink::new());
    let alice = Customer::with_sink("Alice", 100.0, sink.clone()).unwrap();
    let mut walmart = Store::new("Walmart").unwrap();
    let mug = walmart.create_product("Mug", 8.0, 1).unwrap();
    walmart.add_observer(alice.observer());

    let mut bob = Customer::new("Bob", 50.0).unwrap();
    bob.purchase_product(&mug, &mut walmart).unwrap();
    walmart.restock_product(&mug, 5).unwrap();
    walmart.start_sale(&mug, 0.25).unwrap();
    walmart.end_sale(&mug).unwrap();

    assert_eq!(
        sink.messages(),
        vec![
            "Someone purchased Mug at Walmart",
            "Mug is now out of stock at Walmart",
            "Mug is back in stock at Walmart",
            "New sale for Mug at Walmart!",
            "The sale for Mug at Walmart has ended",
        ]
    );
}

#[test]
fn double_registration_means_double_notification() {
    let sink = Arc::new(MemorySink::new());
    let alice = Customer::with_sink("Alice", 100.0, sink.clone()).unwrap();
    let mut target = Store::new("Target").unwrap();
    let shirt = target.create_product("Shirt", 20.0, 2).unwrap();

    target.add_observer(alice.observer());
    target.add_observer(alice.observer());
    target.start_sale(&shirt, 0.1).unwrap();
    assert_eq!(sink.messages().len(), 2);

    target.remove_observer(&alice.observer());
    target.end_sale(&shirt).unwrap();
    assert_eq!(sink.messages().len(), 3);
}

#[test]
fn customers_shop_across_stores() {
    let mut target = Store::new("Target").unwrap();
    let mut walmart = Store::new("Walmart").unwrap();
    let shirt = target.create_product("Shirt", 20.0, 5).unwrap();
    let mug = walmart.create_product("Mug", 8.0, 5).unwrap();
    walmart.start_sale(&mug, 0.5).unwrap();

    let mut alice = Customer::new("Alice", 30.0).unwrap();
    alice.purchase_product(&shirt, &mut target).unwrap();
    alice.purchase_product(&mug, &mut walmart).unwrap();

    let err = alice.purchase_product(&mug, &mut target).unwrap_err();
    assert_eq!(err, DomainError::product_not_found(mug.id_typed()));

    let stores: Vec<String> = alice
        .purchase_history()
        .iter()
        .map(|r| r.store_name().to_string())
        .collect();
    assert_eq!(stores, vec!["Target", "Walmart"]);
    assert_eq!(alice.budget(), 6.0);
}

#[test]
fn customers_buy_from_a_shared_store_concurrently() {
    let mut target = SharedStore::new(Store::new("Target").unwrap());
    let shirt = target.create_product("Shirt", 10.0, 5).unwrap();

    let buyers: Vec<Customer> = thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let mut store = target.clone();
                let shirt = shirt.clone();
                scope.spawn(move || {
                    let mut customer = Customer::new(format!("buyer-{i}"), 100.0).unwrap();
                    for _ in 0..3 {
                        let _ = customer.purchase_product(&shirt, &mut store);
                    }
                    customer
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    let bought: usize = buyers.iter().map(|c| c.purchase_history().len()).sum();
    assert_eq!(bought, 5);
    assert_eq!(target.product_inventory(&shirt).unwrap(), 0);

    let mut alice = Customer::new("Alice", 100.0).unwrap();
    let err = alice.purchase_product(&shirt, &mut target).unwrap_err();
    assert_eq!(err, DomainError::out_of_stock("Shirt"));
}

#[test]
fn bus_subscribers_see_store_events_in_order() {
    let bus: Arc<InMemoryEventBus<StoreEvent>> = Arc::new(InMemoryEventBus::new());
    let subscription = bus.subscribe();

    let mut target = Store::new("Target").unwrap();
    let shirt = target.create_product("Shirt", 20.0, 1).unwrap();
    target.add_observer(Arc::new(BusObserver::new(bus.clone())));

    let mut alice = Customer::new("Alice", 50.0).unwrap();
    alice.purchase_product(&shirt, &mut target).unwrap();
    target.restock_product(&shirt, 2).unwrap();

    let kinds: Vec<&str> = subscription.drain().iter().map(|e| e.event_type()).collect();
    assert_eq!(
        kinds,
        vec![
            "store.product.purchased",
            "store.product.out_of_stock",
            "store.product.back_in_stock",
        ]
    );
}
