use std::sync::Arc;

use tracing::debug;

use marketplace_events::{NotificationSink, Observer};
use marketplace_store::StoreEvent;

/// A customer's reaction to store events: one message per event, written to
/// the customer's notification sink.
///
/// Holds no customer state, so stores can keep it registered while the
/// customer itself is busy buying.
pub struct CustomerAlerts {
    customer_name: String,
    sink: Arc<dyn NotificationSink>,
}

impl CustomerAlerts {
    pub fn new(customer_name: impl Into<String>, sink: Arc<dyn NotificationSink>) -> Self {
        Self {
            customer_name: customer_name.into(),
            sink,
        }
    }

    /// The text sent for `event`.
    pub fn message_for(event: &StoreEvent) -> String {
        let product = event.product().name();
        let store = event.store().name();
        match event {
            StoreEvent::BackInStock(_) => format!("{product} is back in stock at {store}"),
            StoreEvent::OutOfStock(_) => format!("{product} is now out of stock at {store}"),
            StoreEvent::Purchase(_) => format!("Someone purchased {product} at {store}"),
            StoreEvent::SaleEnd(_) => format!("The sale for {product} at {store} has ended"),
            StoreEvent::SaleStart(_) => format!("New sale for {product} at {store}!"),
        }
    }
}

impl Observer<StoreEvent> for CustomerAlerts {
    fn update(&self, event: &StoreEvent) {
        let message = Self::message_for(event);
        debug!(customer = %self.customer_name, %message, "notifying customer");
        self.sink.emit(&message);
    }
}

impl core::fmt::Debug for CustomerAlerts {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CustomerAlerts")
            .field("customer_name", &self.customer_name)
            .finish_non_exhaustive()
    }
}
