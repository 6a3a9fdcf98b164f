//! In-memory event bus for tests/dev.

use std::sync::{Mutex, mpsc};

use thiserror::Error;

use crate::bus::{EventBus, Subscription};

#[derive(Debug, Error)]
pub enum InMemoryBusError {
    /// Publish failed due to internal lock poisoning.
    #[error("event bus lock poisoned")]
    Poisoned,
}

/// In-memory pub/sub bus.
///
/// - No IO / no async
/// - Fan-out to every live subscription
/// - Dropped subscriptions are pruned on the next publish
#[derive(Debug)]
pub struct InMemoryEventBus<M> {
    subscribers: Mutex<Vec<mpsc::Sender<M>>>,
}

impl<M> InMemoryEventBus<M> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live subscriptions as of the last publish.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.lock().map(|subs| subs.len()).unwrap_or(0)
    }
}

impl<M> Default for InMemoryEventBus<M> {
    fn default() -> Self {
        Self {
            subscribers: Mutex::new(Vec::new()),
        }
    }
}

impl<M> EventBus<M> for InMemoryEventBus<M>
where
    M: Clone + Send + 'static,
{
    type Error = InMemoryBusError;

    fn publish(&self, message: M) -> Result<(), Self::Error> {
        let mut subs = self.subscribers.lock().map_err(|_| InMemoryBusError::Poisoned)?;

        // Drop any dead subscribers while publishing.
        subs.retain(|tx| tx.send(message.clone()).is_ok());

        Ok(())
    }

    fn subscribe(&self) -> Subscription<M> {
        let (tx, rx) = mpsc::channel();

        // A poisoned lock still yields a subscription; it just never receives.
        if let Ok(mut subs) = self.subscribers.lock() {
            subs.push(tx);
        }

        Subscription::new(rx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc::TryRecvError;

    #[test]
    fn every_subscription_gets_every_message() {
        let bus: InMemoryEventBus<&str> = InMemoryEventBus::new();
        let first = bus.subscribe();
        let second = bus.subscribe();

        bus.publish("sale started").unwrap();
        bus.publish("sale ended").unwrap();

        assert_eq!(first.drain(), vec!["sale started", "sale ended"]);
        assert_eq!(second.drain(), vec!["sale started", "sale ended"]);
    }

    #[test]
    fn late_subscribers_do_not_see_earlier_messages() {
        let bus: InMemoryEventBus<u32> = InMemoryEventBus::new();
        bus.publish(1u32).unwrap();
        let late = bus.subscribe();
        bus.publish(2u32).unwrap();

        assert_eq!(late.drain(), vec![2]);
    }

    #[test]
    fn try_recv_never_blocks() {
        let bus: InMemoryEventBus<u32> = InMemoryEventBus::new();
        let subscription = bus.subscribe();
        assert_eq!(subscription.try_recv(), Err(TryRecvError::Empty));

        bus.publish(7u32).unwrap();

        assert_eq!(subscription.try_recv(), Ok(7));
        assert_eq!(subscription.try_recv(), Err(TryRecvError::Empty));
    }

    #[test]
    fn dropped_subscriptions_are_pruned() {
        let bus: InMemoryEventBus<u32> = InMemoryEventBus::new();
        let kept = bus.subscribe();
        drop(bus.subscribe());
        assert_eq!(bus.subscriber_count(), 2);

        bus.publish(5u32).unwrap();

        assert_eq!(bus.subscriber_count(), 1);
        assert_eq!(kept.drain(), vec![5]);
    }
}
