//! Event publishing/subscription abstraction (mechanics only).
//!
//! Observers are called synchronously, inside the emitting operation. The bus
//! is the decoupled alternative: a consumer subscribes once and drains its
//! [`Subscription`] whenever it likes, without being registered on any store.
//!
//! - **Transport-agnostic**: the trait says nothing about channels or brokers
//! - **Broadcast**: each subscription gets its own copy of every message
//! - **No persistence**: messages published before a subscription exists are not replayed

use std::sync::Arc;
use std::sync::mpsc::{Receiver, TryRecvError};

/// A subscription to an event stream.
///
/// Messages are received in the order they were published. A subscription is
/// meant to be drained by one consumer.
///
/// ```ignore
/// let subscription = bus.subscribe();
/// while let Ok(event) = subscription.try_recv() {
///     println!("{}", event.event_type());
/// }
/// ```
#[derive(Debug)]
pub struct Subscription<M> {
    receiver: Receiver<M>,
}

impl<M> Subscription<M> {
    pub fn new(receiver: Receiver<M>) -> Self {
        Self { receiver }
    }

    /// Next queued message, if any. Never blocks.
    pub fn try_recv(&self) -> Result<M, TryRecvError> {
        self.receiver.try_recv()
    }

    /// Everything currently queued, without blocking.
    pub fn drain(&self) -> Vec<M> {
        self.receiver.try_iter().collect()
    }
}

/// Domain-agnostic event bus (pub/sub abstraction).
///
/// `publish()` can fail (e.g. a poisoned lock); the failure is surfaced to the
/// caller, which decides whether it matters.
pub trait EventBus<M>: Send + Sync {
    type Error: core::fmt::Debug + core::fmt::Display + Send + Sync + 'static;

    fn publish(&self, message: M) -> Result<(), Self::Error>;

    fn subscribe(&self) -> Subscription<M>;
}

impl<M, B> EventBus<M> for Arc<B>
where
    B: EventBus<M> + ?Sized,
{
    type Error = B::Error;

    fn publish(&self, message: M) -> Result<(), Self::Error> {
        (**self).publish(message)
    }

    fn subscribe(&self) -> Subscription<M> {
        (**self).subscribe()
    }
}
