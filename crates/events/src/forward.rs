//! Bridge from synchronous observation to the event bus.

use tracing::warn;

use crate::bus::EventBus;
use crate::event::Event;
use crate::observer::Observer;

/// Observer that republishes every event it sees onto an [`EventBus`].
///
/// Register it like any other observer; consumers then subscribe to the bus
/// instead of to the emitter. A failed publish is logged and swallowed, since
/// an observer has no way to report back to the emitter.
#[derive(Debug)]
pub struct BusObserver<B> {
    bus: B,
}

impl<B> BusObserver<B> {
    pub fn new(bus: B) -> Self {
        Self { bus }
    }

    pub fn bus(&self) -> &B {
        &self.bus
    }
}

impl<E, B> Observer<E> for BusObserver<B>
where
    E: Event,
    B: EventBus<E>,
{
    fn update(&self, event: &E) {
        if let Err(err) = self.bus.publish(event.clone()) {
            warn!(event_type = event.event_type(), error = %err, "failed to forward event to bus");
        }
    }
}
