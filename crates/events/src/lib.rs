//! Event & observer mechanics (domain-agnostic).
//!
//! - [`Event`]: immutable facts with a stable type name
//! - [`Observer`] / [`ObserverRegistry`]: synchronous, ordered, fail-fast fan-out
//! - [`NotificationSink`]: the outbound boundary for human-readable messages
//! - [`EventBus`] / [`InMemoryEventBus`] / [`BusObserver`]: decoupled pub/sub

pub mod bus;
pub mod event;
pub mod forward;
pub mod in_memory_bus;
pub mod observer;
pub mod sink;

pub use bus::{EventBus, Subscription};
pub use event::Event;
pub use forward::BusObserver;
pub use in_memory_bus::{InMemoryBusError, InMemoryEventBus};
pub use observer::{Observer, ObserverRegistry};
pub use sink::{MemorySink, NotificationSink, TracingSink};
