//! Observer capability + ordered registry.
//!
//! Delivery is synchronous and runs in registration order. There is no
//! isolation between observers: if one panics, the observers registered after
//! it do not see the event and the panic unwinds into the caller of
//! [`ObserverRegistry::notify`].

use std::sync::Arc;

/// Something that reacts to events of type `E`.
///
/// Reactions are side effects only; nothing is returned to the emitter.
pub trait Observer<E>: Send + Sync {
    fn update(&self, event: &E);
}

impl<E, F> Observer<E> for F
where
    F: Fn(&E) + Send + Sync,
{
    fn update(&self, event: &E) {
        self(event)
    }
}

/// Ordered list of observers with list (not set) semantics.
///
/// The same observer may be registered several times and is then notified
/// once per registration. Identity is the shared handle: two registrations
/// match when they point at the same allocation.
pub struct ObserverRegistry<E> {
    observers: Vec<Arc<dyn Observer<E>>>,
}

impl<E> ObserverRegistry<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a registration at the end of the delivery order.
    pub fn add(&mut self, observer: Arc<dyn Observer<E>>) {
        self.observers.push(observer);
    }

    /// Remove the first registration of `observer`.
    ///
    /// Returns `false` (and changes nothing) if it was not registered.
    pub fn remove(&mut self, observer: &Arc<dyn Observer<E>>) -> bool {
        match self.observers.iter().position(|o| Arc::ptr_eq(o, observer)) {
            Some(index) => {
                self.observers.remove(index);
                true
            }
            None => false,
        }
    }

    /// Deliver `event` to every registration, in order.
    pub fn notify(&self, event: &E) {
        for observer in &self.observers {
            observer.update(event);
        }
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

impl<E> Default for ObserverRegistry<E> {
    fn default() -> Self {
        Self {
            observers: Vec::new(),
        }
    }
}

impl<E> core::fmt::Debug for ObserverRegistry<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ObserverRegistry")
            .field("registrations", &self.observers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::panic::{AssertUnwindSafe, catch_unwind};
    use std::sync::Mutex;

    fn recorder(tag: &'static str, log: &Arc<Mutex<Vec<String>>>) -> Arc<dyn Observer<u32>> {
        let log = Arc::clone(log);
        Arc::new(move |event: &u32| log.lock().unwrap().push(format!("{tag}:{event}")))
    }

    #[test]
    fn notifies_in_registration_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut registry = ObserverRegistry::new();
        registry.add(recorder("a", &log));
        registry.add(recorder("b", &log));

        registry.notify(&7);

        assert_eq!(*log.lock().unwrap(), vec!["a:7", "b:7"]);
    }

    #[test]
    fn duplicate_registration_is_notified_twice() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let a = recorder("a", &log);
        let mut registry = ObserverRegistry::new();
        registry.add(Arc::clone(&a));
        registry.add(recorder("b", &log));
        registry.add(Arc::clone(&a));

        registry.notify(&1);

        assert_eq!(*log.lock().unwrap(), vec!["a:1", "b:1", "a:1"]);
    }

    #[test]
    fn remove_drops_only_the_first_matching_registration() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let a = recorder("a", &log);
        let mut registry = ObserverRegistry::new();
        registry.add(Arc::clone(&a));
        registry.add(Arc::clone(&a));

        assert!(registry.remove(&a));
        assert_eq!(registry.len(), 1);

        registry.notify(&3);
        assert_eq!(*log.lock().unwrap(), vec!["a:3"]);
    }

    #[test]
    fn removing_an_unknown_observer_is_a_no_op() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut registry = ObserverRegistry::new();
        registry.add(recorder("a", &log));

        assert!(!registry.remove(&recorder("a", &log)));
        assert_eq!(registry.len(), 1);
    }

    fn failing_observer(_: &u32) {
        panic!("observer failed");
    }

    #[test]
    fn a_panicking_observer_stops_delivery_to_later_ones() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut registry = ObserverRegistry::new();
        registry.add(recorder("first", &log));
        registry.add(Arc::new(failing_observer));
        registry.add(recorder("last", &log));

        let result = catch_unwind(AssertUnwindSafe(|| registry.notify(&9)));

        assert!(result.is_err());
        assert_eq!(*log.lock().unwrap(), vec!["first:9"]);
    }
}
