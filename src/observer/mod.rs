// Observer Pattern - subject/observer notification
// A subject keeps its own set of observers and notifies them synchronously.

mod cart;
pub mod demo;
mod sink;

pub use cart::{Cart, CartObserver, Label};
pub use sink::{NotificationSink, RecordingSink, StdoutSink};

use std::cell::RefCell;
use std::rc::Rc;

use tracing::debug;

// ============================================================================
// Capabilities
// ============================================================================

/// Something that reacts when the subject it is attached to changes.
///
/// The notification carries no payload: observers read whatever state they
/// need from the subject they hold a reference to.
pub trait Observer {
    fn update(&self);
}

/// A subject that owns an [`ObserverSet`] and notifies it on change.
///
/// Only `observers` has to be provided; `attach`, `detach` and `notify`
/// forward to the set.
pub trait Subject {
    fn observers(&self) -> &ObserverSet;

    fn attach(&self, observer: Rc<dyn Observer>) -> bool {
        self.observers().insert(observer)
    }

    fn detach(&self, observer: &Rc<dyn Observer>) -> bool {
        self.observers().remove(observer)
    }

    fn notify(&self) {
        self.observers().notify_all();
    }
}

// ============================================================================
// Observer registry
// ============================================================================

/// Registered observers of a single subject, unique by identity.
#[derive(Default)]
pub struct ObserverSet {
    observers: RefCell<Vec<Rc<dyn Observer>>>,
}

// Compare allocation addresses only; fat-pointer equality would also compare
// vtables, which are not guaranteed unique.
fn same_observer(a: &Rc<dyn Observer>, b: &Rc<dyn Observer>) -> bool {
    std::ptr::addr_eq(Rc::as_ptr(a), Rc::as_ptr(b))
}

impl ObserverSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `observer` unless it is already registered. Returns `true` if it
    /// was newly added.
    pub fn insert(&self, observer: Rc<dyn Observer>) -> bool {
        let mut observers = self.observers.borrow_mut();
        if observers.iter().any(|o| same_observer(o, &observer)) {
            debug!("observer already attached");
            return false;
        }
        observers.push(observer);
        debug!(count = observers.len(), "observer attached");
        true
    }

    /// Removes `observer` if registered. Absent observers are ignored.
    pub fn remove(&self, observer: &Rc<dyn Observer>) -> bool {
        let mut observers = self.observers.borrow_mut();
        let before = observers.len();
        observers.retain(|o| !same_observer(o, observer));
        let removed = observers.len() != before;
        debug!(removed, count = observers.len(), "observer detach requested");
        removed
    }

    pub fn contains(&self, observer: &Rc<dyn Observer>) -> bool {
        self.observers
            .borrow()
            .iter()
            .any(|o| same_observer(o, observer))
    }

    pub fn len(&self) -> usize {
        self.observers.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.borrow().is_empty()
    }

    /// Calls `update` on every observer registered when the call starts.
    ///
    /// The borrow is released before any observer runs, so an observer may
    /// attach or detach during its `update`; the change applies to the next
    /// notification.
    pub fn notify_all(&self) {
        let snapshot: Vec<Rc<dyn Observer>> = self.observers.borrow().clone();
        debug!(count = snapshot.len(), "notifying observers");
        for observer in snapshot {
            observer.update();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct Counter {
        hits: Cell<usize>,
    }

    impl Counter {
        fn new() -> Rc<Self> {
            Rc::new(Self { hits: Cell::new(0) })
        }
    }

    impl Observer for Counter {
        fn update(&self) {
            self.hits.set(self.hits.get() + 1);
        }
    }

    #[derive(Default)]
    struct Plain {
        observers: ObserverSet,
    }

    impl Subject for Plain {
        fn observers(&self) -> &ObserverSet {
            &self.observers
        }
    }

    #[test]
    fn test_notify_reaches_every_observer_once() {
        let subject = Plain::default();
        let a = Counter::new();
        let b = Counter::new();
        subject.attach(a.clone());
        subject.attach(b.clone());

        subject.notify();

        assert_eq!(a.hits.get(), 1);
        assert_eq!(b.hits.get(), 1);
    }

    #[test]
    fn test_attach_is_idempotent() {
        let subject = Plain::default();
        let a = Counter::new();
        assert!(subject.attach(a.clone()));
        assert!(!subject.attach(a.clone()));
        assert_eq!(subject.observers().len(), 1);

        subject.notify();
        assert_eq!(a.hits.get(), 1);
    }

    #[test]
    fn test_detach_absent_is_noop() {
        let subject = Plain::default();
        let a: Rc<dyn Observer> = Counter::new();
        assert!(!subject.detach(&a));
        assert!(subject.observers().is_empty());
    }

    #[test]
    fn test_detached_observer_is_not_notified() {
        let subject = Plain::default();
        let a = Counter::new();
        let handle: Rc<dyn Observer> = a.clone();
        subject.attach(handle.clone());
        assert!(subject.observers().contains(&handle));

        assert!(subject.detach(&handle));
        subject.notify();

        assert_eq!(a.hits.get(), 0);
        assert!(!subject.observers().contains(&handle));
    }

    #[test]
    fn test_distinct_subjects_do_not_share_observers() {
        let first = Plain::default();
        let second = Plain::default();
        let a = Counter::new();
        first.attach(a.clone());

        second.notify();

        assert_eq!(a.hits.get(), 0);
        assert!(second.observers().is_empty());
    }

    struct SelfDetaching {
        subject: Rc<Plain>,
        me: RefCell<Option<Rc<dyn Observer>>>,
        hits: Cell<usize>,
    }

    impl Observer for SelfDetaching {
        fn update(&self) {
            self.hits.set(self.hits.get() + 1);
            if let Some(me) = self.me.borrow_mut().take() {
                self.subject.detach(&me);
            }
        }
    }

    #[test]
    fn test_observer_can_detach_during_update() {
        let subject = Rc::new(Plain::default());
        let observer = Rc::new(SelfDetaching {
            subject: subject.clone(),
            me: RefCell::new(None),
            hits: Cell::new(0),
        });
        let handle: Rc<dyn Observer> = observer.clone();
        *observer.me.borrow_mut() = Some(handle.clone());
        subject.attach(handle);

        subject.notify();
        subject.notify();

        assert_eq!(observer.hits.get(), 1);
        assert!(subject.observers().is_empty());
    }
}
