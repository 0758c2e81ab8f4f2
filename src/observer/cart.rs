use std::cell::Cell;
use std::fmt;
use std::rc::{Rc, Weak};

use tracing::debug;

use super::{NotificationSink, Observer, ObserverSet, Subject};

/// A cart whose item count is watched by observers.
pub struct Cart {
    items: Cell<i64>,
    observers: ObserverSet,
}

impl Cart {
    /// Item count of a cart nobody has set yet.
    pub const UNSET: i64 = -1;

    pub fn new() -> Rc<Self> {
        Rc::new(Self {
            items: Cell::new(Self::UNSET),
            observers: ObserverSet::new(),
        })
    }

    pub fn items(&self) -> i64 {
        self.items.get()
    }

    /// Stores the new count, then notifies every attached observer before
    /// returning.
    pub fn set_item_count(&self, items: i64) {
        debug!(items, "cart item count changed");
        self.items.set(items);
        self.notify();
    }
}

impl Subject for Cart {
    fn observers(&self) -> &ObserverSet {
        &self.observers
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    Primary,
    Secondary,
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Primary => write!(f, "Primary"),
            Label::Secondary => write!(f, "Secondary"),
        }
    }
}

/// Prints the item count of the cart it watches.
pub struct CartObserver {
    label: Label,
    cart: Weak<Cart>,
    sink: Rc<dyn NotificationSink>,
}

impl CartObserver {
    /// Creates an observer of `cart` and attaches it right away.
    pub fn attach_to(cart: &Rc<Cart>, label: Label, sink: Rc<dyn NotificationSink>) -> Rc<Self> {
        let observer = Rc::new(Self {
            label,
            cart: Rc::downgrade(cart),
            sink,
        });
        cart.attach(observer.clone());
        observer
    }

    pub fn label(&self) -> Label {
        self.label
    }

    /// Line printed for a cart holding `items`.
    pub fn message(label: Label, items: i64) -> String {
        format!("{} cart, items {}", label, items)
    }
}

impl Observer for CartObserver {
    fn update(&self) {
        // The cart owns its observers, so it outlives any notification it sends.
        if let Some(cart) = self.cart.upgrade() {
            self.sink.emit(&Self::message(self.label, cart.items()));
        }
    }
}
