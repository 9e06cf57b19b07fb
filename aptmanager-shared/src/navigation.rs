//! # Navigation signal
//!
//! Single-threaded publish/subscribe channel for path changes. The web shell
//! emits the current path after every navigation; the route guard listens.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

type Listener = Rc<dyn Fn(&str)>;

#[derive(Default)]
struct Listeners {
    next_id: Cell<u64>,
    entries: RefCell<Vec<(u64, Listener)>>,
}

impl Listeners {
    fn is_live(&self, id: u64) -> bool {
        self.entries.borrow().iter().any(|(entry, _)| *entry == id)
    }

    fn remove(&self, id: u64) {
        // Drop the listener after releasing the borrow: its captures may own
        // further subscriptions on this signal.
        let removed = {
            let mut entries = self.entries.borrow_mut();
            entries
                .iter()
                .position(|(entry, _)| *entry == id)
                .map(|index| entries.remove(index))
        };
        drop(removed);
    }
}

/// Broadcasts navigation events to subscribers.
///
/// Cloning yields another handle to the same channel.
#[derive(Clone, Default)]
pub struct NavigationSignal {
    listeners: Rc<Listeners>,
}

impl NavigationSignal {
    /// Create a channel with no subscribers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `listener` for every subsequent [`emit`](Self::emit).
    ///
    /// The listener stays registered until the returned [`Subscription`] is
    /// dropped.
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe(&self, listener: impl Fn(&str) + 'static) -> Subscription {
        let id = self.listeners.next_id.get();
        self.listeners.next_id.set(id + 1);
        let listener: Listener = Rc::new(listener);
        self.listeners.entries.borrow_mut().push((id, listener));
        Subscription {
            id,
            listeners: Rc::downgrade(&self.listeners),
        }
    }

    /// Deliver `path` to every live subscriber, in subscription order.
    ///
    /// Listeners may subscribe or unsubscribe while being notified. Listeners
    /// added during delivery first hear the next event; listeners removed
    /// during delivery are skipped.
    pub fn emit(&self, path: &str) {
        let snapshot: Vec<(u64, Listener)> = self
            .listeners
            .entries
            .borrow()
            .iter()
            .map(|(id, listener)| (*id, Rc::clone(listener)))
            .collect();
        for (id, listener) in snapshot {
            if self.listeners.is_live(id) {
                listener(path);
            }
        }
    }

    /// Number of live subscriptions.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.listeners.entries.borrow().len()
    }
}

impl PartialEq for NavigationSignal {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.listeners, &other.listeners)
    }
}

impl fmt::Debug for NavigationSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavigationSignal")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

/// Registration handle returned by [`NavigationSignal::subscribe`].
///
/// Dropping it unsubscribes. It does not keep the signal alive.
pub struct Subscription {
    id: u64,
    listeners: Weak<Listeners>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(listeners) = self.listeners.upgrade() {
            listeners.remove(self.id);
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}
