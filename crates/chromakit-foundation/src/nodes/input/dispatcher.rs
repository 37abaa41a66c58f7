//! Document-scope pointer listeners.
//!
//! A [`PointerScope`] stands in for the whole document: every pointer event
//! the host receives is dispatched to every subscribed listener, wherever the
//! pointer is. Subscriptions are RAII guards, so a listener lives exactly as
//! long as the [`Subscription`] that registered it.

use super::types::PointerEvent;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

type ListenerId = u64;
type Listener = Rc<RefCell<dyn FnMut(&PointerEvent)>>;

#[derive(Default)]
struct Registry {
    next_id: ListenerId,
    listeners: Vec<(ListenerId, Listener)>,
}

impl Registry {
    fn contains(&self, id: ListenerId) -> bool {
        self.listeners.iter().any(|(entry, _)| *entry == id)
    }
}

/// Cloning yields another handle to the same scope.
#[derive(Clone, Default)]
pub struct PointerScope {
    registry: Rc<RefCell<Registry>>,
}

impl PointerScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `listener` until the returned guard is dropped.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: FnMut(&PointerEvent) + 'static,
    {
        let listener: Listener = Rc::new(RefCell::new(listener));
        let mut registry = self.registry.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.listeners.push((id, listener));
        log::trace!("pointer listener {id} attached ({} active)", registry.listeners.len());

        Subscription {
            id,
            registry: Rc::downgrade(&self.registry),
        }
    }

    /// Delivers `event` to every listener registered when dispatch starts.
    ///
    /// Listeners may subscribe or unsubscribe while handling the event. One
    /// detached earlier in the same pass is skipped; a listener re-entered
    /// through a nested dispatch is skipped for the inner call.
    pub fn dispatch(&self, event: &PointerEvent) {
        let snapshot: Vec<(ListenerId, Listener)> = self.registry.borrow().listeners.clone();
        for (id, listener) in snapshot {
            if !self.registry.borrow().contains(id) {
                continue;
            }
            match listener.try_borrow_mut() {
                Ok(mut listener) => listener(event),
                Err(_) => log::trace!("pointer listener {id} re-entered, skipping"),
            }
        }
    }

    pub fn listener_count(&self) -> usize {
        self.registry.borrow().listeners.len()
    }
}

/// Keeps a listener attached to a [`PointerScope`]; dropping it detaches.
#[must_use = "dropping a Subscription detaches its listener immediately"]
pub struct Subscription {
    id: ListenerId,
    registry: Weak<RefCell<Registry>>,
}

impl Subscription {
    /// False once the scope itself is gone.
    pub fn is_active(&self) -> bool {
        self.registry
            .upgrade()
            .is_some_and(|registry| registry.borrow().contains(self.id))
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let Some(registry) = self.registry.upgrade() else {
            return;
        };
        // Release the borrow before the listener itself is dropped, its
        // captures may own further subscriptions.
        let removed = {
            let mut registry = registry.borrow_mut();
            let index = registry
                .listeners
                .iter()
                .position(|(entry, _)| *entry == self.id);
            index.map(|index| registry.listeners.remove(index))
        };
        if removed.is_some() {
            log::trace!("pointer listener {} detached", self.id);
        }
        drop(removed);
    }
}

#[cfg(test)]
#[path = "tests/dispatcher_tests.rs"]
mod tests;
