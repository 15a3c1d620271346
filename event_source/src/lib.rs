//! # Event Source
//!
//! Single-threaded observer registries with scoped subscriptions.
//!
//! ## Philosophy
//!
//! - **Explicit registration**: observers hold a [`Subscription`] handle,
//!   never an implicit lifetime coupling to the source
//! - **Guaranteed release**: dropping the handle unregisters on every exit
//!   path, including abnormal teardown
//! - **Re-entrant**: emitting snapshots the subscriber list first, so a
//!   callback may subscribe or release registrations (including its own)
//!
//! ## Non-Goals
//!
//! This is NOT:
//! - A thread-safe event bus (the host delivers every callback on one
//!   logical thread)
//! - A message queue (events are delivered synchronously, then forgotten)
//! - An async stream

use std::cell::RefCell;
use std::rc::{Rc, Weak};

type Callback<T> = Rc<RefCell<dyn FnMut(&T)>>;

struct Registry<T> {
    next_id: u64,
    subscribers: Vec<(u64, Callback<T>)>,
}

impl<T> Registry<T> {
    fn new() -> Self {
        Self {
            next_id: 0,
            subscribers: Vec::new(),
        }
    }

    fn remove(&mut self, id: u64) {
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
    }
}

/// A handle to an event registry.
///
/// Handles are cheap to clone; all clones share one subscriber list.
pub struct EventSource<T> {
    registry: Rc<RefCell<Registry<T>>>,
}

impl<T> Clone for EventSource<T> {
    fn clone(&self) -> Self {
        Self {
            registry: Rc::clone(&self.registry),
        }
    }
}

impl<T: 'static> EventSource<T> {
    /// Creates an event source with no subscribers.
    pub fn new() -> Self {
        Self {
            registry: Rc::new(RefCell::new(Registry::new())),
        }
    }

    /// Registers a callback and returns its registration handle.
    ///
    /// The callback stays registered until the handle is dropped or
    /// released.
    pub fn subscribe(&self, callback: impl FnMut(&T) + 'static) -> Subscription {
        let callback: Callback<T> = Rc::new(RefCell::new(callback));
        let id = {
            let mut registry = self.registry.borrow_mut();
            let id = registry.next_id;
            registry.next_id += 1;
            registry.subscribers.push((id, callback));
            id
        };
        let weak = Rc::downgrade(&self.registry);
        Subscription {
            release: Some(Box::new(move || {
                if let Some(registry) = weak.upgrade() {
                    registry.borrow_mut().remove(id);
                }
            })),
        }
    }

    /// Delivers `event` to every current subscriber.
    ///
    /// The subscriber list is snapshotted before delivery; registrations
    /// added or released by a callback take effect for the next emit.
    pub fn emit(&self, event: &T) {
        let snapshot: Vec<Callback<T>> = self
            .registry
            .borrow()
            .subscribers
            .iter()
            .map(|(_, callback)| Rc::clone(callback))
            .collect();
        for callback in snapshot {
            (callback.borrow_mut())(event);
        }
    }

    /// Number of live registrations.
    pub fn subscriber_count(&self) -> usize {
        self.registry.borrow().subscribers.len()
    }
}

impl<T: 'static> Default for EventSource<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Scoped registration for one subscriber.
///
/// Dropping the handle removes the registration. Outliving the source is
/// fine: release becomes a no-op.
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Removes the registration now instead of at drop time.
    pub fn release(mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}
