//! Synchronous multi-subscriber event primitive.
//!
//! A `Signal` is the fire-and-forget notification channel gesture
//! trackers expose: zero or more subscribers, invoked synchronously and
//! in connection order at well-defined points of the host tick. The
//! whole framework is single-threaded and tick-bound, so no async
//! dispatch or locking is involved.

use smallvec::SmallVec;
use std::cell::RefCell;
use std::rc::Rc;

type Subscriber<A> = Rc<dyn Fn(&A)>;

/// A synchronous observer list.
///
/// Handlers must not mutate the emitting component from inside a
/// callback; emission is reentrant-unsafe by design. Connecting a new
/// subscriber from within a handler is tolerated (it takes effect from
/// the next emission).
pub struct Signal<A> {
    subscribers: RefCell<SmallVec<[Subscriber<A>; 2]>>,
}

impl<A> Signal<A> {
    pub fn new() -> Self {
        Self {
            subscribers: RefCell::new(SmallVec::new()),
        }
    }

    /// Register a subscriber. Subscribers are never removed individually;
    /// hosts that need scoped subscriptions wrap the handler in their own
    /// liveness check.
    pub fn connect(&self, handler: impl Fn(&A) + 'static) {
        self.subscribers.borrow_mut().push(Rc::new(handler));
    }

    /// Invoke every subscriber with `arg`, in connection order.
    pub fn emit(&self, arg: &A) {
        // Snapshot the list so a handler connecting a subscriber does not
        // alias the borrow.
        let current: SmallVec<[Subscriber<A>; 2]> =
            self.subscribers.borrow().iter().cloned().collect();
        for subscriber in &current {
            subscriber(arg);
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.borrow().len()
    }

    pub fn clear(&self) {
        self.subscribers.borrow_mut().clear();
    }
}

impl<A> Default for Signal<A> {
    fn default() -> Self {
        Self::new()
    }
}
