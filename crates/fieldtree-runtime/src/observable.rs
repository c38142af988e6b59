//! Shared value cell with change callbacks.
//!
//! [`Observable<T>`] is a single-threaded handle (`Rc<RefCell<..>>`) to a
//! value plus a version counter. Writes that leave the value equal to the
//! old one (by `PartialEq`) are dropped: no version bump, no callbacks.
//!
//! Callbacks run after the write borrow is released, in the order they were
//! registered, and may write back into the same observable. Each callback is
//! held weakly; the [`Subscription`] returned by
//! [`subscribe`](Observable::subscribe) owns it, and dropping the guard
//! detaches it. Detached entries are swept on the next change.

use std::any::Any;
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use tracing::{debug_span, trace};
use web_time::Instant;

type Listener<T> = dyn Fn(&T);

struct Shared<T> {
    value: T,
    version: u64,
    listeners: Vec<Weak<Listener<T>>>,
}

/// Versioned shared value. Clones are handles to the same cell.
pub struct Observable<T> {
    shared: Rc<RefCell<Shared<T>>>,
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self {
            shared: Rc::clone(&self.shared),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shared = self.shared.borrow();
        f.debug_struct("Observable")
            .field("value", &shared.value)
            .field("version", &shared.version)
            .finish_non_exhaustive()
    }
}

impl<T: Clone + PartialEq + 'static> Observable<T> {
    #[must_use]
    pub fn new(value: T) -> Self {
        Self {
            shared: Rc::new(RefCell::new(Shared {
                value,
                version: 0,
                listeners: Vec::new(),
            })),
        }
    }

    /// Clone of the current value.
    #[must_use]
    pub fn get(&self) -> T {
        self.shared.borrow().value.clone()
    }

    /// Borrow the current value for the duration of `f`.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.shared.borrow().value)
    }

    /// Store `value`. Equal values are ignored.
    pub fn set(&self, value: T) {
        let version = {
            let mut shared = self.shared.borrow_mut();
            if shared.value == value {
                return;
            }
            shared.value = value;
            shared.version += 1;
            shared.version
        };
        self.emit(version);
    }

    /// Edit a copy of the value and store it with [`set`](Self::set).
    ///
    /// No borrow is held while `f` runs.
    pub fn update(&self, f: impl FnOnce(&mut T)) {
        let mut next = self.get();
        f(&mut next);
        self.set(next);
    }

    /// Register `callback` for future changes.
    pub fn subscribe(&self, callback: impl Fn(&T) + 'static) -> Subscription {
        let listener: Rc<Listener<T>> = Rc::new(callback);
        self.shared
            .borrow_mut()
            .listeners
            .push(Rc::downgrade(&listener));
        Subscription {
            _listener: Box::new(listener),
        }
    }

    /// Number of changes applied so far.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.shared.borrow().version
    }

    /// Callbacks whose [`Subscription`] is still alive.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.shared
            .borrow()
            .listeners
            .iter()
            .filter(|listener| listener.strong_count() > 0)
            .count()
    }

    fn emit(&self, version: u64) {
        let (value, live) = {
            let mut shared = self.shared.borrow_mut();
            shared.listeners.retain(|listener| listener.strong_count() > 0);
            let live: Vec<Rc<Listener<T>>> =
                shared.listeners.iter().filter_map(Weak::upgrade).collect();
            (shared.value.clone(), live)
        };
        if live.is_empty() {
            return;
        }

        let started = Instant::now();
        let span = debug_span!(
            "fieldtree.notify",
            version,
            subscribers = live.len(),
            duration_us = tracing::field::Empty
        );
        let _entered = span.enter();
        for listener in &live {
            listener(&value);
        }
        let elapsed_us = started.elapsed().as_micros() as u64;
        span.record("duration_us", elapsed_us);
        trace!(elapsed_us, "listeners done");
    }
}

/// Keeps a callback registered. Drop to unsubscribe.
pub struct Subscription {
    _listener: Box<dyn Any>,
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Subscription")
    }
}
