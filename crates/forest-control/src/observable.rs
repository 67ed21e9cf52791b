//! Minimal publish/subscribe substrate
//!
//! Anything that emits values (the store, a view, a derived stream) owns a
//! [`Subscribers`] list and implements [`Observable`] over it. Notification is
//! synchronous and runs in subscription order. A panicking subscriber is not
//! isolated: the panic unwinds out of `notify` and later subscribers are skipped.

use std::cell::RefCell;
use std::rc::Rc;

type Callback<T> = Rc<dyn Fn(&T)>;

/// Ordered list of subscriber callbacks
pub struct Subscribers<T> {
    callbacks: RefCell<Vec<Callback<T>>>,
}

impl<T> Subscribers<T> {
    pub fn new() -> Self {
        Self {
            callbacks: RefCell::new(Vec::new()),
        }
    }

    /// Append a callback. Duplicates are kept.
    pub fn push(&self, callback: impl Fn(&T) + 'static) {
        self.callbacks.borrow_mut().push(Rc::new(callback));
    }

    /// Invoke every callback with `value`
    ///
    /// The list is snapshotted first, so a callback may subscribe (or notify
    /// again) without tripping the `RefCell`. New subscribers are first called
    /// on the next notification.
    pub fn notify(&self, value: &T) {
        let callbacks = self.callbacks.borrow().clone();
        for callback in &callbacks {
            callback(value);
        }
    }

    pub fn len(&self) -> usize {
        self.callbacks.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.callbacks.borrow().is_empty()
    }
}

impl<T> Default for Subscribers<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Something that can be subscribed to
pub trait Observable<T> {
    fn subscribers(&self) -> &Subscribers<T>;

    fn subscribe<F>(&self, callback: F)
    where
        F: Fn(&T) + 'static,
        Self: Sized,
    {
        self.subscribers().push(callback);
    }

    fn notify(&self, value: &T) {
        self.subscribers().notify(value);
    }
}

/// An observable whose emissions are derived from another observable
///
/// Cloning a stream yields another handle to the same subscriber list.
pub struct Stream<T> {
    subscribers: Rc<Subscribers<T>>,
}

impl<T: 'static> Stream<T> {
    pub fn new() -> Self {
        Self {
            subscribers: Rc::new(Subscribers::new()),
        }
    }

    /// Re-emit everything `source` emits. Returns `self` for chaining.
    pub fn listen_to(self, source: &impl Observable<T>) -> Self {
        let subscribers = Rc::clone(&self.subscribers);
        source.subscribe(move |value: &T| subscribers.notify(value));
        self
    }

    /// New stream emitting `f(x)` for every `x` this stream emits
    pub fn map<U: 'static>(&self, f: impl Fn(&T) -> U + 'static) -> Stream<U> {
        let stream = Stream::new();
        let subscribers = Rc::clone(&stream.subscribers);
        self.subscribe(move |value: &T| subscribers.notify(&f(value)));
        stream
    }
}

impl<T: 'static> Default for Stream<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Stream<T> {
    fn clone(&self) -> Self {
        Self {
            subscribers: Rc::clone(&self.subscribers),
        }
    }
}

impl<T> Observable<T> for Stream<T> {
    fn subscribers(&self) -> &Subscribers<T> {
        &self.subscribers
    }
}
