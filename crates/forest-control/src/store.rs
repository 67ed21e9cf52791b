use crate::actions::Action;
use crate::error::Result;
use crate::middleware::Middleware;
use crate::observable::{Observable, Subscribers};
use crate::reducer::{reduce, Reducer};
use crate::state::State;
use crate::value::Value;
use std::cell::RefCell;

/// Store - holds navigation state and runs the dispatch loop
///
/// Dispatch walks the middleware list front to back. Each middleware gets a
/// [`Next`] handle bound to the rest of the chain; the end of the chain runs
/// the reducer and notifies subscribers before returning. Middlewares may call
/// `next` several times (cascading `SetValue`s) and each call completes fully,
/// including notification, before control comes back.
///
/// The store is single-threaded: state sits behind a `RefCell` so that
/// middlewares can read the latest state between nested dispatches.
pub struct Store {
    state: RefCell<State>,
    reducer: Reducer,
    middleware: Vec<Box<dyn Middleware>>,
    subscribers: Subscribers<State>,
}

impl Store {
    pub fn new(initial_state: State) -> Self {
        Self::with_reducer(reduce, initial_state)
    }

    pub fn with_reducer(reducer: Reducer, initial_state: State) -> Self {
        Self {
            state: RefCell::new(initial_state),
            reducer,
            middleware: Vec::new(),
            subscribers: Subscribers::new(),
        }
    }

    /// Add middleware to the store
    ///
    /// Middleware added first sees actions first on the way in and last on the way out.
    pub fn add_middleware(&mut self, middleware: Box<dyn Middleware>) {
        self.middleware.push(middleware);
    }

    /// Snapshot of the current state
    pub fn state(&self) -> State {
        self.state.borrow().clone()
    }

    /// Current value of `key`, if present
    pub fn get(&self, key: &str) -> Option<Value> {
        self.state.borrow().get(key).cloned()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.state.borrow().contains_key(key)
    }

    /// Process an action through the middleware chain and reducer
    pub fn dispatch(&self, action: Action) -> Result<()> {
        Next {
            store: self,
            index: 0,
        }
        .dispatch(action)
    }

    fn dispatch_from(&self, index: usize, action: Action) -> Result<()> {
        match self.middleware.get(index) {
            Some(middleware) => {
                let next = Next {
                    store: self,
                    index: index + 1,
                };
                middleware.handle(self, next, action)
            }
            None => {
                self.apply(&action);
                Ok(())
            }
        }
    }

    fn apply(&self, action: &Action) {
        let state = (self.reducer)(&self.state.borrow(), action);
        self.state.replace(state.clone());
        self.notify(&state);
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new(State::new())
    }
}

impl Observable<State> for Store {
    fn subscribers(&self) -> &Subscribers<State> {
        &self.subscribers
    }
}

/// Handle on the remainder of the middleware chain
#[derive(Clone, Copy)]
pub struct Next<'a> {
    store: &'a Store,
    index: usize,
}

impl Next<'_> {
    /// Continue the chain with `action`
    pub fn dispatch(&self, action: Action) -> Result<()> {
        self.store.dispatch_from(self.index, action)
    }
}
