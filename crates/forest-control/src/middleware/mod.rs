//! Middleware system for the navigation store
//!
//! Middleware sits between action dispatch and reducer execution, allowing
//! catalog lookups, action translation and logging to be handled in a
//! composable way.
//!
//! ## Design
//!
//! ```text
//! Action → m0 → m1 → ... → Reducer → notify
//!             ←    ←     ←
//! ```
//!
//! Each middleware can:
//! - Inspect the action and the current store state
//! - Forward the action (possibly rewritten) with `next.dispatch`
//! - Forward additional actions to cascade updates
//! - Swallow the action by not calling `next` at all
//!
//! ## Example
//!
//! ```rust
//! use forest_control::{Action, ControlError, Middleware, Next, Store};
//!
//! struct Trace;
//!
//! impl Middleware for Trace {
//!     fn handle(&self, _store: &Store, next: Next<'_>, action: Action) -> Result<(), ControlError> {
//!         log::trace!("before {}", action);
//!         next.dispatch(action)
//!     }
//! }
//! ```

use crate::actions::Action;
use crate::error::Result;
use crate::store::{Next, Store};

pub mod controls_middleware;
pub mod inverse_coordinate_middleware;
pub mod log_middleware;
pub mod next_previous_middleware;

pub use controls_middleware::ControlsMiddleware;
pub use inverse_coordinate_middleware::InverseCoordinateMiddleware;
pub use log_middleware::{ActionLog, LogMiddleware};
pub use next_previous_middleware::NextPreviousMiddleware;

/// Middleware trait - intercepts actions before they reach the reducer
///
/// `handle` takes `&self` because the chain is re-entrant: a middleware that
/// forwards several actions is re-entered by each of them through the inner
/// part of the chain. Keep mutable bookkeeping behind a `RefCell`.
pub trait Middleware {
    /// Handle an action
    ///
    /// - `store`: read access to the latest state (updated by nested dispatches)
    /// - `next`: the rest of the chain
    /// - `action`: the action to process
    ///
    /// Errors from `next` should be propagated unchanged.
    fn handle(&self, store: &Store, next: Next<'_>, action: Action) -> Result<()>;
}

#[cfg(test)]
pub(crate) mod testing {
    //! Helpers shared by the middleware tests

    use super::*;
    use crate::state::State;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Records every action that reaches it, then forwards it
    #[derive(Clone, Default)]
    pub struct Spy {
        pub seen: Rc<RefCell<Vec<Action>>>,
    }

    impl Spy {
        pub fn actions(&self) -> Vec<Action> {
            self.seen.borrow().clone()
        }
    }

    impl Middleware for Spy {
        fn handle(&self, _store: &Store, next: Next<'_>, action: Action) -> Result<()> {
            self.seen.borrow_mut().push(action.clone());
            next.dispatch(action)
        }
    }

    /// Store with `middleware` followed by a spy observing what it forwards
    pub fn store_with(middleware: Box<dyn Middleware>, state: State) -> (Store, Spy) {
        let spy = Spy::default();
        let mut store = Store::new(state);
        store.add_middleware(middleware);
        store.add_middleware(Box::new(spy.clone()));
        (store, spy)
    }
}
