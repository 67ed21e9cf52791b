use crate::actions::Action;
use crate::error::Result;
use crate::middleware::Middleware;
use crate::store::{Next, Store};
use std::cell::RefCell;
use std::rc::Rc;

/// Shared handle on the actions recorded by a [`LogMiddleware`]
#[derive(Debug, Clone, Default)]
pub struct ActionLog {
    actions: Rc<RefCell<Vec<Action>>>,
}

impl ActionLog {
    pub fn actions(&self) -> Vec<Action> {
        self.actions.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.actions.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.borrow().is_empty()
    }

    fn push(&self, action: Action) {
        self.actions.borrow_mut().push(action);
    }
}

/// LogMiddleware - records every action passing through
///
/// The action is forwarded first and recorded once the rest of the chain has
/// returned, so nested actions appear in the log before the one that caused them.
pub struct LogMiddleware {
    verbose: bool,
    log: ActionLog,
}

impl LogMiddleware {
    pub fn new(verbose: bool) -> Self {
        Self {
            verbose,
            log: ActionLog::default(),
        }
    }

    /// Handle for reading the recorded actions after the middleware moved into a store
    pub fn log(&self) -> ActionLog {
        self.log.clone()
    }
}

impl Default for LogMiddleware {
    fn default() -> Self {
        Self::new(false)
    }
}

impl Middleware for LogMiddleware {
    fn handle(&self, _store: &Store, next: Next<'_>, action: Action) -> Result<()> {
        let result = next.dispatch(action.clone());
        if self.verbose {
            log::info!("Action: {}", action);
        } else {
            log::debug!("Action: {}", action);
        }
        // Recorded even when the chain failed
        self.log.push(action);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::State;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_log_records_actions() {
        let middleware = LogMiddleware::new(false);
        let log = middleware.log();
        let mut store = Store::default();
        store.add_middleware(Box::new(middleware));

        let action = Action::set_value("Hello", "World!");
        store.dispatch(action.clone()).unwrap();

        assert_eq!(log.actions(), vec![action]);
    }

    #[test]
    fn test_log_does_not_alter_state() {
        let mut store = Store::default();
        store.add_middleware(Box::new(LogMiddleware::new(true)));

        store.dispatch(Action::set_value("pattern", "p")).unwrap();

        assert_eq!(store.state(), State::new().with("pattern", "p"));
    }

    #[test]
    fn test_log_keeps_dispatch_order() {
        let middleware = LogMiddleware::default();
        let log = middleware.log();
        let mut store = Store::default();
        store.add_middleware(Box::new(middleware));

        store.dispatch(Action::set_value("a", 1)).unwrap();
        store.dispatch(Action::next_value("b", "bs")).unwrap();

        assert_eq!(
            log.actions(),
            vec![Action::set_value("a", 1), Action::next_value("b", "bs")]
        );
    }
}
