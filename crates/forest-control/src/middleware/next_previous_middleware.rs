//! Next/Previous Translation Middleware
//!
//! Translates relative navigation (`NextValue` / `PreviousValue`) into an
//! absolute `SetValue` using the collection currently held in state.

use crate::actions::{Action, Navigate};
use crate::error::{ControlError, Result};
use crate::middleware::Middleware;
use crate::navigation::{next_item, previous_item};
use crate::store::{Next, Store};
use crate::value::Value;

/// Middleware that resolves next/previous against `state[items_key]`
pub struct NextPreviousMiddleware;

impl NextPreviousMiddleware {
    pub fn new() -> Self {
        Self
    }

    /// Value to select, or `None` when there is nothing to navigate
    fn resolve(store: &Store, nav: &Navigate, forward: bool) -> Result<Option<Value>> {
        if nav.item_key == nav.items_key {
            return Err(ControlError::SelfReferential(nav.item_key.clone()));
        }
        let items = match store.get(&nav.items_key) {
            None | Some(Value::None) => return Ok(None),
            Some(Value::List(items)) => items,
            Some(_) => return Err(ControlError::NotACollection(nav.items_key.clone())),
        };

        match store.get(&nav.item_key).filter(|item| !item.is_none()) {
            Some(item) if forward => next_item(&items, &item).map(Some),
            Some(item) => previous_item(&items, &item).map(Some),
            // Nothing selected yet: seed from the end we are moving away from
            None if forward => Ok(items.into_iter().max()),
            None => Ok(items.into_iter().min()),
        }
    }
}

impl Default for NextPreviousMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for NextPreviousMiddleware {
    fn handle(&self, store: &Store, next: Next<'_>, action: Action) -> Result<()> {
        let (nav, forward) = match &action {
            Action::NextValue(nav) => (nav, true),
            Action::PreviousValue(nav) => (nav, false),
            Action::SetValue(_) => return next.dispatch(action),
        };

        match Self::resolve(store, nav, forward)? {
            Some(value) => {
                log::debug!(
                    "NextPreviousMiddleware: {} resolved to {}",
                    action,
                    value
                );
                next.dispatch(Action::set_value(nav.item_key.as_str(), value))
            }
            None => {
                log::debug!(
                    "NextPreviousMiddleware: nothing to navigate for {}",
                    action
                );
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::middleware::testing::store_with;
    use crate::state::State;
    use pretty_assertions::assert_eq;

    fn store_for(state: State) -> (Store, crate::middleware::testing::Spy) {
        store_with(Box::new(NextPreviousMiddleware::new()), state)
    }

    #[test]
    fn test_missing_items_key_is_absorbed() {
        let state = State::new().with("pressure", 850.0);
        let (store, spy) = store_for(state.clone());

        store
            .dispatch(Action::next_value("pressure", "pressures"))
            .unwrap();

        assert!(spy.actions().is_empty());
        assert_eq!(store.state(), state);
    }

    #[test]
    fn test_next_seeds_with_max() {
        let (store, spy) = store_for(State::new().with("items", vec![5, 3, 9]));

        store.dispatch(Action::next_value("item", "items")).unwrap();

        assert_eq!(spy.actions(), vec![Action::set_value("item", 9)]);
        assert_eq!(store.get("item"), Some(Value::from(9)));
    }

    #[test]
    fn test_previous_seeds_with_min() {
        let (store, spy) = store_for(State::new().with("items", vec![5, 3, 9]));

        store
            .dispatch(Action::previous_value("item", "items"))
            .unwrap();

        assert_eq!(spy.actions(), vec![Action::set_value("item", 3)]);
    }

    #[test]
    fn test_next_moves_to_successor() {
        let state = State::new()
            .with("items", vec![1, 2, 3])
            .with("item", 3);
        let (store, _) = store_for(state);

        store.dispatch(Action::next_value("item", "items")).unwrap();
        assert_eq!(store.get("item"), Some(Value::from(1)));

        store.dispatch(Action::next_value("item", "items")).unwrap();
        assert_eq!(store.get("item"), Some(Value::from(2)));
    }

    #[test]
    fn test_previous_moves_to_predecessor() {
        let state = State::new()
            .with("items", vec![1, 2, 3])
            .with("item", 1);
        let (store, _) = store_for(state);

        store
            .dispatch(Action::previous_value("item", "items"))
            .unwrap();

        assert_eq!(store.get("item"), Some(Value::from(3)));
    }

    #[test]
    fn test_item_outside_collection_is_an_error() {
        let state = State::new()
            .with("items", vec![1, 2, 3])
            .with("item", 7);
        let (store, spy) = store_for(state);

        let err = store
            .dispatch(Action::next_value("item", "items"))
            .unwrap_err();

        assert!(matches!(err, ControlError::NotFound { .. }));
        assert!(spy.actions().is_empty());
    }

    #[test]
    fn test_empty_collection_is_absorbed() {
        let (store, spy) = store_for(State::new().with("items", Vec::<i32>::new()));

        store.dispatch(Action::next_value("item", "items")).unwrap();

        assert!(spy.actions().is_empty());
        assert!(!store.contains_key("item"));
    }

    #[test]
    fn test_non_list_collection_is_an_error() {
        let (store, _) = store_for(State::new().with("items", "not a list"));

        let err = store
            .dispatch(Action::next_value("item", "items"))
            .unwrap_err();

        assert!(matches!(err, ControlError::NotACollection(ref key) if key == "items"));
    }

    #[test]
    fn test_same_item_and_items_key_is_an_error() {
        let state = State::new().with("items", vec![1, 2]);
        let (store, spy) = store_for(state.clone());

        let err = store
            .dispatch(Action::next_value("items", "items"))
            .unwrap_err();

        assert!(matches!(err, ControlError::SelfReferential(ref key) if key == "items"));
        assert!(spy.actions().is_empty());
        assert_eq!(store.state(), state);
    }

    #[test]
    fn test_set_value_passes_through() {
        let (store, spy) = store_for(State::new());

        store.dispatch(Action::set_value("item", 4)).unwrap();

        assert_eq!(spy.actions(), vec![Action::set_value("item", 4)]);
    }
}
