//! Inverse Coordinate Middleware
//!
//! Some coordinates are naturally listed in descending order (pressure levels
//! run from the surface upwards). For those, "next" has to move down the
//! sorted collection, so navigation actions on the coordinate are flipped
//! before anything downstream sees them.

use crate::actions::Action;
use crate::error::Result;
use crate::middleware::Middleware;
use crate::store::{Next, Store};

/// Flips next/previous for one named coordinate
pub struct InverseCoordinateMiddleware {
    name: String,
}

impl InverseCoordinateMiddleware {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Middleware for InverseCoordinateMiddleware {
    fn handle(&self, _store: &Store, next: Next<'_>, action: Action) -> Result<()> {
        let on_coordinate = action
            .navigation()
            .is_some_and(|nav| nav.item_key == self.name);

        if on_coordinate {
            log::debug!("InverseCoordinateMiddleware: inverting {}", action);
            next.dispatch(action.inverted())
        } else {
            next.dispatch(action)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::middleware::testing::store_with;
    use crate::state::State;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_next_becomes_previous_for_configured_coordinate() {
        let (store, spy) = store_with(
            Box::new(InverseCoordinateMiddleware::new("pressure")),
            State::new(),
        );

        store
            .dispatch(Action::next_value("pressure", "pressures"))
            .unwrap();

        assert_eq!(
            spy.actions(),
            vec![Action::previous_value("pressure", "pressures")]
        );
    }

    #[test]
    fn test_previous_becomes_next_for_configured_coordinate() {
        let (store, spy) = store_with(
            Box::new(InverseCoordinateMiddleware::new("pressure")),
            State::new(),
        );

        store
            .dispatch(Action::previous_value("pressure", "pressures"))
            .unwrap();

        assert_eq!(spy.actions(), vec![Action::next_value("pressure", "pressures")]);
    }

    #[test]
    fn test_other_actions_pass_through() {
        let (store, spy) = store_with(
            Box::new(InverseCoordinateMiddleware::new("pressure")),
            State::new(),
        );
        let actions = vec![
            Action::next_value("valid_time", "valid_times"),
            Action::set_value("pressure", 850.0),
        ];

        for action in actions.clone() {
            store.dispatch(action).unwrap();
        }

        assert_eq!(spy.actions(), actions);
    }
}
