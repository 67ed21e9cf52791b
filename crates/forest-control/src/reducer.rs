use crate::actions::{Action, SetValue};
use crate::state::State;

/// Signature of a reducer the store can be built with
pub type Reducer = fn(&State, &Action) -> State;

/// Reducer - pure function that produces new state from current state + action
///
/// Only `SetValue` changes anything. Navigation actions are expected to have
/// been translated into `SetValue` upstream; anything else reaching this point
/// yields an unchanged copy.
pub fn reduce(state: &State, action: &Action) -> State {
    let mut state = state.clone();
    if let Action::SetValue(SetValue { key, value }) = action {
        state.insert(key.as_str(), value.clone());
    }
    state
}
