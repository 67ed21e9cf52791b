//! Actions module
//!
//! Actions are plain records describing intent. They never mutate anything
//! themselves; the reducer (for `SetValue`) and the navigation middleware
//! (for `NextValue` / `PreviousValue`) give them meaning.

use crate::value::Value;
use std::fmt;

/// Root action enum - one variant per kind, each with its own payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Replace `state[key]` with `value`
    SetValue(SetValue),
    /// Advance `state[item_key]` to its successor within `state[items_key]`
    NextValue(Navigate),
    /// Move `state[item_key]` to its predecessor within `state[items_key]`
    PreviousValue(Navigate),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetValue {
    pub key: String,
    pub value: Value,
}

/// Payload of the relative navigation actions
///
/// `item_key` names a scalar selection, `items_key` the collection it is drawn from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigate {
    pub item_key: String,
    pub items_key: String,
}

/// Discriminant of an [`Action`], used for logging and matching by kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    SetValue,
    NextValue,
    PreviousValue,
}

impl Action {
    pub fn set_value(key: impl Into<String>, value: impl Into<Value>) -> Self {
        Action::SetValue(SetValue {
            key: key.into(),
            value: value.into(),
        })
    }

    pub fn next_value(item_key: impl Into<String>, items_key: impl Into<String>) -> Self {
        Action::NextValue(Navigate::new(item_key, items_key))
    }

    pub fn previous_value(item_key: impl Into<String>, items_key: impl Into<String>) -> Self {
        Action::PreviousValue(Navigate::new(item_key, items_key))
    }

    pub fn kind(&self) -> ActionKind {
        match self {
            Action::SetValue(_) => ActionKind::SetValue,
            Action::NextValue(_) => ActionKind::NextValue,
            Action::PreviousValue(_) => ActionKind::PreviousValue,
        }
    }

    /// Navigation payload, if this is a `NextValue` or `PreviousValue`
    pub fn navigation(&self) -> Option<&Navigate> {
        match self {
            Action::NextValue(nav) | Action::PreviousValue(nav) => Some(nav),
            Action::SetValue(_) => None,
        }
    }

    /// Swap `NextValue` and `PreviousValue`; `SetValue` is returned as is
    pub fn inverted(self) -> Self {
        match self {
            Action::NextValue(nav) => Action::PreviousValue(nav),
            Action::PreviousValue(nav) => Action::NextValue(nav),
            set @ Action::SetValue(_) => set,
        }
    }
}

impl Navigate {
    pub fn new(item_key: impl Into<String>, items_key: impl Into<String>) -> Self {
        Self {
            item_key: item_key.into(),
            items_key: items_key.into(),
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ActionKind::SetValue => "SET_VALUE",
            ActionKind::NextValue => "NEXT_VALUE",
            ActionKind::PreviousValue => "PREVIOUS_VALUE",
        };
        f.write_str(name)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::SetValue(set) => write!(f, "{} {}={}", self.kind(), set.key, set.value),
            Action::NextValue(nav) | Action::PreviousValue(nav) => {
                write!(f, "{} {} in {}", self.kind(), nav.item_key, nav.items_key)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inverted_swaps_navigation_kind() {
        let action = Action::next_value("pressure", "pressures");
        assert_eq!(
            action.inverted(),
            Action::previous_value("pressure", "pressures")
        );
        let action = Action::previous_value("pressure", "pressures");
        assert_eq!(action.inverted(), Action::next_value("pressure", "pressures"));
    }

    #[test]
    fn test_inverted_leaves_set_value_alone() {
        let action = Action::set_value("pressure", 850.0);
        assert_eq!(action.clone().inverted(), action);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            Action::set_value("pattern", "p").to_string(),
            "SET_VALUE pattern=p"
        );
        assert_eq!(
            Action::next_value("valid_time", "valid_times").to_string(),
            "NEXT_VALUE valid_time in valid_times"
        );
    }
}
