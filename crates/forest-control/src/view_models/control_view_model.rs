//! View model for the navigation controls
//!
//! Pre-computes everything a toolkit needs to draw the selectors: menus,
//! enabled flags and current values. The rendering layer only maps these
//! onto widgets.

use crate::state::State;
use crate::value::Value;

/// Selector key, collection key, label, and whether it has next/previous buttons
const SELECTORS: &[(&str, &str, &str, bool)] = &[
    ("pattern", "patterns", "Model/observation", false),
    ("variable", "variables", "Variable", false),
    ("initial_time", "initial_times", "Initial time", true),
    ("valid_time", "valid_times", "Valid time", true),
    ("pressure", "pressures", "Pressure", true),
];

/// One dropdown, optionally flanked by previous/next buttons
#[derive(Debug, Clone, PartialEq)]
pub struct SelectorModel {
    pub key: &'static str,
    pub items_key: &'static str,
    pub label: &'static str,
    /// `(label, value)` pairs
    pub menu: Vec<(String, String)>,
    /// Applies to the dropdown and its buttons
    pub disabled: bool,
    pub value: Option<String>,
    pub has_buttons: bool,
}

/// View model for the whole control panel
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ControlViewModel {
    pub selectors: Vec<SelectorModel>,
}

impl ControlViewModel {
    pub fn from_state(state: &State) -> Self {
        let selectors = SELECTORS
            .iter()
            .map(|&(key, items_key, label, has_buttons)| {
                let items = state.get(items_key).and_then(Value::as_list).unwrap_or(&[]);
                SelectorModel {
                    key,
                    items_key,
                    label,
                    menu: items.iter().map(|item| menu_entry(key, item)).collect(),
                    disabled: items.is_empty(),
                    value: state.get_some(key).map(ToString::to_string),
                    has_buttons,
                }
            })
            .collect();
        Self { selectors }
    }

    pub fn selector(&self, key: &str) -> Option<&SelectorModel> {
        self.selectors.iter().find(|selector| selector.key == key)
    }
}

fn menu_entry(key: &str, item: &Value) -> (String, String) {
    let value = item.to_string();
    let label = match (key, item.as_f64()) {
        ("pressure", Some(pressure)) => hpa(pressure),
        _ => value.clone(),
    };
    (label, value)
}

/// Pressure label; sub-hectopascal levels keep their decimals
fn hpa(pressure: f64) -> String {
    if pressure < 1.0 {
        format!("{}hPa", pressure)
    } else {
        format!("{}hPa", pressure.trunc() as i64)
    }
}
