//! Line commands understood by the navigator
//!
//! Each input line stands in for a UI gesture: picking a dropdown entry or
//! clicking a next/previous button.

use anyhow::{bail, Result};
use forest_control::{Action, Value};

/// A parsed input line
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Dispatch(Action),
    ShowState,
    Help,
    Quit,
}

/// Usage line and description for every command
pub const USAGE: &[(&str, &str)] = &[
    ("set <key> <value>", "Select a value, e.g. `set pattern ukv_*.nc`"),
    ("next <item> <items>", "Move to the next item, e.g. `next pressure pressures`"),
    ("previous <item> <items>", "Move to the previous item"),
    ("state", "Print the full navigation state as JSON"),
    ("help", "Show this help"),
    ("quit", "Exit"),
];

pub fn parse(line: &str) -> Result<Command> {
    let line = line.trim();
    let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let rest = rest.trim();

    match word {
        "set" => {
            let Some((key, value)) = rest.split_once(char::is_whitespace) else {
                bail!("usage: set <key> <value>");
            };
            Ok(Command::Dispatch(Action::set_value(key, parse_value(value))))
        }
        "next" | "previous" => {
            let keys: Vec<&str> = rest.split_whitespace().collect();
            let [item_key, items_key] = keys.as_slice() else {
                bail!("usage: {} <item> <items>", word);
            };
            if item_key == items_key {
                bail!("item and items keys must differ");
            }
            let action = if word == "next" {
                Action::next_value(*item_key, *items_key)
            } else {
                Action::previous_value(*item_key, *items_key)
            };
            Ok(Command::Dispatch(action))
        }
        "state" => Ok(Command::ShowState),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" | "q" => Ok(Command::Quit),
        "" => Ok(Command::Help),
        other => bail!("unknown command '{}', try `help`", other),
    }
}

/// Values stay text, like a dropdown selection; the store's middleware
/// coerces pressures and times
fn parse_value(raw: &str) -> Value {
    match raw.trim() {
        "None" => Value::None,
        text => Value::from(text),
    }
}
