//! Controls Middleware
//!
//! Drives cascading catalog queries. Changing a coarse selector refreshes
//! the finer selectors that depend on it:
//! - `pattern` refreshes `variables` and `initial_times`
//! - `initial_time` refreshes `valid_times` (needs `pattern` and `variable`)
//!
//! Dropdowns hand values over as text, so incoming `pressure` values are
//! coerced to floats and `initial_time` / `valid_time` to timestamps.

use crate::actions::{Action, SetValue};
use crate::catalog::Catalog;
use crate::error::Result;
use crate::middleware::Middleware;
use crate::store::{Next, Store};
use crate::value::Value;
use std::collections::BTreeSet;

/// Controls middleware - owns the catalog used for cascading queries
pub struct ControlsMiddleware<C> {
    catalog: C,
    patterns: Vec<String>,
}

impl<C: Catalog> ControlsMiddleware<C> {
    pub fn new(catalog: C) -> Self {
        Self::with_patterns(catalog, Vec::new())
    }

    pub fn with_patterns(catalog: C, patterns: Vec<String>) -> Self {
        Self { catalog, patterns }
    }

    /// Patterns known at construction time
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    fn set_pressure(&self, next: Next<'_>, action: Action, value: &Value) -> Result<()> {
        match value.as_f64() {
            Some(pressure) => next.dispatch(Action::set_value("pressure", pressure)),
            None => {
                log::warn!("{} is not a float", value);
                next.dispatch(action)
            }
        }
    }

    fn set_pattern(&self, next: Next<'_>, action: Action, value: &Value) -> Result<()> {
        let pattern = match value {
            Value::None => None,
            other => Some(other.to_string()),
        };
        let variables = self.catalog.variables(pattern.as_deref())?;
        let mut initial_times = self.catalog.initial_times(pattern.as_deref(), None)?;
        // Most recent run first
        initial_times.reverse();

        log::debug!(
            "ControlsMiddleware: pattern {} has {} variables and {} initial times",
            value,
            variables.len(),
            initial_times.len()
        );

        next.dispatch(action)?;
        next.dispatch(Action::set_value("variables", variables))?;
        next.dispatch(Action::set_value("initial_times", initial_times))
    }

    fn set_initial_time(
        &self,
        store: &Store,
        next: Next<'_>,
        action: Action,
        value: &Value,
    ) -> Result<()> {
        let Some(initial_time) = value.as_time() else {
            if !value.is_none() {
                log::warn!("{} is not a timestamp", value);
            }
            return next.dispatch(action);
        };
        // Store a real timestamp so next/previous can locate it in initial_times
        let action = Action::set_value("initial_time", initial_time);

        let (Some(pattern), Some(variable)) = (store.get("pattern"), store.get("variable")) else {
            log::debug!("ControlsMiddleware: no pattern/variable yet, skipping valid times");
            return next.dispatch(action);
        };

        let valid_times: BTreeSet<_> = self
            .catalog
            .valid_times(
                text_of(&pattern).as_deref(),
                text_of(&variable).as_deref(),
                initial_time,
            )?
            .into_iter()
            .collect();
        let valid_times: Vec<_> = valid_times.into_iter().collect();

        next.dispatch(action)?;
        next.dispatch(Action::set_value("valid_times", valid_times))
    }

    fn set_valid_time(&self, next: Next<'_>, action: Action, value: &Value) -> Result<()> {
        match value.as_time() {
            Some(valid_time) => next.dispatch(Action::set_value("valid_time", valid_time)),
            None => {
                if !value.is_none() {
                    log::warn!("{} is not a timestamp", value);
                }
                next.dispatch(action)
            }
        }
    }
}

/// Catalog argument for a state value; `None` leaves the query unnarrowed
fn text_of(value: &Value) -> Option<String> {
    match value {
        Value::None => None,
        other => Some(other.to_string()),
    }
}

impl<C: Catalog> Middleware for ControlsMiddleware<C> {
    fn handle(&self, store: &Store, next: Next<'_>, action: Action) -> Result<()> {
        let (key, value) = match &action {
            Action::SetValue(SetValue { key, value }) => (key.clone(), value.clone()),
            _ => return next.dispatch(action),
        };

        match key.as_str() {
            "pressure" => self.set_pressure(next, action, &value),
            "pattern" => self.set_pattern(next, action, &value),
            "initial_time" => self.set_initial_time(store, next, action, &value),
            "valid_time" => self.set_valid_time(next, action, &value),
            _ => next.dispatch(action),
        }
    }
}
