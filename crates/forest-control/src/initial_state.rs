use crate::catalog::Catalog;
use crate::error::Result;
use crate::state::State;
use crate::value::Value;

/// Find a complete starting state for `pattern` from the catalog
///
/// Picks the first variable, the most recent initial time, the earliest valid
/// time and the highest pressure (pressures are stored descending). Anything
/// the catalog has no data for is `None` with an empty collection.
pub fn initial_state(catalog: &impl Catalog, pattern: Option<&str>) -> Result<State> {
    let variables = catalog.variables(pattern)?;
    let variable = variables.first().cloned();

    let initial_times = catalog.initial_times(pattern, variable.as_deref())?;
    let initial_time = initial_times.iter().max().copied();

    let (valid_times, mut pressures) = match initial_time {
        Some(initial_time) => (
            catalog.valid_times(pattern, variable.as_deref(), initial_time)?,
            catalog.pressures(pattern, variable.as_deref(), initial_time)?,
        ),
        None => (Vec::new(), Vec::new()),
    };
    let valid_time = valid_times.iter().min().copied();

    pressures.sort_by(|a, b| b.total_cmp(a));
    let pressure = pressures.first().copied();

    Ok(State::new()
        .with("pattern", pattern)
        .with("variable", variable)
        .with("variables", variables)
        .with("initial_time", initial_time)
        .with("initial_times", initial_times)
        .with("valid_time", valid_time)
        .with("valid_times", valid_times)
        .with("pressure", pressure)
        .with("pressures", Value::from(pressures)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogRecord, StaticCatalog};
    use chrono::{NaiveDate, NaiveDateTime};
    use pretty_assertions::assert_eq;

    fn time(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2019, 1, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    fn record(variable: &str, initial_time: NaiveDateTime) -> CatalogRecord {
        CatalogRecord {
            pattern: "p".to_string(),
            variable: variable.to_string(),
            initial_time,
            valid_times: vec![time(2, 6), time(2, 0), time(2, 3)],
            pressures: vec![500.0, 1000.0, 850.0],
        }
    }

    #[test]
    fn test_initial_state_picks_defaults() {
        let catalog = StaticCatalog::new(vec![
            record("air_temperature", time(1, 0)),
            record("air_temperature", time(2, 0)),
            record("mslp", time(1, 12)),
        ]);

        let state = initial_state(&catalog, Some("p")).unwrap();

        assert_eq!(state.get("pattern"), Some(&Value::from("p")));
        assert_eq!(state.get("variable"), Some(&Value::from("air_temperature")));
        assert_eq!(
            state.get("variables"),
            Some(&Value::from(vec!["air_temperature", "mslp"]))
        );
        assert_eq!(state.get("initial_time"), Some(&Value::from(time(2, 0))));
        assert_eq!(state.get("valid_time"), Some(&Value::from(time(2, 0))));
        assert_eq!(
            state.get("pressures"),
            Some(&Value::from(vec![1000.0, 850.0, 500.0]))
        );
        assert_eq!(state.get("pressure"), Some(&Value::from(1000.0)));
    }

    #[test]
    fn test_initial_state_of_empty_catalog() {
        let state = initial_state(&StaticCatalog::default(), None).unwrap();

        let expected = State::new()
            .with("pattern", Value::None)
            .with("variable", Value::None)
            .with("variables", Vec::<String>::new())
            .with("initial_time", Value::None)
            .with("initial_times", Vec::<NaiveDateTime>::new())
            .with("valid_time", Value::None)
            .with("valid_times", Vec::<NaiveDateTime>::new())
            .with("pressure", Value::None)
            .with("pressures", Vec::<f64>::new());
        assert_eq!(state, expected);
    }
}
