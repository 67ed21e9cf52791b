//! Catalog of available data
//!
//! The catalog answers "what variables, times and pressures exist for this
//! pattern". Backends (file globbing, netCDF metadata, SQL) live outside this
//! crate; they only need to implement [`Catalog`]. Results carry no ordering
//! guarantee and callers sort as needed. An empty result means nothing
//! matched, never an error.

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::rc::Rc;

/// Query contract consumed by the control middlewares
///
/// `None` for `pattern` or `variable` means "not narrowed by this field".
pub trait Catalog {
    fn variables(&self, pattern: Option<&str>) -> Result<Vec<String>>;

    fn initial_times(
        &self,
        pattern: Option<&str>,
        variable: Option<&str>,
    ) -> Result<Vec<NaiveDateTime>>;

    fn valid_times(
        &self,
        pattern: Option<&str>,
        variable: Option<&str>,
        initial_time: NaiveDateTime,
    ) -> Result<Vec<NaiveDateTime>>;

    fn pressures(
        &self,
        pattern: Option<&str>,
        variable: Option<&str>,
        initial_time: NaiveDateTime,
    ) -> Result<Vec<f64>>;
}

impl<C: Catalog + ?Sized> Catalog for Rc<C> {
    fn variables(&self, pattern: Option<&str>) -> Result<Vec<String>> {
        (**self).variables(pattern)
    }

    fn initial_times(
        &self,
        pattern: Option<&str>,
        variable: Option<&str>,
    ) -> Result<Vec<NaiveDateTime>> {
        (**self).initial_times(pattern, variable)
    }

    fn valid_times(
        &self,
        pattern: Option<&str>,
        variable: Option<&str>,
        initial_time: NaiveDateTime,
    ) -> Result<Vec<NaiveDateTime>> {
        (**self).valid_times(pattern, variable, initial_time)
    }

    fn pressures(
        &self,
        pattern: Option<&str>,
        variable: Option<&str>,
        initial_time: NaiveDateTime,
    ) -> Result<Vec<f64>> {
        (**self).pressures(pattern, variable, initial_time)
    }
}

/// One run of one variable from one source
///
/// Timestamps are written as quoted strings in TOML, e.g. `"2019-01-01T00:00:00"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogRecord {
    pub pattern: String,
    pub variable: String,
    pub initial_time: NaiveDateTime,
    #[serde(default)]
    pub valid_times: Vec<NaiveDateTime>,
    #[serde(default)]
    pub pressures: Vec<f64>,
}

/// In-memory catalog, loadable from a TOML file of `[[record]]` tables
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StaticCatalog {
    #[serde(default, rename = "record")]
    records: Vec<CatalogRecord>,
}

impl StaticCatalog {
    pub fn new(records: Vec<CatalogRecord>) -> Self {
        Self { records }
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse catalog")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog {}", path.display()))?;
        let catalog = Self::from_toml_str(&content)?;
        log::info!(
            "Loaded {} catalog records from {}",
            catalog.records.len(),
            path.display()
        );
        Ok(catalog)
    }

    pub fn records(&self) -> &[CatalogRecord] {
        &self.records
    }

    /// Distinct patterns in first-seen order
    pub fn patterns(&self) -> Vec<String> {
        distinct(self.records.iter().map(|record| record.pattern.clone()))
    }

    fn matching<'a>(
        &'a self,
        pattern: Option<&'a str>,
        variable: Option<&'a str>,
    ) -> impl Iterator<Item = &'a CatalogRecord> + 'a {
        self.records.iter().filter(move |record| {
            pattern.is_none_or(|p| record.pattern == p)
                && variable.is_none_or(|v| record.variable == v)
        })
    }
}

impl Catalog for StaticCatalog {
    fn variables(&self, pattern: Option<&str>) -> Result<Vec<String>> {
        Ok(distinct(
            self.matching(pattern, None)
                .map(|record| record.variable.clone()),
        ))
    }

    fn initial_times(
        &self,
        pattern: Option<&str>,
        variable: Option<&str>,
    ) -> Result<Vec<NaiveDateTime>> {
        Ok(distinct(
            self.matching(pattern, variable)
                .map(|record| record.initial_time),
        ))
    }

    fn valid_times(
        &self,
        pattern: Option<&str>,
        variable: Option<&str>,
        initial_time: NaiveDateTime,
    ) -> Result<Vec<NaiveDateTime>> {
        Ok(self
            .matching(pattern, variable)
            .filter(|record| record.initial_time == initial_time)
            .flat_map(|record| record.valid_times.iter().copied())
            .collect())
    }

    fn pressures(
        &self,
        pattern: Option<&str>,
        variable: Option<&str>,
        initial_time: NaiveDateTime,
    ) -> Result<Vec<f64>> {
        let mut pressures: Vec<f64> = Vec::new();
        for pressure in self
            .matching(pattern, variable)
            .filter(|record| record.initial_time == initial_time)
            .flat_map(|record| record.pressures.iter().copied())
        {
            if !pressures.contains(&pressure) {
                pressures.push(pressure);
            }
        }
        Ok(pressures)
    }
}

fn distinct<T: PartialEq>(items: impl Iterator<Item = T>) -> Vec<T> {
    let mut out = Vec::new();
    for item in items {
        if !out.contains(&item) {
            out.push(item);
        }
    }
    out
}
