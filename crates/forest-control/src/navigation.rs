//! Next/previous item lookup with wraparound
//!
//! Collections pulled from state carry no ordering guarantee, so both
//! directions sort ascending before looking up the current item.

use crate::error::{ControlError, Result};
use std::fmt::Display;

/// Successor of `item` in ascending order, wrapping to the first element
pub fn next_item<T: Ord + Clone + Display>(items: &[T], item: &T) -> Result<T> {
    let (sorted, index) = locate(items, item)?;
    Ok(sorted[(index + 1) % sorted.len()].clone())
}

/// Predecessor of `item` in ascending order, wrapping to the last element
pub fn previous_item<T: Ord + Clone + Display>(items: &[T], item: &T) -> Result<T> {
    let (sorted, index) = locate(items, item)?;
    Ok(sorted[(index + sorted.len() - 1) % sorted.len()].clone())
}

fn locate<T: Ord + Clone + Display>(items: &[T], item: &T) -> Result<(Vec<T>, usize)> {
    let mut sorted = items.to_vec();
    sorted.sort();
    let index = sorted
        .iter()
        .position(|candidate| candidate == item)
        .ok_or_else(|| ControlError::NotFound {
            item: item.to_string(),
        })?;
    Ok((sorted, index))
}
