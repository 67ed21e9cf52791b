//! State values
//!
//! The navigation state is schema-less, so every entry is a tagged `Value`.
//! Values have a total order so that collections pulled from state can be
//! sorted the same way regardless of where they came from.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Formats accepted when a timestamp arrives as text (e.g. from a dropdown).
const TIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];

/// A single state entry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    None,
    Int(i64),
    Float(f64),
    Time(NaiveDateTime),
    Text(String),
    List(Vec<Value>),
}

impl Value {
    pub fn is_none(&self) -> bool {
        matches!(self, Value::None)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// Coerce to a float, accepting numbers and numeric text
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            Value::Text(text) => text.trim().parse().ok(),
            _ => None,
        }
    }

    /// Coerce to a timestamp, accepting timestamps and text in a known format
    pub fn as_time(&self) -> Option<NaiveDateTime> {
        match self {
            Value::Time(time) => Some(*time),
            Value::Text(text) => TIME_FORMATS
                .iter()
                .find_map(|format| NaiveDateTime::parse_from_str(text.trim(), format).ok()),
            _ => None,
        }
    }

    fn rank(&self) -> u8 {
        match self {
            Value::None => 0,
            Value::Int(_) | Value::Float(_) => 1,
            Value::Time(_) => 2,
            Value::Text(_) => 3,
            Value::List(_) => 4,
        }
    }
}

impl Ord for Value {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a.cmp(b),
            (Value::Float(a), Value::Float(b)) => cmp_floats(*a, *b),
            (Value::Int(a), Value::Float(b)) => cmp_int_float(*a, *b),
            (Value::Float(a), Value::Int(b)) => cmp_int_float(*b, *a).reverse(),
            (Value::Time(a), Value::Time(b)) => a.cmp(b),
            (Value::Text(a), Value::Text(b)) => a.cmp(b),
            (Value::List(a), Value::List(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

/// `-0.0 == 0.0`; NaNs sort by sign at either end
fn cmp_floats(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or_else(|| a.total_cmp(&b))
}

/// Exact comparison; casting large integers to `f64` would round them
fn cmp_int_float(i: i64, f: f64) -> Ordering {
    // 2^63, the first float past i64::MAX
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;

    if f.is_nan() {
        return if f.is_sign_negative() {
            Ordering::Greater
        } else {
            Ordering::Less
        };
    }
    if f >= LIMIT {
        return Ordering::Less;
    }
    if f < -LIMIT {
        return Ordering::Greater;
    }

    let whole = f.trunc();
    match i.cmp(&(whole as i64)) {
        Ordering::Equal => cmp_floats(0.0, f - whole),
        unequal => unequal,
    }
}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Value {}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::None => write!(f, "None"),
            Value::Int(i) => write!(f, "{}", i),
            // Debug keeps the trailing ".0" so "850.0" round-trips as a float
            Value::Float(x) => write!(f, "{:?}", x),
            Value::Time(time) => write!(f, "{}", time.format("%Y-%m-%d %H:%M:%S")),
            Value::Text(text) => write!(f, "{}", text),
            Value::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
        }
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::Text(text.to_string())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Value::Text(text)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(time: NaiveDateTime) -> Self {
        Value::Time(time)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::None, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn time(hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2019, 1, 1)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_numbers_compare_across_int_and_float() {
        assert_eq!(Value::from(1), Value::from(1.0));
        assert!(Value::from(2) > Value::from(1.5));
        assert!(Value::from(0.5) < Value::from(1));
    }

    #[test]
    fn test_sorting_mixed_numbers() {
        let mut values = vec![Value::from(5), Value::from(3.5), Value::from(9)];
        values.sort();
        assert_eq!(
            values,
            vec![Value::from(3.5), Value::from(5), Value::from(9)]
        );
    }

    #[test]
    fn test_large_integers_compare_exactly_against_floats() {
        let big = 1_i64 << 53;
        let float = Value::Float(big as f64);

        assert_eq!(Value::Int(big), float);
        assert!(Value::Int(big + 1) > float);
        assert!(float < Value::Int(big + 1));
        assert!(Value::Int(i64::MAX) < Value::Float(9_223_372_036_854_775_808.0));
        assert!(Value::Int(-3) > Value::Float(-3.5));
        assert!(Value::Int(-4) < Value::Float(-3.5));
    }

    #[test]
    fn test_signed_zero_and_nan_ordering() {
        assert_eq!(Value::Float(-0.0), Value::Float(0.0));
        assert_eq!(Value::Int(0), Value::Float(-0.0));
        assert!(Value::Float(f64::NAN) > Value::Float(f64::INFINITY));
        assert!(Value::Float(f64::NAN) > Value::Int(i64::MAX));
    }

    #[test]
    fn test_as_f64_parses_numeric_text() {
        assert_eq!(Value::from("850").as_f64(), Some(850.0));
        assert_eq!(Value::from(" 0.5 ").as_f64(), Some(0.5));
        assert_eq!(Value::from("surface").as_f64(), None);
        assert_eq!(Value::None.as_f64(), None);
    }

    #[test]
    fn test_as_time_parses_display_format() {
        let value = Value::from(time(12));
        let text = Value::from(value.to_string());
        assert_eq!(text.as_time(), Some(time(12)));
        assert_eq!(Value::from("2019-01-01T06:00:00").as_time(), Some(time(6)));
        assert_eq!(Value::from("yesterday").as_time(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::from(850.0).to_string(), "850.0");
        assert_eq!(Value::from(3).to_string(), "3");
        assert_eq!(Value::None.to_string(), "None");
        assert_eq!(Value::from(vec!["a", "b"]).to_string(), "[a, b]");
        assert_eq!(Value::from(time(0)).to_string(), "2019-01-01 00:00:00");
    }

    #[test]
    fn test_option_conversion() {
        assert!(Value::from(None::<String>).is_none());
        assert_eq!(Value::from(Some("x")), Value::from("x"));
    }
}
