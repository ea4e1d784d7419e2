//! The element type carried by every pipeline.
//!
//! [`Value`] is opaque to the engine: stages only look inside an
//! element through user-supplied functions, with three exceptions that the
//! element itself answers:
//!
//! - truthiness ([`Value::is_truthy`]) for `filter` without predicates
//! - nesting ([`Value::is_iterable`]) for `flatten`
//! - the default three-way comparison ([`Value::three_way`]) for value sorts
//!
//! User records enter the pipeline through [`Value::from_serializable`], which
//! turns any `serde::Serialize` type into a [`Value::Map`] so that structural
//! equality applies to them.
//!
//! ```
//! use ironchain::Value;
//!
//! assert!(Value::from(3).is_truthy());
//! assert!(!Value::from("").is_truthy());
//! assert_ne!(Value::from(1), Value::from(1.0)); // strict: type and value
//! ```

use crate::equality::Equality;
use anyhow::{Context, Result};
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter, Result as FormatResult};

/// A dynamically shaped element: scalar, sequence, or record.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<Value>),
    Map(BTreeMap<String, Value>),
}

impl Value {
    /// Convert any serializable value (typically a user record) into a [`Value`].
    ///
    /// Structs and maps become [`Value::Map`], sequences become [`Value::List`].
    ///
    /// # Errors
    /// Fails when `serde_json` cannot represent the input, e.g. a map whose
    /// keys are not strings.
    pub fn from_serializable<T: Serialize + ?Sized>(value: &T) -> Result<Self> {
        let json = serde_json::to_value(value)
            .with_context(|| format!("converting {} into a Value", std::any::type_name::<T>()))?;
        Ok(Self::from(json))
    }

    /// Explicit truthiness: `Null`, `false`, zero, `""`, `"0"` and empty
    /// composites are falsy; everything else is truthy.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Null => false,
            Self::Bool(b) => *b,
            Self::Int(i) => *i != 0,
            Self::Float(f) => *f != 0.0,
            Self::Str(s) => !s.is_empty() && s.as_str() != "0",
            Self::List(items) => !items.is_empty(),
            Self::Map(fields) => !fields.is_empty(),
        }
    }

    /// Whether `flatten` should descend into this value.
    #[must_use]
    pub const fn is_iterable(&self) -> bool {
        matches!(self, Self::List(_) | Self::Map(_))
    }

    /// Whether this value is a primitive scalar (not a list or map).
    #[must_use]
    pub const fn is_scalar(&self) -> bool {
        !self.is_iterable()
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Numeric view of `Int` and `Float` values.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Int(i) => Some(*i as f64),
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_list(&self) -> Option<&[Self]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_map(&self) -> Option<&BTreeMap<String, Self>> {
        match self {
            Self::Map(fields) => Some(fields),
            _ => None,
        }
    }

    /// Look up a field of a [`Value::Map`]; `None` for missing fields or non-maps.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Self> {
        self.as_map().and_then(|m| m.get(field))
    }

    /// The default three-way comparison used by value sorts.
    ///
    /// Values of different kinds order by rank
    /// (`Null < Bool < number < Str < List < Map`). Integers and floats compare
    /// numerically under a total float order, so `NaN` has a stable place.
    /// Lists and maps compare by length first, then element by element.
    #[must_use]
    pub fn three_way(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Null, Self::Null) => Ordering::Equal,
            (Self::Bool(a), Self::Bool(b)) => a.cmp(b),
            (Self::Int(a), Self::Int(b)) => a.cmp(b),
            (Self::Int(_) | Self::Float(_), Self::Int(_) | Self::Float(_)) => {
                let a = OrderedFloat(self.as_f64().unwrap_or_default());
                let b = OrderedFloat(other.as_f64().unwrap_or_default());
                a.cmp(&b)
            }
            (Self::Str(a), Self::Str(b)) => a.cmp(b),
            (Self::List(a), Self::List(b)) => a.len().cmp(&b.len()).then_with(|| {
                a.iter()
                    .zip(b)
                    .map(|(x, y)| x.three_way(y))
                    .find(|o| o.is_ne())
                    .unwrap_or(Ordering::Equal)
            }),
            (Self::Map(a), Self::Map(b)) => a.len().cmp(&b.len()).then_with(|| {
                a.iter()
                    .zip(b)
                    .map(|((ka, va), (kb, vb))| ka.cmp(kb).then_with(|| va.three_way(vb)))
                    .find(|o| o.is_ne())
                    .unwrap_or(Ordering::Equal)
            }),
            _ => self.rank().cmp(&other.rank()),
        }
    }

    const fn rank(&self) -> u8 {
        match self {
            Self::Null => 0,
            Self::Bool(_) => 1,
            Self::Int(_) | Self::Float(_) => 2,
            Self::Str(_) => 3,
            Self::List(_) => 4,
            Self::Map(_) => 5,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        Equality.compare(self, other)
    }
}

/// Text form used by `join_to_string`: scalars render bare, `Null` renders
/// empty, lists and maps render as compact JSON.
impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> FormatResult {
        match self {
            Self::Null => Ok(()),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Str(s) => f.write_str(s),
            Self::List(_) | Self::Map(_) => {
                let text = serde_json::to_string(self).map_err(|_| std::fmt::Error)?;
                f.write_str(&text)
            }
        }
    }
}

// ----- conversions -----

macro_rules! value_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(value: $t) -> Self {
                    Self::Int(i64::from(value))
                }
            }
        )*
    };
}

value_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<u64> for Value {
    #[allow(clippy::cast_precision_loss)]
    fn from(value: u64) -> Self {
        i64::try_from(value).map_or(Self::Float(value as f64), Self::Int)
    }
}

impl From<usize> for Value {
    #[allow(clippy::cast_precision_loss)]
    fn from(value: usize) -> Self {
        i64::try_from(value).map_or(Self::Float(value as f64), Self::Int)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<char> for Value {
    fn from(value: char) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl<T: Into<Self>> From<Vec<T>> for Value {
    fn from(value: Vec<T>) -> Self {
        Self::List(value.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl<T: Into<Self>> From<BTreeMap<String, T>> for Value {
    fn from(value: BTreeMap<String, T>) -> Self {
        Self::Map(value.into_iter().map(|(k, v)| (k, v.into())).collect())
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Bool(b),
            serde_json::Value::Number(n) => n
                .as_i64()
                .map_or_else(|| Self::Float(n.as_f64().unwrap_or(f64::NAN)), Self::Int),
            serde_json::Value::String(s) => Self::Str(s),
            serde_json::Value::Array(items) => Self::List(items.into_iter().map(Self::from).collect()),
            serde_json::Value::Object(fields) => {
                Self::Map(fields.into_iter().map(|(k, v)| (k, Self::from(v))).collect())
            }
        }
    }
}

/// Non-finite floats have no JSON form and become `null`.
impl From<&Value> for serde_json::Value {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(*b),
            Value::Int(i) => Self::from(*i),
            Value::Float(f) => serde_json::Number::from_f64(*f).map_or(Self::Null, Self::Number),
            Value::Str(s) => Self::String(s.clone()),
            Value::List(items) => Self::Array(items.iter().map(Self::from).collect()),
            Value::Map(fields) => Self::Object(
                fields
                    .iter()
                    .map(|(k, v)| (k.clone(), Self::from(v)))
                    .collect(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Serialize)]
    struct Coin {
        symbol: &'static str,
        price: f64,
    }

    #[test]
    fn truthiness_follows_explicit_rules() {
        let falsy = [
            Value::Null,
            Value::from(false),
            Value::from(0),
            Value::from(0.0),
            Value::from(""),
            Value::from("0"),
            Value::List(vec![]),
            Value::Map(BTreeMap::new()),
        ];
        assert!(falsy.iter().all(|v| !v.is_truthy()));
        assert!(Value::from("0.0").is_truthy());
        assert!(Value::from(" ").is_truthy());
        assert!(Value::from(vec![0]).is_truthy());
    }

    #[test]
    fn numbers_compare_across_int_and_float() {
        assert_eq!(Value::from(2).three_way(&Value::from(2.5)), Ordering::Less);
        assert_eq!(Value::from(3.0).three_way(&Value::from(3)), Ordering::Equal);
        assert_eq!(Value::Null.three_way(&Value::from(false)), Ordering::Less);
        assert_eq!(Value::from("a").three_way(&Value::from(99)), Ordering::Greater);
    }

    #[test]
    fn lists_compare_by_length_first() {
        let short = Value::from(vec![9, 9]);
        let long = Value::from(vec![1, 1, 1]);
        assert_eq!(short.three_way(&long), Ordering::Less);
    }

    #[test]
    fn records_become_maps() -> Result<()> {
        let v = Value::from_serializable(&Coin { symbol: "BTC", price: 1.5 })?;
        assert_eq!(v.get("symbol"), Some(&Value::from("BTC")));
        assert_eq!(v.get("price"), Some(&Value::from(1.5)));
        Ok(())
    }

    #[test]
    fn display_renders_composites_as_json() {
        assert_eq!(Value::Null.to_string(), "");
        assert_eq!(Value::from(vec![1, 2]).to_string(), "[1,2]");
        assert_eq!(Value::from("plain").to_string(), "plain");
    }
}
