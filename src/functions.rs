//! Capability traits for the user-supplied functions stages hold.
//!
//! Each trait is blanket-implemented for the matching closure shape, so a stage
//! that takes a single function accepts a plain closure. Stages that take a
//! *list* of functions (`filter_all`, `map_all`, `each_all`) need the closures
//! boxed behind `Arc<dyn …>`; [`predicate`], [`transform`] and [`action`] do
//! that without spelling out the trait object type.
//!
//! ```
//! use ironchain::functions::{predicate, Predicate};
//! use ironchain::{Key, Value};
//! use std::sync::Arc;
//!
//! let checks: Vec<Arc<dyn Predicate>> = vec![
//!     predicate(|v: &Value, _: &Key| v.as_i64().is_some_and(|n| n > 2)),
//!     predicate(|v: &Value, _: &Key| v.as_i64().is_some_and(|n| n % 2 == 0)),
//! ];
//! assert_eq!(checks.len(), 2);
//! ```

use crate::key::Key;
use crate::value::Value;
use std::cmp::Ordering;
use std::sync::Arc;

/// Keep-or-drop decision over an element and its key.
pub trait Predicate: Send + Sync {
    fn test(&self, value: &Value, key: &Key) -> bool;
}

impl<F> Predicate for F
where
    F: Fn(&Value, &Key) -> bool + Send + Sync,
{
    fn test(&self, value: &Value, key: &Key) -> bool {
        self(value, key)
    }
}

/// Element rewrite; the key is read-only and passes through unchanged.
pub trait Transform: Send + Sync {
    fn apply(&self, value: &Value, key: &Key) -> Value;
}

impl<F> Transform for F
where
    F: Fn(&Value, &Key) -> Value + Send + Sync,
{
    fn apply(&self, value: &Value, key: &Key) -> Value {
        self(value, key)
    }
}

/// Three-way ordering of two elements for value sorts.
pub trait Comparator: Send + Sync {
    fn compare(&self, a: &Value, b: &Value) -> Ordering;
}

impl<F> Comparator for F
where
    F: Fn(&Value, &Value) -> Ordering + Send + Sync,
{
    fn compare(&self, a: &Value, b: &Value) -> Ordering {
        self(a, b)
    }
}

/// Derive the group an element belongs to.
pub trait GroupingFn: Send + Sync {
    fn group_key(&self, value: &Value) -> Key;
}

impl<F, K> GroupingFn for F
where
    F: Fn(&Value) -> K + Send + Sync,
    K: Into<Key>,
{
    fn group_key(&self, value: &Value) -> Key {
        self(value).into()
    }
}

/// Side effect run for each element passing through `each`.
pub trait Action: Send + Sync {
    fn run(&self, value: &Value, key: &Key);
}

impl<F> Action for F
where
    F: Fn(&Value, &Key) + Send + Sync,
{
    fn run(&self, value: &Value, key: &Key) {
        self(value, key);
    }
}

/// Value-only test used by `remove_where`.
pub type Matcher = Arc<dyn Fn(&Value) -> bool + Send + Sync>;

/// Box a closure as a shareable [`Predicate`].
pub fn predicate<F>(f: F) -> Arc<dyn Predicate>
where
    F: Fn(&Value, &Key) -> bool + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Box a closure as a shareable [`Transform`].
pub fn transform<F>(f: F) -> Arc<dyn Transform>
where
    F: Fn(&Value, &Key) -> Value + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Box a closure as a shareable [`Action`].
pub fn action<F>(f: F) -> Arc<dyn Action>
where
    F: Fn(&Value, &Key) + Send + Sync + 'static,
{
    Arc::new(f)
}
