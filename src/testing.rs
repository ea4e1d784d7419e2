//! Testing utilities for Ironchain collections.
//!
//! This module ships with the crate so downstream users can test their own
//! pipelines the same way the crate tests itself. It includes:
//!
//! - **Assertions**: Compare a collection's evaluated output with expected elements or entries
//! - **Test data builders**: Generate element lists and keyed entries fluently
//! - **Debug utilities**: Print elements as they are pulled through a pipeline
//! - **Fixtures**: Ready-made records and datasets
//! - **Probes**: Count how many elements a source actually produced
//!
//! # Quick Start
//!
//! ```
//! use ironchain::testing::*;
//! use ironchain::Collection;
//!
//! let c = Collection::from_vec(vec![1, 2, 3]).map(|v, _| (v.as_i64().unwrap_or(0) * 2).into());
//! assert_elements(&c, &values([2, 4, 6]));
//! ```
//!
//! # Assertion Functions
//!
//! - [`assert_elements`]: Exact order-dependent comparison of elements
//! - [`assert_entries`]: Exact comparison of `(key, element)` pairs
//! - [`assert_elements_unordered`]: Order-independent comparison
//! - [`assert_all`] / [`assert_any`] / [`assert_none`]: Predicate checks
//! - [`assert_count`]: Element count
//!
//! # Laziness Checks
//!
//! A [`PullProbe`] wraps a source and counts produced elements, which is how
//! early termination is asserted:
//!
//! ```
//! use ironchain::testing::PullProbe;
//!
//! let probe = PullProbe::new();
//! let c = probe.collection(0..1_000_000);
//! assert_eq!(c.first().and_then(|v| v.as_i64()), Some(0));
//! assert_eq!(probe.pulled(), 1);
//! ```

pub mod assertions;
pub mod builders;
pub mod debug;
pub mod fixtures;
pub mod probe;

pub use assertions::*;
pub use builders::*;
pub use debug::*;
pub use fixtures::*;
pub use probe::*;

use crate::value::Value;

/// Convert any list of plain Rust values into [`Value`]s.
///
/// ```
/// use ironchain::testing::values;
/// use ironchain::Value;
///
/// assert_eq!(values(["a", "b"]), vec![Value::from("a"), Value::from("b")]);
/// ```
pub fn values<T, I>(items: I) -> Vec<Value>
where
    T: Into<Value>,
    I: IntoIterator<Item = T>,
{
    items.into_iter().map(Into::into).collect()
}
