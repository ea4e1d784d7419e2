//! Test data builders for creating element lists and keyed entries fluently.

use crate::collection::Collection;
use crate::key::Key;
use crate::pipeline::Entry;
use crate::value::Value;
use std::ops::RangeInclusive;

/// A fluent builder for element lists.
///
/// # Example
///
/// ```
/// use ironchain::testing::TestDataBuilder;
///
/// let data = TestDataBuilder::new()
///     .add_range(1..=10)
///     .add_value("x")
///     .add_repeated(0, 5)
///     .build();
///
/// assert_eq!(data.len(), 16); // 10 + 1 + 5
/// ```
#[derive(Default)]
pub struct TestDataBuilder {
    data: Vec<Value>,
}

impl TestDataBuilder {
    #[must_use]
    pub const fn new() -> Self {
        Self { data: Vec::new() }
    }

    #[must_use]
    pub fn add_value(mut self, value: impl Into<Value>) -> Self {
        self.data.push(value.into());
        self
    }

    #[must_use]
    pub fn add_values<T: Into<Value>>(mut self, values: impl IntoIterator<Item = T>) -> Self {
        self.data.extend(values.into_iter().map(Into::into));
        self
    }

    /// Add `count` copies of `value`.
    #[must_use]
    pub fn add_repeated(mut self, value: impl Into<Value>, count: usize) -> Self {
        let value = value.into();
        self.data.extend(std::iter::repeat_n(value, count));
        self
    }

    /// Add every integer of an inclusive range.
    ///
    /// ```
    /// use ironchain::testing::{values, TestDataBuilder};
    ///
    /// let data = TestDataBuilder::new().add_range(1..=3).build();
    /// assert_eq!(data, values([1, 2, 3]));
    /// ```
    #[must_use]
    pub fn add_range(mut self, range: RangeInclusive<i64>) -> Self {
        self.data.extend(range.map(Value::Int));
        self
    }

    /// Add one nested list element.
    #[must_use]
    pub fn add_list<T: Into<Value>>(mut self, items: impl IntoIterator<Item = T>) -> Self {
        self.data
            .push(Value::List(items.into_iter().map(Into::into).collect()));
        self
    }

    #[must_use]
    pub fn build(self) -> Vec<Value> {
        self.data
    }

    /// Build straight into a buffered [`Collection`].
    #[must_use]
    pub fn build_collection(self) -> Collection {
        Collection::from_vec(self.data)
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Builder for explicitly keyed entries.
///
/// # Example
///
/// ```
/// use ironchain::testing::EntriesBuilder;
///
/// let c = EntriesBuilder::new()
///     .add_entry(3, 5)
///     .add_entry(1, 1)
///     .add_entry("x", 9)
///     .build_collection();
///
/// assert_eq!(c.count(), 3);
/// ```
#[derive(Default)]
pub struct EntriesBuilder {
    data: Vec<Entry>,
}

impl EntriesBuilder {
    #[must_use]
    pub const fn new() -> Self {
        Self { data: Vec::new() }
    }

    #[must_use]
    pub fn add_entry(mut self, key: impl Into<Key>, value: impl Into<Value>) -> Self {
        self.data.push((key.into(), value.into()));
        self
    }

    /// Add several values under the same key.
    #[must_use]
    pub fn add_key_with_values<T: Into<Value>>(
        mut self,
        key: impl Into<Key>,
        values: impl IntoIterator<Item = T>,
    ) -> Self {
        let key = key.into();
        for value in values {
            self.data.push((key.clone(), value.into()));
        }
        self
    }

    #[must_use]
    pub fn build(self) -> Vec<Entry> {
        self.data
    }

    #[must_use]
    pub fn build_collection(self) -> Collection {
        Collection::from_entries(self.data)
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Sequential integers `start..=end`.
#[must_use]
pub fn sequential_data(start: i64, end: i64) -> Vec<Value> {
    (start..=end).map(Value::Int).collect()
}

/// Deterministic "random" integers in `[min, max)` from a fixed-seed LCG, so
/// runs are reproducible.
///
/// ```
/// use ironchain::testing::pseudo_random_data;
///
/// let data = pseudo_random_data(10, 0, 100);
/// assert_eq!(data.len(), 10);
/// assert!(data.iter().all(|v| v.as_i64().is_some_and(|n| (0..100).contains(&n))));
/// ```
#[must_use]
pub fn pseudo_random_data(count: usize, min: i64, max: i64) -> Vec<Value> {
    let mut seed: u32 = 12345;
    let range = max.saturating_sub(min).max(1).unsigned_abs();

    (0..count)
        .map(|_| {
            seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            let offset = u64::from(seed / 65536) % range;
            Value::Int(min + i64::try_from(offset).unwrap_or(0))
        })
        .collect()
}
