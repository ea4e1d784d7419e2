use super::Barrier;
use crate::functions::Comparator;
use crate::pipeline::{Entries, Entry};
use crate::Value;
use std::cmp::Ordering;
use std::sync::Arc;

/// What a sort orders by, and in which direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Order {
    #[default]
    AscendingKey,
    DescendingKey,
    AscendingValue,
    DescendingValue,
}

/// Buffer the whole upstream, then re-emit it in order. Entries keep their keys.
///
/// The sort is **stable** for every order: entries that compare equal keep
/// their upstream relative order. Descending value order swaps the comparator's
/// operands instead of negating its result, so custom comparators with their
/// own tie semantics stay consistent.
///
/// O(n log n) time, O(n) space.
pub struct Sort {
    order: Order,
    comparator: Option<Arc<dyn Comparator>>,
}

impl Sort {
    #[must_use]
    pub fn new(order: Order, comparator: Option<Arc<dyn Comparator>>) -> Self {
        Self { order, comparator }
    }

    fn compare_values(&self, a: &Value, b: &Value) -> Ordering {
        match &self.comparator {
            Some(c) => c.compare(a, b),
            None => a.three_way(b),
        }
    }

    fn compare(&self, a: &Entry, b: &Entry) -> Ordering {
        match self.order {
            Order::AscendingKey => a.0.cmp(&b.0),
            Order::DescendingKey => b.0.cmp(&a.0),
            Order::AscendingValue => self.compare_values(&a.1, &b.1),
            Order::DescendingValue => self.compare_values(&b.1, &a.1),
        }
    }

    pub(crate) fn apply<'a>(&'a self, input: Entries<'a>) -> Entries<'a> {
        Box::new(Barrier::new(input, move |upstream: Entries<'a>| {
            let mut buffer: Vec<Entry> = upstream.collect();
            tracing::trace!(stage = "Sort", buffered = buffer.len(), "materialized");
            buffer.sort_by(|a, b| self.compare(a, b));
            buffer
        }))
    }

    pub(crate) fn describe(&self) -> String {
        let how = if self.comparator.is_some() {
            "custom comparator"
        } else {
            "natural order"
        };
        format!("{:?} ({how})", self.order)
    }
}
