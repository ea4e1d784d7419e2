use super::Barrier;
use crate::functions::GroupingFn;
use crate::pipeline::{Entries, Entry};
use crate::{Key, Value};
use std::collections::HashMap;
use std::sync::Arc;

/// Group elements by a derived key.
///
/// Emits one `(group key, list of elements)` entry per group. Groups appear in
/// order of first occurrence; each list keeps the upstream relative order.
/// Fully materializes upstream: O(n) time, O(n) space.
pub struct GroupBy {
    grouping: Arc<dyn GroupingFn>,
}

impl GroupBy {
    #[must_use]
    pub fn new(grouping: Arc<dyn GroupingFn>) -> Self {
        Self { grouping }
    }

    pub(crate) fn apply<'a>(&'a self, input: Entries<'a>) -> Entries<'a> {
        Box::new(Barrier::new(input, move |upstream: Entries<'a>| {
            let mut slots: HashMap<Key, usize> = HashMap::new();
            let mut groups: Vec<(Key, Vec<Value>)> = Vec::new();
            let mut buffered = 0usize;
            for (_, value) in upstream {
                buffered += 1;
                let key = self.grouping.group_key(&value);
                let slot = *slots.entry(key.clone()).or_insert_with(|| {
                    groups.push((key, Vec::new()));
                    groups.len() - 1
                });
                groups[slot].1.push(value);
            }
            tracing::trace!(
                stage = "GroupBy",
                buffered,
                groups = groups.len(),
                "materialized"
            );
            groups
                .into_iter()
                .map(|(k, vs)| (k, Value::List(vs)))
                .collect::<Vec<Entry>>()
        }))
    }
}
