use crate::functions::{Action, Comparator, GroupingFn, Predicate, Transform};
use crate::key::Key;
use crate::pipeline::{Entries, Entry, Pipeline};
use crate::source::Source;
use crate::stages::{Add, Each, Filter, Flatten, GroupBy, Map, Order, Remove, RemoveAll, Slice, Sort, Stage};
use crate::value::Value;
use anyhow::Result;
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt::{Debug, Formatter, Result as FormatResult};
use std::sync::Arc;

/// A lazily evaluated, persistent sequence of keyed elements.
///
/// Every transforming method appends one stage and returns a **new**
/// collection; the receiver stays valid and can be evaluated or extended
/// independently. Nothing runs until a terminal operation (`count`, `first`,
/// `to_vec`, …) or iteration pulls elements, and each terminal call re-runs
/// the full chain against the source.
///
/// ```
/// use ironchain::{Collection, Value};
///
/// let numbers = Collection::from_vec(vec![1, 2, 3, 4, 5, 6]);
/// let evens = numbers
///     .filter(|v, _| v.as_i64().is_some_and(|n| n > 2))
///     .filter(|v, _| v.as_i64().is_some_and(|n| n % 2 == 0));
///
/// assert_eq!(evens.to_vec(), vec![Value::from(4), Value::from(6)]);
/// assert_eq!(numbers.count(), 6); // untouched
/// ```
#[derive(Clone)]
pub struct Collection {
    pub(crate) pipeline: Pipeline,
}

// ----- construction -----
impl Collection {
    /// A collection with no elements.
    #[must_use]
    pub fn empty() -> Self {
        Self::from_source(Source::buffered(std::iter::empty()))
    }

    /// Same as [`Collection::from_vec`].
    #[must_use]
    pub fn new<T: Into<Value>>(items: Vec<T>) -> Self {
        Self::from_vec(items)
    }

    /// Build from owned values; keys are `0, 1, 2, …`.
    #[must_use]
    pub fn from_vec<T: Into<Value>>(items: Vec<T>) -> Self {
        Self::from_source(Source::buffered(
            items
                .into_iter()
                .enumerate()
                .map(|(i, v)| (Key::from(i), v.into())),
        ))
    }

    /// Build from explicit `(key, value)` pairs, in the given order.
    #[must_use]
    pub fn from_entries<K, V, I>(entries: I) -> Self
    where
        K: Into<Key>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self::from_source(Source::buffered(
            entries.into_iter().map(|(k, v)| (k.into(), v.into())),
        ))
    }

    /// Build from serializable user records; each becomes a [`Value::Map`]
    /// (or whatever shape `serde` gives it).
    ///
    /// # Errors
    /// Propagates the conversion failure of the first record that cannot be
    /// represented.
    pub fn from_serializable<T: Serialize>(items: &[T]) -> Result<Self> {
        let values = items
            .iter()
            .map(Value::from_serializable)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::from_vec(values))
    }

    /// A repeatable, lazily produced source: `make` is called once per
    /// evaluation and its elements are pulled on demand.
    #[must_use]
    pub fn from_fn<F, I>(make: F) -> Self
    where
        F: Fn() -> I + Send + Sync + 'static,
        I: IntoIterator<Item = Value>,
        I::IntoIter: Send + 'static,
    {
        Self::from_source(Source::factory(make))
    }

    /// A single-pass source wrapping a one-shot iterator.
    ///
    /// Only the first evaluation sees the elements; later evaluations (of this
    /// collection or any collection derived from it) see an empty sequence.
    /// Use [`Collection::from_fn`] when the collection must be evaluated more
    /// than once.
    #[must_use]
    pub fn from_once<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Value>,
        I::IntoIter: Send + 'static,
    {
        Self::from_source(Source::once(iter))
    }

    fn from_source(source: Source) -> Self {
        Self {
            pipeline: Pipeline::new(source),
        }
    }

    fn then(&self, stage: Stage) -> Self {
        Self {
            pipeline: self.pipeline.append(stage),
        }
    }

    #[must_use]
    pub const fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }

    /// Whether this collection can be evaluated more than once.
    #[must_use]
    pub fn is_repeatable(&self) -> bool {
        self.pipeline.source().is_repeatable()
    }

    /// Pull entries through the whole chain.
    #[must_use]
    pub fn iter(&self) -> Entries<'_> {
        self.pipeline.evaluate()
    }
}

// ----- stages -----
impl Collection {
    /// Append elements after the existing ones.
    #[must_use]
    pub fn add<I, V>(&self, elements: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.then(Stage::Add(Add::new(
            elements.into_iter().map(Into::into).collect(),
        )))
    }

    /// Keep entries matching `predicate`; keys are preserved.
    #[must_use]
    pub fn filter<F>(&self, predicate: F) -> Self
    where
        F: Fn(&Value, &Key) -> bool + Send + Sync + 'static,
    {
        self.filter_all([Arc::new(predicate) as Arc<dyn Predicate>])
    }

    /// Keep entries matching **all** predicates. An empty list keeps truthy
    /// elements, same as [`Collection::filter_truthy`].
    #[must_use]
    pub fn filter_all<I>(&self, predicates: I) -> Self
    where
        I: IntoIterator<Item = Arc<dyn Predicate>>,
    {
        self.then(Stage::Filter(Filter::new(predicates.into_iter().collect())))
    }

    /// Keep truthy elements (see [`Value::is_truthy`]).
    #[must_use]
    pub fn filter_truthy(&self) -> Self {
        self.filter_all(std::iter::empty())
    }

    /// Rewrite each element; the key is passed along unchanged.
    #[must_use]
    pub fn map<F>(&self, transform: F) -> Self
    where
        F: Fn(&Value, &Key) -> Value + Send + Sync + 'static,
    {
        self.map_all([Arc::new(transform) as Arc<dyn Transform>])
    }

    /// Apply several transforms in order, each one seeing the previous output.
    #[must_use]
    pub fn map_all<I>(&self, transforms: I) -> Self
    where
        I: IntoIterator<Item = Arc<dyn Transform>>,
    {
        self.then(Stage::Map(Map::new(transforms.into_iter().collect())))
    }

    /// Run `action` on each entry as it is pulled, passing the entry through.
    #[must_use]
    pub fn each<F>(&self, action: F) -> Self
    where
        F: Fn(&Value, &Key) + Send + Sync + 'static,
    {
        self.each_all([Arc::new(action) as Arc<dyn Action>])
    }

    #[must_use]
    pub fn each_all<I>(&self, actions: I) -> Self
    where
        I: IntoIterator<Item = Arc<dyn Action>>,
    {
        self.then(Stage::Each(Each::new(actions.into_iter().collect())))
    }

    /// Drop every element equal to `target`.
    #[must_use]
    pub fn remove<V: Into<Value>>(&self, target: V) -> Self {
        self.then(Stage::Remove(Remove::new(target.into())))
    }

    /// Drop every element.
    #[must_use]
    pub fn remove_all(&self) -> Self {
        self.then(Stage::RemoveAll(RemoveAll::new(None)))
    }

    /// Drop elements for which `filter` returns `true`.
    #[must_use]
    pub fn remove_where<F>(&self, filter: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        self.then(Stage::RemoveAll(RemoveAll::new(Some(Arc::new(filter)))))
    }

    /// Sort by key or value using natural ordering.
    #[must_use]
    pub fn sort(&self, order: Order) -> Self {
        self.then(Stage::Sort(Sort::new(order, None)))
    }

    /// Sort with a custom comparator. Key orders ignore the comparator.
    #[must_use]
    pub fn sort_with<F>(&self, order: Order, comparator: F) -> Self
    where
        F: Fn(&Value, &Value) -> Ordering + Send + Sync + 'static,
    {
        let comparator: Arc<dyn Comparator> = Arc::new(comparator);
        self.then(Stage::Sort(Sort::new(order, Some(comparator))))
    }

    /// Positional window; `length == -1` means "to the end" and
    /// `length < -1` trims that many entries off the end.
    #[must_use]
    pub fn slice(&self, index: usize, length: i64) -> Self {
        self.then(Stage::Slice(Slice::new(index, length)))
    }

    /// Group elements by `grouping`, yielding `(group key, list)` entries.
    #[must_use]
    pub fn group_by<F, K>(&self, grouping: F) -> Self
    where
        F: Fn(&Value) -> K + Send + Sync + 'static,
        K: Into<Key> + 'static,
    {
        let grouping: Arc<dyn GroupingFn> = Arc::new(grouping);
        self.then(Stage::GroupBy(GroupBy::new(grouping)))
    }

    /// Expand nested lists and maps one level; keys are renumbered.
    #[must_use]
    pub fn flatten(&self) -> Self {
        self.then(Stage::Flatten(Flatten))
    }
}

impl Default for Collection {
    fn default() -> Self {
        Self::empty()
    }
}

impl<V: Into<Value>> FromIterator<V> for Collection {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Collection {
    type Item = Entry;
    type IntoIter = Entries<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Debug for Collection {
    fn fmt(&self, f: &mut Formatter<'_>) -> FormatResult {
        f.debug_struct("Collection")
            .field("source", self.pipeline.source())
            .field(
                "stages",
                &self
                    .pipeline
                    .stages()
                    .iter()
                    .map(|s| s.name())
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}
