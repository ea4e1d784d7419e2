//! Terminal operations: consumers that drive a pipeline to a concrete result.
//!
//! Each function here takes any entry iterator, so it works on a
//! [`Collection`], on a raw [`Pipeline::evaluate`](crate::Pipeline::evaluate)
//! stream, or on a plain `Vec<Entry>`. The [`Collection`] methods are thin
//! wrappers that open a fresh evaluation per call.
//!
//! | operation        | pulls                          |
//! |------------------|--------------------------------|
//! | `first`          | one entry                      |
//! | `get_at(i)`      | until key `i` is found         |
//! | `find_by`        | until the first hit            |
//! | `contains`       | until the first match          |
//! | `equals`         | until the first difference     |
//! | `is_empty`       | one entry                      |
//! | everything else  | the whole sequence             |

use crate::collection::Collection;
use crate::equality;
use crate::key::Key;
use crate::pipeline::Entry;
use crate::value::Value;

/// Number of entries; always a full traversal.
pub fn count<I: IntoIterator<Item = Entry>>(entries: I) -> usize {
    entries.into_iter().count()
}

/// First element, pulling exactly one entry.
pub fn first<I: IntoIterator<Item = Entry>>(entries: I) -> Option<Value> {
    entries.into_iter().next().map(|(_, v)| v)
}

/// Last element; drains the sequence.
pub fn last<I: IntoIterator<Item = Entry>>(entries: I) -> Option<Value> {
    entries.into_iter().last().map(|(_, v)| v)
}

/// Element whose key is the ordinal `index`; stops at the first such entry.
///
/// Lookup is by key, not position: after a `sort` key `0` may come last, and
/// after a `filter` some ordinals are simply gone. A negative index is "not
/// found" and pulls nothing.
pub fn get_at<I: IntoIterator<Item = Entry>>(entries: I, index: i64) -> Option<Value> {
    if index < 0 {
        return None;
    }
    let wanted = Key::Index(index);
    entries
        .into_iter()
        .find(|(key, _)| *key == wanted)
        .map(|(_, v)| v)
}

/// First element accepted by **any** of the predicates.
pub fn find_by<I, P, F>(entries: I, predicates: P) -> Option<Value>
where
    I: IntoIterator<Item = Entry>,
    P: IntoIterator<Item = F>,
    F: Fn(&Value) -> bool,
{
    let predicates: Vec<F> = predicates.into_iter().collect();
    entries
        .into_iter()
        .map(|(_, v)| v)
        .find(|v| predicates.iter().any(|p| p(v)))
}

/// Left fold over the elements, starting from `initial`.
pub fn reduce<I, A, F>(entries: I, aggregator: F, initial: A) -> A
where
    I: IntoIterator<Item = Entry>,
    F: FnMut(A, &Value) -> A,
{
    let mut aggregator = aggregator;
    entries
        .into_iter()
        .fold(initial, |carry, (_, v)| aggregator(carry, &v))
}

/// Render elements with their `Display` form, separated by `separator`.
pub fn join_to_string<I: IntoIterator<Item = Entry>>(entries: I, separator: &str) -> String {
    let mut out = String::new();
    for (i, (_, value)) in entries.into_iter().enumerate() {
        if i > 0 {
            out.push_str(separator);
        }
        out.push_str(&value.to_string());
    }
    out
}

impl Collection {
    #[must_use]
    pub fn count(&self) -> usize {
        count(self.iter())
    }

    /// `true` when the pipeline yields nothing; pulls at most one entry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    #[must_use]
    pub fn first(&self) -> Option<Value> {
        first(self.iter())
    }

    #[must_use]
    pub fn first_or(&self, default: impl Into<Value>) -> Value {
        self.first().unwrap_or_else(|| default.into())
    }

    #[must_use]
    pub fn last(&self) -> Option<Value> {
        last(self.iter())
    }

    #[must_use]
    pub fn last_or(&self, default: impl Into<Value>) -> Value {
        self.last().unwrap_or_else(|| default.into())
    }

    /// Element carrying the ordinal key `index`.
    ///
    /// ```
    /// use ironchain::{Collection, Order, Value};
    ///
    /// let c = Collection::from_vec(vec!["a", "b", "c"]);
    /// assert_eq!(c.get_at(1), Some(Value::from("b")));
    /// assert_eq!(c.get_at(-1), None);
    /// assert_eq!(c.get_at_or(10, "none"), Value::from("none"));
    /// assert_eq!(c.sort(Order::DescendingValue).get_at(0), Some(Value::from("a")));
    /// ```
    #[must_use]
    pub fn get_at(&self, index: i64) -> Option<Value> {
        if index < 0 {
            return None;
        }
        get_at(self.iter(), index)
    }

    #[must_use]
    pub fn get_at_or(&self, index: i64, default: impl Into<Value>) -> Value {
        self.get_at(index).unwrap_or_else(|| default.into())
    }

    /// First element matching any predicate; stops at the first hit.
    pub fn find_by<P, F>(&self, predicates: P) -> Option<Value>
    where
        P: IntoIterator<Item = F>,
        F: Fn(&Value) -> bool,
    {
        find_by(self.iter(), predicates)
    }

    pub fn reduce<A, F>(&self, aggregator: F, initial: A) -> A
    where
        F: FnMut(A, &Value) -> A,
    {
        reduce(self.iter(), aggregator, initial)
    }

    #[must_use]
    pub fn join_to_string(&self, separator: &str) -> String {
        join_to_string(self.iter(), separator)
    }

    /// Whether any element equals `target`; stops at the first match.
    #[must_use]
    pub fn contains(&self, target: impl Into<Value>) -> bool {
        equality::contains(self.iter(), &target.into())
    }

    /// Same elements in the same order (keys ignored).
    #[must_use]
    pub fn equals(&self, other: &Self) -> bool {
        equality::equals(self.iter(), other.iter())
    }

    /// Materialize the elements, discarding keys.
    #[must_use]
    pub fn to_vec(&self) -> Vec<Value> {
        self.iter().map(|(_, v)| v).collect()
    }

    /// Materialize the entries, keys included.
    #[must_use]
    pub fn to_entries(&self) -> Vec<Entry> {
        self.iter().collect()
    }
}
