use crate::equality::Equality;
use crate::functions::Matcher;
use crate::pipeline::{Entries, Entry};
use crate::{Key, Value};
use std::sync::Arc;

/// Append new elements after everything upstream.
///
/// Upstream keys pass through. New elements continue the integer numbering:
/// the first one gets one more than the largest integer key seen so far (or
/// `0` if there was none), and each following one increments from there.
pub struct Add {
    elements: Arc<[Value]>,
}

impl Add {
    #[must_use]
    pub fn new(elements: Vec<Value>) -> Self {
        Self {
            elements: elements.into(),
        }
    }

    pub(crate) fn apply<'a>(&'a self, input: Entries<'a>) -> Entries<'a> {
        Box::new(Appended {
            upstream: Some(input),
            next_index: 0,
            extra: self.elements.iter(),
        })
    }

    pub(crate) fn describe(&self) -> String {
        format!("append {} element(s)", self.elements.len())
    }
}

struct Appended<'a> {
    upstream: Option<Entries<'a>>,
    next_index: i64,
    extra: std::slice::Iter<'a, Value>,
}

impl Iterator for Appended<'_> {
    type Item = Entry;

    fn next(&mut self) -> Option<Entry> {
        if let Some(upstream) = self.upstream.as_mut() {
            if let Some(entry) = upstream.next() {
                if let Key::Index(i) = entry.0 {
                    self.next_index = self.next_index.max(i.saturating_add(1));
                }
                return Some(entry);
            }
            self.upstream = None;
        }
        let value = self.extra.next()?.clone();
        let key = Key::Index(self.next_index);
        self.next_index = self.next_index.saturating_add(1);
        Some((key, value))
    }
}

/// Drop **every** upstream element equal to the target.
///
/// Survivors are renumbered `0, 1, 2, …`.
pub struct Remove {
    target: Value,
}

impl Remove {
    #[must_use]
    pub const fn new(target: Value) -> Self {
        Self { target }
    }

    pub(crate) fn apply<'a>(&'a self, input: Entries<'a>) -> Entries<'a> {
        let eq = Equality;
        renumbered(input.filter(move |(_, v)| !eq.compare(&self.target, v)))
    }

    pub(crate) fn describe(&self) -> String {
        format!("drop elements equal to {:?}", self.target)
    }
}

/// Drop elements matching the filter, or all of them when there is none.
/// Survivors are renumbered `0, 1, 2, …`.
///
/// Upstream is still pulled in the unfiltered case, so upstream side effects
/// (`each`) run exactly as they would for any other consumer.
pub struct RemoveAll {
    filter: Option<Matcher>,
}

impl RemoveAll {
    #[must_use]
    pub fn new(filter: Option<Matcher>) -> Self {
        Self { filter }
    }

    pub(crate) fn apply<'a>(&'a self, input: Entries<'a>) -> Entries<'a> {
        match &self.filter {
            None => Box::new(input.filter(|_| false)),
            Some(is_match) => renumbered(input.filter(move |(_, v)| !is_match(v))),
        }
    }

    pub(crate) fn describe(&self) -> String {
        match self.filter {
            None => "drop every element".to_string(),
            Some(_) => "drop elements matching filter".to_string(),
        }
    }
}

fn renumbered<'a>(kept: impl Iterator<Item = Entry> + 'a) -> Entries<'a> {
    Box::new(kept.enumerate().map(|(i, (_, value))| (Key::from(i), value)))
}
