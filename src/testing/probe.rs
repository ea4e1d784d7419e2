//! Pull-counting probes for laziness and early-termination tests.

use crate::collection::Collection;
use crate::value::Value;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Shared counters recording how often a source was opened and how many
/// elements were pulled out of it.
///
/// Clones share the same counters, so a probe can be moved into a source
/// factory and still be read from the test.
#[derive(Clone, Debug, Default)]
pub struct PullProbe {
    pulled: Arc<AtomicUsize>,
    opened: Arc<AtomicUsize>,
}

impl PullProbe {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Elements produced so far, across every evaluation.
    #[must_use]
    pub fn pulled(&self) -> usize {
        self.pulled.load(Ordering::SeqCst)
    }

    /// Number of evaluations that opened the probed source.
    #[must_use]
    pub fn opened(&self) -> usize {
        self.opened.load(Ordering::SeqCst)
    }

    pub fn reset(&self) {
        self.pulled.store(0, Ordering::SeqCst);
        self.opened.store(0, Ordering::SeqCst);
    }

    /// Count every element `iter` yields.
    pub fn wrap<I: IntoIterator>(&self, iter: I) -> Probed<I::IntoIter> {
        self.opened.fetch_add(1, Ordering::SeqCst);
        Probed {
            inner: iter.into_iter(),
            pulled: Arc::clone(&self.pulled),
        }
    }

    /// A repeatable collection over `items` whose pulls are counted.
    pub fn collection<I, T>(&self, items: I) -> Collection
    where
        I: IntoIterator<Item = T> + Clone + Send + Sync + 'static,
        I::IntoIter: Send + 'static,
        T: Into<Value> + 'static,
    {
        let probe = self.clone();
        Collection::from_fn(move || probe.wrap(items.clone().into_iter().map(Into::<Value>::into)))
    }

    /// A single-pass collection over `items` whose pulls are counted.
    pub fn once_collection<I, T>(&self, items: I) -> Collection
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: Send + 'static,
        T: Into<Value> + 'static,
    {
        Collection::from_once(self.wrap(items.into_iter().map(Into::<Value>::into)))
    }
}

/// Iterator adapter created by [`PullProbe::wrap`].
pub struct Probed<I> {
    inner: I,
    pulled: Arc<AtomicUsize>,
}

impl<I: Iterator> Iterator for Probed<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        let item = self.inner.next()?;
        self.pulled.fetch_add(1, Ordering::SeqCst);
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_only_what_is_pulled() {
        let probe = PullProbe::new();
        let mut it = probe.wrap(0..10);
        assert_eq!(it.next(), Some(0));
        assert_eq!(it.next(), Some(1));
        assert_eq!(probe.pulled(), 2);
        assert_eq!(probe.opened(), 1);
    }

    #[test]
    fn repeatable_collection_reopens() {
        let probe = PullProbe::new();
        let c = probe.collection(vec![1, 2, 3]);
        assert_eq!(probe.opened(), 0);
        assert_eq!(c.count(), 3);
        assert_eq!(c.count(), 3);
        assert_eq!(probe.opened(), 2);
        assert_eq!(probe.pulled(), 6);
    }
}
