//! Debug utilities for inspecting pipelines during test execution.
//!
//! These add pass-through `each` stages that print to stderr as elements are
//! pulled, so the output interleaves with the order evaluation actually runs.

use crate::collection::Collection;
use crate::value::Value;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Debugging helpers for [`Collection`].
///
/// ```
/// use ironchain::testing::CollectionDebugExt;
/// use ironchain::{Collection, Value};
///
/// let doubled = Collection::from_vec(vec![1, 2, 3])
///     .debug_inspect("source")
///     .map(|v, _| Value::from(v.as_i64().unwrap_or(0) * 2))
///     .debug_sample("after map", 2);
///
/// assert_eq!(doubled.count(), 3);
/// ```
pub trait CollectionDebugExt {
    /// Print every element and its key as it is pulled.
    #[must_use]
    fn debug_inspect(&self, label: &str) -> Self;

    /// Run `inspector` on every element as it is pulled, then print it.
    #[must_use]
    fn debug_inspect_with<F>(&self, label: &str, inspector: F) -> Self
    where
        F: Fn(&Value) + Send + Sync + 'static;

    /// Print only the first `n` elements pulled through this point, counted
    /// across all evaluations.
    #[must_use]
    fn debug_sample(&self, label: &str, n: usize) -> Self;
}

impl CollectionDebugExt for Collection {
    fn debug_inspect(&self, label: &str) -> Self {
        self.debug_inspect_with(label, |_| {})
    }

    fn debug_inspect_with<F>(&self, label: &str, inspector: F) -> Self
    where
        F: Fn(&Value) + Send + Sync + 'static,
    {
        let label = label.to_string();
        self.each(move |value, key| {
            inspector(value);
            eprintln!("[Debug: {label}] [{key}]: {value:?}");
        })
    }

    fn debug_sample(&self, label: &str, n: usize) -> Self {
        let label = label.to_string();
        let seen = Arc::new(AtomicUsize::new(0));
        self.each(move |value, key| {
            let i = seen.fetch_add(1, Ordering::Relaxed);
            if i < n {
                eprintln!("[Debug: {label}] Sample {}/{n} [{key}]: {value:?}", i + 1);
            } else if i == n {
                eprintln!("[Debug: {label}] ... (further elements not shown)");
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inspect_runs_lazily() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let c = Collection::from_vec(vec![1, 2, 3]).debug_inspect_with("t", move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert_eq!(c.first(), Some(Value::from(1)));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
