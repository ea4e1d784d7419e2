//! Assertion functions for testing collection outputs.
//!
//! Every assertion evaluates the collection once and panics with the full
//! actual and expected sequences on mismatch.

use crate::collection::Collection;
use crate::pipeline::Entry;
use crate::value::Value;

/// Assert that a collection yields exactly `expected`, in order. Keys are ignored.
///
/// # Panics
///
/// Panics if the evaluated elements differ in length or content.
///
/// # Example
///
/// ```
/// use ironchain::testing::{assert_elements, values};
/// use ironchain::Collection;
///
/// assert_elements(&Collection::from_vec(vec![1, 2, 3]), &values([1, 2, 3]));
/// ```
pub fn assert_elements(actual: &Collection, expected: &[Value]) {
    let actual = actual.to_vec();
    assert_eq!(
        actual.len(),
        expected.len(),
        "Collection length mismatch:\n  Expected length: {}\n  Actual length: {}\n  Expected: {expected:?}\n  Actual: {actual:?}",
        expected.len(),
        actual.len()
    );

    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        assert_eq!(
            a, e,
            "Collection mismatch at position {i}:\n  Expected: {e:?}\n  Actual: {a:?}\n  Full expected: {expected:?}\n  Full actual: {actual:?}"
        );
    }
}

/// Assert that a collection yields exactly `expected` `(key, element)` pairs, in order.
///
/// # Panics
///
/// Panics if any key or element differs, or the lengths differ.
///
/// # Example
///
/// ```
/// use ironchain::testing::assert_entries;
/// use ironchain::{Collection, Key, Order, Value};
///
/// let sorted = Collection::from_vec(vec![2, 1]).sort(Order::AscendingValue);
/// assert_entries(&sorted, &[(Key::from(1), Value::from(1)), (Key::from(0), Value::from(2))]);
/// ```
pub fn assert_entries(actual: &Collection, expected: &[Entry]) {
    let actual = actual.to_entries();
    assert_eq!(
        actual.len(),
        expected.len(),
        "Entry count mismatch:\n  Expected: {expected:?}\n  Actual: {actual:?}"
    );

    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        assert!(
            a.0 == e.0 && a.1 == e.1,
            "Entry mismatch at position {i}:\n  Expected: {e:?}\n  Actual: {a:?}\n  Full expected: {expected:?}\n  Full actual: {actual:?}"
        );
    }
}

/// Assert that a collection yields the same elements as `expected`, in any order.
///
/// Duplicates count: `[1, 1, 2]` does not match `[1, 2, 2]`.
///
/// # Panics
///
/// Panics if an expected element is missing or an unexpected one is present.
pub fn assert_elements_unordered(actual: &Collection, expected: &[Value]) {
    let actual = actual.to_vec();
    let mut unmatched: Vec<&Value> = actual.iter().collect();
    let mut missing = Vec::new();

    for e in expected {
        match unmatched.iter().position(|a| *a == e) {
            Some(pos) => {
                unmatched.swap_remove(pos);
            }
            None => missing.push(e),
        }
    }

    assert!(
        missing.is_empty() && unmatched.is_empty(),
        "Collection content mismatch:\n  Missing elements: {missing:?}\n  Extra elements: {unmatched:?}\n  Expected: {expected:?}\n  Actual: {actual:?}"
    );
}

/// Assert that every element satisfies `predicate`.
///
/// # Panics
///
/// Panics on the first element that fails.
pub fn assert_all<F: Fn(&Value) -> bool>(actual: &Collection, predicate: F) {
    for (key, value) in actual {
        assert!(
            predicate(&value),
            "Predicate failed for element {value:?} at key {key}"
        );
    }
}

/// Assert that at least one element satisfies `predicate`.
///
/// # Panics
///
/// Panics if no element matches.
pub fn assert_any<F: Fn(&Value) -> bool>(actual: &Collection, predicate: F) {
    assert!(
        actual.iter().any(|(_, v)| predicate(&v)),
        "No element satisfied the predicate:\n  Elements: {:?}",
        actual.to_vec()
    );
}

/// Assert that no element satisfies `predicate`.
///
/// # Panics
///
/// Panics on the first matching element.
pub fn assert_none<F: Fn(&Value) -> bool>(actual: &Collection, predicate: F) {
    if let Some((key, value)) = actual.iter().find(|(_, v)| predicate(v)) {
        panic!("Predicate unexpectedly matched element {value:?} at key {key}");
    }
}

/// Assert the number of evaluated elements.
///
/// # Panics
///
/// Panics if the count differs.
pub fn assert_count(actual: &Collection, expected: usize) {
    let count = actual.count();
    assert_eq!(
        count, expected,
        "Collection size mismatch:\n  Expected: {expected}\n  Actual: {count}"
    );
}
