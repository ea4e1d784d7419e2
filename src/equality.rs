//! Element equality and the comparison-driven terminal operations.
//!
//! [`Equality`] is the single rule used by `remove`, `contains` and `equals`:
//!
//! - composite operands (lists, maps, converted user records) are equal when
//!   they are structurally equal, recursively;
//! - primitive operands are equal only when both the kind and the value match,
//!   so `1`, `1.0`, `"1"` and `true` are four distinct values. Floats compare
//!   under a total order, so `NaN` equals `NaN` and every sequence equals
//!   itself.
//!
//! [`contains`] and [`equals`] work on any entry iterator and stop pulling as
//! soon as the answer is known.

use crate::key::Key;
use crate::value::Value;
use ordered_float::OrderedFloat;

/// Stateless equality rule shared by every comparison in the crate.
#[derive(Clone, Copy, Debug, Default)]
pub struct Equality;

impl Equality {
    /// Compare two elements: deep structural equality for composites,
    /// strict kind-and-value equality for primitives.
    #[must_use]
    pub fn compare(self, a: &Value, b: &Value) -> bool {
        match (a, b) {
            (Value::List(xs), Value::List(ys)) => {
                xs.len() == ys.len() && xs.iter().zip(ys).all(|(x, y)| self.compare(x, y))
            }
            (Value::Map(xs), Value::Map(ys)) => {
                xs.len() == ys.len()
                    && xs
                        .iter()
                        .zip(ys)
                        .all(|((kx, x), (ky, y))| kx == ky && self.compare(x, y))
            }
            (Value::Null, Value::Null) => true,
            (Value::Bool(x), Value::Bool(y)) => x == y,
            (Value::Int(x), Value::Int(y)) => x == y,
            (Value::Float(x), Value::Float(y)) => OrderedFloat(*x) == OrderedFloat(*y),
            (Value::Str(x), Value::Str(y)) => x == y,
            _ => false,
        }
    }
}

/// Scan `entries` for `target`, stopping at the first match.
pub fn contains<I>(entries: I, target: &Value) -> bool
where
    I: IntoIterator<Item = (Key, Value)>,
{
    let eq = Equality;
    entries.into_iter().any(|(_, v)| eq.compare(&v, target))
}

/// Lock-step, order-sensitive comparison of two entry sequences.
///
/// Keys are ignored; only the element sequence matters. Returns `false` as soon
/// as one side runs out before the other or a pair differs.
pub fn equals<A, B>(left: A, right: B) -> bool
where
    A: IntoIterator<Item = (Key, Value)>,
    B: IntoIterator<Item = (Key, Value)>,
{
    let eq = Equality;
    let mut left = left.into_iter();
    let mut right = right.into_iter();
    loop {
        match (left.next(), right.next()) {
            (None, None) => return true,
            (Some((_, a)), Some((_, b))) if eq.compare(&a, &b) => {}
            _ => return false,
        }
    }
}
