//! Keys paired with every element flowing through a pipeline.
//!
//! A [`Key`] is either an ordinal position ([`Key::Index`]) or a label
//! ([`Key::Label`]). Sources number their elements `0, 1, 2, …`; stages keep the
//! upstream key unless they explicitly regroup (`group_by`) or renumber
//! (`flatten`, `remove`, `remove_all`) or append (`add`).
//!
//! Keys have a total natural order: indexes compare numerically, labels compare
//! lexicographically, and every index sorts before every label.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt::{Display, Formatter, Result as FormatResult};

/// Position or label attached to an element.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Key {
    /// Ordinal key, assigned by sources and renumbering stages.
    Index(i64),
    /// Named key, typically produced by `group_by`.
    Label(String),
}

impl Key {
    /// Return the ordinal if this is an [`Key::Index`].
    #[must_use]
    pub const fn as_index(&self) -> Option<i64> {
        match self {
            Self::Index(i) => Some(*i),
            Self::Label(_) => None,
        }
    }

    /// Return the label if this is a [`Key::Label`].
    #[must_use]
    pub fn as_label(&self) -> Option<&str> {
        match self {
            Self::Index(_) => None,
            Self::Label(s) => Some(s),
        }
    }
}

impl Ord for Key {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Index(a), Self::Index(b)) => a.cmp(b),
            (Self::Label(a), Self::Label(b)) => a.cmp(b),
            (Self::Index(_), Self::Label(_)) => Ordering::Less,
            (Self::Label(_), Self::Index(_)) => Ordering::Greater,
        }
    }
}

impl PartialOrd for Key {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Display for Key {
    fn fmt(&self, f: &mut Formatter<'_>) -> FormatResult {
        match self {
            Self::Index(i) => write!(f, "{i}"),
            Self::Label(s) => f.write_str(s),
        }
    }
}

macro_rules! key_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Key {
                fn from(value: $t) -> Self {
                    Self::Index(i64::from(value))
                }
            }
        )*
    };
}

key_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<usize> for Key {
    fn from(value: usize) -> Self {
        Self::Index(i64::try_from(value).unwrap_or(i64::MAX))
    }
}

impl From<&str> for Key {
    fn from(value: &str) -> Self {
        Self::Label(value.to_string())
    }
}

impl From<String> for Key {
    fn from(value: String) -> Self {
        Self::Label(value)
    }
}

impl From<bool> for Key {
    fn from(value: bool) -> Self {
        Self::Index(i64::from(value))
    }
}
