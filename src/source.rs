//! Element producers a pipeline is built from.
//!
//! | kind       | re-evaluable | elements produced                     |
//! |------------|--------------|---------------------------------------|
//! | `Buffered` | yes          | cloned from a shared `Arc<[Entry]>`   |
//! | `Factory`  | yes          | a fresh iterator per evaluation       |
//! | `Once`     | **no**       | a single one-shot iterator            |
//!
//! A `Once` source is drained by its first evaluation. Evaluating it again
//! yields an empty continuation; this is the caller's responsibility to avoid
//! (check [`Source::is_repeatable`]) and is reported with a `tracing` warning
//! rather than an error.

use crate::key::Key;
use crate::pipeline::{Entries, Entry};
use crate::value::Value;
use std::fmt::{Debug, Formatter, Result as FormatResult};
use std::sync::{Arc, Mutex, PoisonError};

type ValueIter = Box<dyn Iterator<Item = Value> + Send>;
type Factory = Arc<dyn Fn() -> ValueIter + Send + Sync>;

pub enum Source {
    /// Materialized entries, shared between every pipeline derived from them.
    Buffered(Arc<[Entry]>),
    /// Lazily produced, re-run from scratch for every evaluation.
    Factory(Factory),
    /// Single-pass producer; empty after the first evaluation takes it.
    Once(Mutex<Option<ValueIter>>),
}

impl Source {
    pub(crate) fn buffered<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = Entry>,
    {
        Self::Buffered(entries.into_iter().collect())
    }

    pub(crate) fn factory<F, I>(f: F) -> Self
    where
        F: Fn() -> I + Send + Sync + 'static,
        I: IntoIterator<Item = Value>,
        I::IntoIter: Send + 'static,
    {
        Self::Factory(Arc::new(move || Box::new(f().into_iter()) as ValueIter))
    }

    pub(crate) fn once<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Value>,
        I::IntoIter: Send + 'static,
    {
        Self::Once(Mutex::new(Some(Box::new(iter.into_iter()))))
    }

    /// Whether evaluating this source twice yields the same elements twice.
    #[must_use]
    pub const fn is_repeatable(&self) -> bool {
        !matches!(self, Self::Once(_))
    }

    /// Short name used by `explain`.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Buffered(_) => "Buffered",
            Self::Factory(_) => "Factory",
            Self::Once(_) => "Once",
        }
    }

    /// Number of elements if known without pulling.
    #[must_use]
    pub fn size_hint(&self) -> Option<usize> {
        match self {
            Self::Buffered(entries) => Some(entries.len()),
            Self::Factory(_) | Self::Once(_) => None,
        }
    }

    /// Open a fresh pull over the source's entries.
    pub(crate) fn open(&self) -> Entries<'_> {
        match self {
            Self::Buffered(entries) => Box::new(entries.iter().cloned()),
            Self::Factory(make) => Box::new(numbered(make())),
            Self::Once(slot) => {
                let taken = slot.lock().unwrap_or_else(PoisonError::into_inner).take();
                match taken {
                    Some(iter) => Box::new(numbered(iter)),
                    None => {
                        tracing::warn!("single-pass source re-evaluated; yielding no elements");
                        Box::new(std::iter::empty())
                    }
                }
            }
        }
    }
}

fn numbered(values: ValueIter) -> impl Iterator<Item = Entry> {
    values.enumerate().map(|(i, v)| (Key::from(i), v))
}

impl Debug for Source {
    fn fmt(&self, f: &mut Formatter<'_>) -> FormatResult {
        match self {
            Self::Buffered(entries) => f.debug_tuple("Buffered").field(&entries.len()).finish(),
            Self::Factory(_) => f.write_str("Factory"),
            Self::Once(_) => f.write_str("Once"),
        }
    }
}
