//! Stage kinds and their pull-based iterator adapters.
//!
//! Every stage wraps its upstream [`Entries`] and exposes the same
//! abstraction, so a chain of stages behaves like one composed producer.
//! Most stages do O(1) work per pulled entry. The eager ones (sort, group_by,
//! and slice with a negative length below `-1`) must see their input before
//! producing output; they buffer behind a [`Barrier`], which waits for the
//! first pull before draining upstream.

mod filter;
mod flatten;
mod group;
mod map;
mod slice;
mod sort;
mod write;

pub use filter::{Each, Filter};
pub use flatten::Flatten;
pub use group::GroupBy;
pub use map::Map;
pub use slice::Slice;
pub use sort::{Order, Sort};
pub use write::{Add, Remove, RemoveAll};

use crate::pipeline::{Entries, Entry};

/// One transformation unit in a pipeline.
pub enum Stage {
    Filter(Filter),
    Map(Map),
    Each(Each),
    Add(Add),
    Remove(Remove),
    RemoveAll(RemoveAll),
    Sort(Sort),
    Slice(Slice),
    GroupBy(GroupBy),
    Flatten(Flatten),
}

impl Stage {
    /// Wrap `input` with this stage's adapter.
    pub fn apply<'a>(&'a self, input: Entries<'a>) -> Entries<'a> {
        match self {
            Self::Filter(s) => s.apply(input),
            Self::Map(s) => s.apply(input),
            Self::Each(s) => s.apply(input),
            Self::Add(s) => s.apply(input),
            Self::Remove(s) => s.apply(input),
            Self::RemoveAll(s) => s.apply(input),
            Self::Sort(s) => s.apply(input),
            Self::Slice(s) => s.apply(input),
            Self::GroupBy(s) => s.apply(input),
            Self::Flatten(s) => s.apply(input),
        }
    }

    /// Whether this stage buffers its relevant input before its first output.
    #[must_use]
    pub const fn is_eager(&self) -> bool {
        match self {
            Self::Sort(_) | Self::GroupBy(_) => true,
            Self::Slice(s) => s.is_buffered(),
            _ => false,
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Filter(_) => "Filter",
            Self::Map(_) => "Map",
            Self::Each(_) => "Each",
            Self::Add(_) => "Add",
            Self::Remove(_) => "Remove",
            Self::RemoveAll(_) => "RemoveAll",
            Self::Sort(_) => "Sort",
            Self::Slice(_) => "Slice",
            Self::GroupBy(_) => "GroupBy",
            Self::Flatten(_) => "Flatten",
        }
    }

    /// Human-readable parameters, used by `explain`.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Filter(s) => s.describe(),
            Self::Map(s) => s.describe(),
            Self::Each(s) => s.describe(),
            Self::Add(s) => s.describe(),
            Self::Remove(s) => s.describe(),
            Self::RemoveAll(s) => s.describe(),
            Self::Sort(s) => s.describe(),
            Self::Slice(s) => s.describe(),
            Self::GroupBy(_) => "group entries by derived key, first occurrence order".to_string(),
            Self::Flatten(_) => "expand nested lists/maps one level, renumber keys".to_string(),
        }
    }
}

/// Deferred buffering point for eager stages.
///
/// Holds the upstream and a materializing function until the first `next()`,
/// then drains the buffer that function returned.
pub(crate) struct Barrier<'a, F> {
    state: BarrierState<'a, F>,
}

enum BarrierState<'a, F> {
    Pending(Entries<'a>, F),
    Draining(std::vec::IntoIter<Entry>),
    Spent,
}

impl<'a, F> Barrier<'a, F>
where
    F: FnOnce(Entries<'a>) -> Vec<Entry>,
{
    pub(crate) fn new(input: Entries<'a>, materialize: F) -> Self {
        Self {
            state: BarrierState::Pending(input, materialize),
        }
    }
}

impl<'a, F> Iterator for Barrier<'a, F>
where
    F: FnOnce(Entries<'a>) -> Vec<Entry>,
{
    type Item = Entry;

    fn next(&mut self) -> Option<Entry> {
        if matches!(self.state, BarrierState::Pending(..)) {
            let BarrierState::Pending(input, materialize) =
                std::mem::replace(&mut self.state, BarrierState::Spent)
            else {
                return None;
            };
            self.state = BarrierState::Draining(materialize(input).into_iter());
        }
        match &mut self.state {
            BarrierState::Draining(buffer) => buffer.next(),
            BarrierState::Pending(..) | BarrierState::Spent => None,
        }
    }
}
