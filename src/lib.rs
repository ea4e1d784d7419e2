//! # Ironchain
//!
//! **Lazy, persistent collection pipelines** for Rust. Build a chain of
//! transformations over a sequence of keyed elements, then pull results
//! through the whole chain in a single pass.
//!
//! ## Key Features
//!
//! - **Fluent, persistent API** - every operation returns a new collection and leaves the receiver usable
//! - **Single-pass evaluation** - elements flow one at a time from the source through every stage
//! - **Early termination** - `first`, `get_at`, `find_by`, `contains` stop pulling as soon as they can answer
//! - **Keys travel with elements** - filters, maps and sorts keep the original key of each element
//! - **Bounded buffering** - only sort, group-by and tail-trimming slices buffer their input
//! - **Serde boundary** - user records come in through `serde`, results go out as JSON
//!
//! ## Quick Start
//!
//! ```
//! use ironchain::{Collection, Value};
//!
//! let fruits = Collection::from_vec(vec!["apple", "banana", "cherry", "date"]);
//!
//! let picked = fruits
//!     .filter(|v, _| v.as_str().is_some_and(|s| s.len() > 4))
//!     .map(|v, _| Value::from(v.as_str().map(str::to_uppercase)));
//!
//! assert_eq!(picked.join_to_string("-"), "APPLE-BANANA-CHERRY");
//! assert_eq!(fruits.count(), 4);
//! ```
//!
//! ## Core Concepts
//!
//! ### Collection
//!
//! A [`Collection`] is an immutable handle over a [`Pipeline`]: one source plus
//! an ordered list of stages. Appending a stage shares the existing chain, so
//! deriving many collections from one base costs one small allocation each.
//!
//! ### Sources
//!
//! - [`Collection::from_vec`] / [`Collection::from_entries`] - buffered, repeatable
//! - [`Collection::from_fn`] - produced lazily by a factory, repeatable
//! - [`Collection::from_once`] - a one-shot iterator; only the first evaluation sees elements
//! - [`Collection::from_serializable`] - any `serde::Serialize` records
//!
//! ### Stages
//!
//! #### Lazy (constant work per element)
//! - [`filter`](Collection::filter) / [`filter_all`](Collection::filter_all) / [`filter_truthy`](Collection::filter_truthy)
//! - [`map`](Collection::map) / [`map_all`](Collection::map_all)
//! - [`each`](Collection::each) - side effects as elements are pulled
//! - [`add`](Collection::add) - append elements after the upstream
//! - [`remove`](Collection::remove) / [`remove_where`](Collection::remove_where) / [`remove_all`](Collection::remove_all)
//! - [`slice`](Collection::slice) with `length >= -1`
//! - [`flatten`](Collection::flatten) - one level of nesting
//!
//! #### Eager (buffer before the first output)
//! - [`sort`](Collection::sort) / [`sort_with`](Collection::sort_with)
//! - [`group_by`](Collection::group_by)
//! - [`slice`](Collection::slice) with `length < -1` (buffers only the trimmed tail)
//!
//! ### Terminal operations
//!
//! See [`terminal`]: `count`, `first`, `last`, `get_at`, `find_by`, `reduce`,
//! `join_to_string`, `contains`, `equals`, `to_vec`, `to_entries`. Each call
//! re-runs the chain against the source; nothing is cached.
//!
//! ## Serialization
//!
//! ```
//! use ironchain::{Collection, PreserveKeys};
//!
//! let c = Collection::from_vec(vec![1, 2, 3, 4]).filter(|v, _| v.as_i64().is_some_and(|n| n % 2 == 0));
//! assert_eq!(c.to_json(PreserveKeys::Discard)?, "[2,4]");
//! assert_eq!(c.to_json(PreserveKeys::Preserve)?, r#"{"1":2,"3":4}"#);
//! # anyhow::Result::<()>::Ok(())
//! ```
//!
//! ## Logging
//!
//! The crate emits `tracing` events (evaluation start, eager stage buffering,
//! re-evaluated single-pass sources) and never installs a subscriber.
//!
//! ## Module Overview
//!
//! - [`collection`] - the `Collection` façade and its stage methods
//! - [`pipeline`] - persistent stage chain and evaluation
//! - [`source`] - buffered, factory and single-pass sources
//! - [`stages`] - stage adapters
//! - [`terminal`] - consumers
//! - [`equality`] - strict structural equality, `contains`, `equals`
//! - [`serialize`] - JSON output
//! - [`explain`] - pipeline introspection
//! - [`testing`] - assertions, builders, fixtures and probes for tests

pub mod collection;
pub mod equality;
pub mod explain;
pub mod functions;
pub mod key;
pub mod pipeline;
pub mod serialize;
pub mod source;
pub mod stages;
pub mod terminal;
pub mod testing;
pub mod value;

pub use collection::Collection;
pub use equality::Equality;
pub use explain::{ExplainStep, Explanation};
pub use key::Key;
pub use pipeline::{Entries, Entry, Pipeline};
pub use serialize::{JsonOptions, PreserveKeys};
pub use source::Source;
pub use stages::{Order, Stage};
pub use value::Value;
