//! Serializer boundary: turning an evaluated sequence into JSON.
//!
//! The pipeline hands over a finished entry sequence plus a key mode; the
//! formatting rules live here and nowhere else.
//!
//! - [`PreserveKeys::Discard`] always yields a JSON array of the elements.
//! - [`PreserveKeys::Preserve`] yields a JSON array when the keys are exactly
//!   `0, 1, …, n-1` in order, and otherwise a JSON object whose members are
//!   the keys' string forms in evaluation order.
//!
//! ```
//! use ironchain::{Collection, Order, PreserveKeys};
//!
//! let c = Collection::from_vec(vec![3, 1, 2]).sort(Order::AscendingValue);
//! assert_eq!(c.to_json(PreserveKeys::Discard)?, "[1,2,3]");
//! assert_eq!(c.to_json(PreserveKeys::Preserve)?, r#"{"1":1,"2":2,"0":3}"#);
//! # anyhow::Result::<()>::Ok(())
//! ```

use crate::collection::Collection;
use crate::key::Key;
use crate::pipeline::Entry;
use anyhow::{Context, Result};
use serde_json::{Map, Value as Json};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// How keys are treated when serializing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PreserveKeys {
    #[default]
    Preserve,
    Discard,
}

/// Options for JSON output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct JsonOptions {
    pub preserve_keys: PreserveKeys,
    /// Indented, multi-line output.
    pub pretty: bool,
}

impl From<PreserveKeys> for JsonOptions {
    fn from(preserve_keys: PreserveKeys) -> Self {
        Self {
            preserve_keys,
            pretty: false,
        }
    }
}

/// Build the array representation of an evaluated sequence.
pub fn to_array<I: IntoIterator<Item = Entry>>(entries: I, mode: PreserveKeys) -> Json {
    let entries = entries.into_iter();
    match mode {
        PreserveKeys::Discard => Json::Array(entries.map(|(_, v)| Json::from(&v)).collect()),
        PreserveKeys::Preserve => {
            let entries: Vec<Entry> = entries.collect();
            let is_list = entries
                .iter()
                .enumerate()
                .all(|(i, (k, _))| k.as_index().and_then(|k| usize::try_from(k).ok()) == Some(i));
            if is_list {
                return Json::Array(entries.iter().map(|(_, v)| Json::from(v)).collect());
            }
            let mut object = Map::with_capacity(entries.len());
            for (key, value) in &entries {
                object.insert(key_name(key), Json::from(value));
            }
            Json::Object(object)
        }
    }
}

fn key_name(key: &Key) -> String {
    key.to_string()
}

/// Serialize an evaluated sequence to JSON text.
///
/// # Errors
/// Propagates `serde_json` failures.
pub fn to_json<I: IntoIterator<Item = Entry>>(entries: I, options: JsonOptions) -> Result<String> {
    let array = to_array(entries, options.preserve_keys);
    let text = if options.pretty {
        serde_json::to_string_pretty(&array)
    } else {
        serde_json::to_string(&array)
    };
    text.context("serializing collection to JSON")
}

impl Collection {
    /// Evaluate and build the array representation.
    #[must_use]
    pub fn to_array(&self, mode: PreserveKeys) -> Json {
        to_array(self.iter(), mode)
    }

    /// Evaluate and serialize to compact JSON.
    ///
    /// # Errors
    /// Propagates `serde_json` failures.
    pub fn to_json(&self, mode: PreserveKeys) -> Result<String> {
        to_json(self.iter(), mode.into())
    }

    /// Evaluate and serialize to indented JSON.
    ///
    /// # Errors
    /// Propagates `serde_json` failures.
    pub fn to_json_pretty(&self, mode: PreserveKeys) -> Result<String> {
        to_json(
            self.iter(),
            JsonOptions {
                preserve_keys: mode,
                pretty: true,
            },
        )
    }

    /// Evaluate and serialize with explicit [`JsonOptions`].
    ///
    /// # Errors
    /// Propagates `serde_json` failures.
    pub fn to_json_with(&self, options: JsonOptions) -> Result<String> {
        to_json(self.iter(), options)
    }

    /// Evaluate and write JSON to `path`. Returns the number of elements written.
    ///
    /// # Errors
    /// Fails if the file cannot be created or written.
    pub fn write_json(&self, path: impl AsRef<Path>, options: JsonOptions) -> Result<usize> {
        let path = path.as_ref();
        let array = to_array(self.iter(), options.preserve_keys);
        let written = match &array {
            Json::Array(items) => items.len(),
            Json::Object(members) => members.len(),
            _ => 0,
        };
        let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
        let mut w = BufWriter::new(file);
        if options.pretty {
            serde_json::to_writer_pretty(&mut w, &array)
        } else {
            serde_json::to_writer(&mut w, &array)
        }
        .with_context(|| format!("write JSON to {}", path.display()))?;
        w.flush().with_context(|| format!("flush {}", path.display()))?;
        Ok(written)
    }
}
