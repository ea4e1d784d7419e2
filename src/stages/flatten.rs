use crate::pipeline::{Entries, Entry};
use crate::{Key, Value};

/// Expand nested lists and maps by exactly one level.
///
/// A list yields its items, a map yields its values, anything else passes
/// through as is. Output keys are renumbered `0, 1, 2, …` because one input
/// entry can become any number of output entries.
#[derive(Clone, Copy, Debug, Default)]
pub struct Flatten;

impl Flatten {
    pub(crate) fn apply<'a>(&'a self, input: Entries<'a>) -> Entries<'a> {
        let expanded = input.flat_map(|(_, value)| -> Box<dyn Iterator<Item = Value>> {
            match value {
                Value::List(items) => Box::new(items.into_iter()),
                Value::Map(fields) => Box::new(fields.into_values()),
                other => Box::new(std::iter::once(other)),
            }
        });
        Box::new(
            expanded
                .enumerate()
                .map(|(i, v)| -> Entry { (Key::from(i), v) }),
        )
    }
}
