use crate::functions::Transform;
use crate::pipeline::Entries;
use std::sync::Arc;

/// Apply transforms in order, threading each output into the next transform.
/// The key passes through unchanged.
pub struct Map {
    transforms: Vec<Arc<dyn Transform>>,
}

impl Map {
    #[must_use]
    pub const fn new(transforms: Vec<Arc<dyn Transform>>) -> Self {
        Self { transforms }
    }

    pub(crate) fn apply<'a>(&'a self, input: Entries<'a>) -> Entries<'a> {
        Box::new(input.map(move |(key, value)| {
            let value = self
                .transforms
                .iter()
                .fold(value, |acc, t| t.apply(&acc, &key));
            (key, value)
        }))
    }

    pub(crate) fn describe(&self) -> String {
        format!("apply {} transform(s) in sequence", self.transforms.len())
    }
}
