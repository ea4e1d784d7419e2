use crate::functions::{Action, Predicate};
use crate::pipeline::Entries;
use crate::{Key, Value};
use std::sync::Arc;

/// Keep entries accepted by **every** predicate (logical AND).
///
/// With no predicates the stage keeps truthy elements. Keys of kept entries
/// are preserved.
pub struct Filter {
    predicates: Vec<Arc<dyn Predicate>>,
}

impl Filter {
    #[must_use]
    pub const fn new(predicates: Vec<Arc<dyn Predicate>>) -> Self {
        Self { predicates }
    }

    fn keeps(&self, value: &Value, key: &Key) -> bool {
        if self.predicates.is_empty() {
            return value.is_truthy();
        }
        self.predicates.iter().all(|p| p.test(value, key))
    }

    pub(crate) fn apply<'a>(&'a self, input: Entries<'a>) -> Entries<'a> {
        Box::new(input.filter(move |(k, v)| self.keeps(v, k)))
    }

    pub(crate) fn describe(&self) -> String {
        match self.predicates.len() {
            0 => "keep truthy elements".to_string(),
            n => format!("keep elements matching all of {n} predicate(s)"),
        }
    }
}

/// Side-effecting pass-through: run every action on each entry as it is
/// pulled, then yield the entry unchanged.
pub struct Each {
    actions: Vec<Arc<dyn Action>>,
}

impl Each {
    #[must_use]
    pub const fn new(actions: Vec<Arc<dyn Action>>) -> Self {
        Self { actions }
    }

    pub(crate) fn apply<'a>(&'a self, input: Entries<'a>) -> Entries<'a> {
        Box::new(input.inspect(move |(k, v)| {
            for action in &self.actions {
                action.run(v, k);
            }
        }))
    }

    pub(crate) fn describe(&self) -> String {
        format!("run {} action(s) per element", self.actions.len())
    }
}
