use crate::key::Key;
use crate::source::Source;
use crate::stages::Stage;
use crate::value::Value;
use std::sync::Arc;

/// One element together with its key.
pub type Entry = (Key, Value);

/// A pull-based stream of entries; every stage consumes and produces one.
pub type Entries<'a> = Box<dyn Iterator<Item = Entry> + 'a>;

/// -------- Pipeline + stage chain --------
/// Stages are kept as an append-only linked chain. Each link points at the one
/// before it, so every derived pipeline shares its prefix with its parent and
/// appending never touches an existing link.
struct StageLink {
    prev: Option<Arc<StageLink>>,
    stage: Stage,
}

/// An immutable source plus an ordered list of stages.
///
/// Cloning is cheap (two `Arc` bumps). [`Pipeline::append`] returns a new value
/// and leaves the receiver usable, so one pipeline can fan out into several
/// independent derived pipelines.
#[derive(Clone)]
pub struct Pipeline {
    source: Arc<Source>,
    tail: Option<Arc<StageLink>>,
    depth: usize,
}

impl Pipeline {
    pub(crate) fn new(source: Source) -> Self {
        Self {
            source: Arc::new(source),
            tail: None,
            depth: 0,
        }
    }

    /// Return a new pipeline with `stage` appended; `self` is untouched.
    #[must_use]
    pub fn append(&self, stage: Stage) -> Self {
        Self {
            source: Arc::clone(&self.source),
            tail: Some(Arc::new(StageLink {
                prev: self.tail.clone(),
                stage,
            })),
            depth: self.depth + 1,
        }
    }

    #[must_use]
    pub fn source(&self) -> &Source {
        &self.source
    }

    #[must_use]
    pub const fn stage_count(&self) -> usize {
        self.depth
    }

    /// Stages in application order (source side first).
    #[must_use]
    pub fn stages(&self) -> Vec<&Stage> {
        // Linear backwalk: last stage → … → first stage
        let mut chain = Vec::with_capacity(self.depth);
        let mut cur = self.tail.as_deref();
        while let Some(link) = cur {
            chain.push(&link.stage);
            cur = link.prev.as_deref();
        }
        chain.reverse();
        chain
    }

    /// Thread the source through every stage, left to right.
    ///
    /// Nothing is pulled until the returned iterator is advanced, and nothing
    /// is cached: each call re-runs the whole chain against the source.
    #[must_use]
    pub fn evaluate(&self) -> Entries<'_> {
        tracing::trace!(
            source = self.source.kind(),
            stages = self.depth,
            "evaluating pipeline"
        );
        self.stages()
            .into_iter()
            .fold(self.source.open(), |upstream, stage| stage.apply(upstream))
    }
}
