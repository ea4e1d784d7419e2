//! Pipeline introspection.
//!
//! [`Collection::explain`] walks the stage chain without pulling a single
//! element and reports what an evaluation would do: the source kind, every
//! stage in application order, and which stages buffer their input.
//!
//! ```
//! use ironchain::{Collection, Order};
//!
//! let plan = Collection::from_vec(vec![3, 1, 2])
//!     .filter(|v, _| v.is_truthy())
//!     .sort(Order::AscendingValue)
//!     .explain();
//!
//! assert_eq!(plan.steps.len(), 2);
//! assert_eq!(plan.eager_stages, 1);
//! assert!(plan.to_string().contains("Step 2: Sort [BARRIER]"));
//! ```

use crate::collection::Collection;
use std::fmt::{Display, Formatter, Result as FormatResult};

/// One stage of an explained pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplainStep {
    /// 1-based position in application order.
    pub step: usize,
    /// Stage kind, e.g. `"Filter"`.
    pub name: &'static str,
    /// Stage parameters in words.
    pub description: String,
    /// Whether the stage buffers its input before producing output.
    pub is_barrier: bool,
}

/// Static description of a pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Explanation {
    pub source_kind: &'static str,
    /// Element count, when the source knows it without pulling.
    pub source_size: Option<usize>,
    pub repeatable: bool,
    pub steps: Vec<ExplainStep>,
    pub lazy_stages: usize,
    pub eager_stages: usize,
}

impl Collection {
    /// Describe the pipeline; nothing is evaluated.
    #[must_use]
    pub fn explain(&self) -> Explanation {
        let source = self.pipeline.source();
        let steps: Vec<ExplainStep> = self
            .pipeline
            .stages()
            .into_iter()
            .enumerate()
            .map(|(idx, stage)| ExplainStep {
                step: idx + 1,
                name: stage.name(),
                description: stage.describe(),
                is_barrier: stage.is_eager(),
            })
            .collect();
        let eager_stages = steps.iter().filter(|s| s.is_barrier).count();
        Explanation {
            source_kind: source.kind(),
            source_size: source.size_hint(),
            repeatable: source.is_repeatable(),
            lazy_stages: steps.len() - eager_stages,
            eager_stages,
            steps,
        }
    }
}

impl Display for Explanation {
    fn fmt(&self, f: &mut Formatter<'_>) -> FormatResult {
        writeln!(
            f,
            "╔═══════════════════════════════════════════════════════════════╗"
        )?;
        writeln!(
            f,
            "║                  PIPELINE EXPLANATION                         ║"
        )?;
        writeln!(
            f,
            "╚═══════════════════════════════════════════════════════════════╝"
        )?;
        writeln!(f)?;

        writeln!(
            f,
            "┌─ SOURCE ─────────────────────────────────────────────────────┐"
        )?;
        writeln!(f, "│ Kind:              {:>10}", self.source_kind)?;
        writeln!(
            f,
            "│ Size:              {:>10}",
            self.source_size
                .map_or_else(|| "Unknown".to_string(), |s| s.to_string())
        )?;
        writeln!(
            f,
            "│ Repeatable:        {:>10}",
            if self.repeatable { "yes" } else { "no" }
        )?;
        writeln!(f, "│ Lazy Stages:       {:>10}", self.lazy_stages)?;
        writeln!(f, "│ Barrier Stages:    {:>10}", self.eager_stages)?;
        writeln!(
            f,
            "└──────────────────────────────────────────────────────────────┘"
        )?;
        writeln!(f)?;

        writeln!(
            f,
            "┌─ STAGES ─────────────────────────────────────────────────────┐"
        )?;
        if self.steps.is_empty() {
            writeln!(f, "│ (none)")?;
        }
        for step in &self.steps {
            let barrier_marker = if step.is_barrier { " [BARRIER]" } else { "" };
            writeln!(f, "│")?;
            writeln!(f, "│ Step {}: {}{}", step.step, step.name, barrier_marker)?;
            writeln!(f, "│   {}", step.description)?;
        }
        writeln!(f, "│")?;
        writeln!(
            f,
            "└──────────────────────────────────────────────────────────────┘"
        )
    }
}
