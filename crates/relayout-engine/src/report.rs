//! Relocation report: per-step outcomes aggregated for the caller

use serde::{Deserialize, Serialize};

/// Status of one optional transformation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepStatus {
    /// The step found its target and applied fully.
    Applied,
    /// The step's pattern never matched; the document is unchanged by it.
    Skipped,
    /// The step applied some but not all of its edits.
    Partial,
}

/// Outcome of one step, with an optional diagnostic note.
///
/// Optional steps never fail the run; what they did (or could not find) is
/// recorded here instead of disappearing into a silent no-op.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepOutcome {
    /// Short human-readable step name.
    pub step: String,
    pub status: StepStatus,
    /// Present for anything other than a clean application.
    pub note: Option<String>,
}

impl StepOutcome {
    pub fn applied(step: impl Into<String>) -> Self {
        Self {
            step: step.into(),
            status: StepStatus::Applied,
            note: None,
        }
    }

    pub fn skipped(step: impl Into<String>, note: impl Into<String>) -> Self {
        Self {
            step: step.into(),
            status: StepStatus::Skipped,
            note: Some(note.into()),
        }
    }

    pub fn partial(step: impl Into<String>, note: impl Into<String>) -> Self {
        Self {
            step: step.into(),
            status: StepStatus::Partial,
            note: Some(note.into()),
        }
    }
}

/// Report from one relocation run.
///
/// Line indices are 0-based and refer to the document state named by the
/// field: `moved_from` to the original document, `moved_to` to the document
/// after removal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelocationReport {
    /// Line index the block started at before the move.
    pub moved_from: usize,
    /// Line index the relocated group was inserted at.
    pub moved_to: usize,
    /// Lines removed from the original position.
    pub lines_removed: usize,
    /// Lines inserted at the new position (lead-in plus rewritten block).
    pub lines_inserted: usize,
    /// Document length before the run.
    pub lines_before: usize,
    /// Document length after the run, relabel deletions included.
    pub lines_after: usize,
    /// Outcome of the wrapper rewrite.
    pub wrapper: StepOutcome,
    /// Outcomes of the sibling relabel steps, in plan order.
    pub relabel: Vec<StepOutcome>,
}

impl RelocationReport {
    /// Net change in document length over the whole run.
    pub fn net_line_change(&self) -> i64 {
        self.lines_after as i64 - self.lines_before as i64
    }

    /// True when the wrapper rewrite and every relabel step applied fully.
    pub fn fully_applied(&self) -> bool {
        self.wrapper.status == StepStatus::Applied
            && self
                .relabel
                .iter()
                .all(|outcome| outcome.status == StepStatus::Applied)
    }
}
