//! Wrapper rewriting for extracted blocks

use crate::plan::WrapperSwap;
use crate::report::{StepOutcome, StepStatus};

/// What the wrapper pass did to the block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WrapperOutcome {
    pub open_stripped: bool,
    pub close_stripped: bool,
}

impl WrapperOutcome {
    /// Fold into a reportable step outcome.
    ///
    /// An absent open means the appended close has no matching open in the
    /// output; the engine does not correct this, it only reports it.
    pub fn into_outcome(self, swap: &WrapperSwap) -> StepOutcome {
        let step = format!("rewrap '{}'", swap.strip_open.pattern());
        match (self.open_stripped, self.close_stripped) {
            (true, true) => StepOutcome::applied(step),
            (true, false) => {
                StepOutcome::partial(step, "wrapper open stripped but close never matched")
            }
            (false, _) => StepOutcome::skipped(
                step,
                "wrapper open not found; appended close is unmatched",
            ),
        }
    }

    pub fn status(self) -> StepStatus {
        match (self.open_stripped, self.close_stripped) {
            (true, true) => StepStatus::Applied,
            (true, false) => StepStatus::Partial,
            (false, _) => StepStatus::Skipped,
        }
    }
}

/// Strip the configured wrapper from `block` and append the replacement
/// lines.
///
/// Single pass: the first line matching `strip_open` is dropped and arms a
/// pending-close flag; while armed, the next line matching `strip_close` is
/// dropped and disarms it. Everything else passes through in order. The
/// close match is typically exact with fixed indentation, so a close at a
/// different depth leaves the flag armed until a later exact match, nested
/// content included. The `append` lines always follow, even when no open was
/// found.
pub fn rewrite_wrapper(block: Vec<String>, swap: &WrapperSwap) -> (Vec<String>, WrapperOutcome) {
    let mut kept = Vec::with_capacity(block.len() + swap.append.len());
    let mut outcome = WrapperOutcome {
        open_stripped: false,
        close_stripped: false,
    };
    let mut pending_close = false;

    for line in block {
        if !outcome.open_stripped && swap.strip_open.matches(&line) {
            outcome.open_stripped = true;
            pending_close = true;
            continue;
        }
        if pending_close && swap.strip_close.matches(&line) {
            outcome.close_stripped = true;
            pending_close = false;
            continue;
        }
        kept.push(line);
    }

    kept.extend(swap.append.iter().cloned());
    (kept, outcome)
}
