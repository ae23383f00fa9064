//! Sibling relabeling after the block has moved

use crate::document::Document;
use crate::locate;
use crate::marker::Matcher;
use crate::plan::RelabelStep;
use crate::report::StepOutcome;

/// Run every relabel step in plan order, each scanning forward from `from`.
///
/// Steps are independent: each starts its own scan at `from` and sees the
/// document as the previous step left it. A step whose pattern never matches
/// is recorded as skipped, never raised as an error.
pub fn relabel_siblings(
    doc: &mut Document,
    steps: &[RelabelStep],
    from: usize,
) -> Vec<StepOutcome> {
    steps
        .iter()
        .map(|step| {
            let outcome = apply_step(doc, step, from);
            tracing::debug!(step = %outcome.step, status = ?outcome.status, "relabel step done");
            outcome
        })
        .collect()
}

/// Apply a single relabel step, scanning forward from `from`.
pub fn apply_step(doc: &mut Document, step: &RelabelStep, from: usize) -> StepOutcome {
    let name = step.describe();
    match step {
        RelabelStep::Substitute {
            find,
            from: token,
            to,
        } => {
            let matcher = find
                .clone()
                .unwrap_or_else(|| Matcher::Contains(token.clone()));
            let Some(at) = locate::find_from(doc.lines(), &matcher, from) else {
                return StepOutcome::skipped(name, "no line matched");
            };
            let Some(line) = doc.line(at) else {
                return StepOutcome::skipped(name, "no line matched");
            };
            if !line.contains(token.as_str()) {
                return StepOutcome::skipped(
                    name,
                    format!("line {at} matched but does not contain '{token}'"),
                );
            }
            let replaced = line.replacen(token.as_str(), to, 1);
            doc.replace_line(at, replaced);
            StepOutcome::applied(name)
        }
        RelabelStep::StripWrapper { label, open, close } => {
            let Some(at) = locate::find_from(doc.lines(), label, from) else {
                return StepOutcome::skipped(name, "label line not found");
            };
            match doc.line(at + 1) {
                Some(next) if open.matches(next) => {}
                _ => {
                    return StepOutcome::skipped(
                        name,
                        "line after the label does not match the wrapper open",
                    );
                }
            }
            doc.remove_line(at + 1);
            // Close is sought on the already-mutated document, past the label.
            let Some(close_at) = locate::find_from(doc.lines(), close, at + 1) else {
                return StepOutcome::partial(name, "wrapper open removed but close not found");
            };
            doc.remove_line(close_at);
            StepOutcome::applied(name)
        }
    }
}
