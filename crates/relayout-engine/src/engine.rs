//! Relocation driver running the sequential phases

use crate::document::Document;
use crate::error::{Error, Result};
use crate::locate;
use crate::plan::RelocationPlan;
use crate::position::PositionMap;
use crate::relabel;
use crate::report::RelocationReport;
use crate::rewrap;

/// Logical name of the insertion anchor in the position map.
const ANCHOR: &str = "insert-anchor";

/// Runs a relocation plan against documents.
///
/// One plan, any number of documents; each run is a single sequential pass
/// of locate, extract, rewrap, splice, relabel. The document is mutated in
/// place only after location succeeded, so an `Err` always leaves it
/// untouched.
#[derive(Debug, Clone)]
pub struct Relocator {
    plan: RelocationPlan,
}

impl Relocator {
    /// Build a relocator, rejecting statically invalid plans.
    pub fn new(plan: RelocationPlan) -> Result<Self> {
        plan.validate()?;
        Ok(Self { plan })
    }

    pub fn plan(&self) -> &RelocationPlan {
        &self.plan
    }

    /// Relocate the block described by the plan.
    ///
    /// After extraction every original line index is stale; the insertion
    /// point is re-read from a position map that replayed the removal
    /// instead of being adjusted by hand, and the relabel scans run against
    /// the spliced document from the insertion line onward.
    pub fn run(&self, doc: &mut Document) -> Result<RelocationReport> {
        let lines_before = doc.len();
        let located = locate::locate(doc, &self.plan)?;
        let block = located.block;
        tracing::info!(
            start = block.start,
            end = block.end,
            anchor = located.anchor,
            "relocating block"
        );

        let mut positions = PositionMap::new();
        positions.track(ANCHOR, located.anchor);

        let extracted = doc.remove_range(block.as_range());
        positions.apply_removal(&block);

        let (rewritten, wrapper) = rewrap::rewrite_wrapper(extracted, &self.plan.wrapper);

        // locate() rejected anchors inside the block, so the anchor survives
        // the removal.
        let insert_at = positions
            .index_of(ANCHOR)
            .ok_or_else(|| Error::AnchorInsideBlock {
                anchor: located.anchor,
                start: block.start,
                end: block.end,
            })?;

        let mut group = self.plan.lead_in.clone();
        group.extend(rewritten);
        let lines_inserted = group.len();
        doc.insert_at(insert_at, group);
        positions.apply_insertion(insert_at, lines_inserted);

        let relabel = relabel::relabel_siblings(doc, &self.plan.relabel, insert_at);

        let report = RelocationReport {
            moved_from: block.start,
            moved_to: insert_at,
            lines_removed: block.len(),
            lines_inserted,
            lines_before,
            lines_after: doc.len(),
            wrapper: wrapper.into_outcome(&self.plan.wrapper),
            relabel,
        };
        tracing::info!(
            moved_from = report.moved_from,
            moved_to = report.moved_to,
            net = report.net_line_change(),
            "relocation finished"
        );
        Ok(report)
    }
}
