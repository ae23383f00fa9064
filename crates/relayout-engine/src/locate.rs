//! Block location: the line-tagging pass, ranges, and the lookahead floor

use std::ops::Range;

use crate::document::Document;
use crate::error::{Error, Result};
use crate::marker::Matcher;
use crate::plan::RelocationPlan;

/// Which marker a tag records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    BlockStart,
    BlockEnd,
    InsertAnchor,
}

/// A classified line: which marker matched and where.
///
/// The tag list is the explicit output of the scan phase; everything later
/// phases know about the document's geometry derives from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineTag {
    pub kind: TagKind,
    pub index: usize,
}

/// A contiguous block as a half-open line range `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockRange {
    pub start: usize,
    pub end: usize,
}

impl BlockRange {
    /// `end` must be greater than `start`; location always produces ranges
    /// of at least two lines (start line plus a close beyond the floor).
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(end > start);
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    pub fn contains(&self, index: usize) -> bool {
        self.start <= index && index < self.end
    }

    pub fn as_range(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Fully resolved relocation coordinates, valid for the unmutated document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Located {
    pub block: BlockRange,
    pub anchor: usize,
}

/// First line at or after `from` matching `matcher`.
pub fn find_from(lines: &[String], matcher: &Matcher, from: usize) -> Option<usize> {
    lines
        .iter()
        .enumerate()
        .skip(from)
        .find(|(_, line)| matcher.matches(line))
        .map(|(index, _)| index)
}

/// Classify the document's lines against the plan's markers.
///
/// Produces at most one tag per kind, first match wins. The block end is
/// only sought strictly beyond `start + lookahead_floor` (and not at all
/// when the start is missing); the insertion anchor is scanned independently
/// from the top of the document.
pub fn tag_lines(doc: &Document, plan: &RelocationPlan) -> Vec<LineTag> {
    let lines = doc.lines();
    let mut tags = Vec::with_capacity(3);

    if let Some(index) = find_from(lines, &plan.block_start, 0) {
        tags.push(LineTag {
            kind: TagKind::BlockStart,
            index,
        });
        let horizon = index.saturating_add(plan.lookahead_floor).saturating_add(1);
        if let Some(index) = find_from(lines, &plan.block_end, horizon) {
            tags.push(LineTag {
                kind: TagKind::BlockEnd,
                index,
            });
        }
    }
    if let Some(index) = find_from(lines, &plan.anchor, 0) {
        tags.push(LineTag {
            kind: TagKind::InsertAnchor,
            index,
        });
    }

    tags
}

/// Resolve the plan's markers into relocation coordinates.
///
/// Any missing marker is fatal for the whole operation; so is an anchor
/// inside the block about to be removed. Both checks run before any
/// mutation, which is what keeps a failed run side-effect free.
pub fn locate(doc: &Document, plan: &RelocationPlan) -> Result<Located> {
    let tags = tag_lines(doc, plan);
    let start = tag_index(&tags, TagKind::BlockStart);
    let close = tag_index(&tags, TagKind::BlockEnd);
    let anchor = tag_index(&tags, TagKind::InsertAnchor);

    tracing::debug!(?start, ?close, ?anchor, "marker scan finished");

    let (Some(start), Some(close), Some(anchor)) = (start, close, anchor) else {
        return Err(Error::MarkersMissing {
            start,
            end: close.map(|index| index + 1),
            anchor,
        });
    };

    let block = BlockRange::new(start, close + 1);
    if block.contains(anchor) {
        return Err(Error::AnchorInsideBlock {
            anchor,
            start: block.start,
            end: block.end,
        });
    }

    Ok(Located { block, anchor })
}

fn tag_index(tags: &[LineTag], kind: TagKind) -> Option<usize> {
    tags.iter().find(|tag| tag.kind == kind).map(|tag| tag.index)
}
