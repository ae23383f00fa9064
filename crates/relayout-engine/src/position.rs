//! Logical position tracking across structural mutations

use std::collections::BTreeMap;

use crate::locate::BlockRange;

/// Current state of a tracked position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    /// The line currently sits at this index.
    At(usize),
    /// The line was deleted by a structural edit.
    Removed,
}

/// Named line positions, recomputed after every structural mutation.
///
/// Each phase registers the positions it cares about and replays the
/// document's mutations here; queries then always see indices valid for the
/// current document state. Nothing ever reuses an index captured before a
/// mutation.
#[derive(Debug, Clone, Default)]
pub struct PositionMap {
    entries: BTreeMap<String, Position>,
}

impl PositionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Track `name` at `index` in the current document state.
    pub fn track(&mut self, name: impl Into<String>, index: usize) {
        self.entries.insert(name.into(), Position::At(index));
    }

    /// State of a tracked position; `None` if it was never tracked.
    pub fn get(&self, name: &str) -> Option<Position> {
        self.entries.get(name).copied()
    }

    /// Current index of a position that still exists in the document.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        match self.get(name) {
            Some(Position::At(index)) => Some(index),
            _ => None,
        }
    }

    /// Replay the removal of `range`: interior positions become
    /// [`Position::Removed`], positions at or past the old end shift down by
    /// the removed length, earlier positions are untouched.
    pub fn apply_removal(&mut self, range: &BlockRange) {
        let len = range.len();
        for position in self.entries.values_mut() {
            if let Position::At(index) = *position {
                if range.contains(index) {
                    *position = Position::Removed;
                } else if index >= range.end {
                    *position = Position::At(index - len);
                }
            }
        }
    }

    /// Replay an insertion of `count` lines before `at`: positions at or
    /// past `at` shift up.
    pub fn apply_insertion(&mut self, at: usize, count: usize) {
        for position in self.entries.values_mut() {
            if let Position::At(index) = *position
                && index >= at
            {
                *position = Position::At(index + count);
            }
        }
    }
}
