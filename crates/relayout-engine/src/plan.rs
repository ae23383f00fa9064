//! Declarative relocation plans

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::marker::Matcher;

/// Everything one relocation needs: which block to move, where to put it,
/// how to rewrap it, and which siblings to relabel afterwards.
///
/// Plans are plain data, loadable from TOML. All patterns are literal
/// [`Matcher`]s; the plan never describes markup structure, only text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelocationPlan {
    /// Matches the block's first line.
    pub block_start: Matcher,
    /// Matches the block's closing line. Only consulted strictly beyond
    /// `block_start + lookahead_floor`, so a close that sits too near the
    /// start can never terminate the block.
    pub block_end: Matcher,
    /// Minimum line distance between the start line and a close candidate.
    #[serde(default)]
    pub lookahead_floor: usize,
    /// Matches the line the relocated group is inserted before. Scanned
    /// independently of the block markers; it may sit before or after the
    /// block.
    pub anchor: Matcher,
    /// Lines inserted ahead of the rewritten block: typically a spacer, a
    /// section-comment header, and the replacement wrapper's open line.
    #[serde(default)]
    pub lead_in: Vec<String>,
    /// Wrapper strip/append applied to the extracted block.
    pub wrapper: WrapperSwap,
    /// Sibling relabel steps, run in order from the insertion point.
    #[serde(default)]
    pub relabel: Vec<RelabelStep>,
}

impl RelocationPlan {
    /// Parse and validate a TOML plan.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let plan: Self = toml::from_str(text).map_err(|e| Error::PlanParse {
            message: e.to_string(),
        })?;
        plan.validate()?;
        Ok(plan)
    }

    /// Reject plans with patterns that could never locate anything useful.
    pub fn validate(&self) -> Result<()> {
        for (name, matcher) in [
            ("block_start", &self.block_start),
            ("block_end", &self.block_end),
            ("anchor", &self.anchor),
            ("wrapper.strip_open", &self.wrapper.strip_open),
            ("wrapper.strip_close", &self.wrapper.strip_close),
        ] {
            if matcher.is_empty() {
                return Err(Error::invalid_plan(format!("{name} pattern is empty")));
            }
        }
        for (index, step) in self.relabel.iter().enumerate() {
            step.validate()
                .map_err(|e| Error::invalid_plan(format!("relabel step {index}: {e}")))?;
        }
        Ok(())
    }
}

/// Wrapper substitution applied to the extracted block: one open line
/// stripped by pattern, its close stripped by the next match, and fixed
/// replacement lines appended.
///
/// The close pattern is typically `Exact` with the indentation spelled out.
/// That relies on the document's indentation being stable, which the engine
/// never verifies; a close at another depth is simply not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WrapperSwap {
    /// Matches the wrapper's open line inside the block (expected at most
    /// once).
    pub strip_open: Matcher,
    /// Matches the wrapper's close line; armed only after the open matched.
    pub strip_close: Matcher,
    /// Lines appended after the block content: the replacement close and,
    /// typically, a trailing blank.
    #[serde(default)]
    pub append: Vec<String>,
}

/// One sibling relabel step, scanned forward from the insertion point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RelabelStep {
    /// In the first line matching `find`, replace the first occurrence of
    /// `from` with `to`. When `find` is absent, the first line containing
    /// `from` is targeted.
    Substitute {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        find: Option<Matcher>,
        from: String,
        to: String,
    },
    /// Locate the first line matching `label`; if the immediately following
    /// line matches `open`, delete it, then delete the next line matching
    /// `close`. The close is only sought after the open was deleted.
    StripWrapper {
        label: Matcher,
        open: Matcher,
        close: Matcher,
    },
}

impl RelabelStep {
    fn validate(&self) -> Result<()> {
        match self {
            Self::Substitute { find, from, .. } => {
                if from.is_empty() {
                    return Err(Error::invalid_plan("substitute token is empty"));
                }
                if let Some(find) = find
                    && find.is_empty()
                {
                    return Err(Error::invalid_plan("substitute find pattern is empty"));
                }
            }
            Self::StripWrapper { label, open, close } => {
                for (name, matcher) in [("label", label), ("open", open), ("close", close)] {
                    if matcher.is_empty() {
                        return Err(Error::invalid_plan(format!("{name} pattern is empty")));
                    }
                }
            }
        }
        Ok(())
    }

    /// Short human-readable name used in reports.
    pub fn describe(&self) -> String {
        match self {
            Self::Substitute { from, to, .. } => format!("substitute '{from}' -> '{to}'"),
            Self::StripWrapper { label, .. } => {
                format!("strip wrapper after '{}'", label.pattern())
            }
        }
    }
}
