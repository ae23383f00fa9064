//! Error types for relayout-engine

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading a plan or running a relocation
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// One or more of the three required markers never matched.
    ///
    /// Carries the resolution state of all three lookups so callers can
    /// report exactly which ones failed. The end value is the exclusive
    /// block end, matching what a successful location would have produced.
    #[error(
        "could not find blocks: block_start: {start:?}, block_end: {end:?}, insert_anchor: {anchor:?}"
    )]
    MarkersMissing {
        start: Option<usize>,
        end: Option<usize>,
        anchor: Option<usize>,
    },

    /// The insertion anchor sits inside the block that would be removed.
    #[error("insertion anchor at line {anchor} lies inside the block [{start}, {end})")]
    AnchorInsideBlock {
        anchor: usize,
        start: usize,
        end: usize,
    },

    /// The plan failed to parse as TOML.
    #[error("failed to parse plan: {message}")]
    PlanParse { message: String },

    /// The plan parsed but is statically invalid.
    #[error("invalid plan: {reason}")]
    InvalidPlan { reason: String },
}

impl Error {
    pub fn invalid_plan(reason: impl Into<String>) -> Self {
        Self::InvalidPlan {
            reason: reason.into(),
        }
    }
}
