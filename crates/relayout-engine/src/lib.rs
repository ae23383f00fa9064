//! Marker-driven block relocation for layout markup files
//!
//! Locates a contiguous block by literal line markers, extracts it, swaps
//! its wrapper, splices it back in at an anchor line, and relabels sibling
//! lines. Everything works on lines and literal patterns; nothing here
//! parses markup structure.

pub mod document;
pub mod engine;
pub mod error;
pub mod locate;
pub mod marker;
pub mod plan;
pub mod position;
pub mod relabel;
pub mod report;
pub mod rewrap;

pub use document::{Document, Newline};
pub use engine::Relocator;
pub use error::{Error, Result};
pub use locate::{BlockRange, LineTag, Located, TagKind};
pub use marker::Matcher;
pub use plan::{RelabelStep, RelocationPlan, WrapperSwap};
pub use position::{Position, PositionMap};
pub use report::{RelocationReport, StepOutcome, StepStatus};
pub use rewrap::WrapperOutcome;
