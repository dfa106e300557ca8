//! Typed search errors.
//!
//! `SearchError` covers only genuine failures. "No path exists" is not an
//! error — it is a legitimate terminal outcome expressed via
//! [`crate::search::SearchOutcome::NotConnected`], so callers can tell
//! "0 degrees" from "unreachable".

/// Typed failure for a search execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The graph provider was asked about a state it cannot resolve.
    /// Propagated to the caller, never treated as "no neighbors".
    UnknownState { detail: String },
    /// `remove` was called on an empty frontier. The search loop checks
    /// emptiness before removing, so this indicates a bug in the driver,
    /// not a data problem.
    EmptyFrontier,
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownState { detail } => {
                write!(f, "unknown state: {detail}")
            }
            Self::EmptyFrontier => {
                write!(f, "remove called on an empty frontier")
            }
        }
    }
}

impl std::error::Error for SearchError {}
