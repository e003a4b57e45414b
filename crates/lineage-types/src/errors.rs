//! Error types for lineage curation
//!
//! Only genuine collaborator failures surface as errors. Malformed
//! display labels, unlisted workflows, and protected items are handled
//! in-band as skips and audit events, never as `Err`.

use crate::WfrId;

/// Errors that can occur while fetching or reconciling lineage
#[derive(Debug, thiserror::Error)]
pub enum LineageError {
    #[error("WorkflowRun not found: {0}")]
    WfrNotFound(WfrId),

    #[error("stash is missing {missing} of {expected} WorkflowRun records")]
    StashIncomplete { expected: usize, missing: usize },

    #[error("provenance store error: {0}")]
    Fetch(String),
}

/// Result type alias for lineage operations
pub type LineageResult<T> = Result<T, LineageError>;

/// Failure of a single retirement call
///
/// Carried as data in `ExecutionOutcome`; never aborts the pass.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExecutorError {
    #[error("access denied: {0}")]
    AccessDenied(String),

    #[error("store rejected the status transition: {0}")]
    Rejected(String),

    #[error("store unreachable: {0}")]
    Unreachable(String),
}
