//! Run status and item lifecycle status
//!
//! A WorkflowRun carries two independent states: how the execution itself
//! went (`RunStatus`) and where the record sits in the repository's item
//! lifecycle (`ItemStatus`). Reconciliation consults both.

use serde::{Deserialize, Serialize};

/// Execution state of a WorkflowRun
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunStatus {
    /// Run has been submitted but not yet picked up
    Started,
    /// Run is executing
    Running,
    /// Run finished successfully
    Complete,
    /// Run finished with an error
    Error,
    /// Any other execution state reported by the store
    #[serde(other)]
    Other,
}

impl RunStatus {
    /// Whether the run may still legitimately be in progress
    pub fn is_in_progress(&self) -> bool {
        matches!(self, RunStatus::Started | RunStatus::Running)
    }
}

impl std::fmt::Display for RunStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            RunStatus::Started => "started",
            RunStatus::Running => "running",
            RunStatus::Complete => "complete",
            RunStatus::Error => "error",
            RunStatus::Other => "other",
        };
        write!(f, "{}", s)
    }
}

/// Lifecycle state of a repository item (WFR, File, or QualityMetric)
///
/// Distinct from `RunStatus`: a run may have completed long ago while its
/// record moves through review, release, and archival.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemStatus {
    /// Under review, not yet visible outside the submitting lab
    #[serde(rename = "in review")]
    InReview,
    /// Released to the submitting project only
    #[serde(rename = "released to project")]
    ReleasedToProject,
    /// Publicly released
    #[serde(rename = "released")]
    Released,
    /// Archived: kept for the record, no longer current
    #[serde(rename = "archived")]
    Archived,
    /// Replaced by a newer item
    #[serde(rename = "replaced")]
    Replaced,
    /// Soft-deleted
    #[serde(rename = "deleted")]
    Deleted,
    /// Any other lifecycle state reported by the store
    #[serde(other, rename = "other")]
    Other,
}

impl ItemStatus {
    /// Release states require conservative handling: encountering one
    /// halts the surrounding reconciliation scope.
    pub fn is_released(&self) -> bool {
        matches!(self, ItemStatus::Released | ItemStatus::ReleasedToProject)
    }

    /// Explicitly protected from retirement, but only skips the one record
    pub fn is_archival(&self) -> bool {
        matches!(self, ItemStatus::Archived | ItemStatus::Replaced)
    }
}

impl std::fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ItemStatus::InReview => "in review",
            ItemStatus::ReleasedToProject => "released to project",
            ItemStatus::Released => "released",
            ItemStatus::Archived => "archived",
            ItemStatus::Replaced => "replaced",
            ItemStatus::Deleted => "deleted",
            ItemStatus::Other => "other",
        };
        write!(f, "{}", s)
    }
}
