//! Normalized lineage-report entries
//!
//! One `WfrRecord` per surviving raw WorkflowRun record, with the display
//! label decomposed and cascade targets collected. Records are rebuilt on
//! every reconciliation pass; `elapsed_hours` is only meaningful relative
//! to the clock the reporter was given.

use crate::{FileId, ItemStatus, QcId, RunStatus, WfrId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A normalized WorkflowRun entry in a file's lineage report
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WfrRecord {
    /// The run's uuid in the provenance store
    pub wfr_id: WfrId,
    /// Execution state
    pub wfr_status: RunStatus,
    /// Lifecycle state of the record itself
    pub item_status: ItemStatus,
    /// Workflow name, parsed from the display label
    pub name: String,
    /// Workflow revision, parsed from the display label
    pub version: String,
    /// When the run started, parsed from the display label (UTC)
    pub started_at: DateTime<Utc>,
    /// Hours elapsed between `started_at` and the reporter's clock
    pub elapsed_hours: f64,
    /// Files produced by this run
    pub output_file_ids: Vec<FileId>,
    /// QualityMetrics attached to this run or its outputs
    pub qc_ids: Vec<QcId>,
}

impl WfrRecord {
    /// Sort key for the lineage report: ascending by start time, with the
    /// workflow name as a deterministic tie-break. The last record per
    /// name-group under this ordering is the most recent run.
    pub fn sort_key(&self) -> (DateTime<Utc>, &str) {
        (self.started_at, self.name.as_str())
    }
}
