//! Raw record shapes returned by the provenance store
//!
//! These mirror the portal's embedded JSON frames closely enough to
//! deserialize straight from a search or item response. Anything the
//! engine does not consult is simply not modeled.

use crate::{Accession, FileId, ItemStatus, QcId, RunStatus, WfrId};
use serde::{Deserialize, Serialize};

/// A linked-item sub-reference (`{"uuid": "..."}` in embedded frames)
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRef {
    /// The linked item's uuid
    pub uuid: String,
}

impl ItemRef {
    pub fn new(uuid: impl Into<String>) -> Self {
        Self { uuid: uuid.into() }
    }
}

/// One entry of a WorkflowRun's `output_files` list
///
/// An output slot may reference a produced File, an attached
/// QualityMetric, or both.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputEntry {
    /// Produced File, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<ItemRef>,
    /// Attached QualityMetric, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_qc: Option<ItemRef>,
}

/// A WorkflowRun record as fetched from the provenance store
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RawWfrRecord {
    /// Store-assigned uuid
    pub uuid: WfrId,
    /// Resource path, e.g. `/workflow-runs-awsem/<uuid>/`
    #[serde(rename = "@id")]
    pub at_id: String,
    /// Display label: `<name> <version> run on <timestamp>`
    pub display_title: String,
    /// Execution state of the run
    pub run_status: RunStatus,
    /// Lifecycle state of the record
    pub status: ItemStatus,
    /// Output slots (files and/or quality metrics)
    #[serde(default)]
    pub output_files: Vec<OutputEntry>,
    /// QualityMetric attached directly to the run
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quality_metric: Option<ItemRef>,
}

impl RawWfrRecord {
    /// Legacy runs from the retired SBG execution platform
    pub fn is_legacy_platform(&self) -> bool {
        self.at_id.starts_with("/workflow-runs-sbg/")
    }

    /// Internal bookkeeping runs that track provenance rather than
    /// produce data
    pub fn is_provenance_tracking(&self) -> bool {
        self.display_title.starts_with("File Provenance Tracking")
    }
}

/// A File record as fetched from the provenance store (embedded frame)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FileRecord {
    /// Store-assigned uuid
    pub uuid: FileId,
    /// Resource path, e.g. `/files-processed/<accession>/`
    #[serde(rename = "@id")]
    pub at_id: String,
    /// Human-facing accession
    pub accession: Accession,
    /// Lifecycle state of the file
    pub status: ItemStatus,
    /// QualityMetric attached directly to the file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quality_metric: Option<ItemRef>,
    /// WorkflowRuns this file went into as an input
    #[serde(default)]
    pub workflow_run_inputs: Vec<ItemRef>,
    /// WorkflowRuns that produced this file
    #[serde(default)]
    pub workflow_run_outputs: Vec<ItemRef>,
}

impl FileRecord {
    /// The collection segment of the resource path
    /// (`/files-processed/ACC/` yields `files-processed`)
    pub fn collection(&self) -> &str {
        self.at_id.trim_start_matches('/').split('/').next().unwrap_or("")
    }

    /// Processed files with no producing run were submitted directly by a
    /// user; their lineage is not ours to curate.
    pub fn is_user_submitted_processed(&self) -> bool {
        self.workflow_run_outputs.is_empty() && self.collection() == "files-processed"
    }

    /// QualityMetric id directly attached to the file, if any
    pub fn quality_metric_id(&self) -> Option<QcId> {
        self.quality_metric.as_ref().map(|r| QcId::new(r.uuid.clone()))
    }
}

/// One row of the workflow-registry query that feeds catalog construction
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WorkflowSummary {
    /// Workflow application name (catalog key)
    pub app_name: String,
    /// One accepted revision identifier
    pub app_version: String,
    /// Longest acceptable run duration, in hours
    #[serde(default)]
    pub max_runtime: f64,
}
