//! Retirement decisions, audit events, and the reconciliation report
//!
//! The engine's entire output is captured here: what to retire, what was
//! skipped or aborted and why, and (when a pass was performed) how each
//! executor call went. Reconciliation deletes data, so every non-obvious
//! outcome produces an event a human can audit later.

use crate::{Accession, FileId, ItemStatus, QcId, WfrId};
use serde::{Deserialize, Serialize};

/// One unit of retirement: a WorkflowRun plus everything cascaded with it
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetirementDecision {
    /// The run to retire
    pub wfr_id: WfrId,
    /// Output files retired alongside the run
    pub cascaded_file_ids: Vec<FileId>,
    /// QualityMetrics retired alongside the run
    pub cascaded_qc_ids: Vec<QcId>,
}

/// How much of a reconciliation pass a protected item halts
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AbortScope {
    /// All remaining candidates for the file (deleted-file mode)
    File,
    /// Remaining candidates of one workflow-name group (normal mode)
    Group,
}

/// What happened to a record that did not become a decision
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ReconcileEventKind {
    /// Workflow name not present in the catalog; visibility only
    UnlistedWorkflow {
        workflow: String,
        wfr_id: Option<WfrId>,
    },
    /// A released item was found where retirement was considered;
    /// processing of the surrounding scope halted
    ProtectedAbort {
        workflow: String,
        wfr_id: WfrId,
        status: ItemStatus,
        scope: AbortScope,
    },
    /// An archived or replaced item was skipped; only that record
    ProtectedSkip {
        workflow: String,
        wfr_id: WfrId,
        status: ItemStatus,
    },
    /// The most recent run is still within its grace period
    StillRunning {
        workflow: String,
        wfr_id: WfrId,
        elapsed_hours: f64,
    },
    /// Processed file with no producing run: user-submitted, not curated
    UserSubmittedSkipped,
}

/// An audit entry tied to the file under reconciliation
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReconcileEvent {
    /// Accession of the file being reconciled
    pub file: Accession,
    /// What happened
    pub kind: ReconcileEventKind,
}

impl ReconcileEvent {
    pub fn new(file: Accession, kind: ReconcileEventKind) -> Self {
        Self { file, kind }
    }
}

/// A retired (or retirement-attempted) item
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RetiredItem {
    Wfr(WfrId),
    File(FileId),
    Qc(QcId),
}

impl std::fmt::Display for RetiredItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RetiredItem::Wfr(id) => write!(f, "{}", id),
            RetiredItem::File(id) => write!(f, "{}", id),
            RetiredItem::Qc(id) => write!(f, "{}", id),
        }
    }
}

/// Outcome of a single executor call
///
/// Failures are data, never errors: one denied retirement must not block
/// the sibling calls of the same decision.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionOutcome {
    /// The item a retirement was attempted for
    pub item: RetiredItem,
    /// Error message when the call failed; `None` on success
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ExecutionOutcome {
    pub fn ok(item: RetiredItem) -> Self {
        Self { item, error: None }
    }

    pub fn failed(item: RetiredItem, error: impl Into<String>) -> Self {
        Self {
            item,
            error: Some(error.into()),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// The full result of one reconciliation pass over one file
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReconcileReport {
    /// Accession of the reconciled file
    pub file: Accession,
    /// Retirement decisions, in evaluation order
    pub decisions: Vec<RetirementDecision>,
    /// QualityMetric attached directly to a deleted file, retired with it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_qc: Option<QcId>,
    /// Audit events for every skip, abort, and unlisted workflow
    pub events: Vec<ReconcileEvent>,
    /// Per-item executor outcomes; empty in dry-run
    pub outcomes: Vec<ExecutionOutcome>,
    /// Whether executor calls were authorized for this pass
    pub performed: bool,
}

impl ReconcileReport {
    pub fn new(file: Accession) -> Self {
        Self {
            file,
            decisions: Vec::new(),
            file_qc: None,
            events: Vec::new(),
            outcomes: Vec::new(),
            performed: false,
        }
    }

    /// Every item id the pass decided to retire, runs first, then
    /// cascaded files, then quality metrics
    pub fn retired_items(&self) -> Vec<RetiredItem> {
        let mut items = Vec::new();
        for d in &self.decisions {
            items.push(RetiredItem::Wfr(d.wfr_id.clone()));
        }
        for d in &self.decisions {
            items.extend(d.cascaded_file_ids.iter().cloned().map(RetiredItem::File));
        }
        if let Some(qc) = &self.file_qc {
            items.push(RetiredItem::Qc(qc.clone()));
        }
        for d in &self.decisions {
            items.extend(d.cascaded_qc_ids.iter().cloned().map(RetiredItem::Qc));
        }
        items
    }

    /// Whether a released item halted part of this pass
    pub fn was_aborted(&self) -> bool {
        self.events
            .iter()
            .any(|e| matches!(e.kind, ReconcileEventKind::ProtectedAbort { .. }))
    }
}
