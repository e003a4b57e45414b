//! Retirement execution: the side-effecting collaborator seam
//!
//! Retirement is a soft delete: the store sets `status = deleted` on the
//! item (plus a descriptive annotation on the run itself). The engine
//! only decides; an executor acts, and only when a pass is explicitly
//! authorized. Each call is an independent, idempotent transition —
//! partial failure of one never blocks the others.

use lineage_types::{ExecutorError, FileId, QcId, WfrId};
use std::collections::HashSet;

/// Performs the status transitions the engine decides on
pub trait RetirementExecutor {
    /// Mark a WorkflowRun deleted (with a descriptive annotation)
    fn retire_wfr(&mut self, id: &WfrId) -> Result<(), ExecutorError>;

    /// Mark a File deleted
    fn retire_file(&mut self, id: &FileId) -> Result<(), ExecutorError>;

    /// Mark a QualityMetric deleted
    fn retire_qc(&mut self, id: &QcId) -> Result<(), ExecutorError>;
}

/// In-memory executor that records what it was asked to retire
///
/// Ids listed in `deny` fail with `AccessDenied`, which lets tests
/// exercise partial-failure reporting.
#[derive(Clone, Debug, Default)]
pub struct InMemoryExecutor {
    /// WorkflowRuns retired, in call order
    pub retired_wfrs: Vec<WfrId>,
    /// Files retired, in call order
    pub retired_files: Vec<FileId>,
    /// QualityMetrics retired, in call order
    pub retired_qcs: Vec<QcId>,
    /// Raw ids whose retirement is denied
    pub deny: HashSet<String>,
}

impl InMemoryExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn deny(mut self, id: impl Into<String>) -> Self {
        self.deny.insert(id.into());
        self
    }

    fn check(&self, id: &str) -> Result<(), ExecutorError> {
        if self.deny.contains(id) {
            Err(ExecutorError::AccessDenied(id.to_string()))
        } else {
            Ok(())
        }
    }

    /// Total number of items retired
    pub fn retired_count(&self) -> usize {
        self.retired_wfrs.len() + self.retired_files.len() + self.retired_qcs.len()
    }
}

impl RetirementExecutor for InMemoryExecutor {
    fn retire_wfr(&mut self, id: &WfrId) -> Result<(), ExecutorError> {
        self.check(&id.0)?;
        self.retired_wfrs.push(id.clone());
        Ok(())
    }

    fn retire_file(&mut self, id: &FileId) -> Result<(), ExecutorError> {
        self.check(&id.0)?;
        self.retired_files.push(id.clone());
        Ok(())
    }

    fn retire_qc(&mut self, id: &QcId) -> Result<(), ExecutorError> {
        self.check(&id.0)?;
        self.retired_qcs.push(id.clone());
        Ok(())
    }
}
