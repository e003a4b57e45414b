//! Catalog entries: accepted workflow definitions
//!
//! A `WorkflowDefinition` records which revisions of a workflow are still
//! accepted and how long a run of it may take. Entries are immutable at
//! reconciliation time; the registry that builds them lives in
//! `lineage-engine`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// An accepted-workflow catalog entry
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WorkflowDefinition {
    /// Workflow application name, unique within the catalog
    pub name: String,
    /// Revision identifiers still accepted for this workflow
    pub accepted_versions: BTreeSet<String>,
    /// Longest acceptable run duration, in hours. A run in progress past
    /// this budget is considered stuck.
    pub max_run_hours: f64,
}

impl WorkflowDefinition {
    pub fn new(name: impl Into<String>, max_run_hours: f64) -> Self {
        Self {
            name: name.into(),
            accepted_versions: BTreeSet::new(),
            max_run_hours,
        }
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.accepted_versions.insert(version.into());
        self
    }

    /// Whether the given revision is still accepted
    pub fn accepts(&self, version: &str) -> bool {
        self.accepted_versions.contains(version)
    }

    /// Whether an in-progress run that has been going for `elapsed_hours`
    /// is still within its grace period. The boundary is exclusive: a run
    /// at exactly the budget is already stuck.
    pub fn within_grace(&self, elapsed_hours: f64) -> bool {
        elapsed_hours < self.max_run_hours
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts() {
        let def = WorkflowDefinition::new("md5", 12.0)
            .with_version("0.0.4")
            .with_version("0.2.6");
        assert!(def.accepts("0.0.4"));
        assert!(def.accepts("0.2.6"));
        assert!(!def.accepts("0.2.5"));
    }

    #[test]
    fn test_grace_boundary_is_exclusive() {
        let def = WorkflowDefinition::new("fastqc-0-11-4-1", 50.0);
        assert!(def.within_grace(49.999));
        assert!(!def.within_grace(50.0));
        assert!(!def.within_grace(51.0));
    }
}
