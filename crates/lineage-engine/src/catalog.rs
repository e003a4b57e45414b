//! Workflow catalog: the registry of accepted workflow definitions
//!
//! Built once per reconciliation pass from the registry query and never
//! mutated afterwards. Duplicate rows for the same workflow name union
//! their accepted versions; duplicate run-time budgets resolve with the
//! **max-wins** policy, so a workflow is never given a tighter timeout
//! than any of its registry entries allows.

use crate::ProvenanceFetcher;
use lineage_types::{LineageResult, WorkflowDefinition, WorkflowSummary};
use std::collections::BTreeMap;

/// Registry of accepted workflow definitions, keyed by name
///
/// Iteration order is the name order, which keeps reconciliation output
/// deterministic across passes.
#[derive(Clone, Debug, Default)]
pub struct WorkflowCatalog {
    /// All definitions, keyed by workflow name
    definitions: BTreeMap<String, WorkflowDefinition>,
}

impl WorkflowCatalog {
    /// Create a new empty catalog
    pub fn new() -> Self {
        Self {
            definitions: BTreeMap::new(),
        }
    }

    /// Build a catalog from registry-query rows
    ///
    /// Rows are grouped by `app_name`; every `app_version` seen is
    /// accepted. When rows for one name disagree on `max_runtime`, the
    /// largest value wins (max-wins merge).
    pub fn from_summaries<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = WorkflowSummary>,
    {
        let mut catalog = Self::new();
        for row in rows {
            catalog.merge(row);
        }
        tracing::info!(workflows = catalog.len(), "Workflow catalog built");
        catalog
    }

    /// Build a catalog from the registry query of a provenance store
    pub fn from_fetcher<F: ProvenanceFetcher>(fetcher: &F) -> LineageResult<Self> {
        Ok(Self::from_summaries(fetcher.catalog_source()?))
    }

    /// Merge one registry row into the catalog (max-wins on run time)
    pub fn merge(&mut self, row: WorkflowSummary) {
        let entry = self
            .definitions
            .entry(row.app_name.clone())
            .or_insert_with(|| WorkflowDefinition::new(row.app_name.clone(), row.max_runtime));
        entry.accepted_versions.insert(row.app_version);
        if row.max_runtime > entry.max_run_hours {
            tracing::debug!(
                workflow = %row.app_name,
                old = entry.max_run_hours,
                new = row.max_runtime,
                "Duplicate workflow name with larger run-time budget; max wins"
            );
            entry.max_run_hours = row.max_runtime;
        }
    }

    /// Insert a definition directly (fixtures and manual catalogs)
    pub fn insert(&mut self, definition: WorkflowDefinition) {
        self.definitions.insert(definition.name.clone(), definition);
    }

    /// Look up a definition by workflow name
    pub fn lookup(&self, name: &str) -> Option<&WorkflowDefinition> {
        self.definitions.get(name)
    }

    /// Whether the catalog lists the given workflow name
    pub fn contains(&self, name: &str) -> bool {
        self.definitions.contains_key(name)
    }

    /// Iterate definitions in name order
    pub fn iter(&self) -> impl Iterator<Item = &WorkflowDefinition> {
        self.definitions.values()
    }

    /// Number of listed workflows
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_row(name: &str, version: &str, max_runtime: f64) -> WorkflowSummary {
        WorkflowSummary {
            app_name: name.to_string(),
            app_version: version.to_string(),
            max_runtime,
        }
    }

    #[test]
    fn test_versions_union_across_rows() {
        let catalog = WorkflowCatalog::from_summaries(vec![
            make_row("md5", "0.0.4", 12.0),
            make_row("md5", "0.2.6", 12.0),
        ]);
        let def = catalog.lookup("md5").unwrap();
        assert!(def.accepts("0.0.4"));
        assert!(def.accepts("0.2.6"));
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_max_runtime_wins_on_duplicate_name() {
        // Larger value second
        let catalog = WorkflowCatalog::from_summaries(vec![
            make_row("bwa-mem", "0.2.6", 24.0),
            make_row("bwa-mem", "0.2.7", 48.0),
        ]);
        assert_eq!(catalog.lookup("bwa-mem").unwrap().max_run_hours, 48.0);

        // Larger value first: still kept
        let catalog = WorkflowCatalog::from_summaries(vec![
            make_row("bwa-mem", "0.2.7", 48.0),
            make_row("bwa-mem", "0.2.6", 24.0),
        ]);
        assert_eq!(catalog.lookup("bwa-mem").unwrap().max_run_hours, 48.0);
    }

    #[test]
    fn test_from_fetcher_uses_registry_rows() {
        let mut store = crate::InMemoryProvenance::new();
        store.set_catalog_rows(vec![
            make_row("md5", "0.0.4", 12.0),
            make_row("md5", "0.2.6", 24.0),
        ]);
        let catalog = WorkflowCatalog::from_fetcher(&store).unwrap();
        let def = catalog.lookup("md5").unwrap();
        assert!(def.accepts("0.2.6"));
        assert_eq!(def.max_run_hours, 24.0);
    }

    #[test]
    fn test_lookup_missing() {
        let catalog = WorkflowCatalog::from_summaries(vec![make_row("md5", "0.0.4", 12.0)]);
        assert!(catalog.lookup("bwa-mem").is_none());
        assert!(!catalog.contains("bwa-mem"));
    }

    #[test]
    fn test_iteration_is_name_ordered() {
        let catalog = WorkflowCatalog::from_summaries(vec![
            make_row("md5", "0.0.4", 12.0),
            make_row("bwa-mem", "0.2.6", 48.0),
            make_row("fastqc-0-11-4-1", "0.2.0", 50.0),
        ]);
        let names: Vec<&str> = catalog.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["bwa-mem", "fastqc-0-11-4-1", "md5"]);
    }
}
