//! Provenance fetching: the collaborator seam and the in-memory stash
//!
//! The engine never talks to a store directly. A [`ProvenanceFetcher`]
//! supplies raw records on demand; a [`Stash`] is a caller-provided
//! snapshot of pre-fetched records that can stand in for live queries.
//! Given identical record content, reconciliation must produce identical
//! decisions from either source.

use lineage_types::{
    Accession, FileRecord, LineageError, LineageResult, RawWfrRecord, WfrId, WorkflowSummary,
};
use std::collections::{HashMap, HashSet};

/// Workflow titles used for the checksum-run fallback search: files with
/// no recorded input runs may still carry an md5 run linked only through
/// the run's own input list.
pub const CHECKSUM_WORKFLOW_TITLES: [&str; 2] = ["md5 0.2.6", "md5 0.0.4"];

/// Read access to the provenance store
pub trait ProvenanceFetcher {
    /// Fetch a single WorkflowRun record
    fn get_wfr(&self, id: &WfrId) -> LineageResult<RawWfrRecord>;

    /// Search WorkflowRuns that took the given file as an input, filtered
    /// to the given workflow display titles
    fn search_wfrs_by_output_file(
        &self,
        accession: &Accession,
        workflow_titles: &[&str],
    ) -> LineageResult<Vec<RawWfrRecord>>;

    /// Rows of the accepted-workflow registry query, feeding catalog
    /// construction
    fn catalog_source(&self) -> LineageResult<Vec<WorkflowSummary>>;
}

/// A pre-fetched snapshot of WorkflowRun records
///
/// Callers that bulk-fetch lineage up front hand the engine a stash so a
/// pass touches the store only for retirements. A stash must cover every
/// run it is asked for; a partial stash is a caller bug surfaced as
/// [`LineageError::StashIncomplete`].
#[derive(Clone, Debug, Default)]
pub struct Stash {
    records: HashMap<WfrId, RawWfrRecord>,
}

impl Stash {
    pub fn new(records: impl IntoIterator<Item = RawWfrRecord>) -> Self {
        Self {
            records: records
                .into_iter()
                .map(|r| (r.uuid.clone(), r))
                .collect(),
        }
    }

    pub fn get(&self, id: &WfrId) -> Option<&RawWfrRecord> {
        self.records.get(id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Resolve all of `ids`, failing if any are missing
    pub fn get_all(&self, ids: &[WfrId]) -> LineageResult<Vec<RawWfrRecord>> {
        let found: Vec<RawWfrRecord> = ids.iter().filter_map(|id| self.get(id).cloned()).collect();
        if found.len() != ids.len() {
            return Err(LineageError::StashIncomplete {
                expected: ids.len(),
                missing: ids.len() - found.len(),
            });
        }
        Ok(found)
    }
}

/// In-memory provenance store double
///
/// Holds WorkflowRun records plus an explicit input-file index for the
/// checksum fallback search. Used in tests and small offline runs.
#[derive(Clone, Debug, Default)]
pub struct InMemoryProvenance {
    wfrs: HashMap<WfrId, RawWfrRecord>,
    /// accession of an input file -> runs that consumed it
    input_index: HashMap<Accession, Vec<WfrId>>,
    catalog_rows: Vec<WorkflowSummary>,
}

impl InMemoryProvenance {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_wfr(&mut self, record: RawWfrRecord) {
        self.wfrs.insert(record.uuid.clone(), record);
    }

    /// Record that the run consumed the given file as an input
    pub fn index_input(&mut self, accession: Accession, wfr_id: WfrId) {
        self.input_index.entry(accession).or_default().push(wfr_id);
    }

    pub fn set_catalog_rows(&mut self, rows: Vec<WorkflowSummary>) {
        self.catalog_rows = rows;
    }
}

impl ProvenanceFetcher for InMemoryProvenance {
    fn get_wfr(&self, id: &WfrId) -> LineageResult<RawWfrRecord> {
        self.wfrs
            .get(id)
            .cloned()
            .ok_or_else(|| LineageError::WfrNotFound(id.clone()))
    }

    fn search_wfrs_by_output_file(
        &self,
        accession: &Accession,
        workflow_titles: &[&str],
    ) -> LineageResult<Vec<RawWfrRecord>> {
        let ids = match self.input_index.get(accession) {
            Some(ids) => ids,
            None => return Ok(Vec::new()),
        };
        Ok(ids
            .iter()
            .filter_map(|id| self.wfrs.get(id))
            .filter(|r| {
                workflow_titles
                    .iter()
                    .any(|title| r.display_title.starts_with(title))
            })
            .cloned()
            .collect())
    }

    fn catalog_source(&self) -> LineageResult<Vec<WorkflowSummary>> {
        Ok(self.catalog_rows.clone())
    }
}

/// All item ids linked to a WorkflowRun: the run itself, its output
/// files, output-level QCs, and its own QC. De-duplicated, first-seen
/// order.
pub fn wfr_associated_ids(wfr: &RawWfrRecord) -> Vec<String> {
    let mut ids = vec![wfr.uuid.0.clone()];
    for output in &wfr.output_files {
        if let Some(file) = &output.value {
            ids.push(file.uuid.clone());
        }
        if let Some(qc) = &output.value_qc {
            ids.push(qc.uuid.clone());
        }
    }
    if let Some(qc) = &wfr.quality_metric {
        ids.push(qc.uuid.clone());
    }
    dedup(ids)
}

/// All item ids in a file's immediate lineage neighborhood: the file, its
/// QC, and everything associated with each run the file went into or came
/// out of. Lets a caller preview a cascade's blast radius before
/// authorizing a pass.
pub fn file_associated_ids<F: ProvenanceFetcher>(
    file: &FileRecord,
    fetcher: &F,
) -> LineageResult<Vec<String>> {
    let mut ids = vec![file.uuid.0.clone()];
    if let Some(qc) = &file.quality_metric {
        ids.push(qc.uuid.clone());
    }
    for link in file
        .workflow_run_inputs
        .iter()
        .chain(file.workflow_run_outputs.iter())
    {
        let wfr = fetcher.get_wfr(&WfrId::new(link.uuid.clone()))?;
        ids.extend(wfr_associated_ids(&wfr));
    }
    Ok(dedup(ids))
}

fn dedup(ids: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    ids.into_iter().filter(|id| seen.insert(id.clone())).collect()
}
