//! Reconciliation engine: decides which WorkflowRuns retire
//!
//! Two modes, keyed off the file's own lifecycle state:
//!
//! - **Deleted file**: every non-deleted run in the lineage is a
//!   retirement candidate, and the file's own QualityMetric cascades.
//!   A released item anywhere halts the whole file.
//! - **Live file**: runs are grouped by workflow name; the most recent
//!   run per group stays active unless it completed on a rejected
//!   version or overran its grace period. A released item halts only
//!   the current group.
//!
//! The file-level versus group-level abort asymmetry is deliberate and
//! must not be unified. Protected lifecycle states always win over
//! staleness; see the events on [`ReconcileReport`] for the audit trail.

use crate::{
    reporter, ProvenanceFetcher, RetirementExecutor, Stash, WorkflowCatalog,
    CHECKSUM_WORKFLOW_TITLES,
};
use chrono::{DateTime, Utc};
use lineage_types::{
    AbortScope, ExecutionOutcome, ExecutorError, FileRecord, ItemStatus, LineageResult,
    RawWfrRecord, ReconcileEvent, ReconcileEventKind, ReconcileReport, RetiredItem,
    RetirementDecision, RunStatus, WfrId, WfrRecord,
};
use std::collections::HashSet;

/// The reconciliation engine
///
/// Stateless across invocations: one pass is a pure function of the
/// file, its lineage snapshot, the catalog, and the clock, plus the side
/// effects explicitly authorized via `perform`.
#[derive(Clone, Debug)]
pub struct Reconciler<'c> {
    catalog: &'c WorkflowCatalog,
}

impl<'c> Reconciler<'c> {
    pub fn new(catalog: &'c WorkflowCatalog) -> Self {
        Self { catalog }
    }

    /// Reconcile one file against the current wall clock
    ///
    /// With `perform = false` (the safe default for callers) the report
    /// only describes what would be retired. With `perform = true` every
    /// decision is handed to the executor and per-item outcomes are
    /// recorded on the report.
    pub fn reconcile<F, E>(
        &self,
        file: &FileRecord,
        fetcher: &F,
        stash: Option<&Stash>,
        executor: &mut E,
        perform: bool,
    ) -> LineageResult<ReconcileReport>
    where
        F: ProvenanceFetcher,
        E: RetirementExecutor,
    {
        self.reconcile_at(file, fetcher, stash, executor, perform, Utc::now())
    }

    /// Reconcile against an injected clock; the seam tests freeze
    pub fn reconcile_at<F, E>(
        &self,
        file: &FileRecord,
        fetcher: &F,
        stash: Option<&Stash>,
        executor: &mut E,
        perform: bool,
        now: DateTime<Utc>,
    ) -> LineageResult<ReconcileReport>
    where
        F: ProvenanceFetcher,
        E: RetirementExecutor,
    {
        let mut report = ReconcileReport::new(file.accession.clone());

        if file.is_user_submitted_processed() {
            tracing::info!(
                file = %file.accession,
                "User-submitted processed file; lineage not curated"
            );
            report.events.push(ReconcileEvent::new(
                file.accession.clone(),
                ReconcileEventKind::UserSubmittedSkipped,
            ));
            return Ok(report);
        }

        let raw = self.gather(file, fetcher, stash)?;
        let lineage = reporter::normalize(&raw, now);

        if file.status == ItemStatus::Deleted {
            self.plan_deleted_file(file, &lineage, &mut report);
        } else {
            self.plan_live_file(file, &lineage, &mut report);
        }

        if perform {
            report.performed = true;
            self.execute(&mut report, executor);
        }

        Ok(report)
    }

    /// Collect the raw WorkflowRun records around the file
    ///
    /// Runs come from `workflow_run_inputs`, resolved from the stash when
    /// one was supplied. Files with no recorded input runs fall back to a
    /// checksum-run search, except fastq and processed files where no
    /// such runs exist. Legacy-platform and provenance-tracking records
    /// are dropped before normalization.
    fn gather<F: ProvenanceFetcher>(
        &self,
        file: &FileRecord,
        fetcher: &F,
        stash: Option<&Stash>,
    ) -> LineageResult<Vec<RawWfrRecord>> {
        let ids: Vec<WfrId> = file
            .workflow_run_inputs
            .iter()
            .map(|r| WfrId::new(r.uuid.clone()))
            .collect();

        let mut records = if !ids.is_empty() {
            match stash {
                Some(stash) => stash.get_all(&ids)?,
                None => ids
                    .iter()
                    .map(|id| fetcher.get_wfr(id))
                    .collect::<LineageResult<Vec<_>>>()?,
            }
        } else if !matches!(file.collection(), "files-fastq" | "files-processed") {
            fetcher.search_wfrs_by_output_file(&file.accession, &CHECKSUM_WORKFLOW_TITLES)?
        } else {
            Vec::new()
        };

        records.retain(|r| !r.is_legacy_platform() && !r.is_provenance_tracking());
        Ok(records)
    }

    /// Deleted file: all non-deleted runs are candidates; released items
    /// abort the whole file
    fn plan_deleted_file(
        &self,
        file: &FileRecord,
        lineage: &[WfrRecord],
        report: &mut ReconcileReport,
    ) {
        report.file_qc = file.quality_metric_id();

        for rec in lineage {
            if rec.item_status == ItemStatus::Deleted {
                continue;
            }
            if !self.catalog.contains(&rec.name) {
                tracing::warn!(
                    workflow = %rec.name,
                    wfr = %rec.wfr_id,
                    file = %file.accession,
                    "Unlisted workflow in deleted file's lineage"
                );
                report.events.push(ReconcileEvent::new(
                    file.accession.clone(),
                    ReconcileEventKind::UnlistedWorkflow {
                        workflow: rec.name.clone(),
                        wfr_id: Some(rec.wfr_id.clone()),
                    },
                ));
                // Visibility only; still a candidate
            }
            if rec.item_status.is_released() {
                tracing::warn!(
                    workflow = %rec.name,
                    wfr = %rec.wfr_id,
                    file = %file.accession,
                    status = %rec.item_status,
                    "Released item in deleted file's lineage; halting the file"
                );
                report.events.push(ReconcileEvent::new(
                    file.accession.clone(),
                    ReconcileEventKind::ProtectedAbort {
                        workflow: rec.name.clone(),
                        wfr_id: rec.wfr_id.clone(),
                        status: rec.item_status,
                        scope: AbortScope::File,
                    },
                ));
                return;
            }
            tracing::info!(
                workflow = %rec.name,
                wfr = %rec.wfr_id,
                file = %file.accession,
                "Retiring run of deleted file"
            );
            report.decisions.push(decision_for(rec));
        }
    }

    /// Live file: per workflow-name group, keep the most recent run
    /// unless it is stale; released items abort only the current group
    fn plan_live_file(
        &self,
        file: &FileRecord,
        lineage: &[WfrRecord],
        report: &mut ReconcileReport,
    ) {
        // Surface unlisted workflow names once each, then move on
        let mut seen_unlisted = HashSet::new();
        for rec in lineage {
            if !self.catalog.contains(&rec.name) && seen_unlisted.insert(rec.name.clone()) {
                tracing::warn!(
                    workflow = %rec.name,
                    wfr = %rec.wfr_id,
                    file = %file.accession,
                    "Unlisted workflow; no retirement considered"
                );
                report.events.push(ReconcileEvent::new(
                    file.accession.clone(),
                    ReconcileEventKind::UnlistedWorkflow {
                        workflow: rec.name.clone(),
                        wfr_id: Some(rec.wfr_id.clone()),
                    },
                ));
            }
        }

        for def in self.catalog.iter() {
            let group: Vec<&WfrRecord> =
                lineage.iter().filter(|r| r.name == def.name).collect();
            let Some((&active, older)) = group.split_last() else {
                continue;
            };
            let mut stale: Vec<&WfrRecord> = older.to_vec();

            if active.wfr_status != RunStatus::Complete {
                if active.wfr_status.is_in_progress() && def.within_grace(active.elapsed_hours) {
                    tracing::info!(
                        workflow = %def.name,
                        wfr = %active.wfr_id,
                        file = %file.accession,
                        elapsed_hours = active.elapsed_hours,
                        "Run still within its grace period"
                    );
                    report.events.push(ReconcileEvent::new(
                        file.accession.clone(),
                        ReconcileEventKind::StillRunning {
                            workflow: def.name.clone(),
                            wfr_id: active.wfr_id.clone(),
                            elapsed_hours: active.elapsed_hours,
                        },
                    ));
                } else {
                    // Failed, stuck, or in an unexpected state
                    stale.push(active);
                }
            } else if !def.accepts(&active.version) {
                // Complete, but on a rejected revision
                stale.push(active);
            }

            for rec in stale {
                match rec.item_status {
                    ItemStatus::Deleted => continue,
                    s if s.is_archival() => {
                        tracing::warn!(
                            workflow = %rec.name,
                            wfr = %rec.wfr_id,
                            file = %file.accession,
                            status = %s,
                            "Protected item among stale runs; skipping it"
                        );
                        report.events.push(ReconcileEvent::new(
                            file.accession.clone(),
                            ReconcileEventKind::ProtectedSkip {
                                workflow: rec.name.clone(),
                                wfr_id: rec.wfr_id.clone(),
                                status: s,
                            },
                        ));
                    }
                    s if s.is_released() => {
                        tracing::warn!(
                            workflow = %rec.name,
                            wfr = %rec.wfr_id,
                            file = %file.accession,
                            status = %s,
                            "Released item among stale runs; halting the group"
                        );
                        report.events.push(ReconcileEvent::new(
                            file.accession.clone(),
                            ReconcileEventKind::ProtectedAbort {
                                workflow: rec.name.clone(),
                                wfr_id: rec.wfr_id.clone(),
                                status: s,
                                scope: AbortScope::Group,
                            },
                        ));
                        break;
                    }
                    _ => {
                        tracing::info!(
                            workflow = %rec.name,
                            wfr = %rec.wfr_id,
                            file = %file.accession,
                            version = %rec.version,
                            "Retiring superseded run"
                        );
                        report.decisions.push(decision_for(rec));
                    }
                }
            }
        }
    }

    /// Hand every accumulated decision to the executor, recording each
    /// outcome independently
    fn execute<E: RetirementExecutor>(&self, report: &mut ReconcileReport, executor: &mut E) {
        let mut outcomes = Vec::new();

        if let Some(qc) = report.file_qc.clone() {
            record_outcome(&mut outcomes, RetiredItem::Qc(qc.clone()), executor.retire_qc(&qc));
        }

        let decisions = report.decisions.clone();
        for decision in decisions {
            record_outcome(
                &mut outcomes,
                RetiredItem::Wfr(decision.wfr_id.clone()),
                executor.retire_wfr(&decision.wfr_id),
            );
            for file_id in &decision.cascaded_file_ids {
                record_outcome(
                    &mut outcomes,
                    RetiredItem::File(file_id.clone()),
                    executor.retire_file(file_id),
                );
            }
            for qc_id in &decision.cascaded_qc_ids {
                record_outcome(
                    &mut outcomes,
                    RetiredItem::Qc(qc_id.clone()),
                    executor.retire_qc(qc_id),
                );
            }
        }

        report.outcomes = outcomes;
    }
}

fn decision_for(rec: &WfrRecord) -> RetirementDecision {
    RetirementDecision {
        wfr_id: rec.wfr_id.clone(),
        cascaded_file_ids: rec.output_file_ids.clone(),
        cascaded_qc_ids: rec.qc_ids.clone(),
    }
}

fn record_outcome(
    outcomes: &mut Vec<ExecutionOutcome>,
    item: RetiredItem,
    result: Result<(), ExecutorError>,
) {
    match result {
        Ok(()) => {
            tracing::info!(item = %item, "Item retired");
            outcomes.push(ExecutionOutcome::ok(item));
        }
        Err(err) => {
            tracing::error!(item = %item, error = %err, "Retirement failed; siblings still attempted");
            outcomes.push(ExecutionOutcome::failed(item, err.to_string()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{InMemoryExecutor, InMemoryProvenance};
    use chrono::TimeZone;
    use lineage_types::{Accession, ItemRef, OutputEntry, WorkflowDefinition};

    fn frozen_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2023, 4, 2, 10, 0, 0).unwrap()
    }

    fn make_catalog() -> WorkflowCatalog {
        let mut catalog = WorkflowCatalog::new();
        catalog.insert(
            WorkflowDefinition::new("md5", 12.0)
                .with_version("0.0.4")
                .with_version("0.2.6"),
        );
        catalog.insert(
            WorkflowDefinition::new("bwa-mem", 48.0).with_version("0.2.6"),
        );
        catalog.insert(WorkflowDefinition::new("fastqc-0-11-4-1", 50.0).with_version("0.2.0"));
        catalog
    }

    fn make_wfr(uuid: &str, title: &str, run_status: RunStatus, status: ItemStatus) -> RawWfrRecord {
        RawWfrRecord {
            uuid: WfrId::new(uuid),
            at_id: format!("/workflow-runs-awsem/{}/", uuid),
            display_title: title.to_string(),
            run_status,
            status,
            output_files: vec![OutputEntry {
                value: Some(ItemRef::new(format!("{}-out", uuid))),
                value_qc: Some(ItemRef::new(format!("{}-qc", uuid))),
            }],
            quality_metric: None,
        }
    }

    fn make_file(status: ItemStatus, wfr_ids: &[&str]) -> FileRecord {
        FileRecord {
            uuid: lineage_types::FileId::new("file-1"),
            at_id: "/files-fastq/4DNFIAAA1111/".to_string(),
            accession: Accession::new("4DNFIAAA1111"),
            status,
            quality_metric: None,
            workflow_run_inputs: wfr_ids.iter().map(|id| ItemRef::new(*id)).collect(),
            workflow_run_outputs: vec![ItemRef::new("producer")],
        }
    }

    fn store_with(records: Vec<RawWfrRecord>) -> InMemoryProvenance {
        let mut store = InMemoryProvenance::new();
        for r in records {
            store.add_wfr(r);
        }
        store
    }

    #[test]
    fn test_deleted_file_aborts_whole_file_on_released_item() {
        let catalog = make_catalog();
        let store = store_with(vec![
            make_wfr(
                "w1",
                "md5 0.0.4 run on 2023-04-01 08:00:00",
                RunStatus::Complete,
                ItemStatus::InReview,
            ),
            make_wfr(
                "w2",
                "bwa-mem 0.2.6 run on 2023-04-01 09:00:00",
                RunStatus::Complete,
                ItemStatus::Released,
            ),
            make_wfr(
                "w3",
                "fastqc-0-11-4-1 0.2.0 run on 2023-04-01 10:00:00",
                RunStatus::Complete,
                ItemStatus::InReview,
            ),
        ]);
        let file = make_file(ItemStatus::Deleted, &["w1", "w2", "w3"]);
        let mut exec = InMemoryExecutor::new();

        let report = Reconciler::new(&catalog)
            .reconcile_at(&file, &store, None, &mut exec, false, frozen_now())
            .unwrap();

        // w1 decided before the released w2 halted the file; w3 untouched
        assert_eq!(report.decisions.len(), 1);
        assert_eq!(report.decisions[0].wfr_id, WfrId::new("w1"));
        assert!(report.was_aborted());
        assert!(report
            .events
            .iter()
            .any(|e| matches!(
                e.kind,
                ReconcileEventKind::ProtectedAbort { scope: AbortScope::File, .. }
            )));
        assert_eq!(exec.retired_count(), 0);
    }

    #[test]
    fn test_deleted_file_cascades_its_own_qc() {
        let catalog = make_catalog();
        let store = store_with(vec![make_wfr(
            "w1",
            "md5 0.0.4 run on 2023-04-01 08:00:00",
            RunStatus::Complete,
            ItemStatus::InReview,
        )]);
        let mut file = make_file(ItemStatus::Deleted, &["w1"]);
        file.quality_metric = Some(ItemRef::new("qc-file"));
        let mut exec = InMemoryExecutor::new();

        let report = Reconciler::new(&catalog)
            .reconcile_at(&file, &store, None, &mut exec, true, frozen_now())
            .unwrap();

        assert_eq!(report.file_qc, Some(lineage_types::QcId::new("qc-file")));
        assert!(exec
            .retired_qcs
            .contains(&lineage_types::QcId::new("qc-file")));
        assert_eq!(exec.retired_wfrs, vec![WfrId::new("w1")]);
    }

    #[test]
    fn test_live_file_released_item_halts_only_its_group() {
        let catalog = make_catalog();
        // Two stale md5 runs (released first), plus a stale bwa-mem run:
        // the md5 group halts, bwa-mem still retires.
        let store = store_with(vec![
            make_wfr(
                "m1",
                "md5 0.0.4 run on 2023-04-01 06:00:00",
                RunStatus::Complete,
                ItemStatus::Released,
            ),
            make_wfr(
                "m2",
                "md5 0.0.4 run on 2023-04-01 07:00:00",
                RunStatus::Complete,
                ItemStatus::InReview,
            ),
            make_wfr(
                "m3",
                "md5 0.0.4 run on 2023-04-01 08:00:00",
                RunStatus::Complete,
                ItemStatus::InReview,
            ),
            make_wfr(
                "b1",
                "bwa-mem 0.2.5 run on 2023-04-01 06:00:00",
                RunStatus::Complete,
                ItemStatus::InReview,
            ),
            make_wfr(
                "b2",
                "bwa-mem 0.2.6 run on 2023-04-01 09:00:00",
                RunStatus::Complete,
                ItemStatus::InReview,
            ),
        ]);
        let file = make_file(ItemStatus::Released, &["m1", "m2", "m3", "b1", "b2"]);
        let mut exec = InMemoryExecutor::new();

        let report = Reconciler::new(&catalog)
            .reconcile_at(&file, &store, None, &mut exec, false, frozen_now())
            .unwrap();

        // bwa-mem's stale b1 retires; md5's m2 never reached (group halted
        // at released m1)
        assert_eq!(report.decisions.len(), 1);
        assert_eq!(report.decisions[0].wfr_id, WfrId::new("b1"));
        assert!(report.events.iter().any(|e| matches!(
            e.kind,
            ReconcileEventKind::ProtectedAbort { scope: AbortScope::Group, .. }
        )));
    }

    #[test]
    fn test_live_file_archived_item_skipped_not_aborted() {
        let catalog = make_catalog();
        let store = store_with(vec![
            make_wfr(
                "m1",
                "md5 0.0.4 run on 2023-04-01 06:00:00",
                RunStatus::Complete,
                ItemStatus::Archived,
            ),
            make_wfr(
                "m2",
                "md5 0.0.4 run on 2023-04-01 07:00:00",
                RunStatus::Complete,
                ItemStatus::InReview,
            ),
            make_wfr(
                "m3",
                "md5 0.0.4 run on 2023-04-01 08:00:00",
                RunStatus::Complete,
                ItemStatus::InReview,
            ),
        ]);
        let file = make_file(ItemStatus::Released, &["m1", "m2", "m3"]);
        let mut exec = InMemoryExecutor::new();

        let report = Reconciler::new(&catalog)
            .reconcile_at(&file, &store, None, &mut exec, false, frozen_now())
            .unwrap();

        // Archived m1 skipped with an event; m2 still retires
        assert_eq!(report.decisions.len(), 1);
        assert_eq!(report.decisions[0].wfr_id, WfrId::new("m2"));
        assert!(report.events.iter().any(|e| matches!(
            e.kind,
            ReconcileEventKind::ProtectedSkip { status: ItemStatus::Archived, .. }
        )));
        assert!(!report.was_aborted());
    }

    #[test]
    fn test_fallback_checksum_search_for_unlinked_file() {
        let catalog = make_catalog();
        let mut store = InMemoryProvenance::new();
        store.add_wfr(make_wfr(
            "w-md5",
            "md5 0.0.4 run on 2023-04-01 08:00:00",
            RunStatus::Complete,
            ItemStatus::InReview,
        ));
        let acc = Accession::new("4DNFIMIC0001");
        store.index_input(acc.clone(), WfrId::new("w-md5"));

        // Microscopy file: no input runs recorded, not fastq/processed
        let file = FileRecord {
            uuid: lineage_types::FileId::new("file-mic"),
            at_id: "/files-microscopy/4DNFIMIC0001/".to_string(),
            accession: acc,
            status: ItemStatus::Deleted,
            quality_metric: None,
            workflow_run_inputs: Vec::new(),
            workflow_run_outputs: Vec::new(),
        };
        let mut exec = InMemoryExecutor::new();

        let report = Reconciler::new(&catalog)
            .reconcile_at(&file, &store, None, &mut exec, false, frozen_now())
            .unwrap();
        assert_eq!(report.decisions.len(), 1);
        assert_eq!(report.decisions[0].wfr_id, WfrId::new("w-md5"));
    }

    #[test]
    fn test_user_submitted_processed_file_skipped() {
        let catalog = make_catalog();
        let store = InMemoryProvenance::new();
        let file = FileRecord {
            uuid: lineage_types::FileId::new("file-p"),
            at_id: "/files-processed/4DNFIPRO0001/".to_string(),
            accession: Accession::new("4DNFIPRO0001"),
            status: ItemStatus::Deleted,
            quality_metric: None,
            workflow_run_inputs: vec![ItemRef::new("w1")],
            workflow_run_outputs: Vec::new(),
        };
        let mut exec = InMemoryExecutor::new();

        let report = Reconciler::new(&catalog)
            .reconcile_at(&file, &store, None, &mut exec, false, frozen_now())
            .unwrap();
        assert!(report.decisions.is_empty());
        assert!(report
            .events
            .iter()
            .any(|e| matches!(e.kind, ReconcileEventKind::UserSubmittedSkipped)));
    }

    #[test]
    fn test_perform_records_partial_failure_without_blocking_siblings() {
        let catalog = make_catalog();
        let store = store_with(vec![make_wfr(
            "w1",
            "md5 0.0.4 run on 2023-04-01 08:00:00",
            RunStatus::Complete,
            ItemStatus::InReview,
        )]);
        let file = make_file(ItemStatus::Deleted, &["w1"]);
        // Deny the cascaded output file; the run and QC must still retire
        let mut exec = InMemoryExecutor::new().deny("w1-out");

        let report = Reconciler::new(&catalog)
            .reconcile_at(&file, &store, None, &mut exec, true, frozen_now())
            .unwrap();

        assert!(report.performed);
        let failed: Vec<&ExecutionOutcome> =
            report.outcomes.iter().filter(|o| !o.is_ok()).collect();
        assert_eq!(failed.len(), 1);
        assert_eq!(
            failed[0].item,
            RetiredItem::File(lineage_types::FileId::new("w1-out"))
        );
        assert_eq!(exec.retired_wfrs, vec![WfrId::new("w1")]);
        assert_eq!(exec.retired_qcs, vec![lineage_types::QcId::new("w1-qc")]);
    }

    #[test]
    fn test_unlisted_workflow_on_deleted_file_still_retires() {
        let catalog = make_catalog();
        let store = store_with(vec![make_wfr(
            "w1",
            "ancient-pipeline 9.9.9 run on 2023-04-01 08:00:00",
            RunStatus::Complete,
            ItemStatus::InReview,
        )]);
        let file = make_file(ItemStatus::Deleted, &["w1"]);
        let mut exec = InMemoryExecutor::new();

        let report = Reconciler::new(&catalog)
            .reconcile_at(&file, &store, None, &mut exec, false, frozen_now())
            .unwrap();

        assert_eq!(report.decisions.len(), 1);
        assert!(report.events.iter().any(|e| matches!(
            e.kind,
            ReconcileEventKind::UnlistedWorkflow { .. }
        )));
    }

    #[test]
    fn test_unlisted_workflow_on_live_file_never_mutates() {
        let catalog = make_catalog();
        let store = store_with(vec![
            make_wfr(
                "w1",
                "ancient-pipeline 9.9.9 run on 2023-04-01 08:00:00",
                RunStatus::Complete,
                ItemStatus::InReview,
            ),
            make_wfr(
                "w2",
                "ancient-pipeline 9.9.9 run on 2023-04-01 09:00:00",
                RunStatus::Complete,
                ItemStatus::InReview,
            ),
        ]);
        let file = make_file(ItemStatus::Released, &["w1", "w2"]);
        let mut exec = InMemoryExecutor::new();

        let report = Reconciler::new(&catalog)
            .reconcile_at(&file, &store, None, &mut exec, false, frozen_now())
            .unwrap();

        assert!(report.decisions.is_empty());
        assert!(report.events.iter().any(|e| matches!(
            e.kind,
            ReconcileEventKind::UnlistedWorkflow { .. }
        )));
    }

    #[test]
    fn test_legacy_platform_records_filtered_out() {
        let catalog = make_catalog();
        let mut legacy = make_wfr(
            "w-sbg",
            "md5 0.0.4 run on 2023-04-01 08:00:00",
            RunStatus::Complete,
            ItemStatus::InReview,
        );
        legacy.at_id = "/workflow-runs-sbg/w-sbg/".to_string();
        let store = store_with(vec![legacy]);
        let file = make_file(ItemStatus::Deleted, &["w-sbg"]);
        let mut exec = InMemoryExecutor::new();

        let report = Reconciler::new(&catalog)
            .reconcile_at(&file, &store, None, &mut exec, false, frozen_now())
            .unwrap();
        assert!(report.decisions.is_empty());
    }
}
