//! Lineage reporter: normalizes raw WorkflowRun records
//!
//! Turns store records into sorted [`WfrRecord`] entries the engine can
//! reason about. Normalization is total: a record whose display label
//! does not decompose as `<name> <version> run on <timestamp>` is
//! skipped, never fatal — the store holds heterogeneous legacy shapes
//! and one malformed record must not block a file's reconciliation.

use chrono::{DateTime, NaiveDateTime, Utc};
use lineage_types::{FileId, QcId, RawWfrRecord, WfrRecord};
use std::collections::HashSet;

/// Timestamp layouts seen in display labels; first successful parse wins
const TIMESTAMP_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%d %H:%M:%S"];

/// Normalize raw records into a lineage report, sorted ascending by
/// `(started_at, name)`
///
/// `now` is the clock the elapsed-hours derivation is computed against;
/// callers pass `Utc::now()` in production and a frozen instant in tests.
pub fn normalize(raw_records: &[RawWfrRecord], now: DateTime<Utc>) -> Vec<WfrRecord> {
    let mut report: Vec<WfrRecord> = raw_records
        .iter()
        .filter_map(|raw| normalize_one(raw, now))
        .collect();
    report.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
    report
}

fn normalize_one(raw: &RawWfrRecord, now: DateTime<Utc>) -> Option<WfrRecord> {
    let (name, version, started_at) = match parse_display_label(&raw.display_title) {
        Some(parsed) => parsed,
        None => {
            tracing::debug!(
                wfr = %raw.uuid,
                title = %raw.display_title,
                "Display label not in '<name> <version> run on <timestamp>' form; skipping"
            );
            return None;
        }
    };

    let elapsed_hours = (now - started_at).num_milliseconds() as f64 / 3_600_000.0;

    let mut output_file_ids = Vec::new();
    let mut qc_ids = Vec::new();

    // The run's own QC comes first, then output-level QCs
    if let Some(qc) = &raw.quality_metric {
        qc_ids.push(QcId::new(qc.uuid.clone()));
    }
    for output in &raw.output_files {
        if let Some(file) = &output.value {
            output_file_ids.push(FileId::new(file.uuid.clone()));
        }
        if let Some(qc) = &output.value_qc {
            qc_ids.push(QcId::new(qc.uuid.clone()));
        }
    }
    dedup_preserving(&mut output_file_ids);
    dedup_preserving(&mut qc_ids);

    Some(WfrRecord {
        wfr_id: raw.uuid.clone(),
        wfr_status: raw.run_status,
        item_status: raw.status,
        name,
        version,
        started_at,
        elapsed_hours,
        output_file_ids,
        qc_ids,
    })
}

/// Decompose a display label into `(name, version, started_at)`
///
/// The label must split as `<base> run on <timestamp>` with `<base>`
/// holding exactly two whitespace-separated tokens. Timestamps are taken
/// as UTC.
fn parse_display_label(title: &str) -> Option<(String, String, DateTime<Utc>)> {
    let (base, time_info) = title.split_once(" run on ")?;

    let mut tokens = base.split_whitespace();
    let name = tokens.next()?;
    let version = tokens.next()?;
    if tokens.next().is_some() {
        return None;
    }

    let time_info = time_info.trim();
    let started_at = TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(time_info, fmt).ok())?;

    Some((name.to_string(), version.to_string(), started_at.and_utc()))
}

/// Drop duplicate ids while keeping first-seen order
fn dedup_preserving<T: Clone + Eq + std::hash::Hash>(ids: &mut Vec<T>) {
    let mut seen = HashSet::new();
    ids.retain(|id| seen.insert(id.clone()));
}
