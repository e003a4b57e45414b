//! Lineage Domain Types
//!
//! A scientific data repository tracks every File together with the
//! WorkflowRun (WFR) executions that produced or consumed it. Over time a
//! File accumulates superseded runs: re-executions on newer pipeline
//! versions, timed-out runs, runs whose outputs were replaced. These types
//! describe that lineage and the decisions needed to retire the obsolete
//! parts of it.
//!
//! # Key Concepts
//!
//! - **WorkflowDefinition**: a catalog entry naming a workflow, the
//!   revision identifiers still accepted for it, and the longest a run of
//!   it may take before it is considered stuck.
//! - **RawWfrRecord** / **FileRecord**: record shapes as the provenance
//!   store returns them, deserialized directly from portal JSON.
//! - **WfrRecord**: the normalized lineage-report entry the engine reasons
//!   about — parsed name/version, start time, elapsed hours, cascaded
//!   output and quality-metric ids.
//! - **RetirementDecision**: the engine's output unit — a WFR to retire
//!   plus everything that must be retired with it.
//! - **ReconcileEvent**: the audit record emitted for every skip, abort,
//!   and unlisted-workflow condition. Reconciliation deletes data, so
//!   every non-obvious outcome leaves a trace.
//!
//! # Design Principles
//!
//! 1. Decisions are values. The engine never mutates the store itself; it
//!    emits `RetirementDecision`s for an executor to act on.
//! 2. Protected lifecycle states always win over staleness.
//! 3. Normalized records are rebuilt from raw provenance on every pass,
//!    never persisted.

#![deny(unsafe_code)]

mod catalog;
mod decision;
mod errors;
mod ids;
mod raw;
mod report;
mod status;

pub use catalog::*;
pub use decision::*;
pub use errors::*;
pub use ids::*;
pub use raw::*;
pub use report::*;
pub use status::*;
