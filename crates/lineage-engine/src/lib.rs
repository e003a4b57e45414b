//! Provenance Reconciliation Engine
//!
//! Given a File and the WorkflowRun lineage around it, decide which runs
//! are current and which are obsolete, and emit retirement decisions for
//! the obsolete ones. The engine never mutates the store itself; all side
//! effects go through the `RetirementExecutor` trait and only when a pass
//! is explicitly authorized (`perform = true`). Dry-run is the default.
//!
//! # Components
//!
//! - [`WorkflowCatalog`]: registry of accepted workflow definitions,
//!   built once per pass from the registry query.
//! - [`reporter`]: normalizes raw WorkflowRun records into a sorted
//!   lineage report.
//! - [`Reconciler`]: the two-mode decision engine (deleted file vs live
//!   file).
//! - [`ProvenanceFetcher`] / [`RetirementExecutor`]: the collaborator
//!   seams; an in-memory [`Stash`] can stand in for live fetches.
//!
//! # External invariant
//!
//! The engine is synchronous and stateless across invocations. Callers
//! must not run two reconciliation passes concurrently over overlapping
//! File/WorkflowRun sets; no internal locking exists or is required.

#![deny(unsafe_code)]

mod catalog;
mod executor;
mod fetcher;
mod reconciler;
pub mod reporter;

pub use catalog::*;
pub use executor::*;
pub use fetcher::*;
pub use reconciler::*;
