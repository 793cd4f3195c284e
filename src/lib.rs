//! # screenshot-recon
//!
//! Orphaned-screenshot-to-trade reconciliation for the TradeBuddy journal.
//!
//! Journal records sometimes lose (or never receive) their chart-screenshot
//! attachment while orphaned image files pile up in the upload directories.
//! This crate pairs each unresolved record with its nearest candidate file
//! in time, one file per record, within a configurable window.
//!
//! ## Architecture
//!
//! - **core** — Foundational types: records, candidate files, assignments
//! - **matching** — The greedy nearest-timestamp matcher (pure, infallible)
//! - **io** — Input provider (journal export, directory scan) and output
//!   consumer (apply assignments, run reports)
//! - **synth** — Synthetic population generation for testing and benchmarks

pub mod core;
pub mod io;
pub mod matching;
pub mod synth;

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::core::assignment::{Assignment, MatchReport};
    pub use crate::core::candidate::{CandidateFile, CandidateSet};
    pub use crate::core::record::{RecordId, RecordSet, UnresolvedRecord};
    pub use crate::matching::greedy::{MatchConfig, Matcher};
}
