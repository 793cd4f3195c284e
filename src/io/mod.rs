//! Input provider and output consumer for reconciliation runs.
//!
//! The matcher itself is pure; everything that touches the filesystem
//! lives here. These are one-shot operator-tool code paths: errors are
//! typed, propagated, and terminate the run (no retries).

pub mod apply;
pub mod records;
pub mod scan;

use std::path::PathBuf;
use thiserror::Error;

/// Errors arising from loading inputs or persisting outputs.
#[derive(Debug, Error)]
pub enum ReconError {
    #[error("cannot access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl ReconError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.into(),
            source,
        }
    }
}
