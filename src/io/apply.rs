use crate::core::assignment::MatchReport;
use crate::io::records::RecordExport;
use crate::io::ReconError;
use chrono::{DateTime, Utc};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use uuid::Uuid;

/// Persisted summary of one reconciliation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    /// Unique id for this run.
    pub run_id: Uuid,
    /// When the report was generated.
    pub generated_at: DateTime<Utc>,
    /// Whether assignments were actually persisted.
    pub dry_run: bool,
    pub matched: Vec<AppliedAssignment>,
    pub unmatched: Vec<String>,
}

/// One persisted (or intended, under dry-run) pairing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppliedAssignment {
    pub record_id: String,
    pub file: String,
    pub locator: String,
    pub distance_seconds: i64,
}

impl RunReport {
    /// Build a report from the matcher's output.
    pub fn from_match_report(report: &MatchReport, dry_run: bool) -> Self {
        Self {
            run_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            dry_run,
            matched: report
                .assignments()
                .iter()
                .map(|a| AppliedAssignment {
                    record_id: a.record_id().to_string(),
                    file: a.file().name().to_string(),
                    locator: a.file().locator().to_string(),
                    distance_seconds: a.distance().num_seconds(),
                })
                .collect(),
            unmatched: report.unmatched().iter().map(|id| id.to_string()).collect(),
        }
    }

    /// Write the report as pretty JSON.
    pub fn save(&self, path: &Path) -> Result<(), ReconError> {
        let json =
            serde_json::to_string_pretty(self).map_err(|e| ReconError::json(path, e))?;
        fs::write(path, json).map_err(|e| ReconError::io(path, e))
    }
}

/// Apply a match report to the journal export: write each assignment's
/// locator onto its record. Returns the number of records updated.
///
/// Under dry-run nothing is mutated; intended assignments are logged
/// instead. An assignment whose record id is no longer in the export
/// (stale export between load and apply) is logged and skipped rather
/// than failing the whole run.
pub fn apply(export: &mut RecordExport, report: &MatchReport, dry_run: bool) -> usize {
    if report.is_noop() {
        info!("nothing to do: no unresolved records");
        return 0;
    }

    let mut updated = 0;
    for assignment in report.assignments() {
        if dry_run {
            info!(
                "[dry-run] would attach {} to record {} (distance {}m)",
                assignment.file(),
                assignment.record_id(),
                assignment.distance().num_minutes()
            );
            continue;
        }

        match export.entry_mut(assignment.record_id()) {
            Some(entry) => {
                entry.screenshot = Some(assignment.file().locator().to_string());
                info!(
                    "attached {} to record {} (distance {}m)",
                    assignment.file(),
                    assignment.record_id(),
                    assignment.distance().num_minutes()
                );
                updated += 1;
            }
            None => {
                warn!(
                    "record {} not found in export, skipping",
                    assignment.record_id()
                );
            }
        }
    }

    info!(
        "run complete: {} matched, {} unmatched",
        report.matched_count(),
        report.unmatched_count()
    );
    updated
}
