use crate::core::candidate::CandidateFile;
use crate::core::record::RecordId;
use chrono::Duration;

/// A proposed pairing of one record with one candidate file.
///
/// The matcher only decides pairings; writing the locator onto the
/// record is the output consumer's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    record_id: RecordId,
    file: CandidateFile,
    distance: Duration,
}

impl Assignment {
    pub fn new(record_id: RecordId, file: CandidateFile, distance: Duration) -> Self {
        Self {
            record_id,
            file,
            distance,
        }
    }

    pub fn record_id(&self) -> &RecordId {
        &self.record_id
    }

    pub fn file(&self) -> &CandidateFile {
        &self.file
    }

    /// Absolute time distance between the record and the file.
    pub fn distance(&self) -> Duration {
        self.distance
    }
}

/// Result of a reconciliation run.
///
/// Assignments appear in record processing order (ascending record
/// timestamp). Unmatched records are reported by id so the caller can
/// log them; an empty report is "nothing to do", not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchReport {
    assignments: Vec<Assignment>,
    unmatched: Vec<RecordId>,
}

impl MatchReport {
    pub fn new(assignments: Vec<Assignment>, unmatched: Vec<RecordId>) -> Self {
        Self {
            assignments,
            unmatched,
        }
    }

    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    /// Records that found no candidate within the window.
    pub fn unmatched(&self) -> &[RecordId] {
        &self.unmatched
    }

    pub fn unmatched_count(&self) -> usize {
        self.unmatched.len()
    }

    pub fn matched_count(&self) -> usize {
        self.assignments.len()
    }

    /// True when the run produced no assignments and had no records to
    /// report on.
    pub fn is_noop(&self) -> bool {
        self.assignments.is_empty() && self.unmatched.is_empty()
    }

    /// Verify no candidate file appears in more than one assignment.
    pub fn is_injective(&self) -> bool {
        let mut locators: Vec<&str> = self
            .assignments
            .iter()
            .map(|a| a.file().locator())
            .collect();
        locators.sort_unstable();
        locators.windows(2).all(|w| w[0] != w[1])
    }
}

impl std::fmt::Display for MatchReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "=== Reconciliation Report ===")?;
        writeln!(f, "Matched:   {}", self.matched_count())?;
        writeln!(f, "Unmatched: {}", self.unmatched_count())?;

        for a in &self.assignments {
            writeln!(
                f,
                "  {} -> {}  (distance {}m)",
                a.record_id(),
                a.file(),
                a.distance().num_minutes()
            )?;
        }
        for id in &self.unmatched {
            writeln!(f, "  {} -> no candidate within window", id)?;
        }
        Ok(())
    }
}
