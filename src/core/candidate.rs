use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An orphaned on-disk file eligible for (re-)attachment to a record.
///
/// The timestamp comes from filesystem modification time, which is a
/// heuristic proxy for "when this screenshot was taken" and may be wrong
/// if the file was copied or touched after creation. The locator is the
/// string the output consumer writes onto a matched record (an absolute
/// path or URL).
///
/// # Examples
///
/// ```
/// use screenshot_recon::core::candidate::CandidateFile;
/// use chrono::{TimeZone, Utc};
///
/// let file = CandidateFile::new(
///     "eurusd-entry.png",
///     Utc.with_ymd_and_hms(2026, 3, 14, 9, 31, 0).unwrap(),
///     "/srv/tradebuddy/uploads/eurusd-entry.png",
/// );
/// assert_eq!(file.name(), "eurusd-entry.png");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateFile {
    /// File name, for logs and reports.
    name: String,
    /// Filesystem modification time.
    timestamp: DateTime<Utc>,
    /// Resolvable path or URL written onto the record on match.
    locator: String,
}

impl CandidateFile {
    pub fn new(
        name: impl Into<String>,
        timestamp: DateTime<Utc>,
        locator: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            timestamp,
            locator: locator.into(),
        }
    }

    // --- Accessors ---

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn locator(&self) -> &str {
        &self.locator
    }
}

impl fmt::Display for CandidateFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// A collection of candidate files enumerated once per run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CandidateSet {
    candidates: Vec<CandidateFile>,
}

impl CandidateSet {
    pub fn new() -> Self {
        Self {
            candidates: Vec::new(),
        }
    }

    pub fn add(&mut self, candidate: CandidateFile) {
        self.candidates.push(candidate);
    }

    pub fn candidates(&self) -> &[CandidateFile] {
        &self.candidates
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Candidates sorted ascending by timestamp, name as tie-break.
    ///
    /// Sorting is a scan optimization for the matcher, not a correctness
    /// requirement, but it also pins down which file wins an exact
    /// distance tie, so the tie-break must be stable across runs.
    pub fn sorted_by_timestamp(&self) -> Vec<CandidateFile> {
        let mut sorted = self.candidates.clone();
        sorted.sort_by(|a, b| {
            a.timestamp()
                .cmp(&b.timestamp())
                .then_with(|| a.name().cmp(b.name()))
        });
        sorted
    }
}

impl FromIterator<CandidateFile> for CandidateSet {
    fn from_iter<T: IntoIterator<Item = CandidateFile>>(iter: T) -> Self {
        Self {
            candidates: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn ts(min: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 14, 9, min, 0).unwrap()
    }

    #[test]
    fn test_candidate_accessors() {
        let file = CandidateFile::new("chart.png", ts(30), "/uploads/chart.png");
        assert_eq!(file.name(), "chart.png");
        assert_eq!(file.locator(), "/uploads/chart.png");
        assert_eq!(file.timestamp(), ts(30));
    }

    #[test]
    fn test_sorted_by_timestamp_with_name_tiebreak() {
        let mut set = CandidateSet::new();
        set.add(CandidateFile::new("b.png", ts(10), "/b.png"));
        set.add(CandidateFile::new("a.png", ts(10), "/a.png"));
        set.add(CandidateFile::new("c.png", ts(5), "/c.png"));

        let sorted = set.sorted_by_timestamp();
        let names: Vec<&str> = sorted.iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["c.png", "a.png", "b.png"]);
    }
}
