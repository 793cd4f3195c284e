use crate::core::assignment::{Assignment, MatchReport};
use crate::core::candidate::{CandidateFile, CandidateSet};
use crate::core::record::RecordSet;
use chrono::{DateTime, Duration, Utc};

/// Configuration for a reconciliation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchConfig {
    /// Maximum allowed time distance for a pairing. A candidate at
    /// exactly this distance is rejected (strict comparison).
    pub max_window: Duration,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_window: Duration::days(2),
        }
    }
}

impl MatchConfig {
    pub fn with_max_window(max_window: Duration) -> Self {
        Self { max_window }
    }
}

/// The greedy nearest-timestamp matcher.
///
/// Pairs each unresolved record with its closest-in-time candidate file,
/// claiming files as it goes so no file is assigned twice.
pub struct Matcher;

impl Matcher {
    /// Compute a best-effort one-to-one assignment of records to files.
    ///
    /// # Algorithm
    ///
    /// 1. Sort records ascending by timestamp; process in that order.
    /// 2. Sort candidates ascending by timestamp once (scan optimization;
    ///    also fixes which file wins an exact distance tie).
    /// 3. For each record, linearly scan all unclaimed candidates and keep
    ///    the minimum absolute distance. The comparison is strict `<`, so
    ///    the first-seen minimal candidate wins ties.
    /// 4. Emit an assignment only if the minimum distance is strictly
    ///    inside `max_window`; otherwise the record goes unmatched.
    ///
    /// Greedy, not globally optimal: an early record can claim a file that
    /// was a later record's only in-window option. Accepted trade-off for
    /// the expected input sizes (tens of trades and files per run).
    ///
    /// Pure function: no side effects, deterministic for identical inputs,
    /// and never fails. Empty inputs yield an empty report.
    pub fn assign(
        records: &RecordSet,
        candidates: &CandidateSet,
        config: &MatchConfig,
    ) -> MatchReport {
        let records = records.sorted_by_timestamp();
        let candidates = candidates.sorted_by_timestamp();

        let mut used = vec![false; candidates.len()];
        let mut assignments = Vec::new();
        let mut unmatched = Vec::new();

        for record in &records {
            match Self::nearest_unclaimed(record.timestamp(), &candidates, &used) {
                Some((idx, distance)) if distance < config.max_window => {
                    used[idx] = true;
                    assignments.push(Assignment::new(
                        record.id().clone(),
                        candidates[idx].clone(),
                        distance,
                    ));
                }
                _ => unmatched.push(record.id().clone()),
            }
        }

        MatchReport::new(assignments, unmatched)
    }

    /// Index and distance of the closest unclaimed candidate, if any.
    fn nearest_unclaimed(
        at: DateTime<Utc>,
        candidates: &[CandidateFile],
        used: &[bool],
    ) -> Option<(usize, Duration)> {
        let mut best: Option<(usize, Duration)> = None;

        for (idx, candidate) in candidates.iter().enumerate() {
            if used[idx] {
                continue;
            }
            let distance = abs_distance(at, candidate.timestamp());
            // Strict less-than: the earliest-seen minimum is retained.
            if best.map_or(true, |(_, d)| distance < d) {
                best = Some((idx, distance));
            }
        }

        best
    }
}

/// Absolute time distance between two instants.
fn abs_distance(a: DateTime<Utc>, b: DateTime<Utc>) -> Duration {
    if a >= b {
        a - b
    } else {
        b - a
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::record::{RecordId, UnresolvedRecord};
    use chrono::{DateTime, TimeZone, Utc};

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 14, 9, 0, 0).unwrap()
    }

    fn record(id: &str, at: DateTime<Utc>) -> UnresolvedRecord {
        UnresolvedRecord::new(RecordId::new(id), at)
    }

    fn file(name: &str, at: DateTime<Utc>) -> CandidateFile {
        CandidateFile::new(name, at, format!("/uploads/{}", name))
    }

    #[test]
    fn test_nearest_wins() {
        let records: RecordSet = vec![record("t1", t0())].into_iter().collect();
        let candidates: CandidateSet = vec![
            file("far.png", t0() + Duration::hours(5)),
            file("near.png", t0() + Duration::minutes(10)),
        ]
        .into_iter()
        .collect();

        let report = Matcher::assign(&records, &candidates, &MatchConfig::default());
        assert_eq!(report.matched_count(), 1);
        assert_eq!(report.assignments()[0].file().name(), "near.png");
        assert_eq!(report.assignments()[0].distance(), Duration::minutes(10));
    }

    #[test]
    fn test_early_record_claims_shared_file() {
        // Two records an hour apart, one close file and one far beyond
        // the window. The earlier record claims the close file; the
        // later record goes unmatched.
        let records: RecordSet = vec![
            record("t2", t0() + Duration::hours(1)),
            record("t1", t0()),
        ]
        .into_iter()
        .collect();
        let candidates: CandidateSet = vec![
            file("close.png", t0() + Duration::minutes(30)),
            file("distant.png", t0() + Duration::days(10)),
        ]
        .into_iter()
        .collect();

        let report = Matcher::assign(&records, &candidates, &MatchConfig::default());
        assert_eq!(report.matched_count(), 1);
        assert_eq!(report.assignments()[0].record_id().as_str(), "t1");
        assert_eq!(report.assignments()[0].file().name(), "close.png");
        assert_eq!(report.unmatched(), &[RecordId::new("t2")]);
    }

    #[test]
    fn test_equidistant_tie_goes_to_earlier_candidate() {
        // Candidates one day before and one day after the record, both
        // within the window: the first in ascending-sorted order wins.
        let records: RecordSet = vec![record("t1", t0())].into_iter().collect();
        let candidates: CandidateSet = vec![
            file("after.png", t0() + Duration::days(1)),
            file("before.png", t0() - Duration::days(1)),
        ]
        .into_iter()
        .collect();

        let report = Matcher::assign(&records, &candidates, &MatchConfig::default());
        assert_eq!(report.matched_count(), 1);
        assert_eq!(report.assignments()[0].file().name(), "before.png");
    }

    #[test]
    fn test_window_boundary_is_exclusive() {
        let records: RecordSet = vec![record("t1", t0())].into_iter().collect();
        let candidates: CandidateSet = vec![file("edge.png", t0() + Duration::days(2))]
            .into_iter()
            .collect();

        let report = Matcher::assign(&records, &candidates, &MatchConfig::default());
        assert_eq!(report.matched_count(), 0);
        assert_eq!(report.unmatched_count(), 1);

        // One second inside the window matches.
        let candidates: CandidateSet =
            vec![file("edge.png", t0() + Duration::days(2) - Duration::seconds(1))]
                .into_iter()
                .collect();
        let report = Matcher::assign(&records, &candidates, &MatchConfig::default());
        assert_eq!(report.matched_count(), 1);
    }

    #[test]
    fn test_no_records_is_noop() {
        let records = RecordSet::new();
        let candidates: CandidateSet = vec![
            file("a.png", t0()),
            file("b.png", t0()),
            file("c.png", t0()),
        ]
        .into_iter()
        .collect();

        let report = Matcher::assign(&records, &candidates, &MatchConfig::default());
        assert!(report.is_noop());
    }

    #[test]
    fn test_no_candidates_leaves_all_unmatched() {
        let records: RecordSet = vec![
            record("t1", t0()),
            record("t2", t0() + Duration::hours(1)),
        ]
        .into_iter()
        .collect();

        let report = Matcher::assign(&records, &CandidateSet::new(), &MatchConfig::default());
        assert_eq!(report.matched_count(), 0);
        assert_eq!(report.unmatched_count(), 2);
    }

    #[test]
    fn test_single_candidate_three_close_records() {
        // Three records within a minute, one file exactly on the earliest
        // record. Only the earliest gets the file.
        let records: RecordSet = vec![
            record("t1", t0()),
            record("t2", t0() + Duration::seconds(30)),
            record("t3", t0() + Duration::seconds(60)),
        ]
        .into_iter()
        .collect();
        let candidates: CandidateSet = vec![file("only.png", t0())].into_iter().collect();

        let report = Matcher::assign(&records, &candidates, &MatchConfig::default());
        assert_eq!(report.matched_count(), 1);
        assert_eq!(report.assignments()[0].record_id().as_str(), "t1");
        assert_eq!(report.assignments()[0].distance(), Duration::zero());
        assert_eq!(report.unmatched_count(), 2);
    }

    #[test]
    fn test_tied_record_timestamps_resolve_by_id() {
        // Two records created at the same instant contest a single
        // candidate. The id tie-break decides the winner, so assembling
        // the input in either order gives the same report.
        let records: RecordSet = vec![record("a", t0()), record("b", t0())]
            .into_iter()
            .collect();
        let reversed: RecordSet = vec![record("b", t0()), record("a", t0())]
            .into_iter()
            .collect();
        let candidates: CandidateSet = vec![file("only.png", t0() + Duration::minutes(1))]
            .into_iter()
            .collect();

        let forward = Matcher::assign(&records, &candidates, &MatchConfig::default());
        let backward = Matcher::assign(&reversed, &candidates, &MatchConfig::default());

        assert_eq!(forward, backward);
        assert_eq!(forward.assignments()[0].record_id().as_str(), "a");
        assert_eq!(forward.unmatched(), &[RecordId::new("b")]);
    }

    #[test]
    fn test_custom_window() {
        let config = MatchConfig::with_max_window(Duration::minutes(15));
        let records: RecordSet = vec![record("t1", t0())].into_iter().collect();
        let candidates: CandidateSet = vec![file("a.png", t0() + Duration::minutes(20))]
            .into_iter()
            .collect();

        let report = Matcher::assign(&records, &candidates, &config);
        assert_eq!(report.matched_count(), 0);
    }

    #[test]
    fn test_assignments_in_record_timestamp_order() {
        let records: RecordSet = vec![
            record("late", t0() + Duration::hours(2)),
            record("early", t0()),
        ]
        .into_iter()
        .collect();
        let candidates: CandidateSet = vec![
            file("a.png", t0()),
            file("b.png", t0() + Duration::hours(2)),
        ]
        .into_iter()
        .collect();

        let report = Matcher::assign(&records, &candidates, &MatchConfig::default());
        assert_eq!(report.matched_count(), 2);
        assert_eq!(report.assignments()[0].record_id().as_str(), "early");
        assert_eq!(report.assignments()[1].record_id().as_str(), "late");
        assert!(report.is_injective());
    }
}
