//! Synthetic input generation.
//!
//! Produces random record/candidate populations shaped like real journal
//! data (screenshots land on disk shortly after the trade), for the
//! `generate` CLI command and the benchmarks.

use crate::core::candidate::{CandidateFile, CandidateSet};
use crate::core::record::{RecordId, RecordSet, UnresolvedRecord};
use chrono::{DateTime, Duration, Utc};
use rand::Rng;

/// Configuration for generating a random reconciliation input.
#[derive(Debug, Clone)]
pub struct SynthConfig {
    /// Number of unresolved records.
    pub record_count: usize,
    /// Number of candidate files.
    pub file_count: usize,
    /// Records are spread uniformly over this span ending at `end`.
    pub span: Duration,
    /// End of the time span (newest possible record).
    pub end: DateTime<Utc>,
    /// Fraction of files generated near a record (within an hour);
    /// the rest land anywhere in the span.
    pub paired_fraction: f64,
}

impl Default for SynthConfig {
    fn default() -> Self {
        Self {
            record_count: 30,
            file_count: 30,
            span: Duration::days(90),
            end: Utc::now(),
            paired_fraction: 0.7,
        }
    }
}

/// Generate a random record/candidate population.
pub fn generate_population(config: &SynthConfig) -> (RecordSet, CandidateSet) {
    let mut rng = rand::thread_rng();
    let span_seconds = config.span.num_seconds().max(1);
    let start = config.end - config.span;

    let mut records = RecordSet::new();
    let mut record_times = Vec::with_capacity(config.record_count);
    for i in 0..config.record_count {
        let offset = rng.gen_range(0..span_seconds);
        let at = start + Duration::seconds(offset);
        record_times.push(at);
        records.add(
            UnresolvedRecord::new(RecordId::new(format!("trade-{:04}", i)), at)
                .with_label(format!("SYN-{:02}", i % 20)),
        );
    }

    let mut candidates = CandidateSet::new();
    for i in 0..config.file_count {
        let near_record =
            !record_times.is_empty() && rng.gen_bool(config.paired_fraction.clamp(0.0, 1.0));
        let at = if near_record {
            let anchor = record_times[rng.gen_range(0..record_times.len())];
            anchor + Duration::seconds(rng.gen_range(0..3600))
        } else {
            start + Duration::seconds(rng.gen_range(0..span_seconds))
        };
        let name = format!("shot-{:04}.png", i);
        let locator = format!("/srv/tradebuddy/uploads/{}", name);
        candidates.add(CandidateFile::new(name, at, locator));
    }

    (records, candidates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::greedy::{MatchConfig, Matcher};

    #[test]
    fn test_population_sizes() {
        let config = SynthConfig {
            record_count: 12,
            file_count: 8,
            ..Default::default()
        };
        let (records, candidates) = generate_population(&config);
        assert_eq!(records.len(), 12);
        assert_eq!(candidates.len(), 8);
    }

    #[test]
    fn test_generated_population_matches_cleanly() {
        let config = SynthConfig {
            record_count: 50,
            file_count: 50,
            ..Default::default()
        };
        let (records, candidates) = generate_population(&config);
        let report = Matcher::assign(&records, &candidates, &MatchConfig::default());

        assert!(report.is_injective());
        assert_eq!(
            report.matched_count() + report.unmatched_count(),
            records.len()
        );
    }

    #[test]
    fn test_empty_population() {
        let config = SynthConfig {
            record_count: 0,
            file_count: 0,
            ..Default::default()
        };
        let (records, candidates) = generate_population(&config);
        assert!(records.is_empty());
        assert!(candidates.is_empty());
    }
}
