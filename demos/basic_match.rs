//! Basic reconciliation example.
//!
//! Demonstrates how unresolved records claim their nearest candidate
//! files within the default two-day window.

use chrono::{Duration, TimeZone, Utc};
use screenshot_recon::core::candidate::{CandidateFile, CandidateSet};
use screenshot_recon::core::record::{RecordId, RecordSet, UnresolvedRecord};
use screenshot_recon::matching::greedy::{MatchConfig, Matcher};

fn main() {
    println!("╔═══════════════════════════════════════════╗");
    println!("║  screenshot-recon: Basic Matching Example ║");
    println!("╚═══════════════════════════════════════════╝\n");

    let t0 = Utc.with_ymd_and_hms(2026, 3, 14, 9, 0, 0).unwrap();

    // A morning of trades that lost their screenshots
    let mut records = RecordSet::new();
    records.add(
        UnresolvedRecord::new(RecordId::new("trade-1042"), t0).with_label("EURUSD long"),
    );
    records.add(
        UnresolvedRecord::new(RecordId::new("trade-1043"), t0 + Duration::hours(1))
            .with_label("BTCUSD short"),
    );
    records.add(
        UnresolvedRecord::new(RecordId::new("trade-1044"), t0 + Duration::hours(3))
            .with_label("XAUUSD long"),
    );

    // Orphaned files found in the upload directory
    let mut candidates = CandidateSet::new();
    candidates.add(CandidateFile::new(
        "entry-0905.png",
        t0 + Duration::minutes(5),
        "/srv/tradebuddy/uploads/entry-0905.png",
    ));
    candidates.add(CandidateFile::new(
        "entry-1012.png",
        t0 + Duration::minutes(72),
        "/srv/tradebuddy/uploads/entry-1012.png",
    ));
    candidates.add(CandidateFile::new(
        "old-chart.png",
        t0 - Duration::days(30),
        "/srv/tradebuddy/uploads/old-chart.png",
    ));

    let report = Matcher::assign(&records, &candidates, &MatchConfig::default());
    println!("{}", report);

    println!("The 30-day-old chart stays orphaned: it is outside the window,");
    println!("so trade-1044 is reported unmatched for the operator to review.");
}
