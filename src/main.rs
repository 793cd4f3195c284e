//! screenshot-recon CLI
//!
//! Reconcile orphaned screenshots with journal records from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Dry-run a reconciliation (nothing is written)
//! screenshot-recon match --records export.json --dir uploads/ --dry-run
//!
//! # Apply assignments and write a run report
//! screenshot-recon match --records export.json --dir uploads/ --report run.json
//!
//! # List candidate files in the upload directories
//! screenshot-recon scan --dir uploads/ --dir archive/
//!
//! # Generate a synthetic export for testing
//! screenshot-recon generate --records 30 --files 30
//! ```

use chrono::Duration;
use screenshot_recon::core::candidate::CandidateSet;
use screenshot_recon::io::apply::{apply, RunReport};
use screenshot_recon::io::records::{load_export, save_export, RecordEntry, RecordExport};
use screenshot_recon::io::scan::{scan_directories, DEFAULT_EXTENSIONS};
use screenshot_recon::matching::greedy::{MatchConfig, Matcher};
use screenshot_recon::synth::{generate_population, SynthConfig};
use std::path::{Path, PathBuf};
use std::process;

fn print_usage() {
    eprintln!(
        r#"screenshot-recon — orphaned-screenshot-to-trade reconciliation

USAGE:
    screenshot-recon <COMMAND> [OPTIONS]

COMMANDS:
    match       Pair unresolved records with candidate files
    scan        List candidate files in the given directories
    generate    Generate a synthetic journal export (for testing)
    help        Show this message

OPTIONS (match):
    --records <FILE>     Path to the journal export JSON (required)
    --dir <DIR>          Candidate directory (repeatable, required)
    --window-hours <N>   Maximum match distance in hours (default: 48)
    --dry-run            Log intended assignments without writing anything
    --report <FILE>      Also write a JSON run report
    --format <FORMAT>    Output format: text (default) or json

OPTIONS (scan):
    --dir <DIR>          Candidate directory (repeatable, required)
    --format <FORMAT>    Output format: text (default) or json

OPTIONS (generate):
    --records <N>        Number of unresolved records (default: 30)
    --files <N>          Number of candidate files (default: 30)
    --output <FILE>      Write export to file instead of stdout

EXAMPLES:
    screenshot-recon match --records export.json --dir uploads/ --dry-run
    screenshot-recon match --records export.json --dir uploads/ --window-hours 12
    screenshot-recon scan --dir uploads/ --format json
    screenshot-recon generate --records 50 --files 40 --output export.json"#
    );
}

/// JSON output schema for match results.
#[derive(serde::Serialize)]
struct MatchOutput {
    matched: Vec<MatchedOutput>,
    unmatched: Vec<String>,
    dry_run: bool,
}

#[derive(serde::Serialize)]
struct MatchedOutput {
    record: String,
    file: String,
    locator: String,
    distance_minutes: i64,
}

#[derive(serde::Serialize)]
struct CandidateOutput {
    name: String,
    modified: String,
    locator: String,
}

fn require_value(args: &[String], i: usize, flag: &str) -> String {
    args.get(i).cloned().unwrap_or_else(|| {
        eprintln!("{} requires a value", flag);
        process::exit(1);
    })
}

/// Upper bound for --window-hours: ten years, far beyond any sane run.
const MAX_WINDOW_HOURS: i64 = 10 * 365 * 24;

fn parse_window_hours(value: &str) -> Result<i64, String> {
    let hours: i64 = value
        .parse()
        .map_err(|_| "--window-hours requires a number of hours".to_string())?;
    if hours <= 0 {
        return Err(format!(
            "--window-hours must be positive, got {}",
            hours
        ));
    }
    if hours > MAX_WINDOW_HOURS {
        return Err(format!(
            "--window-hours must be at most {}, got {}",
            MAX_WINDOW_HOURS, hours
        ));
    }
    Ok(hours)
}

fn load_candidates(dirs: &[PathBuf]) -> CandidateSet {
    if dirs.is_empty() {
        eprintln!("Error: at least one --dir <DIR> is required");
        process::exit(1);
    }
    scan_directories(dirs, DEFAULT_EXTENSIONS).unwrap_or_else(|e| {
        eprintln!("Error scanning candidates: {}", e);
        process::exit(1);
    })
}

fn cmd_match(args: &[String]) {
    let mut records_path: Option<String> = None;
    let mut dirs: Vec<PathBuf> = Vec::new();
    let mut window_hours: i64 = 48;
    let mut dry_run = false;
    let mut report_path: Option<String> = None;
    let mut format = "text".to_string();

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--records" => {
                i += 1;
                records_path = Some(require_value(args, i, "--records"));
            }
            "--dir" => {
                i += 1;
                dirs.push(PathBuf::from(require_value(args, i, "--dir")));
            }
            "--window-hours" => {
                i += 1;
                let raw = require_value(args, i, "--window-hours");
                window_hours = parse_window_hours(&raw).unwrap_or_else(|e| {
                    eprintln!("{}", e);
                    process::exit(1);
                });
            }
            "--dry-run" => dry_run = true,
            "--report" => {
                i += 1;
                report_path = Some(require_value(args, i, "--report"));
            }
            "--format" => {
                i += 1;
                format = require_value(args, i, "--format");
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                process::exit(1);
            }
        }
        i += 1;
    }

    let records_path = records_path.unwrap_or_else(|| {
        eprintln!("Error: --records <FILE> is required");
        process::exit(1);
    });

    let mut export = load_export(Path::new(&records_path)).unwrap_or_else(|e| {
        eprintln!("Error loading records: {}", e);
        process::exit(1);
    });
    let records = export.unresolved();
    let candidates = load_candidates(&dirs);

    let config = MatchConfig::with_max_window(Duration::hours(window_hours));
    let result = Matcher::assign(&records, &candidates, &config);

    if result.is_noop() {
        eprintln!("Nothing to do: no unresolved records.");
    }

    apply(&mut export, &result, dry_run);
    if !dry_run {
        save_export(&export, Path::new(&records_path)).unwrap_or_else(|e| {
            eprintln!("Error writing records: {}", e);
            process::exit(1);
        });
    }

    if let Some(path) = report_path {
        let report = RunReport::from_match_report(&result, dry_run);
        report.save(Path::new(&path)).unwrap_or_else(|e| {
            eprintln!("Error writing report: {}", e);
            process::exit(1);
        });
    }

    if format == "json" {
        let output = MatchOutput {
            matched: result
                .assignments()
                .iter()
                .map(|a| MatchedOutput {
                    record: a.record_id().to_string(),
                    file: a.file().name().to_string(),
                    locator: a.file().locator().to_string(),
                    distance_minutes: a.distance().num_minutes(),
                })
                .collect(),
            unmatched: result.unmatched().iter().map(|id| id.to_string()).collect(),
            dry_run,
        };
        println!("{}", serde_json::to_string_pretty(&output).unwrap());
    } else {
        println!("{}", result);
        if dry_run {
            println!("(dry-run: nothing was written)");
        }
    }
}

fn cmd_scan(args: &[String]) {
    let mut dirs: Vec<PathBuf> = Vec::new();
    let mut format = "text".to_string();

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--dir" => {
                i += 1;
                dirs.push(PathBuf::from(require_value(args, i, "--dir")));
            }
            "--format" => {
                i += 1;
                format = require_value(args, i, "--format");
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                process::exit(1);
            }
        }
        i += 1;
    }

    let set = load_candidates(&dirs);
    let candidates = set.sorted_by_timestamp();

    if format == "json" {
        let output: Vec<CandidateOutput> = candidates
            .iter()
            .map(|c| CandidateOutput {
                name: c.name().to_string(),
                modified: c.timestamp().to_rfc3339(),
                locator: c.locator().to_string(),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&output).unwrap());
    } else {
        for c in &candidates {
            println!("{}  {}", c.timestamp().to_rfc3339(), c.name());
        }
        println!("\nTotal candidates: {}", candidates.len());
    }
}

fn cmd_generate(args: &[String]) {
    let mut record_count = 30usize;
    let mut file_count = 30usize;
    let mut output_path: Option<String> = None;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--records" => {
                i += 1;
                record_count = require_value(args, i, "--records")
                    .parse()
                    .unwrap_or_else(|_| {
                        eprintln!("--records requires a number");
                        process::exit(1);
                    });
            }
            "--files" => {
                i += 1;
                file_count = require_value(args, i, "--files")
                    .parse()
                    .unwrap_or_else(|_| {
                        eprintln!("--files requires a number");
                        process::exit(1);
                    });
            }
            "--output" => {
                i += 1;
                output_path = Some(require_value(args, i, "--output"));
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                process::exit(1);
            }
        }
        i += 1;
    }

    let config = SynthConfig {
        record_count,
        file_count,
        ..Default::default()
    };
    let (records, candidates) = generate_population(&config);

    let export = RecordExport {
        records: records
            .records()
            .iter()
            .map(|r| RecordEntry {
                id: r.id().to_string(),
                created_at: r.timestamp(),
                symbol: r.label().map(|l| l.to_string()),
                screenshot: None,
            })
            .collect(),
    };

    let json = serde_json::to_string_pretty(&export).unwrap();

    if let Some(path) = output_path {
        std::fs::write(&path, &json).unwrap_or_else(|e| {
            eprintln!("Error writing to '{}': {}", path, e);
            process::exit(1);
        });
        eprintln!(
            "Generated {} records ({} candidate files simulated) → {}",
            records.len(),
            candidates.len(),
            path
        );
    } else {
        println!("{}", json);
    }
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let command = args[1].as_str();
    let rest = &args[2..];

    match command {
        "match" => cmd_match(rest),
        "scan" => cmd_scan(rest),
        "generate" => cmd_generate(rest),
        "help" | "--help" | "-h" => print_usage(),
        _ => {
            eprintln!("Unknown command: {}", command);
            print_usage();
            process::exit(1);
        }
    }
}
