use crate::core::candidate::{CandidateFile, CandidateSet};
use crate::io::ReconError;
use chrono::{DateTime, Utc};
use log::{debug, warn};
use std::fs;
use std::path::Path;

/// File extensions considered screenshots by default.
pub const DEFAULT_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp"];

/// Enumerate candidate files from one or more directories.
///
/// Regular files only, filtered case-insensitively by extension.
/// Timestamps come from filesystem modification time — a heuristic proxy
/// for when the screenshot was taken, unreliable if files were copied or
/// touched afterwards. The locator is the absolute path.
///
/// An unreadable directory is a hard error; an individual entry whose
/// metadata cannot be read is skipped with a warning.
pub fn scan_directories(
    dirs: &[impl AsRef<Path>],
    extensions: &[&str],
) -> Result<CandidateSet, ReconError> {
    let mut set = CandidateSet::new();

    for dir in dirs {
        let dir = dir.as_ref();
        let entries = fs::read_dir(dir).map_err(|e| ReconError::io(dir, e))?;

        for entry in entries {
            let entry = entry.map_err(|e| ReconError::io(dir, e))?;
            let path = entry.path();

            if !has_allowed_extension(&path, extensions) {
                continue;
            }

            let metadata = match entry.metadata() {
                Ok(m) => m,
                Err(e) => {
                    warn!("skipping {}: cannot read metadata: {}", path.display(), e);
                    continue;
                }
            };
            if !metadata.is_file() {
                continue;
            }

            let modified = match metadata.modified() {
                Ok(t) => t,
                Err(e) => {
                    warn!("skipping {}: no modification time: {}", path.display(), e);
                    continue;
                }
            };
            let timestamp: DateTime<Utc> = modified.into();

            let name = entry.file_name().to_string_lossy().into_owned();
            let locator = path
                .canonicalize()
                .unwrap_or_else(|_| path.clone())
                .to_string_lossy()
                .into_owned();

            debug!("candidate {} at {}", name, timestamp);
            set.add(CandidateFile::new(name, timestamp, locator));
        }
    }

    Ok(set)
}

fn has_allowed_extension(path: &Path, extensions: &[&str]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| {
            let lower = e.to_ascii_lowercase();
            extensions.iter().any(|allowed| *allowed == lower)
        })
        .unwrap_or(false)
}
