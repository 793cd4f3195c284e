use crate::core::record::{RecordId, RecordSet, UnresolvedRecord};
use crate::io::ReconError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One record in a journal export.
///
/// Matches the shape the journal database dumps: the id and creation
/// time are always present, the symbol is carried for diagnostics, and
/// `screenshot` is the attachment locator (absent for unresolved
/// records, filled in by the output consumer on match).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordEntry {
    pub id: String,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub screenshot: Option<String>,
}

/// A journal export file: the system of record this tool reads from and
/// writes back to.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecordExport {
    pub records: Vec<RecordEntry>,
}

impl RecordExport {
    /// Records lacking an attachment, as matcher input.
    pub fn unresolved(&self) -> RecordSet {
        self.records
            .iter()
            .filter(|e| e.screenshot.is_none())
            .map(|e| {
                let record = UnresolvedRecord::new(RecordId::new(&e.id), e.created_at);
                match &e.symbol {
                    Some(symbol) => record.with_label(symbol),
                    None => record,
                }
            })
            .collect()
    }

    /// Look up an entry by record id.
    pub fn entry_mut(&mut self, id: &RecordId) -> Option<&mut RecordEntry> {
        self.records.iter_mut().find(|e| e.id == id.as_str())
    }
}

/// Load a journal export from a JSON file.
pub fn load_export(path: &Path) -> Result<RecordExport, ReconError> {
    let content = fs::read_to_string(path).map_err(|e| ReconError::io(path, e))?;
    serde_json::from_str(&content).map_err(|e| ReconError::json(path, e))
}

/// Write a journal export back to disk.
pub fn save_export(export: &RecordExport, path: &Path) -> Result<(), ReconError> {
    let json =
        serde_json::to_string_pretty(export).map_err(|e| ReconError::json(path, e))?;
    fs::write(path, json).map_err(|e| ReconError::io(path, e))
}
