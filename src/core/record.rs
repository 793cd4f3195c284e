use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a journal record.
///
/// Opaque to the matcher: the journal database assigns these (integer
/// primary keys, UUIDs, whatever), and this crate only carries them
/// through to the run report.
///
/// # Examples
///
/// ```
/// use screenshot_recon::core::record::RecordId;
///
/// let a = RecordId::new("trade-1042");
/// let b = RecordId::new("trade-1043");
/// assert_ne!(a, b);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the string representation of this record ID.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for RecordId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// A journal record missing its screenshot attachment.
///
/// Carries the record's creation time, which is the reference point the
/// matcher measures candidate files against. Immutable for the duration
/// of a reconciliation run.
///
/// # Examples
///
/// ```
/// use screenshot_recon::core::record::{RecordId, UnresolvedRecord};
/// use chrono::{TimeZone, Utc};
///
/// let record = UnresolvedRecord::new(
///     RecordId::new("trade-1042"),
///     Utc.with_ymd_and_hms(2026, 3, 14, 9, 30, 0).unwrap(),
/// ).with_label("EURUSD long");
///
/// assert_eq!(record.label(), Some("EURUSD long"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnresolvedRecord {
    /// Identifier assigned by the journal.
    id: RecordId,
    /// When the record was created.
    timestamp: DateTime<Utc>,
    /// Optional display label for logs and reports.
    label: Option<String>,
}

impl UnresolvedRecord {
    /// Create a new unresolved record.
    pub fn new(id: RecordId, timestamp: DateTime<Utc>) -> Self {
        Self {
            id,
            timestamp,
            label: None,
        }
    }

    /// Set a display label (e.g. the traded symbol).
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    // --- Accessors ---

    pub fn id(&self) -> &RecordId {
        &self.id
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

impl fmt::Display for UnresolvedRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.label {
            Some(label) => write!(f, "{} ({})", self.id, label),
            None => write!(f, "{}", self.id),
        }
    }
}

/// A collection of unresolved records to be submitted to the matcher.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecordSet {
    records: Vec<UnresolvedRecord>,
}

impl RecordSet {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    pub fn add(&mut self, record: UnresolvedRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[UnresolvedRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records sorted ascending by timestamp, id as tie-break (the
    /// matcher's processing order).
    ///
    /// The tie-break matters: records created at the same instant must
    /// contest candidates in the same order no matter how the input
    /// collection was assembled.
    pub fn sorted_by_timestamp(&self) -> Vec<UnresolvedRecord> {
        let mut sorted = self.records.clone();
        sorted.sort_by(|a, b| {
            a.timestamp()
                .cmp(&b.timestamp())
                .then_with(|| a.id().cmp(b.id()))
        });
        sorted
    }
}

impl FromIterator<UnresolvedRecord> for RecordSet {
    fn from_iter<T: IntoIterator<Item = UnresolvedRecord>>(iter: T) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}
