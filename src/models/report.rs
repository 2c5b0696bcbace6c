use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::{EntryKind, ManifestEntry};

/// Result of ensuring a single path.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Created,
    AlreadyExists,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::AlreadyExists => "already_exists",
        }
    }
}

/// One processed manifest entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReportEntry {
    pub path: PathBuf,
    pub kind: EntryKind,
    pub outcome: Outcome,
}

impl ReportEntry {
    pub fn new(entry: &ManifestEntry, outcome: Outcome) -> Self {
        Self {
            path: entry.path.clone(),
            kind: entry.kind,
            outcome,
        }
    }
}

/// Ordered record of a scaffold run.
///
/// Entries appear in manifest order. When a run aborts, the report holds only
/// the entries processed before the failure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Report {
    pub root: PathBuf,
    pub root_outcome: Outcome,
    pub entries: Vec<ReportEntry>,
}

impl Report {
    pub fn new(root: impl Into<PathBuf>, root_outcome: Outcome) -> Self {
        Self {
            root: root.into(),
            root_outcome,
            entries: Vec::new(),
        }
    }

    pub fn record(&mut self, entry: &ManifestEntry, outcome: Outcome) {
        self.entries.push(ReportEntry::new(entry, outcome));
    }

    /// Number of entries created by this run.
    pub fn created(&self) -> usize {
        self.count(Outcome::Created)
    }

    /// Number of entries that were already present.
    pub fn already_existed(&self) -> usize {
        self.count(Outcome::AlreadyExists)
    }

    /// True when the run changed nothing on disk.
    pub fn is_noop(&self) -> bool {
        self.root_outcome == Outcome::AlreadyExists && self.created() == 0
    }

    fn count(&self, outcome: Outcome) -> usize {
        self.entries.iter().filter(|e| e.outcome == outcome).count()
    }
}
