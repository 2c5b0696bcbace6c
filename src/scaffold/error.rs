use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::models::Report;

/// Scaffolding errors.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error("Failed to create directory {}: {source}", path.display())]
    CreateDirectory { path: PathBuf, source: io::Error },

    #[error("Failed to write file {}: {source}", path.display())]
    WriteFile { path: PathBuf, source: io::Error },

    #[error("Failed to inspect {}: {source}", path.display())]
    Inspect { path: PathBuf, source: io::Error },

    #[error("Invalid manifest path {}: {reason}", path.display())]
    InvalidPath {
        path: PathBuf,
        reason: &'static str,
    },

    #[error("Failed to read manifest {}: {source}", path.display())]
    ReadManifest { path: PathBuf, source: io::Error },

    #[error("Failed to parse manifest: {0}")]
    ParseManifest(#[source] serde_json::Error),

    #[error("Failed to serialize: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// A run that aborted part way through.
///
/// Entries recorded in `report` were processed before the failure and remain
/// on disk. Entries after `path` were never attempted. `report` is `None` when
/// the project root itself could not be created.
#[derive(Debug, Error)]
#[error("Scaffold aborted at {}: {source}", path.display())]
pub struct RunFailure {
    pub report: Option<Report>,
    /// Manifest path of the entry that failed, or the root itself.
    pub path: PathBuf,
    #[source]
    pub source: ScaffoldError,
}
