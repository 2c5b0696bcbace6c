//! Idempotent creation of manifest entries beneath a project root.
//!
//! Every operation is create-if-absent. Existing paths are reported as
//! [`Outcome::AlreadyExists`] and never modified, so a run can be repeated
//! against a partially or fully populated root without losing user edits.

mod error;
mod plan;
pub mod render;

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::models::{validate_relative, EntryKind, Manifest, ManifestEntry, Outcome, Report};

pub use error::*;

/// Creates manifest entries beneath a fixed project root.
///
/// Paths are always joined onto `root`; the process working directory is
/// never changed.
#[derive(Debug, Clone)]
pub struct Scaffolder {
    root: PathBuf,
}

impl Scaffolder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Create the project root (and its parents) if absent.
    pub fn ensure_root(&self) -> Result<Outcome, ScaffoldError> {
        create_dir_if_absent(&self.root)
    }

    /// Create `path` and any missing parents beneath the root.
    ///
    /// Anything already at `path`, whatever its type, counts as present.
    pub fn ensure_directory(&self, path: impl AsRef<Path>) -> Result<Outcome, ScaffoldError> {
        let path = path.as_ref();
        validate_relative(path)?;
        create_dir_if_absent(&self.root.join(path))
    }

    /// Write `content` to `path` beneath the root unless something is already there.
    ///
    /// Missing parent directories are created. The content is written verbatim.
    pub fn ensure_file(
        &self,
        path: impl AsRef<Path>,
        content: &str,
    ) -> Result<Outcome, ScaffoldError> {
        let path = path.as_ref();
        validate_relative(path)?;
        let target = self.root.join(path);

        if exists(&target)? {
            return Ok(Outcome::AlreadyExists);
        }

        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).map_err(|source| ScaffoldError::CreateDirectory {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        // create_new refuses to follow or replace anything that appeared since the check
        let file = match OpenOptions::new().write(true).create_new(true).open(&target) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                return Ok(Outcome::AlreadyExists)
            }
            Err(source) => {
                return Err(ScaffoldError::WriteFile {
                    path: target,
                    source,
                })
            }
        };
        write_or_remove(file, &target, content.as_bytes())?;

        Ok(Outcome::Created)
    }

    /// Ensure a single manifest entry.
    pub fn ensure(&self, entry: &ManifestEntry) -> Result<Outcome, ScaffoldError> {
        entry.validate()?;
        match entry.kind {
            EntryKind::Directory => self.ensure_directory(&entry.path),
            EntryKind::File => self.ensure_file(&entry.path, &entry.content),
        }
    }

    /// Ensure the root, then every entry in manifest order.
    ///
    /// Stops at the first error. Entries processed before it are kept on disk
    /// and returned in the failure's partial report.
    pub fn run(&self, manifest: &Manifest) -> Result<Report, RunFailure> {
        tracing::info!(
            "Scaffolding {} entries into {}",
            manifest.len(),
            self.root.display()
        );

        let root_outcome = self.ensure_root().map_err(|source| RunFailure {
            report: None,
            path: self.root.clone(),
            source,
        })?;
        tracing::debug!(outcome = root_outcome.as_str(), "project root {}", self.root.display());

        let mut report = Report::new(&self.root, root_outcome);
        for entry in manifest.entries() {
            match self.ensure(entry) {
                Ok(outcome) => {
                    tracing::debug!(
                        kind = entry.kind.as_str(),
                        outcome = outcome.as_str(),
                        "{}",
                        entry.path.display()
                    );
                    report.record(entry, outcome);
                }
                Err(source) => {
                    tracing::error!("Failed on {}: {}", entry.path.display(), source);
                    return Err(RunFailure {
                        report: Some(report),
                        path: entry.path.clone(),
                        source,
                    });
                }
            }
        }

        tracing::info!(
            "Scaffold complete: {} created, {} already existed",
            report.created(),
            report.already_existed()
        );
        Ok(report)
    }

    /// Report what [`Scaffolder::run`] would do without touching the filesystem.
    ///
    /// Entries are predicted in order against the disk plus everything earlier
    /// entries would create, so the report and any failure match a real run.
    pub fn plan(&self, manifest: &Manifest) -> Result<Report, RunFailure> {
        let root_outcome = presence(&self.root).map_err(|source| RunFailure {
            report: None,
            path: self.root.clone(),
            source,
        })?;

        let mut planner = plan::Planner::new(&self.root, root_outcome);
        let mut report = Report::new(&self.root, root_outcome);
        for entry in manifest.entries() {
            match planner.predict(entry) {
                Ok(outcome) => report.record(entry, outcome),
                Err(source) => {
                    return Err(RunFailure {
                        report: Some(report),
                        path: entry.path.clone(),
                        source,
                    })
                }
            }
        }
        Ok(report)
    }
}

/// Run `manifest` against `root` with a fresh [`Scaffolder`].
pub fn run(manifest: &Manifest, root: impl Into<PathBuf>) -> Result<Report, RunFailure> {
    Scaffolder::new(root).run(manifest)
}

fn create_dir_if_absent(path: &Path) -> Result<Outcome, ScaffoldError> {
    if exists(path)? {
        return Ok(Outcome::AlreadyExists);
    }
    fs::create_dir_all(path).map_err(|source| ScaffoldError::CreateDirectory {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Outcome::Created)
}

/// Write `content` into a file this run just created.
///
/// A failed write removes the file so a later run writes it in full.
fn write_or_remove(
    mut file: impl Write,
    target: &Path,
    content: &[u8],
) -> Result<(), ScaffoldError> {
    let result = file.write_all(content).and_then(|()| file.flush());
    drop(file);

    result.map_err(|source| {
        if let Err(e) = fs::remove_file(target) {
            tracing::warn!("Could not remove partial file {}: {}", target.display(), e);
        }
        ScaffoldError::WriteFile {
            path: target.to_path_buf(),
            source,
        }
    })
}

/// The outcome ensuring `path` would have right now.
fn presence(path: &Path) -> Result<Outcome, ScaffoldError> {
    Ok(if exists(path)? {
        Outcome::AlreadyExists
    } else {
        Outcome::Created
    })
}

/// Whether any filesystem entry, including a dangling symlink, sits at `path`.
fn exists(path: &Path) -> Result<bool, ScaffoldError> {
    match fs::symlink_metadata(path) {
        Ok(_) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        // a file where a parent directory should be; creation will report it
        Err(e) if e.kind() == io::ErrorKind::NotADirectory => Ok(false),
        Err(source) => Err(ScaffoldError::Inspect {
            path: path.to_path_buf(),
            source,
        }),
    }
}
