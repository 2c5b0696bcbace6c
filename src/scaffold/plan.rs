//! Read-only prediction of a scaffold run.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use super::{exists, ScaffoldError};
use crate::models::{EntryKind, ManifestEntry, Outcome};

/// Tracks what a run would have created so far, on top of the disk state.
pub(super) struct Planner<'a> {
    root: &'a Path,
    /// False when the root itself is absent, so nothing beneath it can exist.
    root_on_disk: bool,
    created: HashMap<PathBuf, EntryKind>,
}

impl<'a> Planner<'a> {
    pub(super) fn new(root: &'a Path, root_outcome: Outcome) -> Self {
        let mut created = HashMap::new();
        if root_outcome == Outcome::Created {
            created.insert(root.to_path_buf(), EntryKind::Directory);
        }
        Self {
            root,
            root_on_disk: root_outcome == Outcome::AlreadyExists,
            created,
        }
    }

    /// The outcome, or error, `Scaffolder::ensure` would produce for `entry`.
    pub(super) fn predict(&mut self, entry: &ManifestEntry) -> Result<Outcome, ScaffoldError> {
        entry.validate()?;

        let relative: PathBuf = entry
            .path
            .components()
            .filter(|c| !matches!(c, Component::CurDir))
            .collect();
        if relative.as_os_str().is_empty() {
            return Ok(Outcome::AlreadyExists);
        }

        let target = self.root.join(&relative);
        if self.created.contains_key(&target) || (self.root_on_disk && exists(&target)?) {
            return Ok(Outcome::AlreadyExists);
        }

        let ancestors: Vec<PathBuf> = target
            .ancestors()
            .skip(1)
            .take_while(|a| a.starts_with(self.root))
            .map(Path::to_path_buf)
            .collect();

        for ancestor in &ancestors {
            if self.is_non_directory(ancestor)? {
                let directory = match entry.kind {
                    EntryKind::Directory => target.clone(),
                    EntryKind::File => target.parent().unwrap_or(self.root).to_path_buf(),
                };
                return Err(ScaffoldError::CreateDirectory {
                    path: directory,
                    source: io::Error::new(
                        io::ErrorKind::NotADirectory,
                        format!("{} is not a directory", ancestor.display()),
                    ),
                });
            }
        }

        for ancestor in ancestors {
            self.created.entry(ancestor).or_insert(EntryKind::Directory);
        }
        self.created.insert(target, entry.kind);
        Ok(Outcome::Created)
    }

    fn is_non_directory(&self, path: &Path) -> Result<bool, ScaffoldError> {
        if let Some(kind) = self.created.get(path) {
            return Ok(*kind == EntryKind::File);
        }
        if !self.root_on_disk {
            return Ok(false);
        }
        match fs::metadata(path) {
            Ok(metadata) => Ok(!metadata.is_dir()),
            Err(e)
                if matches!(
                    e.kind(),
                    io::ErrorKind::NotFound | io::ErrorKind::NotADirectory
                ) =>
            {
                Ok(false)
            }
            Err(source) => Err(ScaffoldError::Inspect {
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}
