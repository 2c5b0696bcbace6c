use std::fs;
use std::path::{Component, Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::scaffold::ScaffoldError;

/// What a manifest entry creates.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    Directory,
    File,
}

impl EntryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Directory => "directory",
            Self::File => "file",
        }
    }
}

/// A single directory or file to create beneath the project root.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ManifestEntry {
    /// Path relative to the project root.
    pub path: PathBuf,
    pub kind: EntryKind,
    /// File payload, written verbatim. Always empty for directories.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub content: String,
}

impl ManifestEntry {
    pub fn directory(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            kind: EntryKind::Directory,
            content: String::new(),
        }
    }

    pub fn file(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            kind: EntryKind::File,
            content: content.into(),
        }
    }

    /// Check that the entry stays beneath the root and is well formed.
    pub fn validate(&self) -> Result<(), ScaffoldError> {
        validate_relative(&self.path)?;
        if self.kind == EntryKind::Directory && !self.content.is_empty() {
            return Err(ScaffoldError::InvalidPath {
                path: self.path.clone(),
                reason: "directory entries cannot carry content",
            });
        }
        Ok(())
    }
}

/// Reject paths that are empty, absolute, or able to climb out of the root.
pub(crate) fn validate_relative(path: &Path) -> Result<(), ScaffoldError> {
    let invalid = |reason| ScaffoldError::InvalidPath {
        path: path.to_path_buf(),
        reason,
    };

    if path.as_os_str().is_empty() {
        return Err(invalid("path is empty"));
    }

    for component in path.components() {
        match component {
            Component::Normal(_) | Component::CurDir => {}
            Component::ParentDir => return Err(invalid("path escapes the project root")),
            Component::RootDir | Component::Prefix(_) => {
                return Err(invalid("path must be relative to the project root"))
            }
        }
    }

    Ok(())
}

/// An ordered list of entries driving a scaffold run.
///
/// Order only matters for reporting: directories are created recursively and
/// files create their own parents, so any permutation yields the same tree.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct Manifest {
    entries: Vec<ManifestEntry>,
}

impl Manifest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a directory entry.
    pub fn dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.entries.push(ManifestEntry::directory(path));
        self
    }

    /// Append a file entry with the given content.
    pub fn file(mut self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        self.entries.push(ManifestEntry::file(path, content));
        self
    }

    /// Append an empty placeholder file.
    pub fn placeholder(self, path: impl Into<PathBuf>) -> Self {
        self.file(path, String::new())
    }

    pub fn entries(&self) -> &[ManifestEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn validate(&self) -> Result<(), ScaffoldError> {
        self.entries.iter().try_for_each(ManifestEntry::validate)
    }

    /// Parse and validate a manifest from its JSON form.
    pub fn from_json(json: &str) -> Result<Self, ScaffoldError> {
        let manifest: Self = serde_json::from_str(json).map_err(ScaffoldError::ParseManifest)?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Read a JSON manifest from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ScaffoldError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ScaffoldError::ReadManifest {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn to_json_pretty(&self) -> Result<String, ScaffoldError> {
        serde_json::to_string_pretty(self).map_err(ScaffoldError::Serialize)
    }
}

impl FromIterator<ManifestEntry> for Manifest {
    fn from_iter<I: IntoIterator<Item = ManifestEntry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Manifest {
    type Item = ManifestEntry;
    type IntoIter = std::vec::IntoIter<ManifestEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_parent_components() {
        let entry = ManifestEntry::file("src/../../etc/passwd", "x");
        assert!(matches!(
            entry.validate(),
            Err(ScaffoldError::InvalidPath { .. })
        ));
    }

    #[test]
    fn test_rejects_absolute_paths() {
        let entry = ManifestEntry::directory("/tmp/outside");
        assert!(entry.validate().is_err());
    }

    #[test]
    fn test_rejects_empty_path() {
        assert!(ManifestEntry::directory("").validate().is_err());
    }

    #[test]
    fn test_rejects_directory_content() {
        let mut entry = ManifestEntry::directory("src");
        entry.content = "oops".to_string();
        assert!(entry.validate().is_err());
    }

    #[test]
    fn test_accepts_nested_relative_paths() {
        let manifest = Manifest::new()
            .dir("src/pages/blog")
            .file("./src/pages/blog/index.astro", "---\n---\n");
        assert!(manifest.validate().is_ok());
    }

    #[test]
    fn test_json_omits_empty_content() {
        let manifest = Manifest::new().dir("public").placeholder("public/favicon.ico");
        let json = manifest.to_json_pretty().unwrap();
        assert!(!json.contains("content"));
        assert!(json.contains("\"kind\": \"directory\""));
    }

    #[test]
    fn test_from_json_defaults_content() {
        let manifest =
            Manifest::from_json(r#"[{"path": "src/a.txt", "kind": "file"}]"#).unwrap();
        assert_eq!(manifest.entries()[0].content, "");
        assert_eq!(manifest.entries()[0].kind, EntryKind::File);
    }

    #[test]
    fn test_from_json_validates() {
        let result = Manifest::from_json(r#"[{"path": "../x", "kind": "directory"}]"#);
        assert!(matches!(result, Err(ScaffoldError::InvalidPath { .. })));
    }

    #[test]
    fn test_from_json_rejects_unknown_kind() {
        let result = Manifest::from_json(r#"[{"path": "x", "kind": "symlink"}]"#);
        assert!(matches!(result, Err(ScaffoldError::ParseManifest(_))));
    }
}
