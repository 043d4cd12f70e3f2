//! File registration for declarative code generation.
//!
//! Generators register every artifact here instead of touching the disk.
//! The registry orders files by category and writes them in one pass, so the
//! orchestrator decides when (and whether) anything is materialized.
//!
//! # Example
//!
//! ```ignore
//! let mut registry = FileRegistry::new();
//! registry.register(FileEntry::schema("prisma/schema.prisma", schema.render()))?;
//! registry.register(FileEntry::types("src/types/user.types.ts", types.render()))?;
//!
//! let stats = registry.write_all(&project_root)?;
//! ```

use std::{
    io,
    path::{Path, PathBuf},
};

use crudgen_core::GeneratedFile;
use eyre::{Result, bail};
use serde::Serialize;

/// Category of generated file, determining write order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileCategory {
    /// Storage schema.
    Schema,
    /// Runtime type definitions.
    Types,
    /// Request validators.
    Validators,
    /// Data-access services.
    Services,
    /// HTTP controllers.
    Controllers,
    /// Route declarations and the route index.
    Routes,
}

impl FileCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            FileCategory::Schema => "schema",
            FileCategory::Types => "types",
            FileCategory::Validators => "validators",
            FileCategory::Services => "services",
            FileCategory::Controllers => "controllers",
            FileCategory::Routes => "routes",
        }
    }
}

/// A file to be generated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Path relative to the project root.
    pub path: PathBuf,
    pub content: String,
    pub category: FileCategory,
}

impl FileEntry {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>, category: FileCategory) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            category,
        }
    }

    pub fn schema(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self::new(path, content, FileCategory::Schema)
    }

    pub fn types(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self::new(path, content, FileCategory::Types)
    }

    pub fn validator(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self::new(path, content, FileCategory::Validators)
    }

    pub fn service(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self::new(path, content, FileCategory::Services)
    }

    pub fn controller(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self::new(path, content, FileCategory::Controllers)
    }

    pub fn route(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self::new(path, content, FileCategory::Routes)
    }

    /// Create from a GeneratedFile.
    pub fn from_generated<F: GeneratedFile>(file: &F, category: FileCategory) -> Self {
        Self::new(file.path(), file.render(), category)
    }
}

impl GeneratedFile for FileEntry {
    fn path(&self) -> PathBuf {
        self.path.clone()
    }

    fn render(&self) -> String {
        self.content.clone()
    }
}

/// A write that failed part-way through [`FileRegistry::write_all`].
#[derive(Debug, thiserror::Error)]
#[error("failed to write '{}'", .path.display())]
pub struct WriteFailure {
    /// Absolute path of the file that could not be written.
    pub path: PathBuf,
    /// Relative paths written before the failure.
    pub written: Vec<PathBuf>,
    #[source]
    pub source: io::Error,
}

/// Registry for collecting generated files.
///
/// Files are written in category order:
/// Schema -> Types -> Validators -> Services -> Controllers -> Routes
#[derive(Debug, Default)]
pub struct FileRegistry {
    entries: Vec<FileEntry>,
}

impl FileRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a file entry.
    ///
    /// Two generators claiming the same path is a generator bug.
    pub fn register(&mut self, entry: FileEntry) -> Result<()> {
        if self.contains(&entry.path) {
            bail!("file '{}' registered twice", entry.path.display());
        }
        self.entries.push(entry);
        Ok(())
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.entries.iter().any(|e| e.path == path)
    }

    /// All registered entries, sorted by category (stable within a category).
    pub fn entries(&self) -> impl Iterator<Item = &FileEntry> {
        let mut sorted: Vec<_> = self.entries.iter().collect();
        sorted.sort_by_key(|e| e.category);
        sorted.into_iter()
    }

    pub fn entries_by_category(&self, category: FileCategory) -> impl Iterator<Item = &FileEntry> {
        self.entries.iter().filter(move |e| e.category == category)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Consume the registry, returning the entries in write order.
    pub fn into_entries(mut self) -> Vec<FileEntry> {
        self.entries.sort_by_key(|e| e.category);
        self.entries
    }

    /// Write all files below `base`.
    ///
    /// Files must not exist yet. The first failure stops the run; the error
    /// lists what was already written so the caller can roll back.
    pub fn write_all(&self, base: &Path) -> std::result::Result<WriteStats, WriteFailure> {
        let mut stats = WriteStats::default();

        for entry in self.entries() {
            match entry.write(base) {
                Ok(_) => stats.written.push(entry.path.clone()),
                Err(source) => {
                    return Err(WriteFailure {
                        path: base.join(&entry.path),
                        written: stats.written,
                        source,
                    });
                }
            }
        }

        Ok(stats)
    }
}

/// Statistics from a write operation.
#[derive(Debug, Default)]
pub struct WriteStats {
    /// Relative paths written, in write order.
    pub written: Vec<PathBuf>,
}

impl WriteStats {
    pub fn total(&self) -> usize {
        self.written.len()
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_registry_ordering() {
        let mut registry = FileRegistry::new();

        registry.register(FileEntry::route("src/routes/index.ts", "")).unwrap();
        registry.register(FileEntry::types("src/types/user.types.ts", "")).unwrap();
        registry.register(FileEntry::schema("prisma/schema.prisma", "")).unwrap();
        registry.register(FileEntry::service("src/services/user.service.ts", "")).unwrap();

        let paths: Vec<_> = registry
            .entries()
            .map(|e| e.path.to_string_lossy().into_owned())
            .collect();
        assert_eq!(
            paths,
            vec![
                "prisma/schema.prisma",
                "src/types/user.types.ts",
                "src/services/user.service.ts",
                "src/routes/index.ts",
            ]
        );
    }

    #[test]
    fn test_duplicate_path_rejected() {
        let mut registry = FileRegistry::new();
        registry.register(FileEntry::types("a.ts", "1")).unwrap();
        assert!(registry.register(FileEntry::types("a.ts", "2")).is_err());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_write_all() {
        let temp = TempDir::new().unwrap();
        let mut registry = FileRegistry::new();
        registry.register(FileEntry::schema("prisma/schema.prisma", "schema")).unwrap();
        registry.register(FileEntry::types("src/types/user.types.ts", "types")).unwrap();

        let stats = registry.write_all(temp.path()).unwrap();

        assert_eq!(stats.total(), 2);
        assert_eq!(
            std::fs::read_to_string(temp.path().join("prisma/schema.prisma")).unwrap(),
            "schema"
        );
    }

    #[test]
    fn test_write_all_stops_at_first_failure() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir_all(temp.path().join("src/types")).unwrap();
        std::fs::write(temp.path().join("src/types/user.types.ts"), "existing").unwrap();

        let mut registry = FileRegistry::new();
        registry.register(FileEntry::schema("prisma/schema.prisma", "schema")).unwrap();
        registry.register(FileEntry::types("src/types/user.types.ts", "types")).unwrap();
        registry.register(FileEntry::route("src/routes/index.ts", "routes")).unwrap();

        let err = registry.write_all(temp.path()).unwrap_err();

        assert_eq!(err.path, temp.path().join("src/types/user.types.ts"));
        assert_eq!(err.written, vec![PathBuf::from("prisma/schema.prisma")]);
        assert_eq!(err.source.kind(), io::ErrorKind::AlreadyExists);
        assert!(!temp.path().join("src/routes/index.ts").exists());
        assert_eq!(
            std::fs::read_to_string(temp.path().join("src/types/user.types.ts")).unwrap(),
            "existing"
        );
    }

    #[test]
    fn test_into_entries_sorted() {
        let mut registry = FileRegistry::new();
        registry.register(FileEntry::controller("c.ts", "")).unwrap();
        registry.register(FileEntry::validator("v.ts", "")).unwrap();

        let entries = registry.into_entries();
        assert_eq!(entries[0].category, FileCategory::Validators);
        assert_eq!(entries[1].category, FileCategory::Controllers);
    }
}
