use std::{
    io,
    path::{Path, PathBuf},
};

use crudgen_ir::ResolvedWorkflow;

use crate::{generation::FileEntry, pipeline::ValidationReport};

/// A workflow compiled and written to disk.
#[derive(Debug)]
pub struct CompiledProject {
    pub resolved: ResolvedWorkflow,
    /// Project directory, `<container>/<project-kebab>`.
    pub root: PathBuf,
    /// The per-compilation `<output_root>/<uuid>` directory.
    pub container: PathBuf,
    /// Written files, relative to `root`.
    pub files: Vec<PathBuf>,
    /// Validation outcome; holds warnings only.
    pub report: ValidationReport,
}

impl CompiledProject {
    /// Absolute paths of every written file.
    pub fn absolute_paths(&self) -> impl Iterator<Item = PathBuf> + '_ {
        self.files.iter().map(|f| self.root.join(f))
    }

    pub fn contains(&self, relative: impl AsRef<Path>) -> bool {
        self.files.iter().any(|f| f == relative.as_ref())
    }

    /// Delete the container once the output has been handed off.
    pub fn discard(self) -> io::Result<()> {
        std::fs::remove_dir_all(&self.container)
    }
}

/// A workflow compiled in memory only.
#[derive(Debug)]
pub struct Preview {
    pub resolved: ResolvedWorkflow,
    /// Rendered files, ordered by category.
    pub files: Vec<FileEntry>,
    pub report: ValidationReport,
}

impl Preview {
    pub fn file(&self, path: impl AsRef<Path>) -> Option<&FileEntry> {
        self.files.iter().find(|f| f.path == path.as_ref())
    }
}
