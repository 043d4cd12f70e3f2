//! A workflow together with the JSON it was parsed from.

use std::path::{Path, PathBuf};

use crudgen_codegen::pipeline::Diagnostic;
use crudgen_manifest::{Error, Workflow, find_name_span};

pub struct WorkflowFile {
    pub path: PathBuf,
    pub source: String,
    pub workflow: Workflow,
}

impl WorkflowFile {
    pub fn open(path: &Path) -> crudgen_manifest::Result<Self> {
        let source = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        let workflow = Workflow::parse_with_filename(&source, &path.display().to_string())?;

        Ok(Self {
            path: path.to_path_buf(),
            source,
            workflow,
        })
    }

    /// Print each error as a source report pointing at the entity it concerns.
    pub fn print_errors<'a>(&self, diagnostics: impl IntoIterator<Item = &'a Diagnostic>) {
        let filename = self.path.display().to_string();
        for diagnostic in diagnostics {
            if !diagnostic.severity.is_error() {
                continue;
            }
            let span = diagnostic
                .location
                .as_ref()
                .and_then(|location| location.entity_name())
                .and_then(|entity| find_name_span(&self.source, entity));
            let error = Error::validation_at(
                format!("[{}] {}", diagnostic.code, diagnostic.message),
                &self.source,
                &filename,
                span,
            );
            eprintln!("{:?}", miette::Report::new(*error));
        }
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_open_keeps_source() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("workflow.json");
        std::fs::write(&path, crudgen_codegen::testing::SHOP_JSON).unwrap();

        let file = WorkflowFile::open(&path).unwrap();
        assert_eq!(file.source, crudgen_codegen::testing::SHOP_JSON);
        assert_eq!(file.workflow.entities.len(), 2);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let err = WorkflowFile::open(&dir.path().join("nope.json")).err().unwrap();
        assert!(matches!(*err, Error::Io { .. }));
    }
}
