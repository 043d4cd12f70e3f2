//! Compile command report data structures.

use std::path::PathBuf;

use crudgen_codegen::pipeline::Diagnostic;
use serde::Serialize;

use super::{
    check::describe,
    output::{Output, Report},
};

/// Report data from a compilation.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompileReport {
    pub project: String,
    pub entity_count: usize,
    /// Warnings only; a rejected workflow never produces a report.
    pub warnings: Vec<Diagnostic>,
    pub result: CompileResult,
}

#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum CompileResult {
    /// Files were written to disk.
    Written {
        root: PathBuf,
        container: PathBuf,
        files: Vec<PathBuf>,
    },
    /// Dry-run preview.
    Preview { files: Vec<PreviewFile> },
}

/// A file in preview mode.
#[derive(Debug, Serialize)]
pub struct PreviewFile {
    pub path: PathBuf,
    pub category: &'static str,
    pub content: String,
}

impl Report for CompileReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(&describe(warning));
        }

        match &self.result {
            CompileResult::Written { root, files, .. } => {
                out.preformatted(&format!(
                    "{} ({} entities)",
                    self.project, self.entity_count
                ));
                out.newline();
                out.key_value("Generated", &root.display().to_string());
                out.section(&format!("Files ({})", files.len()));
                for file in files {
                    out.added_item(&file.display().to_string());
                }
            }
            CompileResult::Preview { files } => {
                for file in files {
                    out.divider(&format!("{} [{}]", file.path.display(), file.category));
                    out.preformatted(&file.content);
                }
                out.divider("Summary");
                out.preformatted(&format!("{} files would be generated", files.len()));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::BufferOutput;

    #[test]
    fn test_written_report() {
        let report = CompileReport {
            project: "Shop".into(),
            entity_count: 2,
            warnings: vec![],
            result: CompileResult::Written {
                root: PathBuf::from("output/abc/shop"),
                container: PathBuf::from("output/abc"),
                files: vec![PathBuf::from("prisma/schema.prisma")],
            },
        };

        let mut out = BufferOutput::default();
        report.render(&mut out);
        assert!(out.lines.contains(&"Generated: output/abc/shop".to_string()));
        assert!(out.lines.contains(&"  + prisma/schema.prisma".to_string()));
    }

    #[test]
    fn test_preview_report_json() {
        let report = CompileReport {
            project: "Shop".into(),
            entity_count: 1,
            warnings: vec![],
            result: CompileResult::Preview {
                files: vec![PreviewFile {
                    path: PathBuf::from("src/lib/prisma.ts"),
                    category: "services",
                    content: "export {};\n".into(),
                }],
            },
        };

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["entityCount"], 1);
        assert_eq!(json["result"]["kind"], "preview");
        assert_eq!(json["result"]["files"][0]["category"], "services");

        let mut out = BufferOutput::default();
        report.render(&mut out);
        assert_eq!(out.lines.last().unwrap(), "1 files would be generated");
    }
}
