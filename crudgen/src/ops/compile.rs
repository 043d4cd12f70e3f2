//! Compile operation - generate the project.

use crudgen_codegen::compiler::{CompileError, CompileOptions, Compiler};
use crudgen_codegen_express::ExpressGenerator;
use crudgen_manifest::Workflow;
use tracing::debug;

use crate::reports::{CompileReport, CompileResult, PreviewFile};

pub struct CompileRequest<'a> {
    pub workflow: &'a Workflow,
    pub options: CompileOptions,
    /// Render in memory without writing.
    pub dry_run: bool,
}

/// Compile the workflow with the Express generator.
pub fn compile(request: CompileRequest<'_>) -> Result<CompileReport, CompileError> {
    debug!(options = ?request.options, dry_run = request.dry_run, "compiling");
    let compiler = Compiler::new(ExpressGenerator::new(), request.options);

    if request.dry_run {
        let preview = compiler.preview(request.workflow)?;
        return Ok(CompileReport {
            project: preview.resolved.display_name.clone(),
            entity_count: preview.resolved.entities.len(),
            warnings: preview.report.warnings().cloned().collect(),
            result: CompileResult::Preview {
                files: preview
                    .files
                    .into_iter()
                    .map(|entry| PreviewFile {
                        path: entry.path,
                        category: entry.category.as_str(),
                        content: entry.content,
                    })
                    .collect(),
            },
        });
    }

    let project = compiler.compile(request.workflow)?;
    Ok(CompileReport {
        project: project.resolved.display_name.clone(),
        entity_count: project.resolved.entities.len(),
        warnings: project.report.warnings().cloned().collect(),
        result: CompileResult::Written {
            root: project.root,
            container: project.container,
            files: project.files,
        },
    })
}
