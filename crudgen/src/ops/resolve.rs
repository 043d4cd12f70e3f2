//! Resolve operation - dump the resolved model.

use crudgen_codegen::pipeline::{Pipeline, ValidationReport};
use crudgen_ir::ResolvedWorkflow;
use eyre::{Context, Result};

use crate::workflow_file::WorkflowFile;

pub enum Resolution {
    Resolved(ResolvedWorkflow),
    Rejected(ValidationReport),
}

pub fn resolve(file: &WorkflowFile) -> Result<Resolution> {
    let mut ctx = Pipeline::new()
        .run(&file.workflow)
        .wrap_err("resolution failed")?;

    if ctx.has_errors() {
        return Ok(Resolution::Rejected(ctx.report()));
    }
    Ok(Resolution::Resolved(ctx.take_resolved()?))
}
