//! Check operation - workflow validation.

use crudgen_codegen::pipeline::Pipeline;
use eyre::{Context, Result};

use crate::{
    reports::{CheckReport, EntitySummary},
    workflow_file::WorkflowFile,
};

/// Validate and resolve the workflow without generating anything.
pub fn check(file: &WorkflowFile) -> Result<CheckReport> {
    let ctx = Pipeline::new()
        .run(&file.workflow)
        .wrap_err("validation failed")?;

    let entities = ctx
        .resolved
        .as_ref()
        .map(|resolved| resolved.entities.iter().map(EntitySummary::from).collect())
        .unwrap_or_default();

    Ok(CheckReport {
        workflow_path: file.path.clone(),
        project: file.workflow.title().to_string(),
        valid: !ctx.has_errors(),
        diagnostics: ctx.diagnostics,
        entities,
    })
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use crudgen_codegen::testing;

    use super::*;

    fn file(workflow: crudgen_manifest::Workflow) -> WorkflowFile {
        WorkflowFile {
            path: PathBuf::from("workflow.json"),
            source: String::new(),
            workflow,
        }
    }

    #[test]
    fn test_valid_shop() {
        let report = check(&file(testing::shop())).unwrap();

        assert!(report.valid);
        assert_eq!(report.entities.len(), 2);
        assert_eq!(report.entities[0].relation_fields, ["orders"]);
        assert_eq!(report.entities[1].relation_fields, ["user"]);
    }

    #[test]
    fn test_invalid_workflow_has_no_entities() {
        let workflow = testing::shop().entity(crudgen_manifest::Entity::new("User"));
        let report = check(&file(workflow)).unwrap();

        assert!(!report.valid);
        assert!(report.entities.is_empty());
        assert_eq!(report.diagnostics.len(), 1);
    }
}
