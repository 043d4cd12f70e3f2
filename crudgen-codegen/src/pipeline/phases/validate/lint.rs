//! Lint trait for workflow validation.

use crudgen_manifest::Workflow;

use crate::pipeline::Diagnostic;

/// Information about a lint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintInfo {
    pub name: &'static str,
    pub description: &'static str,
}

/// One independent check over the workflow.
///
/// Lints never stop at the first problem; each pushes every diagnostic it
/// finds.
pub trait Lint: Send + Sync {
    /// The name of this lint, also used as the diagnostic code.
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    /// Check the workflow and add any diagnostics.
    fn check(&self, workflow: &Workflow, diagnostics: &mut Vec<Diagnostic>);

    fn info(&self) -> LintInfo {
        LintInfo {
            name: self.name(),
            description: self.description(),
        }
    }
}
