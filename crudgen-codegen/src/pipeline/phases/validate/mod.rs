//! Validate phase - runs lints on the workflow.

mod lint;
pub mod lints;

use crudgen_manifest::Workflow;
use eyre::Result;
pub use lint::{Lint, LintInfo};
pub use lints::{
    DuplicateNameLint, DuplicateRelationLint, EntityCountLint, FieldCollisionLint, IdentifierLint,
    ManyToManyParentLint, OwnershipCycleLint, RelationTargetLint, RuleCompatibilityLint,
};
use tracing::debug;

use crate::pipeline::{CompilationContext, Diagnostic, Phase, ValidationReport};

/// Phase that validates the workflow using configurable lints.
///
/// All lints always run, so one pass reports every problem.
pub struct ValidatePhase {
    lints: Vec<Box<dyn Lint>>,
}

impl ValidatePhase {
    /// Create a validate phase with the default lints, in reporting order.
    pub fn new() -> Self {
        Self {
            lints: vec![
                Box::new(EntityCountLint),
                Box::new(IdentifierLint),
                Box::new(DuplicateNameLint),
                Box::new(RelationTargetLint),
                Box::new(DuplicateRelationLint),
                Box::new(RuleCompatibilityLint),
                Box::new(FieldCollisionLint),
                Box::new(OwnershipCycleLint),
                Box::new(ManyToManyParentLint),
            ],
        }
    }

    /// Create a validate phase with no lints.
    pub fn empty() -> Self {
        Self { lints: Vec::new() }
    }

    pub fn with_lint(mut self, lint: impl Lint + 'static) -> Self {
        self.lints.push(Box::new(lint));
        self
    }

    pub fn lint_names(&self) -> Vec<&'static str> {
        self.lints.iter().map(|l| l.name()).collect()
    }

    pub fn lint_info(&self) -> Vec<LintInfo> {
        self.lints.iter().map(|l| l.info()).collect()
    }

    /// Run every lint and collect the diagnostics.
    pub fn check(&self, workflow: &Workflow) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        for lint in &self.lints {
            let before = diagnostics.len();
            lint.check(workflow, &mut diagnostics);
            if diagnostics.len() > before {
                debug!(
                    lint = lint.name(),
                    found = diagnostics.len() - before,
                    "lint reported diagnostics"
                );
            }
        }
        diagnostics
    }
}

impl Default for ValidatePhase {
    fn default() -> Self {
        Self::new()
    }
}

impl Phase for ValidatePhase {
    fn name(&self) -> &'static str {
        "validate"
    }

    fn description(&self) -> &'static str {
        "Check workflow integrity and collect diagnostics"
    }

    fn run(&self, ctx: &mut CompilationContext<'_>) -> Result<()> {
        let diagnostics = self.check(ctx.workflow);
        ctx.diagnostics.extend(diagnostics);
        Ok(())
    }
}

/// Validate a workflow with the default lints.
pub fn validate(workflow: &Workflow) -> ValidationReport {
    ValidationReport::new(ValidatePhase::new().check(workflow))
}
