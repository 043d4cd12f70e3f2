//! Compilation context passed through pipeline phases.

use crudgen_ir::ResolvedWorkflow;
use crudgen_manifest::Workflow;
use eyre::{Result, eyre};

use super::{Diagnostic, ValidationReport};

/// State carried through all pipeline phases.
///
/// The workflow is borrowed and never mutated; phases add diagnostics and
/// the resolved model.
#[derive(Debug)]
pub struct CompilationContext<'a> {
    pub workflow: &'a Workflow,
    /// Populated by the resolve phase.
    pub resolved: Option<ResolvedWorkflow>,
    pub diagnostics: Vec<Diagnostic>,
}

impl<'a> CompilationContext<'a> {
    pub fn new(workflow: &'a Workflow) -> Self {
        Self {
            workflow,
            resolved: None,
            diagnostics: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_error())
    }

    pub fn has_warnings(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_warning())
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity.is_error())
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity.is_warning())
            .count()
    }

    pub fn add_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Snapshot of the diagnostics collected so far.
    pub fn report(&self) -> ValidationReport {
        ValidationReport::new(self.diagnostics.clone())
    }

    /// Take the resolved workflow out of the context.
    pub fn take_resolved(&mut self) -> Result<ResolvedWorkflow> {
        self.resolved
            .take()
            .ok_or_else(|| eyre!("resolved workflow not set - did the resolve phase run?"))
    }
}
