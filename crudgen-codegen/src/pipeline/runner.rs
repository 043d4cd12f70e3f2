//! Pipeline orchestrator.

use crudgen_manifest::Workflow;
use eyre::Result;
use tracing::{debug, debug_span};

use super::{
    CompilationContext, Phase, PhaseInfo,
    phases::{ResolvePhase, ValidatePhase},
};

/// Runs validate → resolve, followed by any extra phases.
///
/// The pipeline stops after the first phase that leaves an error diagnostic
/// in the context; callers inspect [`CompilationContext::has_errors`].
///
/// # Example
///
/// ```ignore
/// let ctx = Pipeline::new().run(&workflow)?;
/// if ctx.has_errors() {
///     return Err(CompileError::Rejected(ctx.report()));
/// }
/// ```
pub struct Pipeline {
    validate: ValidatePhase,
    phases: Vec<Box<dyn Phase>>,
}

impl Pipeline {
    /// Create a pipeline with the built-in phases.
    pub fn new() -> Self {
        Self {
            validate: ValidatePhase::new(),
            phases: Vec::new(),
        }
    }

    /// Replace the validate phase (e.g., with a custom lint set).
    pub fn with_validate(mut self, validate: ValidatePhase) -> Self {
        self.validate = validate;
        self
    }

    /// Add a phase to run after the built-in phases.
    pub fn phase(mut self, phase: impl Phase + 'static) -> Self {
        self.phases.push(Box::new(phase));
        self
    }

    /// Names of all phases, in execution order.
    pub fn phase_names(&self) -> Vec<&'static str> {
        [self.validate.name(), ResolvePhase.name()]
            .into_iter()
            .chain(self.phases.iter().map(|p| p.name()))
            .collect()
    }

    /// Run the pipeline on a workflow.
    ///
    /// # Errors
    ///
    /// Returns an error only if a phase fails internally.
    pub fn run<'a>(&self, workflow: &'a Workflow) -> Result<CompilationContext<'a>> {
        self.run_observed(workflow, |_| {})
    }

    /// Run the pipeline, calling `observer` before each phase starts.
    pub fn run_observed<'a>(
        &self,
        workflow: &'a Workflow,
        mut observer: impl FnMut(&PhaseInfo),
    ) -> Result<CompilationContext<'a>> {
        let mut ctx = CompilationContext::new(workflow);

        let builtin: [&dyn Phase; 2] = [&self.validate, &ResolvePhase];
        for phase in builtin {
            if !run_phase(phase, &mut ctx, &mut observer)? {
                return Ok(ctx);
            }
        }

        for phase in &self.phases {
            if !run_phase(phase.as_ref(), &mut ctx, &mut observer)? {
                return Ok(ctx);
            }
        }

        Ok(ctx)
    }
}

/// Run a single phase. Returns `false` when the pipeline should stop.
fn run_phase(
    phase: &dyn Phase,
    ctx: &mut CompilationContext<'_>,
    observer: &mut impl FnMut(&PhaseInfo),
) -> Result<bool> {
    observer(&phase.info());
    let _span = debug_span!("phase", name = phase.name()).entered();
    phase.run(ctx)?;

    if ctx.has_errors() {
        debug!(
            errors = ctx.error_count(),
            "phase reported errors, stopping pipeline"
        );
        return Ok(false);
    }

    Ok(true)
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
