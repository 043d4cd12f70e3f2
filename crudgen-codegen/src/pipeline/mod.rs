//! Compilation pipeline.
//!
//! A [`Pipeline`] runs explicit phases over a borrowed workflow:
//!
//! - validate: lints collect every problem at once (fail-complete)
//! - resolve: relations are expanded into a [`ResolvedWorkflow`](crudgen_ir::ResolvedWorkflow)
//!
//! Phases share a [`CompilationContext`] that accumulates diagnostics and the
//! resolved model.

mod context;
mod diagnostic;
mod phase;
pub mod phases;
mod report;
mod runner;

pub use context::CompilationContext;
pub use diagnostic::{Diagnostic, Location, Severity};
pub use phase::{Phase, PhaseInfo};
pub use report::ValidationReport;
pub use runner::Pipeline;
