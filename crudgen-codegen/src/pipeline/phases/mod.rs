//! Built-in pipeline phases.
//!
//! - [`ValidatePhase`] - runs lints and collects diagnostics
//! - [`ResolvePhase`] - expands relations into the resolved model

mod resolve;
mod validate;

pub use resolve::{ResolvePhase, resolve};
pub use validate::{
    DuplicateNameLint, DuplicateRelationLint, EntityCountLint, FieldCollisionLint, IdentifierLint,
    Lint, LintInfo, ManyToManyParentLint, OwnershipCycleLint, RelationTargetLint,
    RuleCompatibilityLint, ValidatePhase, validate,
};
