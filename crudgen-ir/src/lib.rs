//! Resolved workflow model for the crudgen compiler.
//!
//! The resolver turns a validated [`Workflow`](crudgen_manifest::Workflow)
//! into a [`ResolvedWorkflow`]: every relation is expanded into concrete
//! fields on both participating entities. Generators only ever read these
//! types.
//!
//! # Architecture
//!
//! ```text
//! workflow.json → crudgen-manifest (parsing) → validate → resolve → crudgen-ir → generators
//! ```

mod entity;
mod relation;
mod workflow;

pub use entity::ResolvedEntity;
pub use relation::{FieldOrigin, RelationField, RelationKind};
pub use workflow::ResolvedWorkflow;
