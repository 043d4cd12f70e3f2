//! Target-specific abstractions.
//!
//! - [`LanguageCodegen`] - Main trait for generator backends
//! - [`TypeMapper`] - Field type and rule mappings
//! - [`Constraint`] - One validator fragment
//! - [`GenerateOptions`] - Settings threaded from the orchestrator

mod traits;

pub use traits::{Constraint, GenerateOptions, LanguageCodegen, TypeMapper};
