//! Core utilities and types for the crudgen workflow compiler.
//!
//! This crate provides the naming engine shared by every generator and the
//! field, rule and cardinality tags that make up an entity definition.

mod file;
mod rule;
mod types;
mod utils;

// File operations
pub use file::{File, GeneratedFile, write_file, write_new_file};
// Fundamental types
pub use rule::{Bound, RuleRequirement, ValidationRule};
pub use types::{Cardinality, FieldType};
// Naming engine
pub use utils::{capitalize, pluralize, to_camel_case, to_kebab_case, to_snake_case};
