//! Workflow input parsing and configuration for the crudgen compiler.
//!
//! A [`Workflow`] is the compilation unit: a project name plus an ordered list
//! of entities. It is deserialized from JSON and never mutated afterwards.
//! [`Config`] holds the optional `crudgen.toml` settings.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod config;
mod error;
mod identifier;
mod workflow;

pub use config::{Config, DEFAULT_PAGE_SIZE, Datasource, GenerateConfig};
pub use error::{Error, Result, find_name_span};
pub use identifier::{
    GENERATED_FIELDS, INFRASTRUCTURE_MEMBERS, IdentifierIssue, RESERVED_WORDS, STORAGE_SCALARS,
    check_identifier, is_generated_field, is_storage_scalar,
};
pub use workflow::{Dimensions, Entity, Features, Position, Property, Relation, Workflow};
