//! Compilation pipeline for the crudgen workflow compiler.
//!
//! This crate turns a parsed workflow into generated artifacts and owns
//! everything that is independent of the target stack.
//!
//! # Module Organization
//!
//! - [`pipeline`] - Validation lints, relation resolution and diagnostics
//! - [`compiler`] - Orchestration and materialization (Compiler, CompileError, etc.)
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`generation`] - Output management (FileRegistry, FileEntry, etc.)
//! - [`language`] - Backend abstractions (LanguageCodegen, TypeMapper, etc.)
//! - [`testing`] - Test utilities (feature-gated)

pub mod builder;
pub mod compiler;
pub mod generation;
pub mod language;
pub mod pipeline;

#[cfg(any(test, feature = "testing"))]
pub mod testing;
