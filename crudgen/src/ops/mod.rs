//! Core operations.
//!
//! This module contains the business logic for crudgen commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod compile;
pub mod resolve;

pub use check::check;
pub use compile::{CompileRequest, compile};
pub use resolve::{Resolution, resolve};
