//! Generated output management.
//!
//! - [`FileRegistry`] - Declarative file registration and ordered writing

mod registry;

pub use registry::{FileCategory, FileEntry, FileRegistry, WriteFailure, WriteStats};
