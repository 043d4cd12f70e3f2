//! Report data structures for commands.
//!
//! Commands build reports, then render them to the terminal or as JSON.

mod check;
mod compile;
mod output;

pub use check::{CheckReport, EntitySummary};
pub use compile::{CompileReport, CompileResult, PreviewFile};
#[cfg(test)]
pub use output::BufferOutput;
pub use output::{OutputFormat, emit};
