use std::{io, path::PathBuf};

use crate::pipeline::ValidationReport;

/// Why a compilation produced no project.
#[derive(Debug, thiserror::Error)]
pub enum CompileError {
    /// The workflow failed validation. Nothing was generated or written.
    #[error("workflow rejected with {} error(s)", .0.error_count())]
    Rejected(ValidationReport),

    /// Writing the generated files failed. Partial output was removed.
    #[error("failed to write generated output to '{}'", .path.display())]
    Materialize {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A generator or phase defect. Not caused by the input.
    #[error("internal compiler error: {0}")]
    Internal(String),
}

impl CompileError {
    pub(crate) fn internal(error: eyre::Report) -> Self {
        CompileError::Internal(format!("{:#}", error))
    }

    /// The validation report, when the workflow was rejected.
    pub fn report(&self) -> Option<&ValidationReport> {
        match self {
            CompileError::Rejected(report) => Some(report),
            _ => None,
        }
    }
}
