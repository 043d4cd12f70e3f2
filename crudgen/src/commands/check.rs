use std::path::PathBuf;

use clap::Args;
use eyre::Result;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{self, OutputFormat},
    workflow_file::WorkflowFile,
};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to the workflow JSON file
    pub workflow: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t)]
    pub format: OutputFormat,
}

impl CheckCommand {
    pub fn run(&self) -> Result<()> {
        let file = WorkflowFile::open(&self.workflow).unwrap_or_exit();
        let report = ops::check(&file)?;

        if !report.valid && self.format == OutputFormat::Text {
            file.print_errors(&report.diagnostics);
        }
        reports::emit(&report, self.format)?;

        if !report.valid {
            std::process::exit(1);
        }
        Ok(())
    }
}
