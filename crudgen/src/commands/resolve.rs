use std::path::PathBuf;

use clap::Args;
use crudgen_core::write_file;
use eyre::{Context, Result};

use super::UnwrapOrExit;
use crate::{
    ops::{self, Resolution},
    workflow_file::WorkflowFile,
};

#[derive(Args)]
pub struct ResolveCommand {
    /// Path to the workflow JSON file
    pub workflow: PathBuf,

    /// Write the JSON to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl ResolveCommand {
    pub fn run(&self) -> Result<()> {
        let file = WorkflowFile::open(&self.workflow).unwrap_or_exit();

        let resolved = match ops::resolve(&file)? {
            Resolution::Resolved(resolved) => resolved,
            Resolution::Rejected(report) => {
                file.print_errors(&report.diagnostics);
                std::process::exit(1);
            }
        };

        let json = serde_json::to_string_pretty(&resolved)?;
        match &self.output {
            Some(path) => {
                write_file(path, &format!("{}\n", json))
                    .wrap_err_with(|| format!("failed to write '{}'", path.display()))?;
                println!("Wrote {}", path.display());
            }
            None => println!("{}", json),
        }
        Ok(())
    }
}
