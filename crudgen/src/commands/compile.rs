use std::path::{Path, PathBuf};

use clap::Args;
use crudgen_codegen::{
    compiler::{CompileError, CompileOptions},
    language::GenerateOptions,
};
use crudgen_manifest::{Config, Datasource};
use eyre::{Context, Result};

use super::UnwrapOrExit;
use crate::{
    ops::{self, CompileRequest},
    reports::{self, OutputFormat},
    workflow_file::WorkflowFile,
};

#[derive(Args)]
pub struct CompileCommand {
    /// Path to the workflow JSON file
    pub workflow: PathBuf,

    /// Path to crudgen.toml (defaults to ./crudgen.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Root directory for output containers (overrides crudgen.toml)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Records per page in list endpoints (overrides crudgen.toml)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub page_size: Option<u32>,

    /// Database provider (overrides crudgen.toml)
    #[arg(long)]
    pub datasource: Option<Datasource>,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t)]
    pub format: OutputFormat,
}

impl CompileCommand {
    pub fn run(&self) -> Result<()> {
        let config = match &self.config {
            Some(path) => Config::open(path),
            None => Config::discover(Path::new(".")),
        }
        .unwrap_or_exit();
        let file = WorkflowFile::open(&self.workflow).unwrap_or_exit();

        let request = CompileRequest {
            workflow: &file.workflow,
            options: self.options(&config),
            dry_run: self.dry_run,
        };

        let report = match ops::compile(request) {
            Ok(report) => report,
            Err(CompileError::Rejected(report)) => {
                file.print_errors(&report.diagnostics);
                std::process::exit(1);
            }
            Err(err) => return Err(err).wrap_err("compilation failed"),
        };

        reports::emit(&report, self.format)
    }

    /// Config file values with command-line overrides applied.
    fn options(&self, config: &Config) -> CompileOptions {
        let generate = &config.generate;
        CompileOptions::new(self.output.clone().unwrap_or_else(|| generate.output_dir.clone()))
            .generate(GenerateOptions {
                page_size: self.page_size.unwrap_or(generate.page_size),
                datasource: self.datasource.unwrap_or(generate.datasource),
            })
    }
}
