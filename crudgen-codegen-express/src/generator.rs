//! Express + Prisma generator.

use crudgen_codegen::{
    generation::{FileCategory, FileEntry, FileRegistry},
    language::{GenerateOptions, LanguageCodegen},
};
use crudgen_ir::ResolvedWorkflow;
use eyre::Result;
use tracing::debug;

use crate::files::{
    ControllerTs, PrismaClientTs, RoutesIndexTs, RoutesTs, SchemaPrisma, ServiceTs, TypesTs,
    ValidatorTs,
};

/// Generates a Prisma schema and an Express CRUD layer for every entity.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExpressGenerator;

impl ExpressGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl LanguageCodegen for ExpressGenerator {
    fn name(&self) -> &'static str {
        "express-prisma"
    }

    fn generate(
        &self,
        workflow: &ResolvedWorkflow,
        options: &GenerateOptions,
        registry: &mut FileRegistry,
    ) -> Result<()> {
        registry.register(FileEntry::from_generated(
            &SchemaPrisma::new(workflow, options.datasource),
            FileCategory::Schema,
        ))?;
        registry.register(FileEntry::from_generated(
            &PrismaClientTs,
            FileCategory::Services,
        ))?;

        for entity in &workflow.entities {
            registry.register(FileEntry::from_generated(
                &TypesTs::new(workflow, entity),
                FileCategory::Types,
            ))?;

            if entity.has_input() {
                registry.register(FileEntry::from_generated(
                    &ValidatorTs::new(entity),
                    FileCategory::Validators,
                ))?;
            } else {
                debug!(entity = %entity.name, "no input fields, skipping validator");
            }

            registry.register(FileEntry::from_generated(
                &ServiceTs::new(entity, options.page_size),
                FileCategory::Services,
            ))?;
            registry.register(FileEntry::from_generated(
                &ControllerTs::new(entity),
                FileCategory::Controllers,
            ))?;
            registry.register(FileEntry::from_generated(
                &RoutesTs::new(entity),
                FileCategory::Routes,
            ))?;
        }

        registry.register(FileEntry::from_generated(
            &RoutesIndexTs::new(workflow),
            FileCategory::Routes,
        ))?;

        debug!(
            generator = self.name(),
            files = registry.len(),
            "registered artifacts"
        );
        Ok(())
    }
}
