//! prisma/schema.prisma generator.

use std::path::PathBuf;

use crudgen_codegen::{
    builder::{CodeFragment, Renderable},
    language::TypeMapper,
};
use crudgen_core::GeneratedFile;
use crudgen_ir::{RelationField, RelationKind, ResolvedEntity, ResolvedWorkflow};
use crudgen_manifest::Datasource;

use crate::{
    code_file::{CodeFile, GENERATED_HEADER, RawCode},
    type_mapper::PrismaZodMapper,
};

/// The storage schema: one model per entity, in declaration order.
pub struct SchemaPrisma<'a> {
    pub workflow: &'a ResolvedWorkflow,
    pub datasource: Datasource,
}

impl<'a> SchemaPrisma<'a> {
    pub fn new(workflow: &'a ResolvedWorkflow, datasource: Datasource) -> Self {
        Self {
            workflow,
            datasource,
        }
    }
}

impl GeneratedFile for SchemaPrisma<'_> {
    fn path(&self) -> PathBuf {
        PathBuf::from("prisma").join("schema.prisma")
    }

    fn render(&self) -> String {
        CodeFile::new()
            .header(GENERATED_HEADER)
            .add(RawCode::lines([
                "generator client {",
                "  provider = \"prisma-client-js\"",
                "}",
            ]))
            .add(RawCode::lines([
                "datasource db {".to_string(),
                format!("  provider = \"{}\"", self.datasource.provider()),
                "  url      = env(\"DATABASE_URL\")".to_string(),
                "}".to_string(),
            ]))
            .add_all(self.workflow.entities.iter().map(Model))
            .render()
    }
}

/// One `model` block.
struct Model<'a>(&'a ResolvedEntity);

impl Renderable for Model<'_> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let entity = self.0;
        let mapper = PrismaZodMapper;
        let mut body = vec![CodeFragment::line("id String @id @default(uuid())")];

        for property in &entity.properties {
            let optional = if property.nullable { "?" } else { "" };
            body.push(CodeFragment::line(format!(
                "{} {}{}",
                property.name,
                mapper.storage_type(&property.field_type),
                optional
            )));
        }

        for field in &entity.relation_fields {
            body.extend(relation_lines(field).into_iter().map(CodeFragment::line));
        }

        body.push(CodeFragment::line("createdAt DateTime @default(now())"));
        body.push(CodeFragment::line("updatedAt DateTime @updatedAt"));

        vec![CodeFragment::block(
            format!("model {} {{", entity.model_name),
            body,
            "}",
        )]
    }
}

fn relation_lines(field: &RelationField) -> Vec<String> {
    match &field.kind {
        RelationKind::Reference => vec![format!(
            "{} {}? @relation(\"{}\")",
            field.name, field.target, field.relation_name
        )],
        RelationKind::ForeignKey { column, unique } => {
            let unique = if *unique { " @unique" } else { "" };
            vec![
                format!(
                    "{} {}? @relation(\"{}\", fields: [{}], references: [id])",
                    field.name, field.target, field.relation_name, column
                ),
                format!("{} String?{}", column, unique),
            ]
        }
        RelationKind::Collection { .. } => vec![format!(
            "{} {}[] @relation(\"{}\")",
            field.name, field.target, field.relation_name
        )],
    }
}
