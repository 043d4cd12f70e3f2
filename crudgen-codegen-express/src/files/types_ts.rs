//! src/types/<entity>.types.ts generator.

use std::path::PathBuf;

use crudgen_codegen::language::TypeMapper;
use crudgen_core::GeneratedFile;
use crudgen_ir::{RelationKind, ResolvedEntity, ResolvedWorkflow};

use crate::{
    ast::{Import, Interface, TypeAlias},
    code_file::{CodeFile, GENERATED_HEADER},
    naming::EntityNames,
    type_mapper::PrismaZodMapper,
};

/// The entity interface and its create/update input types.
pub struct TypesTs<'a> {
    pub workflow: &'a ResolvedWorkflow,
    pub entity: &'a ResolvedEntity,
}

impl<'a> TypesTs<'a> {
    pub fn new(workflow: &'a ResolvedWorkflow, entity: &'a ResolvedEntity) -> Self {
        Self { workflow, entity }
    }

    /// Type-only imports for every other model this entity links to.
    fn imports(&self) -> Vec<Import> {
        let mut seen: Vec<&str> = Vec::new();
        for field in &self.entity.relation_fields {
            if field.target != self.entity.model_name && !seen.contains(&field.target.as_str()) {
                seen.push(&field.target);
            }
        }

        seen.into_iter()
            .filter_map(|target| self.workflow.entity(target))
            .map(|other| {
                let names = EntityNames::new(other);
                Import::new(format!("./{}", names.types_module()))
                    .named(names.model)
                    .type_only()
            })
            .collect()
    }

    fn entity_interface(&self) -> Interface {
        let mapper = PrismaZodMapper;
        let mut interface = Interface::new(&self.entity.model_name).field("id", "string");

        for property in &self.entity.properties {
            let ty = mapper.runtime_type(&property.field_type);
            let ty = if property.nullable {
                format!("{} | null", ty)
            } else {
                ty
            };
            interface = interface.field(&property.name, ty);
        }

        for field in &self.entity.relation_fields {
            interface = match &field.kind {
                RelationKind::Reference => {
                    interface.optional_field(&field.name, format!("{} | null", field.target))
                }
                RelationKind::ForeignKey { column, .. } => interface
                    .optional_field(&field.name, format!("{} | null", field.target))
                    .field(column, "string | null"),
                RelationKind::Collection { .. } => {
                    interface.optional_field(&field.name, format!("{}[]", field.target))
                }
            };
        }

        interface
            .field("createdAt", "Date")
            .field("updatedAt", "Date")
    }

    fn create_input(&self, names: &EntityNames) -> Interface {
        let mapper = PrismaZodMapper;
        let mut interface = Interface::new(names.create_input());

        for property in &self.entity.properties {
            let ty = mapper.runtime_type(&property.field_type);
            interface = if property.nullable {
                interface.optional_field(&property.name, format!("{} | null", ty))
            } else {
                interface.field(&property.name, ty)
            };
        }

        for field in self.entity.connect_fields() {
            interface = match &field.kind {
                RelationKind::ForeignKey { column, .. } => interface.optional_field(column, "string"),
                RelationKind::Collection { ids_field, .. } => {
                    interface.optional_field(ids_field, "string[]")
                }
                RelationKind::Reference => interface,
            };
        }

        interface
    }
}

impl GeneratedFile for TypesTs<'_> {
    fn path(&self) -> PathBuf {
        PathBuf::from("src")
            .join("types")
            .join(format!("{}.ts", EntityNames::new(self.entity).types_module()))
    }

    fn render(&self) -> String {
        let names = EntityNames::new(self.entity);
        CodeFile::new()
            .header(GENERATED_HEADER)
            .imports(self.imports())
            .add(self.entity_interface())
            .add(self.create_input(&names))
            .add(TypeAlias::new(
                names.update_input(),
                format!("Partial<{}>", names.create_input()),
            ))
            .render()
    }
}
