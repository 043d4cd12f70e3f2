//! src/validators/<entity>.validator.ts generator.

use std::path::PathBuf;

use crudgen_codegen::language::TypeMapper;
use crudgen_core::GeneratedFile;
use crudgen_ir::{RelationKind, ResolvedEntity};

use crate::{
    ast::{Const, Import},
    code_file::{CodeFile, GENERATED_HEADER},
    naming::EntityNames,
    type_mapper::PrismaZodMapper,
};

/// Zod schemas for create and update requests.
///
/// Only registered for entities with [`ResolvedEntity::has_input`].
pub struct ValidatorTs<'a> {
    pub entity: &'a ResolvedEntity,
}

impl<'a> ValidatorTs<'a> {
    pub fn new(entity: &'a ResolvedEntity) -> Self {
        Self { entity }
    }

    fn create_schema_fields(&self) -> Vec<String> {
        let mapper = PrismaZodMapper;
        let mut fields = Vec::new();

        for property in &self.entity.properties {
            let mut expr = mapper.validator_expression(property);
            if property.nullable {
                expr.push_str(".optional()");
            }
            fields.push(format!("  {}: {},", property.name, expr));
        }

        for field in self.entity.connect_fields() {
            match &field.kind {
                RelationKind::ForeignKey { column, .. } => {
                    fields.push(format!("  {}: z.string().uuid().optional(),", column));
                }
                RelationKind::Collection { ids_field, .. } => {
                    fields.push(format!(
                        "  {}: z.array(z.string().uuid()).optional(),",
                        ids_field
                    ));
                }
                RelationKind::Reference => {}
            }
        }

        fields
    }
}

impl GeneratedFile for ValidatorTs<'_> {
    fn path(&self) -> PathBuf {
        PathBuf::from("src")
            .join("validators")
            .join(format!("{}.ts", EntityNames::new(self.entity).validator_module()))
    }

    fn render(&self) -> String {
        let names = EntityNames::new(self.entity);
        let mut schema = String::from("z.object({\n");
        for field in self.create_schema_fields() {
            schema.push_str(&field);
            schema.push('\n');
        }
        schema.push_str("})");

        CodeFile::new()
            .header(GENERATED_HEADER)
            .import(Import::new("zod").named("z"))
            .add(Const::new(names.create_schema(), schema))
            .add(Const::new(
                names.update_schema(),
                format!("{}.partial()", names.create_schema()),
            ))
            .render()
    }
}

#[cfg(test)]
mod tests {
    use crudgen_codegen::pipeline::phases::resolve;
    use crudgen_core::{Cardinality, ValidationRule};
    use crudgen_manifest::{Entity, Property, Relation, Workflow};

    use super::*;

    #[test]
    fn test_rules_and_nullable() {
        let workflow = resolve(
            &Workflow::new("app").entity(
                Entity::new("user")
                    .property(
                        Property::new("email", "string").rule(ValidationRule::Email),
                    )
                    .property(Property::new("bio", "string").nullable()),
            ),
        );
        let code = ValidatorTs::new(&workflow.entities[0]).render();

        assert!(code.contains("import { z } from \"zod\";\n"));
        assert!(code.contains(
            "export const createUserSchema = z.object({\n  email: z.string().email(),\n  bio: z.string().nullable().optional(),\n});\n"
        ));
        assert!(code.contains("export const updateUserSchema = createUserSchema.partial();\n"));
    }

    #[test]
    fn test_connect_fields() {
        let workflow = resolve(
            &Workflow::new("shop")
                .entity(Entity::new("user").property(Property::new("name", "string")))
                .entity(Entity::new("order").relation(Relation::new("user", Cardinality::OneToMany))),
        );

        let user = ValidatorTs::new(&workflow.entities[0]).render();
        assert!(user.contains("  orderIds: z.array(z.string().uuid()).optional(),\n"));

        let order = ValidatorTs::new(&workflow.entities[1]);
        assert!(order.render().contains("  userId: z.string().uuid().optional(),\n"));
        assert_eq!(order.path(), PathBuf::from("src/validators/order.validator.ts"));
    }
}
