//! Lint for synthesized relation fields that clash with existing names.

use std::collections::{HashMap, HashSet};

use crudgen_manifest::{GENERATED_FIELDS, Workflow};

use super::super::Lint;
use crate::pipeline::{Diagnostic, Location, phases::resolve::plan};

/// Lint that errors when resolution would produce two members with one name.
///
/// Relation fields, their FK columns and their connect-by-id input fields are
/// checked against the entity's properties, the generated fields and each
/// other, ignoring case. Each relation field is reported at most once.
pub struct FieldCollisionLint;

/// What already holds a name on an entity.
enum Owner<'a> {
    Property,
    Generated,
    Relation(&'a str),
}

impl Lint for FieldCollisionLint {
    fn name(&self) -> &'static str {
        "field-collision"
    }

    fn description(&self) -> &'static str {
        "Detect relation fields that collide with other members"
    }

    fn check(&self, workflow: &Workflow, diagnostics: &mut Vec<Diagnostic>) {
        let planned = plan(workflow);
        let repeated = repeated_relations(workflow);

        for (entity, fields) in workflow.entities.iter().zip(&planned) {
            let mut taken: HashMap<String, Owner<'_>> = HashMap::new();
            for name in GENERATED_FIELDS {
                taken.insert(name.to_lowercase(), Owner::Generated);
            }
            for property in &entity.properties {
                taken
                    .entry(property.name.to_lowercase())
                    .or_insert(Owner::Property);
            }

            for planned in fields {
                // The second relation to a target is already an error
                if repeated.contains(&(planned.declared_on, planned.relation_index)) {
                    continue;
                }

                let declaring = &workflow.entities[planned.declared_on];
                let target = &declaring.relations[planned.relation_index].target_entity_name;

                for name in planned.field.occupied_names() {
                    let key = name.to_lowercase();
                    let with = match taken.get(&key) {
                        None => None,
                        Some(Owner::Property) => Some("a property".to_string()),
                        Some(Owner::Generated) => Some("a generated field".to_string()),
                        Some(Owner::Relation(other)) if *other == name => {
                            Some("another relation field".to_string())
                        }
                        Some(Owner::Relation(other)) => {
                            Some(format!("relation field '{}'", other))
                        }
                    };
                    let Some(with) = with else {
                        taken.insert(key, Owner::Relation(&planned.field.name));
                        continue;
                    };

                    diagnostics.push(
                        Diagnostic::error(
                            self.name(),
                            format!(
                                "relation to '{}' adds '{}' to '{}', which collides with {}",
                                target, name, entity.name, with
                            ),
                        )
                        .at(Location::relation(&declaring.name, planned.relation_index, target)),
                    );
                    break;
                }
            }
        }
    }
}

/// `(entity, relation)` positions of every relation after the first to a target.
fn repeated_relations(workflow: &Workflow) -> HashSet<(usize, usize)> {
    let mut repeated = HashSet::new();
    for (e, entity) in workflow.entities.iter().enumerate() {
        let mut targets = HashSet::new();
        for (r, relation) in entity.relations.iter().enumerate() {
            if !targets.insert(relation.target_entity_name.to_lowercase()) {
                repeated.insert((e, r));
            }
        }
    }
    repeated
}

#[cfg(test)]
mod tests {
    use crudgen_core::Cardinality;
    use crudgen_manifest::{Entity, Property, Relation};

    use super::*;

    fn check(workflow: &Workflow) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        FieldCollisionLint.check(workflow, &mut diagnostics);
        diagnostics
    }

    #[test]
    fn test_no_collision() {
        let workflow = Workflow::new("shop")
            .entity(Entity::new("user").property(Property::new("name", "string")))
            .entity(Entity::new("order").relation(Relation::new("user", Cardinality::OneToMany)));
        assert!(check(&workflow).is_empty());
    }

    #[test]
    fn test_collection_collides_with_property() {
        let workflow = Workflow::new("shop")
            .entity(Entity::new("user").property(Property::new("Orders", "json")))
            .entity(Entity::new("order").relation(Relation::new("user", Cardinality::OneToMany)));

        let diagnostics = check(&workflow);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(
            diagnostics[0].message,
            "relation to 'user' adds 'orders' to 'user', which collides with a property"
        );
        assert_eq!(
            diagnostics[0].location,
            Some(Location::relation("order", 0, "user"))
        );
    }

    #[test]
    fn test_fk_column_collides_with_property() {
        let workflow = Workflow::new("shop")
            .entity(Entity::new("user"))
            .entity(
                Entity::new("order")
                    .property(Property::new("userId", "string"))
                    .relation(Relation::new("user", Cardinality::OneToMany)),
            );

        let diagnostics = check(&workflow);
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("'userId'"));
    }

    #[test]
    fn test_connect_ids_field_collides_with_property() {
        let workflow = Workflow::new("shop")
            .entity(Entity::new("user").property(Property::new("orderIds", "array")))
            .entity(Entity::new("order").relation(Relation::new("user", Cardinality::OneToMany)));

        let diagnostics = check(&workflow);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(
            diagnostics[0].message,
            "relation to 'user' adds 'orderIds' to 'user', which collides with a property"
        );
        assert_eq!(
            diagnostics[0].location,
            Some(Location::relation("order", 0, "user"))
        );
    }

    #[test]
    fn test_many_to_many_ids_field_collides_with_property() {
        let workflow = Workflow::new("school")
            .entity(
                Entity::new("student")
                    .property(Property::new("courseids", "json"))
                    .relation(Relation::new("course", Cardinality::ManyToMany)),
            )
            .entity(Entity::new("course"));

        let diagnostics = check(&workflow);
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("'courseIds'"));
    }

    #[test]
    fn test_relation_fields_collide_with_each_other() {
        let workflow = Workflow::new("shop")
            .entity(Entity::new("user").relation(Relation::new("order", Cardinality::ManyToMany)))
            .entity(Entity::new("order").relation(Relation::new("user", Cardinality::OneToMany)));

        let diagnostics = check(&workflow);
        // "orders" on user and "users"/"user" on order are distinct; only the
        // repeated "orders" collection clashes.
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(
            diagnostics[0].message,
            "relation to 'user' adds 'orders' to 'user', which collides with another relation field"
        );
    }

    #[test]
    fn test_repeated_relation_not_reported_twice() {
        let workflow = Workflow::new("shop")
            .entity(Entity::new("user"))
            .entity(
                Entity::new("order")
                    .relation(Relation::new("user", Cardinality::OneToMany))
                    .relation(Relation::new("user", Cardinality::OneToOne)),
            );
        assert!(check(&workflow).is_empty());
    }
}
