//! Lint for duplicate entity and property names.

use std::collections::HashMap;

use crudgen_core::to_kebab_case;
use crudgen_manifest::Workflow;

use super::super::Lint;
use crate::pipeline::{Diagnostic, Location};

/// Lint that errors on duplicate names.
///
/// Entities are compared workflow-wide and properties per entity, both
/// ignoring case. Entities are also compared by file stem, since
/// `orderItem` and `order_item` would write the same files.
pub struct DuplicateNameLint;

impl Lint for DuplicateNameLint {
    fn name(&self) -> &'static str {
        "duplicate-name"
    }

    fn description(&self) -> &'static str {
        "Detect duplicate entity and property names"
    }

    fn check(&self, workflow: &Workflow, diagnostics: &mut Vec<Diagnostic>) {
        let mut seen: HashMap<String, &str> = HashMap::new();
        let mut stems: HashMap<String, &str> = HashMap::new();

        for entity in &workflow.entities {
            let normalized = entity.name.to_lowercase();
            if let Some(first) = seen.get(&normalized) {
                diagnostics.push(
                    Diagnostic::error(
                        self.name(),
                        format!(
                            "duplicate entity '{}' (conflicts with '{}')",
                            entity.name, first
                        ),
                    )
                    .at(Location::entity(&entity.name)),
                );
            } else {
                seen.insert(normalized, &entity.name);

                let stem = to_kebab_case(&entity.name);
                if let Some(first) = stems.get(&stem) {
                    diagnostics.push(
                        Diagnostic::error(
                            self.name(),
                            format!(
                                "entity '{}' and '{}' would both generate '{}' files",
                                entity.name, first, stem
                            ),
                        )
                        .at(Location::entity(&entity.name)),
                    );
                } else {
                    stems.insert(stem, &entity.name);
                }
            }

            let mut props: HashMap<String, &str> = HashMap::new();
            for property in &entity.properties {
                let normalized = property.name.to_lowercase();
                if let Some(first) = props.get(&normalized) {
                    diagnostics.push(
                        Diagnostic::error(
                            self.name(),
                            format!(
                                "duplicate property '{}' on '{}' (conflicts with '{}')",
                                property.name, entity.name, first
                            ),
                        )
                        .at(Location::property(&entity.name, &property.name)),
                    );
                } else {
                    props.insert(normalized, &property.name);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crudgen_manifest::{Entity, Property};

    use super::*;

    fn check(workflow: &Workflow) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        DuplicateNameLint.check(workflow, &mut diagnostics);
        diagnostics
    }

    #[test]
    fn test_no_duplicates() {
        let workflow = Workflow::new("shop")
            .entity(Entity::new("user").property(Property::new("name", "string")))
            .entity(Entity::new("order").property(Property::new("name", "string")));
        assert!(check(&workflow).is_empty());
    }

    #[test]
    fn test_case_insensitive_entities() {
        let workflow = Workflow::new("shop")
            .entity(Entity::new("User"))
            .entity(Entity::new("user"));

        let diagnostics = check(&workflow);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(
            diagnostics[0].message,
            "duplicate entity 'user' (conflicts with 'User')"
        );
        assert_eq!(diagnostics[0].location, Some(Location::entity("user")));
    }

    #[test]
    fn test_file_stem_collision() {
        let workflow = Workflow::new("shop")
            .entity(Entity::new("orderItem"))
            .entity(Entity::new("order_item"));

        let diagnostics = check(&workflow);
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("'order-item'"));
    }

    #[test]
    fn test_duplicate_property() {
        let workflow = Workflow::new("shop").entity(
            Entity::new("user")
                .property(Property::new("email", "string"))
                .property(Property::new("Email", "string")),
        );

        let diagnostics = check(&workflow);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(
            diagnostics[0].location,
            Some(Location::property("user", "Email"))
        );
    }
}
