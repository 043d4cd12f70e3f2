//! Lint for repeated relations between the same pair of entities.

use std::collections::HashSet;

use crudgen_manifest::Workflow;

use super::super::Lint;
use crate::pipeline::{Diagnostic, Location};

/// Lint that errors when an entity declares two relations to one target.
pub struct DuplicateRelationLint;

impl Lint for DuplicateRelationLint {
    fn name(&self) -> &'static str {
        "duplicate-relation"
    }

    fn description(&self) -> &'static str {
        "Allow at most one relation per target on each entity"
    }

    fn check(&self, workflow: &Workflow, diagnostics: &mut Vec<Diagnostic>) {
        for entity in &workflow.entities {
            let mut targets = HashSet::new();
            for (i, relation) in entity.relations.iter().enumerate() {
                if targets.insert(relation.target_entity_name.to_lowercase()) {
                    continue;
                }
                diagnostics.push(
                    Diagnostic::error(
                        self.name(),
                        format!(
                            "'{}' declares more than one relation to '{}'",
                            entity.name, relation.target_entity_name
                        ),
                    )
                    .at(Location::relation(&entity.name, i, &relation.target_entity_name)),
                );
            }
        }
    }
}
