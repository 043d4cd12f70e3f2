//! Lint for `isParent` on many-to-many relations.

use crudgen_core::Cardinality;
use crudgen_manifest::Workflow;

use super::super::Lint;
use crate::pipeline::{Diagnostic, Location};

/// Lint that warns when `isParent` is set on a many-to-many relation,
/// where it has no effect.
pub struct ManyToManyParentLint;

impl Lint for ManyToManyParentLint {
    fn name(&self) -> &'static str {
        "many-to-many-parent"
    }

    fn description(&self) -> &'static str {
        "Warn about isParent on many-to-many relations"
    }

    fn check(&self, workflow: &Workflow, diagnostics: &mut Vec<Diagnostic>) {
        for entity in &workflow.entities {
            for (i, relation) in entity.relations.iter().enumerate() {
                if relation.cardinality == Cardinality::ManyToMany && relation.is_parent {
                    diagnostics.push(
                        Diagnostic::warning(
                            self.name(),
                            format!(
                                "isParent has no effect on the many-to-many relation from '{}' to '{}'",
                                entity.name, relation.target_entity_name
                            ),
                        )
                        .at(Location::relation(&entity.name, i, &relation.target_entity_name)),
                    );
                }
            }
        }
    }
}
