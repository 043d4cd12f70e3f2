//! Lint for dangling relation targets.

use crudgen_manifest::Workflow;

use super::super::Lint;
use crate::pipeline::{Diagnostic, Location, phases::resolve::EntityIndex};

/// Lint that errors when a relation names an entity that does not exist.
///
/// Targets match case-insensitively and may refer to entities declared later.
pub struct RelationTargetLint;

impl Lint for RelationTargetLint {
    fn name(&self) -> &'static str {
        "relation-target"
    }

    fn description(&self) -> &'static str {
        "Require every relation target to exist"
    }

    fn check(&self, workflow: &Workflow, diagnostics: &mut Vec<Diagnostic>) {
        let index = EntityIndex::new(workflow);

        for entity in &workflow.entities {
            for (i, relation) in entity.relations.iter().enumerate() {
                if index.get(&relation.target_entity_name).is_some() {
                    continue;
                }
                diagnostics.push(
                    Diagnostic::error(
                        self.name(),
                        format!(
                            "relation on '{}' targets unknown entity '{}'",
                            entity.name, relation.target_entity_name
                        ),
                    )
                    .at(Location::relation(&entity.name, i, &relation.target_entity_name)),
                );
            }
        }
    }
}
