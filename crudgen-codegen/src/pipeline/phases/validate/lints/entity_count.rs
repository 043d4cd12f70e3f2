//! Lint for the number of entities in a workflow.

use crudgen_manifest::Workflow;

use super::super::Lint;
use crate::pipeline::{Diagnostic, Location};

/// Most entities a single workflow may declare.
pub const MAX_ENTITIES: usize = 20;

/// Lint that errors when a workflow has no entities or too many.
pub struct EntityCountLint;

impl Lint for EntityCountLint {
    fn name(&self) -> &'static str {
        "entity-count"
    }

    fn description(&self) -> &'static str {
        "Require between 1 and 20 entities"
    }

    fn check(&self, workflow: &Workflow, diagnostics: &mut Vec<Diagnostic>) {
        let count = workflow.entities.len();
        let message = if count == 0 {
            "workflow must declare at least one entity".to_string()
        } else if count > MAX_ENTITIES {
            format!(
                "workflow declares {} entities, at most {} are allowed",
                count, MAX_ENTITIES
            )
        } else {
            return;
        };

        diagnostics.push(Diagnostic::error(self.name(), message).at(Location::Workflow));
    }
}

#[cfg(test)]
mod tests {
    use crudgen_manifest::Entity;

    use super::*;

    fn with_entities(n: usize) -> Workflow {
        (0..n).fold(Workflow::new("app"), |w, i| {
            w.entity(Entity::new(format!("entity{}", i)))
        })
    }

    #[test]
    fn test_bounds() {
        for (n, expected) in [(0, 1), (1, 0), (20, 0), (21, 1)] {
            let mut diagnostics = Vec::new();
            EntityCountLint.check(&with_entities(n), &mut diagnostics);
            assert_eq!(diagnostics.len(), expected, "{} entities", n);
        }
    }

    #[test]
    fn test_empty_message() {
        let mut diagnostics = Vec::new();
        EntityCountLint.check(&with_entities(0), &mut diagnostics);
        assert_eq!(
            diagnostics[0].to_string(),
            "error[entity-count]: workflow must declare at least one entity (at workflow)"
        );
    }
}
