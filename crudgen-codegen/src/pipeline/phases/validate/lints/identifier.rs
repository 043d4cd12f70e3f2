//! Lint for project, entity and property names.

use crudgen_core::capitalize;
use crudgen_manifest::{Workflow, check_identifier, is_generated_field, is_storage_scalar};

use super::super::Lint;
use crate::pipeline::{Diagnostic, Location};

/// Lint that errors on names unusable in the generated code.
pub struct IdentifierLint;

impl Lint for IdentifierLint {
    fn name(&self) -> &'static str {
        "identifier"
    }

    fn description(&self) -> &'static str {
        "Require valid, non-reserved identifiers"
    }

    fn check(&self, workflow: &Workflow, diagnostics: &mut Vec<Diagnostic>) {
        if let Some(issue) = check_identifier(&workflow.name) {
            diagnostics.push(
                Diagnostic::error(
                    self.name(),
                    format!("project name '{}' {}", workflow.name, issue),
                )
                .at(Location::Workflow),
            );
        }

        for entity in &workflow.entities {
            let message = match check_identifier(&entity.name) {
                Some(issue) => Some(format!("entity name '{}' {}", entity.name, issue)),
                None if is_storage_scalar(&capitalize(&entity.name)) => Some(format!(
                    "entity name '{}' shadows the built-in type '{}'",
                    entity.name,
                    capitalize(&entity.name)
                )),
                None => None,
            };
            if let Some(message) = message {
                diagnostics
                    .push(Diagnostic::error(self.name(), message).at(Location::entity(&entity.name)));
            }

            for property in &entity.properties {
                let message = match check_identifier(&property.name) {
                    Some(issue) => Some(format!("property name '{}' {}", property.name, issue)),
                    None if is_generated_field(&property.name) => Some(format!(
                        "property name '{}' is generated for every entity",
                        property.name
                    )),
                    None => None,
                };
                if let Some(message) = message {
                    diagnostics.push(
                        Diagnostic::error(self.name(), message)
                            .at(Location::property(&entity.name, &property.name)),
                    );
                }
            }
        }
    }
}
