//! Check command report data structures.

use std::path::PathBuf;

use crudgen_codegen::pipeline::Diagnostic;
use crudgen_ir::ResolvedEntity;
use serde::Serialize;

use super::output::{Output, Report};

/// Report data from workflow validation.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckReport {
    pub workflow_path: PathBuf,
    pub project: String,
    pub valid: bool,
    pub diagnostics: Vec<Diagnostic>,
    /// Empty unless the workflow resolved.
    pub entities: Vec<EntitySummary>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntitySummary {
    pub model: String,
    pub properties: usize,
    pub relation_fields: Vec<String>,
}

impl From<&ResolvedEntity> for EntitySummary {
    fn from(entity: &ResolvedEntity) -> Self {
        Self {
            model: entity.model_name.clone(),
            properties: entity.properties.len(),
            relation_fields: entity
                .relation_fields
                .iter()
                .map(|f| f.name.clone())
                .collect(),
        }
    }
}

/// Warning text without the severity prefix.
pub(crate) fn describe(diagnostic: &Diagnostic) -> String {
    match &diagnostic.location {
        Some(location) => format!(
            "[{}] {} (at {})",
            diagnostic.code, diagnostic.message, location
        ),
        None => format!("[{}] {}", diagnostic.code, diagnostic.message),
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        let mut errors = 0;
        for diagnostic in &self.diagnostics {
            if diagnostic.severity.is_warning() {
                out.warning(&describe(diagnostic));
            } else {
                errors += 1;
            }
        }

        if !self.valid {
            out.preformatted(&format!(
                "✗ {} rejected with {} error(s)",
                self.workflow_path.display(),
                errors
            ));
            return;
        }

        out.preformatted(&format!("✓ {} is valid", self.workflow_path.display()));
        out.newline();
        out.section(&format!("{} ({} entities)", self.project, self.entities.len()));
        for entity in &self.entities {
            let properties = match entity.properties {
                1 => "1 property".to_string(),
                n => format!("{} properties", n),
            };
            if entity.relation_fields.is_empty() {
                out.list_item(&format!("{}: {}", entity.model, properties));
            } else {
                out.list_item(&format!(
                    "{}: {}, relations {}",
                    entity.model,
                    properties,
                    entity.relation_fields.join(", ")
                ));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::BufferOutput;

    fn report(valid: bool, diagnostics: Vec<Diagnostic>) -> CheckReport {
        CheckReport {
            workflow_path: PathBuf::from("shop.json"),
            project: "Shop".into(),
            valid,
            diagnostics,
            entities: vec![
                EntitySummary {
                    model: "User".into(),
                    properties: 1,
                    relation_fields: vec!["orders".into()],
                },
                EntitySummary {
                    model: "Tag".into(),
                    properties: 0,
                    relation_fields: vec![],
                },
            ],
        }
    }

    #[test]
    fn test_valid_report() {
        let mut out = BufferOutput::default();
        report(true, vec![]).render(&mut out);

        assert_eq!(
            out.text(),
            "✓ shop.json is valid\n\nShop (2 entities):\n  - User: 1 property, relations orders\n  - Tag: 0 properties"
        );
    }

    #[test]
    fn test_rejected_report_counts_errors() {
        let mut out = BufferOutput::default();
        report(
            false,
            vec![
                Diagnostic::error("duplicate-name", "duplicate entity 'User'"),
                Diagnostic::warning("many-to-many-parent", "no effect"),
            ],
        )
        .render(&mut out);

        assert_eq!(
            out.lines,
            [
                "warning: [many-to-many-parent] no effect",
                "✗ shop.json rejected with 1 error(s)",
            ]
        );
    }
}
