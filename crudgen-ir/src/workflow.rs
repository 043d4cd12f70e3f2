use crudgen_core::to_kebab_case;
use crudgen_manifest::Features;
use serde::Serialize;

use crate::ResolvedEntity;

/// The fully resolved compilation unit handed to generators.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedWorkflow {
    pub name: String,
    pub display_name: String,
    /// Entities in declaration order.
    pub entities: Vec<ResolvedEntity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cors: Option<serde_json::Value>,
    pub features: Features,
}

impl ResolvedWorkflow {
    /// Directory name of the generated project (e.g., "my-shop").
    pub fn project_dir(&self) -> String {
        to_kebab_case(&self.name)
    }

    /// Look up an entity by name, ignoring case.
    pub fn entity(&self, name: &str) -> Option<&ResolvedEntity> {
        self.entities
            .iter()
            .find(|e| e.name.eq_ignore_ascii_case(name))
    }

    /// Total number of relation fields across all entities.
    pub fn relation_field_count(&self) -> usize {
        self.entities.iter().map(|e| e.relation_fields.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_dir_and_lookup() {
        let workflow = ResolvedWorkflow {
            name: "myShop".into(),
            display_name: "My Shop".into(),
            entities: vec![ResolvedEntity {
                name: "user".into(),
                model_name: "User".into(),
                properties: vec![],
                relation_fields: vec![],
            }],
            cors: None,
            features: Features::default(),
        };

        assert_eq!(workflow.project_dir(), "my-shop");
        assert_eq!(workflow.entity("USER").unwrap().model_name, "User");
        assert_eq!(workflow.relation_field_count(), 0);
    }
}
