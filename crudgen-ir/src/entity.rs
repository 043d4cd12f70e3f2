use crudgen_core::{pluralize, to_camel_case, to_kebab_case};
use crudgen_manifest::Property;
use serde::Serialize;

use crate::RelationField;

/// An entity with all relation fields materialized.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedEntity {
    /// Name as declared in the input.
    pub name: String,
    /// Capitalized name used for models and types (e.g., "OrderItem").
    pub model_name: String,
    pub properties: Vec<Property>,
    /// Relation fields in resolution order.
    pub relation_fields: Vec<RelationField>,
}

impl ResolvedEntity {
    /// File stem for generated artifacts (e.g., "order-item").
    pub fn file_stem(&self) -> String {
        to_kebab_case(&self.name)
    }

    /// Local variable name for one record (e.g., "orderItem").
    pub fn variable_name(&self) -> String {
        to_camel_case(&self.name)
    }

    /// Plural variable name (e.g., "orderItems").
    pub fn plural_variable_name(&self) -> String {
        to_camel_case(&pluralize(&self.name))
    }

    /// Delegate name on the generated database client (e.g., "orderItem").
    pub fn client_accessor(&self) -> String {
        to_camel_case(&self.model_name)
    }

    /// URL path segment for the entity's routes (e.g., "order-items").
    pub fn route_segment(&self) -> String {
        to_kebab_case(&pluralize(&self.name))
    }

    /// Look up a relation field by name.
    pub fn relation_field(&self, name: &str) -> Option<&RelationField> {
        self.relation_fields.iter().find(|f| f.name == name)
    }

    /// Relation fields that accept ids on create.
    pub fn connect_fields(&self) -> impl Iterator<Item = &RelationField> {
        self.relation_fields
            .iter()
            .filter(|f| f.connect_field().is_some())
    }

    /// Whether the entity has any input for a request validator to check.
    pub fn has_input(&self) -> bool {
        !self.properties.is_empty() || self.connect_fields().next().is_some()
    }
}
