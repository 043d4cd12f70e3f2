use std::{path::Path, str::FromStr};

use crudgen_core::{Cardinality, FieldType, ValidationRule};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Root of a workflow definition: a project and its entities.
///
/// Entity order is significant; it drives emission order in the storage schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workflow {
    /// Project identifier.
    pub name: String,

    /// Human readable project name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    /// Entity definitions, in declaration order.
    #[serde(rename = "workflows")]
    pub entities: Vec<Entity>,

    /// CORS policy, passed through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cors: Option<serde_json::Value>,

    /// Optional feature toggles, passed through untouched.
    #[serde(default)]
    pub features: Features,
}

/// One logical resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub name: String,

    #[serde(default, rename = "props")]
    pub properties: Vec<Property>,

    #[serde(default)]
    pub relations: Vec<Relation>,

    // Canvas layout, never used by the compiler
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<Dimensions>,
}

/// A typed property of an entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub name: String,

    #[serde(rename = "type")]
    pub field_type: FieldType,

    #[serde(default)]
    pub nullable: bool,

    #[serde(default)]
    pub validation: Vec<ValidationRule>,
}

/// A relation declared on one side only; the other side is synthesized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Relation {
    pub target_entity_name: String,
    pub cardinality: Cardinality,
    #[serde(default)]
    pub is_parent: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
}

/// Toggles for optional feature modules.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Features {
    pub auth: bool,
    pub oauth: bool,
    pub docs: bool,
    pub seed: bool,
}

impl Workflow {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            display_name: None,
            entities: Vec::new(),
            cors: None,
            features: Features::default(),
        }
    }

    /// Add an entity (builder style).
    pub fn entity(mut self, entity: Entity) -> Self {
        self.entities.push(entity);
        self
    }

    /// Look up an entity by name, ignoring case.
    pub fn find_entity(&self, name: &str) -> Option<&Entity> {
        self.entities
            .iter()
            .find(|e| e.name.eq_ignore_ascii_case(name))
    }

    /// Display name, falling back to the project identifier.
    pub fn title(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.name)
    }

    /// Parse a workflow file from the given path.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        Self::parse_with_filename(&content, &path.display().to_string())
    }

    /// Parse a workflow from a string with a custom filename for error reporting.
    pub fn parse_with_filename(content: &str, filename: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| Error::parse(e, content, filename))
    }
}

impl FromStr for Workflow {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_with_filename(s, "workflow.json")
    }
}

impl Entity {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: Vec::new(),
            relations: Vec::new(),
            position: None,
            dimensions: None,
        }
    }

    pub fn property(mut self, property: Property) -> Self {
        self.properties.push(property);
        self
    }

    pub fn relation(mut self, relation: Relation) -> Self {
        self.relations.push(relation);
        self
    }
}

impl Property {
    pub fn new(name: impl Into<String>, field_type: impl Into<FieldType>) -> Self {
        Self {
            name: name.into(),
            field_type: field_type.into(),
            nullable: false,
            validation: Vec::new(),
        }
    }

    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    pub fn rule(mut self, rule: ValidationRule) -> Self {
        self.validation.push(rule);
        self
    }
}

impl Relation {
    pub fn new(target: impl Into<String>, cardinality: Cardinality) -> Self {
        Self {
            target_entity_name: target.into(),
            cardinality,
            is_parent: false,
        }
    }

    /// Mark the declaring side as the parent of this relation.
    pub fn parent(mut self) -> Self {
        self.is_parent = true;
        self
    }
}
