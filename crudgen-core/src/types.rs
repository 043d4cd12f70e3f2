//! Field and relation tags shared across the workspace.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The declared type of an entity property.
///
/// The known tags form a closed set; any other tag is kept verbatim as
/// [`FieldType::Custom`] so generators can pass it through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FieldType {
    String,
    /// Integer number.
    Number,
    Float,
    Boolean,
    Date,
    DateTime,
    Json,
    Object,
    Array,
    /// An arbitrary user-supplied type tag.
    Custom(String),
}

impl FieldType {
    /// The tag as written in the workflow input.
    pub fn as_str(&self) -> &str {
        match self {
            FieldType::String => "string",
            FieldType::Number => "number",
            FieldType::Float => "float",
            FieldType::Boolean => "boolean",
            FieldType::Date => "date",
            FieldType::DateTime => "datetime",
            FieldType::Json => "json",
            FieldType::Object => "object",
            FieldType::Array => "array",
            FieldType::Custom(tag) => tag,
        }
    }

    pub fn is_string(&self) -> bool {
        matches!(self, FieldType::String)
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, FieldType::Number | FieldType::Float)
    }

    pub fn is_temporal(&self) -> bool {
        matches!(self, FieldType::Date | FieldType::DateTime)
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, FieldType::Custom(_))
    }
}

impl From<String> for FieldType {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "string" => FieldType::String,
            "number" => FieldType::Number,
            "float" => FieldType::Float,
            "boolean" => FieldType::Boolean,
            "date" => FieldType::Date,
            "datetime" => FieldType::DateTime,
            "json" => FieldType::Json,
            "object" => FieldType::Object,
            "array" => FieldType::Array,
            _ => FieldType::Custom(tag),
        }
    }
}

impl From<&str> for FieldType {
    fn from(tag: &str) -> Self {
        FieldType::from(tag.to_string())
    }
}

impl From<FieldType> for String {
    fn from(ty: FieldType) -> Self {
        match ty {
            FieldType::Custom(tag) => tag,
            other => other.as_str().to_string(),
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Multiplicity of a relation between two entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Cardinality {
    OneToOne,
    OneToMany,
    ManyToMany,
}

impl Cardinality {
    pub fn as_str(&self) -> &'static str {
        match self {
            Cardinality::OneToOne => "one-to-one",
            Cardinality::OneToMany => "one-to-many",
            Cardinality::ManyToMany => "many-to-many",
        }
    }

    /// Whether this cardinality places a foreign key on one side.
    ///
    /// Only these relations contribute ownership edges to cycle detection.
    pub fn implies_ownership(&self) -> bool {
        matches!(self, Cardinality::OneToOne | Cardinality::OneToMany)
    }
}

impl fmt::Display for Cardinality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
