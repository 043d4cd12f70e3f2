//! Validation rules attached to entity properties.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::FieldType;

/// A single validation rule on a property.
///
/// Serialized as `{"type": "minLength", "value": 3}`; rules without a payload
/// omit `value`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "camelCase")]
pub enum ValidationRule {
    MinLength(u64),
    MaxLength(u64),
    Min(Bound),
    Max(Bound),
    Pattern(String),
    Email,
    Url,
    Uuid,
    Enum(Vec<String>),
    StartsWith(String),
    EndsWith(String),
    /// Opaque, user-named rule. Only the identifier is recorded.
    Custom(String),
}

/// A numeric or date bound for `min`/`max` rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Bound {
    Number(f64),
    /// A date literal, passed to the target's date constructor verbatim.
    Date(String),
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bound::Number(n) => write!(f, "{}", n),
            Bound::Date(d) => write!(f, "\"{}\"", d),
        }
    }
}

/// The kind of property type a rule can be applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleRequirement {
    /// Only `string` properties.
    StringLike,
    /// `number`/`float`, or `date`/`datetime`.
    NumericOrTemporal,
    /// Any property type.
    Any,
}

impl RuleRequirement {
    pub fn describe(&self) -> &'static str {
        match self {
            RuleRequirement::StringLike => "a string property",
            RuleRequirement::NumericOrTemporal => "a number, float, date or datetime property",
            RuleRequirement::Any => "any property",
        }
    }
}

impl ValidationRule {
    /// The rule tag as written in the workflow input.
    pub fn kind(&self) -> &'static str {
        match self {
            ValidationRule::MinLength(_) => "minLength",
            ValidationRule::MaxLength(_) => "maxLength",
            ValidationRule::Min(_) => "min",
            ValidationRule::Max(_) => "max",
            ValidationRule::Pattern(_) => "pattern",
            ValidationRule::Email => "email",
            ValidationRule::Url => "url",
            ValidationRule::Uuid => "uuid",
            ValidationRule::Enum(_) => "enum",
            ValidationRule::StartsWith(_) => "startsWith",
            ValidationRule::EndsWith(_) => "endsWith",
            ValidationRule::Custom(_) => "custom",
        }
    }

    pub fn requirement(&self) -> RuleRequirement {
        match self {
            ValidationRule::Min(_) | ValidationRule::Max(_) => RuleRequirement::NumericOrTemporal,
            ValidationRule::Custom(_) => RuleRequirement::Any,
            _ => RuleRequirement::StringLike,
        }
    }

    /// Check whether this rule may be applied to a property of type `ty`.
    ///
    /// Custom field types only accept custom rules. Numeric types reject
    /// date-literal bounds.
    pub fn is_compatible_with(&self, ty: &FieldType) -> bool {
        match self.requirement() {
            RuleRequirement::Any => true,
            RuleRequirement::StringLike => ty.is_string(),
            RuleRequirement::NumericOrTemporal => match self {
                ValidationRule::Min(Bound::Date(_)) | ValidationRule::Max(Bound::Date(_)) => {
                    ty.is_temporal()
                }
                _ => ty.is_numeric() || ty.is_temporal(),
            },
        }
    }
}
