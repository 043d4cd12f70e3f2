//! Target-agnostic code generation traits.

use crudgen_core::{FieldType, ValidationRule};
use crudgen_ir::ResolvedWorkflow;
use crudgen_manifest::{DEFAULT_PAGE_SIZE, Datasource, GenerateConfig, Property};
use eyre::Result;

use crate::generation::FileRegistry;

/// Settings every generator receives from the orchestrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Records per page for list endpoints.
    pub page_size: u32,
    pub datasource: Datasource,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            datasource: Datasource::default(),
        }
    }
}

impl From<&GenerateConfig> for GenerateOptions {
    fn from(config: &GenerateConfig) -> Self {
        Self {
            page_size: config.page_size,
            datasource: config.datasource,
        }
    }
}

/// A generator backend for one target stack.
///
/// Implementations register every artifact with the [`FileRegistry`]; they
/// never touch the filesystem themselves.
pub trait LanguageCodegen: Send + Sync {
    /// Target identifier (e.g., "express-prisma").
    fn name(&self) -> &'static str;

    /// Register all artifacts for `workflow`.
    ///
    /// # Errors
    ///
    /// Only on generator defects; the input is already validated.
    fn generate(
        &self,
        workflow: &ResolvedWorkflow,
        options: &GenerateOptions,
        registry: &mut FileRegistry,
    ) -> Result<()>;
}

/// A validator fragment produced for a single rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Constraint {
    /// Chained onto the expression built so far.
    Append(String),
    /// Discards the expression built so far and starts over.
    Replace(String),
}

/// Maps field types and rules to target-specific spellings.
pub trait TypeMapper {
    /// Column type in the storage schema.
    fn storage_type(&self, ty: &FieldType) -> String;

    /// Type expression in the runtime type definitions.
    fn runtime_type(&self, ty: &FieldType) -> String;

    /// Validator expression before any rule is applied.
    fn validator_base(&self, ty: &FieldType) -> String;

    /// Validator fragment for one rule on a property of type `ty`.
    fn constraint(&self, rule: &ValidationRule, ty: &FieldType) -> Constraint;

    /// Wrap a validator expression so it accepts null.
    fn nullable(&self, expr: String) -> String;

    /// Full validator expression for a property.
    ///
    /// Rules fold in declaration order. A [`Constraint::Replace`] resets the
    /// expression, so rules declared before an `enum` are dropped.
    fn validator_expression(&self, property: &Property) -> String {
        let mut expr = self.validator_base(&property.field_type);
        for rule in &property.validation {
            match self.constraint(rule, &property.field_type) {
                Constraint::Append(fragment) => expr.push_str(&fragment),
                Constraint::Replace(replacement) => expr = replacement,
            }
        }
        if property.nullable {
            expr = self.nullable(expr);
        }
        expr
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Upper;

    impl TypeMapper for Upper {
        fn storage_type(&self, ty: &FieldType) -> String {
            ty.as_str().to_uppercase()
        }

        fn runtime_type(&self, ty: &FieldType) -> String {
            ty.as_str().to_string()
        }

        fn validator_base(&self, ty: &FieldType) -> String {
            format!("base({})", ty)
        }

        fn constraint(&self, rule: &ValidationRule, _ty: &FieldType) -> Constraint {
            match rule {
                ValidationRule::Enum(values) => Constraint::Replace(format!("oneOf({})", values.join("|"))),
                other => Constraint::Append(format!(".{}", other.kind())),
            }
        }

        fn nullable(&self, expr: String) -> String {
            format!("{}?", expr)
        }
    }

    #[test]
    fn test_rules_fold_in_order() {
        let property = Property::new("email", "string")
            .rule(ValidationRule::Email)
            .rule(ValidationRule::MaxLength(10));
        assert_eq!(
            Upper.validator_expression(&property),
            "base(string).email.maxLength"
        );
    }

    #[test]
    fn test_enum_replaces_prior_fragments() {
        let property = Property::new("status", "string")
            .rule(ValidationRule::MinLength(1))
            .rule(ValidationRule::Enum(vec!["a".into(), "b".into()]))
            .rule(ValidationRule::EndsWith("x".into()))
            .nullable();
        assert_eq!(Upper.validator_expression(&property), "oneOf(a|b).endsWith?");
    }

    #[test]
    fn test_options_from_config() {
        let config = GenerateConfig {
            page_size: 7,
            datasource: Datasource::Mysql,
            ..GenerateConfig::default()
        };
        let options = GenerateOptions::from(&config);
        assert_eq!(options.page_size, 7);
        assert_eq!(options.datasource, Datasource::Mysql);
        assert_eq!(GenerateOptions::default().page_size, 20);
    }
}
