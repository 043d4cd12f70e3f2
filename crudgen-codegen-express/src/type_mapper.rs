//! Prisma, TypeScript and Zod type mappings.

use crudgen_codegen::language::{Constraint, TypeMapper};
use crudgen_core::{Bound, FieldType, ValidationRule};

/// Maps field types to Prisma columns, TypeScript types and Zod schemas.
pub struct PrismaZodMapper;

impl TypeMapper for PrismaZodMapper {
    fn storage_type(&self, ty: &FieldType) -> String {
        match ty {
            FieldType::String => "String",
            FieldType::Number => "Int",
            FieldType::Float => "Float",
            FieldType::Boolean => "Boolean",
            FieldType::Date | FieldType::DateTime => "DateTime",
            FieldType::Json | FieldType::Object | FieldType::Array => "Json",
            // Unknown tags are stored as text
            FieldType::Custom(_) => "String",
        }
        .to_string()
    }

    fn runtime_type(&self, ty: &FieldType) -> String {
        match ty {
            FieldType::String => "string".to_string(),
            FieldType::Number | FieldType::Float => "number".to_string(),
            FieldType::Boolean => "boolean".to_string(),
            FieldType::Date | FieldType::DateTime => "Date".to_string(),
            FieldType::Json => "unknown".to_string(),
            FieldType::Object => "Record<string, any>".to_string(),
            FieldType::Array => "any[]".to_string(),
            FieldType::Custom(tag) => tag.clone(),
        }
    }

    fn validator_base(&self, ty: &FieldType) -> String {
        match ty {
            FieldType::String => "z.string()",
            FieldType::Number => "z.number().int()",
            FieldType::Float => "z.number()",
            FieldType::Boolean => "z.boolean()",
            FieldType::Date | FieldType::DateTime => "z.coerce.date()",
            FieldType::Json | FieldType::Custom(_) => "z.any()",
            FieldType::Object => "z.record(z.any())",
            FieldType::Array => "z.array(z.any())",
        }
        .to_string()
    }

    fn constraint(&self, rule: &ValidationRule, ty: &FieldType) -> Constraint {
        let append = match rule {
            ValidationRule::MinLength(n) => format!(".min({})", n),
            ValidationRule::MaxLength(n) => format!(".max({})", n),
            ValidationRule::Min(bound) => format!(".min({})", bound_literal(bound, ty)),
            ValidationRule::Max(bound) => format!(".max({})", bound_literal(bound, ty)),
            ValidationRule::Pattern(pattern) => {
                format!(".regex(new RegExp({}))", js_string(pattern))
            }
            ValidationRule::Email => ".email()".to_string(),
            ValidationRule::Url => ".url()".to_string(),
            ValidationRule::Uuid => ".uuid()".to_string(),
            ValidationRule::Enum(values) => {
                let values: Vec<String> = values.iter().map(|v| js_string(v)).collect();
                return Constraint::Replace(format!("z.enum([{}])", values.join(", ")));
            }
            ValidationRule::StartsWith(prefix) => format!(".startsWith({})", js_string(prefix)),
            ValidationRule::EndsWith(suffix) => format!(".endsWith({})", js_string(suffix)),
            // Only the name is known; record it on the schema
            ValidationRule::Custom(name) => {
                format!(".describe({})", js_string(&format!("custom:{}", name)))
            }
        };
        Constraint::Append(append)
    }

    fn nullable(&self, expr: String) -> String {
        format!("{}.nullable()", expr)
    }
}

/// A bound as a JavaScript literal. Temporal properties compare against dates.
fn bound_literal(bound: &Bound, ty: &FieldType) -> String {
    match bound {
        Bound::Number(n) if ty.is_temporal() => format!("new Date({})", n),
        Bound::Number(n) => n.to_string(),
        Bound::Date(d) => format!("new Date({})", js_string(d)),
    }
}

/// Quote and escape a string as a JavaScript literal.
pub(crate) fn js_string(s: &str) -> String {
    serde_json::Value::String(s.to_string()).to_string()
}

#[cfg(test)]
mod tests {
    use crudgen_manifest::Property;

    use super::*;

    #[test]
    fn test_storage_types() {
        let mapper = PrismaZodMapper;
        assert_eq!(mapper.storage_type(&FieldType::Number), "Int");
        assert_eq!(mapper.storage_type(&FieldType::DateTime), "DateTime");
        assert_eq!(mapper.storage_type(&FieldType::Array), "Json");
        assert_eq!(mapper.storage_type(&"Money".into()), "String");
    }

    #[test]
    fn test_runtime_types() {
        let mapper = PrismaZodMapper;
        assert_eq!(mapper.runtime_type(&FieldType::Object), "Record<string, any>");
        assert_eq!(mapper.runtime_type(&FieldType::Date), "Date");
        assert_eq!(mapper.runtime_type(&"Money".into()), "Money");
    }

    #[test]
    fn test_validator_chain() {
        let property = Property::new("email", "string")
            .rule(ValidationRule::Email)
            .rule(ValidationRule::MaxLength(120))
            .nullable();
        assert_eq!(
            PrismaZodMapper.validator_expression(&property),
            "z.string().email().max(120).nullable()"
        );
    }

    #[test]
    fn test_enum_resets_chain() {
        let property = Property::new("status", "string")
            .rule(ValidationRule::MinLength(2))
            .rule(ValidationRule::Enum(vec!["open".into(), "closed".into()]));
        assert_eq!(
            PrismaZodMapper.validator_expression(&property),
            r#"z.enum(["open", "closed"])"#
        );
    }

    #[test]
    fn test_bounds() {
        let age = Property::new("age", "number")
            .rule(ValidationRule::Min(Bound::Number(18.0)))
            .rule(ValidationRule::Max(Bound::Number(99.5)));
        assert_eq!(
            PrismaZodMapper.validator_expression(&age),
            "z.number().int().min(18).max(99.5)"
        );

        let due = Property::new("due", "date").rule(ValidationRule::Min(Bound::Date(
            "2024-01-01".into(),
        )));
        assert_eq!(
            PrismaZodMapper.validator_expression(&due),
            r#"z.coerce.date().min(new Date("2024-01-01"))"#
        );
    }

    #[test]
    fn test_pattern_is_escaped() {
        let property =
            Property::new("code", "string").rule(ValidationRule::Pattern(r#"^\d+"$"#.into()));
        assert_eq!(
            PrismaZodMapper.validator_expression(&property),
            r#"z.string().regex(new RegExp("^\\d+\"$"))"#
        );
    }

    #[test]
    fn test_custom_rule() {
        let property =
            Property::new("price", "Money").rule(ValidationRule::Custom("positive".into()));
        assert_eq!(
            PrismaZodMapper.validator_expression(&property),
            r#"z.any().describe("custom:positive")"#
        );
    }
}
