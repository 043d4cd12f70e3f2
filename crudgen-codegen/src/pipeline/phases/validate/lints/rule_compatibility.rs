//! Lint for validation rules that cannot apply to their property.

use crudgen_core::{Bound, ValidationRule};
use crudgen_manifest::{Entity, Property, Workflow};
use regex::Regex;

use super::super::Lint;
use crate::pipeline::{Diagnostic, Location};

/// Lint that errors on rule/type mismatches and malformed rule values.
///
/// Patterns are compiled with the `regex` crate, so constructs it does not
/// support (look-around, backreferences) are rejected here. Patterns are
/// emitted as JavaScript `RegExp` literals, so syntax only the `regex` crate
/// understands is rejected as well.
pub struct RuleCompatibilityLint;

impl Lint for RuleCompatibilityLint {
    fn name(&self) -> &'static str {
        "rule-compatibility"
    }

    fn description(&self) -> &'static str {
        "Check validation rules against property types and each other"
    }

    fn check(&self, workflow: &Workflow, diagnostics: &mut Vec<Diagnostic>) {
        for entity in &workflow.entities {
            for property in &entity.properties {
                check_property(self.name(), entity, property, diagnostics);
            }
        }
    }
}

fn check_property(
    code: &str,
    entity: &Entity,
    property: &Property,
    diagnostics: &mut Vec<Diagnostic>,
) {
    let mut report = |message: String| {
        diagnostics
            .push(Diagnostic::error(code, message).at(Location::property(&entity.name, &property.name)));
    };

    for rule in &property.validation {
        if !rule.is_compatible_with(&property.field_type) {
            report(format!(
                "rule '{}' requires {}, but '{}' is '{}'",
                rule.kind(),
                rule.requirement().describe(),
                property.name,
                property.field_type
            ));
            continue;
        }

        match rule {
            ValidationRule::Pattern(pattern) => {
                if let Err(e) = Regex::new(pattern) {
                    report(format!("invalid pattern '{}': {}", pattern, first_line(&e)));
                } else if let Some(construct) = unsupported_in_javascript(pattern) {
                    report(format!(
                        "pattern '{}' uses {}, which JavaScript does not support",
                        pattern, construct
                    ));
                }
            }
            ValidationRule::Enum(values) if values.is_empty() => {
                report("rule 'enum' needs at least one value".to_string());
            }
            _ => {}
        }
    }

    let min = property.validation.iter().rev().find_map(|r| match r {
        ValidationRule::Min(b) => Some(b),
        _ => None,
    });
    let max = property.validation.iter().rev().find_map(|r| match r {
        ValidationRule::Max(b) => Some(b),
        _ => None,
    });
    if let (Some(min), Some(max)) = (min, max) {
        if bounds_conflict(min, max) {
            report(format!(
                "conflicting bounds: min {} is greater than max {}",
                min, max
            ));
        }
    }

    let min_length = property.validation.iter().rev().find_map(|r| match r {
        ValidationRule::MinLength(n) => Some(*n),
        _ => None,
    });
    let max_length = property.validation.iter().rev().find_map(|r| match r {
        ValidationRule::MaxLength(n) => Some(*n),
        _ => None,
    });
    if let (Some(min), Some(max)) = (min_length, max_length) {
        if min > max {
            report(format!(
                "conflicting bounds: minLength {} is greater than maxLength {}",
                min, max
            ));
        }
    }
}

/// Bounds of different kinds are not compared.
fn bounds_conflict(min: &Bound, max: &Bound) -> bool {
    match (min, max) {
        (Bound::Number(min), Bound::Number(max)) => min > max,
        // ISO-8601 literals order lexicographically
        (Bound::Date(min), Bound::Date(max)) => min > max,
        _ => false,
    }
}

/// First construct in an already valid pattern that a flagless JavaScript
/// `RegExp` rejects or reads differently.
fn unsupported_in_javascript(pattern: &str) -> Option<&'static str> {
    let chars: Vec<char> = pattern.chars().collect();
    let mut in_class = false;
    let mut i = 0;

    while i < chars.len() {
        let next = chars.get(i + 1).copied();
        match chars[i] {
            '\\' => {
                match (next, chars.get(i + 2).copied()) {
                    (Some('A'), _) => return Some("the '\\A' anchor"),
                    (Some('z'), _) => return Some("the '\\z' anchor"),
                    (Some('p' | 'P'), _) => return Some("a Unicode class escape"),
                    (Some('x'), Some('{')) => return Some("a braced hex escape"),
                    (Some('b' | 'B'), Some('{')) => return Some("a special word boundary"),
                    (Some('<' | '>'), _) => return Some("a word boundary escape"),
                    _ => {}
                }
                i += 2;
                continue;
            }
            '[' if in_class => {
                return Some(if next == Some(':') {
                    "a POSIX character class"
                } else {
                    "a nested character class"
                });
            }
            '[' => {
                in_class = true;
                i += 1;
                if chars.get(i) == Some(&'^') {
                    i += 1;
                }
                if chars.get(i) == Some(&']') {
                    return Some("a literal ']' at the start of a class");
                }
                continue;
            }
            ']' if in_class => in_class = false,
            c @ ('&' | '-' | '~') if in_class && next == Some(c) => {
                return Some("a class set operation");
            }
            '(' if !in_class && next == Some('?') => match chars.get(i + 2) {
                Some(':') => {}
                Some('P') => return Some("a '(?P<name>..)' group"),
                // (?<name>..); look-behind never compiles
                Some('<') => {}
                _ => return Some("inline flags"),
            },
            _ => {}
        }
        i += 1;
    }

    None
}

/// Regex errors span several lines; keep the summary.
fn first_line(error: &regex::Error) -> String {
    let text = error.to_string();
    text.lines()
        .rev()
        .find(|l| l.starts_with("error:"))
        .map(|l| l.trim_start_matches("error:").trim().to_string())
        .unwrap_or(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(property: Property) -> Vec<Diagnostic> {
        let workflow = Workflow::new("shop").entity(Entity::new("user").property(property));
        let mut diagnostics = Vec::new();
        RuleCompatibilityLint.check(&workflow, &mut diagnostics);
        diagnostics
    }

    #[test]
    fn test_compatible_rules() {
        let diagnostics = check(
            Property::new("email", "string")
                .rule(ValidationRule::Email)
                .rule(ValidationRule::MinLength(3))
                .rule(ValidationRule::MaxLength(120))
                .rule(ValidationRule::Pattern("^[a-z]+@".into())),
        );
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_length_rule_on_number() {
        let diagnostics = check(Property::new("age", "number").rule(ValidationRule::MinLength(3)));
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(
            diagnostics[0].message,
            "rule 'minLength' requires a string property, but 'age' is 'number'"
        );
        assert_eq!(
            diagnostics[0].location,
            Some(Location::property("user", "age"))
        );
    }

    #[test]
    fn test_date_bound_on_datetime() {
        let diagnostics = check(
            Property::new("birthday", "datetime")
                .rule(ValidationRule::Min(Bound::Date("1900-01-01".into())))
                .rule(ValidationRule::Max(Bound::Number(0.0))),
        );
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_custom_type_only_takes_custom_rules() {
        let diagnostics = check(
            Property::new("price", "Money")
                .rule(ValidationRule::Custom("positive".into()))
                .rule(ValidationRule::Min(Bound::Number(0.0))),
        );
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.starts_with("rule 'min' requires"));
    }

    #[test]
    fn test_invalid_pattern() {
        let diagnostics =
            check(Property::new("code", "string").rule(ValidationRule::Pattern("([a-z]".into())));
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.starts_with("invalid pattern '([a-z]'"));
    }

    #[test]
    fn test_lookahead_rejected() {
        let diagnostics =
            check(Property::new("code", "string").rule(ValidationRule::Pattern("(?=a)".into())));
        assert_eq!(diagnostics.len(), 1);
    }

    #[test]
    fn test_rust_only_syntax_rejected() {
        let diagnostics = check(
            Property::new("sku", "string")
                .rule(ValidationRule::Pattern("(?i)^(?P<sku>[a-z]+)$".into())),
        );
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(
            diagnostics[0].message,
            "pattern '(?i)^(?P<sku>[a-z]+)$' uses inline flags, which JavaScript does not support"
        );

        for (pattern, construct) in [
            ("^(?P<sku>[a-z]+)$", "a '(?P<name>..)' group"),
            (r"\Aabc\z", "the '\\A' anchor"),
            (r"abc\z", "the '\\z' anchor"),
            (r"\p{L}+", "a Unicode class escape"),
            (r"\x{41}", "a braced hex escape"),
            (r"\b{start}\w+", "a special word boundary"),
            ("[[:alpha:]]+", "a POSIX character class"),
            ("[a-z&&[^aeiou]]", "a class set operation"),
            ("(?x) a b", "inline flags"),
            ("(?i:abc)", "inline flags"),
        ] {
            let diagnostics =
                check(Property::new("sku", "string").rule(ValidationRule::Pattern(pattern.into())));
            assert_eq!(diagnostics.len(), 1, "{}", pattern);
            assert!(
                diagnostics[0].message.contains(construct),
                "{}: {}",
                pattern,
                diagnostics[0].message
            );
        }
    }

    #[test]
    fn test_shared_syntax_allowed() {
        for pattern in [
            "^(?<sku>[a-z]+)-(?:\\d{3})$",
            r"^[\w.+-]+@[a-z\]]+$",
            r"^\(\?P<",
            "^[A-Z]{2}[0-9]*$",
            r"\bword\b",
        ] {
            let diagnostics =
                check(Property::new("sku", "string").rule(ValidationRule::Pattern(pattern.into())));
            assert!(diagnostics.is_empty(), "{}: {:?}", pattern, diagnostics);
        }
    }

    #[test]
    fn test_empty_enum() {
        let diagnostics = check(Property::new("status", "string").rule(ValidationRule::Enum(vec![])));
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].message, "rule 'enum' needs at least one value");
    }

    #[test]
    fn test_conflicting_bounds() {
        let diagnostics = check(
            Property::new("age", "number")
                .rule(ValidationRule::Min(Bound::Number(65.0)))
                .rule(ValidationRule::Max(Bound::Number(18.0))),
        );
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(
            diagnostics[0].message,
            "conflicting bounds: min 65 is greater than max 18"
        );

        let diagnostics = check(
            Property::new("name", "string")
                .rule(ValidationRule::MinLength(10))
                .rule(ValidationRule::MaxLength(2)),
        );
        assert_eq!(diagnostics.len(), 1);
    }

    #[test]
    fn test_equal_bounds_allowed() {
        let diagnostics = check(
            Property::new("pin", "string")
                .rule(ValidationRule::MinLength(4))
                .rule(ValidationRule::MaxLength(4)),
        );
        assert!(diagnostics.is_empty());
    }
}
