//! Identifier rules for project, entity and property names.

use std::fmt;

/// JavaScript/TypeScript reserved words that cannot name a generated binding.
pub const RESERVED_WORDS: &[&str] = &[
    // JavaScript reserved words
    "break",
    "case",
    "catch",
    "class",
    "const",
    "continue",
    "debugger",
    "default",
    "delete",
    "do",
    "else",
    "enum",
    "export",
    "extends",
    "false",
    "finally",
    "for",
    "function",
    "if",
    "import",
    "in",
    "instanceof",
    "new",
    "null",
    "return",
    "super",
    "switch",
    "this",
    "throw",
    "true",
    "try",
    "typeof",
    "var",
    "void",
    "while",
    "with",
    // Strict mode and TypeScript reserved words
    "await",
    "implements",
    "interface",
    "let",
    "package",
    "private",
    "protected",
    "public",
    "static",
    "yield",
];

/// Members every generated object already has.
pub const INFRASTRUCTURE_MEMBERS: &[&str] = &[
    "constructor",
    "toString",
    "toLocaleString",
    "valueOf",
    "hasOwnProperty",
    "isPrototypeOf",
    "propertyIsEnumerable",
    "prototype",
    "__proto__",
    "__defineGetter__",
    "__defineSetter__",
    "__lookupGetter__",
    "__lookupSetter__",
];

/// Fields every model receives; properties may not redeclare them.
pub const GENERATED_FIELDS: &[&str] = &["id", "createdAt", "updatedAt"];

/// Built-in storage schema type names; a model may not shadow them.
pub const STORAGE_SCALARS: &[&str] = &[
    "String",
    "Int",
    "Float",
    "Boolean",
    "DateTime",
    "Json",
    "Bytes",
    "Decimal",
    "BigInt",
    "Prisma",
    "PrismaClient",
];

/// Why a name was rejected as an identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierIssue {
    Empty,
    InvalidStart(char),
    InvalidChar(char),
    Reserved,
    InfrastructureMember,
}

impl IdentifierIssue {
    /// Short machine-readable code for reports.
    pub fn code(&self) -> &'static str {
        match self {
            IdentifierIssue::Empty => "empty",
            IdentifierIssue::InvalidStart(_) => "invalid-start",
            IdentifierIssue::InvalidChar(_) => "invalid-char",
            IdentifierIssue::Reserved => "reserved-word",
            IdentifierIssue::InfrastructureMember => "infrastructure-member",
        }
    }
}

impl fmt::Display for IdentifierIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdentifierIssue::Empty => write!(f, "name cannot be empty"),
            IdentifierIssue::InvalidStart(c) => {
                write!(f, "must start with a letter or underscore, found '{}'", c)
            }
            IdentifierIssue::InvalidChar(c) => write!(f, "contains invalid character '{}'", c),
            IdentifierIssue::Reserved => write!(f, "is a reserved word in the generated code"),
            IdentifierIssue::InfrastructureMember => {
                write!(f, "collides with a built-in object member")
            }
        }
    }
}

/// Check that `name` is usable as an identifier in every generated artifact.
pub fn check_identifier(name: &str) -> Option<IdentifierIssue> {
    let mut chars = name.chars();
    let first = match chars.next() {
        Some(c) => c,
        None => return Some(IdentifierIssue::Empty),
    };

    if !first.is_ascii_alphabetic() && first != '_' {
        return Some(IdentifierIssue::InvalidStart(first));
    }

    if let Some(c) = chars.find(|c| !c.is_ascii_alphanumeric() && *c != '_') {
        return Some(IdentifierIssue::InvalidChar(c));
    }

    if RESERVED_WORDS.contains(&name) {
        return Some(IdentifierIssue::Reserved);
    }

    if INFRASTRUCTURE_MEMBERS.contains(&name) {
        return Some(IdentifierIssue::InfrastructureMember);
    }

    None
}

/// Whether `name` clashes with a generated field, ignoring case.
pub fn is_generated_field(name: &str) -> bool {
    GENERATED_FIELDS
        .iter()
        .any(|field| field.eq_ignore_ascii_case(name))
}

/// Whether `name` is a built-in storage type name (exact match).
pub fn is_storage_scalar(name: &str) -> bool {
    STORAGE_SCALARS.contains(&name)
}
