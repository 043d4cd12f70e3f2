//! Diagnostic types for the compilation pipeline.

use std::fmt;

use serde::Serialize;

/// Severity level for a diagnostic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Blocks compilation.
    Error,
    /// Reported, but compilation proceeds.
    Warning,
}

impl Severity {
    pub fn is_error(&self) -> bool {
        matches!(self, Severity::Error)
    }

    pub fn is_warning(&self) -> bool {
        matches!(self, Severity::Warning)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Where in the workflow a diagnostic applies.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Location {
    /// The workflow itself (project name, entity count).
    Workflow,
    Entity {
        entity: String,
    },
    Property {
        entity: String,
        property: String,
    },
    /// The `index`-th relation declared on `entity`.
    Relation {
        entity: String,
        index: usize,
        target: String,
    },
}

impl Location {
    pub fn entity(entity: impl Into<String>) -> Self {
        Location::Entity {
            entity: entity.into(),
        }
    }

    pub fn property(entity: impl Into<String>, property: impl Into<String>) -> Self {
        Location::Property {
            entity: entity.into(),
            property: property.into(),
        }
    }

    pub fn relation(entity: impl Into<String>, index: usize, target: impl Into<String>) -> Self {
        Location::Relation {
            entity: entity.into(),
            index,
            target: target.into(),
        }
    }

    /// The entity this location belongs to, if any.
    pub fn entity_name(&self) -> Option<&str> {
        match self {
            Location::Workflow => None,
            Location::Entity { entity }
            | Location::Property { entity, .. }
            | Location::Relation { entity, .. } => Some(entity),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Workflow => write!(f, "workflow"),
            Location::Entity { entity } => write!(f, "{}", entity),
            Location::Property { entity, property } => write!(f, "{}.{}", entity, property),
            Location::Relation {
                entity,
                index,
                target,
            } => write!(f, "{}.relations[{}] -> {}", entity, index, target),
        }
    }
}

/// A diagnostic produced by a lint or phase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    /// Machine-readable code, usually the lint name (e.g., "duplicate-name").
    pub code: String,
    pub message: String,
    pub location: Option<Location>,
}

impl Diagnostic {
    pub fn error(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code: code.into(),
            message: message.into(),
            location: None,
        }
    }

    pub fn warning(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code: code.into(),
            message: message.into(),
            location: None,
        }
    }

    /// Add a location to this diagnostic.
    pub fn at(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]: {}", self.severity, self.code, self.message)?;
        if let Some(loc) = &self.location {
            write!(f, " (at {})", loc)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_display() {
        let diag = Diagnostic::error("duplicate-name", "duplicate entity 'user'")
            .at(Location::entity("user"));
        assert_eq!(
            diag.to_string(),
            "error[duplicate-name]: duplicate entity 'user' (at user)"
        );
    }

    #[test]
    fn test_location_display() {
        assert_eq!(Location::Workflow.to_string(), "workflow");
        assert_eq!(Location::property("user", "age").to_string(), "user.age");
        assert_eq!(
            Location::relation("order", 0, "user").to_string(),
            "order.relations[0] -> user"
        );
    }

    #[test]
    fn test_location_serialize() {
        let json = serde_json::to_value(Location::property("user", "age")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"kind": "property", "entity": "user", "property": "age"})
        );
    }

    #[test]
    fn test_severity() {
        assert!(Diagnostic::warning("x", "y").severity.is_warning());
        assert!(!Severity::Warning.is_error());
        assert_eq!(Severity::Error.to_string(), "error");
    }
}
