//! Relation fields produced by resolution.

use crudgen_core::Cardinality;
use serde::Serialize;

/// A field on an entity that points at another entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationField {
    /// Field name on the owning entity (e.g., "orders", "user").
    pub name: String,
    /// Model name of the entity on the other side.
    pub target: String,
    /// Stable name shared by both sides of the relation (e.g., "OrderUser").
    pub relation_name: String,
    pub cardinality: Cardinality,
    pub kind: RelationKind,
    pub origin: FieldOrigin,
}

/// Shape of a relation field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum RelationKind {
    /// Optional single reference without a foreign key (parent side of one-to-one).
    Reference,
    /// Single reference backed by a foreign-key column on this entity.
    ForeignKey {
        column: String,
        /// Set for one-to-one relations.
        unique: bool,
    },
    /// A list of related records.
    Collection {
        /// Set when both sides are collections (many-to-many).
        symmetric: bool,
        /// Name of the id-list field used to connect records on create.
        ids_field: String,
    },
}

/// Which side of the input declared the relation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldOrigin {
    /// Field lives on the entity that declared the relation.
    Declared,
    /// Reciprocal field added to the target entity.
    Synthesized,
}

impl RelationField {
    pub fn is_collection(&self) -> bool {
        matches!(self.kind, RelationKind::Collection { .. })
    }

    /// The foreign-key column this field owns, if any.
    pub fn foreign_key(&self) -> Option<&str> {
        match &self.kind {
            RelationKind::ForeignKey { column, .. } => Some(column.as_str()),
            _ => None,
        }
    }

    /// The input field used to connect existing records by id.
    pub fn connect_field(&self) -> Option<&str> {
        match &self.kind {
            RelationKind::Reference => None,
            RelationKind::ForeignKey { column, .. } => Some(column.as_str()),
            RelationKind::Collection { ids_field, .. } => Some(ids_field.as_str()),
        }
    }

    /// Every name this field occupies on its entity, including the
    /// connect-by-id input field.
    pub fn occupied_names(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.name.as_str()).chain(self.connect_field())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(kind: RelationKind) -> RelationField {
        RelationField {
            name: "user".into(),
            target: "User".into(),
            relation_name: "OrderUser".into(),
            cardinality: Cardinality::OneToMany,
            kind,
            origin: FieldOrigin::Declared,
        }
    }

    #[test]
    fn test_foreign_key_field() {
        let f = field(RelationKind::ForeignKey {
            column: "userId".into(),
            unique: false,
        });
        assert_eq!(f.foreign_key(), Some("userId"));
        assert_eq!(f.connect_field(), Some("userId"));
        assert_eq!(f.occupied_names().collect::<Vec<_>>(), ["user", "userId"]);
    }

    #[test]
    fn test_reference_has_no_connect_field() {
        let f = field(RelationKind::Reference);
        assert_eq!(f.connect_field(), None);
        assert_eq!(f.occupied_names().collect::<Vec<_>>(), ["user"]);
    }

    #[test]
    fn test_collection_connect_field() {
        let f = field(RelationKind::Collection {
            symmetric: true,
            ids_field: "userIds".into(),
        });
        assert!(f.is_collection());
        assert_eq!(f.foreign_key(), None);
        assert_eq!(f.connect_field(), Some("userIds"));
        assert_eq!(f.occupied_names().collect::<Vec<_>>(), ["user", "userIds"]);
    }

    #[test]
    fn test_serialize_kind() {
        let f = field(RelationKind::ForeignKey {
            column: "userId".into(),
            unique: true,
        });
        let json = serde_json::to_value(&f).unwrap();
        assert_eq!(json["kind"]["kind"], "foreignKey");
        assert_eq!(json["kind"]["column"], "userId");
        assert_eq!(json["relationName"], "OrderUser");
        assert_eq!(json["cardinality"], "one-to-many");
    }
}
