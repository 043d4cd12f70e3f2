//! Built-in lints for workflow validation.

mod duplicate_name;
mod duplicate_relation;
mod entity_count;
mod field_collision;
mod identifier;
mod many_to_many_parent;
mod ownership_cycle;
mod relation_target;
mod rule_compatibility;

pub use duplicate_name::DuplicateNameLint;
pub use duplicate_relation::DuplicateRelationLint;
pub use entity_count::EntityCountLint;
pub use field_collision::FieldCollisionLint;
pub use identifier::IdentifierLint;
pub use many_to_many_parent::ManyToManyParentLint;
pub use ownership_cycle::OwnershipCycleLint;
pub use relation_target::RelationTargetLint;
pub use rule_compatibility::RuleCompatibilityLint;
