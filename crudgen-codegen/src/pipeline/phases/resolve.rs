//! Resolve phase - expands declared relations into concrete fields.
//!
//! Every relation is declared on one entity only. Resolution decides, per
//! relation, which side is the parent and what each side carries:
//!
//! | cardinality  | parent side                 | child side                     |
//! |--------------|-----------------------------|--------------------------------|
//! | one-to-one   | optional reference          | reference + unique FK column   |
//! | one-to-many  | collection (pluralized)     | reference + FK column          |
//! | many-to-many | collection (symmetric)      | collection (symmetric)         |
//!
//! The declaring entity is the parent when `isParent` is set, otherwise the
//! target is. Resolution builds new values and never touches the workflow.

use crudgen_core::{Cardinality, capitalize, pluralize, to_camel_case};
use crudgen_ir::{FieldOrigin, RelationField, RelationKind, ResolvedEntity, ResolvedWorkflow};
use crudgen_manifest::{Entity, Relation, Workflow};
use eyre::Result;
use indexmap::IndexMap;
use tracing::debug;

use crate::pipeline::{CompilationContext, Phase};

/// Phase that builds the resolved workflow.
pub struct ResolvePhase;

impl Phase for ResolvePhase {
    fn name(&self) -> &'static str {
        "resolve"
    }

    fn description(&self) -> &'static str {
        "Expand relations into fields on both entities"
    }

    fn run(&self, ctx: &mut CompilationContext<'_>) -> Result<()> {
        let resolved = resolve(ctx.workflow);
        debug!(
            entities = resolved.entities.len(),
            relation_fields = resolved.relation_field_count(),
            "resolved workflow"
        );
        ctx.resolved = Some(resolved);
        Ok(())
    }
}

/// Resolve a validated workflow.
///
/// Deterministic: the same workflow always yields the same result.
/// Relations whose target does not exist are skipped; validation rejects
/// them before this runs.
pub fn resolve(workflow: &Workflow) -> ResolvedWorkflow {
    let entities = workflow
        .entities
        .iter()
        .zip(plan(workflow))
        .map(|(entity, fields)| ResolvedEntity {
            name: entity.name.clone(),
            model_name: capitalize(&entity.name),
            properties: entity.properties.clone(),
            relation_fields: fields.into_iter().map(|p| p.field).collect(),
        })
        .collect();

    ResolvedWorkflow {
        name: workflow.name.clone(),
        display_name: workflow.title().to_string(),
        entities,
        cors: workflow.cors.clone(),
        features: workflow.features,
    }
}

/// Case-insensitive name → position lookup over the workflow's entities.
///
/// The first declaration wins when names collide.
pub(crate) struct EntityIndex<'a> {
    entities: &'a [Entity],
    by_name: IndexMap<String, usize>,
}

impl<'a> EntityIndex<'a> {
    pub(crate) fn new(workflow: &'a Workflow) -> Self {
        let mut by_name = IndexMap::with_capacity(workflow.entities.len());
        for (i, entity) in workflow.entities.iter().enumerate() {
            by_name.entry(entity.name.to_lowercase()).or_insert(i);
        }
        Self {
            entities: &workflow.entities,
            by_name,
        }
    }

    pub(crate) fn position(&self, name: &str) -> Option<usize> {
        self.by_name.get(&name.to_lowercase()).copied()
    }

    pub(crate) fn get(&self, name: &str) -> Option<&'a Entity> {
        self.position(name).map(|i| &self.entities[i])
    }
}

/// A relation field together with the relation that produced it.
#[derive(Debug, Clone)]
pub(crate) struct PlannedField {
    pub field: RelationField,
    /// Position of the declaring entity.
    pub declared_on: usize,
    /// Position of the relation within the declaring entity.
    pub relation_index: usize,
}

/// Compute the relation fields of every entity, indexed like `workflow.entities`.
///
/// Fields are appended in the order relations are walked: entities in
/// declaration order, then their relations in declaration order.
pub(crate) fn plan(workflow: &Workflow) -> Vec<Vec<PlannedField>> {
    let index = EntityIndex::new(workflow);
    let mut fields: Vec<Vec<PlannedField>> = vec![Vec::new(); workflow.entities.len()];

    for (declared_on, entity) in workflow.entities.iter().enumerate() {
        for (relation_index, relation) in entity.relations.iter().enumerate() {
            let Some(target_pos) = index.position(&relation.target_entity_name) else {
                continue;
            };

            let target = &workflow.entities[target_pos];
            for (pos, field) in expand(entity, declared_on, relation, target, target_pos) {
                fields[pos].push(PlannedField {
                    field,
                    declared_on,
                    relation_index,
                });
            }
        }
    }

    fields
}

/// Expand one relation into `(entity position, field)` pairs.
fn expand(
    declaring: &Entity,
    declaring_pos: usize,
    relation: &Relation,
    target: &Entity,
    target_pos: usize,
) -> Vec<(usize, RelationField)> {
    let is_self = declaring_pos == target_pos;
    let relation_name = format!("{}{}", capitalize(&declaring.name), capitalize(&target.name));
    let field = |name: String, other: &Entity, kind: RelationKind, origin: FieldOrigin| {
        RelationField {
            name,
            target: capitalize(&other.name),
            relation_name: relation_name.clone(),
            cardinality: relation.cardinality,
            kind,
            origin,
        }
    };

    match relation.cardinality {
        Cardinality::ManyToMany => {
            let forward = field(
                to_camel_case(&pluralize(&target.name)),
                target,
                RelationKind::Collection {
                    symmetric: true,
                    ids_field: format!("{}Ids", to_camel_case(&target.name)),
                },
                FieldOrigin::Declared,
            );

            let (name, ids_field) = if is_self {
                (
                    format!("related{}", capitalize(&pluralize(&declaring.name))),
                    format!("related{}Ids", capitalize(&declaring.name)),
                )
            } else {
                (
                    to_camel_case(&pluralize(&declaring.name)),
                    format!("{}Ids", to_camel_case(&declaring.name)),
                )
            };
            let reverse = field(
                name,
                declaring,
                RelationKind::Collection {
                    symmetric: true,
                    ids_field,
                },
                FieldOrigin::Synthesized,
            );

            vec![(declaring_pos, forward), (target_pos, reverse)]
        }
        Cardinality::OneToOne | Cardinality::OneToMany => {
            let (parent, parent_pos, child, child_pos) = if relation.is_parent {
                (declaring, declaring_pos, target, target_pos)
            } else {
                (target, target_pos, declaring, declaring_pos)
            };

            // On a self relation both sides live on the declaring entity; the
            // side the flag points at counts as declared.
            let (parent_origin, child_origin) = if relation.is_parent {
                (FieldOrigin::Declared, FieldOrigin::Synthesized)
            } else {
                (FieldOrigin::Synthesized, FieldOrigin::Declared)
            };

            let parent_kind = match relation.cardinality {
                Cardinality::OneToMany => RelationKind::Collection {
                    symmetric: false,
                    ids_field: format!("{}Ids", to_camel_case(&child.name)),
                },
                _ => RelationKind::Reference,
            };
            let parent_name = match relation.cardinality {
                Cardinality::OneToMany => to_camel_case(&pluralize(&child.name)),
                _ => to_camel_case(&child.name),
            };
            let parent_field = field(parent_name, child, parent_kind, parent_origin);

            let reference = if is_self {
                format!("parent{}", capitalize(&child.name))
            } else {
                to_camel_case(&parent.name)
            };
            let child_field = field(
                reference.clone(),
                parent,
                RelationKind::ForeignKey {
                    column: format!("{}Id", reference),
                    unique: relation.cardinality == Cardinality::OneToOne,
                },
                child_origin,
            );

            vec![(parent_pos, parent_field), (child_pos, child_field)]
        }
    }
}
