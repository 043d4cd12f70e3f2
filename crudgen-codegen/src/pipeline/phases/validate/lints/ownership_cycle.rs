//! Lint for cycles in the ownership graph.

use std::collections::HashSet;

use crudgen_manifest::Workflow;

use super::super::Lint;
use crate::pipeline::{Diagnostic, Location, phases::resolve::EntityIndex};

/// Lint that errors when parent-owned relations form a cycle.
///
/// Only one-to-one and one-to-many relations declared with `isParent` are
/// edges. Many-to-many relations, child-declared relations and self
/// relations never take part.
pub struct OwnershipCycleLint;

/// An ownership edge: the owned entity and the relation that declares it.
#[derive(Debug, Clone, Copy)]
struct Edge {
    to: usize,
    relation_index: usize,
}

impl Lint for OwnershipCycleLint {
    fn name(&self) -> &'static str {
        "ownership-cycle"
    }

    fn description(&self) -> &'static str {
        "Detect cycles among parent-owned relations"
    }

    fn check(&self, workflow: &Workflow, diagnostics: &mut Vec<Diagnostic>) {
        let graph = ownership_graph(workflow);
        let mut search = CycleSearch {
            graph: &graph,
            visited: HashSet::new(),
            path: Vec::new(),
            cycles: Vec::new(),
            seen: HashSet::new(),
        };
        for start in 0..graph.len() {
            search.dfs(start);
        }

        for cycle in search.cycles {
            let names: Vec<&str> = cycle
                .iter()
                .chain(cycle.first())
                .map(|&i| workflow.entities[i].name.as_str())
                .collect();

            let from = &workflow.entities[cycle[0]];
            let next = cycle.get(1).copied().unwrap_or(cycle[0]);
            let location = graph[cycle[0]]
                .iter()
                .find(|e| e.to == next)
                .map(|e| {
                    Location::relation(
                        &from.name,
                        e.relation_index,
                        &from.relations[e.relation_index].target_entity_name,
                    )
                })
                .unwrap_or_else(|| Location::entity(&from.name));

            diagnostics.push(
                Diagnostic::error(
                    self.name(),
                    format!("ownership cycle: {}", names.join(" -> ")),
                )
                .at(location),
            );
        }
    }
}

/// Adjacency list over entity positions.
fn ownership_graph(workflow: &Workflow) -> Vec<Vec<Edge>> {
    let index = EntityIndex::new(workflow);

    workflow
        .entities
        .iter()
        .enumerate()
        .map(|(from, entity)| {
            entity
                .relations
                .iter()
                .enumerate()
                .filter(|(_, r)| r.is_parent && r.cardinality.implies_ownership())
                .filter_map(|(relation_index, r)| {
                    let to = index.position(&r.target_entity_name)?;
                    (to != from).then_some(Edge { to, relation_index })
                })
                .collect()
        })
        .collect()
}

struct CycleSearch<'g> {
    graph: &'g [Vec<Edge>],
    /// Fully explored nodes.
    visited: HashSet<usize>,
    /// Nodes on the current DFS path.
    path: Vec<usize>,
    cycles: Vec<Vec<usize>>,
    /// Normalized cycles already reported.
    seen: HashSet<Vec<usize>>,
}

impl CycleSearch<'_> {
    fn dfs(&mut self, node: usize) {
        if let Some(start) = self.path.iter().position(|&n| n == node) {
            let cycle = rotate_to_min(&self.path[start..]);
            if self.seen.insert(cycle.clone()) {
                self.cycles.push(cycle);
            }
            return;
        }

        if self.visited.contains(&node) {
            return;
        }

        let graph = self.graph;
        self.path.push(node);
        for edge in &graph[node] {
            self.dfs(edge.to);
        }
        self.path.pop();
        self.visited.insert(node);
    }
}

/// Rotate a cycle so it starts at its earliest-declared entity.
fn rotate_to_min(cycle: &[usize]) -> Vec<usize> {
    let min = cycle
        .iter()
        .enumerate()
        .min_by_key(|&(_, n)| *n)
        .map(|(i, _)| i)
        .unwrap_or(0);
    cycle[min..].iter().chain(&cycle[..min]).copied().collect()
}
