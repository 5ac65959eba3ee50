//! Undirected tripartite graph over categories, recipes, and ingredients
//!
//! All three node populations share one label namespace, matching the
//! catalog this models: a label that appears both as a recipe and as an
//! ingredient merges into a single node, and the kind tag follows the
//! most recent add. Edges are undirected, unweighted, and deduplicated.

pub mod traversal;
pub mod types;
pub mod ucs;

use std::collections::HashMap;

use crate::catalog::Catalog;

pub use traversal::depth_first;
pub use types::{NodeKind, RankedRoute, Relation, Route};
pub use ucs::{k_shortest_recipes, shortest_path};

#[derive(Debug, Clone)]
struct NodeEntry {
    kind: NodeKind,
    /// Adjacent labels in edge-insertion order
    neighbors: Vec<String>,
}

/// The recipe graph
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: HashMap<String, NodeEntry>,
    /// Labels in node-insertion order, for deterministic enumeration
    order: Vec<String>,
    /// Recipe names in catalog record order, independent of kind
    /// collisions
    recipe_order: Vec<String>,
    /// Relation per undirected edge, keyed by sorted endpoint pair
    relations: HashMap<(String, String), Relation>,
}

impl Graph {
    /// Assemble the graph from a catalog in one pass.
    ///
    /// Categories first, then per record the recipe node, its
    /// `BelongsTo` edge, and one `Uses` edge per ingredient. Node and
    /// edge creation is idempotent by label.
    pub fn build(catalog: &Catalog) -> Graph {
        let mut graph = Graph::default();

        for category in catalog.categories() {
            graph.add_node(&category, NodeKind::Category);
        }

        for recipe in catalog.recipes() {
            graph.add_node(&recipe.name, NodeKind::Recipe);
            if !graph.recipe_order.contains(&recipe.name) {
                graph.recipe_order.push(recipe.name.clone());
            }
            graph.add_edge(&recipe.category, &recipe.name, Relation::BelongsTo);

            for ingredient in &recipe.ingredients {
                graph.add_node(ingredient, NodeKind::Ingredient);
                graph.add_edge(&recipe.name, ingredient, Relation::Uses);
            }
        }

        tracing::debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "graph_built"
        );
        graph
    }

    /// Add a node if absent, or retag an existing label with the new
    /// kind. The last add wins, so a label reused across populations
    /// carries the kind of its most recent role.
    fn add_node(&mut self, label: &str, kind: NodeKind) {
        match self.nodes.get_mut(label) {
            Some(entry) => entry.kind = kind,
            None => {
                self.nodes.insert(
                    label.to_string(),
                    NodeEntry {
                        kind,
                        neighbors: Vec::new(),
                    },
                );
                self.order.push(label.to_string());
            }
        }
    }

    /// Add an undirected edge between two existing nodes.
    /// Re-adding an existing pair is a no-op (no parallel edges).
    fn add_edge(&mut self, a: &str, b: &str, relation: Relation) {
        let key = edge_key(a, b);
        if self.relations.contains_key(&key) {
            return;
        }
        self.relations.insert(key, relation);

        // Self-loop: one adjacency entry, not two
        if a == b {
            if let Some(entry) = self.nodes.get_mut(a) {
                entry.neighbors.push(b.to_string());
            }
            return;
        }

        if let Some(entry) = self.nodes.get_mut(a) {
            entry.neighbors.push(b.to_string());
        }
        if let Some(entry) = self.nodes.get_mut(b) {
            entry.neighbors.push(a.to_string());
        }
    }

    pub fn contains(&self, label: &str) -> bool {
        self.nodes.contains_key(label)
    }

    pub fn kind(&self, label: &str) -> Option<NodeKind> {
        self.nodes.get(label).map(|entry| entry.kind)
    }

    /// Adjacent labels in edge-insertion order (empty for absent labels)
    pub fn neighbors(&self, label: &str) -> &[String] {
        self.nodes
            .get(label)
            .map(|entry| entry.neighbors.as_slice())
            .unwrap_or(&[])
    }

    pub fn relation(&self, a: &str, b: &str) -> Option<Relation> {
        self.relations.get(&edge_key(a, b)).copied()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.relations.len()
    }

    /// All labels in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Recipe names in catalog record order.
    ///
    /// Sourced from the records rather than the kind tags, so a recipe
    /// whose label was later retagged by an ingredient re-add is still
    /// enumerated.
    pub fn recipes(&self) -> impl Iterator<Item = &str> {
        self.recipe_order.iter().map(String::as_str)
    }
}

fn edge_key(a: &str, b: &str) -> (String, String) {
    if a <= b {
        (a.to_string(), b.to_string())
    } else {
        (b.to_string(), a.to_string())
    }
}

#[cfg(test)]
mod tests;
