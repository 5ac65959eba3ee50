//! Uniform-cost search over the recipe graph
//!
//! Every edge costs 1, so this degenerates to breadth-first shortest
//! path, but the frontier is a cost-ordered heap and the first pop of
//! the goal wins. Ties between equal-cost frontier entries are broken
//! by lexicographic comparison of the accumulated path, which keeps
//! output reproducible across runs.

use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashSet};

use crate::graph::types::{RankedRoute, Route};
use crate::graph::Graph;

/// Frontier entry: accumulated cost plus the path that reached it.
///
/// Ordered by cost, then lexicographically by path.
#[derive(Debug, Clone, PartialEq, Eq)]
struct FrontierEntry {
    cost: u32,
    path: Vec<String>,
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cost
            .cmp(&other.cost)
            .then_with(|| self.path.cmp(&other.path))
    }
}

/// Find one shortest path between two labels.
///
/// Returns `None` when either endpoint is absent or no path exists.
/// A node is marked visited when popped, not when enqueued, so the
/// frontier may carry several paths to the same node at once.
pub fn shortest_path(graph: &Graph, start: &str, goal: &str) -> Option<Route> {
    if !graph.contains(start) || !graph.contains(goal) {
        return None;
    }

    let mut visited: HashSet<String> = HashSet::new();
    let mut frontier: BinaryHeap<Reverse<FrontierEntry>> = BinaryHeap::new();
    frontier.push(Reverse(FrontierEntry {
        cost: 0,
        path: vec![start.to_string()],
    }));

    while let Some(Reverse(FrontierEntry { cost, path })) = frontier.pop() {
        let current = path.last()?.clone();

        // First pop of the goal is optimal: costs are non-negative and
        // non-decreasing along any path.
        if current == goal {
            return Some(Route { nodes: path, cost });
        }

        if !visited.insert(current.clone()) {
            continue;
        }

        for neighbor in graph.neighbors(&current) {
            if !visited.contains(neighbor) {
                let mut next = path.clone();
                next.push(neighbor.clone());
                frontier.push(Reverse(FrontierEntry {
                    cost: cost + 1,
                    path: next,
                }));
            }
        }
    }

    None
}

/// Rank the k closest recipes to an ingredient.
///
/// Runs an independent search per recipe in catalog record order,
/// drops unreachable recipes, and stable-sorts ascending by cost, so
/// equal-cost recipes keep their enumeration order. O(R · V log V) for
/// R recipes over V nodes; fine at catalog scale.
pub fn k_shortest_recipes(graph: &Graph, ingredient: &str, k: usize) -> Vec<RankedRoute> {
    let mut routes: Vec<RankedRoute> = graph
        .recipes()
        .filter_map(|recipe| {
            shortest_path(graph, ingredient, recipe).map(|route| RankedRoute {
                recipe: recipe.to_string(),
                route,
            })
        })
        .collect();

    routes.sort_by_key(|ranked| ranked.route.cost);
    routes.truncate(k);
    routes
}
