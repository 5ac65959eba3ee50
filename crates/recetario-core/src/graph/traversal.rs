//! Exhaustive depth-first traversal
//!
//! Pre-order over the undirected graph with an explicit stack; the
//! graph can be arbitrarily deep without touching the call stack.

use std::collections::HashSet;

use crate::graph::Graph;

/// Walk the graph depth-first from `start`, recording every reachable
/// node once, in visitation order.
///
/// Neighbors are expanded in adjacency insertion order (pushed in
/// reverse so the first-inserted neighbor is explored first, matching
/// recursive pre-order). Returns an empty walk for an absent start.
pub fn depth_first(graph: &Graph, start: &str) -> Vec<String> {
    if !graph.contains(start) {
        return Vec::new();
    }

    let mut visited: HashSet<String> = HashSet::new();
    let mut walk: Vec<String> = Vec::new();
    let mut stack: Vec<String> = vec![start.to_string()];

    while let Some(node) = stack.pop() {
        // A label may be pushed by several neighbors before its first pop
        if !visited.insert(node.clone()) {
            continue;
        }

        for neighbor in graph.neighbors(&node).iter().rev() {
            if !visited.contains(neighbor) {
                stack.push(neighbor.clone());
            }
        }

        walk.push(node);
    }

    walk
}
