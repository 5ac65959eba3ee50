use std::fmt;

use serde::Serialize;

/// Tag distinguishing the three node populations sharing one graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Category,
    Recipe,
    Ingredient,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKind::Category => write!(f, "category"),
            NodeKind::Recipe => write!(f, "recipe"),
            NodeKind::Ingredient => write!(f, "ingredient"),
        }
    }
}

/// Edge tag: category↔recipe or recipe↔ingredient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Relation {
    BelongsTo,
    Uses,
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Relation::BelongsTo => write!(f, "belongs_to"),
            Relation::Uses => write!(f, "uses"),
        }
    }
}

/// A single shortest path through the graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    /// Node labels from start to goal, inclusive
    pub nodes: Vec<String>,
    /// Edge count along the path (every edge costs 1)
    pub cost: u32,
}

/// One entry of a ranked ingredient-to-recipe search
#[derive(Debug, Clone, Serialize)]
pub struct RankedRoute {
    pub recipe: String,
    pub route: Route,
}
