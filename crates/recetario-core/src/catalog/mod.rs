//! Recipe catalog: typed records and linear query filters
//!
//! The catalog holds the records exactly as loaded; the graph is built
//! from it separately. Filters here are simple linear scans over the
//! records and never touch the graph.

pub mod loader;

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

pub use loader::load_catalog;

/// A single recipe record from one catalog row
///
/// Immutable after construction. Ingredient order is row order;
/// duplicates across cells are preserved, not merged.
#[derive(Debug, Clone, Serialize)]
pub struct Recipe {
    pub name: String,
    pub category: String,
    pub ingredients: Vec<String>,
}

impl Recipe {
    /// Build a record, rejecting empty names and categories.
    ///
    /// Inputs are trimmed; `None` means the row fails validation and
    /// should be skipped by the loader.
    pub fn new(name: &str, category: &str, ingredients: Vec<String>) -> Option<Self> {
        let name = name.trim();
        let category = category.trim();
        if name.is_empty() || category.is_empty() {
            return None;
        }
        Some(Recipe {
            name: name.to_string(),
            category: category.to_string(),
            ingredients,
        })
    }
}

/// The loaded recipe catalog
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    recipes: Vec<Recipe>,
}

impl Catalog {
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Catalog { recipes }
    }

    /// All records in load order
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Distinct categories in order of first appearance
    pub fn categories(&self) -> Vec<String> {
        let mut seen = BTreeSet::new();
        let mut out = Vec::new();
        for recipe in &self.recipes {
            if seen.insert(recipe.category.as_str()) {
                out.push(recipe.category.clone());
            }
        }
        out
    }

    /// Names of recipes matching both optional criteria.
    ///
    /// Matching is exact and case-sensitive on the already-trimmed
    /// record fields.
    pub fn find_recipes(&self, ingredient: Option<&str>, category: Option<&str>) -> Vec<String> {
        self.recipes
            .iter()
            .filter(|r| category.is_none_or(|c| r.category == c))
            .filter(|r| ingredient.is_none_or(|i| r.ingredients.iter().any(|ing| ing == i)))
            .map(|r| r.name.clone())
            .collect()
    }

    /// Ingredients shared by two named recipes (empty if either is unknown)
    pub fn common_ingredients(&self, name1: &str, name2: &str) -> BTreeSet<String> {
        let ingredients_of = |name: &str| -> BTreeSet<String> {
            self.recipes
                .iter()
                .filter(|r| r.name == name)
                .flat_map(|r| r.ingredients.iter().cloned())
                .collect()
        };
        ingredients_of(name1)
            .intersection(&ingredients_of(name2))
            .cloned()
            .collect()
    }

    /// Recipe names grouped by category, record order within each group
    pub fn group_by_category(&self) -> BTreeMap<String, Vec<String>> {
        let mut groups: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for recipe in &self.recipes {
            groups
                .entry(recipe.category.clone())
                .or_default()
                .push(recipe.name.clone());
        }
        groups
    }
}

#[cfg(test)]
mod tests;
