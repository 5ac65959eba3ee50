use super::*;
use crate::catalog::{Catalog, Recipe};

/// 2 categories, 3 recipes, 5 distinct ingredients, no label collisions
pub(crate) fn fixture_catalog() -> Catalog {
    Catalog::new(vec![
        Recipe::new("Tarta", "Postre", vec!["manzana".into(), "harina".into()]).unwrap(),
        Recipe::new("Flan", "Postre", vec!["huevo".into(), "azúcar".into()]).unwrap(),
        Recipe::new("Jugo", "Bebida", vec!["naranja".into()]).unwrap(),
    ])
}

#[test]
fn test_node_and_edge_counts() {
    let graph = Graph::build(&fixture_catalog());

    // 2 categories + 3 recipes + 5 ingredients
    assert_eq!(graph.node_count(), 10);
    // 3 belongs_to + 5 ingredient usages
    assert_eq!(graph.edge_count(), 8);
}

#[test]
fn test_node_kinds() {
    let graph = Graph::build(&fixture_catalog());

    assert_eq!(graph.kind("Postre"), Some(NodeKind::Category));
    assert_eq!(graph.kind("Tarta"), Some(NodeKind::Recipe));
    assert_eq!(graph.kind("manzana"), Some(NodeKind::Ingredient));
    assert_eq!(graph.kind("desconocido"), None);
}

#[test]
fn test_edge_relations() {
    let graph = Graph::build(&fixture_catalog());

    assert_eq!(graph.relation("Postre", "Tarta"), Some(Relation::BelongsTo));
    // Undirected: endpoint order does not matter
    assert_eq!(graph.relation("Tarta", "Postre"), Some(Relation::BelongsTo));
    assert_eq!(graph.relation("Tarta", "manzana"), Some(Relation::Uses));
    assert_eq!(graph.relation("Postre", "manzana"), None);
}

#[test]
fn test_shared_nodes_not_duplicated() {
    let catalog = Catalog::new(vec![
        Recipe::new("Tarta", "Postre", vec!["azúcar".into()]).unwrap(),
        Recipe::new("Flan", "Postre", vec!["azúcar".into()]).unwrap(),
    ]);
    let graph = Graph::build(&catalog);

    // Postre and azúcar each appear once
    assert_eq!(graph.node_count(), 4);
    assert_eq!(graph.edge_count(), 4);
    assert_eq!(graph.neighbors("Postre"), ["Tarta", "Flan"]);
    assert_eq!(graph.neighbors("azúcar"), ["Tarta", "Flan"]);
}

#[test]
fn test_neighbors_keep_insertion_order() {
    let graph = Graph::build(&fixture_catalog());

    // Category edge lands before the ingredient edges
    assert_eq!(graph.neighbors("Tarta"), ["Postre", "manzana", "harina"]);
    assert!(graph.neighbors("inexistente").is_empty());
}

#[test]
fn test_recipes_enumerate_in_record_order() {
    let graph = Graph::build(&fixture_catalog());

    let recipes: Vec<&str> = graph.recipes().collect();
    assert_eq!(recipes, ["Tarta", "Flan", "Jugo"]);
}

#[test]
fn test_label_collision_merges_and_last_kind_wins() {
    // "Mayonesa" appears first as an ingredient, then as a recipe name
    let catalog = Catalog::new(vec![
        Recipe::new("Sandwich", "Entrada", vec!["Mayonesa".into()]).unwrap(),
        Recipe::new("Mayonesa", "Salsa", vec!["huevo".into(), "aceite".into()]).unwrap(),
    ]);
    let graph = Graph::build(&catalog);

    // One merged node; the later recipe add retags it
    assert_eq!(graph.kind("Mayonesa"), Some(NodeKind::Recipe));
    // The merged node carries edges from both roles
    assert_eq!(graph.relation("Sandwich", "Mayonesa"), Some(Relation::Uses));
    assert_eq!(
        graph.relation("Salsa", "Mayonesa"),
        Some(Relation::BelongsTo)
    );
    assert_eq!(graph.relation("Mayonesa", "huevo"), Some(Relation::Uses));
    // Both records stay enumerable as recipes
    let recipes: Vec<&str> = graph.recipes().collect();
    assert_eq!(recipes, ["Sandwich", "Mayonesa"]);
}

#[test]
fn test_ingredient_readd_retags_recipe_node() {
    let catalog = Catalog::new(vec![
        Recipe::new("Mayonesa", "Salsa", vec!["huevo".into()]).unwrap(),
        Recipe::new("Sandwich", "Entrada", vec!["Mayonesa".into()]).unwrap(),
    ]);
    let graph = Graph::build(&catalog);

    // The later ingredient re-add wins the kind tag...
    assert_eq!(graph.kind("Mayonesa"), Some(NodeKind::Ingredient));
    // ...but record enumeration is unaffected
    let recipes: Vec<&str> = graph.recipes().collect();
    assert_eq!(recipes, ["Mayonesa", "Sandwich"]);
}

#[test]
fn test_record_named_after_its_category_has_single_self_edge() {
    let catalog = Catalog::new(vec![Recipe::new("Pan", "Pan", vec!["harina".into()]).unwrap()]);
    let graph = Graph::build(&catalog);

    assert_eq!(graph.node_count(), 2);
    assert_eq!(graph.edge_count(), 2);
    // The self-loop appears once in the adjacency list, not twice
    assert_eq!(graph.neighbors("Pan"), ["Pan", "harina"]);
    assert_eq!(graph.relation("Pan", "Pan"), Some(Relation::BelongsTo));
}

#[test]
fn test_empty_catalog_builds_empty_graph() {
    let graph = Graph::build(&Catalog::default());

    assert_eq!(graph.node_count(), 0);
    assert_eq!(graph.edge_count(), 0);
    assert_eq!(graph.recipes().count(), 0);
}

#[test]
fn test_recipe_without_ingredients_still_linked_to_category() {
    let catalog = Catalog::new(vec![Recipe::new("Agua", "Bebida", vec![]).unwrap()]);
    let graph = Graph::build(&catalog);

    assert_eq!(graph.node_count(), 2);
    assert_eq!(graph.relation("Bebida", "Agua"), Some(Relation::BelongsTo));
}
