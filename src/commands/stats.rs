//! `recetario stats` - catalog and graph size statistics

use crate::cli::{Cli, OutputFormat};
use recetario_core::catalog::Catalog;
use recetario_core::error::Result;
use recetario_core::graph::{Graph, NodeKind};

pub fn run(cli: &Cli, catalog: &Catalog, graph: &Graph) -> Result<()> {
    let ingredients = graph
        .nodes()
        .filter(|label| graph.kind(label) == Some(NodeKind::Ingredient))
        .count();

    if cli.format == OutputFormat::Json {
        let value = serde_json::json!({
            "recipes": catalog.recipes().len(),
            "categories": catalog.categories().len(),
            "ingredients": ingredients,
            "nodes": graph.node_count(),
            "edges": graph.edge_count(),
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!("recipes:     {}", catalog.recipes().len());
    println!("categories:  {}", catalog.categories().len());
    println!("ingredients: {}", ingredients);
    println!("graph nodes: {}", graph.node_count());
    println!("graph edges: {}", graph.edge_count());

    Ok(())
}
