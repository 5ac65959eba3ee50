//! `recetario explore` - exhaustive depth-first walk from an ingredient

use crate::cli::{Cli, OutputFormat};
use recetario_core::error::Result;
use recetario_core::graph::{depth_first, Graph, NodeKind};

pub fn run(cli: &Cli, graph: &Graph, ingredient: &str) -> Result<()> {
    let walk = depth_first(graph, ingredient);
    let recipes: Vec<&str> = walk
        .iter()
        .filter(|label| graph.kind(label) == Some(NodeKind::Recipe))
        .map(String::as_str)
        .collect();

    if cli.format == OutputFormat::Json {
        let value = serde_json::json!({
            "start": ingredient,
            "recipes": recipes,
            "walk": walk,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    if walk.is_empty() {
        if !cli.quiet {
            println!("no node found for '{}'", ingredient);
        }
        return Ok(());
    }

    println!("Recipes reachable from '{}' ({}):", ingredient, recipes.len());
    for recipe in &recipes {
        println!("  {}", recipe);
    }
    println!();
    println!("Traversal order:");
    println!("{}", walk.join(" -> "));

    Ok(())
}
