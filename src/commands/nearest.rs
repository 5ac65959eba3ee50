//! `recetario nearest` - top-k uniform-cost routes from an ingredient

use crate::cli::{Cli, OutputFormat};
use recetario_core::error::Result;
use recetario_core::graph::{k_shortest_recipes, Graph};

pub fn run(cli: &Cli, graph: &Graph, ingredient: &str, k: usize) -> Result<()> {
    let ranked = k_shortest_recipes(graph, ingredient, k);

    if cli.format == OutputFormat::Json {
        let value = serde_json::json!({
            "start": ingredient,
            "k": k,
            "routes": ranked,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    if ranked.is_empty() {
        if !cli.quiet {
            println!("no routes found from '{}'", ingredient);
        }
        return Ok(());
    }

    println!("{} closest recipes to '{}':", ranked.len(), ingredient);
    for (i, entry) in ranked.iter().enumerate() {
        println!("{}. {} (cost: {})", i + 1, entry.recipe, entry.route.cost);
        println!("   route: {}", entry.route.nodes.join(" -> "));
    }

    Ok(())
}
