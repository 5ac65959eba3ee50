//! `recetario path` - one shortest path between two labels

use crate::cli::{Cli, OutputFormat};
use recetario_core::error::Result;
use recetario_core::graph::{shortest_path, Graph};

pub fn run(cli: &Cli, graph: &Graph, from: &str, to: &str) -> Result<()> {
    let route = shortest_path(graph, from, to);

    if cli.format == OutputFormat::Json {
        let value = match &route {
            Some(route) => serde_json::json!({
                "from": from,
                "to": to,
                "found": true,
                "nodes": route.nodes,
                "cost": route.cost,
            }),
            None => serde_json::json!({
                "from": from,
                "to": to,
                "found": false,
            }),
        };
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    match route {
        Some(route) => {
            println!("{}  (cost: {})", route.nodes.join(" -> "), route.cost);
        }
        None => {
            // Absent labels and disconnected components both land here;
            // a miss is a result, not an error.
            if !cli.quiet {
                println!("no path found between '{}' and '{}'", from, to);
            }
        }
    }

    Ok(())
}
