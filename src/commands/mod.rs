//! Command dispatch logic for recetario

pub mod categories;
pub mod common;
pub mod explore;
pub mod find;
pub mod nearest;
pub mod path;
pub mod stats;

use std::time::Instant;

use crate::cli::{Cli, Commands};
use recetario_core::catalog::load_catalog;
use recetario_core::error::Result;
use recetario_core::graph::Graph;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    // Every command starts from a fresh load; the graph is rebuilt
    // from scratch on every run.
    let catalog = load_catalog(&cli.file)?;

    if cli.verbose {
        eprintln!("load_catalog: {:?}", start.elapsed());
    }

    match &cli.command {
        Commands::Explore { ingredient } => {
            let graph = Graph::build(&catalog);
            explore::run(cli, &graph, ingredient)
        }

        Commands::Nearest { ingredient, k } => {
            let graph = Graph::build(&catalog);
            nearest::run(cli, &graph, ingredient, *k)
        }

        Commands::Path { from, to } => {
            let graph = Graph::build(&catalog);
            path::run(cli, &graph, from, to)
        }

        Commands::Find {
            ingredient,
            category,
        } => find::run(cli, &catalog, ingredient.as_deref(), category.as_deref()),

        Commands::Common { recipe1, recipe2 } => common::run(cli, &catalog, recipe1, recipe2),

        Commands::Categories => categories::run(cli, &catalog),

        Commands::Stats => {
            let graph = Graph::build(&catalog);
            stats::run(cli, &catalog, &graph)
        }
    }
}
