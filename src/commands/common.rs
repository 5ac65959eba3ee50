//! `recetario common` - ingredients shared by two recipes

use crate::cli::{Cli, OutputFormat};
use recetario_core::catalog::Catalog;
use recetario_core::error::Result;

pub fn run(cli: &Cli, catalog: &Catalog, recipe1: &str, recipe2: &str) -> Result<()> {
    let shared = catalog.common_ingredients(recipe1, recipe2);

    if cli.format == OutputFormat::Json {
        let value = serde_json::json!({
            "recipe1": recipe1,
            "recipe2": recipe2,
            "ingredients": shared,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    if shared.is_empty() {
        if !cli.quiet {
            println!("no shared ingredients between '{}' and '{}'", recipe1, recipe2);
        }
        return Ok(());
    }

    for ingredient in shared {
        println!("{}", ingredient);
    }

    Ok(())
}
