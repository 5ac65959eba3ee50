//! `recetario find` - linear filter over catalog records

use crate::cli::{Cli, OutputFormat};
use recetario_core::catalog::Catalog;
use recetario_core::error::Result;

pub fn run(
    cli: &Cli,
    catalog: &Catalog,
    ingredient: Option<&str>,
    category: Option<&str>,
) -> Result<()> {
    let recipes = catalog.find_recipes(ingredient, category);

    if cli.format == OutputFormat::Json {
        let value = serde_json::json!({
            "ingredient": ingredient,
            "category": category,
            "recipes": recipes,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    if recipes.is_empty() {
        if !cli.quiet {
            println!("no recipes matched");
        }
        return Ok(());
    }

    for recipe in recipes {
        println!("{}", recipe);
    }

    Ok(())
}
