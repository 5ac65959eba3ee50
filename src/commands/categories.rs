//! `recetario categories` - recipes grouped by category

use crate::cli::{Cli, OutputFormat};
use recetario_core::catalog::Catalog;
use recetario_core::error::Result;

pub fn run(cli: &Cli, catalog: &Catalog) -> Result<()> {
    let groups = catalog.group_by_category();

    if cli.format == OutputFormat::Json {
        let value = serde_json::json!({ "categories": groups });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    if groups.is_empty() {
        if !cli.quiet {
            println!("catalog is empty");
        }
        return Ok(());
    }

    for (category, recipes) in groups {
        println!("{} ({}):", category, recipes.len());
        for recipe in recipes {
            println!("  {}", recipe);
        }
    }

    Ok(())
}
