//! Catalog loading: encoding fallback and row parsing
//!
//! The input is semicolon-delimited text. The first row is a header and
//! is skipped. Each data row is `name;category;cell;cell;...` where
//! every trailing cell holds a comma-separated ingredient list.

use std::fs;
use std::path::Path;

use encoding_rs::{Encoding, UTF_8, WINDOWS_1252};

use crate::catalog::{Catalog, Recipe};
use crate::error::{RecetarioError, Result};

/// Candidate encodings, tried in order; the first lossless decode wins.
///
/// The WHATWG registry maps latin-1, iso-8859-1, and cp1252 labels all
/// to windows-1252, so two candidates cover the full fallback chain.
/// windows-1252 accepts every byte sequence, so decoding only fails
/// when the file cannot be read at all.
const ENCODINGS: &[&Encoding] = &[UTF_8, WINDOWS_1252];

/// Load the catalog from a semicolon-delimited text file
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    if !path.is_file() {
        return Err(RecetarioError::CatalogNotFound {
            path: path.to_path_buf(),
        });
    }

    let bytes = fs::read(path)?;
    let text = decode(path, &bytes)?;

    Ok(parse_rows(&text))
}

fn decode(path: &Path, bytes: &[u8]) -> Result<String> {
    for encoding in ENCODINGS {
        if let Some(text) = encoding.decode_without_bom_handling_and_without_replacement(bytes) {
            tracing::debug!(encoding = encoding.name(), "catalog_decoded");
            return Ok(text.into_owned());
        }
    }

    Err(RecetarioError::EncodingUnsupported {
        path: path.to_path_buf(),
        tried: ENCODINGS
            .iter()
            .map(|e| e.name())
            .collect::<Vec<_>>()
            .join(", "),
    })
}

fn parse_rows(text: &str) -> Catalog {
    let mut recipes = Vec::new();

    // Skip the header row
    for line in text.lines().skip(1) {
        if line.trim().is_empty() {
            continue;
        }

        let columns: Vec<&str> = line.split(';').collect();
        let name = columns.first().copied().unwrap_or("");
        let category = columns.get(1).copied().unwrap_or("");

        // Short rows simply have no ingredient cells
        let ingredients: Vec<String> = columns
            .iter()
            .skip(2)
            .flat_map(|cell| cell.split(','))
            .map(str::trim)
            .filter(|ing| !ing.is_empty())
            .map(str::to_string)
            .collect();

        match Recipe::new(name, category, ingredients) {
            Some(recipe) => recipes.push(recipe),
            None => {
                tracing::warn!(row = line, "skipping row with empty name or category");
            }
        }
    }

    tracing::debug!(records = recipes.len(), "catalog_parsed");
    Catalog::new(recipes)
}
