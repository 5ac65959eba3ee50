//! CLI argument parsing for recetario
//!
//! Uses clap with global flags: --file, --format, --quiet, --verbose,
//! --log-level, --log-json.

pub mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use output::OutputFormat;

/// Recetario - recipe catalog graph queries
#[derive(Parser, Debug)]
#[command(name = "recetario")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the semicolon-delimited recipe catalog
    #[arg(long, global = true, env = "RECETARIO_FILE", default_value = "recetario.csv")]
    pub file: PathBuf,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Walk the graph depth-first from an ingredient
    Explore {
        /// Ingredient to start from
        ingredient: String,
    },

    /// Rank the closest recipes to an ingredient by uniform-cost search
    Nearest {
        /// Ingredient to start from
        ingredient: String,

        /// Number of recipes to return
        #[arg(short, long, default_value_t = 5)]
        k: usize,
    },

    /// Find one shortest path between two labels
    Path {
        /// Start label (any node kind)
        from: String,

        /// Goal label (any node kind)
        to: String,
    },

    /// Filter recipes by ingredient and/or category
    Find {
        /// Keep recipes using this ingredient
        #[arg(long, short)]
        ingredient: Option<String>,

        /// Keep recipes in this category
        #[arg(long, short)]
        category: Option<String>,
    },

    /// List ingredients shared by two recipes
    Common {
        /// First recipe name
        recipe1: String,

        /// Second recipe name
        recipe2: String,
    },

    /// Group recipes by category
    Categories,

    /// Show catalog and graph size statistics
    Stats,
}
