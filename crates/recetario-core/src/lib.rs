//! Recetario Core Library
//!
//! Core domain logic for the recetario recipe graph: catalog loading,
//! graph construction, traversal, and uniform-cost search.

pub mod catalog;
pub mod error;
pub mod graph;
pub mod logging;
