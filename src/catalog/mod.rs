//! Catalog module
//!
//! Handles loading the food catalog from its JSON storage format.

pub mod loader;

pub use loader::{Catalog, CatalogError, CatalogResult};
