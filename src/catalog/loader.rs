//! Catalog loading
//!
//! Reads the food catalog from a JSON file into an immutable snapshot.
//! Column labels are normalized (trim + lowercase) once at load time so the
//! matcher can compare field names without ad hoc case handling.

use std::collections::BTreeSet;
use std::path::Path;

use serde_json::{Map, Value};
use thiserror::Error;

/// Catalog error types
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("catalog root must be an array of records")]
    NotAnArray,

    #[error("catalog record {0} is not a JSON object")]
    RowNotObject(usize),
}

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Immutable snapshot of the food catalog
///
/// Rows keep their load order; the matcher relies on that order for
/// tie-breaking. Keys in every row have already been trimmed and lowercased.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    columns: BTreeSet<String>,
    rows: Vec<Map<String, Value>>,
}

/// Normalize a column label: trim surrounding whitespace and lowercase
pub fn normalize_label(label: &str) -> String {
    label.trim().to_lowercase()
}

impl Catalog {
    /// Load a catalog snapshot from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> CatalogResult<Self> {
        let text = std::fs::read_to_string(path)?;
        let value: Value = serde_json::from_str(&text)?;
        Self::from_value(value)
    }

    /// Build a catalog snapshot from an already-parsed JSON value
    pub fn from_value(value: Value) -> CatalogResult<Self> {
        let raw_rows = match value {
            Value::Array(rows) => rows,
            _ => return Err(CatalogError::NotAnArray),
        };

        let mut rows = Vec::with_capacity(raw_rows.len());
        for (index, raw) in raw_rows.into_iter().enumerate() {
            let obj = match raw {
                Value::Object(obj) => obj,
                _ => return Err(CatalogError::RowNotObject(index)),
            };

            let mut normalized = Map::with_capacity(obj.len());
            for (key, val) in obj {
                normalized.insert(normalize_label(&key), val);
            }
            rows.push(normalized);
        }

        // Column set is the union of labels across rows, matching how a
        // tabular reader would form the header.
        let mut columns = BTreeSet::new();
        for row in &rows {
            for key in row.keys() {
                columns.insert(key.clone());
            }
        }

        Ok(Self { columns, rows })
    }

    /// Build a snapshot from in-memory rows (used by tests and embedders)
    pub fn from_rows(rows: Vec<Value>) -> CatalogResult<Self> {
        Self::from_value(Value::Array(rows))
    }

    /// Normalized column labels present in the catalog
    pub fn columns(&self) -> &BTreeSet<String> {
        &self.columns
    }

    /// Whether a column is present, comparing normalized labels
    pub fn has_column(&self, label: &str) -> bool {
        self.columns.contains(&normalize_label(label))
    }

    /// Rows in load order, keys normalized
    pub fn rows(&self) -> &[Map<String, Value>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
