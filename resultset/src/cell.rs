//! FILENAME: resultset/src/cell.rs
//! PURPOSE: The value record at one combination of axis coordinates.
//! CONTEXT: Cells arrive as a flat sequence and are addressed only by their
//! integer ordinal. Sparse results are common; an ordinal with no cell is a
//! defined outcome, not an error.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::value::PropertyValue;

/// A single result cell: an ordinal plus an open set of named properties
/// (typically "Value", "FmtValue", sometimes "FormatString" or a formula).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    /// Flat index into ordinal space, as delivered by the server.
    pub ordinal: usize,

    /// Named properties. Empty for placeholder cells in sparse results.
    #[serde(default)]
    pub properties: HashMap<String, PropertyValue>,
}

impl Cell {
    /// Creates an empty cell at the given ordinal.
    pub fn new(ordinal: usize) -> Self {
        Cell {
            ordinal,
            properties: HashMap::new(),
        }
    }

    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }

    /// Looks up one property by name.
    pub fn property(&self, name: &str) -> Option<&PropertyValue> {
        self.properties.get(name)
    }

    /// True when the cell carries no properties at all.
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}
