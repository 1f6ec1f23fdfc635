//! FILENAME: resultset/src/cellset.rs
//! PURPOSE: The parsed multidimensional result tree.
//! CONTEXT: This is the shape the transport layer hands over after parsing
//! an execute response in multidimensional format. Whether axis metadata is
//! present is resolved once here, never re-checked ad hoc downstream.

use serde::{Deserialize, Serialize};

use crate::axis::Axis;
use crate::cell::Cell;
use crate::wire;

/// A parsed multidimensional result: axis metadata plus the flat cell list.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Cellset {
    /// Axes in server order. `None` when the response carried no axis
    /// information at all (a non-multidimensional result shape).
    #[serde(default, deserialize_with = "wire::option_one_or_many")]
    pub axes: Option<Vec<Axis>>,

    /// Flat cell list; a single bare cell normalizes to a one-element list.
    #[serde(default, deserialize_with = "wire::one_or_many")]
    pub cell_data: Vec<Cell>,
}

impl Cellset {
    pub fn new(axes: Vec<Axis>, cell_data: Vec<Cell>) -> Self {
        Cellset {
            axes: Some(axes),
            cell_data,
        }
    }

    /// A result with cells but no axis metadata.
    pub fn without_axes(cell_data: Vec<Cell>) -> Self {
        Cellset {
            axes: None,
            cell_data,
        }
    }
}
