//! FILENAME: cellset-engine/src/selection.rs
//! Slice Selection - the serializable slice request.
//!
//! This module contains the types that DESCRIBE which part of a cellset a
//! caller wants. These structures are designed to be:
//! - Serializable (requests can be stored or shipped as-is)
//! - Immutable snapshots of caller intent
//! - Cheap to default: an empty selection means "everything"

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ============================================================================
// AXIS SELECTION
// ============================================================================

/// Per-axis index request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum AxisSelection {
    /// Every tuple index on the axis, in axis order.
    #[default]
    All,

    /// A single tuple index.
    Index(usize),

    /// An explicit ordered index list. An empty list empties the whole
    /// result, it is not an error.
    Indices(Vec<usize>),
}

impl From<usize> for AxisSelection {
    fn from(index: usize) -> Self {
        AxisSelection::Index(index)
    }
}

impl From<Vec<usize>> for AxisSelection {
    fn from(indices: Vec<usize>) -> Self {
        AxisSelection::Indices(indices)
    }
}

/// Axis lookup key: by server-assigned name or by zero-based position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisSelector<'a> {
    Name(&'a str),
    Position(usize),
}

impl<'a> From<&'a str> for AxisSelector<'a> {
    fn from(name: &'a str) -> Self {
        AxisSelector::Name(name)
    }
}

impl From<usize> for AxisSelector<'_> {
    fn from(position: usize) -> Self {
        AxisSelector::Position(position)
    }
}

// ============================================================================
// SLICE SELECTION
// ============================================================================

/// A complete slice request: axis name -> selection.
/// Axes not named here are taken whole; a selection naming the slicer axis
/// is accepted and ignored, matching how servers pin the slicer to its
/// single tuple.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SliceSelection {
    selections: HashMap<String, AxisSelection>,
}

impl SliceSelection {
    /// Creates a selection covering everything.
    pub fn new() -> Self {
        SliceSelection::default()
    }

    pub fn with_axis(
        mut self,
        axis: impl Into<String>,
        selection: impl Into<AxisSelection>,
    ) -> Self {
        self.selections.insert(axis.into(), selection.into());
        self
    }

    pub fn set_axis(&mut self, axis: impl Into<String>, selection: impl Into<AxisSelection>) {
        self.selections.insert(axis.into(), selection.into());
    }

    /// The selection requested for an axis; axes not named are taken whole.
    pub fn axis(&self, name: &str) -> &AxisSelection {
        static ALL: AxisSelection = AxisSelection::All;
        self.selections.get(name).unwrap_or(&ALL)
    }

    /// True when no axis was narrowed at all.
    pub fn is_unconstrained(&self) -> bool {
        self.selections.is_empty()
    }
}

// ============================================================================
// PROJECTION
// ============================================================================

/// What to extract from each addressed cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Projection {
    /// Return whole cells.
    #[default]
    Cells,

    /// Return the named property's value per cell.
    Property(String),

    /// Return a record of the named properties per cell, keyed in this order.
    Properties(Vec<String>),
}

impl Projection {
    pub fn property(name: impl Into<String>) -> Self {
        Projection::Property(name.into())
    }

    pub fn properties<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Projection::Properties(names.into_iter().map(Into::into).collect())
    }
}
