//! FILENAME: cellset-engine/src/engine.rs
//! Cellset Reader - decodes a flat cellset into navigable nested slices.
//!
//! This module takes a parsed Cellset (tree) and a SliceSelection (request)
//! and produces a SliceNode (nested output).
//!
//! Algorithm:
//! 1. Wrap the tree; build the ordinal index and the stride table once
//! 2. Resolve each non-slicer axis's selection into an explicit index list
//! 3. Walk the cartesian product of the index lists depth-first
//! 4. Map each coordinate combination to its ordinal via axis strides
//! 5. Apply the property projection to the cell found there
//!
//! The walk visits axis 0 fastest and nests the last axis outermost, so a
//! two-axis result reads as rows of columns.

use resultset::{Axis, Cell, Cellset, Tuple};

use crate::error::SliceError;
use crate::index::{AxisLayout, CellIndex};
use crate::selection::{AxisSelection, AxisSelector, Projection, SliceSelection};
use crate::view::{SliceLeaf, SliceNode};

// ============================================================================
// CELLSET READER
// ============================================================================

/// Wraps a parsed cellset and exposes navigable access to its cells.
///
/// The ordinal index and stride table are computed here once and never
/// mutated; every accessor only reads. A reader can therefore serve
/// concurrent `slice` calls without locking.
#[derive(Debug, Clone)]
pub struct CellsetReader {
    cellset: Cellset,
    index: CellIndex,
    layout: AxisLayout,
}

impl CellsetReader {
    /// Wraps a parsed cellset, deriving its lookup structures.
    pub fn new(cellset: Cellset) -> Self {
        let index = CellIndex::build(&cellset.cell_data);
        let layout = match cellset.axes.as_deref() {
            Some(axes) => AxisLayout::build(axes),
            None => AxisLayout::default(),
        };
        CellsetReader {
            cellset,
            index,
            layout,
        }
    }

    /// The wrapped tree.
    pub fn cellset(&self) -> &Cellset {
        &self.cellset
    }

    /// All axes as delivered, or `None` for results without axis metadata.
    pub fn axes(&self) -> Option<&[Axis]> {
        self.cellset.axes.as_deref()
    }

    /// The derived stride table over the non-slicer axes.
    pub fn layout(&self) -> &AxisLayout {
        &self.layout
    }

    /// The cell at `ordinal`. Ordinals absent from a sparse result come
    /// back as an empty cell carrying that ordinal; this never fails.
    pub fn cell_by_ordinal(&self, ordinal: usize) -> Cell {
        match self.cell_at(ordinal) {
            Some(cell) => cell.clone(),
            None => Cell::new(ordinal),
        }
    }

    /// Tuples on the selected axis, by name or zero-based position.
    ///
    /// Returns `None` when the result carries no axis metadata at all, or
    /// when no axis matches the selector. Multidimensional and tabular
    /// results legitimately differ in shape, so this is a lookup, not an
    /// assertion.
    pub fn axis_tuples<'a>(&self, selector: impl Into<AxisSelector<'a>>) -> Option<&[Tuple]> {
        let axes = self.cellset.axes.as_deref()?;
        let axis = match selector.into() {
            AxisSelector::Name(name) => axes.iter().find(|a| a.name == name)?,
            AxisSelector::Position(position) => axes.get(position)?,
        };
        Some(&axis.tuples)
    }

    /// Carves the requested slice out of the cellset.
    ///
    /// The output nests one level per non-slicer axis, outermost level
    /// following the last axis. Examples against a two-axis result:
    ///
    /// ```ignore
    /// // everything, as rows of columns
    /// reader.slice(&SliceSelection::new(), &Projection::Cells)?;
    /// // the 4th column only
    /// reader.slice(&SliceSelection::new().with_axis("Axis0", 3usize),
    ///              &Projection::Cells)?;
    /// // 2nd and 3rd row, Value property per cell
    /// reader.slice(&SliceSelection::new().with_axis("Axis1", vec![1, 2]),
    ///              &Projection::property("Value"))?;
    /// ```
    ///
    /// Indices outside the axis fail with `TupleOutOfRange` and produce no
    /// partial output. An explicitly empty index list on any axis makes the
    /// whole result the empty sequence. The slicer axis is pinned to its
    /// single tuple and never appears in the output nesting.
    pub fn slice(
        &self,
        selection: &SliceSelection,
        projection: &Projection,
    ) -> Result<SliceNode, SliceError> {
        let axes = self
            .cellset
            .axes
            .as_deref()
            .ok_or(SliceError::AxesUnavailable)?;

        // Resolve every non-slicer axis up front so an invalid request
        // fails before any output is assembled.
        let mut resolved: Vec<Vec<usize>> = Vec::with_capacity(self.layout.axis_count());
        for axis in axes.iter().filter(|a| !a.is_slicer()) {
            let indices = resolve_axis(axis, selection.axis(&axis.name))?;
            if indices.is_empty() {
                // Either the caller asked for an empty set or the axis has
                // no tuples (an empty set on the MDX side). The whole
                // result is empty; dimensionality is not reduced.
                return Ok(SliceNode::empty());
            }
            resolved.push(indices);
        }

        log::trace!(
            "slicing {} axes, {} cells addressed",
            resolved.len(),
            resolved.iter().map(Vec::len).product::<usize>()
        );

        Ok(self.assemble(&resolved, resolved.len(), 0, projection))
    }

    /// Depth-first assembly over the resolved index lists.
    ///
    /// `axis` counts down from the axis count; each level nests the next
    /// lower axis until axis 0, whose entries are leaves. `base` accumulates
    /// the ordinal contributions of the outer levels, so reaching a leaf
    /// means `base` is the full ordinal.
    fn assemble(
        &self,
        resolved: &[Vec<usize>],
        axis: usize,
        base: usize,
        projection: &Projection,
    ) -> SliceNode {
        if axis == 0 {
            // Zero non-slicer axes degenerates to the single cell at
            // ordinal 0, which also falls out of this arm.
            return SliceNode::Leaf(self.project_cell(base, projection));
        }
        let axis = axis - 1;
        let stride = self.layout.stride(axis);
        let children = resolved[axis]
            .iter()
            .map(|&index| self.assemble(resolved, axis, base + index * stride, projection))
            .collect();
        SliceNode::Nested(children)
    }

    /// Applies the projection to the cell at `ordinal`. Sparse ordinals
    /// project like a cell without properties.
    fn project_cell(&self, ordinal: usize, projection: &Projection) -> SliceLeaf {
        let cell = self.cell_at(ordinal);
        match projection {
            Projection::Cells => {
                SliceLeaf::Cell(cell.cloned().unwrap_or_else(|| Cell::new(ordinal)))
            }
            Projection::Property(name) => {
                SliceLeaf::Value(cell.and_then(|c| c.property(name)).cloned())
            }
            Projection::Properties(names) => SliceLeaf::Record(
                names
                    .iter()
                    .map(|name| {
                        (
                            name.clone(),
                            cell.and_then(|c| c.property(name)).cloned(),
                        )
                    })
                    .collect(),
            ),
        }
    }

    fn cell_at(&self, ordinal: usize) -> Option<&Cell> {
        self.index
            .slot(ordinal)
            .map(|slot| &self.cellset.cell_data[slot])
    }
}

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

/// Resolves one axis's selection into explicit tuple indices.
///
/// `All` expands to the full index range. Requested indices are validated
/// against the axis's tuple count; every offending index is reported, not
/// just the first.
fn resolve_axis(axis: &Axis, selection: &AxisSelection) -> Result<Vec<usize>, SliceError> {
    let count = axis.tuple_count();
    let indices: Vec<usize> = match selection {
        AxisSelection::All => (0..count).collect(),
        AxisSelection::Index(index) => vec![*index],
        AxisSelection::Indices(list) => list.clone(),
    };

    let out_of_range: Vec<usize> = indices
        .iter()
        .copied()
        .filter(|&index| index >= count)
        .collect();
    if !out_of_range.is_empty() {
        return Err(SliceError::TupleOutOfRange {
            axis: axis.name.clone(),
            indices: out_of_range,
        });
    }

    Ok(indices)
}

// ============================================================================
// PUBLIC API
// ============================================================================

/// Decodes a multidimensional result in one shot.
/// Convenience entry point over `CellsetReader` when the reader is not kept
/// around for further slices.
pub fn slice_cellset(
    cellset: Cellset,
    selection: &SliceSelection,
    projection: &Projection,
) -> Result<SliceNode, SliceError> {
    CellsetReader::new(cellset).slice(selection, projection)
}
