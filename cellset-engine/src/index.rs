//! Ordinal Cell Index - derived read-only lookup structures.
//!
//! Both structures here are built once when a cellset is wrapped and never
//! change afterwards:
//! - `CellIndex` maps a cell ordinal to its slot in the flat cell list,
//!   so sparse results get O(1) lookup without materializing the full cube
//! - `AxisLayout` holds per-axis tuple counts and strides over the
//!   non-slicer axes, converting a per-axis coordinate into its ordinal

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use resultset::{Axis, Cell};

/// Per-axis count array. Results rarely exceed three axes, so the counts
/// live inline.
pub type AxisSizes = SmallVec<[usize; 4]>;

// ============================================================================
// CELL INDEX
// ============================================================================

/// Maps cell ordinals to slots in the flat cell list.
///
/// An ordinal with no slot is a defined outcome: sparse cubes simply do not
/// deliver every cell.
#[derive(Debug, Clone, Default)]
pub struct CellIndex {
    slots: FxHashMap<usize, usize>,
}

impl CellIndex {
    /// Builds the ordinal lookup from the flat cell list.
    /// If the server delivers duplicate ordinals, the last one wins.
    pub fn build(cells: &[Cell]) -> Self {
        let mut slots = FxHashMap::default();
        for (slot, cell) in cells.iter().enumerate() {
            slots.insert(cell.ordinal, slot);
        }
        log::debug!(
            "indexed {} cells ({} distinct ordinals)",
            cells.len(),
            slots.len()
        );
        CellIndex { slots }
    }

    /// The slot holding the cell with this ordinal, if any.
    pub fn slot(&self, ordinal: usize) -> Option<usize> {
        self.slots.get(&ordinal).copied()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

// ============================================================================
// AXIS LAYOUT
// ============================================================================

/// Tuple counts and strides over the non-slicer axes, in received order.
///
/// Stride 0 is 1; stride i is the product of the tuple counts of axes
/// 0..i-1. A cell's ordinal is the sum over axes of coordinate * stride.
/// The slicer axis is pinned to coordinate 0 and contributes nothing, so it
/// is excluded here entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AxisLayout {
    sizes: AxisSizes,
    strides: AxisSizes,
}

impl AxisLayout {
    /// Computes counts and running-product strides, skipping the slicer.
    pub fn build(axes: &[Axis]) -> Self {
        let mut sizes = AxisSizes::new();
        let mut strides = AxisSizes::new();
        // span = number of cells in the subcube spanned by the axes before
        // this one
        let mut span = 1usize;
        for axis in axes.iter().filter(|a| !a.is_slicer()) {
            sizes.push(axis.tuple_count());
            strides.push(span);
            span *= axis.tuple_count();
        }
        AxisLayout { sizes, strides }
    }

    /// Number of non-slicer axes.
    pub fn axis_count(&self) -> usize {
        self.sizes.len()
    }

    /// Tuple count of the i-th non-slicer axis.
    pub fn size(&self, axis: usize) -> usize {
        self.sizes[axis]
    }

    /// Stride of the i-th non-slicer axis.
    pub fn stride(&self, axis: usize) -> usize {
        self.strides[axis]
    }

    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }

    pub fn strides(&self) -> &[usize] {
        &self.strides
    }

    /// The ordinal addressed by one coordinate per non-slicer axis.
    pub fn ordinal_of(&self, coords: &[usize]) -> usize {
        coords
            .iter()
            .zip(self.strides.iter())
            .map(|(coord, stride)| coord * stride)
            .sum()
    }

    /// Total number of addressable cells.
    pub fn cell_count(&self) -> usize {
        self.sizes.iter().product()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use resultset::Tuple;

    fn axis_with_tuples(name: &str, count: usize) -> Axis {
        let mut axis = Axis::new(name);
        for i in 0..count {
            axis.tuples
                .push(Tuple::of(resultset::Member::new(format!("[M].[{}]", i))));
        }
        axis
    }

    #[test]
    fn strides_are_running_products() {
        let axes = vec![
            axis_with_tuples("Axis0", 3),
            axis_with_tuples("Axis1", 2),
            axis_with_tuples("Axis2", 4),
        ];
        let layout = AxisLayout::build(&axes);

        assert_eq!(layout.sizes(), &[3, 2, 4]);
        assert_eq!(layout.strides(), &[1, 3, 6]);
        assert_eq!(layout.cell_count(), 24);
    }

    #[test]
    fn slicer_is_excluded_from_stride_accounting() {
        let axes = vec![
            axis_with_tuples("Axis0", 3),
            axis_with_tuples("Axis1", 2),
            axis_with_tuples("SlicerAxis", 1),
        ];
        let layout = AxisLayout::build(&axes);

        assert_eq!(layout.axis_count(), 2);
        assert_eq!(layout.strides(), &[1, 3]);
    }

    #[test]
    fn ordinals_cover_the_cube_exactly_once() {
        let axes = vec![axis_with_tuples("Axis0", 3), axis_with_tuples("Axis1", 2)];
        let layout = AxisLayout::build(&axes);

        let mut seen = vec![false; layout.cell_count()];
        for row in 0..2 {
            for col in 0..3 {
                let ordinal = layout.ordinal_of(&[col, row]);
                assert_eq!(ordinal, col + row * 3);
                assert!(!seen[ordinal], "ordinal {} visited twice", ordinal);
                seen[ordinal] = true;
            }
        }
        assert!(seen.iter().all(|&v| v));
    }

    #[test]
    fn cell_index_resolves_sparse_ordinals() {
        let cells = vec![
            Cell::new(0).with_property("Value", 1.0),
            Cell::new(5).with_property("Value", 2.0),
        ];
        let index = CellIndex::build(&cells);

        assert_eq!(index.len(), 2);
        assert_eq!(index.slot(0), Some(0));
        assert_eq!(index.slot(5), Some(1));
        assert_eq!(index.slot(3), None);
    }

    #[test]
    fn cell_index_of_empty_result() {
        let index = CellIndex::build(&[]);
        assert!(index.is_empty());
        assert_eq!(index.slot(0), None);
    }
}
