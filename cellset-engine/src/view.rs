//! FILENAME: cellset-engine/src/view.rs
//! Slice View - the nested output structure returned by the reader.
//!
//! Nesting depth equals the number of non-slicer axes: the outermost level
//! follows the last axis, the innermost axis 0. A two-axis result therefore
//! reads the conventional way, as rows of columns.

use serde::{Deserialize, Serialize};

use resultset::{Cell, PropertyValue};

/// A single projected leaf: whatever the `Projection` asked for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SliceLeaf {
    /// The whole cell. Ordinals absent from a sparse result come back as an
    /// empty cell carrying that ordinal.
    Cell(Cell),

    /// One property's value; `None` when the cell does not carry it.
    Value(Option<PropertyValue>),

    /// The requested properties, keyed in request order.
    Record(Vec<(String, Option<PropertyValue>)>),
}

impl SliceLeaf {
    pub fn as_cell(&self) -> Option<&Cell> {
        match self {
            SliceLeaf::Cell(cell) => Some(cell),
            _ => None,
        }
    }

    pub fn as_value(&self) -> Option<&PropertyValue> {
        match self {
            SliceLeaf::Value(value) => value.as_ref(),
            _ => None,
        }
    }

    pub fn as_record(&self) -> Option<&[(String, Option<PropertyValue>)]> {
        match self {
            SliceLeaf::Record(fields) => Some(fields),
            _ => None,
        }
    }
}

/// A node of the nested slice result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SliceNode {
    Leaf(SliceLeaf),
    Nested(Vec<SliceNode>),
}

impl SliceNode {
    /// The empty result: an empty outermost sequence.
    pub fn empty() -> Self {
        SliceNode::Nested(Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, SliceNode::Nested(children) if children.is_empty())
    }

    pub fn as_nested(&self) -> Option<&[SliceNode]> {
        match self {
            SliceNode::Nested(children) => Some(children),
            SliceNode::Leaf(_) => None,
        }
    }

    pub fn as_leaf(&self) -> Option<&SliceLeaf> {
        match self {
            SliceNode::Leaf(leaf) => Some(leaf),
            SliceNode::Nested(_) => None,
        }
    }

    /// All leaves depth-first, which is exactly ordinal enumeration order
    /// (axis 0 fastest).
    pub fn leaves(&self) -> Vec<&SliceLeaf> {
        let mut out = Vec::new();
        self.collect_leaves(&mut out);
        out
    }

    fn collect_leaves<'a>(&'a self, out: &mut Vec<&'a SliceLeaf>) {
        match self {
            SliceNode::Leaf(leaf) => out.push(leaf),
            SliceNode::Nested(children) => {
                for child in children {
                    child.collect_leaves(out);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaves_flatten_depth_first() {
        let node = SliceNode::Nested(vec![
            SliceNode::Nested(vec![
                SliceNode::Leaf(SliceLeaf::Value(Some(PropertyValue::Number(0.0)))),
                SliceNode::Leaf(SliceLeaf::Value(Some(PropertyValue::Number(1.0)))),
            ]),
            SliceNode::Nested(vec![
                SliceNode::Leaf(SliceLeaf::Value(Some(PropertyValue::Number(2.0)))),
            ]),
        ]);

        let values: Vec<f64> = node
            .leaves()
            .iter()
            .map(|leaf| leaf.as_value().unwrap().as_f64().unwrap())
            .collect();
        assert_eq!(values, vec![0.0, 1.0, 2.0]);
    }

    #[test]
    fn empty_node_is_empty() {
        assert!(SliceNode::empty().is_empty());
        assert!(!SliceNode::Leaf(SliceLeaf::Value(None)).is_empty());
    }
}
