//! FILENAME: cellset-engine/src/lib.rs
//! Cellset decoding subsystem.
//!
//! This crate turns the flat, ordinal-indexed cell list of a
//! multidimensional result into navigable nested slices. It depends on
//! `resultset` only for the shared tree shapes.
//!
//! Layers:
//! - `selection`: Serializable slice request (what the caller WANTS)
//! - `index`: Derived read-only lookup structures (HOW cells are found)
//! - `view`: Nested output structure (WHAT comes back)
//! - `engine`: The projection walk (HOW slices are carved)

pub mod engine;
pub mod error;
pub mod index;
pub mod selection;
pub mod view;

pub use engine::{slice_cellset, CellsetReader};
pub use error::SliceError;
pub use index::{AxisLayout, AxisSizes, CellIndex};
pub use selection::{AxisSelection, AxisSelector, Projection, SliceSelection};
pub use view::{SliceLeaf, SliceNode};
