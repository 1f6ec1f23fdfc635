//! FILENAME: resultset/src/lib.rs
//! PURPOSE: Main library entry point for the shared result data model.
//! CONTEXT: Re-exports the parsed result tree shapes consumed by the
//! cellset and tabular engines. This crate holds data only; the engines
//! own every algorithm.

pub mod axis;
pub mod body;
pub mod cell;
pub mod cellset;
pub mod fault;
pub mod rowset;
pub mod value;
mod wire;

// Re-export commonly used types at the crate root
pub use axis::{Axis, Member, Tuple, SLICER_AXIS};
pub use body::{ResultBody, ResultFormat};
pub use cell::Cell;
pub use cellset::Cellset;
pub use fault::Fault;
pub use rowset::{ColumnElement, ComplexType, Row, Rowset, RowsetSchema, ROW_TYPE};
pub use value::PropertyValue;
