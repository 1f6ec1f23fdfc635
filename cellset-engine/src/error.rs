//! FILENAME: cellset-engine/src/error.rs

use thiserror::Error;

/// Errors surfaced while carving a slice out of a cellset.
///
/// Only structural mistakes in the request are errors. An explicitly empty
/// index list, a sparse ordinal, or absent axis metadata during tuple
/// lookup are all defined non-error outcomes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SliceError {
    /// The request named tuple indices the axis does not have. The whole
    /// call fails; there is no partial result.
    #[error("the tuples requested do not exist on axis '{axis}': {indices:?}")]
    TupleOutOfRange { axis: String, indices: Vec<usize> },

    /// The result carries no axis metadata to slice against.
    #[error("result carries no axis metadata")]
    AxesUnavailable,
}
