//! FILENAME: resultset/src/body.rs
//! PURPOSE: Format tagging for parsed execute responses.
//! CONTEXT: A statement is executed in one of two formats, and the payload
//! the transport layer hands over is shaped accordingly. The tag travels
//! with the payload so callers pick the matching reader without re-probing
//! the tree.

use serde::{Deserialize, Serialize};

use crate::cellset::Cellset;
use crate::rowset::Rowset;

/// The result format a statement was executed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResultFormat {
    Multidimensional,
    Tabular,
}

impl Default for ResultFormat {
    fn default() -> Self {
        ResultFormat::Multidimensional
    }
}

/// An already-parsed execute payload, tagged by the format it was
/// requested with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ResultBody {
    Cellset(Cellset),
    Rowset(Rowset),
}

impl ResultBody {
    pub fn format(&self) -> ResultFormat {
        match self {
            ResultBody::Cellset(_) => ResultFormat::Multidimensional,
            ResultBody::Rowset(_) => ResultFormat::Tabular,
        }
    }

    pub fn as_cellset(&self) -> Option<&Cellset> {
        match self {
            ResultBody::Cellset(cellset) => Some(cellset),
            ResultBody::Rowset(_) => None,
        }
    }

    pub fn as_rowset(&self) -> Option<&Rowset> {
        match self {
            ResultBody::Rowset(rowset) => Some(rowset),
            ResultBody::Cellset(_) => None,
        }
    }
}
