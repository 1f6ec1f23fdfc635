//! FILENAME: resultset/src/axis.rs
//! PURPOSE: Axis metadata for a multidimensional result.
//! CONTEXT: Each axis owns an ordered list of tuples, each tuple an ordered
//! list of members. Axis order as delivered is significant: axis 0 is the
//! fastest-varying dimension in ordinal space.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::value::PropertyValue;
use crate::wire;

/// Name the server assigns to the axis holding the slicer coordinate.
/// The slicer is pinned to a single tuple and never counts toward the
/// visible dimensionality of a result.
pub const SLICER_AXIS: &str = "SlicerAxis";

/// Descriptive data for one member of a tuple.
///
/// The decoder never interprets member contents; captions and properties
/// ride through to the caller untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    /// Unique member name (e.g. "[Time].[1998].[Q1]").
    pub name: String,

    /// Display caption, when the server sends one.
    #[serde(default)]
    pub caption: Option<String>,

    /// Any further per-member properties delivered by the server.
    #[serde(default)]
    pub properties: HashMap<String, PropertyValue>,
}

impl Member {
    pub fn new(name: impl Into<String>) -> Self {
        Member {
            name: name.into(),
            caption: None,
            properties: HashMap::new(),
        }
    }
}

/// One coordinate value along an axis: an ordered list of members.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tuple {
    /// A single bare member normalizes to a one-element list.
    #[serde(default, deserialize_with = "wire::one_or_many")]
    pub members: Vec<Member>,
}

impl Tuple {
    pub fn new(members: Vec<Member>) -> Self {
        Tuple { members }
    }

    /// Convenience constructor for the common single-member case.
    pub fn of(member: Member) -> Self {
        Tuple {
            members: vec![member],
        }
    }
}

/// One independent dimension of the result (e.g. columns, rows, slicer).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Axis {
    /// Server-assigned name, usually "Axis0", "Axis1", "SlicerAxis".
    pub name: String,

    /// Ordered tuples; the position of a tuple is its coordinate value.
    #[serde(default, deserialize_with = "wire::one_or_many")]
    pub tuples: Vec<Tuple>,
}

impl Axis {
    pub fn new(name: impl Into<String>) -> Self {
        Axis {
            name: name.into(),
            tuples: Vec::new(),
        }
    }

    pub fn is_slicer(&self) -> bool {
        self.name == SLICER_AXIS
    }

    pub fn tuple_count(&self) -> usize {
        self.tuples.len()
    }
}
