//! FILENAME: resultset/src/fault.rs
//! PURPOSE: The remote fault shape surfaced by the transport layer.
//! CONTEXT: The decoder never raises or handles this; it is the agreed
//! boundary type a transport layer converts server faults into, so both
//! sides of the boundary share one definition.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

use crate::value::PropertyValue;

/// A remote fault reported by the server: a message plus whatever
/// structured detail the server attached.
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[error("{message}")]
pub struct Fault {
    pub message: String,

    #[serde(default)]
    pub detail: HashMap<String, PropertyValue>,
}

impl Fault {
    pub fn new(message: impl Into<String>) -> Self {
        Fault {
            message: message.into(),
            detail: HashMap::new(),
        }
    }

    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.detail.insert(key.into(), value.into());
        self
    }
}
