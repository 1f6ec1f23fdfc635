//! FILENAME: tabular-engine/src/lib.rs
//! Tabular decoding subsystem.
//!
//! This crate decodes flat tabular results as a standalone module. It
//! depends on `resultset` for the shared tree shapes and shares no state
//! with the cellset engine; the two paths only meet at the parsed-tree
//! boundary.
//!
//! Layers:
//! - `schema`: Column map derivation (what a row's keys MEAN)
//! - `engine`: Row mapper (HOW records are produced)

pub mod engine;
pub mod schema;

pub use engine::{Record, TabularReader};
pub use schema::ColumnMap;
