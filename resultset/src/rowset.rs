//! FILENAME: resultset/src/rowset.rs
//! PURPOSE: The parsed tabular result tree.
//! CONTEXT: Tabular responses carry flat rows keyed by wire element names,
//! plus an inline schema declaring which element sequence makes up a "row"
//! and which human-facing field each element maps to.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::value::PropertyValue;
use crate::wire;

/// Name of the complex type whose element sequence describes result rows.
pub const ROW_TYPE: &str = "row";

/// A flat row as delivered: wire element name -> value.
pub type Row = HashMap<String, PropertyValue>;

/// One declared element of a complex type: the wire name plus the
/// underlying field name it maps to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnElement {
    pub name: String,
    pub field: String,
}

impl ColumnElement {
    pub fn new(name: impl Into<String>, field: impl Into<String>) -> Self {
        ColumnElement {
            name: name.into(),
            field: field.into(),
        }
    }
}

/// A named element sequence from the inline schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplexType {
    pub name: String,

    #[serde(default, deserialize_with = "wire::one_or_many")]
    pub elements: Vec<ColumnElement>,
}

/// The inline schema delivered alongside tabular rows.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RowsetSchema {
    #[serde(default, deserialize_with = "wire::one_or_many")]
    pub complex_types: Vec<ComplexType>,
}

impl RowsetSchema {
    /// The element sequence declared for the complex type named "row",
    /// or `None` when the schema declares no such type.
    pub fn row_elements(&self) -> Option<&[ColumnElement]> {
        self.complex_types
            .iter()
            .find(|ct| ct.name == ROW_TYPE)
            .map(|ct| ct.elements.as_slice())
    }
}

/// A parsed tabular result: inline schema plus the flat row list.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Rowset {
    #[serde(default)]
    pub schema: RowsetSchema,

    /// A single bare row normalizes to a one-element list.
    #[serde(default, deserialize_with = "wire::one_or_many")]
    pub rows: Vec<Row>,
}

impl Rowset {
    pub fn new(schema: RowsetSchema, rows: Vec<Row>) -> Self {
        Rowset { schema, rows }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_elements_finds_the_row_type() {
        let schema = RowsetSchema {
            complex_types: vec![
                ComplexType {
                    name: "header".to_string(),
                    elements: vec![ColumnElement::new("Col_Title", "title")],
                },
                ComplexType {
                    name: ROW_TYPE.to_string(),
                    elements: vec![
                        ColumnElement::new("Col_Name", "name"),
                        ColumnElement::new("Col_Total", "total"),
                    ],
                },
            ],
        };

        let elements = schema.row_elements().unwrap();
        assert_eq!(elements.len(), 2);
        assert_eq!(elements[0].field, "name");
    }

    #[test]
    fn row_elements_absent_without_row_type() {
        assert!(RowsetSchema::default().row_elements().is_none());
    }

    #[test]
    fn single_row_element_normalizes_to_list() {
        let rowset: Rowset = serde_json::from_str(
            r#"{ "rows": { "Col_Name": "Q1 Sales" } }"#,
        )
        .unwrap();

        assert_eq!(rowset.rows.len(), 1);
        assert_eq!(
            rowset.rows[0].get("Col_Name"),
            Some(&PropertyValue::Text("Q1 Sales".to_string()))
        );
    }
}
