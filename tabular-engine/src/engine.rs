//! FILENAME: tabular-engine/src/engine.rs
//! Tabular Reader - renames flat row fields through the schema column map.
//!
//! There is no ordinal math on this path: each wire row becomes one record,
//! keyed by the field names the schema declares. The rows are already fully
//! materialized, so the record iterator is lazy but replayable.

use std::collections::HashMap;

use resultset::{PropertyValue, Row, Rowset};

use crate::schema::ColumnMap;

/// A decoded record: field name -> value.
pub type Record = HashMap<String, PropertyValue>;

/// Wraps a parsed tabular result and yields decoded records.
#[derive(Debug, Clone)]
pub struct TabularReader {
    rowset: Rowset,
    columns: ColumnMap,
}

impl TabularReader {
    /// Wraps a parsed rowset, deriving the column map from its schema.
    pub fn new(rowset: Rowset) -> Self {
        let columns = ColumnMap::from_schema(&rowset.schema);
        TabularReader { rowset, columns }
    }

    pub fn columns(&self) -> &ColumnMap {
        &self.columns
    }

    pub fn row_count(&self) -> usize {
        self.rowset.rows.len()
    }

    /// Lazily maps each row through the column map, in delivery order.
    /// Row keys the schema does not declare are dropped.
    pub fn records(&self) -> impl Iterator<Item = Record> + '_ {
        self.rowset.rows.iter().map(|row| map_row(row, &self.columns))
    }
}

/// Renames one row's keys through the column map.
fn map_row(row: &Row, columns: &ColumnMap) -> Record {
    row.iter()
        .filter_map(|(key, value)| {
            columns
                .field(key)
                .map(|field| (field.to_string(), value.clone()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use resultset::{ColumnElement, ComplexType, RowsetSchema, ROW_TYPE};

    fn create_test_rowset() -> Rowset {
        let schema = RowsetSchema {
            complex_types: vec![ComplexType {
                name: ROW_TYPE.to_string(),
                elements: vec![
                    ColumnElement::new("Col_Name", "name"),
                    ColumnElement::new("Col_Total", "total"),
                ],
            }],
        };

        let mut first = Row::new();
        first.insert("Col_Name".to_string(), PropertyValue::from("Q1 Sales"));
        first.insert("Col_Total".to_string(), PropertyValue::from(1250.0));
        // A wire key the schema never declared
        first.insert("Col_Internal".to_string(), PropertyValue::from("x"));

        let mut second = Row::new();
        second.insert("Col_Name".to_string(), PropertyValue::from("Q2 Sales"));

        Rowset::new(schema, vec![first, second])
    }

    #[test]
    fn rows_map_to_field_named_records() {
        let reader = TabularReader::new(create_test_rowset());
        let records: Vec<Record> = reader.records().collect();

        assert_eq!(records.len(), 2);
        assert_eq!(
            records[0].get("name"),
            Some(&PropertyValue::Text("Q1 Sales".to_string()))
        );
        assert_eq!(records[0].get("total"), Some(&PropertyValue::Number(1250.0)));
    }

    #[test]
    fn undeclared_keys_are_dropped() {
        let reader = TabularReader::new(create_test_rowset());
        let records: Vec<Record> = reader.records().collect();

        assert!(records[0].get("Col_Internal").is_none());
        assert_eq!(records[0].len(), 2);
        // Second row never carried a total; the record just lacks the key.
        assert_eq!(records[1].len(), 1);
    }

    #[test]
    fn records_replay_because_rows_are_materialized() {
        let reader = TabularReader::new(create_test_rowset());

        let first_pass: Vec<Record> = reader.records().collect();
        let second_pass: Vec<Record> = reader.records().collect();
        assert_eq!(first_pass, second_pass);
    }

    #[test]
    fn empty_column_map_drops_everything() {
        let mut row = Row::new();
        row.insert("Col_Name".to_string(), PropertyValue::from("orphan"));
        let reader = TabularReader::new(Rowset::new(RowsetSchema::default(), vec![row]));

        let records: Vec<Record> = reader.records().collect();
        assert_eq!(records.len(), 1);
        assert!(records[0].is_empty());
    }
}
