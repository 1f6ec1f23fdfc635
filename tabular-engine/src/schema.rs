//! FILENAME: tabular-engine/src/schema.rs
//! Column map derivation from the inline rowset schema.

use rustc_hash::FxHashMap;

use resultset::RowsetSchema;

/// Wire element name -> human-facing field name, derived once from the
/// element sequence the schema declares for its "row" type.
///
/// Row keys the map does not declare are dropped during mapping; a schema
/// without a "row" type yields an empty map, so nothing survives.
#[derive(Debug, Clone, Default)]
pub struct ColumnMap {
    fields: FxHashMap<String, String>,
}

impl ColumnMap {
    pub fn from_schema(schema: &RowsetSchema) -> Self {
        let mut fields = FxHashMap::default();
        if let Some(elements) = schema.row_elements() {
            for element in elements {
                fields.insert(element.name.clone(), element.field.clone());
            }
        }
        ColumnMap { fields }
    }

    /// The field name a wire element maps to, if declared.
    pub fn field(&self, element: &str) -> Option<&str> {
        self.fields.get(element).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
