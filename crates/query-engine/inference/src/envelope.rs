//! The response envelope: inferred column metadata plus the raw rows.

use std::collections::HashMap;

use serde::Serialize;
use serde_json::{Map, Value};

use sqlbridge_execution::ResultSet;

use crate::columns::{infer_type, ColumnDescriptor, TypeTag};

/// The top-level JSON object returned for a non-empty result set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultEnvelope {
    pub columns: Vec<ColumnDescriptor>,
    pub rows: Vec<Map<String, Value>>,
}

impl ResultEnvelope {
    /// Build the envelope for a result set: one descriptor per column
    /// in ordinal order, inferred from the first row, with the rows
    /// passed through unmodified.
    pub fn shape(
        result_set: ResultSet,
        type_hints: &HashMap<String, TypeTag>,
        name_hints: &HashMap<String, String>,
    ) -> Self {
        let columns = result_set
            .columns
            .iter()
            .map(|name| {
                let value = result_set
                    .first_row()
                    .and_then(|row| row.get(name))
                    .unwrap_or(&Value::Null);

                ColumnDescriptor {
                    name: name.clone(),
                    column_type: infer_type(name, value, type_hints),
                    friendly_name: name_hints
                        .get(name)
                        .cloned()
                        .unwrap_or_else(|| name.clone()),
                }
            })
            .collect();

        Self {
            columns,
            rows: result_set.rows,
        }
    }
}
