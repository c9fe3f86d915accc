//! Decode fetched rows into JSON objects.

use serde_json::{Map, Number, Value};
use sqlx::postgres::PgRow;
use sqlx::{Column, Row, TypeInfo};

/// Convert fetched rows into a [`crate::ResultSet`], preserving the
/// ordinal order of the columns.
pub(crate) fn decode_result_set(fetched: &[PgRow]) -> crate::ResultSet {
    let columns = fetched.first().map_or_else(Vec::new, |row| {
        row.columns()
            .iter()
            .map(|column| column.name().to_string())
            .collect()
    });

    let rows = fetched.iter().map(decode_row).collect();

    crate::ResultSet { columns, rows }
}

fn decode_row(row: &PgRow) -> Map<String, Value> {
    let mut object = Map::new();
    for column in row.columns() {
        let value = decode_cell(row, column.ordinal(), column.type_info().name());
        object.insert(column.name().to_string(), value);
    }
    object
}

/// Decode one cell by its Postgres type name, falling back to a few
/// generic decode attempts for anything unrecognized. SQL `NULL`
/// becomes JSON `null`; a value no decode attempt can represent is
/// also reported as `null` rather than failing the whole result set.
fn decode_cell(row: &PgRow, index: usize, type_name: &str) -> Value {
    match type_name {
        "BOOL" => row
            .try_get::<Option<bool>, _>(index)
            .ok()
            .flatten()
            .map(Value::Bool)
            .unwrap_or(Value::Null),
        "INT2" => row
            .try_get::<Option<i16>, _>(index)
            .ok()
            .flatten()
            .map(|value| Value::from(i64::from(value)))
            .unwrap_or(Value::Null),
        "INT4" => row
            .try_get::<Option<i32>, _>(index)
            .ok()
            .flatten()
            .map(|value| Value::from(i64::from(value)))
            .unwrap_or(Value::Null),
        "INT8" => row
            .try_get::<Option<i64>, _>(index)
            .ok()
            .flatten()
            .map(Value::from)
            .unwrap_or(Value::Null),
        "FLOAT4" => row
            .try_get::<Option<f32>, _>(index)
            .ok()
            .flatten()
            .and_then(|value| Number::from_f64(f64::from(value)))
            .map(Value::Number)
            .unwrap_or(Value::Null),
        "FLOAT8" => row
            .try_get::<Option<f64>, _>(index)
            .ok()
            .flatten()
            .and_then(Number::from_f64)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        "TEXT" | "VARCHAR" | "BPCHAR" | "CHAR" | "NAME" => row
            .try_get::<Option<String>, _>(index)
            .ok()
            .flatten()
            .map(Value::String)
            .unwrap_or(Value::Null),
        "JSON" | "JSONB" => row
            .try_get::<Option<Value>, _>(index)
            .ok()
            .flatten()
            .unwrap_or(Value::Null),
        _ => decode_cell_fallback(row, index),
    }
}

fn decode_cell_fallback(row: &PgRow, index: usize) -> Value {
    if let Ok(value) = row.try_get::<Option<i64>, _>(index) {
        return value.map(Value::from).unwrap_or(Value::Null);
    }
    if let Ok(value) = row.try_get::<Option<f64>, _>(index) {
        return value
            .and_then(Number::from_f64)
            .map(Value::Number)
            .unwrap_or(Value::Null);
    }
    if let Ok(value) = row.try_get::<Option<bool>, _>(index) {
        return value.map(Value::Bool).unwrap_or(Value::Null);
    }
    if let Ok(value) = row.try_get::<Option<String>, _>(index) {
        return value.map(Value::String).unwrap_or(Value::Null);
    }
    Value::Null
}
