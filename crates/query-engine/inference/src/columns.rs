//! Column descriptors and per-column type inference.

use std::collections::HashMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// The type tag reported for a result column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeTag {
    String,
    Integer,
    Number,
    Year,
}

#[derive(Debug, Error)]
#[error("unknown type tag: {0}")]
pub struct UnknownTypeTag(String);

impl FromStr for TypeTag {
    type Err = UnknownTypeTag;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "string" => Ok(Self::String),
            "integer" => Ok(Self::Integer),
            "number" => Ok(Self::Number),
            "year" => Ok(Self::Year),
            _ => Err(UnknownTypeTag(raw.to_string())),
        }
    }
}

/// A column as reported to the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    pub name: String,
    #[serde(rename = "type")]
    pub column_type: TypeTag,
    pub friendly_name: String,
}

/// Choose the tag for one column of the first row.
///
/// Priority order: an explicit override for the column, the literal
/// `year` column name, whole numbers, other numerics, then `string`
/// for everything else.
pub fn infer_type(name: &str, value: &Value, overrides: &HashMap<String, TypeTag>) -> TypeTag {
    if let Some(tag) = overrides.get(name) {
        return *tag;
    }
    if name == "year" {
        return TypeTag::Year;
    }
    if is_whole_number(value) {
        return TypeTag::Integer;
    }
    if value.is_number() {
        return TypeTag::Number;
    }
    TypeTag::String
}

/// Whole numbers include floats with a zero fractional part, matching
/// how a database `3.0` reads as an integer to the client.
fn is_whole_number(value: &Value) -> bool {
    match value {
        Value::Number(number) => {
            number.is_i64()
                || number.is_u64()
                || number.as_f64().is_some_and(|float| float.fract() == 0.0)
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn no_overrides() -> HashMap<String, TypeTag> {
        HashMap::new()
    }

    #[test]
    fn integers_infer_integer() {
        assert_eq!(infer_type("id", &json!(1), &no_overrides()), TypeTag::Integer);
    }

    #[test]
    fn whole_floats_infer_integer() {
        assert_eq!(infer_type("count", &json!(3.0), &no_overrides()), TypeTag::Integer);
    }

    #[test]
    fn fractional_floats_infer_number() {
        assert_eq!(infer_type("score", &json!(3.5), &no_overrides()), TypeTag::Number);
    }

    #[test]
    fn non_numbers_infer_string() {
        assert_eq!(infer_type("label", &json!("abc"), &no_overrides()), TypeTag::String);
        assert_eq!(infer_type("flag", &json!(true), &no_overrides()), TypeTag::String);
        assert_eq!(infer_type("gap", &Value::Null, &no_overrides()), TypeTag::String);
    }

    #[test]
    fn year_name_beats_numeric_inference() {
        assert_eq!(infer_type("year", &json!(2020), &no_overrides()), TypeTag::Year);
    }

    #[test]
    fn override_beats_everything() {
        let overrides = HashMap::from([("year".to_string(), TypeTag::String)]);
        assert_eq!(infer_type("year", &json!(2020), &overrides), TypeTag::String);
    }

    #[test]
    fn type_tags_serialize_lowercase() {
        assert_eq!(serde_json::to_string(&TypeTag::Integer).unwrap(), "\"integer\"");
        assert_eq!("year".parse::<TypeTag>().unwrap(), TypeTag::Year);
        assert!("date".parse::<TypeTag>().is_err());
    }
}
