//! Parsing of the `types` and `names` hint parameters.

use std::collections::HashMap;
use std::str::FromStr;

use crate::columns::TypeTag;

/// Split a raw hint parameter into `column:value` pairs.
///
/// Entries are comma-separated and split on the first colon. An entry
/// with no colon, or with an empty column name, carries no usable
/// mapping and is skipped.
fn parse_pairs(raw: &str) -> impl Iterator<Item = (String, String)> + '_ {
    raw.split(',').filter_map(|entry| {
        let (column, value) = entry.split_once(':')?;
        if column.is_empty() {
            return None;
        }
        Some((column.to_string(), value.to_string()))
    })
}

/// Parse the `types` hint parameter. Values that do not name a known
/// type tag are skipped, leaving inference to decide.
pub fn parse_type_hints(raw: &str) -> HashMap<String, TypeTag> {
    parse_pairs(raw)
        .filter_map(|(column, value)| {
            TypeTag::from_str(&value).ok().map(|tag| (column, tag))
        })
        .collect()
}

/// Parse the `names` hint parameter into friendly-name overrides.
pub fn parse_name_hints(raw: &str) -> HashMap<String, String> {
    parse_pairs(raw).collect()
}
