//! Flatten a [`ConfigValue`] tree into dotted key-value pairs, the inverse of
//! the view a [`FlatSource`](crate::FlatSource) projects.
//!
//! Mapping keys and sequence indices become dotted path segments; scalars are
//! written in their natural text form:
//! `{database: {hosts: ["a", "b"]}}` → `database.hosts.0 = a`, `database.hosts.1 = b`.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::FlatSourceError;
use crate::path::join_key;
use crate::value::ConfigValue;

/// Flatten `value` into a flat string map.
///
/// Keys of a root mapping are not prefixed. A root scalar is stored under the
/// empty key. Empty sequences and mappings produce no keys.
pub fn to_flat_map(value: &ConfigValue) -> BTreeMap<String, String> {
    let mut out = BTreeMap::new();
    flatten_into(value, "", &mut out);
    out
}

/// Flatten any `Serialize` value. `None` fields are left out.
pub fn flatten_serialize<S: Serialize + ?Sized>(
    source: &S,
) -> Result<BTreeMap<String, String>, FlatSourceError> {
    ConfigValue::from_serialize(source).map(|value| to_flat_map(&value))
}

/// Flatten a parsed TOML document.
pub fn flatten_toml(table: &toml::Table) -> BTreeMap<String, String> {
    to_flat_map(&ConfigValue::from(table.clone()))
}

fn flatten_into(value: &ConfigValue, prefix: &str, out: &mut BTreeMap<String, String>) {
    match value {
        ConfigValue::Scalar(scalar) => {
            out.insert(prefix.to_string(), scalar.to_string());
        }
        ConfigValue::Sequence(items) => {
            for (index, item) in items.iter().enumerate() {
                flatten_into(item, &join_key(prefix, &index.to_string()), out);
            }
        }
        ConfigValue::Mapping(entries) => {
            for (key, item) in entries {
                flatten_into(item, &join_key(prefix, key), out);
            }
        }
    }
}
