//! Hierarchical configuration values, the input of the flattener.
//!
//! [`ConfigValue`] is a closed variant: every node is a scalar, an ordered
//! sequence, or an ordered mapping. Trees come from whatever produced the
//! configuration; `toml` and `serde_json` values convert directly, and any
//! `Serialize` type converts through `serde_json`.

use std::fmt;

use serde::Serialize;

use crate::error::FlatSourceError;
use crate::path::join_key;

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigValue {
    Scalar(Scalar),
    Sequence(Vec<ConfigValue>),
    /// Entries in their original order.
    Mapping(Vec<(String, ConfigValue)>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Bool(b) => write!(f, "{b}"),
            Scalar::Int(i) => write!(f, "{i}"),
            // Debug keeps the fraction on integral floats ("1.0", not "1").
            Scalar::Float(x) if x.is_finite() => write!(f, "{x:?}"),
            Scalar::Float(x) => write!(f, "{x}"),
            Scalar::Text(s) => f.write_str(s),
        }
    }
}

impl ConfigValue {
    pub fn text(s: impl Into<String>) -> Self {
        ConfigValue::Scalar(Scalar::Text(s.into()))
    }

    /// Convert any serializable value through `serde_json`.
    pub fn from_serialize<T: Serialize + ?Sized>(value: &T) -> Result<Self, FlatSourceError> {
        let json = serde_json::to_value(value).map_err(|e| FlatSourceError::UnsupportedValue {
            path: String::new(),
            reason: e.to_string(),
        })?;
        ConfigValue::try_from(json)
    }
}

impl From<bool> for ConfigValue {
    fn from(v: bool) -> Self {
        ConfigValue::Scalar(Scalar::Bool(v))
    }
}

impl From<i64> for ConfigValue {
    fn from(v: i64) -> Self {
        ConfigValue::Scalar(Scalar::Int(v))
    }
}

impl From<f64> for ConfigValue {
    fn from(v: f64) -> Self {
        ConfigValue::Scalar(Scalar::Float(v))
    }
}

impl From<&str> for ConfigValue {
    fn from(v: &str) -> Self {
        ConfigValue::text(v)
    }
}

impl From<String> for ConfigValue {
    fn from(v: String) -> Self {
        ConfigValue::text(v)
    }
}

// --- toml ---

impl From<toml::Value> for ConfigValue {
    fn from(value: toml::Value) -> Self {
        match value {
            toml::Value::String(s) => ConfigValue::text(s),
            toml::Value::Integer(i) => i.into(),
            toml::Value::Float(f) => f.into(),
            toml::Value::Boolean(b) => b.into(),
            toml::Value::Datetime(dt) => ConfigValue::text(dt.to_string()),
            toml::Value::Array(items) => {
                ConfigValue::Sequence(items.into_iter().map(ConfigValue::from).collect())
            }
            toml::Value::Table(table) => table.into(),
        }
    }
}

impl From<toml::Table> for ConfigValue {
    fn from(table: toml::Table) -> Self {
        ConfigValue::Mapping(
            table
                .into_iter()
                .map(|(k, v)| (k, ConfigValue::from(v)))
                .collect(),
        )
    }
}

// --- serde_json ---

impl TryFrom<serde_json::Value> for ConfigValue {
    type Error = FlatSourceError;

    /// `null` inside a mapping drops the entry; anywhere else it is an error.
    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        from_json(value, "")?.ok_or_else(|| FlatSourceError::UnsupportedValue {
            path: String::new(),
            reason: "null at the root".into(),
        })
    }
}

fn from_json(value: serde_json::Value, path: &str) -> Result<Option<ConfigValue>, FlatSourceError> {
    use serde_json::Value;

    let converted = match value {
        Value::Null => return Ok(None),
        Value::Bool(b) => b.into(),
        Value::Number(n) => match n.as_i64() {
            Some(i) => i.into(),
            // u64 beyond i64 and all floats
            None => match n.as_f64() {
                Some(f) if n.is_f64() => f.into(),
                _ => ConfigValue::text(n.to_string()),
            },
        },
        Value::String(s) => ConfigValue::text(s),
        Value::Array(items) => {
            let mut seq = Vec::with_capacity(items.len());
            for (index, item) in items.into_iter().enumerate() {
                let item_path = join_key(path, &index.to_string());
                let converted = from_json(item, &item_path)?.ok_or_else(|| {
                    FlatSourceError::UnsupportedValue {
                        path: item_path.clone(),
                        reason: "null inside a sequence".into(),
                    }
                })?;
                seq.push(converted);
            }
            ConfigValue::Sequence(seq)
        }
        Value::Object(object) => {
            let mut entries = Vec::with_capacity(object.len());
            for (key, item) in object {
                if let Some(converted) = from_json(item, &join_key(path, &key))? {
                    entries.push((key, converted));
                }
            }
            ConfigValue::Mapping(entries)
        }
    };
    Ok(Some(converted))
}
