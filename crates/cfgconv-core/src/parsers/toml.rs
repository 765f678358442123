//! TOML parser.

use crate::error::ParseError;
use crate::value::Value;

use super::Parser;

/// Parser for TOML input.
///
/// Tables become mappings, arrays become sequences, and TOML's strict
/// integer/float split ports directly onto the canonical split. Datetimes
/// are carried as their string rendering since the canonical model has no
/// time type.
#[derive(Debug, Default, Clone, Copy)]
pub struct TomlParser;

impl Parser for TomlParser {
    fn parse(&self, input: &str) -> Result<Value, ParseError> {
        let toml: toml::Value = input.parse()?;
        Ok(from_toml(toml))
    }
}

/// Convert a `toml::Value` into the canonical `Value`.
fn from_toml(value: toml::Value) -> Value {
    match value {
        toml::Value::String(s) => Value::String(s),
        toml::Value::Integer(i) => Value::Integer(i),
        toml::Value::Float(f) => Value::Float(f),
        toml::Value::Boolean(b) => Value::Bool(b),
        toml::Value::Datetime(dt) => Value::String(dt.to_string()),
        toml::Value::Array(arr) => Value::Array(arr.into_iter().map(from_toml).collect()),
        toml::Value::Table(table) => {
            Value::Object(table.into_iter().map(|(k, v)| (k, from_toml(v))).collect())
        }
    }
}
