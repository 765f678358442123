//! YAML parser.

use crate::error::ParseError;
use crate::value::Value;

use super::Parser;

/// Parser for YAML input.
///
/// Uses `serde_yaml`'s safe data model (no arbitrary type construction).
/// A top-level scalar or null document passes through as-is instead of
/// being forced into a mapping.
#[derive(Debug, Default, Clone, Copy)]
pub struct YamlParser;

impl Parser for YamlParser {
    fn parse(&self, input: &str) -> Result<Value, ParseError> {
        let yaml: serde_yaml::Value = serde_yaml::from_str(input)?;
        Ok(from_yaml(yaml))
    }
}

/// Convert a `serde_yaml::Value` into the canonical `Value`.
///
/// Scalar mapping keys (numbers, booleans) are stringified; keys with no
/// string form are skipped. Tagged values unwrap to their inner value.
fn from_yaml(value: serde_yaml::Value) -> Value {
    match value {
        serde_yaml::Value::Null => Value::Null,
        serde_yaml::Value::Bool(b) => Value::Bool(b),
        serde_yaml::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::Integer(i)
            } else if let Some(f) = n.as_f64() {
                Value::Float(f)
            } else {
                Value::Null
            }
        }
        serde_yaml::Value::String(s) => Value::String(s),
        serde_yaml::Value::Sequence(seq) => {
            Value::Array(seq.into_iter().map(from_yaml).collect())
        }
        serde_yaml::Value::Mapping(map) => {
            let entries = map
                .into_iter()
                .filter_map(|(k, v)| {
                    let key = match k {
                        serde_yaml::Value::String(s) => s,
                        serde_yaml::Value::Number(n) => n.to_string(),
                        serde_yaml::Value::Bool(b) => b.to_string(),
                        _ => return None,
                    };
                    Some((key, from_yaml(v)))
                })
                .collect();
            Value::Object(entries)
        }
        serde_yaml::Value::Tagged(tagged) => from_yaml(tagged.value),
    }
}
