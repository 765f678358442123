//! TOML emitter.

use crate::error::EmitError;
use crate::format::Format;
use crate::options::EmitOptions;
use crate::value::Value;

use super::Emitter;

/// Emitter for TOML output.
///
/// Tables and arrays map directly and scalar typing is preserved exactly.
/// TOML has no null and requires a table at the document root; both are
/// reported as unrepresentable rather than silently dropped.
#[derive(Debug, Default, Clone, Copy)]
pub struct TomlEmitter;

impl Emitter for TomlEmitter {
    fn emit(&self, value: &Value, options: &EmitOptions) -> Result<String, EmitError> {
        if !value.is_object() {
            return Err(EmitError::Unrepresentable {
                format: Format::Toml,
                detail: "a document whose root is not a table".to_string(),
            });
        }
        let toml = to_toml(value)?;
        let out = if options.pretty {
            toml::to_string_pretty(&toml)?
        } else {
            toml::to_string(&toml)?
        };
        Ok(out)
    }
}

/// Convert the canonical `Value` into a `toml::Value`.
fn to_toml(value: &Value) -> Result<toml::Value, EmitError> {
    match value {
        Value::Null => Err(EmitError::Unrepresentable {
            format: Format::Toml,
            detail: "a null value".to_string(),
        }),
        Value::Bool(b) => Ok(toml::Value::Boolean(*b)),
        Value::Integer(i) => Ok(toml::Value::Integer(*i)),
        Value::Float(f) => Ok(toml::Value::Float(*f)),
        Value::String(s) => Ok(toml::Value::String(s.clone())),
        Value::Array(items) => {
            let converted: Result<Vec<toml::Value>, EmitError> =
                items.iter().map(to_toml).collect();
            Ok(toml::Value::Array(converted?))
        }
        Value::Object(entries) => {
            let mut table = toml::map::Map::new();
            for (key, child) in entries {
                table.insert(key.clone(), to_toml(child)?);
            }
            Ok(toml::Value::Table(table))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;

    #[test]
    fn scalar_typing_is_preserved() {
        let mut map = IndexMap::new();
        map.insert("count".to_string(), Value::Integer(3));
        map.insert("ratio".to_string(), Value::Float(0.5));
        map.insert("label".to_string(), Value::from("x"));
        let out = TomlEmitter
            .emit(&Value::Object(map), &EmitOptions::default())
            .unwrap();
        assert!(out.contains("count = 3"));
        assert!(out.contains("ratio = 0.5"));
        assert!(out.contains("label = \"x\""));
    }

    #[test]
    fn null_is_unrepresentable() {
        let mut map = IndexMap::new();
        map.insert("nothing".to_string(), Value::Null);
        let err = TomlEmitter
            .emit(&Value::Object(map), &EmitOptions::default())
            .unwrap_err();
        assert!(matches!(err, EmitError::Unrepresentable { .. }));
    }

    #[test]
    fn non_table_root_is_unrepresentable() {
        let err = TomlEmitter
            .emit(&Value::Integer(1), &EmitOptions::default())
            .unwrap_err();
        assert!(matches!(err, EmitError::Unrepresentable { .. }));
    }
}
