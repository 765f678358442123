//! JSON emitter.

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::error::EmitError;
use crate::options::EmitOptions;
use crate::value::Value;

use super::Emitter;

/// Emitter for JSON output.
///
/// Direct structural mapping: compact single-line output by default,
/// `indent`-space nested formatting when `pretty` is set. Key order follows
/// mapping iteration order.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonEmitter;

impl Emitter for JsonEmitter {
    fn emit(&self, value: &Value, options: &EmitOptions) -> Result<String, EmitError> {
        let json = to_json(value);
        if options.pretty {
            let indent = " ".repeat(options.indent);
            let mut buf = Vec::new();
            let formatter = PrettyFormatter::with_indent(indent.as_bytes());
            let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
            json.serialize(&mut ser)?;
            Ok(String::from_utf8_lossy(&buf).into_owned())
        } else {
            Ok(serde_json::to_string(&json)?)
        }
    }
}

/// Convert the canonical `Value` into a `serde_json::Value`.
///
/// Non-finite floats have no JSON literal and degrade to null, matching
/// serde_json's own convention.
fn to_json(value: &Value) -> serde_json::Value {
    match value {
        Value::Null => serde_json::Value::Null,
        Value::Bool(b) => serde_json::Value::Bool(*b),
        Value::Integer(i) => serde_json::Value::Number((*i).into()),
        Value::Float(f) => serde_json::Number::from_f64(*f)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null),
        Value::String(s) => serde_json::Value::String(s.clone()),
        Value::Array(items) => serde_json::Value::Array(items.iter().map(to_json).collect()),
        Value::Object(entries) => serde_json::Value::Object(
            entries.iter().map(|(k, v)| (k.clone(), to_json(v))).collect(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;

    fn sample() -> Value {
        let mut map = IndexMap::new();
        map.insert("name".to_string(), Value::from("John"));
        map.insert("age".to_string(), Value::Integer(30));
        Value::Object(map)
    }

    #[test]
    fn compact_by_default() {
        let out = JsonEmitter.emit(&sample(), &EmitOptions::default()).unwrap();
        assert_eq!(out, r#"{"name":"John","age":30}"#);
    }

    #[test]
    fn pretty_uses_indent_width() {
        let options = EmitOptions {
            pretty: true,
            indent: 2,
            ..EmitOptions::default()
        };
        let out = JsonEmitter.emit(&sample(), &options).unwrap();
        assert_eq!(out, "{\n  \"name\": \"John\",\n  \"age\": 30\n}");
    }
}
