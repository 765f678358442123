//! JSON parser.

use crate::error::ParseError;
use crate::value::Value;

use super::Parser;

/// Parser for JSON input.
///
/// Delegates to `serde_json` (built with `preserve_order`, so object keys
/// keep their encounter order) and converts into the canonical tree.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonParser;

impl Parser for JsonParser {
    fn parse(&self, input: &str) -> Result<Value, ParseError> {
        let json: serde_json::Value = serde_json::from_str(input)?;
        Ok(from_json(json))
    }
}

/// Convert a `serde_json::Value` into the canonical `Value`.
///
/// Numbers split on the shape serde_json reports: anything with a
/// fractional or exponent part is a float, the rest are integers. Unsigned
/// values beyond `i64::MAX` degrade to floats.
fn from_json(value: serde_json::Value) -> Value {
    match value {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Bool(b),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::Integer(i)
            } else if let Some(f) = n.as_f64() {
                Value::Float(f)
            } else {
                Value::Null
            }
        }
        serde_json::Value::String(s) => Value::String(s),
        serde_json::Value::Array(arr) => Value::Array(arr.into_iter().map(from_json).collect()),
        serde_json::Value::Object(obj) => {
            Value::Object(obj.into_iter().map(|(k, v)| (k, from_json(v))).collect())
        }
    }
}
