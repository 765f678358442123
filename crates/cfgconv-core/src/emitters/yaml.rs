//! YAML emitter.
//!
//! Hand-written so both renderings are available: `pretty=true` produces
//! block style (one key per line, nested indentation), `pretty=false`
//! produces flow style (inline braces/brackets). `serde_yaml` only emits
//! block style, which covers half the contract.
//!
//! Strings are double-quoted only when leaving them bare would change their
//! meaning on re-parse (keyword-like, numeric-looking, structural
//! characters, surrounding whitespace). Mapping keys are emitted in stored
//! order, never sorted.

use crate::error::EmitError;
use crate::options::EmitOptions;
use crate::value::Value;

use super::{format_float, Emitter};

/// Emitter for YAML output.
#[derive(Debug, Default, Clone, Copy)]
pub struct YamlEmitter;

impl Emitter for YamlEmitter {
    fn emit(&self, value: &Value, options: &EmitOptions) -> Result<String, EmitError> {
        let mut out = String::new();
        if options.pretty {
            emit_block_root(value, options.indent.max(1), &mut out);
        } else {
            out.push_str(&flow_value(value));
            out.push('\n');
        }
        Ok(out)
    }
}

/// Top-level dispatch for block style: mappings and sequences expand into
/// lines, scalars and empty containers render inline.
fn emit_block_root(value: &Value, width: usize, out: &mut String) {
    match value {
        Value::Object(map) if !map.is_empty() => emit_block_mapping(map, 0, width, out),
        Value::Array(items) if !items.is_empty() => emit_block_sequence(items, 0, width, out),
        other => {
            out.push_str(&flow_value(other));
            out.push('\n');
        }
    }
}

/// Emit all entries of a mapping at the given column (leading spaces).
fn emit_block_mapping(
    map: &indexmap::IndexMap<String, Value>,
    col: usize,
    width: usize,
    out: &mut String,
) {
    for (key, value) in map {
        out.push_str(&" ".repeat(col));
        emit_block_entry(key, value, col, width, out);
    }
}

/// Emit `key: ...` starting at the current position. Nested non-empty
/// containers continue on following lines; everything else stays inline.
/// Always ends with a newline.
fn emit_block_entry(key: &str, value: &Value, col: usize, width: usize, out: &mut String) {
    out.push_str(&format_string(key));
    out.push(':');
    match value {
        Value::Object(map) if !map.is_empty() => {
            out.push('\n');
            emit_block_mapping(map, col + width, width, out);
        }
        Value::Array(items) if !items.is_empty() => {
            out.push('\n');
            emit_block_sequence(items, col + width, width, out);
        }
        other => {
            out.push(' ');
            out.push_str(&flow_value(other));
            out.push('\n');
        }
    }
}

/// Emit `- ` items at the given column. A mapping item puts its first entry
/// on the hyphen line with siblings aligned two columns in; other items
/// render inline after the hyphen.
fn emit_block_sequence(items: &[Value], col: usize, width: usize, out: &mut String) {
    let pad = " ".repeat(col);
    for item in items {
        match item {
            Value::Object(map) if !map.is_empty() => {
                let mut first = true;
                for (key, value) in map {
                    if first {
                        out.push_str(&pad);
                        out.push_str("- ");
                        first = false;
                    } else {
                        out.push_str(&" ".repeat(col + 2));
                    }
                    emit_block_entry(key, value, col + 2, width, out);
                }
            }
            other => {
                out.push_str(&pad);
                out.push_str("- ");
                out.push_str(&flow_value(other));
                out.push('\n');
            }
        }
    }
}

/// Inline (flow) rendering of any value: `{k: v}`, `[a, b]`, or a scalar.
fn flow_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Integer(i) => i.to_string(),
        Value::Float(f) => float_scalar(*f),
        Value::String(s) => format_string(s),
        Value::Array(items) => {
            let parts: Vec<String> = items.iter().map(flow_value).collect();
            format!("[{}]", parts.join(", "))
        }
        Value::Object(map) => {
            let parts: Vec<String> = map
                .iter()
                .map(|(k, v)| format!("{}: {}", format_string(k), flow_value(v)))
                .collect();
            format!("{{{}}}", parts.join(", "))
        }
    }
}

/// YAML float literals, including the non-finite spellings.
fn float_scalar(f: f64) -> String {
    if f.is_nan() {
        ".nan".to_string()
    } else if f.is_infinite() {
        if f > 0.0 { ".inf".to_string() } else { "-.inf".to_string() }
    } else {
        format_float(f)
    }
}

/// Emit a string value or key, quoting and escaping only when necessary.
fn format_string(s: &str) -> String {
    if !needs_quoting(s) {
        return s.to_string();
    }
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for ch in s.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(ch),
        }
    }
    out.push('"');
    out
}

/// A bare string must be quoted if re-parsing it would yield anything other
/// than the same string.
fn needs_quoting(s: &str) -> bool {
    if s.is_empty() {
        return true;
    }
    if s != s.trim() {
        return true;
    }
    // Keyword-like scalars, including the YAML 1.1 boolean spellings some
    // consumers still resolve.
    let lower = s.to_ascii_lowercase();
    if matches!(
        lower.as_str(),
        "true" | "false" | "null" | "~" | "yes" | "no" | "on" | "off" | ".nan" | ".inf" | "-.inf"
    ) {
        return true;
    }
    if looks_numeric(s) {
        return true;
    }
    // Indicator characters at the start of a plain scalar.
    if s.starts_with([
        '-', '?', ':', '&', '*', '!', '|', '>', '%', '@', '`', '"', '\'', ',', '[', ']', '{', '}',
        '#',
    ]) {
        return true;
    }
    // Structural or escape-needing characters anywhere.
    s.chars().any(|c| {
        matches!(
            c,
            ':' | '#' | ',' | '[' | ']' | '{' | '}' | '\\' | '"' | '\n' | '\r' | '\t'
        )
    })
}

/// Check if a string looks like a number (and thus must be quoted to stay a
/// string). Matches integers, floats, exponent forms and leading-zero forms.
fn looks_numeric(s: &str) -> bool {
    let rest = s.strip_prefix(['-', '+']).unwrap_or(s);
    if rest.is_empty() {
        return false;
    }
    // Leading-zero forms like "05" re-parse as numbers in some readers.
    if rest.len() > 1 && rest.starts_with('0') && rest.as_bytes()[1] != b'.' {
        return rest.bytes().all(|b| b.is_ascii_digit());
    }
    let mut has_dot = false;
    let mut has_exp = false;
    for (i, b) in rest.bytes().enumerate() {
        match b {
            b'0'..=b'9' => {}
            b'.' if !has_dot && !has_exp => has_dot = true,
            b'e' | b'E' if !has_exp && i > 0 => has_exp = true,
            b'+' | b'-' if has_exp => {}
            _ => return false,
        }
    }
    rest.bytes().any(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;

    fn doc() -> Value {
        let mut inner = IndexMap::new();
        inner.insert("host".to_string(), Value::from("localhost"));
        inner.insert("port".to_string(), Value::Integer(8080));
        let mut map = IndexMap::new();
        map.insert("name".to_string(), Value::from("app"));
        map.insert("server".to_string(), Value::Object(inner));
        map.insert(
            "tags".to_string(),
            Value::from(vec![Value::from("web"), Value::from("api")]),
        );
        Value::Object(map)
    }

    #[test]
    fn flow_style_is_single_line() {
        let out = YamlEmitter.emit(&doc(), &EmitOptions::default()).unwrap();
        assert_eq!(
            out,
            "{name: app, server: {host: localhost, port: 8080}, tags: [web, api]}\n"
        );
    }

    #[test]
    fn block_style_indents_nested_mappings() {
        let options = EmitOptions {
            pretty: true,
            indent: 2,
            ..EmitOptions::default()
        };
        let out = YamlEmitter.emit(&doc(), &options).unwrap();
        assert_eq!(
            out,
            "name: app\nserver:\n  host: localhost\n  port: 8080\ntags:\n  - web\n  - api\n"
        );
    }

    #[test]
    fn mapping_items_start_on_the_hyphen_line() {
        let mut entry = IndexMap::new();
        entry.insert("id".to_string(), Value::Integer(1));
        entry.insert("name".to_string(), Value::from("a"));
        let mut map = IndexMap::new();
        map.insert("items".to_string(), Value::Array(vec![Value::Object(entry)]));
        let options = EmitOptions {
            pretty: true,
            indent: 2,
            ..EmitOptions::default()
        };
        let out = YamlEmitter.emit(&Value::Object(map), &options).unwrap();
        assert_eq!(out, "items:\n  - id: 1\n    name: a\n");
    }

    #[test]
    fn ambiguous_strings_are_quoted() {
        assert_eq!(format_string("true"), "\"true\"");
        assert_eq!(format_string("30"), "\"30\"");
        assert_eq!(format_string("05"), "\"05\"");
        assert_eq!(format_string(""), "\"\"");
        assert_eq!(format_string("a: b"), "\"a: b\"");
        assert_eq!(format_string("plain text"), "plain text");
    }

    #[test]
    fn floats_stay_floats() {
        let mut map = IndexMap::new();
        map.insert("ratio".to_string(), Value::Float(2.0));
        let out = YamlEmitter
            .emit(&Value::Object(map), &EmitOptions::default())
            .unwrap();
        assert_eq!(out, "{ratio: 2.0}\n");
    }
}
