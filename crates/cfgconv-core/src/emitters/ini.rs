//! INI emitter.
//!
//! INI supports exactly one level of nesting, so each top-level mapping
//! entry becomes a `[section]` and deeper mappings flatten into dotted keys
//! (`parent.child`). This is lossy and one-directional: the INI parser
//! yields the dotted keys verbatim and cannot reconstruct the original
//! nesting depth.

use indexmap::IndexMap;

use crate::error::EmitError;
use crate::format::Format;
use crate::options::EmitOptions;
use crate::value::{Value, DEFAULT_SECTION};

use super::Emitter;

/// Emitter for INI output.
///
/// Non-mapping top-level values are placed under a synthetic `DEFAULT`
/// section rather than dropped; all values are stringified, sequences with
/// their inline rendering.
#[derive(Debug, Default, Clone, Copy)]
pub struct IniEmitter;

impl Emitter for IniEmitter {
    fn emit(&self, value: &Value, _options: &EmitOptions) -> Result<String, EmitError> {
        let Some(entries) = value.as_object() else {
            return Err(EmitError::Unrepresentable {
                format: Format::Ini,
                detail: "a document whose root is not a mapping".to_string(),
            });
        };

        let mut default_lines: Vec<(String, String)> = Vec::new();
        let mut sections: IndexMap<String, Vec<(String, String)>> = IndexMap::new();
        for (key, child) in entries {
            match child {
                Value::Object(nested) => {
                    flatten_into(nested, "", sections.entry(key.clone()).or_default());
                }
                other => default_lines.push((key.clone(), stringify(other))),
            }
        }

        // An explicit DEFAULT mapping merges in behind the synthetic entries
        // so the header is written once.
        if let Some(lines) = sections.shift_remove(DEFAULT_SECTION) {
            default_lines.extend(lines);
        }

        let mut out = String::new();
        if !default_lines.is_empty() {
            write_section(DEFAULT_SECTION, &default_lines, &mut out);
        }
        for (name, lines) in &sections {
            write_section(name, lines, &mut out);
        }
        Ok(out)
    }
}

fn write_section(name: &str, lines: &[(String, String)], out: &mut String) {
    out.push('[');
    out.push_str(name);
    out.push_str("]\n");
    for (key, value) in lines {
        out.push_str(key);
        out.push_str(" = ");
        out.push_str(value);
        out.push('\n');
    }
    out.push('\n');
}

/// Flatten a section body: nested mappings recurse with a dotted prefix,
/// everything else stringifies in place. Empty nested mappings have no INI
/// rendering and produce no lines.
fn flatten_into(map: &IndexMap<String, Value>, prefix: &str, lines: &mut Vec<(String, String)>) {
    for (key, child) in map {
        let full = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };
        match child {
            Value::Object(nested) => flatten_into(nested, &full, lines),
            other => lines.push((full, stringify(other))),
        }
    }
}

/// INI values are bare strings: scalars print plainly (null as the empty
/// string), sequences fall back to the canonical inline rendering.
fn stringify(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Integer(i) => i.to_string(),
        Value::Float(f) => f.to_string(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
