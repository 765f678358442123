//! INI parser.
//!
//! INI has no nesting and no types beyond strings, so every section becomes
//! a top-level mapping key holding a flat mapping of string values. Numbers
//! and booleans stay strings; recovering types is the reader's problem, not
//! the format's.

use indexmap::IndexMap;

use crate::error::ParseError;
use crate::value::{Value, DEFAULT_SECTION};

use super::Parser;

/// Parser for INI input.
///
/// Accepts `key = value` and `key: value` pairs, `[section]` headers and
/// full-line `;`/`#` comments. Duplicate sections and duplicate keys within
/// a section are errors.
#[derive(Debug, Default, Clone, Copy)]
pub struct IniParser;

impl Parser for IniParser {
    fn parse(&self, input: &str) -> Result<Value, ParseError> {
        let mut root: IndexMap<String, Value> = IndexMap::new();
        let mut current: Option<String> = None;

        for (idx, raw) in input.lines().enumerate() {
            let line_no = idx + 1;
            let line = raw.trim();

            if line.is_empty() || line.starts_with(';') || line.starts_with('#') {
                continue;
            }

            if let Some(rest) = line.strip_prefix('[') {
                let name = parse_section_header(rest, line_no)?;
                if root.contains_key(&name) {
                    return Err(ParseError::Ini {
                        line: line_no,
                        message: format!("duplicate section [{name}]"),
                    });
                }
                root.insert(name.clone(), Value::Object(IndexMap::new()));
                current = Some(name);
                continue;
            }

            let (key, value) = parse_pair(line, line_no)?;
            let section_name = match &current {
                Some(name) => name.as_str(),
                None => DEFAULT_SECTION,
            };
            let section = root
                .entry(section_name.to_string())
                .or_insert_with(|| Value::Object(IndexMap::new()));
            if let Value::Object(entries) = section {
                if entries.contains_key(&key) {
                    return Err(ParseError::Ini {
                        line: line_no,
                        message: format!("duplicate key `{key}` in section [{section_name}]"),
                    });
                }
                entries.insert(key, Value::String(value));
            }
        }

        Ok(Value::Object(root))
    }
}

/// Parse the remainder of a `[section]` line (after the opening bracket).
fn parse_section_header(rest: &str, line_no: usize) -> Result<String, ParseError> {
    let name = rest
        .strip_suffix(']')
        .ok_or_else(|| ParseError::Ini {
            line: line_no,
            message: "unterminated section header".to_string(),
        })?
        .trim();
    if name.is_empty() {
        return Err(ParseError::Ini {
            line: line_no,
            message: "empty section name".to_string(),
        });
    }
    Ok(name.to_string())
}

/// Split a `key = value` (or `key: value`) line at the earliest delimiter.
fn parse_pair(line: &str, line_no: usize) -> Result<(String, String), ParseError> {
    let delim = line.find(['=', ':']).ok_or_else(|| ParseError::Ini {
        line: line_no,
        message: "expected `key = value`".to_string(),
    })?;
    let key = line[..delim].trim();
    if key.is_empty() {
        return Err(ParseError::Ini {
            line: line_no,
            message: "empty key".to_string(),
        });
    }
    let value = line[delim + 1..].trim();
    Ok((key.to_string(), value.to_string()))
}
