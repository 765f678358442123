//! XML emitter.
//!
//! Reverses the parser's conversion rule: `@`-prefixed keys become
//! attributes, the `#text` key becomes element text, sequences become
//! repeated sibling elements sharing the parent key's name, scalars become
//! element text. A canonical value with exactly one top-level key uses that
//! key as the document root; anything else is wrapped in a synthetic root
//! element named by the `root_name` option.

use std::io::Cursor;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::error::EmitError;
use crate::format::Format;
use crate::options::EmitOptions;
use crate::value::{Value, ATTR_PREFIX, TEXT_KEY};

use super::{format_float, Emitter};

/// Emitter for XML output.
#[derive(Debug, Default, Clone, Copy)]
pub struct XmlEmitter;

impl Emitter for XmlEmitter {
    fn emit(&self, value: &Value, options: &EmitOptions) -> Result<String, EmitError> {
        let inner = Cursor::new(Vec::new());
        let mut writer = if options.pretty {
            Writer::new_with_indent(inner, b' ', options.indent)
        } else {
            Writer::new(inner)
        };
        writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))
            .map_err(to_emit)?;

        match value {
            Value::Object(map) if map.len() == 1 => {
                // The sole key becomes the root, unless its value is a
                // sequence that would expand into several sibling roots.
                let (key, child) = map.iter().next().ok_or_else(|| EmitError::Xml(
                    "empty mapping".to_string(),
                ))?;
                match child {
                    Value::Array(items) if items.len() != 1 => {
                        write_element(&mut writer, &options.root_name, value)?;
                    }
                    _ => write_element(&mut writer, key, child)?,
                }
            }
            Value::Object(_) => write_element(&mut writer, &options.root_name, value)?,
            Value::Array(items) => {
                validate_name(&options.root_name)?;
                writer
                    .write_event(Event::Start(BytesStart::new(options.root_name.as_str())))
                    .map_err(to_emit)?;
                for item in items {
                    write_element(&mut writer, "item", item)?;
                }
                writer
                    .write_event(Event::End(BytesEnd::new(options.root_name.as_str())))
                    .map_err(to_emit)?;
            }
            scalar => write_element(&mut writer, &options.root_name, scalar)?,
        }

        let bytes = writer.into_inner().into_inner();
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

/// Write one element. Sequences expand into repeated siblings named after
/// the same key; mappings split into attributes, text and child elements;
/// scalars become element text.
fn write_element<W: std::io::Write>(
    writer: &mut Writer<W>,
    name: &str,
    value: &Value,
) -> Result<(), EmitError> {
    if let Value::Array(items) = value {
        for item in items {
            write_element(writer, name, item)?;
        }
        return Ok(());
    }

    validate_name(name)?;
    match value {
        Value::Object(map) => {
            let mut attrs: Vec<(&str, String)> = Vec::new();
            for (key, child) in map {
                if let Some(attr_name) = key.strip_prefix(ATTR_PREFIX) {
                    let text = scalar_text(child).ok_or_else(|| EmitError::Unrepresentable {
                        format: Format::Xml,
                        detail: format!("a non-scalar value for attribute `{key}`"),
                    })?;
                    attrs.push((attr_name, text));
                }
            }
            let mut start = BytesStart::new(name);
            for (attr_name, text) in &attrs {
                start.push_attribute((*attr_name, text.as_str()));
            }
            writer.write_event(Event::Start(start)).map_err(to_emit)?;

            for (key, child) in map {
                if key.starts_with(ATTR_PREFIX) {
                    continue;
                }
                if key == TEXT_KEY {
                    let text = scalar_text(child).ok_or_else(|| EmitError::Unrepresentable {
                        format: Format::Xml,
                        detail: "a non-scalar value for element text".to_string(),
                    })?;
                    if !text.is_empty() {
                        writer
                            .write_event(Event::Text(BytesText::new(&text)))
                            .map_err(to_emit)?;
                    }
                } else {
                    write_element(writer, key, child)?;
                }
            }
            writer
                .write_event(Event::End(BytesEnd::new(name)))
                .map_err(to_emit)?;
        }
        scalar => {
            writer
                .write_event(Event::Start(BytesStart::new(name)))
                .map_err(to_emit)?;
            if let Some(text) = scalar_text(scalar) {
                if !text.is_empty() {
                    writer
                        .write_event(Event::Text(BytesText::new(&text)))
                        .map_err(to_emit)?;
                }
            }
            writer
                .write_event(Event::End(BytesEnd::new(name)))
                .map_err(to_emit)?;
        }
    }
    Ok(())
}

/// Scalars rendered as XML text. Null renders as the empty string (an empty
/// element or attribute); containers have no text form.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => Some(String::new()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Integer(i) => Some(i.to_string()),
        Value::Float(f) => Some(format_float(*f)),
        Value::String(s) => Some(s.clone()),
        Value::Array(_) | Value::Object(_) => None,
    }
}

/// Canonical keys become tag names, and not every string is a valid tag.
fn validate_name(name: &str) -> Result<(), EmitError> {
    let mut chars = name.chars();
    let valid_start = matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_');
    let valid_rest =
        chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.' | ':'));
    if valid_start && valid_rest {
        Ok(())
    } else {
        Err(EmitError::Unrepresentable {
            format: Format::Xml,
            detail: format!("`{name}` as an element name"),
        })
    }
}

fn to_emit<E: std::fmt::Display>(e: E) -> EmitError {
    EmitError::Xml(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn object(pairs: Vec<(&str, Value)>) -> Value {
        Value::Object(
            pairs
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect(),
        )
    }

    #[test]
    fn single_top_level_key_becomes_root() {
        let doc = object(vec![(
            "person",
            object(vec![("name", Value::from("John")), ("age", Value::Integer(30))]),
        )]);
        let out = XmlEmitter.emit(&doc, &EmitOptions::default()).unwrap();
        assert_eq!(
            out,
            "<?xml version=\"1.0\" encoding=\"utf-8\"?>\
             <person><name>John</name><age>30</age></person>"
        );
    }

    #[test]
    fn multiple_top_level_keys_use_the_synthetic_root() {
        let doc = object(vec![("a", Value::Integer(1)), ("b", Value::Integer(2))]);
        let out = XmlEmitter.emit(&doc, &EmitOptions::default()).unwrap();
        assert!(out.contains("<root><a>1</a><b>2</b></root>"));

        let named = EmitOptions {
            root_name: "config".to_string(),
            ..EmitOptions::default()
        };
        let out = XmlEmitter.emit(&doc, &named).unwrap();
        assert!(out.contains("<config><a>1</a><b>2</b></config>"));
    }

    #[test]
    fn sequences_become_repeated_siblings() {
        let doc = object(vec![(
            "list",
            object(vec![(
                "item",
                Value::from(vec![Value::from("a"), Value::from("b")]),
            )]),
        )]);
        let out = XmlEmitter.emit(&doc, &EmitOptions::default()).unwrap();
        assert!(out.contains("<list><item>a</item><item>b</item></list>"));
    }

    #[test]
    fn attributes_and_text_markers_are_reversed() {
        let doc = object(vec![(
            "server",
            object(vec![
                ("@host", Value::from("localhost")),
                (TEXT_KEY, Value::from("primary")),
            ]),
        )]);
        let out = XmlEmitter.emit(&doc, &EmitOptions::default()).unwrap();
        assert!(out.contains(r#"<server host="localhost">primary</server>"#));
    }

    #[test]
    fn pretty_output_is_indented() {
        let doc = object(vec![(
            "person",
            object(vec![("name", Value::from("John"))]),
        )]);
        let options = EmitOptions {
            pretty: true,
            indent: 2,
            ..EmitOptions::default()
        };
        let out = XmlEmitter.emit(&doc, &options).unwrap();
        assert!(out.contains("\n  <name>John</name>\n"));
    }

    #[test]
    fn invalid_element_names_are_unrepresentable() {
        let doc = object(vec![("bad name", Value::Integer(1))]);
        let err = XmlEmitter.emit(&doc, &EmitOptions::default()).unwrap_err();
        assert!(matches!(err, EmitError::Unrepresentable { .. }));
    }
}
