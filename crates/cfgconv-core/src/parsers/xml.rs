//! XML parser.
//!
//! XML has no native list/map distinction and carries attributes and text
//! separately from child elements, so the element tree converts by a
//! recursive rule:
//!
//! - attributes become keys prefixed with [`ATTR_PREFIX`];
//! - direct text content becomes the [`TEXT_KEY`] key;
//! - each child tag becomes a key whose value is *always* a sequence of the
//!   children's converted mappings, because XML permits repeated sibling
//!   tags and the model must not lose that possibility;
//! - the document's single top element becomes the sole top-level key.

use indexmap::IndexMap;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::error::ParseError;
use crate::value::{Value, ATTR_PREFIX, TEXT_KEY};

use super::Parser;

/// Parser for XML input.
#[derive(Debug, Default, Clone, Copy)]
pub struct XmlParser;

impl Parser for XmlParser {
    fn parse(&self, input: &str) -> Result<Value, ParseError> {
        let mut reader = Reader::from_str(input);
        // Whitespace-only text between tags is markup formatting, not data.
        reader.config_mut().trim_text_start = true;
        reader.config_mut().trim_text_end = true;

        let mut root: Option<(String, Value)> = None;
        loop {
            match reader.read_event()? {
                Event::Start(start) => {
                    if root.is_some() {
                        return Err(ParseError::XmlDocument(
                            "multiple root elements".to_string(),
                        ));
                    }
                    let name = tag_name(&start);
                    let element = read_element(&mut reader, &start)?;
                    root = Some((name, element));
                }
                Event::Empty(start) => {
                    if root.is_some() {
                        return Err(ParseError::XmlDocument(
                            "multiple root elements".to_string(),
                        ));
                    }
                    let name = tag_name(&start);
                    let mut entries = IndexMap::new();
                    collect_attributes(&start, &mut entries)?;
                    root = Some((name, Value::Object(entries)));
                }
                Event::Text(_) | Event::CData(_) => {
                    return Err(ParseError::XmlDocument(
                        "text outside the root element".to_string(),
                    ));
                }
                Event::Eof => break,
                // Declarations, comments, processing instructions, doctypes
                _ => {}
            }
        }

        let (name, element) = root
            .ok_or_else(|| ParseError::XmlDocument("no root element".to_string()))?;
        let mut document = IndexMap::new();
        document.insert(name, element);
        Ok(Value::Object(document))
    }
}

/// Convert one element (whose `Start` event was just read) into a mapping,
/// consuming events through the matching `End`.
fn read_element(reader: &mut Reader<&[u8]>, start: &BytesStart) -> Result<Value, ParseError> {
    let mut entries: IndexMap<String, Value> = IndexMap::new();
    collect_attributes(start, &mut entries)?;
    let mut text = String::new();

    loop {
        match reader.read_event()? {
            Event::Start(child) => {
                let name = tag_name(&child);
                let converted = read_element(reader, &child)?;
                push_child(&mut entries, name, converted);
            }
            Event::Empty(child) => {
                let name = tag_name(&child);
                let mut child_entries = IndexMap::new();
                collect_attributes(&child, &mut child_entries)?;
                push_child(&mut entries, name, Value::Object(child_entries));
            }
            Event::Text(t) => {
                let fragment = t
                    .unescape()
                    .map_err(|e| ParseError::XmlDocument(e.to_string()))?;
                text.push_str(&fragment);
            }
            Event::CData(c) => {
                text.push_str(&String::from_utf8_lossy(&c.into_inner()));
            }
            Event::End(_) => break,
            Event::Eof => {
                return Err(ParseError::XmlDocument(format!(
                    "unexpected end of document inside <{}>",
                    tag_name(start)
                )));
            }
            _ => {}
        }
    }

    if !text.is_empty() {
        entries.insert(TEXT_KEY.to_string(), Value::String(text));
    }
    Ok(Value::Object(entries))
}

/// Append a converted child under its tag name. Children always live in a
/// sequence, so repeated siblings accumulate instead of clobbering.
fn push_child(entries: &mut IndexMap<String, Value>, name: String, child: Value) {
    let slot = entries.entry(name).or_insert_with(|| Value::Array(Vec::new()));
    if let Value::Array(items) = slot {
        items.push(child);
    }
}

/// Insert `@`-prefixed entries for every attribute on the element.
fn collect_attributes(
    start: &BytesStart,
    entries: &mut IndexMap<String, Value>,
) -> Result<(), ParseError> {
    for attr in start.attributes() {
        let attr = attr.map_err(|e| ParseError::XmlDocument(e.to_string()))?;
        let name = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr
            .unescape_value()
            .map_err(|e| ParseError::XmlDocument(e.to_string()))?
            .into_owned();
        entries.insert(format!("{ATTR_PREFIX}{name}"), Value::String(value));
    }
    Ok(())
}

fn tag_name(start: &BytesStart) -> String {
    String::from_utf8_lossy(start.name().as_ref()).into_owned()
}
