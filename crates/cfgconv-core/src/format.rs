//! The closed registry of supported formats.

use crate::emitters::{Emitter, IniEmitter, JsonEmitter, TomlEmitter, XmlEmitter, YamlEmitter};
use crate::error::UnknownFormat;
use crate::parsers::{IniParser, JsonParser, Parser, TomlParser, XmlParser, YamlParser};
use std::fmt;
use std::str::FromStr;

/// One of the five supported configuration formats.
///
/// Resolution from a name is case-insensitive and happens exactly once, at
/// the conversion boundary; everything past that point dispatches on this
/// enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    Json,
    Yaml,
    Toml,
    Ini,
    Xml,
}

impl Format {
    /// All supported formats, in registry order.
    pub const ALL: [Format; 5] = [
        Format::Json,
        Format::Yaml,
        Format::Toml,
        Format::Ini,
        Format::Xml,
    ];

    /// The lowercase format tag (`json`, `yaml`, ...).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Format::Json => "json",
            Format::Yaml => "yaml",
            Format::Toml => "toml",
            Format::Ini => "ini",
            Format::Xml => "xml",
        }
    }

    /// The parser for this format.
    #[must_use]
    pub fn parser(self) -> &'static dyn Parser {
        match self {
            Format::Json => &JsonParser,
            Format::Yaml => &YamlParser,
            Format::Toml => &TomlParser,
            Format::Ini => &IniParser,
            Format::Xml => &XmlParser,
        }
    }

    /// The emitter for this format.
    #[must_use]
    pub fn emitter(self) -> &'static dyn Emitter {
        match self {
            Format::Json => &JsonEmitter,
            Format::Yaml => &YamlEmitter,
            Format::Toml => &TomlEmitter,
            Format::Ini => &IniEmitter,
            Format::Xml => &XmlEmitter,
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Format {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Format::Json),
            "yaml" => Ok(Format::Yaml),
            "toml" => Ok(Format::Toml),
            "ini" => Ok(Format::Ini),
            "xml" => Ok(Format::Xml),
            _ => Err(UnknownFormat(s.to_string())),
        }
    }
}
