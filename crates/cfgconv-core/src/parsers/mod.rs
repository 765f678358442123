//! Per-format parsers producing the canonical [`Value`] tree.

mod ini;
mod json;
mod toml;
mod xml;
mod yaml;

pub use ini::IniParser;
pub use json::JsonParser;
pub use toml::TomlParser;
pub use xml::XmlParser;
pub use yaml::YamlParser;

use crate::error::ParseError;
use crate::value::Value;

/// Converts format-specific text into the canonical value tree.
pub trait Parser: Send + Sync {
    /// Parse input text into a [`Value`].
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] when the input is not valid for the format.
    fn parse(&self, input: &str) -> Result<Value, ParseError>;
}
