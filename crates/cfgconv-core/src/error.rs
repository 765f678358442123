//! Error types for format resolution, parsing, emitting and conversion.

use crate::format::Format;
use thiserror::Error;

/// Convenience alias used throughout cfgconv-core.
pub type Result<T> = std::result::Result<T, ConvertError>;

/// A format identifier that names none of the supported formats.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown format: {0}")]
pub struct UnknownFormat(pub String);

/// Errors raised while parsing input text into the canonical value tree.
#[derive(Error, Debug)]
pub enum ParseError {
    /// The input was not valid JSON.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The input was not valid YAML.
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The input was not valid TOML.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// The input was not well-formed XML.
    #[error("XML parse error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// The XML was readable but not a usable document (no root element,
    /// several root elements, text outside the root, bad attribute).
    #[error("XML document error: {0}")]
    XmlDocument(String),

    /// The input was not valid INI.
    /// Includes the 1-based line number where the error was detected.
    #[error("INI parse error at line {line}: {message}")]
    Ini { line: usize, message: String },
}

/// Errors raised while emitting the canonical value tree as output text.
#[derive(Error, Debug)]
pub enum EmitError {
    /// JSON serialization failed.
    #[error("JSON emit error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML serialization failed.
    #[error("TOML emit error: {0}")]
    Toml(#[from] toml::ser::Error),

    /// The XML writer failed.
    #[error("XML emit error: {0}")]
    Xml(String),

    /// The value contains a construct the target format cannot express.
    #[error("{format} cannot represent {detail}")]
    Unrepresentable { format: Format, detail: String },
}

/// The only error kind that crosses the conversion boundary.
///
/// Parser and emitter failures are wrapped with the stage and format they
/// occurred in; format resolution fails before any parsing begins.
#[derive(Error, Debug)]
pub enum ConvertError {
    /// The requested format identifier matches no registered format.
    #[error("unsupported {direction} format: {name}")]
    UnsupportedFormat {
        direction: &'static str,
        name: String,
    },

    /// Parsing the input text failed.
    #[error("failed to parse {format} input: {source}")]
    Parse {
        format: Format,
        #[source]
        source: ParseError,
    },

    /// Emitting the output text failed.
    #[error("failed to emit {format} output: {source}")]
    Emit {
        format: Format,
        #[source]
        source: EmitError,
    },
}
