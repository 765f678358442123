//! Per-format emitters consuming the canonical [`Value`] tree.

mod ini;
mod json;
mod toml;
mod xml;
mod yaml;

pub use ini::IniEmitter;
pub use json::JsonEmitter;
pub use toml::TomlEmitter;
pub use xml::XmlEmitter;
pub use yaml::YamlEmitter;

use crate::error::EmitError;
use crate::options::EmitOptions;
use crate::value::Value;

/// Converts the canonical value tree into format-specific text.
pub trait Emitter: Send + Sync {
    /// Render `value` as output text, honoring `options` where the format
    /// supports them.
    ///
    /// # Errors
    ///
    /// Returns an [`EmitError`] when the value contains a construct the
    /// target format cannot represent, or serialization itself fails.
    fn emit(&self, value: &Value, options: &EmitOptions) -> Result<String, EmitError>;
}

/// Format a float so it stays a float on re-parse: whole values keep one
/// fractional digit (`30.0`, not `30`), everything else uses the shortest
/// faithful rendering.
pub(crate) fn format_float(f: f64) -> String {
    if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e15 {
        format!("{f:.1}")
    } else {
        format!("{f}")
    }
}
