//! Rendering options honored by the emitters.

/// Options recognized by the emitters.
///
/// Formats that are not indentation-sensitive ignore `indent`; `root_name`
/// is only consulted by the XML emitter when a synthetic root element must
/// be introduced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitOptions {
    /// Spacing width for indented output.
    pub indent: usize,
    /// Human-oriented multi-line output versus compact output, where the
    /// format supports both.
    pub pretty: bool,
    /// Element name wrapping XML output that has no single top-level key.
    pub root_name: String,
}

impl Default for EmitOptions {
    fn default() -> Self {
        EmitOptions {
            indent: 4,
            pretty: false,
            root_name: "root".to_string(),
        }
    }
}

impl EmitOptions {
    /// Options with `pretty` enabled and everything else at its default.
    #[must_use]
    pub fn pretty() -> Self {
        EmitOptions {
            pretty: true,
            ..EmitOptions::default()
        }
    }
}
