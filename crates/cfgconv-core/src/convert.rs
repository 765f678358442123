//! The conversion orchestrator: resolve formats, parse, emit.

use crate::error::{ConvertError, Result};
use crate::format::Format;
use crate::options::EmitOptions;

/// A resolved parser/emitter pair.
///
/// Construction is the resolving stage: both format identifiers are matched
/// against the registry (case-insensitively) before any parsing happens.
/// [`Converter::convert`] is the converting stage: parse, then emit, with
/// any failure wrapped into [`ConvertError`]. There is no retry and no
/// partial output. Each call builds its own value tree, so a `Converter` is
/// freely shareable across threads.
#[derive(Debug, Clone)]
pub struct Converter {
    input: Format,
    output: Format,
    options: EmitOptions,
}

impl Converter {
    /// Resolve a parser/emitter pair from format identifiers.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::UnsupportedFormat`] naming the offending
    /// identifier and whether it was the input or output side.
    pub fn new(input_format: &str, output_format: &str) -> Result<Self> {
        let input = input_format
            .parse()
            .map_err(|_| ConvertError::UnsupportedFormat {
                direction: "input",
                name: input_format.to_string(),
            })?;
        let output = output_format
            .parse()
            .map_err(|_| ConvertError::UnsupportedFormat {
                direction: "output",
                name: output_format.to_string(),
            })?;
        Ok(Converter {
            input,
            output,
            options: EmitOptions::default(),
        })
    }

    /// Replace the emitter options.
    #[must_use]
    pub fn with_options(mut self, options: EmitOptions) -> Self {
        self.options = options;
        self
    }

    /// The resolved input format.
    #[must_use]
    pub const fn input_format(&self) -> Format {
        self.input
    }

    /// The resolved output format.
    #[must_use]
    pub const fn output_format(&self) -> Format {
        self.output
    }

    /// Parse `input` in the input format and emit it in the output format.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::Parse`] or [`ConvertError::Emit`] wrapping
    /// the underlying cause; no output text is produced on failure.
    pub fn convert(&self, input: &str) -> Result<String> {
        let value = self
            .input
            .parser()
            .parse(input)
            .map_err(|source| ConvertError::Parse {
                format: self.input,
                source,
            })?;
        self.output
            .emitter()
            .emit(&value, &self.options)
            .map_err(|source| ConvertError::Emit {
                format: self.output,
                source,
            })
    }
}

/// Convert `input` between two formats named by identifier.
///
/// Convenience wrapper over [`Converter`] for one-shot conversions.
///
/// # Errors
///
/// Returns [`ConvertError`] for unknown format identifiers, parse failures
/// and emit failures.
pub fn convert(
    input: &str,
    input_format: &str,
    output_format: &str,
    options: &EmitOptions,
) -> Result<String> {
    Converter::new(input_format, output_format)?
        .with_options(options.clone())
        .convert(input)
}
