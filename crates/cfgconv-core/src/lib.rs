//! # cfgconv-core
//!
//! Convert configuration data between **JSON, YAML, TOML, INI and XML**.
//!
//! Every format parses into one canonical, insertion-ordered [`Value`] tree
//! and every emitter renders that tree, so the five formats stay decoupled
//! from each other: adding a format means one parser and one emitter, not
//! twenty conversion paths. The interesting part is the boundary
//! reconciliation — INI has no nesting or types beyond strings, XML has no
//! native list/map distinction and carries attributes separately — and the
//! per-format rules for projecting onto and recovering from the canonical
//! tree live in [`parsers`] and [`emitters`].
//!
//! ## Quick start
//!
//! ```rust
//! use cfgconv_core::{convert, EmitOptions};
//!
//! let json = r#"{"name": "app", "port": 8080}"#;
//! let yaml = convert(json, "json", "yaml", &EmitOptions::default()).unwrap();
//! assert_eq!(yaml, "{name: app, port: 8080}\n");
//!
//! let toml = convert(json, "json", "toml", &EmitOptions::default()).unwrap();
//! assert_eq!(toml, "name = \"app\"\nport = 8080\n");
//! ```
//!
//! ## Modules
//!
//! - [`value`] — the canonical `Value` tree all formats share
//! - [`parsers`] — format text → `Value`
//! - [`emitters`] — `Value` → format text, honoring [`EmitOptions`]
//! - [`convert`](mod@convert) — the orchestrator ([`Converter`], [`convert()`])
//! - [`format`] — the closed [`Format`] registry
//! - [`error`] — the error taxonomy; only [`ConvertError`] crosses the
//!   conversion boundary

pub mod convert;
pub mod emitters;
pub mod error;
pub mod format;
pub mod options;
pub mod parsers;
pub mod value;

pub use convert::{convert, Converter};
pub use emitters::Emitter;
pub use error::{ConvertError, EmitError, ParseError, UnknownFormat};
pub use format::Format;
pub use options::EmitOptions;
pub use parsers::Parser;
pub use value::{Value, ATTR_PREFIX, DEFAULT_SECTION, TEXT_KEY};
