//! `cfgconv` CLI — convert configuration files between JSON, YAML, TOML,
//! INI and XML.
//!
//! ## Usage
//!
//! ```sh
//! # Convert a file, formats inferred from the extensions
//! cfgconv config.json config.yaml
//!
//! # Pipe through stdin/stdout with explicit formats
//! cat config.json | cfgconv -i json -o toml
//!
//! # Pretty-print with a chosen indent width
//! cfgconv config.toml config.json --pretty --indent 2
//!
//! # Name the synthetic XML root element
//! cfgconv config.json config.xml --root-name settings
//!
//! # Print to stdout instead of writing the output file
//! cfgconv config.json -o yaml --stdout
//! ```

use anyhow::{bail, Context, Result};
use cfgconv_core::{convert, EmitOptions};
use clap::Parser;
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "cfgconv",
    version,
    about = "Convert configuration files between JSON, YAML, TOML, INI and XML"
)]
struct Cli {
    /// Input file (reads from stdin if omitted)
    input: Option<PathBuf>,

    /// Output file (writes to stdout if omitted)
    output: Option<PathBuf>,

    /// Format of the input (inferred from the file extension if omitted)
    #[arg(short = 'i', long, value_name = "FORMAT")]
    input_format: Option<String>,

    /// Format of the output (inferred from the file extension if omitted)
    #[arg(short = 'o', long, value_name = "FORMAT")]
    output_format: Option<String>,

    /// Indentation width for pretty output
    #[arg(long, default_value_t = 4)]
    indent: usize,

    /// Pretty-print the output (multi-line, indented)
    #[arg(long)]
    pretty: bool,

    /// Root element name for XML output without a single top-level key
    #[arg(long, default_value = "root")]
    root_name: String,

    /// Overwrite the output file if it exists
    #[arg(long)]
    overwrite: bool,

    /// Print output to stdout even when an output file is given
    #[arg(long)]
    stdout: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let input_format = match (&cli.input_format, &cli.input) {
        (Some(format), _) => format.clone(),
        (None, Some(path)) => infer_format(path).with_context(|| {
            format!(
                "unable to infer the input format from `{}`; pass --input-format",
                path.display()
            )
        })?,
        (None, None) => bail!("--input-format is required when reading from stdin"),
    };
    let output_format = match (&cli.output_format, &cli.output) {
        (Some(format), _) => format.clone(),
        (None, Some(path)) => infer_format(path).with_context(|| {
            format!(
                "unable to infer the output format from `{}`; pass --output-format",
                path.display()
            )
        })?,
        (None, None) => bail!("--output-format is required when writing to stdout"),
    };

    let text = read_input(cli.input.as_deref())?;
    let options = EmitOptions {
        indent: cli.indent,
        pretty: cli.pretty,
        root_name: cli.root_name.clone(),
    };
    let converted = convert(&text, &input_format, &output_format, &options)?;

    match &cli.output {
        Some(path) if !cli.stdout => {
            if path.exists() && !cli.overwrite {
                bail!(
                    "output file `{}` already exists (pass --overwrite to replace it)",
                    path.display()
                );
            }
            std::fs::write(path, &converted)
                .with_context(|| format!("failed to write file: {}", path.display()))?;
        }
        _ => {
            print!("{converted}");
            if !converted.ends_with('\n') {
                println!();
            }
        }
    }
    Ok(())
}

/// Map a file extension to a format identifier.
fn infer_format(path: &Path) -> Option<String> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    let format = match ext.as_str() {
        "json" => "json",
        "yaml" | "yml" => "yaml",
        "toml" => "toml",
        "ini" | "conf" | "cfg" => "ini",
        "xml" => "xml",
        _ => return None,
    };
    Some(format.to_string())
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read file: {}", path.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read from stdin")?;
            Ok(buf)
        }
    }
}
