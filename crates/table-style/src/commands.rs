//! Command execution.

use std::io::{Read, Write};

use serde::Serialize;
use table_style_core::{column_index, column_label, OutputFormat, OutputSettings, Result};
use table_style_template::{BoxConnectorStyle, BoxStyle};

use crate::cli::{Command, InputSource, TemplateKind};

/// Serialize a value according to the output settings.
pub fn render_output<T: Serialize>(value: &T, settings: &OutputSettings) -> Result<String> {
    let mut rendered = match settings.format {
        OutputFormat::Json if settings.pretty => {
            let indent = " ".repeat(settings.indent);
            let formatter = serde_json::ser::PrettyFormatter::with_indent(indent.as_bytes());
            let mut buf = Vec::new();
            let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
            value.serialize(&mut serializer)?;
            String::from_utf8(buf)
                .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?
        }
        OutputFormat::Json => serde_json::to_string(value)?,
        OutputFormat::Yaml => serde_yaml::to_string(value)?,
    };

    if !rendered.ends_with('\n') {
        rendered.push('\n');
    }
    Ok(rendered)
}

/// Read the template text from its source.
pub fn read_template(source: &InputSource, stdin: &mut impl Read) -> Result<String> {
    let mut template = String::new();
    match source {
        InputSource::Stdin => {
            stdin.read_to_string(&mut template)?;
        }
        InputSource::File(path) => {
            tracing::debug!("Reading template from {}", path.display());
            template = std::fs::read_to_string(path)?;
        }
    }
    Ok(template)
}

/// Run a command, reading templates from `stdin` and writing to `out`.
pub fn run(
    command: &Command,
    settings: &OutputSettings,
    stdin: &mut impl Read,
    out: &mut impl Write,
) -> Result<()> {
    match command {
        Command::Parse(args) => {
            let template = read_template(&args.source(), stdin)?;
            let rendered = match args.kind.kind() {
                TemplateKind::Box => render_output(&BoxStyle::from_template(&template), settings)?,
                TemplateKind::Connector => {
                    render_output(&BoxConnectorStyle::from_template(&template), settings)?
                }
            };
            out.write_all(rendered.as_bytes())?;
        }
        Command::Schema(kind) => {
            let schema = match kind.kind() {
                TemplateKind::Box => schemars::schema_for!(BoxStyle),
                TemplateKind::Connector => schemars::schema_for!(BoxConnectorStyle),
            };
            out.write_all(render_output(&schema, settings)?.as_bytes())?;
        }
        Command::Label { indices } => {
            for &index in indices {
                writeln!(out, "{index}\t{}", column_label(index))?;
            }
        }
        Command::Index { labels } => {
            for label in labels {
                writeln!(out, "{label}\t{}", column_index(label)?)?;
            }
        }
    }

    Ok(())
}
