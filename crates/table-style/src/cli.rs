//! Command line arguments.

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use table_style_core::{OutputFormat, Result, ToolConfig};

/// Turns literal box-drawing templates into reusable table styles.
#[derive(Debug, Parser)]
#[command(name = "table-style", version, about, long_about = None)]
pub struct Cli {
    /// Load settings from a YAML file
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output format, overriding the config file
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Load the config file, if any, and apply command line overrides.
    pub fn load_config(&self) -> Result<ToolConfig> {
        let mut config = match &self.config {
            Some(path) => ToolConfig::from_file(path)?,
            None => ToolConfig::default(),
        };
        if let Some(format) = self.format {
            config.output.format = format;
        }
        Ok(config)
    }
}

/// CLI subcommands.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Parse a template and print the style
    Parse(ParseArgs),

    /// Print the JSON schema of a style
    Schema(KindArgs),

    /// Print column labels for zero-based indices
    Label {
        /// Zero-based column indices
        #[arg(required = true)]
        indices: Vec<usize>,
    },

    /// Print zero-based indices for column labels
    Index {
        /// Column labels such as A, ZZ, aaa
        #[arg(required = true)]
        labels: Vec<String>,
    },
}

/// Which style a template describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TemplateKind {
    /// Four-line box template
    #[default]
    Box,
    /// One-line connector template
    Connector,
}

/// Template kind selection shared by `parse` and `schema`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Args)]
pub struct KindArgs {
    /// Use the one-line connector layout instead of a box
    #[arg(long)]
    pub connector: bool,
}

impl KindArgs {
    /// Selected template kind.
    pub fn kind(&self) -> TemplateKind {
        if self.connector {
            TemplateKind::Connector
        } else {
            TemplateKind::Box
        }
    }
}

/// Arguments for `parse`.
#[derive(Debug, Clone, PartialEq, Eq, Args)]
pub struct ParseArgs {
    #[command(flatten)]
    pub kind: KindArgs,

    /// Template file, or `-` for stdin
    #[arg(value_name = "TEMPLATE_FILE", default_value = "-")]
    pub file: PathBuf,
}

impl ParseArgs {
    /// Where the template text comes from.
    pub fn source(&self) -> InputSource {
        if self.file == Path::new("-") {
            InputSource::Stdin
        } else {
            InputSource::File(self.file.clone())
        }
    }
}

/// Where the template text comes from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum InputSource {
    /// Standard input
    #[default]
    Stdin,
    /// A file on disk
    File(PathBuf),
}
