//! # table-style
//!
//! Turns literal box-drawing templates into reusable table styles.
//!
//! ## Overview
//!
//! This binary provides:
//! - Box and connector style extraction from template files or stdin
//! - JSON or YAML output of the parsed style, and its JSON schema
//! - Conversion between column indices and spreadsheet-style labels
//!
//! ## Architecture
//!
//! This is Layer 2 - the command line binary that ties together:
//! - table-style-core: Column labels, width helpers, config
//! - table-style-template: Template parsing

use clap::Parser;
use table_style::{run, Cli};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.load_config();

    // Initialize logging on stderr so stdout only carries the output
    let level = config
        .as_ref()
        .map(|config| config.logging.level)
        .unwrap_or_default();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level.as_str())),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = config.map_err(|e| {
        tracing::error!("Failed to load configuration: {}", e);
        e
    })?;

    tracing::debug!("Running {:?}", cli.command);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run(
        &cli.command,
        &config.output,
        &mut stdin.lock(),
        &mut stdout.lock(),
    )
    .map_err(|e| {
        tracing::error!("{}", e);
        e
    })?;

    Ok(())
}
