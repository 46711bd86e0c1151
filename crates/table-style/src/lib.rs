//! table-style command line library
//!
//! Argument parsing and command execution for the `table-style` binary.
//! The binary itself is in main.rs.

pub mod cli;
pub mod commands;

// Re-export commonly used types
pub use cli::{Cli, Command, InputSource, KindArgs, ParseArgs, TemplateKind};
pub use commands::{read_template, render_output, run};
