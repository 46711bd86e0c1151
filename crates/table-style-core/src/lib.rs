//! # table-style-core
//!
//! Core primitives for terminal table styling.
//!
//! This crate contains the stateless building blocks with **no internal
//! dependencies** on other table-style crates. It provides:
//!
//! - Spreadsheet-style column labels (A, B, ..., Z, AA, ...)
//! - Numeric value classification for alignment decisions
//! - Display width measurement and pluggable width enforcement
//! - Error and configuration types
//!
//! ## Architecture
//!
//! This is Layer 0 in the architecture - all other crates depend on this one,
//! but this crate has no dependencies on other table-style crates.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod column;
pub mod config;
pub mod error;
pub mod numeric;
pub mod width;

// Re-export commonly used types
pub use column::{column_index, column_label};
pub use config::{LogLevel, LoggingSettings, OutputFormat, OutputSettings, ToolConfig};
pub use error::{Error, Result};
pub use numeric::{is_numeric_value, CellValue, Numeric};
pub use width::{display_width, NoWidthEnforcement, TruncateToWidth, WidthEnforcer};
