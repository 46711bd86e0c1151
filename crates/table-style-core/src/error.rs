//! Error types for table-style.
//!
//! Template parsing, column labelling, and numeric classification never
//! fail. Errors only arise at the edges: decoding labels, loading
//! configuration, and reading input.

use thiserror::Error;

/// Main error type for table-style operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Column label is empty, contains non-letters, or overflows
    #[error("Invalid column label: {0:?}")]
    InvalidColumnLabel(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parse error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid input or parameters (generic)
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
