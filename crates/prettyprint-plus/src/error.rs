//! Error types for table operations and configuration loading.

use std::path::PathBuf;

use thiserror::Error;

/// Errors returned by [`Table`](crate::table::Table) operations.
///
/// Every error is raised before the table is touched, so a rejected call
/// leaves rows and column widths exactly as they were.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// A row or column has the wrong number of values.
    #[error("length {actual} does not match the expected length {expected}")]
    ShapeMismatch { expected: usize, actual: usize },

    /// A row index is past the end of the table.
    #[error("row index {index} out of range for table with {len} rows")]
    IndexOutOfRange { index: usize, len: usize },

    /// A column name is not among the table headers.
    #[error("column '{0}' does not exist")]
    UnknownColumn(String),
}

/// Result type for table operations.
pub type Result<T> = std::result::Result<T, TableError>;

/// Errors raised while loading [`PrintOptions`](crate::config::PrintOptions).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration is not valid YAML or has unexpected fields.
    #[error("invalid config: {0}")]
    Parse(#[from] serde_yaml::Error),
}
