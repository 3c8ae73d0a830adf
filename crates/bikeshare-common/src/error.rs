//! Error types and utilities for the dashboard

use thiserror::Error;

/// Result type alias for dashboard operations
pub type Result<T> = std::result::Result<T, DashboardError>;

/// Main error type for dashboard operations
#[derive(Error, Debug)]
pub enum DashboardError {
    /// Configuration related errors
    #[error("Configuration error: {message}")]
    Config {
        /// What went wrong
        message: String,
        /// Underlying cause, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// I/O related errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The input table does not match the expected column layout
    #[error("Schema mismatch: {message}")]
    Schema {
        /// What went wrong
        message: String,
        /// Offending column, when the mismatch is tied to one
        column: Option<String>,
    },

    /// A single input row carries a value that cannot be interpreted
    #[error("Invalid record at line {line}, column '{column}': {message}")]
    Record {
        /// One-based line in the input file
        line: u64,
        /// Header name of the offending column
        column: String,
        /// What went wrong
        message: String,
    },

    /// Errors raised while reading the tabular input
    #[error("Data error: {message}")]
    Data {
        /// What went wrong
        message: String,
        /// Underlying cause, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Graph generation and plotting errors
    #[error("Graph error: {message}")]
    Graph {
        /// What went wrong
        message: String,
        /// Underlying cause, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl DashboardError {
    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new configuration error with source
    pub fn config_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a schema error that is not tied to one column
    pub fn schema(msg: impl Into<String>) -> Self {
        Self::Schema {
            message: msg.into(),
            column: None,
        }
    }

    /// Create a schema error for a specific column
    pub fn schema_column(msg: impl Into<String>, column: impl Into<String>) -> Self {
        Self::Schema {
            message: msg.into(),
            column: Some(column.into()),
        }
    }

    /// Create a record error pointing at an input line and column
    pub fn record(line: u64, column: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Record {
            line,
            column: column.into(),
            message: msg.into(),
        }
    }

    /// Create a new data error with source
    pub fn data_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Data {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new graph error
    pub fn graph(msg: impl Into<String>) -> Self {
        Self::Graph {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new graph error with source
    pub fn graph_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Graph {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }
}

#[cfg(feature = "plotters")]
/// Convert from plotters drawing errors to `DashboardError`
impl<T> From<plotters::drawing::DrawingAreaErrorKind<T>> for DashboardError
where
    T: std::error::Error + Send + Sync + 'static,
{
    fn from(err: plotters::drawing::DrawingAreaErrorKind<T>) -> Self {
        Self::graph_with_source("Graph rendering failed", err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{error::Error, io};

    #[test]
    fn test_error_creation() {
        let config_error = DashboardError::config("config issue");
        assert_eq!(config_error.to_string(), "Configuration error: config issue");

        let schema_error = DashboardError::schema_column("missing required column 'cnt'", "cnt");
        assert_eq!(
            schema_error.to_string(),
            "Schema mismatch: missing required column 'cnt'"
        );
    }

    #[test]
    fn test_record_error_names_line_and_column() {
        let error = DashboardError::record(42, "season", "unknown season 'monsoon'");
        assert_eq!(
            error.to_string(),
            "Invalid record at line 42, column 'season': unknown season 'monsoon'"
        );
    }

    #[test]
    fn test_error_with_source() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let wrapped = DashboardError::data_with_source("Failed to read data.csv", io_error);

        assert!(wrapped.to_string().contains("Failed to read data.csv"));
        assert!(wrapped.source().is_some());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error: DashboardError = io_error.into();

        assert!(error.to_string().contains("I/O error"));
        assert!(error.source().is_some());
    }

    #[test]
    fn test_error_chain_preservation() {
        let root_error = io::Error::new(io::ErrorKind::NotFound, "Root cause");
        let middle_error = DashboardError::config_with_source("Middle layer", root_error);
        let top_error = DashboardError::graph_with_source("Top layer", middle_error);

        let mut current_error: &dyn std::error::Error = &top_error;
        let mut depth = 0;
        while let Some(source) = current_error.source() {
            current_error = source;
            depth += 1;
        }

        assert_eq!(depth, 2);
        assert_eq!(current_error.to_string(), "Root cause");
    }
}
