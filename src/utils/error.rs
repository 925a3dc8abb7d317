//! Error handling for table normalization and compilation
//!
//! This module provides a unified error type and result type for all
//! table-processing operations.

use std::fmt;

/// Table processing error type
#[derive(Debug, Clone)]
pub enum TableError {
    /// No recognized table environment in the input
    NoTableFound,
    /// Malformed `@{...}` expression in a column definition
    UnbalancedAtExpr { spec: String },
    /// IO error (for file operations)
    IoError { message: String },
    /// The typesetting engine could not be launched
    EngineSpawn { program: String, message: String },
    /// The typesetting engine exceeded the configured wait
    EngineTimeout { seconds: u64 },
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::NoTableFound => {
                write!(f, "no table environment found in input")
            }
            TableError::UnbalancedAtExpr { spec } => {
                write!(
                    f,
                    "unbalanced `@{{}}` expression in column definition '{}'",
                    spec
                )
            }
            TableError::IoError { message } => {
                write!(f, "IO error: {}", message)
            }
            TableError::EngineSpawn { program, message } => {
                write!(
                    f,
                    "failed to launch typesetting engine '{}': {}",
                    program, message
                )
            }
            TableError::EngineTimeout { seconds } => {
                write!(f, "typesetting engine did not finish within {}s", seconds)
            }
        }
    }
}

impl std::error::Error for TableError {}

impl From<std::io::Error> for TableError {
    fn from(err: std::io::Error) -> Self {
        TableError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type for table-processing operations
pub type TableResult<T> = Result<T, TableError>;

// Convenience constructors for errors
impl TableError {
    pub fn unbalanced(spec: impl Into<String>) -> Self {
        TableError::UnbalancedAtExpr { spec: spec.into() }
    }

    pub fn io(message: impl Into<String>) -> Self {
        TableError::IoError {
            message: message.into(),
        }
    }

    pub fn spawn(program: impl Into<String>, message: impl Into<String>) -> Self {
        TableError::EngineSpawn {
            program: program.into(),
            message: message.into(),
        }
    }

    pub fn timeout(seconds: u64) -> Self {
        TableError::EngineTimeout { seconds }
    }
}
