//! Error types and definitions for modcheck
//!
//! This module provides the error handling system for the modcheck tool,
//! including error types, severity levels and a result alias.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Error severity levels for different error types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Warning level errors - operation can continue
    Warning,
    /// Error level - current operation fails but overall process can continue
    Error,
    /// Critical level - process should terminate
    Critical,
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorSeverity::Warning => write!(f, "WARNING"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// Main error type for modcheck operations
#[derive(Debug, Error)]
pub enum CheckError {
    /// Standard IO errors
    #[error("IO error: {source}")]
    Io {
        #[source]
        source: std::io::Error,
    },

    /// File read errors with path context
    #[error("Error reading {path}: {source}")]
    IoRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Invalid path errors
    #[error("Invalid path: {path}")]
    InvalidPath { path: PathBuf },

    /// Configuration file not found
    #[error("Configuration file not found at {path}")]
    ConfigNotFound { path: PathBuf },

    /// Configuration file read errors
    #[error("Error reading configuration file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file parse errors
    #[error("Error parsing configuration file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Glob pattern errors
    #[error("Glob pattern error: {source}")]
    GlobPattern {
        #[source]
        source: glob::PatternError,
    },

    /// Invalid output format
    #[error("Invalid output format: {format}")]
    InvalidOutputFormat { format: String },

    /// Output file write errors
    #[error("Error writing to output file {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Stdout write errors
    #[error("Error writing to stdout: {source}")]
    StdoutWrite {
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization error
    #[error("JSON serialization error: {source}")]
    JsonSerialize {
        #[source]
        source: serde_json::Error,
    },

    /// Dialect policy violation: the batch failed the extension check
    #[error("Extension check failed: {violations} violation(s)")]
    DialectPolicy { violations: usize },

    /// Module-format policy violation: the batch is not pure ESM
    #[error("Module format check failed: {cjs_count} CommonJS file(s), {unknown_count} unclassifiable file(s)")]
    FormatPolicy {
        cjs_count: usize,
        unknown_count: usize,
    },

    /// A batch file the type-check engine cannot reach on disk
    #[error("Type-check engine cannot reach source file: {path}")]
    SourceUnreachable { path: PathBuf },

    /// Failure to launch the external type-check engine
    #[error("Failed to launch type-check engine '{program}': {source}")]
    TypeCheckLaunch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The external type-check engine failed without producing diagnostics
    #[error("Type-check engine failed: {message}")]
    TypeCheckEngine { message: String },

    /// The batch carries type errors
    #[error("Type check failed with {error_count} diagnostic(s)")]
    TypeCheckFailed { error_count: usize },
}

impl CheckError {
    /// Get the severity level of this error
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // Regular errors - the run fails but nothing is structurally wrong
            CheckError::Io { .. }
            | CheckError::IoRead { .. }
            | CheckError::InvalidPath { .. }
            | CheckError::GlobPattern { .. }
            | CheckError::JsonSerialize { .. } => ErrorSeverity::Error,

            // Everything else is critical: configuration faults and policy
            // violations both mean the invoking pipeline must stop
            _ => ErrorSeverity::Critical,
        }
    }

    /// Check if this is a critical error that should terminate the process
    pub fn is_critical(&self) -> bool {
        self.severity() == ErrorSeverity::Critical
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            CheckError::IoRead { path, source } => {
                format!(
                    "Cannot read '{}': {}. Check that the file exists and is readable.",
                    path.display(),
                    source
                )
            }
            CheckError::InvalidPath { path } => {
                format!(
                    "Invalid path: '{}'. Please provide a valid file or directory path.",
                    path.display()
                )
            }
            CheckError::ConfigNotFound { path } => {
                format!(
                    "Configuration file not found at '{}'. Create one with 'modcheck init' or use command line options.",
                    path.display()
                )
            }
            CheckError::DialectPolicy { violations } => {
                format!(
                    "The batch failed {} extension check(s). The file set mixes dialects or uses unsupported suffixes.",
                    violations
                )
            }
            CheckError::FormatPolicy {
                cjs_count,
                unknown_count,
            } => {
                format!(
                    "The batch is not pure ESM: {} CommonJS file(s), {} unclassifiable file(s).",
                    cjs_count, unknown_count
                )
            }
            CheckError::SourceUnreachable { path } => {
                format!(
                    "The type-check engine cannot reach '{}'. The file must exist on disk for type checking.",
                    path.display()
                )
            }
            CheckError::TypeCheckLaunch { program, source } => {
                format!(
                    "Could not launch '{}': {}. Install the TypeScript compiler or point --tsc at it.",
                    program, source
                )
            }
            // For other errors, use the standard Display implementation
            _ => self.to_string(),
        }
    }

    /// Create an IO error
    pub fn io_error(source: std::io::Error) -> Self {
        CheckError::Io { source }
    }

    /// Create a file read error with path context
    pub fn io_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CheckError::IoRead {
            path: path.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn config_error(message: impl Into<String>) -> Self {
        CheckError::Config {
            message: message.into(),
        }
    }

    /// Create a type-check engine error
    pub fn engine_error(message: impl Into<String>) -> Self {
        CheckError::TypeCheckEngine {
            message: message.into(),
        }
    }
}

// Implement From for common error types
impl From<std::io::Error> for CheckError {
    fn from(err: std::io::Error) -> Self {
        CheckError::io_error(err)
    }
}

impl From<glob::PatternError> for CheckError {
    fn from(err: glob::PatternError) -> Self {
        CheckError::GlobPattern { source: err }
    }
}

impl From<serde_json::Error> for CheckError {
    fn from(err: serde_json::Error) -> Self {
        CheckError::JsonSerialize { source: err }
    }
}

/// Result type alias for modcheck operations
pub type Result<T> = std::result::Result<T, CheckError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn policy_violations_are_critical() {
        let err = CheckError::FormatPolicy {
            cjs_count: 2,
            unknown_count: 0,
        };
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert!(err.is_critical());
    }

    #[test]
    fn read_errors_are_recoverable() {
        let err = CheckError::io_read(
            "a.ts",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert_eq!(err.severity(), ErrorSeverity::Error);
        assert!(!err.is_critical());
    }

    #[test]
    fn user_message_names_the_path() {
        let err = CheckError::SourceUnreachable {
            path: PathBuf::from("src/missing.ts"),
        };
        assert!(err.user_message().contains("src/missing.ts"));
    }
}
