//! modcheck - batch module-format and dialect checker for JS/TS source sets
//!
//! This library classifies a batch of source files along two independent
//! axes: file-name dialect (JavaScript/TypeScript/JSX/CommonJS suffixes) and
//! declared module format (ESM vs CommonJS, detected structurally from each
//! file's syntax tree). An optional pass hands the same batch to an external
//! type-check engine and re-emits its diagnostics.

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod output;
pub mod parsers;
pub mod typecheck;

// Re-export commonly used types
pub use crate::core::{BatchAnalyzer, Walker};
pub use error::{CheckError, ErrorSeverity, Result};
pub use models::{
    config::{OutputFormat, PolicyMode, Settings},
    report::{BatchReport, ExtensionFlags, FileReport, LenientReport, PolicyViolation},
    source_unit::SourceUnit,
    verdict::{FileVerdict, FormatSignals, FormatTally},
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
