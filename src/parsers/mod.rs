//! Parsing and classification functionality
//!
//! This module provides the extension classifier, the OXC parse wrapper and
//! the module-format detector that does the real work.

pub mod ast_parser;
pub mod extensions;
pub mod format_detector;

pub use ast_parser::SourceAnalyzer;
pub use format_detector::FormatDetector;
