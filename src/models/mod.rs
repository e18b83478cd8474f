//! Data models and structures for modcheck

pub mod config;
pub mod report;
pub mod source_unit;
pub mod verdict;

pub use config::{OutputFormat, PartialSettings, PolicyMode, Settings};
pub use report::{BatchReport, ExtensionFlags, FileReport, LenientReport, PolicyViolation};
pub use source_unit::SourceUnit;
pub use verdict::{FileVerdict, FormatSignals, FormatTally};
