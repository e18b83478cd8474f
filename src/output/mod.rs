//! Output formatting and writing functionality

pub mod formatters;
pub mod progress;
pub mod writers;

pub use formatters::{create_formatter, JsonFormatter, TextFormatter};
pub use progress::ProgressReporter;
pub use writers::OutputTarget;

use crate::error::Result;
use crate::models::report::BatchReport;

/// Trait for different output formatters
pub trait Formatter {
    /// Format a batch report into a string
    fn format(&self, report: &BatchReport) -> Result<String>;
}
