//! Batch analysis orchestration
//!
//! Runs the extension classifier and the per-file module-format analysis over
//! a batch of source units, strictly sequentially, and folds the results into
//! a fresh report. The analyzer holds no state between invocations and never
//! terminates the process; policy belongs to the caller.

use crate::models::report::BatchReport;
use crate::models::source_unit::SourceUnit;
use crate::models::verdict::FormatTally;
use crate::parsers::{extensions, SourceAnalyzer};

/// Analyzer for a whole batch of source units
pub struct BatchAnalyzer {
    source_analyzer: SourceAnalyzer,
}

impl BatchAnalyzer {
    /// Create a new batch analyzer
    pub fn new() -> Self {
        Self {
            source_analyzer: SourceAnalyzer::new(),
        }
    }

    /// Analyze a batch and build its report
    pub fn analyze(&self, units: &[SourceUnit]) -> BatchReport {
        self.analyze_with_progress(units, |_, _, _| {})
    }

    /// Analyze a batch, reporting per-file progress through a callback.
    ///
    /// The callback receives `(current, total, path)` after each unit
    /// completes. Files are processed in submission order, one at a time;
    /// a failure on one unit is contained to its own report entry.
    pub fn analyze_with_progress<F>(&self, units: &[SourceUnit], mut progress: F) -> BatchReport
    where
        F: FnMut(usize, usize, &str),
    {
        let extensions = extensions::classify(units);

        let total = units.len();
        let mut files = Vec::with_capacity(total);
        let mut tally = FormatTally::default();

        for (index, unit) in units.iter().enumerate() {
            let report = self.source_analyzer.analyze_unit(unit);
            tally.record(report.verdict);
            progress(index + 1, total, &unit.path.to_string_lossy());
            files.push(report);
        }

        BatchReport {
            batch_size: total,
            extensions,
            tally,
            files,
        }
    }
}

impl Default for BatchAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
