//! Per-unit parse wrapper using OXC
//!
//! Each source unit gets a fresh allocator and a fresh parse; the syntax tree
//! lives only long enough to run the format detector and is dropped before
//! the next unit is touched. Nothing is cached between units or between
//! batch invocations.

use crate::models::report::FileReport;
use crate::models::source_unit::SourceUnit;
use crate::models::verdict::{FileVerdict, FormatSignals};
use crate::parsers::format_detector::FormatDetector;
use oxc_allocator::Allocator;
use oxc_diagnostics::OxcDiagnostic;
use oxc_parser::{ParseOptions, Parser};
use oxc_span::SourceType;

/// Analyzer for a single source unit's module format
pub struct SourceAnalyzer {
    parse_options: ParseOptions,
}

impl SourceAnalyzer {
    /// Create a new source analyzer
    pub fn new() -> Self {
        Self {
            parse_options: ParseOptions {
                parse_regular_expression: true,
                ..ParseOptions::default()
            },
        }
    }

    /// Parse one unit and classify its module format.
    ///
    /// Failures are contained to the unit: malformed source or a traversal
    /// fault produce an `Unknown` verdict with the raw detail attached, and
    /// never abort the batch.
    pub fn analyze_unit(&self, unit: &SourceUnit) -> FileReport {
        // The format analysis runs whatever the suffix says; unknown suffixes
        // fall back to TypeScript, the most permissive grammar here.
        let source_type =
            SourceType::from_path(&unit.path).unwrap_or_else(|_| SourceType::ts());

        let allocator = Allocator::default();
        let ret = Parser::new(&allocator, &unit.text, source_type)
            .with_options(self.parse_options.clone())
            .parse();

        if ret.panicked || !ret.errors.is_empty() {
            return FileReport {
                path: unit.path.clone(),
                verdict: FileVerdict::Unknown,
                signals: FormatSignals::default(),
                detail: Some(render_parse_errors(&ret.errors)),
            };
        }

        match FormatDetector::detect(&ret.program, &unit.text) {
            Ok(signals) => FileReport {
                path: unit.path.clone(),
                verdict: FileVerdict::from_signals(signals),
                signals,
                detail: None,
            },
            Err(detail) => FileReport {
                path: unit.path.clone(),
                verdict: FileVerdict::Unknown,
                signals: FormatSignals::default(),
                detail: Some(detail),
            },
        }
    }
}

impl Default for SourceAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// Join parser diagnostics into one failure detail line
fn render_parse_errors(errors: &[OxcDiagnostic]) -> String {
    if errors.is_empty() {
        return "parser panicked".to_string();
    }
    errors
        .iter()
        .map(|error| error.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyze(path: &str, text: &str) -> FileReport {
        SourceAnalyzer::new().analyze_unit(&SourceUnit::new(path, text))
    }

    #[test]
    fn esm_file() {
        let report = analyze("a.ts", "import { x } from './x';\nexport const y = x;");
        assert_eq!(report.verdict, FileVerdict::Esm);
        assert!(report.detail.is_none());
    }

    #[test]
    fn cjs_file() {
        let report = analyze("a.js", "const x = require('./x');\nmodule.exports = x;");
        assert_eq!(report.verdict, FileVerdict::Cjs);
    }

    #[test]
    fn mixed_file_is_esm() {
        let report = analyze("a.ts", "import { x } from './x';\nconst y = require('./y');");
        assert_eq!(report.verdict, FileVerdict::MixedEsm);
        assert!(report.verdict.counts_as_esm());
    }

    #[test]
    fn format_agnostic_file_is_neutral() {
        let report = analyze("a.ts", "const x = 1;");
        assert_eq!(report.verdict, FileVerdict::Neutral);
    }

    #[test]
    fn malformed_source_is_unknown_with_detail() {
        let report = analyze("broken.ts", "import from from from;;; ???");
        assert_eq!(report.verdict, FileVerdict::Unknown);
        assert!(report.detail.is_some());
    }

    #[test]
    fn unknown_suffix_still_gets_analyzed() {
        // The format analyzer is independent of the extension classifier
        let report = analyze("a.txt", "export const a = 1;");
        assert_eq!(report.verdict, FileVerdict::Esm);
    }

    #[test]
    fn jsx_source_parses_with_its_own_grammar() {
        let report = analyze(
            "view.tsx",
            "export function View() { return <div>ok</div>; }",
        );
        assert_eq!(report.verdict, FileVerdict::Esm);
    }
}
