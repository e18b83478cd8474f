//! Report formatters for the supported output formats

use crate::error::Result;
use crate::models::config::OutputFormat;
use crate::models::report::BatchReport;
use crate::models::verdict::FileVerdict;
use crate::output::Formatter;
use ansi_term::Colour::{Cyan, Green, Red, Yellow};
use ansi_term::Style;

/// Human-readable text formatter
pub struct TextFormatter {
    pub use_colors: bool,
    pub verbose: bool,
    pub quiet: bool,
}

impl TextFormatter {
    /// Create a new text formatter
    pub fn new(use_colors: bool, verbose: bool, quiet: bool) -> Self {
        Self {
            use_colors,
            verbose,
            quiet,
        }
    }

    fn flag(&self, value: bool) -> String {
        if !self.use_colors {
            return value.to_string();
        }
        if value {
            Green.paint("true").to_string()
        } else {
            Style::new().dimmed().paint("false").to_string()
        }
    }

    fn verdict(&self, verdict: FileVerdict) -> String {
        if !self.use_colors {
            return verdict.to_string();
        }
        match verdict {
            FileVerdict::Esm | FileVerdict::MixedEsm => Green.paint(verdict.to_string()).to_string(),
            FileVerdict::Cjs => Yellow.paint(verdict.to_string()).to_string(),
            FileVerdict::Unknown => Red.paint(verdict.to_string()).to_string(),
            FileVerdict::Neutral => Style::new().dimmed().paint(verdict.to_string()).to_string(),
        }
    }
}

impl Formatter for TextFormatter {
    fn format(&self, report: &BatchReport) -> Result<String> {
        // Quiet mode keeps it to the counters on one line
        if self.quiet {
            return Ok(format!(
                "Files: {}, ESM: {}, CJS: {}, unknown: {}\n",
                report.batch_size,
                report.tally.esm_count,
                report.tally.cjs_count,
                report.tally.unknown_count
            ));
        }

        let mut output = String::new();

        let heading = |text: &str| {
            if self.use_colors {
                Cyan.bold().paint(text).to_string()
            } else {
                text.to_string()
            }
        };

        output.push_str(&format!("{}\n", heading("=== Module Format ===")));
        output.push_str(&format!("  Files analyzed: {}\n", report.batch_size));
        output.push_str(&format!("  ESM: {}\n", report.tally.esm_count));
        output.push_str(&format!("  CommonJS: {}\n", report.tally.cjs_count));
        output.push_str(&format!("  Unclassifiable: {}\n", report.tally.unknown_count));

        output.push_str(&format!("\n{}\n", heading("=== Extension Flags ===")));
        let flags = &report.extensions;
        output.push_str(&format!("  isJs:   {}\n", self.flag(flags.is_js)));
        output.push_str(&format!("  isTs:   {}\n", self.flag(flags.is_ts)));
        output.push_str(&format!("  isJsx:  {}\n", self.flag(flags.is_jsx)));
        output.push_str(&format!("  isCjs:  {}\n", self.flag(flags.is_cjs)));
        output.push_str(&format!("  isBoth: {}\n", self.flag(flags.is_both)));
        output.push_str(&format!("  isNone: {}\n", self.flag(flags.is_none)));

        if self.verbose && !report.files.is_empty() {
            output.push_str(&format!("\n{}\n", heading("=== Files ===")));
            for file in &report.files {
                output.push_str(&format!(
                    "  {} - {}\n",
                    file.path.display(),
                    self.verdict(file.verdict)
                ));
                if let Some(detail) = &file.detail {
                    output.push_str(&format!("      {}\n", detail));
                }
            }
        }

        output.push_str(&format!(
            "\nAnalysis completed at: {}\n",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
        ));

        Ok(output)
    }
}

/// JSON formatter for programmatic consumption.
///
/// Non-verbose output is the lenient wire contract; verbose output serializes
/// the full report including per-file verdicts.
pub struct JsonFormatter {
    pub verbose: bool,
}

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

impl Formatter for JsonFormatter {
    fn format(&self, report: &BatchReport) -> Result<String> {
        let mut json = if self.verbose {
            serde_json::to_string_pretty(report)?
        } else {
            serde_json::to_string_pretty(&report.lenient())?
        };
        json.push('\n');
        Ok(json)
    }
}

/// Create a formatter for the configured output format
pub fn create_formatter(
    format: OutputFormat,
    use_colors: bool,
    verbose: bool,
    quiet: bool,
) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(use_colors, verbose, quiet)),
        OutputFormat::Json => Box::new(JsonFormatter::new(verbose)),
    }
}
