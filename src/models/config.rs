//! Configuration-related data structures

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Policy applied to the batch verdicts.
///
/// One analyzer, two configurations: lenient mode returns the raw flags and
/// counters to the caller; fail-fast mode treats extension and module-format
/// violations (and type errors) as fatal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PolicyMode {
    /// Report flags and counters; policy decisions belong to the caller
    Lenient,
    /// Fail the run on any extension, format or type-check violation
    FailFast,
}

impl std::str::FromStr for PolicyMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "lenient" => Ok(PolicyMode::Lenient),
            "fail-fast" | "failfast" | "strict" => Ok(PolicyMode::FailFast),
            other => Err(format!("Unknown policy mode: {}", other)),
        }
    }
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text output
    Text,
    /// JSON output for programmatic consumption
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("Unknown output format: {}", other)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Main configuration settings for modcheck
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Explicit batch files, in order; overrides directory scanning when set
    pub files: Vec<PathBuf>,

    /// Directory to scan for source files when no explicit batch is given
    pub scan_path: PathBuf,

    /// Patterns to exclude from scanning
    pub exclude_patterns: Vec<String>,

    /// Maximum directory depth to traverse
    pub max_depth: Option<usize>,

    /// Policy applied to the batch verdicts
    pub policy: PolicyMode,

    /// Skip the type-check pass entirely
    pub no_check: bool,

    /// Path to the external type-check engine binary
    pub tsc_path: Option<PathBuf>,

    /// Compiler options forwarded opaquely to the type-check engine
    pub tsc_args: Vec<String>,

    /// Output format (text, json)
    pub output_format: OutputFormat,

    /// Output file path (if not specified, output to stdout)
    pub output_file: Option<PathBuf>,

    /// Whether to suppress non-essential output
    pub quiet: bool,

    /// Whether to show detailed per-file information
    pub verbose: bool,

    /// Whether to use colors in text output
    pub use_colors: bool,

    /// Whether to show a progress bar while analyzing
    pub show_progress: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            files: Vec::new(),
            scan_path: PathBuf::from("."),
            exclude_patterns: vec![
                "node_modules".to_string(),
                ".git".to_string(),
                "dist".to_string(),
                "build".to_string(),
                "coverage".to_string(),
            ],
            max_depth: None,
            policy: PolicyMode::Lenient,
            no_check: false,
            tsc_path: None,
            tsc_args: Vec::new(),
            output_format: OutputFormat::Text,
            output_file: None,
            quiet: false,
            verbose: false,
            use_colors: true,
            show_progress: true,
        }
    }
}

/// Partial settings used for merging configuration sources.
///
/// Every field is optional; `None` means "not set by this source". Sources
/// merge in precedence order: defaults, then the configuration file, then the
/// command line.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PartialSettings {
    pub files: Option<Vec<PathBuf>>,
    pub scan_path: Option<PathBuf>,
    pub exclude_patterns: Option<Vec<String>>,
    pub max_depth: Option<usize>,
    pub policy: Option<PolicyMode>,
    pub no_check: Option<bool>,
    pub tsc_path: Option<PathBuf>,
    pub tsc_args: Option<Vec<String>>,
    pub output_format: Option<OutputFormat>,
    pub output_file: Option<PathBuf>,
    pub quiet: Option<bool>,
    pub verbose: Option<bool>,
    pub use_colors: Option<bool>,
    pub show_progress: Option<bool>,
}

impl PartialSettings {
    /// Apply all fields from `other` that are set, overriding this source
    pub fn merge_from(&mut self, other: PartialSettings) {
        fn take<T>(field: &mut Option<T>, incoming: Option<T>) {
            if incoming.is_some() {
                *field = incoming;
            }
        }

        take(&mut self.files, other.files);
        take(&mut self.scan_path, other.scan_path);
        take(&mut self.exclude_patterns, other.exclude_patterns);
        take(&mut self.max_depth, other.max_depth);
        take(&mut self.policy, other.policy);
        take(&mut self.no_check, other.no_check);
        take(&mut self.tsc_path, other.tsc_path);
        take(&mut self.tsc_args, other.tsc_args);
        take(&mut self.output_format, other.output_format);
        take(&mut self.output_file, other.output_file);
        take(&mut self.quiet, other.quiet);
        take(&mut self.verbose, other.verbose);
        take(&mut self.use_colors, other.use_colors);
        take(&mut self.show_progress, other.show_progress);
    }

    /// Convert to full settings, filling unset fields with defaults
    pub fn to_settings(self) -> Settings {
        let defaults = Settings::default();
        Settings {
            files: self.files.unwrap_or(defaults.files),
            scan_path: self.scan_path.unwrap_or(defaults.scan_path),
            exclude_patterns: self.exclude_patterns.unwrap_or(defaults.exclude_patterns),
            max_depth: self.max_depth.or(defaults.max_depth),
            policy: self.policy.unwrap_or(defaults.policy),
            no_check: self.no_check.unwrap_or(defaults.no_check),
            tsc_path: self.tsc_path.or(defaults.tsc_path),
            tsc_args: self.tsc_args.unwrap_or(defaults.tsc_args),
            output_format: self.output_format.unwrap_or(defaults.output_format),
            output_file: self.output_file.or(defaults.output_file),
            quiet: self.quiet.unwrap_or(defaults.quiet),
            verbose: self.verbose.unwrap_or(defaults.verbose),
            use_colors: self.use_colors.unwrap_or(defaults.use_colors),
            show_progress: self.show_progress.unwrap_or(defaults.show_progress),
        }
    }
}
