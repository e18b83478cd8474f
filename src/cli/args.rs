//! Command-line argument parsing

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// modcheck - batch module-format and dialect checker for JS/TS source sets
#[derive(Parser, Debug)]
#[command(name = "modcheck")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Check a set of JavaScript/TypeScript files for module-format and dialect purity")]
#[command(long_about = "modcheck classifies a batch of source files by file-name dialect \
(JavaScript/TypeScript/JSX/CommonJS suffixes) and by declared module format (ESM vs CommonJS, \
detected structurally from each file's syntax tree), and can hand the batch to the TypeScript \
compiler for a full type check. A packaging pipeline runs it to refuse dependency trees that \
mix module systems.")]
#[command(after_help = "EXAMPLES:

Basic Usage:
    # Report flags and counters for the sources under the current directory
    modcheck

    # Check an explicit, ordered batch of files
    modcheck src/index.ts src/util.ts

    # Scan a specific directory
    modcheck --path ./my-project

Policy:
    # Fail the run on CommonJS sources, mixed dialects or unknown suffixes
    modcheck --fail-fast

    # Fail-fast without the type-check pass
    modcheck --fail-fast --no-check

Type Checking:
    # Use a project-local compiler binary
    modcheck --fail-fast --tsc node_modules/.bin/tsc

    # Forward compiler options verbatim
    modcheck --fail-fast --tsc-arg --strict --tsc-arg --noImplicitAny

Output Options:
    # Machine-readable report
    modcheck --output json

    # Write the report to a file
    modcheck --output json --output-file report.json

Configuration:
    # Use a specific configuration file
    modcheck --config ./modcheck-ci.toml

    # Create a default .modcheck.toml
    modcheck --init
")]
pub struct Args {
    /// Explicit batch files, checked in the given order
    #[arg(value_name = "FILES")]
    pub files: Vec<PathBuf>,

    /// Directory to scan when no explicit files are given
    #[arg(short, long, value_name = "PATH", help = "Directory to scan for source files (defaults to the current directory)")]
    pub path: Option<PathBuf>,

    /// Fail the run on extension, format or type-check violations
    #[arg(long, help = "Fail-fast policy: report every violation of a check, then exit non-zero")]
    pub fail_fast: bool,

    /// Skip the type-check pass entirely
    #[arg(long, help = "Skip the type-check pass-through (only meaningful with --fail-fast)")]
    pub no_check: bool,

    /// Path to the TypeScript compiler binary
    #[arg(long, value_name = "FILE", help = "Type-check engine binary (defaults to 'tsc' on PATH)")]
    pub tsc: Option<PathBuf>,

    /// Compiler options forwarded verbatim to the type-check engine
    #[arg(long = "tsc-arg", value_name = "ARG", allow_hyphen_values = true, help = "Compiler option forwarded verbatim to the engine (repeatable)")]
    pub tsc_args: Vec<String>,

    /// Exclude directories matching these glob patterns
    #[arg(short, long, value_name = "PATTERN", help = "Glob patterns for paths to exclude from scanning (repeatable)")]
    pub exclude: Vec<String>,

    /// Maximum depth for directory traversal
    #[arg(long, value_name = "DEPTH", help = "Maximum directory depth to traverse while scanning")]
    pub max_depth: Option<usize>,

    /// Output format (text, json)
    #[arg(short, long, value_enum, help = "Output format for lenient-mode reports: 'text' for humans, 'json' for machines")]
    pub output: Option<OutputArg>,

    /// Output file path (stdout if not specified)
    #[arg(long, value_name = "FILE", help = "File to write the report to (stdout when unset)")]
    pub output_file: Option<PathBuf>,

    /// Suppress non-essential output
    #[arg(short, long, help = "Suppress non-essential output")]
    pub quiet: bool,

    /// Show detailed per-file information
    #[arg(short, long, help = "Show per-file verdicts in the report")]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, help = "Disable ANSI colors in text output")]
    pub no_colors: bool,

    /// Disable the progress bar
    #[arg(long, help = "Disable the progress bar (useful in CI)")]
    pub no_progress: bool,

    /// Configuration file path
    #[arg(short, long, value_name = "FILE", help = "Path to a configuration file (defaults to .modcheck.toml when present)")]
    pub config: Option<PathBuf>,

    /// Initialize a default configuration file
    #[arg(long, help = "Create a default configuration file (.modcheck.toml) in the current directory")]
    pub init: bool,
}

/// Output format options
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputArg {
    /// Human-readable text output
    Text,
    /// JSON output for programmatic consumption
    Json,
}

impl Args {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Args::parse()
    }
}
