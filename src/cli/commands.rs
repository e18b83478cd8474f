//! Command dispatch and the fail-fast policy pipeline

use crate::cli::args::Args;
use crate::config::{create_default_config, CliConfig, ConfigBuilder, ConfigSource};
use crate::core::{BatchAnalyzer, Walker};
use crate::error::{CheckError, Result};
use crate::models::config::{PolicyMode, Settings};
use crate::models::report::BatchReport;
use crate::models::source_unit::SourceUnit;
use crate::output::{create_formatter, OutputTarget, ProgressReporter};
use crate::typecheck::{TscEngine, TypeCheckEngine, TypeCheckOptions};
use ansi_term::Colour::Yellow;
use std::path::PathBuf;

/// Commands the tool can execute
pub enum Command {
    /// Create a default configuration file
    Init,
    /// Run the batch checks
    Check(Args),
}

impl Command {
    /// Create a command from parsed arguments
    pub fn from_args(args: Args) -> Self {
        if args.init {
            Command::Init
        } else {
            Command::Check(args)
        }
    }
}

/// Execute a command
pub fn execute(command: Command) -> Result<()> {
    match command {
        Command::Init => init(),
        Command::Check(args) => check(args),
    }
}

/// Create a default configuration file in the current directory
fn init() -> Result<()> {
    let config_path = PathBuf::from(crate::config::file::DEFAULT_CONFIG_FILE);

    if config_path.exists() {
        println!(
            "Configuration file already exists at: {}",
            config_path.display()
        );
        println!("To overwrite it, delete the file first and run this command again.");
        return Ok(());
    }

    create_default_config(&config_path)?;
    println!(
        "Created default configuration file at: {}",
        config_path.display()
    );
    Ok(())
}

/// Run the batch checks with the configured policy
fn check(args: Args) -> Result<()> {
    let settings = build_settings(&args)?;

    // Collect the batch
    let walker = Walker::new(settings.clone());
    let units = walker.collect()?;

    if settings.verbose && !settings.quiet {
        eprintln!("Collected {} source file(s)", units.len());
    }

    // Analyze, one file at a time
    let reporter = ProgressReporter::new(
        units.len(),
        settings.show_progress && !settings.quiet && units.len() > 1,
    );
    let analyzer = BatchAnalyzer::new();
    let report = analyzer.analyze_with_progress(&units, |_, _, path| reporter.advance(path));
    reporter.finish(&format!("Analyzed {} file(s)", units.len()));

    // Per-file parse/traversal faults go to the diagnostic stream in both
    // policy modes; they never abort the batch
    for file in &report.files {
        if let Some(detail) = &file.detail {
            eprintln!(
                "warning: could not classify {}: {}",
                file.path.display(),
                detail
            );
        }
    }

    match settings.policy {
        PolicyMode::Lenient => report_lenient(&settings, &report),
        PolicyMode::FailFast => enforce(&settings, &units, &report),
    }
}

/// Build final settings from the command line, the configuration file and
/// defaults, in that precedence order
fn build_settings(args: &Args) -> Result<Settings> {
    let cli_config = CliConfig::from_args(args);
    let cli_partial = cli_config.load()?;

    let builder = ConfigBuilder::new();
    let builder = if let Some(config_path) = cli_config.config_path() {
        builder.add_config_file(config_path)?
    } else {
        builder.try_add_default_config_file()
    };

    builder.merge(cli_partial).build()
}

/// Lenient mode: emit the report through the configured formatter
fn report_lenient(settings: &Settings, report: &BatchReport) -> Result<()> {
    let formatter = create_formatter(
        settings.output_format,
        settings.use_colors,
        settings.verbose,
        settings.quiet,
    );
    let content = formatter.format(report)?;

    OutputTarget::for_path(settings.output_file.as_deref()).write(&content)?;

    if let Some(path) = &settings.output_file {
        if !settings.quiet {
            println!("Report written to: {}", path.display());
        }
    }
    Ok(())
}

/// Fail-fast mode: three checks in order, each reported in full over the
/// whole batch before its verdict, and no later check once one fails
fn enforce(settings: &Settings, units: &[SourceUnit], report: &BatchReport) -> Result<()> {
    // Check one: extension policy
    let extension_violations = report.extension_violations();
    if !extension_violations.is_empty() {
        for violation in &extension_violations {
            warn(settings, &violation.warning());
        }
        return Err(CheckError::DialectPolicy {
            violations: extension_violations.len(),
        });
    }

    // Check two: module-format policy
    let format_violations = report.format_violations();
    if !format_violations.is_empty() {
        for violation in &format_violations {
            warn(settings, &violation.warning());
        }
        return Err(CheckError::FormatPolicy {
            cjs_count: report.tally.cjs_count,
            unknown_count: report.tally.unknown_count,
        });
    }

    // Check three: type-check pass-through
    if !settings.no_check {
        let options = TypeCheckOptions {
            no_check: false,
            engine_path: settings.tsc_path.clone(),
            compiler_args: settings.tsc_args.clone(),
        };
        let run = TscEngine::new().check(units, &options)?;

        if !run.is_clean() {
            for diagnostic in &run.diagnostics {
                eprintln!("{}", diagnostic.message);
            }
            return Err(CheckError::TypeCheckFailed {
                error_count: run.diagnostics.len(),
            });
        }

        // Timing is a side effect for humans, not part of the contract
        eprintln!(
            "Type check passed for {} file(s) in {:.2?}",
            run.files_checked, run.duration
        );
    }

    if !settings.quiet {
        println!(
            "All checks passed: {} file(s), {} ESM",
            report.batch_size, report.tally.esm_count
        );
    }
    Ok(())
}

/// Print a policy warning line to the diagnostic stream
fn warn(settings: &Settings, message: &str) {
    if settings.use_colors {
        eprintln!("{}", Yellow.paint(message));
    } else {
        eprintln!("{}", message);
    }
}
