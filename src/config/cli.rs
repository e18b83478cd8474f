//! Command-line configuration source
//!
//! Maps parsed arguments to partial settings. Only flags the user actually
//! passed become `Some`, so the command line overrides the configuration file
//! without erasing it.

use crate::cli::args::{Args, OutputArg};
use crate::config::ConfigSource;
use crate::error::Result;
use crate::models::config::{OutputFormat, PartialSettings, PolicyMode};
use std::path::Path;

/// Configuration source backed by the parsed command line
pub struct CliConfig {
    partial: PartialSettings,
    config_path: Option<std::path::PathBuf>,
}

impl CliConfig {
    /// Build the source from parsed arguments
    pub fn from_args(args: &Args) -> Self {
        let set_if = |flag: bool| if flag { Some(true) } else { None };

        let partial = PartialSettings {
            files: if args.files.is_empty() {
                None
            } else {
                Some(args.files.clone())
            },
            scan_path: args.path.clone(),
            exclude_patterns: if args.exclude.is_empty() {
                None
            } else {
                Some(args.exclude.clone())
            },
            max_depth: args.max_depth,
            policy: args.fail_fast.then_some(PolicyMode::FailFast),
            no_check: set_if(args.no_check),
            tsc_path: args.tsc.clone(),
            tsc_args: if args.tsc_args.is_empty() {
                None
            } else {
                Some(args.tsc_args.clone())
            },
            output_format: args.output.map(|format| match format {
                OutputArg::Text => OutputFormat::Text,
                OutputArg::Json => OutputFormat::Json,
            }),
            output_file: args.output_file.clone(),
            quiet: set_if(args.quiet),
            verbose: set_if(args.verbose),
            use_colors: args.no_colors.then_some(false),
            show_progress: args.no_progress.then_some(false),
        };

        Self {
            partial,
            config_path: args.config.clone(),
        }
    }

    /// The explicit configuration file path, if one was given
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }
}

impl ConfigSource for CliConfig {
    fn load(&self) -> Result<PartialSettings> {
        Ok(self.partial.clone())
    }

    fn is_available(&self) -> bool {
        true
    }

    fn name(&self) -> &str {
        "command line"
    }
}
