//! Configuration file parsing and generation

use crate::config::file::DEFAULT_CONFIG_FILE;
use crate::error::{CheckError, Result};
use crate::models::config::PartialSettings;
use std::fs;
use std::path::{Path, PathBuf};

/// Parse a TOML configuration file into partial settings
pub fn parse_config_file(path: &Path) -> Result<PartialSettings> {
    let content = fs::read_to_string(path).map_err(|source| CheckError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config_content(&content).map_err(|source| CheckError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse TOML configuration content
pub fn parse_config_content(content: &str) -> std::result::Result<PartialSettings, toml::de::Error> {
    toml::from_str(content)
}

/// Locate the default configuration file in the current directory
pub fn find_default_config() -> Option<PathBuf> {
    let path = PathBuf::from(DEFAULT_CONFIG_FILE);
    if path.exists() && path.is_file() {
        Some(path)
    } else {
        None
    }
}

/// Default configuration file contents written by `modcheck init`
const DEFAULT_CONFIG_TEMPLATE: &str = r#"# modcheck configuration

# Policy applied to the batch verdicts: "lenient" returns the raw flags and
# counters, "fail-fast" fails the run on any violation.
policy = "lenient"

# Skip the type-check pass-through (fail-fast mode only).
no_check = false

# Directory scanned for source files when no explicit files are given.
scan_path = "."

# Patterns excluded from directory scanning.
exclude_patterns = ["node_modules", ".git", "dist", "build", "coverage"]

# Maximum directory depth to traverse.
# max_depth = 10

# Output format for lenient-mode reports: "text" or "json".
output_format = "text"

# Path to the TypeScript compiler binary; "tsc" on PATH when unset.
# tsc_path = "node_modules/.bin/tsc"

# Compiler options forwarded verbatim to the type-check engine.
# tsc_args = ["--strict"]
"#;

/// Write a default configuration file at the given path
pub fn create_default_config(path: &Path) -> Result<()> {
    fs::write(path, DEFAULT_CONFIG_TEMPLATE).map_err(|source| CheckError::OutputWrite {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::config::{OutputFormat, PolicyMode};
    use tempfile::TempDir;

    #[test]
    fn parses_all_recognized_keys() {
        let partial = parse_config_content(
            r#"
            policy = "fail-fast"
            no_check = true
            scan_path = "src"
            exclude_patterns = ["vendor"]
            max_depth = 3
            output_format = "json"
            tsc_args = ["--strict"]
            "#,
        )
        .unwrap();

        assert_eq!(partial.policy, Some(PolicyMode::FailFast));
        assert_eq!(partial.no_check, Some(true));
        assert_eq!(partial.scan_path, Some("src".into()));
        assert_eq!(partial.exclude_patterns, Some(vec!["vendor".to_string()]));
        assert_eq!(partial.max_depth, Some(3));
        assert_eq!(partial.output_format, Some(OutputFormat::Json));
        assert_eq!(partial.tsc_args, Some(vec!["--strict".to_string()]));
    }

    #[test]
    fn empty_content_sets_nothing() {
        let partial = parse_config_content("").unwrap();
        assert!(partial.policy.is_none());
        assert!(partial.scan_path.is_none());
    }

    #[test]
    fn default_template_round_trips() {
        let partial = parse_config_content(DEFAULT_CONFIG_TEMPLATE).unwrap();
        assert_eq!(partial.policy, Some(PolicyMode::Lenient));
        assert_eq!(partial.no_check, Some(false));
    }

    #[test]
    fn create_default_writes_a_parsable_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".modcheck.toml");

        create_default_config(&path).unwrap();
        let partial = parse_config_file(&path).unwrap();

        assert_eq!(partial.output_format, Some(OutputFormat::Text));
    }
}
