//! Settings validation

use crate::error::{CheckError, Result};
use crate::models::config::Settings;

/// Settings validator for ensuring a configuration is usable
pub struct SettingsValidator;

impl SettingsValidator {
    /// Validate settings and return the first error found
    pub fn validate(settings: &Settings) -> Result<()> {
        // Explicit batch files must exist; otherwise the scan path must
        if settings.files.is_empty() {
            if !settings.scan_path.exists() {
                return Err(CheckError::InvalidPath {
                    path: settings.scan_path.clone(),
                });
            }
        } else {
            for file in &settings.files {
                if !file.exists() {
                    return Err(CheckError::InvalidPath { path: file.clone() });
                }
            }
        }

        // Validate exclude patterns
        for pattern in &settings.exclude_patterns {
            glob::Pattern::new(pattern).map_err(CheckError::from)?;
        }

        // Validate max depth is reasonable
        if let Some(depth) = settings.max_depth {
            if depth == 0 {
                return Err(CheckError::config_error("Max depth must be at least 1"));
            }
        }

        // Validate the output file's directory exists
        if let Some(path) = &settings.output_file {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    return Err(CheckError::InvalidPath {
                        path: parent.to_path_buf(),
                    });
                }
            }
        }

        Ok(())
    }
}
