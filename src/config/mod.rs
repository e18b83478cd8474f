//! Configuration management

pub mod cli;
pub mod file;
pub mod parser;
pub mod settings;

use crate::error::Result;
use crate::models::config::{PartialSettings, Settings};
use std::path::Path;

pub use cli::CliConfig;
pub use file::FileConfig;
pub use parser::{create_default_config, find_default_config, parse_config_content, parse_config_file};
pub use settings::SettingsValidator;

/// Trait for configuration sources
pub trait ConfigSource {
    /// Load configuration from this source
    fn load(&self) -> Result<PartialSettings>;

    /// Check if this configuration source is available
    fn is_available(&self) -> bool;

    /// Get the name of this configuration source for diagnostics
    fn name(&self) -> &str;
}

/// Configuration builder for merging multiple sources.
///
/// Sources merge lowest-precedence first: defaults, then the configuration
/// file, then the command line.
pub struct ConfigBuilder {
    partial: PartialSettings,
}

impl ConfigBuilder {
    /// Create a new configuration builder with defaults
    pub fn new() -> Self {
        Self {
            partial: PartialSettings::default(),
        }
    }

    /// Merge settings from a partial configuration
    pub fn merge(mut self, partial: PartialSettings) -> Self {
        self.partial.merge_from(partial);
        self
    }

    /// Merge settings from a named configuration file
    pub fn add_config_file(self, path: &Path) -> Result<Self> {
        let source = FileConfig::with_path(path);
        let partial = source.load()?;
        Ok(self.merge(partial))
    }

    /// Merge the default configuration file if one exists; silently a no-op
    /// otherwise
    pub fn try_add_default_config_file(self) -> Self {
        let source = FileConfig::new();
        if source.is_available() {
            if let Ok(partial) = source.load() {
                return self.merge(partial);
            }
        }
        self
    }

    /// Build final settings with validation
    pub fn build(self) -> Result<Settings> {
        let settings = self.partial.to_settings();
        SettingsValidator::validate(&settings)?;
        Ok(settings)
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
