//! Collection of source units from the filesystem
//!
//! The analyzer itself never reads files; this collector is the CLI-side
//! bridge that turns explicit paths or a directory scan into an ordered batch
//! of in-memory source units.

use crate::error::{CheckError, Result};
use crate::models::config::Settings;
use crate::models::source_unit::SourceUnit;
use crate::parsers::extensions;
use glob::Pattern;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Collector for building a batch from the filesystem
pub struct Walker {
    settings: Settings,
}

impl Walker {
    /// Create a new walker with the given settings
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Collect the batch: explicit files when given, otherwise a scan of the
    /// configured directory for recognized source suffixes.
    pub fn collect(&self) -> Result<Vec<SourceUnit>> {
        if !self.settings.files.is_empty() {
            return self.read_explicit_files();
        }
        self.scan_directory()
    }

    /// Read an explicit, ordered file list into source units
    fn read_explicit_files(&self) -> Result<Vec<SourceUnit>> {
        let mut units = Vec::with_capacity(self.settings.files.len());
        for path in &self.settings.files {
            let text = fs::read_to_string(path)
                .map_err(|source| CheckError::io_read(path.clone(), source))?;
            units.push(SourceUnit::new(path.clone(), text));
        }
        Ok(units)
    }

    /// Walk the scan path and read every recognized source file, in a stable
    /// file-name order
    fn scan_directory(&self) -> Result<Vec<SourceUnit>> {
        let root = &self.settings.scan_path;
        if !root.exists() {
            return Err(CheckError::InvalidPath { path: root.clone() });
        }

        let exclude_patterns = self.compile_exclude_patterns()?;

        let mut walk = WalkDir::new(root).sort_by_file_name();
        if let Some(depth) = self.settings.max_depth {
            walk = walk.max_depth(depth);
        }

        let mut units = Vec::new();
        for entry in walk.into_iter().filter_entry(|e| {
            !Self::is_excluded(e.path(), root, &exclude_patterns)
        }) {
            let entry = entry.map_err(|e| {
                CheckError::config_error(format!("Directory traversal error: {}", e))
            })?;
            if !entry.file_type().is_file() {
                continue;
            }
            let path = entry.path();
            if !extensions::is_recognized(path) {
                continue;
            }
            let text = fs::read_to_string(path)
                .map_err(|source| CheckError::io_read(path.to_path_buf(), source))?;
            units.push(SourceUnit::new(path.to_path_buf(), text));
        }
        Ok(units)
    }

    /// Compile the configured exclude patterns
    fn compile_exclude_patterns(&self) -> Result<Vec<Pattern>> {
        self.settings
            .exclude_patterns
            .iter()
            .map(|pattern| Pattern::new(pattern).map_err(CheckError::from))
            .collect()
    }

    /// Whether a path is excluded by name or by pattern match on its
    /// root-relative form
    fn is_excluded(path: &Path, root: &Path, patterns: &[Pattern]) -> bool {
        let relative = path.strip_prefix(root).unwrap_or(path);
        patterns.iter().any(|pattern| {
            pattern.matches_path(relative)
                || relative
                    .components()
                    .any(|component| pattern.matches(&component.as_os_str().to_string_lossy()))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn settings_for(dir: &TempDir) -> Settings {
        Settings {
            scan_path: dir.path().to_path_buf(),
            ..Settings::default()
        }
    }

    #[test]
    fn scan_collects_only_recognized_suffixes() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.ts"), "export const a = 1;").unwrap();
        fs::write(dir.path().join("b.mjs"), "export const b = 2;").unwrap();
        fs::write(dir.path().join("notes.txt"), "not source").unwrap();
        fs::write(dir.path().join("data.json"), "{}").unwrap();

        let units = Walker::new(settings_for(&dir)).collect().unwrap();
        let names: Vec<String> = units
            .iter()
            .map(|u| u.path.file_name().unwrap().to_string_lossy().into_owned())
            .collect();

        assert_eq!(names, vec!["a.ts", "b.mjs"]);
    }

    #[test]
    fn exclude_patterns_skip_directories() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("node_modules/dep")).unwrap();
        fs::write(
            dir.path().join("node_modules/dep/index.js"),
            "module.exports = 1;",
        )
        .unwrap();
        fs::write(dir.path().join("main.ts"), "export const m = 1;").unwrap();

        let units = Walker::new(settings_for(&dir)).collect().unwrap();

        assert_eq!(units.len(), 1);
        assert!(units[0].path.ends_with("main.ts"));
    }

    #[test]
    fn explicit_files_keep_their_order() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("z.ts"), "export const z = 1;").unwrap();
        fs::write(dir.path().join("a.ts"), "export const a = 1;").unwrap();

        let settings = Settings {
            files: vec![dir.path().join("z.ts"), dir.path().join("a.ts")],
            ..Settings::default()
        };
        let units = Walker::new(settings).collect().unwrap();

        assert!(units[0].path.ends_with("z.ts"));
        assert!(units[1].path.ends_with("a.ts"));
    }

    #[test]
    fn missing_explicit_file_is_a_read_error() {
        let settings = Settings {
            files: vec!["definitely/not/here.ts".into()],
            ..Settings::default()
        };
        let err = Walker::new(settings).collect().unwrap_err();
        assert!(matches!(err, CheckError::IoRead { .. }));
    }

    #[test]
    fn max_depth_limits_the_scan() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("deep/nested")).unwrap();
        fs::write(dir.path().join("top.ts"), "export const t = 1;").unwrap();
        fs::write(
            dir.path().join("deep/nested/hidden.ts"),
            "export const h = 1;",
        )
        .unwrap();

        let settings = Settings {
            max_depth: Some(1),
            ..settings_for(&dir)
        };
        let units = Walker::new(settings).collect().unwrap();

        assert_eq!(units.len(), 1);
        assert!(units[0].path.ends_with("top.ts"));
    }
}
