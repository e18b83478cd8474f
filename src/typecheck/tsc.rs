//! TypeScript compiler engine invocation

use crate::error::{CheckError, Result};
use crate::models::source_unit::SourceUnit;
use crate::typecheck::{TypeCheckDiagnostic, TypeCheckEngine, TypeCheckOptions, TypeCheckRun};
use std::path::PathBuf;
use std::process::Command;
use std::time::{Duration, Instant};

/// Default engine binary, resolved from PATH
const DEFAULT_ENGINE: &str = "tsc";

/// Type-check engine backed by the TypeScript compiler binary
#[derive(Debug, Default)]
pub struct TscEngine;

impl TscEngine {
    /// Create a new engine handle
    pub fn new() -> Self {
        Self
    }
}

impl TypeCheckEngine for TscEngine {
    fn check(&self, units: &[SourceUnit], options: &TypeCheckOptions) -> Result<TypeCheckRun> {
        if options.no_check {
            return Ok(TypeCheckRun {
                diagnostics: Vec::new(),
                duration: Duration::ZERO,
                files_checked: 0,
            });
        }

        // The engine reads from disk, so every batch path must exist there.
        // A missing file is its own fatal condition, distinct from any
        // diagnostic the engine could produce.
        for unit in units {
            if !unit.path.exists() {
                return Err(CheckError::SourceUnreachable {
                    path: unit.path.clone(),
                });
            }
        }

        let program = options
            .engine_path
            .as_ref()
            .map(|p| p.to_string_lossy().into_owned())
            .unwrap_or_else(|| DEFAULT_ENGINE.to_string());

        let started = Instant::now();
        let output = Command::new(&program)
            .arg("--noEmit")
            .arg("--pretty")
            .arg("false")
            .args(&options.compiler_args)
            .args(units.iter().map(|unit| unit.path.as_os_str()))
            .output()
            .map_err(|source| CheckError::TypeCheckLaunch { program, source })?;
        let duration = started.elapsed();

        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        let diagnostics = collect_diagnostics(&stdout, units);

        if !output.status.success() && diagnostics.is_empty() {
            // Non-zero exit without diagnostics means the engine itself
            // failed, not the batch
            let message = if stderr.trim().is_empty() {
                format!("engine exited with {}", output.status)
            } else {
                stderr.trim().to_string()
            };
            return Err(CheckError::engine_error(message));
        }

        Ok(TypeCheckRun {
            diagnostics,
            duration,
            files_checked: units.len(),
        })
    }
}

/// Turn the engine's stdout into diagnostic records, one per non-empty line
fn collect_diagnostics(stdout: &str, units: &[SourceUnit]) -> Vec<TypeCheckDiagnostic> {
    stdout
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| parse_diagnostic_line(line, units))
        .collect()
}

/// Parse one diagnostic line in the compiler's `--pretty false` format:
/// `path(line,col): error TSxxxx: message`. The file is attributed back to a
/// batch unit when the leading path matches one; continuation lines keep
/// `file: None`.
fn parse_diagnostic_line(line: &str, units: &[SourceUnit]) -> TypeCheckDiagnostic {
    let file = line.split_once('(').and_then(|(prefix, _)| {
        let candidate = PathBuf::from(prefix.trim());
        units
            .iter()
            .find(|unit| unit.path == candidate || unit.path.ends_with(&candidate))
            .map(|unit| unit.path.clone())
    });

    TypeCheckDiagnostic {
        file,
        message: line.to_string(),
    }
}
