//! Type-check pass-through
//!
//! Full type checking is delegated to an external engine (the TypeScript
//! compiler); this module only defines the seam and re-emits the engine's
//! diagnostics. There is no original checking logic here and none is wanted.

pub mod tsc;

pub use tsc::TscEngine;

use crate::error::Result;
use crate::models::source_unit::SourceUnit;
use serde::Serialize;
use std::path::PathBuf;
use std::time::Duration;

/// Options forwarded to the type-check engine.
///
/// `no_check` is the only field the tool itself interprets; everything in
/// `compiler_args` passes through opaquely.
#[derive(Debug, Clone, Default)]
pub struct TypeCheckOptions {
    /// Skip the pass entirely
    pub no_check: bool,
    /// Engine binary; `tsc` on PATH when unset
    pub engine_path: Option<PathBuf>,
    /// Compiler options forwarded verbatim
    pub compiler_args: Vec<String>,
}

/// One diagnostic line re-emitted from the engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeCheckDiagnostic {
    /// Source file the engine attributed the diagnostic to, when it named one
    pub file: Option<PathBuf>,
    /// The engine's rendered diagnostic line, verbatim
    pub message: String,
}

/// The outcome of one engine run over a batch
#[derive(Debug, Clone)]
pub struct TypeCheckRun {
    /// Every diagnostic the engine produced, in emission order
    pub diagnostics: Vec<TypeCheckDiagnostic>,
    /// Wall-clock duration of the engine run
    pub duration: Duration,
    /// Number of batch files handed to the engine
    pub files_checked: usize,
}

impl TypeCheckRun {
    /// Whether the run produced no diagnostics
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Seam for the external type-check engine.
///
/// Implementations resolve the batch paths against the real filesystem; this
/// is the only component of the tool that needs to.
pub trait TypeCheckEngine {
    /// Run the engine over the batch and collect all diagnostics.
    ///
    /// Setup faults (an unreachable batch file, an engine that cannot be
    /// launched) are errors; diagnostics are data, returned for the caller's
    /// policy layer to act on.
    fn check(&self, units: &[SourceUnit], options: &TypeCheckOptions) -> Result<TypeCheckRun>;
}
