//! Batch-level reports: extension flags, per-file results and policy violations

use crate::models::verdict::{FileVerdict, FormatSignals, FormatTally};
use serde::Serialize;
use std::path::PathBuf;

/// Batch-wide homogeneity flags derived from file-name suffixes.
///
/// Every flag except `is_none` uses every-file semantics, so all of them are
/// vacuously true for an empty batch. In particular `is_both` (`is_js` and
/// `is_ts` simultaneously) can only ever be true for the empty batch, since
/// the two suffix groups are disjoint; that quirk is part of the observable
/// contract and is asserted by tests rather than corrected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ExtensionFlags {
    /// At least one suffix falls outside every recognized group
    #[serde(rename = "isNone")]
    pub is_none: bool,
    /// Every suffix is `.cjs`, or every suffix is `.cts`
    #[serde(rename = "isCjs")]
    pub is_cjs: bool,
    /// Every suffix is JSX-flavored (`.jsx`/`.tsx`)
    #[serde(rename = "isJsx")]
    pub is_jsx: bool,
    /// Every suffix is `.js` or `.mjs`
    #[serde(rename = "isJs")]
    pub is_js: bool,
    /// Every suffix is `.ts` or `.mts`
    #[serde(rename = "isTs")]
    pub is_ts: bool,
    /// `is_js` and `is_ts` simultaneously
    #[serde(rename = "isBoth")]
    pub is_both: bool,
}

/// The classification of one source unit, with any failure detail
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    /// Path of the unit, for diagnostics
    pub path: PathBuf,
    /// The derived verdict
    pub verdict: FileVerdict,
    /// The raw marker flags behind the verdict
    pub signals: FormatSignals,
    /// Raw parse or traversal error detail for `Unknown` verdicts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// The full result of one batch run.
///
/// Rebuilt fresh on every invocation; nothing is cached or persisted between
/// runs. The analyzer never terminates the process itself - policy decisions
/// are made by the caller from the violations derived here.
#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    /// Number of units submitted
    pub batch_size: usize,
    /// Suffix homogeneity flags
    pub extensions: ExtensionFlags,
    /// Module-format counters
    pub tally: FormatTally,
    /// Per-file results, in submission order
    pub files: Vec<FileReport>,
}

impl BatchReport {
    /// The lenient-mode output view.
    ///
    /// Exposes the six extension flags plus `unknown_count` and `cjs_count`.
    /// There is no ESM counter here; the lenient contract never carried one.
    pub fn lenient(&self) -> LenientReport {
        LenientReport {
            is_none: self.extensions.is_none,
            is_jsx: self.extensions.is_jsx,
            is_cjs: self.extensions.is_cjs,
            is_both: self.extensions.is_both,
            is_js: self.extensions.is_js,
            is_ts: self.extensions.is_ts,
            unknown_count: self.tally.unknown_count,
            cjs_count: self.tally.cjs_count,
        }
    }

    /// Violations of the extension policy (strict-mode check one)
    pub fn extension_violations(&self) -> Vec<PolicyViolation> {
        let mut violations = Vec::new();
        if self.extensions.is_none {
            violations.push(PolicyViolation::UnrecognizedExtension);
        }
        if self.extensions.is_cjs {
            violations.push(PolicyViolation::CommonJsExtension);
        }
        if self.extensions.is_both {
            violations.push(PolicyViolation::MixedJsAndTs);
        }
        violations
    }

    /// Violations of the module-format policy (strict-mode check two)
    pub fn format_violations(&self) -> Vec<PolicyViolation> {
        let mut violations = Vec::new();
        if self.tally.cjs_count > 0 {
            violations.push(PolicyViolation::CommonJsSource {
                count: self.tally.cjs_count,
            });
        }
        if self.tally.unknown_count > 0 {
            violations.push(PolicyViolation::UnclassifiableSource {
                count: self.tally.unknown_count,
            });
        }
        violations
    }

    /// All violations, extension checks first
    pub fn violations(&self) -> Vec<PolicyViolation> {
        let mut violations = self.extension_violations();
        violations.extend(self.format_violations());
        violations
    }
}

/// The structured result exposed in lenient mode.
///
/// Field names follow the wire contract consumed by the invoking packaging
/// tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LenientReport {
    #[serde(rename = "isNone")]
    pub is_none: bool,
    #[serde(rename = "isJsx")]
    pub is_jsx: bool,
    #[serde(rename = "isCjs")]
    pub is_cjs: bool,
    #[serde(rename = "isBoth")]
    pub is_both: bool,
    #[serde(rename = "isJs")]
    pub is_js: bool,
    #[serde(rename = "isTs")]
    pub is_ts: bool,
    #[serde(rename = "unknownCount")]
    pub unknown_count: usize,
    #[serde(rename = "cjsCount")]
    pub cjs_count: usize,
}

/// One failed policy check, with its human-readable warning line.
///
/// These are returned up to the caller instead of exiting from inside the
/// checks; only the top-level entry point decides to terminate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case", tag = "kind")]
pub enum PolicyViolation {
    /// A suffix outside every recognized group
    UnrecognizedExtension,
    /// A homogeneous `.cjs` or `.cts` batch
    CommonJsExtension,
    /// `is_js` and `is_ts` both true
    MixedJsAndTs,
    /// Files with a CommonJS verdict
    CommonJsSource { count: usize },
    /// Files that could not be parsed or traversed
    UnclassifiableSource { count: usize },
}

impl PolicyViolation {
    /// The warning line printed for this violation
    pub fn warning(&self) -> String {
        match self {
            PolicyViolation::UnrecognizedExtension => {
                "warning: the file set contains extensions outside .js/.mjs/.ts/.mts/.jsx/.tsx/.cjs/.cts".to_string()
            }
            PolicyViolation::CommonJsExtension => {
                "warning: the file set is CommonJS-suffixed (.cjs/.cts); only ESM sources are supported".to_string()
            }
            PolicyViolation::MixedJsAndTs => {
                "warning: the file set satisfies both the JavaScript and TypeScript extension checks".to_string()
            }
            PolicyViolation::CommonJsSource { count } => {
                format!(
                    "warning: {} file(s) use CommonJS module syntax; only ESM sources are supported",
                    count
                )
            }
            PolicyViolation::UnclassifiableSource { count } => {
                format!("warning: {} file(s) could not be classified", count)
            }
        }
    }
}
