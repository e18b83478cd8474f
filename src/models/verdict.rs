//! Per-file verdicts and the batch tally derived from them

use serde::Serialize;

/// The two raw marker flags accumulated while walking one file's syntax tree.
///
/// Both flags are monotonic: once a marker fires on any node it stays set for
/// the remainder of that file's traversal. The detector threads this
/// accumulator through the walk explicitly instead of closing over mutable
/// state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FormatSignals {
    /// Any import/export syntax was seen
    pub has_esm_marker: bool,
    /// Any `require(...)` call or `module.exports`/`exports.` access was seen
    pub has_cjs_marker: bool,
}

/// The classification of one source unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FileVerdict {
    /// ESM markers only
    Esm,
    /// CommonJS markers only
    Cjs,
    /// Both marker kinds; treated as ESM with legacy interop, not as an error
    MixedEsm,
    /// Neither marker kind; the file is format-agnostic and counts nowhere
    Neutral,
    /// The file could not be parsed or traversed
    Unknown,
}

impl FileVerdict {
    /// Derive the verdict from the two marker flags
    pub fn from_signals(signals: FormatSignals) -> Self {
        match (signals.has_esm_marker, signals.has_cjs_marker) {
            (true, true) => FileVerdict::MixedEsm,
            (true, false) => FileVerdict::Esm,
            (false, true) => FileVerdict::Cjs,
            (false, false) => FileVerdict::Neutral,
        }
    }

    /// Whether this verdict counts toward the ESM bucket
    pub fn counts_as_esm(&self) -> bool {
        matches!(self, FileVerdict::Esm | FileVerdict::MixedEsm)
    }
}

impl std::fmt::Display for FileVerdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileVerdict::Esm => write!(f, "ESM"),
            FileVerdict::Cjs => write!(f, "CJS"),
            FileVerdict::MixedEsm => write!(f, "ESM (with CommonJS interop)"),
            FileVerdict::Neutral => write!(f, "format-agnostic"),
            FileVerdict::Unknown => write!(f, "unknown"),
        }
    }
}

/// Batch counters folded from per-file verdicts.
///
/// The buckets are mutually exclusive; neutral files count nowhere, so
/// `esm_count + cjs_count + unknown_count` equals the batch size minus the
/// neutral files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FormatTally {
    /// Files with an ESM verdict (including mixed files)
    pub esm_count: usize,
    /// Files with a pure CommonJS verdict
    pub cjs_count: usize,
    /// Files whose parse or traversal failed
    pub unknown_count: usize,
}

impl FormatTally {
    /// Record one verdict
    pub fn record(&mut self, verdict: FileVerdict) {
        match verdict {
            FileVerdict::Esm | FileVerdict::MixedEsm => self.esm_count += 1,
            FileVerdict::Cjs => self.cjs_count += 1,
            FileVerdict::Unknown => self.unknown_count += 1,
            FileVerdict::Neutral => {}
        }
    }

    /// Fold a sequence of verdicts into a fresh tally
    pub fn from_verdicts(verdicts: impl IntoIterator<Item = FileVerdict>) -> Self {
        let mut tally = Self::default();
        for verdict in verdicts {
            tally.record(verdict);
        }
        tally
    }
}
