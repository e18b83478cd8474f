//! The atomic unit of analysis: one file's path and full text content

use serde::Serialize;
use std::path::{Path, PathBuf};

/// One input file submitted to a batch run.
///
/// The path is used only for its suffix and for diagnostic messages; the
/// analyzer never touches the filesystem through it. A unit is immutable for
/// the duration of a batch and is discarded when the batch completes.
#[derive(Debug, Clone, Serialize)]
pub struct SourceUnit {
    /// Identifying path
    pub path: PathBuf,

    /// Full textual content of the file
    pub text: String,
}

impl SourceUnit {
    /// Create a new source unit
    pub fn new(path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            text: text.into(),
        }
    }

    /// File-name suffix, if any (without the leading dot)
    pub fn suffix(&self) -> Option<&str> {
        suffix_of(&self.path)
    }
}

/// Extract the file-name suffix of a path, without the leading dot
pub fn suffix_of(path: &Path) -> Option<&str> {
    path.extension().and_then(|ext| ext.to_str())
}
