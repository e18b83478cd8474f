//! Output destinations

use crate::error::{CheckError, Result};
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Where formatted output goes
#[derive(Debug, Clone)]
pub enum OutputTarget {
    /// Standard output
    Stdout,
    /// A file on disk
    File(PathBuf),
}

impl OutputTarget {
    /// Pick the target for an optional output-file setting
    pub fn for_path(output_file: Option<&Path>) -> Self {
        match output_file {
            Some(path) => OutputTarget::File(path.to_path_buf()),
            None => OutputTarget::Stdout,
        }
    }

    /// Write the formatted content to this target
    pub fn write(&self, content: &str) -> Result<()> {
        match self {
            OutputTarget::Stdout => {
                print!("{}", content);
                io::stdout()
                    .flush()
                    .map_err(|source| CheckError::StdoutWrite { source })
            }
            OutputTarget::File(path) => {
                let mut file = File::create(path).map_err(|source| CheckError::OutputWrite {
                    path: path.clone(),
                    source,
                })?;
                file.write_all(content.as_bytes())
                    .map_err(|source| CheckError::OutputWrite {
                        path: path.clone(),
                        source,
                    })
            }
        }
    }
}
