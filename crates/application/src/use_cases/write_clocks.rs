//! Write clocks use case.

use std::path::{Path, PathBuf};

use clockshop_domain::ClockCollection;
use thiserror::Error;

use crate::ports::{FileSystem, FileSystemError};

/// A write that did not reach the destination.
#[derive(Debug, Error)]
#[error("failed to write clocks to {}: {source}", .path.display())]
pub struct WriteFailure {
    /// The destination that was being written.
    pub path: PathBuf,
    /// The underlying file system error.
    #[source]
    pub source: FileSystemError,
}

/// Result of [`WriteClocks::execute`].
///
/// Write failures are reported here rather than returned as an error.
#[derive(Debug)]
#[must_use]
pub enum WriteOutcome {
    /// The collection was written.
    Written {
        /// The destination path.
        path: PathBuf,
        /// Number of bytes written.
        bytes: usize,
    },
    /// The write failed; the collection is unaffected.
    Failed(WriteFailure),
}

impl WriteOutcome {
    /// Returns true if the collection was written.
    #[must_use]
    pub const fn is_written(&self) -> bool {
        matches!(self, Self::Written { .. })
    }

    /// Returns the failure, if any.
    #[must_use]
    pub const fn failure(&self) -> Option<&WriteFailure> {
        match self {
            Self::Written { .. } => None,
            Self::Failed(failure) => Some(failure),
        }
    }
}

/// Use case for writing a collection's text form to a file.
pub struct WriteClocks<F: FileSystem> {
    fs: F,
}

impl<F: FileSystem> WriteClocks<F> {
    /// Creates a new `WriteClocks` use case.
    #[must_use]
    pub const fn new(fs: F) -> Self {
        Self { fs }
    }

    /// Writes `clocks` to `path`, one `H:M:S` line per clock.
    ///
    /// A failed write is logged and returned as [`WriteOutcome::Failed`].
    pub fn execute(&self, clocks: &ClockCollection, path: &Path) -> WriteOutcome {
        let text = clocks.to_text();
        match self.fs.write_file(path, text.as_bytes()) {
            Ok(()) => {
                tracing::debug!(path = %path.display(), count = clocks.len(), "wrote clocks");
                WriteOutcome::Written {
                    path: path.to_path_buf(),
                    bytes: text.len(),
                }
            }
            Err(source) => {
                let failure = WriteFailure {
                    path: path.to_path_buf(),
                    source,
                };
                tracing::warn!(error = %failure, "could not write clocks");
                WriteOutcome::Failed(failure)
            }
        }
    }
}
