//! Load clocks use case.

use std::path::Path;

use clockshop_domain::ClockCollection;

use crate::ports::{FileSystem, FileSystemError};
use crate::{ApplicationError, ApplicationResult};

/// Use case for filling a collection from a clock text file.
pub struct LoadClocks<F: FileSystem> {
    fs: F,
}

impl<F: FileSystem> LoadClocks<F> {
    /// Creates a new `LoadClocks` use case.
    #[must_use]
    pub const fn new(fs: F) -> Self {
        Self { fs }
    }

    /// Reads `path` and appends every clock in it to `clocks`.
    ///
    /// Returns the number of clocks appended. On any error the collection
    /// is left exactly as it was.
    ///
    /// # Errors
    /// - [`ApplicationError::SourceNotFound`] if the path is missing, unreadable or not a file
    /// - [`ApplicationError::Domain`] if the contents are malformed or out of range
    /// - [`ApplicationError::FileSystem`] for any other read failure
    pub fn execute(&self, clocks: &mut ClockCollection, path: &Path) -> ApplicationResult<usize> {
        let text = self.fs.read_file_string(path).map_err(|e| match e {
            FileSystemError::NotFound(p)
            | FileSystemError::PermissionDenied(p)
            | FileSystemError::NotAFile(p) => {
                ApplicationError::SourceNotFound(p)
            }
            other => ApplicationError::FileSystem(other),
        })?;

        let added = clocks.load_from_text(&text)?;
        tracing::debug!(path = %path.display(), added, "loaded clocks");
        Ok(added)
    }
}
