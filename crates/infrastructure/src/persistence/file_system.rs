//! Real file system implementation.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::Path;

use clockshop_application::ports::{FileSystem, FileSystemError};

/// Real file system implementation using `std::fs`.
///
/// Each call opens its own handle and drops it before returning, on both
/// the success and the error path.
#[derive(Debug, Clone, Default)]
pub struct StdFileSystem;

impl StdFileSystem {
    /// Creates a new `StdFileSystem`.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

fn classify(path: &Path, e: std::io::Error) -> FileSystemError {
    match e.kind() {
        ErrorKind::NotFound => FileSystemError::NotFound(path.to_path_buf()),
        ErrorKind::PermissionDenied => FileSystemError::PermissionDenied(path.to_path_buf()),
        ErrorKind::IsADirectory => FileSystemError::NotAFile(path.to_path_buf()),
        _ => FileSystemError::Io(e),
    }
}

impl FileSystem for StdFileSystem {
    fn read_file_string(&self, path: &Path) -> Result<String, FileSystemError> {
        if path.is_dir() {
            return Err(FileSystemError::NotAFile(path.to_path_buf()));
        }
        fs::read_to_string(path).map_err(|e| classify(path, e))
    }

    fn write_file(&self, path: &Path, contents: &[u8]) -> Result<(), FileSystemError> {
        let mut file = fs::File::create(path).map_err(|e| classify(path, e))?;
        file.write_all(contents)?;
        file.flush()?;
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        fs::metadata(path).is_ok()
    }
}
