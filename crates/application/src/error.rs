//! Application error types

use std::path::PathBuf;

use clockshop_domain::DomainError;
use thiserror::Error;

use crate::ports::FileSystemError;

/// Application-level errors.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// A domain validation error occurred.
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),

    /// The clock source file could not be opened.
    #[error("clock source not found: {}", .0.display())]
    SourceNotFound(PathBuf),

    /// A file system operation failed.
    #[error("file system error: {0}")]
    FileSystem(#[from] FileSystemError),
}

/// Result type alias for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
