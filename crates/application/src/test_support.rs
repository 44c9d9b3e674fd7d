//! In-memory port implementations for unit tests.

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::NaiveTime;

use crate::ports::{FileSystem, FileSystemError, TimeSource};

/// File system backed by a map. Paths listed in `read_only` reject writes;
/// paths listed in `directories` are not files.
#[derive(Debug, Default)]
pub struct MemoryFileSystem {
    files: Mutex<HashMap<PathBuf, Vec<u8>>>,
    read_only: Vec<PathBuf>,
    directories: Vec<PathBuf>,
}

impl MemoryFileSystem {
    pub fn with_file(path: impl Into<PathBuf>, contents: impl Into<Vec<u8>>) -> Self {
        let fs = Self::default();
        fs.files
            .lock()
            .unwrap()
            .insert(path.into(), contents.into());
        fs
    }

    pub fn read_only(mut self, path: impl Into<PathBuf>) -> Self {
        self.read_only.push(path.into());
        self
    }

    pub fn directory(mut self, path: impl Into<PathBuf>) -> Self {
        self.directories.push(path.into());
        self
    }

    pub fn contents(&self, path: &Path) -> Option<String> {
        self.files
            .lock()
            .unwrap()
            .get(path)
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
    }
}

impl FileSystem for MemoryFileSystem {
    fn read_file_string(&self, path: &Path) -> Result<String, FileSystemError> {
        if self.directories.iter().any(|p| p == path) {
            return Err(FileSystemError::NotAFile(path.to_path_buf()));
        }
        let files = self.files.lock().unwrap();
        let bytes = files
            .get(path)
            .ok_or_else(|| FileSystemError::NotFound(path.to_path_buf()))?;
        String::from_utf8(bytes.clone())
            .map_err(|e| FileSystemError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
    }

    fn write_file(&self, path: &Path, contents: &[u8]) -> Result<(), FileSystemError> {
        if self.read_only.iter().any(|p| p == path) {
            return Err(FileSystemError::PermissionDenied(path.to_path_buf()));
        }
        self.files
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), contents.to_vec());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.directories.iter().any(|p| p == path) || self.files.lock().unwrap().contains_key(path)
    }
}

/// Time source that always reports the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedTimeSource(pub NaiveTime);

impl FixedTimeSource {
    pub fn at(hour: u32, minute: u32, second: u32) -> Self {
        Self(NaiveTime::from_hms_opt(hour, minute, second).unwrap())
    }
}

impl TimeSource for FixedTimeSource {
    fn now(&self) -> NaiveTime {
        self.0
    }
}
