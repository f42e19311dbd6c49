use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while patching the target file
#[derive(Error, Debug)]
pub enum PatchError {
    #[error("failed to read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to write {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },
}

impl PatchError {
    /// Create a new read error with path context
    pub fn read_error(err: io::Error, path: impl Into<PathBuf>) -> Self {
        Self::Read {
            source: err,
            path: path.into(),
        }
    }

    /// Create a new write error with path context
    pub fn write_error(err: io::Error, path: impl Into<PathBuf>) -> Self {
        Self::Write {
            source: err,
            path: path.into(),
        }
    }

    /// The file the failed operation was aimed at
    pub fn path(&self) -> &Path {
        match self {
            PatchError::Read { path, .. } | PatchError::Write { path, .. } => path,
        }
    }

    pub fn is_not_found(&self) -> bool {
        match self {
            PatchError::Read { source, .. } | PatchError::Write { source, .. } => {
                source.kind() == io::ErrorKind::NotFound
            }
        }
    }
}

/// Result type used throughout the patcher
pub type PatchResult<T> = std::result::Result<T, PatchError>;
