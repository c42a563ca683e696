//! Error types for cbslib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a scan.
///
/// Per-file failures never surface here; they are recorded as
/// [`SkipRecord::ReadError`](crate::SkipRecord::ReadError) instead.
#[derive(Error, Debug)]
pub enum CbsError {
    /// Failed to list a directory (missing, not a directory, permission denied)
    #[error("failed to read directory '{path}': {source}")]
    ReadDir {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to read an entry while listing a directory
    #[error("failed to read entry in '{path}': {source}")]
    DirEntry {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl CbsError {
    /// The directory whose listing failed.
    pub fn path(&self) -> &PathBuf {
        match self {
            CbsError::ReadDir { path, .. } | CbsError::DirEntry { path, .. } => path,
        }
    }
}
