//! Scan configuration.
//!
//! A [`ScanConfig`] is built once by the caller and passed by reference into
//! [`scan`](crate::scan). It never changes during a scan.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// What a scan should leave out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanConfig {
    /// Directories and files to skip, matched against the full path built
    /// while walking (root joined with each child name)
    pub ignored_paths: HashSet<PathBuf>,
    /// File extensions to skip, without the leading dot
    pub ignored_extensions: HashSet<String>,
    /// Skip files whose name has no extension instead of tallying them as `NULL`
    pub ignore_extensionless: bool,
    /// Treat read errors as expected: log them quietly and keep them out of warnings
    pub ignore_read_errors: bool,
}

impl ScanConfig {
    /// Create a config that excludes nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Exclude a directory or file by its full path.
    pub fn ignore_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.ignored_paths.insert(path.into());
        self
    }

    /// Exclude every file with the given extension.
    ///
    /// A leading dot is accepted and stripped, so `".txt"` and `"txt"` are
    /// the same rule.
    pub fn ignore_extension(mut self, extension: &str) -> Self {
        let extension = extension.strip_prefix('.').unwrap_or(extension);
        self.ignored_extensions.insert(extension.to_string());
        self
    }

    /// Builder: set whether extensionless files are skipped
    pub fn ignore_extensionless(mut self, ignore: bool) -> Self {
        self.ignore_extensionless = ignore;
        self
    }

    /// Builder: set whether read errors are expected
    pub fn ignore_read_errors(mut self, ignore: bool) -> Self {
        self.ignore_read_errors = ignore;
        self
    }

    /// Check whether a path was excluded by the user.
    pub fn is_path_ignored(&self, path: &Path) -> bool {
        self.ignored_paths.contains(path)
    }

    /// Check whether an extension was excluded by the user.
    pub fn is_extension_ignored(&self, extension: &str) -> bool {
        self.ignored_extensions.contains(extension)
    }
}
