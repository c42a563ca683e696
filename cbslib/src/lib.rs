//! # cbslib
//!
//! Code base scanner library: measures a source tree by counting non-empty
//! lines of code, grouped by file extension.
//!
//! ## Overview
//!
//! [`scan`] walks a directory tree breadth-first and folds every file into a
//! [`ScanResult`]:
//!
//! - **Tallies**: one [`ExtensionTally`] per extension, in first-seen order.
//!   Files without an extension are tallied as `NULL`.
//! - **Files processed**: every file whose content was read or attempted.
//! - **Skipped**: [`SkipRecord`]s for directories and files excluded by the
//!   user, and for files that could not be read.
//!
//! A line of code is any line holding at least one byte after the line
//! break is removed. No comment stripping, no whitespace trimming.
//!
//! Only a directory that cannot be listed fails the scan. Unreadable files
//! are recorded and the scan carries on.
//!
//! ## Example
//!
//! ```rust
//! use cbslib::{scan, ScanConfig, SkipRecord};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! let dir = tempdir().unwrap();
//! let root = dir.path().join("project");
//! fs::create_dir_all(root.join("docs")).unwrap();
//! fs::write(root.join("main.go"), "package main\n\nfunc main() {}\n").unwrap();
//! fs::write(root.join("docs/notes.txt"), "hello\n").unwrap();
//!
//! let config = ScanConfig::new().ignore_extension("txt");
//! let result = scan(&root, &config).unwrap();
//!
//! assert_eq!(result.lines_for("go"), Some(2));
//! assert_eq!(result.files_processed, 2);
//! assert_eq!(
//!     result.skipped,
//!     vec![SkipRecord::ExcludedFile(root.join("docs/notes.txt"))]
//! );
//! ```

pub mod classify;
pub mod config;
pub mod counter;
pub mod error;
pub mod stats;
pub mod walker;

pub use classify::admit;
pub use config::ScanConfig;
pub use counter::{count_file_lines, count_lines, extension_of};
pub use error::CbsError;
pub use stats::{ExtensionTally, ScanResult, SkipRecord, NULL_EXTENSION};
pub use walker::scan;

/// Result type for cbslib operations
pub type Result<T> = std::result::Result<T, CbsError>;
