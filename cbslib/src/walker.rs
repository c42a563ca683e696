//! Breadth-first directory walker.
//!
//! Directories are processed from a FIFO work queue, one entry per
//! directory, so traversal depth never grows the call stack. Children are
//! handled in whatever order the OS lists them.

use std::collections::VecDeque;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::classify::admit;
use crate::config::ScanConfig;
use crate::error::CbsError;
use crate::stats::{ScanResult, SkipRecord};
use crate::Result;

/// Scan a directory tree and tally its lines of code per extension.
///
/// Child paths are built by joining the parent path with the child name, so
/// ignored paths must be given in the same form (`root/sub`, not `sub`).
///
/// # Errors
///
/// Fails if any directory cannot be listed, including `root` itself. No
/// partial result is returned. Files that cannot be read do not fail the
/// scan; they are recorded as [`SkipRecord::ReadError`].
///
/// # Example
///
/// ```rust,ignore
/// use cbslib::{scan, ScanConfig};
///
/// let config = ScanConfig::new().ignore_path("project/target");
/// let result = scan("project", &config)?;
/// println!("{} lines", result.total_lines());
/// ```
pub fn scan(root: impl AsRef<Path>, config: &ScanConfig) -> Result<ScanResult> {
    let root = root.as_ref();
    info!(root = %root.display(), "starting scan");

    let mut result = ScanResult::new();
    let mut queue: VecDeque<PathBuf> = VecDeque::new();
    queue.push_back(root.to_path_buf());

    while let Some(dir) = queue.pop_front() {
        visit_dir(&dir, config, &mut queue, &mut result)?;
    }

    debug!(
        files = result.files_processed,
        extensions = result.tallies.len(),
        skipped = result.skipped.len(),
        "queue empty; all files processed"
    );

    Ok(result)
}

/// List one directory, queueing subdirectories and admitting everything else.
fn visit_dir(
    dir: &Path,
    config: &ScanConfig,
    queue: &mut VecDeque<PathBuf>,
    result: &mut ScanResult,
) -> Result<()> {
    let entries = fs::read_dir(dir).map_err(|e| CbsError::ReadDir {
        path: dir.to_path_buf(),
        source: e,
    })?;

    for entry in entries {
        let entry = entry.map_err(|e| CbsError::DirEntry {
            path: dir.to_path_buf(),
            source: e,
        })?;
        let file_type = entry.file_type().map_err(|e| CbsError::DirEntry {
            path: dir.to_path_buf(),
            source: e,
        })?;
        let path = dir.join(entry.file_name());

        if file_type.is_dir() {
            if config.is_path_ignored(&path) {
                debug!(path = %path.display(), "ignoring directory");
                result.skip(SkipRecord::ExcludedDirectory(path));
            } else {
                debug!(path = %path.display(), "added to the queue");
                queue.push_back(path);
            }
        } else {
            admit(&path, config, result);
        }
    }

    Ok(())
}
