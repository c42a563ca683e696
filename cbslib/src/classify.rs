//! File classification.
//!
//! Every file the walker meets goes through [`admit`], which decides whether
//! its lines are tallied or the file is recorded as skipped.

use std::path::Path;

use tracing::{debug, warn};

use crate::config::ScanConfig;
use crate::counter::{count_file_lines, extension_of};
use crate::stats::{ScanResult, SkipRecord, NULL_EXTENSION};

/// Classify one file and fold it into `result`.
///
/// Rules, first match wins:
/// 1. path excluded by the user: skipped, not read
/// 2. unreadable: counted as processed, recorded as a read error
/// 3. no extension and extensionless files are ignored: skipped
/// 4. extension excluded by the user: skipped
/// 5. otherwise: lines added to the extension's tally
pub fn admit(path: &Path, config: &ScanConfig, result: &mut ScanResult) {
    if config.is_path_ignored(path) {
        debug!(path = %path.display(), "ignoring file");
        result.skip(SkipRecord::ExcludedFile(path.to_path_buf()));
        return;
    }

    debug!(path = %path.display(), "processing file");
    result.files_processed += 1;

    let lines = match count_file_lines(path) {
        Ok(lines) => lines,
        Err(e) => {
            if config.ignore_read_errors {
                debug!(path = %path.display(), error = %e, "ignoring unreadable file");
            } else {
                warn!(path = %path.display(), error = %e, "failed to read file");
            }
            result.skip(SkipRecord::ReadError(path.to_path_buf()));
            return;
        }
    };

    let extension = extension_of(path);
    debug!(path = %path.display(), lines, extension = %extension, "counted file");

    if extension == NULL_EXTENSION && config.ignore_extensionless {
        debug!(path = %path.display(), "ignoring file without extension");
        result.skip(SkipRecord::ExcludedFile(path.to_path_buf()));
    } else if extension != NULL_EXTENSION && config.is_extension_ignored(&extension) {
        debug!(path = %path.display(), extension = %extension, "ignoring extension");
        result.skip(SkipRecord::ExcludedFile(path.to_path_buf()));
    } else {
        result.add_lines(&extension, lines);
    }
}
