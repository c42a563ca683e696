//! Core data structures for scan results

use serde::{Serialize, Serializer};
use std::fmt;
use std::path::{Path, PathBuf};

/// Extension recorded for files whose name contains no `.`
pub const NULL_EXTENSION: &str = "NULL";

/// Running line total for one file extension
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtensionTally {
    /// Extension without the leading dot, case preserved
    pub extension: String,
    /// Non-empty lines counted across all files with this extension
    pub lines: u64,
}

impl ExtensionTally {
    /// Create a new tally
    pub fn new(extension: impl Into<String>, lines: u64) -> Self {
        Self {
            extension: extension.into(),
            lines,
        }
    }

    /// Whether this is the tally for extensionless files
    pub fn is_null(&self) -> bool {
        self.extension == NULL_EXTENSION
    }
}

/// Why an entry did not contribute to any tally.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "path", rename_all = "snake_case")]
pub enum SkipRecord {
    /// A directory excluded by path; nothing below it was visited
    ExcludedDirectory(#[serde(serialize_with = "serialize_lossy")] PathBuf),
    /// A file excluded by path, by extension, or for having no extension
    ExcludedFile(#[serde(serialize_with = "serialize_lossy")] PathBuf),
    /// A file that could not be opened or read
    ReadError(#[serde(serialize_with = "serialize_lossy")] PathBuf),
}

/// Paths that are not valid UTF-8 are written with replacement characters.
fn serialize_lossy<P: AsRef<Path>, S: Serializer>(
    path: &P,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&path.as_ref().to_string_lossy())
}

impl SkipRecord {
    /// Path of the skipped entry
    pub fn path(&self) -> &Path {
        match self {
            SkipRecord::ExcludedDirectory(path)
            | SkipRecord::ExcludedFile(path)
            | SkipRecord::ReadError(path) => path,
        }
    }

    /// Whether the entry was skipped because it could not be read
    pub fn is_read_error(&self) -> bool {
        matches!(self, SkipRecord::ReadError(_))
    }
}

impl fmt::Display for SkipRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipRecord::ExcludedDirectory(path) => write!(f, "{}/", path.display()),
            SkipRecord::ExcludedFile(path) | SkipRecord::ReadError(path) => {
                write!(f, "{}", path.display())
            }
        }
    }
}

/// Aggregate of one scan.
///
/// Tallies keep the order in which extensions were first seen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScanResult {
    /// One tally per distinct extension
    pub tallies: Vec<ExtensionTally>,
    /// Files whose content was read or attempted
    pub files_processed: u64,
    /// Entries that did not contribute, in the order they were met
    pub skipped: Vec<SkipRecord>,
}

impl ScanResult {
    /// Create a new empty result
    pub fn new() -> Self {
        Self::default()
    }

    /// Add lines to the tally for `extension`, creating it on first sight.
    pub fn add_lines(&mut self, extension: &str, lines: u64) {
        match self.tallies.iter_mut().find(|t| t.extension == extension) {
            Some(tally) => tally.lines += lines,
            None => self.tallies.push(ExtensionTally::new(extension, lines)),
        }
    }

    /// Record a skipped entry
    pub fn skip(&mut self, record: SkipRecord) {
        self.skipped.push(record);
    }

    /// Look up the line total for an extension
    pub fn lines_for(&self, extension: &str) -> Option<u64> {
        self.tallies
            .iter()
            .find(|t| t.extension == extension)
            .map(|t| t.lines)
    }

    /// Sum of all tallies
    pub fn total_lines(&self) -> u64 {
        self.tallies.iter().map(|t| t.lines).sum()
    }

    /// Whether any extensionless files were counted
    pub fn has_null_tally(&self) -> bool {
        self.tallies.iter().any(ExtensionTally::is_null)
    }

    /// Skip records for files that could not be read
    pub fn read_errors(&self) -> impl Iterator<Item = &SkipRecord> {
        self.skipped.iter().filter(|s| s.is_read_error())
    }

    /// Skip records for user exclusions
    pub fn exclusions(&self) -> impl Iterator<Item = &SkipRecord> {
        self.skipped.iter().filter(|s| !s.is_read_error())
    }
}
