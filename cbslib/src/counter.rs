//! Line counting and extension extraction.
//!
//! A line of code is any line with at least one byte once the line break
//! (`\n` or `\r\n`) is removed. Whitespace is not trimmed, so a line holding
//! only spaces counts.

use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, Read};
use std::path::{Path, MAIN_SEPARATOR};

use crate::stats::NULL_EXTENSION;

/// Count non-empty lines in a reader.
pub fn count_lines<R: Read>(reader: R) -> io::Result<u64> {
    let mut reader = BufReader::new(reader);
    let mut line = Vec::new();
    let mut count = 0;

    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            break;
        }
        if line.last() == Some(&b'\n') {
            line.pop();
        }
        if line.last() == Some(&b'\r') {
            line.pop();
        }
        if !line.is_empty() {
            count += 1;
        }
    }

    Ok(count)
}

/// Count non-empty lines in the file at `path`.
///
/// Only regular files (or symlinks to them) are opened. Anything else is an
/// error, since opening a FIFO or device can block forever.
pub fn count_file_lines(path: impl AsRef<Path>) -> io::Result<u64> {
    let path = path.as_ref();
    if !fs::metadata(path)?.is_file() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "not a regular file",
        ));
    }
    count_lines(File::open(path)?)
}

/// Extract the extension of a file path.
///
/// The extension is whatever follows the last `.` of the final path
/// segment, so `.gitignore` yields `gitignore` and `file.` yields an empty
/// string. Paths with no `.` in their final segment yield `"NULL"`.
///
/// The path is searched as raw bytes. An extension that is not valid UTF-8
/// is written with its invalid bytes escaped as `\xNN`, so distinct byte
/// sequences keep distinct tallies.
pub fn extension_of(path: &Path) -> String {
    let bytes = path.as_os_str().as_encoded_bytes();
    let last_separator = bytes
        .iter()
        .rposition(|&b| b == b'/' || b == MAIN_SEPARATOR as u8);
    let last_dot = bytes.iter().rposition(|&b| b == b'.');

    let extension = match (last_dot, last_separator) {
        (Some(dot), Some(sep)) if dot > sep => &bytes[dot + 1..],
        (Some(dot), None) => &bytes[dot + 1..],
        _ => return NULL_EXTENSION.to_string(),
    };

    match std::str::from_utf8(extension) {
        Ok(extension) => extension.to_string(),
        Err(_) => extension.escape_ascii().to_string(),
    }
}
