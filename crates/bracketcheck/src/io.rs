//! File collaborator: turns a file on disk into scanner lines.
//!
//! Bytes are split on `\n` only. Invalid UTF-8 is replaced with U+FFFD rather
//! than rejected, so any file can be checked.

use std::{fs, path::Path, string::String, vec::Vec};

use bstr::ByteSlice;
use tracing::debug;

use crate::{Diagnostic, Error, ScanOptions, scan_with};

/// Splits raw file contents into lines without their `\n` terminators.
///
/// A trailing `\n` does not produce an extra empty line.
#[must_use]
pub fn split_lines(bytes: &[u8]) -> Vec<String> {
    bytes
        .lines_with_terminator()
        .map(|line| {
            let line = line.strip_suffix(b"\n").unwrap_or(line);
            line.to_str_lossy().into_owned()
        })
        .collect()
}

/// Reads `path` and splits it with [`split_lines`].
///
/// # Errors
///
/// Returns [`Error::Read`] if the file cannot be read.
pub fn read_lines(path: impl AsRef<Path>) -> Result<Vec<String>, Error> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let lines = split_lines(&bytes);
    debug!(
        path = %path.display(),
        bytes = bytes.len(),
        lines = lines.len(),
        "read input"
    );
    Ok(lines)
}

/// Reads and scans `path`.
///
/// # Errors
///
/// Returns [`Error::Read`] if the file cannot be read.
pub fn check_file(
    path: impl AsRef<Path>,
    options: ScanOptions,
) -> Result<Vec<Diagnostic>, Error> {
    Ok(scan_with(read_lines(path)?, options))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_keeps_carriage_returns_and_inner_empty_lines() {
        assert_eq!(split_lines(b"a\r\n\nb\n"), ["a\r", "", "b"]);
    }

    #[test]
    fn split_without_trailing_newline() {
        assert_eq!(split_lines(b"a\nb"), ["a", "b"]);
        assert!(split_lines(b"").is_empty());
    }

    #[test]
    fn split_replaces_invalid_utf8() {
        assert_eq!(split_lines(b"(\xFF)"), ["(\u{FFFD})"]);
    }
}
