//! File access shared by both tools.
//!
//! Inputs are read whole and decoded as UTF-8; outputs are created (truncating)
//! behind a buffered writer. Every failure is mapped to a [`ResourceError`]
//! carrying the path involved.

use crate::error::ResourceError;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Line terminator used for every line written, following the platform convention.
pub const LINE_ENDING: &str = if cfg!(windows) { "\r\n" } else { "\n" };

/// Read a whole file as UTF-8.
pub fn read_text(path: &Path) -> Result<String, ResourceError> {
    let bytes = fs::read(path).map_err(|source| ResourceError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    String::from_utf8(bytes).map_err(|source| ResourceError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

/// A line-oriented output file.
///
/// The file is created on construction and closed when the value is dropped,
/// whether or not [`LineWriter::finish`] was reached.
pub struct LineWriter {
    path: PathBuf,
    inner: BufWriter<File>,
    lines: usize,
}

impl LineWriter {
    pub fn create(path: impl Into<PathBuf>) -> Result<Self, ResourceError> {
        let path = path.into();
        let file = File::create(&path).map_err(|source| ResourceError::Write {
            path: path.clone(),
            source,
        })?;
        Ok(Self {
            path,
            inner: BufWriter::new(file),
            lines: 0,
        })
    }

    /// Write `line` followed by [`LINE_ENDING`].
    pub fn write_line(&mut self, line: &str) -> Result<(), ResourceError> {
        self.inner
            .write_all(line.as_bytes())
            .and_then(|_| self.inner.write_all(LINE_ENDING.as_bytes()))
            .map_err(|source| ResourceError::Write {
                path: self.path.clone(),
                source,
            })?;
        self.lines += 1;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Flush buffered output, surfacing any write error, and close the file.
    pub fn finish(mut self) -> Result<usize, ResourceError> {
        self.inner.flush().map_err(|source| ResourceError::Write {
            path: self.path.clone(),
            source,
        })?;
        Ok(self.lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_text_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.txt");
        let err = read_text(&missing).unwrap_err();
        assert!(matches!(err, ResourceError::Read { .. }));
        assert_eq!(err.path(), missing.as_path());
    }

    #[test]
    fn test_read_text_rejects_invalid_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("latin1.txt");
        fs::write(&path, [b'c', b'a', b'f', 0xe9]).unwrap();
        assert!(matches!(
            read_text(&path),
            Err(ResourceError::Decode { .. })
        ));
    }

    #[test]
    fn test_line_writer_truncates_and_counts() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        fs::write(&path, "stale content that should disappear\n").unwrap();

        let mut writer = LineWriter::create(&path).unwrap();
        writer.write_line("one").unwrap();
        writer.write_line("two").unwrap();
        assert_eq!(writer.finish().unwrap(), 2);

        let expected = format!("one{LINE_ENDING}two{LINE_ENDING}");
        assert_eq!(fs::read_to_string(&path).unwrap(), expected);
    }

    #[test]
    fn test_line_writer_create_in_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("out.txt");
        assert!(matches!(
            LineWriter::create(&path),
            Err(ResourceError::Write { .. })
        ));
    }
}
