//! Single-line replacement: load, validate, mutate, persist.
//!
//! The read phase finishes, and its handle is closed, before anything is
//! opened for writing. Every validation failure therefore leaves the file on
//! disk exactly as it was.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use lineswap_config::WriteMode;
use thiserror::Error;
use tracing::{debug, info};

use crate::document::Document;
use crate::persist::persist;

/// A 1-based line number as supplied by the caller.
///
/// The value is signed so that zero and negative input survive parsing and
/// are rejected by the same range check as an index past the end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LineIndex(i64);

impl LineIndex {
    /// Wraps a raw 1-based line number without validating it.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// The raw 1-based value.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }

    /// Zero-based position of this line in a document of `total` lines, or
    /// `None` when the index lies outside `[1, total]`.
    #[must_use]
    pub fn position(self, total: usize) -> Option<usize> {
        let position = usize::try_from(self.0.checked_sub(1)?).ok()?;
        (position < total).then_some(position)
    }
}

impl From<i64> for LineIndex {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for LineIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Failures raised while replacing a line.
#[derive(Debug, Error)]
pub enum ReplaceError {
    /// The source file could not be opened or read.
    #[error("cannot open file {}: {source}", .path.display())]
    FileOpen {
        /// File that was requested.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
    /// The requested line does not exist in the file.
    #[error("line number {line} out of range (1-{total}) in {}", .path.display())]
    LineOutOfRange {
        /// File that was requested.
        path: PathBuf,
        /// Line number the caller asked for.
        line: LineIndex,
        /// Number of lines the file actually holds.
        total: usize,
    },
    /// The destination could not be opened or fully written.
    #[error("cannot write to file {}: {source}", .path.display())]
    FileWrite {
        /// File that was being rewritten.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
}

/// Replaces single lines in files using a fixed [`WriteMode`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LineReplacer {
    write_mode: WriteMode,
}

impl LineReplacer {
    /// Builds a replacer that persists changes with `write_mode`.
    #[must_use]
    pub const fn new(write_mode: WriteMode) -> Self {
        Self { write_mode }
    }

    /// The persistence strategy used by this replacer.
    #[must_use]
    pub const fn write_mode(&self) -> WriteMode {
        self.write_mode
    }

    /// Replaces line `line` of the file at `path` with `new_content`
    /// followed by `\n`.
    ///
    /// Every other line, terminator included, is written back unchanged.
    /// `new_content` is not inspected; embedded newlines are written as-is.
    ///
    /// # Errors
    ///
    /// - [`ReplaceError::FileOpen`] when `path` cannot be read; nothing is
    ///   created or modified.
    /// - [`ReplaceError::LineOutOfRange`] when `line` is outside
    ///   `[1, total_lines]`; the file is untouched.
    /// - [`ReplaceError::FileWrite`] when the rewrite fails. In
    ///   [`WriteMode::InPlace`] the file may then be truncated or partially
    ///   written.
    pub fn replace_line(
        &self,
        path: &Path,
        line: LineIndex,
        new_content: &[u8],
    ) -> Result<(), ReplaceError> {
        let mut document = load(path)?;
        let total = document.len();
        debug!(path = %path.display(), total, "loaded document");

        let position = line
            .position(total)
            .ok_or_else(|| ReplaceError::LineOutOfRange {
                path: path.to_path_buf(),
                line,
                total,
            })?;
        document.replace(position, new_content);

        persist(&document, path, self.write_mode).map_err(|source| ReplaceError::FileWrite {
            path: path.to_path_buf(),
            source,
        })?;
        info!(
            path = %path.display(),
            line = line.get(),
            write_mode = %self.write_mode,
            "replaced line"
        );
        Ok(())
    }
}

/// Replaces line `line` of `path` using the default in-place rewrite.
///
/// # Errors
///
/// See [`LineReplacer::replace_line`].
pub fn replace_line(
    path: impl AsRef<Path>,
    line: impl Into<LineIndex>,
    new_content: impl AsRef<[u8]>,
) -> Result<(), ReplaceError> {
    LineReplacer::default().replace_line(path.as_ref(), line.into(), new_content.as_ref())
}

fn load(path: &Path) -> Result<Document, ReplaceError> {
    let bytes = fs::read(path).map_err(|source| ReplaceError::FileOpen {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Document::parse(&bytes))
}
