//! In-memory representation of a file as an ordered list of lines.
//!
//! Lines are byte runs split on `\n`. Each line keeps the terminator it was
//! read with, so writing an untouched [`Document`] back reproduces the input
//! byte for byte. No encoding is assumed; `\r\n` endings are simply lines
//! whose content ends in `\r`.

use std::io::{self, Write};

const NEWLINE: u8 = b'\n';

/// A single line together with the terminator it was read with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    bytes: Vec<u8>,
}

impl Line {
    /// Wraps raw bytes as read from disk, terminator included when present.
    #[must_use]
    pub const fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// Builds a replacement line: `content` followed by a single `\n`.
    ///
    /// Embedded newlines in `content` are kept verbatim.
    #[must_use]
    pub fn terminated(content: &[u8]) -> Self {
        let mut bytes = Vec::with_capacity(content.len() + 1);
        bytes.extend_from_slice(content);
        bytes.push(NEWLINE);
        Self { bytes }
    }

    /// The full line, terminator included.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// The line without its trailing `\n`.
    #[must_use]
    pub fn content(&self) -> &[u8] {
        self.bytes.strip_suffix(&[NEWLINE]).unwrap_or(&self.bytes)
    }

    /// Whether the line ends in `\n`. Only the final line of a file may not.
    #[must_use]
    pub fn has_terminator(&self) -> bool {
        self.bytes.last() == Some(&NEWLINE)
    }
}

/// Ordered lines of one file, held for the duration of a single edit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    lines: Vec<Line>,
}

impl Document {
    /// Splits `bytes` into lines, keeping each terminator.
    ///
    /// An empty buffer produces an empty document; a trailing run without
    /// `\n` becomes an unterminated final line.
    #[must_use]
    pub fn parse(bytes: &[u8]) -> Self {
        let lines = bytes
            .split_inclusive(|byte| *byte == NEWLINE)
            .map(|line| Line::new(line.to_vec()))
            .collect();
        Self { lines }
    }

    /// Number of lines in the document.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the document holds no lines at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// All lines in file order.
    #[must_use]
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// The line at a zero-based `position`, if present.
    #[must_use]
    pub fn line(&self, position: usize) -> Option<&Line> {
        self.lines.get(position)
    }

    /// Swaps the line at a zero-based `position` for `content + "\n"`.
    ///
    /// Returns the displaced line, or `None` when `position` is past the end,
    /// in which case the document is left untouched.
    pub fn replace(&mut self, position: usize, content: &[u8]) -> Option<Line> {
        let slot = self.lines.get_mut(position)?;
        Some(std::mem::replace(slot, Line::terminated(content)))
    }

    /// Writes every line, in order, to `writer`.
    ///
    /// # Errors
    ///
    /// Returns the first error reported by `writer`.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        for line in &self.lines {
            writer.write_all(line.as_bytes())?;
        }
        Ok(())
    }

    /// Concatenates every line into a single buffer.
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        let capacity = self.lines.iter().map(|line| line.as_bytes().len()).sum();
        let mut buffer = Vec::with_capacity(capacity);
        for line in &self.lines {
            buffer.extend_from_slice(line.as_bytes());
        }
        buffer
    }
}
