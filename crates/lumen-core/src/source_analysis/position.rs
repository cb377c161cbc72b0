// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Source location tracking.
//!
//! Every token and analysis entry carries a [`SourcePosition`] recorded at
//! creation time. Positions are byte-based and never change once recorded.

/// A position in a source file, in bytes.
///
/// Positions are monotonically non-decreasing as the character reader
/// advances. Tabs are not expanded; `offset_in_line` is a byte offset, not a
/// visual column.
///
/// # Examples
///
/// ```
/// use lumen_core::source_analysis::SourcePosition;
///
/// let position = SourcePosition::new(12, 1, 4);
/// assert_eq!(position.line(), 2);
/// assert_eq!(position.column(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct SourcePosition {
    /// 0-based absolute byte offset from the start of the file.
    pub offset_in_file: u32,
    /// Number of newline characters read so far (0 for the first line).
    pub newlines_count: u32,
    /// 0-based byte offset from the start of the current line.
    pub offset_in_line: u32,
}

impl SourcePosition {
    /// Creates a new source position.
    #[must_use]
    pub const fn new(offset_in_file: u32, newlines_count: u32, offset_in_line: u32) -> Self {
        Self {
            offset_in_file,
            newlines_count,
            offset_in_line,
        }
    }

    /// Returns the 1-based line number.
    #[must_use]
    pub const fn line(self) -> u32 {
        self.newlines_count + 1
    }

    /// Returns the 1-based column number (in bytes, tabs not expanded).
    #[must_use]
    pub const fn column(self) -> u32 {
        self.offset_in_line + 1
    }
}

impl From<SourcePosition> for miette::SourceSpan {
    fn from(position: SourcePosition) -> Self {
        (position.offset_in_file as usize, 1).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_and_column_are_one_based() {
        let position = SourcePosition::new(0, 0, 0);
        assert_eq!(position.line(), 1);
        assert_eq!(position.column(), 1);

        let position = SourcePosition::new(42, 3, 7);
        assert_eq!(position.line(), 4);
        assert_eq!(position.column(), 8);
    }

    #[test]
    fn positions_order_by_file_offset() {
        let earlier = SourcePosition::new(5, 0, 5);
        let later = SourcePosition::new(6, 1, 0);
        assert!(earlier < later);
    }
}
