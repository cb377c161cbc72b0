// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Analysis entries and reporters.
//!
//! The parser streams one [`AnalysisEntry`] for essentially every token it
//! classifies: diagnostics (`Error`/`Warning`/`Info`) and semantic-highlight
//! entries (`Keyword`, `Symbol`, literals, `Declaration`, `Reference`,
//! `Package`). This is part of the parser's contract, not optional
//! instrumentation — an IDE gets highlighting and diagnostics from the same
//! single pass that builds the AST.
//!
//! An [`AnalysisReporter`] is the sink for that stream. Two implementations
//! live here: [`CollectingReporter`] buffers entries in memory (tests, IDE
//! integration) and [`ConsoleAnalysisReporter`] renders one line per entry
//! to a writer.

use std::fmt;
use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use ecow::EcoString;

use crate::source_analysis::SourcePosition;

/// The kind of an analysis entry.
///
/// The first three kinds are diagnostics with a severity; the rest classify
/// source spans for semantic highlighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnalysisEntryKind {
    Error,
    Warning,
    Info,
    Keyword,
    Symbol,
    LiteralNumber,
    LiteralChar,
    LiteralString,
    Declaration,
    Reference,
    Package,
}

impl AnalysisEntryKind {
    /// Returns `true` for the diagnostic kinds.
    #[must_use]
    pub const fn is_diagnostic(self) -> bool {
        matches!(self, Self::Error | Self::Warning | Self::Info)
    }
}

impl fmt::Display for AnalysisEntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Error => "ERROR",
            Self::Warning => "WARNING",
            Self::Info => "INFO",
            Self::Keyword => "KEYWORD",
            Self::Symbol => "SYMBOL",
            Self::LiteralNumber => "LITERAL_NUMBER",
            Self::LiteralChar => "LITERAL_CHAR",
            Self::LiteralString => "LITERAL_STRING",
            Self::Declaration => "DECLARATION",
            Self::Reference => "REFERENCE",
            Self::Package => "PACKAGE",
        };
        f.write_str(text)
    }
}

/// One diagnostic/highlight record, created once and immutable thereafter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisEntry {
    kind: AnalysisEntryKind,
    position: SourcePosition,
    length: u32,
    info: Option<EcoString>,
}

impl AnalysisEntry {
    /// Creates an entry without a message.
    #[must_use]
    pub fn new(kind: AnalysisEntryKind, position: SourcePosition, length: u32) -> Self {
        Self {
            kind,
            position,
            length,
            info: None,
        }
    }

    /// Creates an entry carrying a message.
    #[must_use]
    pub fn with_info(
        kind: AnalysisEntryKind,
        position: SourcePosition,
        length: u32,
        info: impl Into<EcoString>,
    ) -> Self {
        Self {
            kind,
            position,
            length,
            info: Some(info.into()),
        }
    }

    /// Creates an `Error` diagnostic.
    #[must_use]
    pub fn error(position: SourcePosition, length: u32, message: impl Into<EcoString>) -> Self {
        Self::with_info(AnalysisEntryKind::Error, position, length, message)
    }

    /// Creates a `Warning` diagnostic.
    #[must_use]
    pub fn warning(position: SourcePosition, length: u32, message: impl Into<EcoString>) -> Self {
        Self::with_info(AnalysisEntryKind::Warning, position, length, message)
    }

    #[must_use]
    pub fn kind(&self) -> AnalysisEntryKind {
        self.kind
    }

    #[must_use]
    pub fn position(&self) -> SourcePosition {
        self.position
    }

    #[must_use]
    pub fn length(&self) -> u32 {
        self.length
    }

    #[must_use]
    pub fn info(&self) -> Option<&str> {
        self.info.as_deref()
    }
}

/// Sink for the parser's entry stream.
pub trait AnalysisReporter {
    fn report(&mut self, entry: AnalysisEntry);
}

/// Reporter that buffers every entry in memory.
#[derive(Debug, Default)]
pub struct CollectingReporter {
    entries: Vec<AnalysisEntry>,
}

impl CollectingReporter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all reported entries in report order.
    #[must_use]
    pub fn entries(&self) -> &[AnalysisEntry] {
        &self.entries
    }

    /// Returns the entries of one kind, in report order.
    pub fn entries_of_kind(
        &self,
        kind: AnalysisEntryKind,
    ) -> impl Iterator<Item = &AnalysisEntry> {
        self.entries.iter().filter(move |entry| entry.kind() == kind)
    }

    /// Returns the number of `Error`-kind entries.
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.entries_of_kind(AnalysisEntryKind::Error).count()
    }
}

impl AnalysisReporter for CollectingReporter {
    fn report(&mut self, entry: AnalysisEntry) {
        self.entries.push(entry);
    }
}

/// Reporter rendering one line per entry:
/// `[A] <KIND> <file>:<line>:<column> <info>`.
///
/// Newlines inside messages are escaped to two spaces so every entry stays
/// on a single line.
#[derive(Debug)]
pub struct ConsoleAnalysisReporter<W: Write> {
    file: Utf8PathBuf,
    out: W,
}

impl<W: Write> ConsoleAnalysisReporter<W> {
    /// Creates a reporter for `file` writing to `out`.
    #[must_use]
    pub fn new(file: &Utf8Path, out: W) -> Self {
        Self {
            file: file.to_owned(),
            out,
        }
    }
}

impl<W: Write> AnalysisReporter for ConsoleAnalysisReporter<W> {
    fn report(&mut self, entry: AnalysisEntry) {
        // A failing console write cannot be reported anywhere better.
        let _ = writeln!(self.out, "{}", render(&self.file, &entry));
    }
}

/// Renders one entry as a single line.
#[must_use]
pub fn render(file: &Utf8Path, entry: &AnalysisEntry) -> String {
    let mut line = format!(
        "[A] {} {}:{}:{}",
        entry.kind(),
        file,
        entry.position().line(),
        entry.position().column()
    );
    if let Some(info) = entry.info() {
        line.push(' ');
        line.push_str(&escape(info));
    }
    line
}

fn escape(text: &str) -> String {
    text.replace('\n', "  ")
}
