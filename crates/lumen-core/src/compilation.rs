// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! The compilation driver.
//!
//! [`Compilation`] is the composition root of the front end: it owns the
//! shared [`Root`], runs lexer and parser over each source file, and feeds
//! lexical errors into the same [`AnalysisReporter`] stream the parser
//! writes to. Files are processed one at a time; the root is complete only
//! after every file of the compilation has been parsed.

use std::fs::File;
use std::io::Read;

use camino::{Utf8Path, Utf8PathBuf};
use miette::Diagnostic;
use thiserror::Error;

use crate::analyse::{AnalysisEntry, AnalysisReporter};
use crate::ast::Root;
use crate::source_analysis::{parse, CharReader, Lexer, ReadError};

/// A fatal per-file failure.
///
/// Lexical and structural problems are reported as analysis entries and
/// never abort a file; only failing to open or read the byte stream does.
#[derive(Debug, Error, Diagnostic)]
pub enum CompileError {
    #[error("failed to open source file `{path}`")]
    Open {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to read source file `{path}`")]
    Read {
        path: Utf8PathBuf,
        #[source]
        #[diagnostic_source]
        source: ReadError,
    },
}

/// One compilation: a shared root built up file by file.
#[derive(Debug, Default)]
pub struct Compilation {
    root: Root,
}

impl Compilation {
    /// Creates an empty compilation.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Lexes and parses one source file into the shared root.
    ///
    /// Lexical errors are reported as `Error` analysis entries through
    /// `reporter`, then parsing proceeds on the tokens produced. Returns the
    /// number of lexical errors; the only failure is an I/O error on the
    /// file itself.
    pub fn parse_file(
        &mut self,
        path: &Utf8Path,
        reporter: &mut dyn AnalysisReporter,
    ) -> Result<usize, CompileError> {
        let file = File::open(path).map_err(|source| CompileError::Open {
            path: path.to_owned(),
            source,
        })?;
        self.parse_source(path, file, reporter)
    }

    /// Lexes and parses one source byte stream into the shared root.
    ///
    /// `path` is used for error attribution and the root's file index only.
    pub fn parse_source(
        &mut self,
        path: &Utf8Path,
        source: impl Read,
        reporter: &mut dyn AnalysisReporter,
    ) -> Result<usize, CompileError> {
        let mut lexer = Lexer::new(CharReader::new(source));
        lexer.run().map_err(|source| CompileError::Read {
            path: path.to_owned(),
            source,
        })?;
        let tokens = lexer.take_tokens();
        let errors = lexer.take_errors();

        tracing::debug!(
            file = %path,
            tokens = tokens.len(),
            lexical_errors = errors.len(),
            "lexed compilation unit"
        );
        for error in &errors {
            reporter.report(AnalysisEntry::error(
                error.position(),
                error.length(),
                error.kind().to_string(),
            ));
        }

        parse(&tokens, path, &mut self.root, reporter);
        Ok(errors.len())
    }

    /// Returns the shared root.
    #[must_use]
    pub fn root(&self) -> &Root {
        &self.root
    }

    /// Builds the compilation. Code generation is not implemented; this
    /// logs and returns the message it would fail with.
    #[must_use]
    pub fn build(&self) -> &'static str {
        tracing::warn!(
            members = self.root.len(),
            "code generation is not implemented; nothing was built"
        );
        "code generation is not implemented yet"
    }
}
