// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Lumen compiler core.
//!
//! This crate contains the front end of the Lumen compiler:
//! - Lexical analysis (byte stream → tokens, with non-fatal lexical errors)
//! - Parsing (tokens → best-effort AST, with streamed analysis entries)
//! - The AST node model and its visitor
//! - Analysis reporting (diagnostics and semantic-highlight entries)
//!
//! The front end is designed as an analysis service first and a batch
//! compiler second: the parser never aborts on malformed input, and every
//! structurally relevant token it consumes is mirrored to an
//! [`AnalysisReporter`](analyse::AnalysisReporter).

pub mod analyse;
pub mod ast;
pub mod ast_printer;
pub mod ast_walker;
pub mod compilation;
pub mod source_analysis;

/// Re-export commonly used types.
pub mod prelude {
    pub use crate::analyse::{AnalysisEntry, AnalysisEntryKind, AnalysisReporter};
    pub use crate::ast::{Access, Identifier, PackageMember, Root};
    pub use crate::compilation::Compilation;
    pub use crate::source_analysis::{SourcePosition, Token, TokenKind};
}
