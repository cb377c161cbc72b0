// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Source analysis for Lumen: characters, tokens, and parsing.
//!
//! This module contains the full pipeline from raw source bytes to AST:
//!
//! 1. [`CharReader`] — buffered, lookahead-capable byte cursor with newline
//!    normalisation and [`SourcePosition`] tracking.
//! 2. [`Lexer`] — consumes the reader and produces a token sequence always
//!    terminated by exactly one [`TokenKind::EndOfFile`], plus a list of
//!    non-fatal [`LexError`]s.
//! 3. [`TokenCursor`] — bounded-lookahead reader over the finalised token
//!    sequence, used exclusively by the parser.
//! 4. [`Parser`](parser) — recursive descent over the cursor; builds the
//!    shared [`Root`](crate::ast::Root) and streams one analysis entry for
//!    essentially every token it classifies.
//!
//! # Error Handling
//!
//! Lexical errors never stop the lexer and structural errors never stop the
//! parser; both are collected or reported and lexing/parsing continues. The
//! only fatal error in the pipeline is [`ReadError`], raised when the
//! underlying byte stream fails, which aborts the compilation unit.

mod char_reader;
mod error;
mod lexer;
pub mod parser;
mod position;
mod token;
mod token_cursor;

#[cfg(test)]
mod lexer_property_tests;

pub use char_reader::{CharReader, ReadError};
pub use error::{LexError, LexErrorKind};
pub use lexer::{lex, Lexer};
pub use parser::parse;
pub use position::SourcePosition;
pub use token::{Token, TokenKind};
pub use token_cursor::TokenCursor;
