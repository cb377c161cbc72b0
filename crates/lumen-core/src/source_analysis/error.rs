// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Lexical errors.
//!
//! These errors are non-fatal: the lexer records one, repairs or skips the
//! offending input, and keeps producing tokens. They are collected in source
//! order and surfaced to the analysis reporter by the compilation driver.

use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

use super::SourcePosition;

/// The kind of a lexical error.
///
/// Messages are full sentences including a suggested fix, since they are
/// shown to users verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Diagnostic)]
pub enum LexErrorKind {
    #[error("Unterminated string literal. Use double quotes (`\"`) to start and end string literals.")]
    UnterminatedString,

    #[error("Unterminated character literal. Use `'` to start and end character literals.")]
    UnterminatedCharacter,

    #[error("Unknown escape sequence `\\{0}`. Valid ones are `\\n`, `\\r`, `\\t`, `\\0`, `\\\"`, `\\'`, and `\\\\`.")]
    UnknownEscape(char),

    #[error("Newlines in string literals are not allowed. Use `\\n` for newline characters in strings. If the literal needs splitting across multiple lines, terminate the string literal and start a new one on the next line.")]
    NewlineInString,

    #[error("Newline in character literal is not allowed. Use `\\n` for newline characters.")]
    NewlineInCharacter,

    #[error("Empty character literals are not allowed. A character literal must contain exactly one character.")]
    EmptyCharacterLiteral,

    #[error("Character literal too long. A character literal must contain exactly one character.")]
    CharacterLiteralTooLong,

    #[error("Number base prefix (`0x`/`0b`) without digits. The number literal must have at least one digit.")]
    PrefixWithoutDigits,

    #[error("Illegal digits in number literal. Normal (decimal) number notation uses digits 0-9, hexadecimal number notation (prefix `0x`) uses digits 0-9 and letters A-F (upper/lower case), binary number notation (prefix `0b`) uses digits 0 and 1.")]
    IllegalDigits,

    #[error("Multiple decimal points in a number literal.")]
    MultipleDecimalPoints,

    #[error("Decimal point in non decimal literal. Only base 10 number literals can have a decimal point.")]
    DecimalPointInNonDecimalLiteral,
}

/// A lexical error with the source span it covers.
///
/// Point defects (an illegal digit, an unknown escape) span the offending
/// byte(s); literal-level defects (unterminated or over-long literals) span
/// the whole literal.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
#[error("{kind}")]
pub struct LexError {
    kind: LexErrorKind,
    #[label("here")]
    span: SourceSpan,
    position: SourcePosition,
    length: u32,
}

impl LexError {
    /// Creates a new lexical error covering `length` bytes from `position`.
    #[must_use]
    pub fn new(kind: LexErrorKind, position: SourcePosition, length: u32) -> Self {
        let length = length.max(1);
        Self {
            kind,
            span: (position.offset_in_file as usize, length as usize).into(),
            position,
            length,
        }
    }

    /// Returns the kind of this error.
    #[must_use]
    pub fn kind(&self) -> LexErrorKind {
        self.kind
    }

    /// Returns the position at which the error starts.
    #[must_use]
    pub fn position(&self) -> SourcePosition {
        self.position
    }

    /// Returns the number of source bytes the error covers (at least 1).
    #[must_use]
    pub fn length(&self) -> u32 {
        self.length
    }
}
