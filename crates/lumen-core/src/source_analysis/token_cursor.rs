// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Bounded-lookahead reader over a finalised token sequence.
//!
//! [`TokenCursor`] is the parser's only view of the token stream. The
//! sequence it reads is terminated by an end-of-file token (the lexer
//! guarantees this), and all lookahead past the end clamps to that terminal
//! token, so the parser can peek arbitrarily far without bounds checks.

use super::token::{Token, TokenKind};

/// A forward-only cursor over a lexed token sequence.
///
/// # Examples
///
/// ```
/// use lumen_core::source_analysis::{lex, TokenCursor, TokenKind};
///
/// let (tokens, _) = lex("pkg main;");
/// let mut cursor = TokenCursor::new(&tokens);
/// assert_eq!(cursor.peek(0).kind(), TokenKind::Package);
/// assert_eq!(cursor.consume(0).kind(), TokenKind::Package);
/// ```
#[derive(Debug)]
pub struct TokenCursor<'t> {
    tokens: &'t [Token],
    reading_index: usize,
}

impl<'t> TokenCursor<'t> {
    /// Creates a cursor over a token sequence.
    ///
    /// # Panics
    ///
    /// Panics if `tokens` is empty; the lexer always emits at least the
    /// end-of-file token.
    #[must_use]
    pub fn new(tokens: &'t [Token]) -> Self {
        assert!(
            !tokens.is_empty(),
            "a lexed token sequence always ends with an end-of-file token"
        );
        Self {
            tokens,
            reading_index: 0,
        }
    }

    /// Peeks at the token `offset` positions ahead without consuming it.
    ///
    /// Lookahead past the end of the sequence clamps to the terminal
    /// end-of-file token.
    #[must_use]
    pub fn peek(&self, offset: usize) -> &'t Token {
        let index = (self.reading_index + offset).min(self.tokens.len() - 1);
        &self.tokens[index]
    }

    /// Skips `offset` tokens, then consumes and returns the next one.
    ///
    /// `consume(0)` consumes and returns the current token. The cursor never
    /// advances past the terminal end-of-file token.
    pub fn consume(&mut self, offset: usize) -> &'t Token {
        let token = self.peek(offset);
        self.reading_index = (self.reading_index + offset + 1).min(self.tokens.len() - 1);
        token
    }

    /// Consumes the current token only if it has the given kind.
    pub fn consume_if_matches(&mut self, kind: TokenKind) -> bool {
        if self.peek(0).kind() == kind {
            self.consume(0);
            return true;
        }
        false
    }

    /// Returns `true` once the cursor rests on the end-of-file token.
    #[must_use]
    pub fn end_of_file_reached(&self) -> bool {
        self.peek(0).kind().is_end_of_file()
    }
}

#[cfg(test)]
mod tests {
    use super::super::lexer::lex;
    use super::*;

    #[test]
    fn peek_and_consume_walk_the_sequence() {
        let (tokens, _) = lex("pkg main;");
        let mut cursor = TokenCursor::new(&tokens);
        assert_eq!(cursor.peek(0).kind(), TokenKind::Package);
        assert_eq!(cursor.peek(1).kind(), TokenKind::Identifier);
        assert_eq!(cursor.consume(0).kind(), TokenKind::Package);
        assert_eq!(cursor.consume(0).kind(), TokenKind::Identifier);
        assert_eq!(cursor.consume(0).kind(), TokenKind::EndStatement);
        assert!(cursor.end_of_file_reached());
    }

    #[test]
    fn consume_with_offset_skips_tokens() {
        let (tokens, _) = lex("a b c d");
        let mut cursor = TokenCursor::new(&tokens);
        // Skip `a` and `b`, consume `c`.
        let token = cursor.consume(2);
        assert!(token.lexeme_is("c"));
        assert!(cursor.peek(0).lexeme_is("d"));
    }

    #[test]
    fn lookahead_past_end_clamps_to_end_of_file() {
        let (tokens, _) = lex("x");
        let mut cursor = TokenCursor::new(&tokens);
        assert_eq!(cursor.peek(100).kind(), TokenKind::EndOfFile);
        cursor.consume(0);
        assert!(cursor.end_of_file_reached());
        // Consuming at end of file keeps returning the terminal token.
        assert_eq!(cursor.consume(0).kind(), TokenKind::EndOfFile);
        assert_eq!(cursor.consume(50).kind(), TokenKind::EndOfFile);
        assert!(cursor.end_of_file_reached());
    }

    #[test]
    fn consume_if_matches_only_advances_on_match() {
        let (tokens, _) = lex("pkg main");
        let mut cursor = TokenCursor::new(&tokens);
        assert!(!cursor.consume_if_matches(TokenKind::Import));
        assert!(cursor.consume_if_matches(TokenKind::Package));
        assert_eq!(cursor.peek(0).kind(), TokenKind::Identifier);
    }

    #[test]
    #[should_panic(expected = "end-of-file token")]
    fn empty_sequence_is_rejected() {
        let _ = TokenCursor::new(&[]);
    }
}
