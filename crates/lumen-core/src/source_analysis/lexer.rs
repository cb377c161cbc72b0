// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! The Lumen lexer.
//!
//! Converts the byte stream of one compilation unit into a token sequence.
//! The lexer is error-tolerant: every malformed construct produces a
//! [`LexError`] and a best-effort token, and lexing continues. The produced
//! sequence is always terminated by exactly one [`TokenKind::EndOfFile`]
//! token, even for empty input.
//!
//! Lexical structure:
//! - Words start with an ASCII letter and continue with letters, digits, and
//!   underscores. A trailing `:` joins the word only when the combined
//!   spelling is a keyword (`mut:`, `opt:`, `auto:`), so `a::b` still lexes
//!   as identifier, `::`, identifier.
//! - Numbers are decimal, hexadecimal (`0x`), or binary (`0b`), with `_`
//!   allowed as a readability separator and stripped from the lexeme.
//! - String literals are double-quoted; adjacent whitespace-separated string
//!   literals merge into a single token. Character literals are
//!   single-quoted and must contain exactly one character.
//! - `::` and the structural single characters have dedicated kinds; any
//!   other character becomes a [`TokenKind::CustomToken`].

use std::io::Read;

use ecow::EcoString;

use super::char_reader::{CharReader, ReadError};
use super::error::{LexError, LexErrorKind};
use super::position::SourcePosition;
use super::token::{Token, TokenKind};

/// The notation of a number literal, decided by its prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NumberNotation {
    Decimal,
    Hexadecimal,
    Binary,
}

impl NumberNotation {
    fn allows_digit(self, byte: u8) -> bool {
        match self {
            Self::Decimal => byte.is_ascii_digit(),
            Self::Hexadecimal => byte.is_ascii_hexdigit(),
            Self::Binary => byte == b'0' || byte == b'1',
        }
    }
}

/// Lexes an in-memory source string.
///
/// Convenience entry point for tests and tools; [`Lexer`] itself reads from
/// any byte stream.
#[must_use]
pub fn lex(source: &str) -> (Vec<Token>, Vec<LexError>) {
    let mut lexer = Lexer::new(CharReader::new(source.as_bytes()));
    // Reading from an in-memory buffer cannot fail.
    if let Err(error) = lexer.run() {
        unreachable!("in-memory read failed: {error}");
    }
    (lexer.take_tokens(), lexer.take_errors())
}

/// Streaming lexer over a [`CharReader`].
///
/// # Examples
///
/// ```
/// use lumen_core::source_analysis::{lex, TokenKind};
///
/// let (tokens, errors) = lex("pkg main;");
/// assert!(errors.is_empty());
/// assert_eq!(tokens.last().map(lumen_core::source_analysis::Token::kind),
///            Some(TokenKind::EndOfFile));
/// ```
#[derive(Debug)]
pub struct Lexer<R: Read> {
    reader: CharReader<R>,
    tokens: Vec<Token>,
    errors: Vec<LexError>,
}

impl<R: Read> Lexer<R> {
    /// Creates a lexer over the given reader.
    #[must_use]
    pub fn new(reader: CharReader<R>) -> Self {
        Self {
            reader,
            tokens: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Runs the lexer to end of input.
    ///
    /// Appends the terminating [`TokenKind::EndOfFile`] token. Only a failure
    /// of the underlying byte stream aborts lexing.
    pub fn run(&mut self) -> Result<(), ReadError> {
        loop {
            self.skip_whitespace()?;
            if self.reader.end_of_file_reached()? {
                break;
            }
            self.lex_next()?;
        }
        self.tokens
            .push(Token::new(TokenKind::EndOfFile, self.reader.source_position(), 0));
        Ok(())
    }

    /// Transfers ownership of the produced tokens.
    #[must_use]
    pub fn take_tokens(&mut self) -> Vec<Token> {
        std::mem::take(&mut self.tokens)
    }

    /// Transfers ownership of the collected lexical errors.
    #[must_use]
    pub fn take_errors(&mut self) -> Vec<LexError> {
        std::mem::take(&mut self.errors)
    }

    fn skip_whitespace(&mut self) -> Result<(), ReadError> {
        while let Some(byte) = self.reader.peek(0)? {
            if !is_space(byte) {
                break;
            }
            self.reader.consume(0)?;
        }
        Ok(())
    }

    fn lex_next(&mut self) -> Result<(), ReadError> {
        let Some(byte) = self.reader.peek(0)? else {
            return Ok(());
        };

        if byte.is_ascii_alphabetic() {
            return self.lex_word();
        }
        if byte.is_ascii_digit() {
            return self.lex_number();
        }
        if byte == b'"' {
            return self.lex_string();
        }
        if byte == b'\'' {
            return self.lex_character();
        }
        self.lex_symbol()
    }

    /// Lexes a keyword or identifier.
    fn lex_word(&mut self) -> Result<(), ReadError> {
        let start = self.reader.source_position();
        let mut word = EcoString::new();

        while let Some(byte) = self.reader.peek(0)? {
            if !byte.is_ascii_alphanumeric() && byte != b'_' {
                break;
            }
            self.reader.consume(0)?;
            word.push(char::from(byte));
        }

        // A trailing `:` belongs to the word only for colon-keywords such as
        // `mut:`; otherwise `a::b` would lex as `a:` `:` `b`.
        if self.reader.peek(0)? == Some(b':') {
            let mut with_colon = word.clone();
            with_colon.push(':');
            if TokenKind::from_keyword(&with_colon).is_some() {
                self.reader.consume(0)?;
                word = with_colon;
            }
        }

        let length = self.span_length(start);
        let token = match TokenKind::from_keyword(&word) {
            Some(kind) => Token::new(kind, start, length),
            None => Token::with_lexeme(TokenKind::Identifier, start, length, word),
        };
        self.tokens.push(token);
        Ok(())
    }

    /// Lexes a number literal in decimal, hexadecimal, or binary notation.
    ///
    /// The lexeme keeps the base prefix but has `_` separators stripped.
    /// Violations are recorded as lexical errors; a best-effort token is
    /// produced regardless.
    fn lex_number(&mut self) -> Result<(), ReadError> {
        let start = self.reader.source_position();
        let mut lexeme = EcoString::new();
        let mut notation = NumberNotation::Decimal;

        if self.reader.consume_all_if_next(b"0x")? {
            lexeme.push_str("0x");
            notation = NumberNotation::Hexadecimal;
        } else if self.reader.consume_all_if_next(b"0b")? {
            lexeme.push_str("0b");
            notation = NumberNotation::Binary;
        }

        let mut digits_seen = false;
        let mut decimal_point_seen = false;
        let mut illegal_digit_reported = false;

        while let Some(byte) = self.reader.peek(0)? {
            if !byte.is_ascii_alphanumeric() && byte != b'.' && byte != b'_' {
                break;
            }
            let position = self.reader.source_position();
            self.reader.consume(0)?;

            if byte == b'_' {
                continue;
            }
            if byte == b'.' {
                if notation != NumberNotation::Decimal {
                    self.errors.push(LexError::new(
                        LexErrorKind::DecimalPointInNonDecimalLiteral,
                        position,
                        1,
                    ));
                } else if decimal_point_seen {
                    self.errors
                        .push(LexError::new(LexErrorKind::MultipleDecimalPoints, position, 1));
                }
                decimal_point_seen = true;
                lexeme.push('.');
                continue;
            }
            if notation.allows_digit(byte) {
                digits_seen = true;
            } else if !illegal_digit_reported {
                // One report per literal, at the first offending byte.
                self.errors
                    .push(LexError::new(LexErrorKind::IllegalDigits, position, 1));
                illegal_digit_reported = true;
            }
            lexeme.push(char::from(byte));
        }

        if notation != NumberNotation::Decimal && !digits_seen {
            let length = self.span_length(start);
            self.errors
                .push(LexError::new(LexErrorKind::PrefixWithoutDigits, start, length));
        }

        let length = self.span_length(start);
        self.tokens
            .push(Token::with_lexeme(TokenKind::LiteralNumber, start, length, lexeme));
        Ok(())
    }

    /// Lexes a string literal, merging whitespace-separated adjacent
    /// literals into a single token.
    fn lex_string(&mut self) -> Result<(), ReadError> {
        let start = self.reader.source_position();
        let mut text = EcoString::new();

        loop {
            // Invariant: positioned at an opening quote.
            self.reader.consume(0)?;
            self.read_text_literal(
                b'"',
                start,
                &mut text,
                LexErrorKind::UnterminatedString,
                LexErrorKind::NewlineInString,
            )?;

            // `"a" "b"` is one merged literal.
            let mut lookahead = 0;
            while self.reader.peek(lookahead)?.is_some_and(is_space) {
                lookahead += 1;
            }
            if self.reader.peek(lookahead)? == Some(b'"') {
                if lookahead > 0 {
                    self.reader.consume(lookahead - 1)?;
                }
                continue;
            }
            break;
        }

        let length = self.span_length(start);
        self.tokens
            .push(Token::with_lexeme(TokenKind::LiteralString, start, length, text));
        Ok(())
    }

    /// Lexes a character literal: exactly one (possibly escaped) character.
    fn lex_character(&mut self) -> Result<(), ReadError> {
        let start = self.reader.source_position();
        let mut text = EcoString::new();

        self.reader.consume(0)?;
        let terminated = self.read_text_literal(
            b'\'',
            start,
            &mut text,
            LexErrorKind::UnterminatedCharacter,
            LexErrorKind::NewlineInCharacter,
        )?;

        if terminated {
            let length = self.span_length(start);
            let mut chars = text.chars();
            match (chars.next(), chars.next()) {
                (None, _) => self.errors.push(LexError::new(
                    LexErrorKind::EmptyCharacterLiteral,
                    start,
                    length,
                )),
                (Some(_), Some(_)) => self.errors.push(LexError::new(
                    LexErrorKind::CharacterLiteralTooLong,
                    start,
                    length,
                )),
                (Some(_), None) => {}
            }
        }

        let length = self.span_length(start);
        self.tokens
            .push(Token::with_lexeme(TokenKind::LiteralCharacter, start, length, text));
        Ok(())
    }

    /// Reads the body of a text literal up to (and including) the closing
    /// quote, decoding escape sequences into `text`. `start` is the position
    /// of the literal's opening quote.
    ///
    /// Returns `false` when end of input was reached before the closing
    /// quote, after recording the unterminated-literal error over the whole
    /// literal span.
    fn read_text_literal(
        &mut self,
        quote: u8,
        start: SourcePosition,
        text: &mut EcoString,
        err_unterminated: LexErrorKind,
        err_newline: LexErrorKind,
    ) -> Result<bool, ReadError> {
        loop {
            let position = self.reader.source_position();
            let Some(byte) = self.reader.consume(0)? else {
                let length = self.span_length(start);
                self.errors.push(LexError::new(err_unterminated, start, length));
                return Ok(false);
            };

            if byte == quote {
                return Ok(true);
            }
            if byte == b'\n' {
                self.errors.push(LexError::new(err_newline, position, 1));
                text.push('\n');
                continue;
            }
            if byte == b'\\' {
                let Some(escaped) = self.reader.consume(0)? else {
                    let length = self.span_length(start);
                    self.errors.push(LexError::new(err_unterminated, start, length));
                    return Ok(false);
                };
                match decode_escape(escaped) {
                    Some(decoded) => text.push(decoded),
                    None => {
                        // Unknown escapes pass the character through
                        // verbatim. The span covers `\` and the character.
                        self.errors.push(LexError::new(
                            LexErrorKind::UnknownEscape(char::from(escaped)),
                            position,
                            2,
                        ));
                        text.push(char::from(escaped));
                    }
                }
                continue;
            }
            text.push(char::from(byte));
        }
    }

    /// Lexes `::`, a structural single character, or a custom token.
    fn lex_symbol(&mut self) -> Result<(), ReadError> {
        let start = self.reader.source_position();

        if self.reader.consume_all_if_next(b"::")? {
            self.tokens
                .push(Token::new(TokenKind::StaticAccessor, start, 2));
            return Ok(());
        }

        let Some(byte) = self.reader.consume(0)? else {
            return Ok(());
        };
        let token = match TokenKind::from_single_char(byte) {
            Some(kind) => Token::new(kind, start, 1),
            None => {
                let mut lexeme = EcoString::new();
                lexeme.push(char::from(byte));
                Token::with_lexeme(TokenKind::CustomToken, start, 1, lexeme)
            }
        };
        self.tokens.push(token);
        Ok(())
    }

    /// Returns the byte length of the span from `start` to the current
    /// reader position.
    fn span_length(&self, start: SourcePosition) -> u32 {
        self.reader
            .source_position()
            .offset_in_file
            .saturating_sub(start.offset_in_file)
    }
}

fn is_space(byte: u8) -> bool {
    byte == b' ' || byte == b'\t' || byte == b'\n'
}

fn decode_escape(byte: u8) -> Option<char> {
    match byte {
        b'n' => Some('\n'),
        b'r' => Some('\r'),
        b't' => Some('\t'),
        b'0' => Some('\0'),
        b'"' => Some('"'),
        b'\'' => Some('\''),
        b'\\' => Some('\\'),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
        tokens.iter().map(Token::kind).collect()
    }

    #[test]
    fn empty_input_produces_only_end_of_file() {
        let (tokens, errors) = lex("");
        assert!(errors.is_empty());
        assert_eq!(kinds(&tokens), vec![TokenKind::EndOfFile]);
        assert_eq!(tokens[0].position(), SourcePosition::new(0, 0, 0));
    }

    #[test]
    fn whitespace_only_input_produces_only_end_of_file() {
        let (tokens, errors) = lex("  \t\n  ");
        assert!(errors.is_empty());
        assert_eq!(kinds(&tokens), vec![TokenKind::EndOfFile]);
    }

    #[test]
    fn every_keyword_lexes_to_its_kind() {
        let table = [
            ("pkg", TokenKind::Package),
            ("import", TokenKind::Import),
            ("public", TokenKind::Public),
            ("private", TokenKind::Private),
            ("protected", TokenKind::Protected),
            ("exclusive", TokenKind::Exclusive),
            ("static", TokenKind::MemberStatic),
            ("const", TokenKind::MemberConst),
            ("external", TokenKind::MemberExternal),
            ("var", TokenKind::VarDeclaration),
            ("mut", TokenKind::MutableDeclaration),
            ("mut:", TokenKind::MutableReference),
            ("opt", TokenKind::OptionalDeclaration),
            ("opt:", TokenKind::OptionalReference),
            ("own", TokenKind::RefOwn),
            ("shared", TokenKind::RefShared),
            ("borrow", TokenKind::RefBorrow),
            ("class", TokenKind::Class),
            ("abstract", TokenKind::Abstract),
            ("interface", TokenKind::Interface),
            ("constructor", TokenKind::Constructor),
            ("super", TokenKind::Super),
            ("this", TokenKind::This),
            ("impl", TokenKind::Implements),
            ("extends", TokenKind::Extends),
            ("extendable", TokenKind::Extendable),
            ("final", TokenKind::Final),
            ("override", TokenKind::Override),
            ("copyable", TokenKind::Copyable),
            ("serialisable", TokenKind::Serialisable),
            ("true", TokenKind::True),
            ("false", TokenKind::False),
            ("entrypoint", TokenKind::Entrypoint),
            ("pure_function_set", TokenKind::PureFunctionSet),
            ("grammar_set", TokenKind::GrammarSet),
            ("compile_function", TokenKind::CompileFunction),
            ("auto:", TokenKind::AutoCall),
            ("void", TokenKind::Void),
            ("if", TokenKind::If),
            ("else", TokenKind::Else),
            ("for", TokenKind::For),
            ("for_each_in", TokenKind::ForEachIn),
            ("while", TokenKind::While),
            ("serialising", TokenKind::Serialising),
            ("ret", TokenKind::Return),
            ("move", TokenKind::Move),
            ("pass", TokenKind::Pass),
            ("copy", TokenKind::Copy),
        ];
        for (spelling, expected) in table {
            let (tokens, errors) = lex(spelling);
            assert!(errors.is_empty(), "{spelling}: {errors:?}");
            assert_eq!(
                kinds(&tokens),
                vec![expected, TokenKind::EndOfFile],
                "{spelling}"
            );
            assert_eq!(tokens[0].length() as usize, spelling.len(), "{spelling}");
        }
    }

    #[test]
    fn identifiers_carry_their_lexeme() {
        let (tokens, errors) = lex("counter _is not lexed_alone x9");
        assert!(errors.is_empty());
        // `_is` starts with an underscore, which is not a word start.
        assert!(tokens[0].lexeme_is("counter"));
        assert_eq!(tokens[1].kind(), TokenKind::CustomToken);
        assert!(tokens[1].lexeme_is("_"));
        assert!(tokens[2].lexeme_is("is"));
    }

    #[test]
    fn qualified_names_keep_their_colons() {
        let (tokens, errors) = lex("main::sample");
        assert!(errors.is_empty());
        assert_eq!(
            kinds(&tokens),
            vec![
                TokenKind::Identifier,
                TokenKind::StaticAccessor,
                TokenKind::Identifier,
                TokenKind::EndOfFile,
            ]
        );
        assert!(tokens[0].lexeme_is("main"));
        assert_eq!(tokens[1].length(), 2);
        assert!(tokens[2].lexeme_is("sample"));
    }

    #[test]
    fn colon_keyword_takes_only_one_colon() {
        let (tokens, errors) = lex("mut: x");
        assert!(errors.is_empty());
        assert_eq!(tokens[0].kind(), TokenKind::MutableReference);
        assert_eq!(tokens[0].length(), 4);
        assert_eq!(tokens[1].kind(), TokenKind::Identifier);
    }

    #[test]
    fn decimal_number_with_separators() {
        let (tokens, errors) = lex("105_788");
        assert!(errors.is_empty());
        assert_eq!(tokens[0].kind(), TokenKind::LiteralNumber);
        assert!(tokens[0].lexeme_is("105788"));
        assert_eq!(tokens[0].length(), 7);
    }

    #[test]
    fn hexadecimal_number_keeps_prefix_and_strips_separators() {
        let (tokens, errors) = lex("0x758a_0b71");
        assert!(errors.is_empty());
        assert!(tokens[0].lexeme_is("0x758a0b71"));
    }

    #[test]
    fn binary_number() {
        let (tokens, errors) = lex("0b1010_0001");
        assert!(errors.is_empty());
        assert!(tokens[0].lexeme_is("0b10100001"));
    }

    #[test]
    fn floating_point_number() {
        let (tokens, errors) = lex("3.14159");
        assert!(errors.is_empty());
        assert!(tokens[0].lexeme_is("3.14159"));
    }

    #[test]
    fn multiple_decimal_points_report_once_per_extra_point() {
        let (tokens, errors) = lex("70.1.7");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind(), LexErrorKind::MultipleDecimalPoints);
        // Best-effort token is still produced.
        assert!(tokens[0].lexeme_is("70.1.7"));
    }

    #[test]
    fn decimal_point_in_hexadecimal_literal() {
        let (_, errors) = lex("0xab.cd");
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors[0].kind(),
            LexErrorKind::DecimalPointInNonDecimalLiteral
        );
    }

    #[test]
    fn prefix_without_digits() {
        let (tokens, errors) = lex("0x");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind(), LexErrorKind::PrefixWithoutDigits);
        assert!(tokens[0].lexeme_is("0x"));
    }

    #[test]
    fn illegal_digits_reported_once_at_first_offender() {
        let (tokens, errors) = lex("12abc34");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind(), LexErrorKind::IllegalDigits);
        // Position of the `a`, the first non-decimal byte.
        assert_eq!(errors[0].position().offset_in_file, 2);
        assert!(tokens[0].lexeme_is("12abc34"));
    }

    #[test]
    fn binary_digits_outside_zero_and_one_are_illegal() {
        let (_, errors) = lex("0b102");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind(), LexErrorKind::IllegalDigits);
    }

    #[test]
    fn string_literal_with_escapes() {
        let (tokens, errors) = lex(r#""line\none\ttab \"quoted\" back\\slash""#);
        assert!(errors.is_empty());
        assert_eq!(tokens[0].kind(), TokenKind::LiteralString);
        assert!(tokens[0].lexeme_is("line\none\ttab \"quoted\" back\\slash"));
    }

    #[test]
    fn adjacent_string_literals_merge() {
        let (tokens, errors) = lex("\"strings\",\"test\" \"ing\"");
        assert!(errors.is_empty());
        assert_eq!(
            kinds(&tokens),
            vec![
                TokenKind::LiteralString,
                TokenKind::Comma,
                TokenKind::LiteralString,
                TokenKind::EndOfFile,
            ]
        );
        assert!(tokens[0].lexeme_is("strings"));
        assert!(tokens[2].lexeme_is("testing"));
    }

    #[test]
    fn strings_merge_across_newlines() {
        let (tokens, errors) = lex("\"a\"\n\t\"b\"");
        assert!(errors.is_empty());
        assert!(tokens[0].lexeme_is("ab"));
    }

    #[test]
    fn unknown_escape_passes_the_character_through() {
        let (tokens, errors) = lex(r#""a\qb""#);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind(), LexErrorKind::UnknownEscape('q'));
        assert!(tokens[0].lexeme_is("aqb"));
    }

    #[test]
    fn unterminated_string() {
        let (tokens, errors) = lex("\"abc");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind(), LexErrorKind::UnterminatedString);
        assert!(tokens[0].lexeme_is("abc"));
        assert_eq!(tokens.last().map(Token::kind), Some(TokenKind::EndOfFile));
    }

    #[test]
    fn raw_newline_in_string_is_an_error_but_lexing_continues() {
        let (tokens, errors) = lex("\"a\nb\"");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind(), LexErrorKind::NewlineInString);
        assert!(tokens[0].lexeme_is("a\nb"));
    }

    #[test]
    fn character_literals() {
        let (tokens, errors) = lex(r"'c' '\'' '\n'");
        assert!(errors.is_empty());
        assert_eq!(tokens.len(), 4);
        assert!(tokens[0].lexeme_is("c"));
        assert!(tokens[1].lexeme_is("'"));
        assert!(tokens[2].lexeme_is("\n"));
    }

    #[test]
    fn character_literal_too_long_reports_one_error() {
        let (tokens, errors) = lex("'ab'");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind(), LexErrorKind::CharacterLiteralTooLong);
        assert_eq!(tokens[0].kind(), TokenKind::LiteralCharacter);
    }

    #[test]
    fn empty_character_literal() {
        let (_, errors) = lex("''");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind(), LexErrorKind::EmptyCharacterLiteral);
    }

    #[test]
    fn unterminated_character_literal() {
        let (_, errors) = lex("'a");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind(), LexErrorKind::UnterminatedCharacter);
    }

    #[test]
    fn literal_level_errors_span_the_whole_literal() {
        let (_, errors) = lex("'ab'");
        assert_eq!(errors[0].kind(), LexErrorKind::CharacterLiteralTooLong);
        assert_eq!(errors[0].position().offset_in_file, 0);
        assert_eq!(errors[0].length(), 4);

        let (_, errors) = lex("\"abc");
        assert_eq!(errors[0].kind(), LexErrorKind::UnterminatedString);
        assert_eq!(errors[0].position().offset_in_file, 0);
        assert_eq!(errors[0].length(), 4);
    }

    #[test]
    fn unknown_escape_spans_backslash_and_character() {
        let (_, errors) = lex(r#""a\qb""#);
        assert_eq!(errors[0].kind(), LexErrorKind::UnknownEscape('q'));
        // The `\` sits at offset 2; the span covers `\q`.
        assert_eq!(errors[0].position().offset_in_file, 2);
        assert_eq!(errors[0].length(), 2);
    }

    #[test]
    fn static_accessor_spans_two_bytes() {
        let (tokens, _) = lex("::");
        assert_eq!(tokens[0].kind(), TokenKind::StaticAccessor);
        assert_eq!(tokens[0].length(), 2);
    }

    #[test]
    fn unknown_characters_become_custom_tokens() {
        let (tokens, errors) = lex("* . =");
        assert!(errors.is_empty());
        assert_eq!(tokens[0].kind(), TokenKind::CustomToken);
        assert!(tokens[0].lexeme_is("*"));
        assert!(tokens[1].lexeme_is("."));
        assert!(tokens[2].lexeme_is("="));
    }

    #[test]
    fn lone_colon_is_a_custom_token() {
        let (tokens, errors) = lex(": ::");
        assert!(errors.is_empty());
        assert_eq!(tokens[0].kind(), TokenKind::CustomToken);
        assert!(tokens[0].lexeme_is(":"));
        assert_eq!(tokens[1].kind(), TokenKind::StaticAccessor);
    }

    #[test]
    fn positions_and_lengths_cover_a_small_program() {
        let (tokens, errors) = lex("pkg main;\nentrypoint main {}");
        assert!(errors.is_empty());
        assert_eq!(tokens[0].position(), SourcePosition::new(0, 0, 0));
        assert_eq!(tokens[1].position(), SourcePosition::new(4, 0, 4));
        assert_eq!(tokens[2].position(), SourcePosition::new(8, 0, 8));
        // Second line starts after the newline.
        assert_eq!(tokens[3].position(), SourcePosition::new(10, 1, 0));
        assert_eq!(tokens[3].position().line(), 2);
        assert_eq!(tokens[3].position().column(), 1);
    }

    #[test]
    fn end_of_file_is_always_last_and_unique() {
        for source in ["", "pkg", "\"unterminated", "'x", "0x", "a b c ; {}"] {
            let (tokens, _) = lex(source);
            let eof_count = tokens
                .iter()
                .filter(|t| t.kind() == TokenKind::EndOfFile)
                .count();
            assert_eq!(eof_count, 1, "{source:?}");
            assert_eq!(
                tokens.last().map(Token::kind),
                Some(TokenKind::EndOfFile),
                "{source:?}"
            );
        }
    }
}
