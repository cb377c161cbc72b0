// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Property-based tests for the Lumen lexer.
//!
//! These tests use `proptest` to verify lexer invariants over generated inputs:
//!
//! 1. **Lexer never panics** — arbitrary string input always produces tokens
//! 2. **EOF is always last** — the token sequence ends with exactly one EOF
//! 3. **Positions are monotone** — token start offsets never decrease
//! 4. **Token spans within input** — `position + length <= input.len()`
//! 5. **Lexer is deterministic** — same input always produces same tokens
//! 6. **Valid fragments produce no errors** — known-valid inputs lex cleanly

use proptest::prelude::*;

use super::lexer::lex;
use super::token::TokenKind;

// ============================================================================
// Generators
// ============================================================================

/// Known-valid single-token fragments that should lex without errors.
const VALID_SINGLE_TOKENS: &[&str] = &[
    "42",
    "3.14",
    "105_788",
    "0x758a",
    "0b1010",
    "\"hello\"",
    "'c'",
    "'\\n'",
    "true",
    "false",
    "pkg",
    "import",
    "entrypoint",
    "mut:",
    "opt:",
    "auto:",
    "x",
    "myVariable",
    "::",
    "{",
    "}",
    "(",
    ")",
    "<",
    ">",
    ";",
    ",",
    "*",
    ".",
];

/// Multi-token valid fragments that should lex cleanly.
const VALID_FRAGMENTS: &[&str] = &[
    "pkg main::sample;",
    "import other::pkg;",
    "public entrypoint main { ret; }",
    "exclusive{ extends base::type } class",
    "private const x",
    "\"a\" \"b\"",
    "mut: counter",
    "ret result;",
];

fn valid_single_token() -> impl Strategy<Value = String> {
    prop::sample::select(VALID_SINGLE_TOKENS).prop_map(std::string::ToString::to_string)
}

fn valid_fragment() -> impl Strategy<Value = String> {
    prop::sample::select(VALID_FRAGMENTS).prop_map(std::string::ToString::to_string)
}

// ============================================================================
// Property tests
// ============================================================================

/// Default is 512 cases; override via `PROPTEST_CASES` env var for nightly runs.
fn proptest_config() -> ProptestConfig {
    let default = ProptestConfig::default();
    ProptestConfig {
        cases: default.cases.max(512),
        ..default
    }
}

proptest! {
    #![proptest_config(proptest_config())]

    /// Property 1: Lexer never panics on arbitrary string input.
    #[test]
    fn lexer_never_panics(input in "\\PC{0,500}") {
        let _ = lex(&input);
    }

    /// Property 2: The token sequence ends with exactly one EOF token.
    #[test]
    fn eof_always_last_and_unique(input in "\\PC{0,500}") {
        let (tokens, _) = lex(&input);
        prop_assert!(!tokens.is_empty(), "lex should never return an empty sequence");
        prop_assert!(
            tokens.last().unwrap().kind().is_end_of_file(),
            "Last token should be EOF, got {:?} for input {:?}",
            tokens.last().unwrap().kind(),
            input,
        );
        let eof_count = tokens
            .iter()
            .filter(|t| t.kind().is_end_of_file())
            .count();
        prop_assert_eq!(eof_count, 1, "Expected exactly one EOF for input {:?}", input);
    }

    /// Property 3: Token start offsets are monotonically non-decreasing.
    #[test]
    fn token_positions_monotone(input in "\\PC{0,500}") {
        let (tokens, _) = lex(&input);
        for window in tokens.windows(2) {
            prop_assert!(
                window[1].position() >= window[0].position(),
                "Positions went backwards: {:?} then {:?} for input {:?}",
                window[0].position(),
                window[1].position(),
                input,
            );
        }
    }

    /// Property 4: All token spans lie within the input.
    #[test]
    fn token_spans_within_input(input in "\\PC{0,500}") {
        let (tokens, _) = lex(&input);
        let input_len = u32::try_from(input.len()).unwrap_or(u32::MAX);
        for token in &tokens {
            let end = token.position().offset_in_file + token.length();
            prop_assert!(
                end <= input_len,
                "Token {:?} span end {} exceeds input length {} for input {:?}",
                token.kind(),
                end,
                input_len,
                input,
            );
        }
    }

    /// Property 5: Lexer is deterministic — same input, same tokens and errors.
    #[test]
    fn lexer_deterministic(input in "\\PC{0,200}") {
        let (tokens1, errors1) = lex(&input);
        let (tokens2, errors2) = lex(&input);
        prop_assert_eq!(tokens1, tokens2, "Tokens differ for input {:?}", input);
        prop_assert_eq!(errors1, errors2, "Errors differ for input {:?}", input);
    }

    /// Property 6: Known-valid single tokens produce no lexical errors.
    #[test]
    fn valid_tokens_no_errors(input in valid_single_token()) {
        let (_, errors) = lex(&input);
        prop_assert!(
            errors.is_empty(),
            "Valid input {:?} produced lexical errors {:?}",
            input,
            errors,
        );
    }

    /// Property 7: Known-valid fragments produce no lexical errors.
    #[test]
    fn valid_fragments_no_errors(input in valid_fragment()) {
        let (_, errors) = lex(&input);
        prop_assert!(
            errors.is_empty(),
            "Valid fragment {:?} produced lexical errors {:?}",
            input,
            errors,
        );
    }

    /// Property 8: Non-whitespace input produces at least one non-EOF token.
    #[test]
    fn nonempty_input_produces_tokens(input in "[^ \t\n\r]{1,100}") {
        let (tokens, _) = lex(&input);
        let non_eof = tokens
            .iter()
            .filter(|t| !t.kind().is_end_of_file())
            .count();
        prop_assert!(
            non_eof > 0,
            "Non-whitespace input {:?} produced zero tokens (excluding EOF)",
            input,
        );
    }

    /// Property 9: Number literals never carry `_` in their lexeme.
    #[test]
    fn number_lexemes_have_separators_stripped(input in "[0-9][0-9_]{0,20}") {
        let (tokens, _) = lex(&input);
        for token in &tokens {
            if token.kind() == TokenKind::LiteralNumber {
                prop_assert!(
                    !token.lexeme().unwrap_or_default().contains('_'),
                    "Number lexeme still contains `_` for input {:?}",
                    input,
                );
            }
        }
    }

    /// Property 10: All lexical-error spans lie within the input.
    #[test]
    fn error_spans_within_input(input in "\\PC{0,500}") {
        let (_, errors) = lex(&input);
        let input_len = u32::try_from(input.len()).unwrap_or(u32::MAX);
        for error in &errors {
            let end = error.position().offset_in_file + error.length();
            prop_assert!(
                end <= input_len,
                "Error {:?} span end {} exceeds input length {} for input {:?}",
                error.kind(),
                end,
                input_len,
                input,
            );
        }
    }
}
