// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! The Lumen parser.
//!
//! Recursive descent over a [`TokenCursor`]. The parser has two outputs,
//! produced in the same single pass:
//!
//! - A best-effort AST, inserted into the shared [`Root`] under each
//!   member's fully-qualified name.
//! - A stream of [`AnalysisEntry`] records mirrored to the
//!   [`AnalysisReporter`] for essentially every token the parser classifies:
//!   diagnostics plus semantic-highlight entries. This stream is part of the
//!   parser's contract, not optional instrumentation.
//!
//! # Error Recovery
//!
//! The parser never aborts on a grammar mismatch. Each structural defect is
//! reported once, then recovery substitutes a placeholder value or skips the
//! offending token(s), always making forward progress. Malformed input of
//! any shape therefore terminates with a best-effort AST and a complete
//! diagnostic list.
//!
//! File-level grammar:
//!
//! ```text
//! file        := package-decl (import | member)*
//! package-decl:= "pkg" qualified-name ";"
//! import      := "import" qualified-name ";"
//! member      := [access] member-kind ...
//! access      := "public" | "private" | "protected" | "exclusive" "{" patterns "}"
//! ```
//!
//! Of the member kinds, only `entrypoint` has a complete body grammar;
//! see [`declarations`] for the rest.

mod declarations;

use camino::Utf8Path;
use ecow::EcoString;

use crate::analyse::{AnalysisEntry, AnalysisEntryKind, AnalysisReporter};
use crate::ast::{Access, Identifier, PackageMemberPattern, PatternKind, Root};

use super::token::{Token, TokenKind};
use super::token_cursor::TokenCursor;

/// Structural error messages, shown to users verbatim.
pub(crate) mod messages {
    pub const MISSING_PACKAGE_DECLARATION: &str =
        "Missing package declaration. Every source file must start with `pkg <name>;`.";
    pub const MISSING_IDENTIFIER: &str = "Missing identifier.";
    pub const MISSING_END_STATEMENT: &str = "Missing `;` at the end of the statement.";
    pub const MALFORMED_IMPORT: &str =
        "Malformed import statement. An import is `import <package-name>;`.";
    pub const PROTECTED_AT_PACKAGE_LEVEL: &str =
        "`protected` is not valid at package-member level. Use `public`, `private`, or `exclusive` instead.";
    pub const MALFORMED_EXCLUSIVE_PATTERN: &str =
        "Malformed exclusive-access pattern. A pattern is `[* | ...] [pkg] <name> [extends <name>]`.";
    pub const UNTERMINATED_EXCLUSIVE_SPECIFIER: &str =
        "Unterminated exclusive-access specifier. Use `}` to close the pattern list.";
    pub const UNEXPECTED_FILE_LEVEL_TOKEN: &str =
        "Unexpected token at file level. Expected an access specifier or a package-member declaration.";
    pub const INVALID_DECLARATION_NAME: &str =
        "Invalid declaration name. A declaration name must be a plain identifier.";
    pub const INVALID_PARAMETER_DECLARATION: &str =
        "Invalid parameter declaration. A parameter is `[var] [opt] [own|shared|borrow] [mut] <type> <name>`.";
    pub const UNTERMINATED_PARAMETER_LIST: &str =
        "Unterminated parameter list. Use `)` to close the parameter list.";
    pub const MISSING_BODY: &str =
        "Missing body. An entrypoint body is enclosed in `{` and `}`.";
    pub const UNTERMINATED_BODY: &str = "Unterminated body. Use `}` to close the body.";
    pub const UNEXPECTED_TOKEN_IN_BODY: &str =
        "Unexpected token in entrypoint body. Only `ret [value];` statements are supported here.";
}

/// Parses one file's token sequence into `root`, streaming entries to
/// `reporter`.
///
/// Always terminates, never panics on malformed-but-lexed input; the token
/// sequence must end with the lexer's end-of-file token.
pub fn parse(
    tokens: &[Token],
    file: &Utf8Path,
    root: &mut Root,
    reporter: &mut dyn AnalysisReporter,
) {
    Parser::new(tokens, file, root, reporter).run();
}

/// Single-use parser state for one compilation unit.
pub struct Parser<'a> {
    cursor: TokenCursor<'a>,
    file: &'a Utf8Path,
    root: &'a mut Root,
    reporter: &'a mut dyn AnalysisReporter,
    /// The file's package, empty until the package declaration is parsed.
    package: Identifier,
}

impl<'a> Parser<'a> {
    /// Creates a parser over a lexed token sequence.
    ///
    /// # Panics
    ///
    /// Panics if `tokens` is empty; the lexer always emits at least the
    /// end-of-file token.
    #[must_use]
    pub fn new(
        tokens: &'a [Token],
        file: &'a Utf8Path,
        root: &'a mut Root,
        reporter: &'a mut dyn AnalysisReporter,
    ) -> Self {
        Self {
            cursor: TokenCursor::new(tokens),
            file,
            root,
            reporter,
            package: Identifier::default(),
        }
    }

    /// Parses the whole token sequence.
    pub fn run(&mut self) {
        tracing::debug!(file = %self.file, "parsing compilation unit");
        self.parse_package_declaration();
        while !self.cursor.end_of_file_reached() {
            if self.cursor.peek(0).kind() == TokenKind::Import {
                self.parse_import();
            } else {
                self.parse_member();
            }
        }
    }

    // ── File-level grammar ──────────────────────────────────────────────

    fn parse_package_declaration(&mut self) {
        if self.cursor.peek(0).kind() != TokenKind::Package {
            // One error for the whole missing declaration; nothing is
            // consumed, so an entrypoint-first file still parses.
            self.report_error(self.cursor.peek(0), messages::MISSING_PACKAGE_DECLARATION);
            return;
        }
        let keyword = self.cursor.consume(0);
        self.mirror(AnalysisEntryKind::Keyword, keyword);

        match self.try_parse_qualified_name(AnalysisEntryKind::Package) {
            Some(identifier) => self.package = identifier,
            None => self.report_error(self.cursor.peek(0), messages::MISSING_IDENTIFIER),
        }
        self.expect_end_statement();
    }

    fn parse_import(&mut self) {
        let keyword = self.cursor.consume(0);
        self.mirror(AnalysisEntryKind::Keyword, keyword);

        if self
            .try_parse_qualified_name(AnalysisEntryKind::Reference)
            .is_none()
        {
            self.report_error(self.cursor.peek(0), messages::MALFORMED_IMPORT);
            self.skip_to_statement_end();
            return;
        }
        self.expect_end_statement();
    }

    fn parse_member(&mut self) {
        let access = self.parse_access_specifier();
        match self.cursor.peek(0).kind() {
            TokenKind::Entrypoint => self.parse_entrypoint(access),
            TokenKind::PureFunctionSet
            | TokenKind::GrammarSet
            | TokenKind::CompileFunction
            | TokenKind::Class
            | TokenKind::Abstract
            | TokenKind::Interface => self.skip_unimplemented_member(),
            _ => {
                let token = self.cursor.consume(0);
                self.report_error(token, messages::UNEXPECTED_FILE_LEVEL_TOKEN);
            }
        }
    }

    // ── Access specifiers ───────────────────────────────────────────────

    fn parse_access_specifier(&mut self) -> Access {
        match self.cursor.peek(0).kind() {
            TokenKind::Public => {
                let keyword = self.cursor.consume(0);
                self.mirror(AnalysisEntryKind::Keyword, keyword);
                Access::Public
            }
            TokenKind::Private => {
                let keyword = self.cursor.consume(0);
                self.mirror(AnalysisEntryKind::Keyword, keyword);
                Access::Private
            }
            TokenKind::Protected => {
                let keyword = self.cursor.consume(0);
                self.mirror(AnalysisEntryKind::Keyword, keyword);
                self.report_error(keyword, messages::PROTECTED_AT_PACKAGE_LEVEL);
                Access::Private
            }
            TokenKind::Exclusive => self.parse_exclusive_specifier(),
            _ => Access::default(),
        }
    }

    fn parse_exclusive_specifier(&mut self) -> Access {
        let keyword = self.cursor.consume(0);
        self.mirror(AnalysisEntryKind::Keyword, keyword);

        let mut patterns = Vec::new();
        if !self.consume_symbol_if(TokenKind::CurlyOpen) {
            self.report_error(self.cursor.peek(0), messages::MALFORMED_EXCLUSIVE_PATTERN);
            return Access::Exclusive(patterns);
        }

        loop {
            match self.cursor.peek(0).kind() {
                TokenKind::CurlyClose => {
                    let close = self.cursor.consume(0);
                    self.mirror(AnalysisEntryKind::Symbol, close);
                    break;
                }
                TokenKind::EndOfFile => {
                    self.report_error(
                        self.cursor.peek(0),
                        messages::UNTERMINATED_EXCLUSIVE_SPECIFIER,
                    );
                    break;
                }
                TokenKind::Comma => {
                    let comma = self.cursor.consume(0);
                    self.mirror(AnalysisEntryKind::Symbol, comma);
                }
                _ => {
                    if let Some(pattern) = self.parse_exclusive_pattern() {
                        patterns.push(pattern);
                    }
                }
            }
        }
        Access::Exclusive(patterns)
    }

    /// Parses one pattern: `[* | ...] [pkg] <name> [extends <name>]`, or
    /// `extends <name>` for an inheritance-only pattern.
    fn parse_exclusive_pattern(&mut self) -> Option<PackageMemberPattern> {
        let mut kind = PatternKind::PackageMember;

        if self.peek_is_custom(0, "*") {
            let star = self.cursor.consume(0);
            self.mirror(AnalysisEntryKind::Symbol, star);
            kind = PatternKind::WithoutSubpackages;
        } else if self.peek_is_custom(0, ".")
            && self.peek_is_custom(1, ".")
            && self.peek_is_custom(2, ".")
        {
            for _ in 0..3 {
                let dot = self.cursor.consume(0);
                self.mirror(AnalysisEntryKind::Symbol, dot);
            }
            kind = PatternKind::WithSubpackages;
        }

        if self.cursor.peek(0).kind() == TokenKind::Package {
            let keyword = self.cursor.consume(0);
            self.mirror(AnalysisEntryKind::Keyword, keyword);
        }

        let identifier = if kind == PatternKind::PackageMember
            && self.cursor.peek(0).kind() == TokenKind::Extends
        {
            kind = PatternKind::InheritanceOnly;
            None
        } else {
            match self.try_parse_qualified_name(AnalysisEntryKind::Reference) {
                Some(identifier) => Some(identifier),
                None => {
                    // Leave `,`, `}`, and end of file for the pattern-list
                    // loop; consuming the list's terminator here would make
                    // recovery run past the specifier.
                    self.report_error(self.cursor.peek(0), messages::MALFORMED_EXCLUSIVE_PATTERN);
                    self.skip_to_pattern_boundary();
                    return None;
                }
            }
        };

        let mut supertype = None;
        if self.cursor.peek(0).kind() == TokenKind::Extends {
            let keyword = self.cursor.consume(0);
            self.mirror(AnalysisEntryKind::Keyword, keyword);
            supertype = self.try_parse_qualified_name(AnalysisEntryKind::Reference);
            if supertype.is_none() {
                self.report_error(self.cursor.peek(0), messages::MISSING_IDENTIFIER);
            }
        }

        Some(PackageMemberPattern {
            kind,
            identifier,
            supertype,
        })
    }

    // ── Shared helpers ──────────────────────────────────────────────────

    /// Parses a `::`-separated qualified name, or returns `None` without
    /// consuming anything when the next token cannot start one.
    fn try_parse_qualified_name(&mut self, part_kind: AnalysisEntryKind) -> Option<Identifier> {
        if self.cursor.peek(0).kind() != TokenKind::Identifier {
            return None;
        }

        let mut identifier = Identifier::default();
        loop {
            let part = self.cursor.consume(0);
            self.mirror(part_kind, part);
            identifier.push(part.lexeme().unwrap_or(Identifier::PLACEHOLDER));

            if self.cursor.peek(0).kind() != TokenKind::StaticAccessor {
                break;
            }
            let accessor = self.cursor.consume(0);
            self.mirror(AnalysisEntryKind::Symbol, accessor);
            if self.cursor.peek(0).kind() != TokenKind::Identifier {
                // `a::` with nothing usable after the accessor.
                self.report_error(self.cursor.peek(0), messages::MISSING_IDENTIFIER);
                break;
            }
        }
        Some(identifier)
    }

    fn expect_end_statement(&mut self) {
        if !self.consume_symbol_if(TokenKind::EndStatement) {
            self.report_error(self.cursor.peek(0), messages::MISSING_END_STATEMENT);
        }
    }

    /// Consumes tokens up to the next `,` or `}` pattern boundary, stopping
    /// early at end of file. The boundary token is left unconsumed.
    fn skip_to_pattern_boundary(&mut self) {
        loop {
            match self.cursor.peek(0).kind() {
                TokenKind::Comma | TokenKind::CurlyClose | TokenKind::EndOfFile => return,
                _ => {
                    self.cursor.consume(0);
                }
            }
        }
    }

    /// Consumes tokens up to and including the next `;`, stopping early at
    /// end of file.
    fn skip_to_statement_end(&mut self) {
        loop {
            match self.cursor.peek(0).kind() {
                TokenKind::EndOfFile => return,
                TokenKind::EndStatement => {
                    let end = self.cursor.consume(0);
                    self.mirror(AnalysisEntryKind::Symbol, end);
                    return;
                }
                _ => {
                    self.cursor.consume(0);
                }
            }
        }
    }

    /// Consumes the next token and mirrors it as a `Symbol` entry if it has
    /// the given kind.
    fn consume_symbol_if(&mut self, kind: TokenKind) -> bool {
        if self.cursor.peek(0).kind() == kind {
            let token = self.cursor.consume(0);
            self.mirror(AnalysisEntryKind::Symbol, token);
            return true;
        }
        false
    }

    /// Consumes the next token and mirrors it as a `Keyword` entry if it has
    /// the given kind.
    fn consume_keyword_if(&mut self, kind: TokenKind) -> bool {
        if self.cursor.peek(0).kind() == kind {
            let token = self.cursor.consume(0);
            self.mirror(AnalysisEntryKind::Keyword, token);
            return true;
        }
        false
    }

    fn peek_is_custom(&self, offset: usize, lexeme: &str) -> bool {
        let token = self.cursor.peek(offset);
        token.kind() == TokenKind::CustomToken && token.lexeme_is(lexeme)
    }

    /// Mirrors a structurally consumed token to the reporter.
    fn mirror(&mut self, kind: AnalysisEntryKind, token: &Token) {
        self.reporter
            .report(AnalysisEntry::new(kind, token.position(), token.length()));
    }

    fn report_error(&mut self, token: &Token, message: &str) {
        self.reporter.report(AnalysisEntry::error(
            token.position(),
            token.length().max(1),
            message,
        ));
    }

    fn report_warning(&mut self, token: &Token, message: impl Into<EcoString>) {
        self.reporter.report(AnalysisEntry::warning(
            token.position(),
            token.length().max(1),
            message,
        ));
    }
}
